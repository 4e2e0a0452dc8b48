//! Result delivery by email

use super::ApiJson;
use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::MailService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use morpho_shared::types::{SendResultRequest, SendResultResponse};
use morpho_shared::validation::validate_request;

pub fn result_routes() -> Router<AppState> {
    Router::new().route("/send-result", post(send_result))
}

/// Email an analysis result
///
/// POST /send-result
async fn send_result(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiJson(req): ApiJson<SendResultRequest>,
) -> ApiResult<Json<SendResultResponse>> {
    validate_request(&req).map_err(ApiError::Validation)?;

    MailService::send_result(state.mailer(), &req.email, &req.result).await?;
    Ok(Json(SendResultResponse { sent: true }))
}
