//! Classification route

use super::ApiJson;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::AnalysisService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use morpho_shared::{AnalysisResult, Measurements};

pub fn analysis_routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}

/// Classify measurements
///
/// POST /analyze
async fn analyze(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(measurements): ApiJson<Measurements>,
) -> ApiResult<Json<AnalysisResult>> {
    let result = AnalysisService::analyze(
        state.accounts(),
        auth.account_id,
        measurements,
        state.config().analysis.persist_snapshot,
    )
    .await?;

    Ok(Json(result))
}
