//! Account routes: registration, login and profile
//!
//! Password hashing runs on the blocking thread pool; session credentials
//! are signed with the keys pre-computed in AppState.

use super::ApiJson;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::AccountService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use morpho_shared::types::{
    AccountProfile, LoginRequest, RegisterRequest, RegisterResponse, SessionToken,
};

/// Create account routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_profile))
}

/// Register a new account
///
/// POST /register
async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let account = AccountService::register(state.accounts(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            id: account.id.to_string(),
        }),
    ))
}

/// Login with email and password
///
/// POST /login
async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<SessionToken>> {
    let session =
        AccountService::login(state.accounts(), state.jwt(), &req.email, &req.password).await?;
    Ok(Json(session))
}

/// Current account profile with its last measurement snapshot
///
/// GET /me
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AccountProfile>> {
    let profile = AccountService::profile(state.accounts(), auth.account_id).await?;
    Ok(Json(profile))
}
