//! Spreadsheet export route

use super::ApiJson;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::export::{ExportService, CSV_FILENAME};
use crate::state::AppState;
use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::post,
    Router,
};
use morpho_shared::Measurements;

pub fn export_routes() -> Router<AppState> {
    Router::new().route("/export/csv", post(export_csv))
}

/// POST /export/csv - Analysis sheet as a CSV attachment
async fn export_csv(
    _auth: AuthUser,
    ApiJson(measurements): ApiJson<Measurements>,
) -> Result<impl IntoResponse, ApiError> {
    let csv = ExportService::export_csv(&measurements)?;

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", CSV_FILENAME))
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid header value: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(header::CONTENT_DISPOSITION, disposition);

    Ok((headers, csv))
}
