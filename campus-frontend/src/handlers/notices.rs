use axum::{
    extract::{Query, State},
    Json,
};
use service_core::error::AppError;

use crate::data::notices::list_notices;
use crate::models::notice::{NoticeListQuery, PaginatedNotices};
use crate::AppState;

/// Proxy one page of notices from the notice service.
pub async fn list_notices_handler(
    State(state): State<AppState>,
    Query(query): Query<NoticeListQuery>,
) -> Result<Json<PaginatedNotices>, AppError> {
    let page = list_notices(&state.notice_client, Some(&query))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list notices");
            AppError::BadGateway(e.public_message())
        })?;

    Ok(Json(page))
}
