use crate::models::notice::{NoticeListQuery, PaginatedNotices};
use crate::services::api_client::ApiError;
use crate::services::notice_client::NoticeClient;

/// Entry point for page and handler code; forwards to the notice client.
pub async fn list_notices(
    client: &NoticeClient,
    query: Option<&NoticeListQuery>,
) -> Result<PaginatedNotices, ApiError> {
    client.list_notices(query).await
}
