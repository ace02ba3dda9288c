//! Notice service client.

use crate::config::NoticeApiSettings;
use crate::models::notice::{NoticeListQuery, PaginatedNotices};
use crate::services::api_client::{ApiClient, ApiError};

const NOTICES_PATH: &str = "/notices";

pub struct NoticeClient {
    api: ApiClient,
}

impl NoticeClient {
    pub fn new(settings: &NoticeApiSettings) -> Self {
        tracing::info!(prefix = %settings.public_prefix, "Notice API client configured");

        Self {
            api: ApiClient::new(settings.public_prefix.clone()),
        }
    }

    pub fn public_prefix(&self) -> &str {
        self.api.base_url()
    }

    /// Fetch one page of notices.
    ///
    /// `None` sends no query parameters at all. Errors from the GET helper are
    /// returned as-is.
    pub async fn list_notices(
        &self,
        query: Option<&NoticeListQuery>,
    ) -> Result<PaginatedNotices, ApiError> {
        let params = query.map(NoticeListQuery::query_pairs).unwrap_or_default();
        self.api.get(NOTICES_PATH, &params).await
    }
}
