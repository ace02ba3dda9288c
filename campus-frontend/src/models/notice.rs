use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Filter and pagination options for the notice listing.
///
/// Every field is optional; whatever is left out is up to the notice service
/// to default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NoticeListQuery {
    /// Present fields as `(key, value)` pairs, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }

        let text_fields = [
            ("ordering", &self.ordering),
            ("search", &self.search),
            ("department", &self.department),
            ("category", &self.category),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        }

        pairs
    }
}

/// A single notice, exactly as the notice service sent it. Its fields are
/// owned by that service and are not interpreted here.
pub type Notice = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedNotices {
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    pub results: Vec<Notice>,
}
