//! Generic JSON GET helper for the upstream HTTP APIs.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use service_core::observability::TracedClientExt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// A summary safe to hand to clients: no upstream URL, no upstream body.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Transport { .. } => "upstream service unreachable".to_string(),
            ApiError::Status { status, .. } => format!("upstream returned {}", status.as_u16()),
            ApiError::Decode { .. } => "upstream returned an invalid response".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `<base_url><path>?k=v&..`, percent-encoding keys and values.
    pub fn url(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url.trim_end_matches('/'), path);

        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }

        url
    }

    /// Send one GET request and decode the JSON body into `T`.
    ///
    /// Trace context is propagated to the upstream service.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path, params);

        let response = self
            .client
            .traced_get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|source| {
                tracing::warn!(url = %url, error = %source, "Upstream GET request failed");
                ApiError::Transport {
                    url: url.clone(),
                    source,
                }
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        if !status.is_success() {
            tracing::warn!(url = %url, %status, "Upstream returned error status");
            return Err(ApiError::Status {
                url,
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let parsed = serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!(url = %url, error = %source, "Upstream response did not decode");
            ApiError::Decode {
                url: url.clone(),
                source,
            }
        })?;

        tracing::debug!(url = %url, %status, "Upstream GET succeeded");
        Ok(parsed)
    }
}
