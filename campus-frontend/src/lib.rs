pub mod config;
pub mod data;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use metrics_exporter_prometheus::PrometheusHandle;
use services::notice_client::NoticeClient;
use std::sync::Arc;

/// Shared application state containing service clients
#[derive(Clone)]
pub struct AppState {
    pub notice_client: Arc<NoticeClient>,
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(notice_client: Arc<NoticeClient>, metrics: PrometheusHandle) -> Self {
        Self {
            notice_client,
            metrics,
        }
    }
}
