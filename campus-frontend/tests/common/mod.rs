use campus_frontend::config::NoticeApiSettings;
use campus_frontend::services::notice_client::NoticeClient;
use campus_frontend::startup::build_router;
use campus_frontend::AppState;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;

/// Path prefix the mock notice service is mounted under.
#[allow(dead_code)]
pub const PUBLIC_PREFIX_PATH: &str = "/api/public";

#[allow(dead_code)]
pub fn notice_client(server_uri: &str) -> NoticeClient {
    NoticeClient::new(&NoticeApiSettings {
        public_prefix: format!("{}{}", server_uri, PUBLIC_PREFIX_PATH),
    })
}

/// Router wired to `server_uri`, with a metrics recorder that is not
/// installed globally so tests can build as many as they like.
#[allow(dead_code)]
pub fn app(server_uri: &str) -> axum::Router {
    let metrics = PrometheusBuilder::new().build_recorder().handle();
    build_router(AppState::new(Arc::new(notice_client(server_uri)), metrics))
}
