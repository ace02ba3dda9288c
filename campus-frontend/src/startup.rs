use axum::{middleware::from_fn, routing::get, Router};
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    app::health_check, metrics::metrics, notices::list_notices_handler,
    redirects::redirect_routes,
};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/api/notices", get(list_notices_handler))
        .merge(redirect_routes())
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outermost, so the trace span sees the request id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
