pub mod api_client;
pub mod metrics;
pub mod notice_client;
