pub mod app;
pub mod metrics;
pub mod notices;
pub mod redirects;
