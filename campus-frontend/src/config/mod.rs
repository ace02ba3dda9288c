use serde::Deserialize;
use service_core::config::{ServerConfig, TelemetryConfig};
use service_core::error::AppError;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub server: ServerConfig,
    pub notice_api: NoticeApiSettings,
    pub telemetry: TelemetryConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct NoticeApiSettings {
    /// Base URL of the public notice API; `/notices` is appended to it.
    pub public_prefix: String,
}

pub fn get_configuration() -> Result<Settings, AppError> {
    let base_path = std::env::current_dir()?;

    // Support running from the workspace root as well as the crate directory
    let configuration_directory = if base_path.ends_with("campus-frontend") {
        base_path.join("config")
    } else {
        base_path.join("campus-frontend").join("config")
    };

    service_core::config::load(&configuration_directory)
}
