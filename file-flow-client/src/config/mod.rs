use flow_core::error::ClientError;
use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub listing: ListingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApiSettings {
    /// Backend base URL, e.g. `http://localhost:8080/v1`.
    pub base_url: String,
    /// Bearer token forwarded on every call. Sessions established elsewhere
    /// are reused through the client's cookie store instead.
    #[serde(default)]
    pub access_token: Option<Secret<String>>,
    /// Per-request timeout. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
            timeout_secs: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ListingSettings {
    /// Rows per page, fixed for the lifetime of a listing.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

#[derive(Deserialize, Clone, Debug)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// OTLP collector, e.g. `http://tempo:4317`. Traces are not exported when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct NotificationSettings {
    /// Auto-dismiss delay for transient notifications.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

impl NotificationSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

fn default_duration_ms() -> u64 {
    2000
}

pub fn get_configuration() -> Result<Settings, ClientError> {
    let base_path = std::env::current_dir().map_err(|e| ClientError::ConfigError(e.into()))?;

    // Check if we're already in file-flow-client directory or need to navigate to it
    let configuration_directory = if base_path.ends_with("file-flow-client") {
        base_path.join("config")
    } else {
        base_path.join("file-flow-client").join("config")
    };

    let settings: Settings = flow_core::config::load_settings(&configuration_directory)?;

    if settings.listing.page_size == 0 {
        return Err(ClientError::ConfigError(anyhow::anyhow!(
            "listing.page_size must be greater than zero"
        )));
    }

    Ok(settings)
}
