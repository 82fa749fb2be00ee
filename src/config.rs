use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub ui_config: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://api.consultbridge.io".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            ui_config: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the session-expired notice stays up before the app
    /// falls back to the sign-in view.
    pub session_redirect_delay_ms: u32,
    /// Auto-dismiss delay for transient toasts.
    pub toast_dismiss_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            session_redirect_delay_ms: 1_800,
            toast_dismiss_ms: 4_000,
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables
    /// (injected by build.rs from .env).
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.consultbridge.io").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            ui_config: UiConfig {
                session_redirect_delay_ms: option_env!("SESSION_REDIRECT_DELAY_MS")
                    .unwrap_or("1800").parse().unwrap_or(1_800),
                toast_dismiss_ms: option_env!("TOAST_DISMISS_MS")
                    .unwrap_or("4000").parse().unwrap_or(4_000),
            },
        }
    }

    /// Backend URL for the current environment
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Request timeout in milliseconds (every API call races against this)
    pub fn network_timeout_ms(&self) -> u32 {
        self.network_timeout_seconds * 1_000
    }
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:3000");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://api.consultbridge.io");
    }

    #[test]
    fn timeout_is_reported_in_milliseconds() {
        let config = AppConfig::default();
        assert_eq!(config.network_timeout_ms(), 30_000);
    }
}
