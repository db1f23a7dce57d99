//! Backend location and token lifetime.

use chrono::Duration;
use log::warn;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_TOKEN_EXPIRY_DAYS: u32 = 1;

/// Name of the push event carrying sensor updates.
pub const SENSOR_EVENT: &str = "getDataSensor";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the backend, without trailing slash
    pub backend_url: String,
    /// Lifetime of the session cookie, in days
    pub token_expiry_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            token_expiry_days: DEFAULT_TOKEN_EXPIRY_DAYS,
        }
    }
}

impl AppConfig {
    /// Build from optional raw values (environment variables, flags).
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_values(backend_url: Option<&str>, token_expiry_days: Option<&str>) -> Self {
        let backend_url = backend_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_string();

        let token_expiry_days = match token_expiry_days.map(|d| d.trim().parse::<u32>()) {
            Some(Ok(days)) if days > 0 => days,
            Some(_) => {
                warn!("invalid token expiry, using {} day(s)", DEFAULT_TOKEN_EXPIRY_DAYS);
                DEFAULT_TOKEN_EXPIRY_DAYS
            }
            None => DEFAULT_TOKEN_EXPIRY_DAYS,
        };

        Self {
            backend_url,
            token_expiry_days,
        }
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::days(i64::from(self.token_expiry_days))
    }

    /// Absolute URL for an API path such as `/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}
