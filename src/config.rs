// src/config.rs
// Runtime configuration, read from the environment (and .env via dotenv)

use std::env;
use std::time::Duration;

/// Marker carried by the placeholder token shipped with the dashboard.
pub const PLACEHOLDER_TOKEN_MARKER: &str = "fake123";
pub const DEFAULT_DIRECTIONS_BASE_URL: &str = "https://api.mapbox.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub frontend_origin: String,
    pub mapbox_token: Option<String>,
    pub directions_base_url: String,
    pub route_timeout: Duration,
    pub initial_hour: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            frontend_origin: "http://localhost:5173".to_string(),
            mapbox_token: None,
            directions_base_url: DEFAULT_DIRECTIONS_BASE_URL.to_string(),
            route_timeout: Duration::from_secs(5),
            initial_hour: 8,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("PORT")
            .unwrap_or_else(|_| defaults.port.to_string())
            .parse::<u16>()
            .unwrap_or(defaults.port);

        let route_timeout_secs = env::var("ROUTE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .unwrap_or(5);

        let initial_hour = env::var("INITIAL_HOUR")
            .unwrap_or_else(|_| defaults.initial_hour.to_string())
            .parse::<u32>()
            .unwrap_or(defaults.initial_hour);

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            frontend_origin: env::var("FRONTEND_ORIGIN").unwrap_or(defaults.frontend_origin),
            mapbox_token: env::var("MAPBOX_ACCESS_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            directions_base_url: env::var("DIRECTIONS_BASE_URL").unwrap_or(defaults.directions_base_url),
            route_timeout: Duration::from_secs(route_timeout_secs),
            initial_hour,
        }
    }

    /// The directions token, unless it is missing or the shipped placeholder.
    pub fn live_token(&self) -> Option<&str> {
        self.mapbox_token.as_deref().filter(|t| is_usable_token(t))
    }
}

pub fn is_usable_token(token: &str) -> bool {
    !token.trim().is_empty() && !token.contains(PLACEHOLDER_TOKEN_MARKER)
}
