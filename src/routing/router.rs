// src/routing/router.rs
use log::{info, warn};

use super::directions::DirectionsClient;
use super::traffic::fallback_route;
use crate::config::AppConfig;
use crate::types::{LatLng, RouteSegment};

/// Route source used by the dashboard. Live lookups and the offline
/// generator return the same shape, so callers never see which one ran.
#[derive(Clone, Default)]
pub struct TrafficRouter {
    live: Option<DirectionsClient>,
}

impl TrafficRouter {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.live_token() {
            Some(token) => {
                info!("🗺️ Live traffic routing enabled via {}", config.directions_base_url);
                Self::live(DirectionsClient::new(&config.directions_base_url, token, config.route_timeout))
            }
            None => {
                warn!("🗺️ Live traffic routing disabled - MAPBOX_ACCESS_TOKEN missing or placeholder, using fallback routes");
                Self::fallback_only()
            }
        }
    }

    pub fn live(client: DirectionsClient) -> Self {
        Self { live: Some(client) }
    }

    pub fn fallback_only() -> Self {
        Self { live: None }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub async fn route(&self, start: LatLng, end: LatLng, hour: u32) -> Vec<RouteSegment> {
        let Some(client) = &self.live else {
            return fallback_route(start, end, hour);
        };

        match client.fetch_route(start, end).await {
            Ok(segments) => segments,
            Err(e) => {
                warn!("🗺️ Live route {:?} -> {:?} unavailable ({}), using fallback", start, end, e);
                fallback_route(start, end, hour)
            }
        }
    }
}
