// src/routing/directions.rs
// Live traffic-aware directions (Mapbox driving-traffic profile)

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::traffic::CongestionLevel;
use crate::errors::RoutingError;
use crate::types::{LatLng, RouteSegment};

#[derive(Deserialize, Debug)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Deserialize, Debug)]
pub struct DirectionsRoute {
    pub geometry: RouteGeometry,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Deserialize, Debug)]
pub struct RouteGeometry {
    /// GeoJSON order: [lng, lat]
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize, Debug)]
pub struct RouteLeg {
    #[serde(default)]
    pub annotation: Option<LegAnnotation>,
}

#[derive(Deserialize, Debug)]
pub struct LegAnnotation {
    #[serde(default)]
    pub congestion: Option<Vec<Option<CongestionLevel>>>,
}

/// Turn the first route of a response into coloured segments. Segments with
/// no congestion entry are treated as `unknown`.
pub fn segments_from_response(response: DirectionsResponse) -> Result<Vec<RouteSegment>, RoutingError> {
    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| RoutingError::Malformed("no routes returned".to_string()))?;

    let coordinates = route.geometry.coordinates;
    if coordinates.len() < 2 {
        return Err(RoutingError::Malformed(format!(
            "route geometry has {} coordinates",
            coordinates.len()
        )));
    }

    let congestion: Vec<Option<CongestionLevel>> = route
        .legs
        .into_iter()
        .next()
        .and_then(|leg| leg.annotation)
        .and_then(|annotation| annotation.congestion)
        .unwrap_or_default();

    let segments = coordinates
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let level = congestion.get(i).copied().flatten().unwrap_or_default();
            RouteSegment {
                positions: [(pair[0][1], pair[0][0]), (pair[1][1], pair[1][0])],
                color: level.color(),
            }
        })
        .collect();

    Ok(segments)
}

#[derive(Clone)]
pub struct DirectionsClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl DirectionsClient {
    pub fn new(base_url: &str, access_token: &str, timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            warn!("🗺️ Could not build timed HTTP client ({}), using defaults", e);
            Client::new()
        });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        }
    }

    pub fn request_url(&self, start: LatLng, end: LatLng) -> Result<Url, RoutingError> {
        let mut url = Url::parse(&format!(
            "{}/directions/v5/mapbox/driving-traffic/{},{};{},{}",
            self.base_url, start.1, start.0, end.1, end.0
        ))?;
        url.query_pairs_mut()
            .append_pair("geometries", "geojson")
            .append_pair("annotations", "congestion")
            .append_pair("access_token", &self.access_token);
        Ok(url)
    }

    pub async fn fetch_route(&self, start: LatLng, end: LatLng) -> Result<Vec<RouteSegment>, RoutingError> {
        let url = self.request_url(start, end)?;
        debug!("🗺️ Requesting directions {:?} -> {:?}", start, end);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(RoutingError::Status(response.status()));
        }

        let body: DirectionsResponse = response
            .json()
            .await
            .map_err(|e| RoutingError::Malformed(e.to_string()))?;

        segments_from_response(body)
    }
}
