// src/routing/traffic.rs
// Congestion colouring and the deterministic offline route generator

use serde::Deserialize;

use crate::types::{LatLng, RouteSegment, TrafficColor};

pub const FALLBACK_SEGMENTS: usize = 6;
/// Full jitter span in degrees; waypoints move at most half of this.
pub const WAYPOINT_JITTER_DEG: f64 = 0.006;
pub const RUSH_HOUR_PENALTY: f64 = 0.4;
pub const OFF_PEAK_RELIEF: f64 = 0.2;

const HEAVY_DELAY: f64 = 0.65;
const MODERATE_DELAY: f64 = 0.35;

/// Congestion label as reported by the directions service.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    Low,
    Moderate,
    Heavy,
    Severe,
    #[default]
    #[serde(other)]
    Unknown,
}

impl CongestionLevel {
    pub fn color(&self) -> TrafficColor {
        match self {
            CongestionLevel::Severe | CongestionLevel::Heavy => TrafficColor::Red,
            CongestionLevel::Moderate => TrafficColor::Mustard,
            CongestionLevel::Low | CongestionLevel::Unknown => TrafficColor::Blue,
        }
    }
}

/// Colour for a 0..1 delay factor.
pub fn color_for_delay(delay_factor: f64) -> TrafficColor {
    if delay_factor > HEAVY_DELAY {
        TrafficColor::Red
    } else if delay_factor > MODERATE_DELAY {
        TrafficColor::Mustard
    } else {
        TrafficColor::Blue
    }
}

pub fn is_rush_hour(hour: u32) -> bool {
    (8..=10).contains(&hour) || (17..=20).contains(&hour)
}

/// Repeatable value in [0, 1) derived from `seed`.
pub fn pseudo_random(seed: f64) -> f64 {
    let x = seed.sin() * 10000.0;
    x - x.floor()
}

/// Delay factor for segment `index`, pushed up in rush hour and eased off-peak.
pub fn segment_delay(base_seed: f64, index: usize, hour: u32) -> f64 {
    let delay = pseudo_random(base_seed + index as f64 + 20.0);
    if is_rush_hour(hour) {
        (delay + RUSH_HOUR_PENALTY).min(1.0)
    } else {
        (delay - OFF_PEAK_RELIEF).max(0.0)
    }
}

/// A jittered straight-line route used whenever live directions are
/// unavailable. Same inputs always give the same segments.
pub fn fallback_route(start: LatLng, end: LatLng, hour: u32) -> Vec<RouteSegment> {
    let (start_lat, start_lng) = start;
    let (end_lat, end_lng) = end;
    let base_seed = start_lat + end_lng + hour as f64;

    let mut waypoints: Vec<LatLng> = Vec::with_capacity(FALLBACK_SEGMENTS + 1);
    waypoints.push(start);
    for i in 1..FALLBACK_SEGMENTS {
        let fraction = i as f64 / FALLBACK_SEGMENTS as f64;
        let jitter_lat = pseudo_random(base_seed + i as f64) - 0.5;
        let jitter_lng = pseudo_random(base_seed + i as f64 + 10.0) - 0.5;

        waypoints.push((
            start_lat + (end_lat - start_lat) * fraction + jitter_lat * WAYPOINT_JITTER_DEG,
            start_lng + (end_lng - start_lng) * fraction + jitter_lng * WAYPOINT_JITTER_DEG,
        ));
    }
    waypoints.push(end);

    waypoints
        .windows(2)
        .enumerate()
        .map(|(i, pair)| RouteSegment {
            positions: [pair[0], pair[1]],
            color: color_for_delay(segment_delay(base_seed, i, hour)),
        })
        .collect()
}
