// src/types.rs
use serde::{Deserialize, Serialize};

use crate::inventory::InventoryState;

/// Zones at or above this order count are "red zones" (hotspots).
pub const HOTSPOT_THRESHOLD: u32 = 100;
/// Lower bound of the moderate ("mustard") tier.
pub const MODERATE_THRESHOLD: u32 = 30;
/// Orders a single rider can handle per tick.
pub const ORDERS_PER_RIDER: u32 = 15;

/// Anything with a map position.
pub trait Located {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

// --- Demand ---
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub order_count: u32,
}

impl Zone {
    pub fn is_hotspot(&self) -> bool {
        self.order_count >= HOTSPOT_THRESHOLD
    }

    pub fn tier(&self) -> Option<DemandTier> {
        DemandTier::for_count(self.order_count)
    }

    pub fn riders_required(&self) -> u32 {
        (self.order_count + ORDERS_PER_RIDER - 1) / ORDERS_PER_RIDER
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DemandTier {
    Red,
    Mustard,
    Green,
}

impl DemandTier {
    /// Zones with no orders at all belong to no tier.
    pub fn for_count(order_count: u32) -> Option<Self> {
        match order_count {
            0 => None,
            c if c >= HOTSPOT_THRESHOLD => Some(DemandTier::Red),
            c if c >= MODERATE_THRESHOLD => Some(DemandTier::Mustard),
            _ => Some(DemandTier::Green),
        }
    }
}

/// Display filter applied to zones, mirrors the tier cards of the dashboard.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZoneFilter {
    #[default]
    All,
    Red,
    Mustard,
    Green,
}

impl ZoneFilter {
    pub fn matches(&self, zone: &Zone) -> bool {
        match self {
            ZoneFilter::All => true,
            ZoneFilter::Red => zone.tier() == Some(DemandTier::Red),
            ZoneFilter::Mustard => zone.tier() == Some(DemandTier::Mustard),
            ZoneFilter::Green => zone.tier() == Some(DemandTier::Green),
        }
    }
}

// --- Warehouses ---
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub zone: Zone,
    pub service_radius_m: f64,
    pub nearby_urgent_demand: u32,
    pub is_overloaded: bool,
    pub inventory: InventoryState,
    pub promotion_targets: Vec<Zone>,
}

impl Located for Zone {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

impl Located for Warehouse {
    fn lat(&self) -> f64 {
        self.zone.lat
    }

    fn lng(&self) -> f64 {
        self.zone.lng
    }
}

// --- Routing ---
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrafficColor {
    Red,
    Mustard,
    Blue,
}

impl TrafficColor {
    pub fn hex(&self) -> &'static str {
        match self {
            TrafficColor::Red => "#FF0000",
            TrafficColor::Mustard => "#E1AD01",
            TrafficColor::Blue => "#007BFF",
        }
    }
}

/// (lat, lng)
pub type LatLng = (f64, f64);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub positions: [LatLng; 2],
    pub color: TrafficColor,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RiderStop {
    pub id: String,
    pub priority: u8,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Rider {
    pub id: String,
    pub start_lat: f64,
    pub start_lng: f64,
    pub stops: Vec<RiderStop>,
    pub route_segments: Vec<RouteSegment>,
}
