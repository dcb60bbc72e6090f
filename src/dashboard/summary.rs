// src/dashboard/summary.rs
use serde::Serialize;

use crate::types::{DemandTier, Zone};

/// Relative growth in red zones that triggers the surge alert.
pub const SURGE_GROWTH: f64 = 1.1;

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DemandSummary {
    pub total_orders: u64,
    pub red_zones: usize,
    pub mustard_zones: usize,
    pub green_zones: usize,
    pub uncovered_orders: u64,
    pub surge_alert: bool,
}

impl DemandSummary {
    pub fn from_zones(zones: &[Zone], uncovered_orders: u64, previous_red_zones: Option<usize>) -> Self {
        let count = |tier: DemandTier| zones.iter().filter(|z| z.tier() == Some(tier)).count();
        let red_zones = count(DemandTier::Red);

        Self {
            total_orders: zones.iter().map(|z| z.order_count as u64).sum(),
            red_zones,
            mustard_zones: count(DemandTier::Mustard),
            green_zones: count(DemandTier::Green),
            uncovered_orders,
            surge_alert: previous_red_zones.map_or(false, |prev| is_surge(prev, red_zones)),
        }
    }
}

/// More than 10% growth over a non-empty previous red-zone count.
pub fn is_surge(previous: usize, current: usize) -> bool {
    previous > 0 && current as f64 > previous as f64 * SURGE_GROWTH
}

/// "H:00 AM/PM" label for the time slider. Hours past 23 wrap around.
pub fn format_time(hour: u32) -> String {
    let hour = hour % 24;
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:00 {}", display, period)
}
