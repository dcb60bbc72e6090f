// src/logistics/promotions.rs
use crate::types::{Located, Zone};
use crate::zones::distance;

pub const DEFAULT_PROMOTION_LIMIT: usize = 3;

/// The `limit` hotspots closest to a warehouse, nearest first. Used to route
/// flash-sale promotions; equal distances keep zone order.
pub fn promotion_targets<L: Located>(warehouse: &L, zones: &[Zone], limit: usize) -> Vec<Zone> {
    let mut ranked: Vec<(f64, &Zone)> = zones
        .iter()
        .filter(|z| z.is_hotspot())
        .map(|z| (distance(warehouse.lat(), warehouse.lng(), z.lat, z.lng), z))
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    ranked.into_iter().take(limit).map(|(_, z)| z.clone()).collect()
}
