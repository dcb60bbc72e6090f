// src/logistics/warehouses.rs
// Warehouse site selection and service coverage

use log::debug;

use crate::types::{Located, Zone};
use crate::zones::distance;

pub const MAX_WAREHOUSES: usize = 3;
/// Radius a warehouse can serve, in metres.
pub const SERVICE_RADIUS_M: f64 = 2000.0;
/// Urgent demand within the service radius above which a warehouse is overloaded.
pub const OVERLOAD_THRESHOLD: u32 = 50;

/// Stable id for the warehouse at `index` of the selection.
pub fn warehouse_id(index: usize) -> String {
    format!("wh-{}", index)
}

/// Top hotspots by order count, at most `MAX_WAREHOUSES`. Ties keep their
/// original zone order.
pub fn select_warehouses(zones: &[Zone]) -> Vec<Zone> {
    let mut hotspots: Vec<Zone> = zones.iter().filter(|z| z.is_hotspot()).cloned().collect();
    // sort_by is stable
    hotspots.sort_by(|a, b| b.order_count.cmp(&a.order_count));
    hotspots.truncate(MAX_WAREHOUSES);
    hotspots
}

pub fn is_covered<W: Located>(zone: &Zone, warehouses: &[W]) -> bool {
    warehouses
        .iter()
        .any(|wh| distance(zone.lat, zone.lng, wh.lat(), wh.lng()) <= SERVICE_RADIUS_M)
}

/// Orders in zones that no warehouse can reach.
pub fn uncovered_orders<W: Located>(zones: &[Zone], warehouses: &[W]) -> u64 {
    if warehouses.is_empty() {
        return zones.iter().map(|z| z.order_count as u64).sum();
    }

    let uncovered: u64 = zones
        .iter()
        .filter(|zone| !is_covered(zone, warehouses))
        .map(|zone| zone.order_count as u64)
        .sum();

    debug!("Coverage: {} uncovered orders across {} warehouses", uncovered, warehouses.len());
    uncovered
}

/// Sum of hotspot demand within the service radius of a site.
pub fn nearby_urgent_demand<L: Located>(site: &L, zones: &[Zone]) -> u32 {
    zones
        .iter()
        .filter(|z| z.is_hotspot())
        .filter(|z| distance(site.lat(), site.lng(), z.lat, z.lng) <= SERVICE_RADIUS_M)
        .map(|z| z.order_count)
        .sum()
}

pub fn is_overloaded(nearby_urgent_demand: u32) -> bool {
    nearby_urgent_demand > OVERLOAD_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::distance::EARTH_RADIUS_M;

    /// Latitude offset, in degrees, that spans `metres` along a meridian.
    fn lat_offset(metres: f64) -> f64 {
        (metres / EARTH_RADIUS_M).to_degrees()
    }

    fn zone(id: u32, lat: f64, lng: f64, order_count: u32) -> Zone {
        Zone {
            id,
            name: format!("Sector {}", id),
            lat,
            lng,
            order_count,
        }
    }

    #[test]
    fn test_select_top_three_descending() {
        let zones = vec![
            zone(0, 30.70, 76.71, 120),
            zone(1, 30.71, 76.72, 15),
            zone(2, 30.72, 76.73, 180),
            zone(3, 30.73, 76.74, 99),
            zone(4, 30.74, 76.75, 150),
            zone(5, 30.75, 76.76, 100),
        ];
        let selected = select_warehouses(&zones);
        let ids: Vec<u32> = selected.iter().map(|z| z.id).collect();
        assert_eq!(ids, vec![2, 4, 0]);
        assert!(selected.iter().all(|z| z.order_count >= 100));
    }

    #[test]
    fn test_select_keeps_tie_order() {
        let zones = vec![
            zone(0, 30.70, 76.71, 130),
            zone(1, 30.71, 76.72, 130),
            zone(2, 30.72, 76.73, 130),
            zone(3, 30.73, 76.74, 130),
        ];
        let ids: Vec<u32> = select_warehouses(&zones).iter().map(|z| z.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_select_none_when_no_hotspots() {
        let zones = vec![zone(0, 30.70, 76.71, 99), zone(1, 30.71, 76.72, 10)];
        assert!(select_warehouses(&zones).is_empty());
    }

    #[test]
    fn test_no_warehouses_means_everything_uncovered() {
        let zones = vec![zone(0, 30.70, 76.71, 50)];
        assert_eq!(uncovered_orders::<Zone>(&zones, &[]), 50);
    }

    #[test]
    fn test_coverage_radius() {
        let warehouse = zone(9, 30.70, 76.71, 150);

        let near = vec![zone(0, 30.70 + lat_offset(1000.0), 76.71, 80)];
        assert_eq!(uncovered_orders(&near, std::slice::from_ref(&warehouse)), 0);

        let far = vec![zone(0, 30.70 + lat_offset(2500.0), 76.71, 80)];
        assert_eq!(uncovered_orders(&far, std::slice::from_ref(&warehouse)), 80);
    }

    #[test]
    fn test_any_warehouse_covers() {
        let warehouses = vec![zone(8, 30.60, 76.71, 150), zone(9, 30.70, 76.71, 150)];
        let zones = vec![
            zone(0, 30.70 + lat_offset(500.0), 76.71, 40),
            zone(1, 30.80, 76.71, 25),
        ];
        assert_eq!(uncovered_orders(&zones, &warehouses), 25);
    }

    #[test]
    fn test_overload_counts_only_nearby_hotspots() {
        let site = zone(0, 30.70, 76.71, 150);
        let zones = vec![
            site.clone(),
            zone(1, 30.70 + lat_offset(1500.0), 76.71, 110),
            zone(2, 30.70 + lat_offset(1000.0), 76.71, 90),
            zone(3, 30.70 + lat_offset(3000.0), 76.71, 200),
        ];
        let demand = nearby_urgent_demand(&site, &zones);
        assert_eq!(demand, 260);
        assert!(is_overloaded(demand));
        assert!(!is_overloaded(50));
    }
}
