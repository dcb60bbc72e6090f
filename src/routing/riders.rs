// src/routing/riders.rs
// Builds the active riders for a tick, one route lookup per rider, all in flight at once

use futures::future::join_all;
use log::{debug, error};

use super::router::TrafficRouter;
use super::traffic::fallback_route;
use crate::types::{Located, Rider, RiderStop, Zone};

/// Number of highest-demand zones that get a rider each tick.
pub const MAX_ACTIVE_RIDERS: usize = 15;

/// Top zones by demand, highest first, ties in zone order.
pub fn busiest_zones(zones: &[Zone], limit: usize) -> Vec<Zone> {
    let mut sorted = zones.to_vec();
    sorted.sort_by(|a, b| b.order_count.cmp(&a.order_count));
    sorted.truncate(limit);
    sorted
}

/// Rider `i` leaves warehouse `i % warehouses.len()` for the i-th busiest zone.
/// Returns riders in that order once every route has resolved.
pub async fn dispatch_riders<W: Located>(
    router: &TrafficRouter,
    zones: &[Zone],
    warehouses: &[W],
    hour: u32,
) -> Vec<Rider> {
    if warehouses.is_empty() {
        return Vec::new();
    }

    let targets = busiest_zones(zones, MAX_ACTIVE_RIDERS);
    let legs: Vec<((f64, f64), (f64, f64))> = targets
        .iter()
        .enumerate()
        .map(|(i, zone)| {
            let wh = &warehouses[i % warehouses.len()];
            ((wh.lat(), wh.lng()), (zone.lat, zone.lng))
        })
        .collect();

    let tasks: Vec<_> = legs
        .iter()
        .map(|&(start, end)| {
            let task_router = router.clone();
            tokio::spawn(async move { task_router.route(start, end, hour).await })
        })
        .collect();

    let outcomes = join_all(tasks).await;

    let riders: Vec<Rider> = outcomes
        .into_iter()
        .zip(legs)
        .enumerate()
        .map(|(i, (outcome, (start, end)))| {
            let route_segments = match outcome {
                Ok(segments) => segments,
                Err(e) => {
                    error!("Route task for Rider-{} failed (join error): {:?}", i + 1, e);
                    fallback_route(start, end, hour)
                }
            };
            Rider {
                id: format!("Rider-{}", i + 1),
                start_lat: start.0,
                start_lng: start.1,
                stops: vec![RiderStop {
                    id: format!("stop-{}", i),
                    priority: 1,
                }],
                route_segments,
            }
        })
        .collect();

    debug!("Dispatched {} riders from {} warehouses", riders.len(), warehouses.len());
    riders
}
