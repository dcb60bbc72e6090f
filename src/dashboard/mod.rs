// src/dashboard/mod.rs
// Composes the per-tick view: demand -> warehouses -> inventory/promotions -> riders

pub mod summary;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info};
use parking_lot::RwLock;
use serde::Serialize;

use crate::config::AppConfig;
use crate::errors::ServiceError;
use crate::inventory::{classify, InventoryRegistry};
use crate::logistics::{
    is_overloaded, nearby_urgent_demand, promotion_targets, select_warehouses, uncovered_orders, warehouse_id,
    DEFAULT_PROMOTION_LIMIT, SERVICE_RADIUS_M,
};
use crate::routing::{dispatch_riders, TrafficRouter};
use crate::types::{Rider, Warehouse, Zone};
use crate::zones::{DemandSynthesizer, ZoneLayout};
pub use summary::{format_time, DemandSummary};

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub tick: u64,
    pub hour: u32,
    pub time_label: String,
    pub generated_at: DateTime<Utc>,
    pub zones: Vec<Zone>,
    pub warehouses: Vec<Warehouse>,
    pub riders: Vec<Rider>,
    pub summary: DemandSummary,
}

/// Synchronous part of a tick, before any routes are looked up.
#[derive(Debug, Clone)]
pub struct DemandView {
    pub tick: u64,
    pub hour: u32,
    pub zones: Vec<Zone>,
    pub warehouses: Vec<Warehouse>,
    pub summary: DemandSummary,
}

pub struct Dashboard {
    layout: ZoneLayout,
    synthesizer: DemandSynthesizer,
    inventory: InventoryRegistry,
    router: TrafficRouter,
    next_tick: AtomicU64,
    latest: RwLock<Option<Arc<DashboardSnapshot>>>,
}

impl Dashboard {
    pub fn new(layout: ZoneLayout, router: TrafficRouter) -> Self {
        Self {
            layout,
            synthesizer: DemandSynthesizer::default(),
            inventory: InventoryRegistry::new(),
            router,
            next_tick: AtomicU64::new(0),
            latest: RwLock::new(None),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let layout = ZoneLayout::generate(&mut rand::thread_rng());
        let dashboard = Self::new(layout, TrafficRouter::from_config(config));
        dashboard.seed_inventory(config.initial_hour);
        dashboard
    }

    /// Generate inventory up front for the warehouses picked at `hour`.
    pub fn seed_inventory(&self, hour: u32) {
        let zones = self.zones_for_hour(hour);
        let sites = select_warehouses(&zones);
        for idx in 0..sites.len() {
            self.inventory.get_or_generate(&warehouse_id(idx));
        }
        info!("📦 Seeded inventory for {} warehouses at hour {}", sites.len(), hour);
    }

    pub fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    pub fn inventory(&self) -> &InventoryRegistry {
        &self.inventory
    }

    pub fn router(&self) -> &TrafficRouter {
        &self.router
    }

    pub fn zones_for_hour(&self, hour: u32) -> Vec<Zone> {
        self.synthesizer
            .orders_for_hour(&self.layout, hour, &mut rand::thread_rng())
    }

    /// Annotate selected sites with inventory, load and promotion targets.
    pub fn build_warehouses(&self, zones: &[Zone]) -> Vec<Warehouse> {
        select_warehouses(zones)
            .into_iter()
            .enumerate()
            .map(|(idx, site)| {
                let id = warehouse_id(idx);
                let inventory = classify(&self.inventory.get_or_generate(&id));
                let nearby = nearby_urgent_demand(&site, zones);
                let promotion_targets = if inventory.is_urgent_flash_sale {
                    promotion_targets(&site, zones, DEFAULT_PROMOTION_LIMIT)
                } else {
                    Vec::new()
                };

                Warehouse {
                    id,
                    zone: site,
                    service_radius_m: SERVICE_RADIUS_M,
                    nearby_urgent_demand: nearby,
                    is_overloaded: is_overloaded(nearby),
                    inventory,
                    promotion_targets,
                }
            })
            .collect()
    }

    pub fn derive(&self, hour: u32) -> DemandView {
        let tick = self.next_tick.fetch_add(1, Ordering::SeqCst) + 1;
        let zones = self.zones_for_hour(hour);
        let warehouses = self.build_warehouses(&zones);
        let previous_red = self.latest.read().as_ref().map(|s| s.summary.red_zones);
        let summary = DemandSummary::from_zones(&zones, uncovered_orders(&zones, &warehouses), previous_red);

        debug!(
            "Tick {} (hour {}): {} warehouses, {} red zones, {} uncovered orders",
            tick,
            hour,
            warehouses.len(),
            summary.red_zones,
            summary.uncovered_orders
        );

        DemandView { tick, hour, zones, warehouses, summary }
    }

    /// `derive`, with any panic turned into a render failure.
    pub fn derive_guarded(&self, hour: u32) -> Result<DemandView, ServiceError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.derive(hour)))
            .map_err(|payload| ServiceError::RenderFailure(panic_message(payload.as_ref())))
    }

    /// Resolve riders for a view and publish the snapshot.
    pub async fn complete(&self, view: DemandView) -> Arc<DashboardSnapshot> {
        let riders = dispatch_riders(&self.router, &view.zones, &view.warehouses, view.hour).await;

        let snapshot = Arc::new(DashboardSnapshot {
            tick: view.tick,
            hour: view.hour,
            time_label: format_time(view.hour),
            generated_at: Utc::now(),
            zones: view.zones,
            warehouses: view.warehouses,
            riders,
            summary: view.summary,
        });

        self.publish(Arc::clone(&snapshot));
        snapshot
    }

    pub async fn tick(&self, hour: u32) -> Arc<DashboardSnapshot> {
        let view = self.derive(hour);
        self.complete(view).await
    }

    /// Store `snapshot` unless a newer tick already landed. Returns whether it was stored.
    pub fn publish(&self, snapshot: Arc<DashboardSnapshot>) -> bool {
        let mut latest = self.latest.write();
        if let Some(current) = latest.as_ref() {
            if current.tick > snapshot.tick {
                debug!("Discarding stale tick {} (latest is {})", snapshot.tick, current.tick);
                return false;
            }
        }
        *latest = Some(snapshot);
        true
    }

    pub fn latest(&self) -> Option<Arc<DashboardSnapshot>> {
        self.latest.read().clone()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
