// src/logistics/mod.rs
pub mod promotions;
pub mod warehouses;

pub use promotions::{promotion_targets, DEFAULT_PROMOTION_LIMIT};
pub use warehouses::{
    is_covered, is_overloaded, nearby_urgent_demand, select_warehouses, uncovered_orders, warehouse_id,
    SERVICE_RADIUS_M,
};
