// src/inventory/mod.rs
pub mod engine;
pub mod registry;

pub use engine::{classify, discount_for, generate_inventory, Category, InventoryItem, InventoryRecord, InventoryState};
pub use registry::InventoryRegistry;
