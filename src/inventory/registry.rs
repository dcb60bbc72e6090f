// src/inventory/registry.rs
// Run-once-per-id store of warehouse inventory batches

use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use super::engine::{generate_inventory, InventoryRecord};

/// Inventory batches keyed by warehouse id. Batches are generated the first
/// time an id is looked up and never regenerated afterwards.
#[derive(Default)]
pub struct InventoryRegistry {
    records: RwLock<HashMap<String, Arc<Vec<InventoryRecord>>>>,
}

impl InventoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, warehouse_id: &str) -> Option<Arc<Vec<InventoryRecord>>> {
        self.records.read().get(warehouse_id).cloned()
    }

    pub fn get_or_generate(&self, warehouse_id: &str) -> Arc<Vec<InventoryRecord>> {
        if let Some(existing) = self.get(warehouse_id) {
            return existing;
        }

        // Re-check under the write lock; another caller may have won the race.
        let mut records = self.records.write();
        records
            .entry(warehouse_id.to_string())
            .or_insert_with(|| {
                let batches = generate_inventory(warehouse_id, &mut rand::thread_rng());
                info!("📦 Generated {} inventory batches for {}", batches.len(), warehouse_id);
                Arc::new(batches)
            })
            .clone()
    }

    /// Seed an id with known batches. Ignored if the id already has inventory.
    #[cfg(test)]
    pub(crate) fn insert_if_absent(&self, warehouse_id: &str, batches: Vec<InventoryRecord>) -> bool {
        let mut records = self.records.write();
        if records.contains_key(warehouse_id) {
            return false;
        }
        records.insert(warehouse_id.to_string(), Arc::new(batches));
        true
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.records.read().len()
    }
}
