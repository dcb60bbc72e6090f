// src/inventory/engine.rs
// Mock inventory batches and expiry-driven markdown rules

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Batches under this many days to expiry go on flash sale.
pub const FLASH_SALE_DTE: u8 = 3;
/// Flash-sale share of total stock above which a warehouse is "urgent".
pub const URGENT_FLASH_SALE_RATIO: f64 = 0.20;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Dairy,
    Produce,
    Meat,
    Bakery,
    Pantry,
}

pub const CATEGORIES: [Category; 5] = [
    Category::Dairy,
    Category::Produce,
    Category::Meat,
    Category::Bakery,
    Category::Pantry,
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    pub id: String,
    pub category: Category,
    /// Days to expiry.
    pub shelf_life_days: u8,
    pub stock: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(flatten)]
    pub record: InventoryRecord,
    pub is_flash_sale: bool,
    pub discount: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InventoryState {
    pub items: Vec<InventoryItem>,
    pub total_stock: u64,
    pub flash_sale_stock: u64,
    pub is_urgent_flash_sale: bool,
}

/// 5 to 10 random batches for a warehouse.
pub fn generate_inventory<R: Rng + ?Sized>(warehouse_id: &str, rng: &mut R) -> Vec<InventoryRecord> {
    let num_batches = rng.gen_range(5..=10);

    (0..num_batches)
        .map(|i| InventoryRecord {
            id: format!("inv-{}-{}", warehouse_id, i),
            category: *CATEGORIES.choose(rng).unwrap_or(&Category::Pantry),
            shelf_life_days: rng.gen_range(0..=10),
            stock: rng.gen_range(50..500),
        })
        .collect()
}

/// Markdown for a batch with `dte` days to expiry.
pub fn discount_for(dte: u8) -> f64 {
    match dte {
        d if d > 5 => 0.0,
        d if d >= FLASH_SALE_DTE => 0.15,
        _ => 0.40,
    }
}

pub fn is_flash_sale(record: &InventoryRecord) -> bool {
    record.shelf_life_days < FLASH_SALE_DTE
}

pub fn classify(records: &[InventoryRecord]) -> InventoryState {
    let mut total_stock = 0u64;
    let mut flash_sale_stock = 0u64;

    let items = records
        .iter()
        .map(|record| {
            let flash = is_flash_sale(record);
            total_stock += record.stock as u64;
            if flash {
                flash_sale_stock += record.stock as u64;
            }
            InventoryItem {
                record: record.clone(),
                is_flash_sale: flash,
                discount: discount_for(record.shelf_life_days),
            }
        })
        .collect();

    let flash_sale_ratio = if total_stock > 0 {
        flash_sale_stock as f64 / total_stock as f64
    } else {
        0.0
    };

    InventoryState {
        items,
        total_stock,
        flash_sale_stock,
        is_urgent_flash_sale: flash_sale_ratio > URGENT_FLASH_SALE_RATIO,
    }
}
