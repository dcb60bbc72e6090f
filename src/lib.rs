// src/lib.rs
pub mod api;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod inventory;
pub mod logistics;
pub mod routing;
pub mod types;
pub mod zones;
