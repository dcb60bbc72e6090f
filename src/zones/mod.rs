// src/zones/mod.rs
pub mod demand;
pub mod distance;
pub mod layout;

pub use demand::{DemandProfile, DemandSynthesizer};
pub use distance::{degree_distance, distance};
pub use layout::{ZoneLayout, ZoneSite};
