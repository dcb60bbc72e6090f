// src/routing/mod.rs
pub mod directions;
pub mod riders;
pub mod router;
pub mod traffic;

pub use directions::DirectionsClient;
pub use riders::{dispatch_riders, MAX_ACTIVE_RIDERS};
pub use router::TrafficRouter;
pub use traffic::{fallback_route, CongestionLevel};
