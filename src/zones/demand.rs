// src/zones/demand.rs
// Hour-of-day demand synthesis over the fixed zone layout

use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use super::distance::degree_distance;
use super::layout::{Hotspot, ZoneLayout, ELANTE_MALL, MOHALI_CORE, PANCHKULA_CORE, SECTOR_17, SECTOR_35};
use crate::types::Zone;

/// Radius, in degrees, around a hotspot that receives the boost.
pub const BOOST_RADIUS_DEG: f64 = 0.02;
/// Flat bump occasionally given to non-boosted zones.
pub const MEDIUM_ZONE_BUMP: u32 = 40;
pub const MEDIUM_ZONE_PROBABILITY: f64 = 0.2;

/// A time window during which zones near the listed hotspots get extra orders.
#[derive(Debug, Clone)]
pub struct DemandProfile {
    pub hours: RangeInclusive<u32>,
    pub hotspots: &'static [Hotspot],
    pub boost: u32,
}

const MORNING_SPOTS: [Hotspot; 2] = [MOHALI_CORE, PANCHKULA_CORE];
const AFTERNOON_SPOTS: [Hotspot; 1] = [SECTOR_17];
const EVENING_SPOTS: [Hotspot; 2] = [ELANTE_MALL, SECTOR_35];

pub fn default_profiles() -> Vec<DemandProfile> {
    vec![
        DemandProfile { hours: 8..=10, hotspots: &MORNING_SPOTS, boost: 100 },
        DemandProfile { hours: 13..=15, hotspots: &AFTERNOON_SPOTS, boost: 150 },
        DemandProfile { hours: 19..=21, hotspots: &EVENING_SPOTS, boost: 120 },
    ]
}

/// Boost for a single location at `hour`. Hours outside every profile get 0.
pub fn hotspot_boost(profiles: &[DemandProfile], hour: u32, lat: f64, lng: f64) -> u32 {
    let Some(profile) = profiles.iter().find(|p| p.hours.contains(&hour)) else {
        return 0;
    };

    profile
        .hotspots
        .iter()
        .filter(|spot| degree_distance(lat, lng, spot.lat, spot.lng) < BOOST_RADIUS_DEG)
        .map(|_| profile.boost)
        .sum()
}

pub struct DemandSynthesizer {
    profiles: Vec<DemandProfile>,
}

impl Default for DemandSynthesizer {
    fn default() -> Self {
        Self::new(default_profiles())
    }
}

impl DemandSynthesizer {
    pub fn new(profiles: Vec<DemandProfile>) -> Self {
        Self { profiles }
    }

    /// Fresh order counts for every zone in the layout. Every call draws new
    /// noise, so two calls for the same hour differ.
    pub fn orders_for_hour<R: Rng + ?Sized>(&self, layout: &ZoneLayout, hour: u32, rng: &mut R) -> Vec<Zone> {
        let zones: Vec<Zone> = layout
            .sites()
            .iter()
            .map(|site| {
                let base_vol: u32 = rng.gen_range(1..=20);
                let mut boost = hotspot_boost(&self.profiles, hour, site.lat, site.lng);

                if boost > 0 {
                    boost += rng.gen_range(0..50);
                } else if rng.gen_bool(MEDIUM_ZONE_PROBABILITY) {
                    boost += MEDIUM_ZONE_BUMP;
                }

                Zone {
                    id: site.id,
                    name: site.name.clone(),
                    lat: site.lat,
                    lng: site.lng,
                    order_count: base_vol + boost,
                }
            })
            .collect();

        debug!(
            "Synthesized demand for hour {}: {} zones, {} orders",
            hour,
            zones.len(),
            zones.iter().map(|z| z.order_count as u64).sum::<u64>()
        );
        zones
    }
}
