// src/zones/layout.rs
// Fixed geographic zone layout. Built once at startup and shared, so zone
// identity and position never move between ticks; only demand changes.

use rand::Rng;
use serde::Serialize;

pub const NUM_ZONES: usize = 60;
pub const LAT_MIN: f64 = 30.68;
pub const LAT_MAX: f64 = 30.78;
pub const LNG_MIN: f64 = 76.70;
pub const LNG_MAX: f64 = 76.85;

/// A named location that always exists in the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

pub const MOHALI_CORE: Hotspot = Hotspot { name: "Mohali Core", lat: 30.70, lng: 76.71 };
pub const PANCHKULA_CORE: Hotspot = Hotspot { name: "Panchkula Core", lat: 30.69, lng: 76.84 };
pub const SECTOR_17: Hotspot = Hotspot { name: "Sector 17", lat: 30.738, lng: 76.782 };
pub const ELANTE_MALL: Hotspot = Hotspot { name: "Elante Mall", lat: 30.705, lng: 76.801 };
pub const SECTOR_35: Hotspot = Hotspot { name: "Sector 35", lat: 30.725, lng: 76.760 };

pub const FIXED_HOTSPOTS: [Hotspot; 5] = [MOHALI_CORE, PANCHKULA_CORE, SECTOR_17, ELANTE_MALL, SECTOR_35];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ZoneSite {
    pub id: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone)]
pub struct ZoneLayout {
    sites: Vec<ZoneSite>,
}

impl ZoneLayout {
    /// Fixed hotspots first, then random sites inside the city bounding box.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let sites = (0..NUM_ZONES)
            .map(|i| match FIXED_HOTSPOTS.get(i) {
                Some(spot) => ZoneSite {
                    id: i as u32,
                    name: spot.name.to_string(),
                    lat: spot.lat,
                    lng: spot.lng,
                },
                None => ZoneSite {
                    id: i as u32,
                    name: format!("Sector {}", rng.gen_range(1..=60)),
                    lat: rng.gen_range(LAT_MIN..LAT_MAX),
                    lng: rng.gen_range(LNG_MIN..LNG_MAX),
                },
            })
            .collect();

        Self { sites }
    }

    pub fn from_sites(sites: Vec<ZoneSite>) -> Self {
        Self { sites }
    }

    pub fn sites(&self) -> &[ZoneSite] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
