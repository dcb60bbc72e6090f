// src/api/handlers.rs
// JSON endpoints consumed by the map front end

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::dashboard::{format_time, Dashboard};
use crate::errors::ServiceError;
use crate::types::{DemandTier, Zone, ZoneFilter};

/// Hour used when a request doesn't specify one (start of the slider).
pub const DEFAULT_HOUR: u32 = 8;

#[derive(Deserialize, Debug)]
pub struct HourQuery {
    pub hour: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct ZonesQuery {
    pub hour: Option<u32>,
    #[serde(default)]
    pub filter: ZoneFilter,
}

#[derive(Deserialize, Debug)]
pub struct RouteQuery {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub hour: Option<u32>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ZoneView {
    #[serde(flatten)]
    pub zone: Zone,
    pub tier: Option<DemandTier>,
    pub riders_required: u32,
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK, order heatmap server is running")
}

pub async fn dashboard_handler(
    dashboard: web::Data<Dashboard>,
    query: web::Query<HourQuery>,
) -> Result<HttpResponse, ServiceError> {
    let hour = query.hour.unwrap_or(DEFAULT_HOUR);
    log::info!("[DASHBOARD] Tick requested for hour {}", hour);

    let view = dashboard.derive_guarded(hour)?;
    let snapshot = dashboard.complete(view).await;
    Ok(HttpResponse::Ok().json(snapshot.as_ref()))
}

pub async fn latest_dashboard_handler(dashboard: web::Data<Dashboard>) -> Result<HttpResponse, ServiceError> {
    let snapshot = dashboard
        .latest()
        .ok_or_else(|| ServiceError::NotFound("no dashboard tick has run yet".to_string()))?;
    Ok(HttpResponse::Ok().json(snapshot.as_ref()))
}

pub async fn zones_handler(
    dashboard: web::Data<Dashboard>,
    query: web::Query<ZonesQuery>,
) -> impl Responder {
    let hour = query.hour.unwrap_or(DEFAULT_HOUR);
    let zones: Vec<ZoneView> = dashboard
        .zones_for_hour(hour)
        .into_iter()
        .filter(|z| query.filter.matches(z))
        .map(|zone| ZoneView {
            tier: zone.tier(),
            riders_required: zone.riders_required(),
            zone,
        })
        .collect();

    log::debug!("[ZONES] hour {} filter {:?}: {} zones", hour, query.filter, zones.len());
    HttpResponse::Ok().json(json!({
        "hour": hour,
        "timeLabel": format_time(hour),
        "zones": zones,
    }))
}

pub async fn route_handler(
    dashboard: web::Data<Dashboard>,
    query: web::Query<RouteQuery>,
) -> Result<HttpResponse, ServiceError> {
    let coords = [query.start_lat, query.start_lng, query.end_lat, query.end_lng];
    if coords.iter().any(|c| !c.is_finite()) {
        return Err(ServiceError::BadRequest("coordinates must be finite numbers".to_string()));
    }

    let hour = query.hour.unwrap_or(DEFAULT_HOUR);
    let segments = dashboard
        .router()
        .route((query.start_lat, query.start_lng), (query.end_lat, query.end_lng), hour)
        .await;

    Ok(HttpResponse::Ok().json(json!({
        "hour": hour,
        "live": dashboard.router().is_live(),
        "segments": segments,
    })))
}

pub async fn time_label_handler(query: web::Query<HourQuery>) -> impl Responder {
    let hour = query.hour.unwrap_or(DEFAULT_HOUR);
    HttpResponse::Ok().json(json!({ "hour": hour, "label": format_time(hour) }))
}
