// src/api/mod.rs
pub mod handlers;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health_check))
        .route("/dashboard", web::get().to(handlers::dashboard_handler))
        .route("/dashboard/latest", web::get().to(handlers::latest_dashboard_handler))
        .route("/zones", web::get().to(handlers::zones_handler))
        .route("/route", web::get().to(handlers::route_handler))
        .route("/time-label", web::get().to(handlers::time_label_handler));
}
