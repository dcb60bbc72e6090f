// src/main.rs
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use order_heatmap::api;
use order_heatmap::config::AppConfig;
use order_heatmap::dashboard::Dashboard;

fn init_logging() {
    // log4rs.yaml next to the binary wins; otherwise plain env_logger.
    if let Err(e) = log4rs::init_file("log4rs.yaml", Default::default()) {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("order_heatmap=debug,info"));
        log::warn!("log4rs.yaml not loaded ({}), logging to stderr", e);
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_logging();

    let config = AppConfig::from_env();
    let dashboard = web::Data::new(Dashboard::from_config(&config));

    // Warm the latest snapshot so /dashboard/latest has something to serve.
    let first = dashboard.tick(config.initial_hour).await;
    log::info!(
        "Initial tick at {}: {} zones, {} warehouses, {} riders",
        first.time_label,
        first.zones.len(),
        first.warehouses.len(),
        first.riders.len()
    );

    let host = config.host.clone();
    let port = config.port;
    let frontend_origin = config.frontend_origin.clone();

    log::info!("Starting server on http://{}:{}", host, port);
    log::info!("  GET /health");
    log::info!("  GET /dashboard?hour=H");
    log::info!("  GET /dashboard/latest");
    log::info!("  GET /zones?hour=H&filter=all|red|mustard|green");
    log::info!("  GET /route?start_lat=..&start_lng=..&end_lat=..&end_lng=..&hour=H");
    log::info!("  GET /time-label?hour=H");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&frontend_origin)
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);
        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(dashboard.clone())
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
