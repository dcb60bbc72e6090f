// tests/api_integration_tests.rs
//
// Exercises the JSON endpoints end to end with fallback routing, so no
// network access is needed.

use actix_web::{test, web, App};
use serde_json::Value;

use order_heatmap::api;
use order_heatmap::dashboard::Dashboard;
use order_heatmap::routing::{fallback_route, TrafficRouter};
use order_heatmap::zones::{ZoneLayout, ZoneSite};

fn test_dashboard() -> web::Data<Dashboard> {
    let layout = ZoneLayout::generate(&mut rand::thread_rng());
    web::Data::new(Dashboard::new(layout, TrafficRouter::fallback_only()))
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(App::new().app_data(test_dashboard()).configure(api::configure)).await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_dashboard_snapshot_shape() {
    let app = test::init_service(App::new().app_data(test_dashboard()).configure(api::configure)).await;
    let req = test::TestRequest::get().uri("/dashboard?hour=9").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["hour"], 9);
    assert_eq!(body["timeLabel"], "9:00 AM");
    assert_eq!(body["zones"].as_array().unwrap().len(), 60);

    let warehouses = body["warehouses"].as_array().unwrap();
    assert!(warehouses.len() <= 3);
    for wh in warehouses {
        assert!(wh["zone"]["orderCount"].as_u64().unwrap() >= 100);
        assert!(wh["inventory"]["totalStock"].as_u64().is_some());
        assert!(wh["inventory"]["isUrgentFlashSale"].is_boolean());
    }
    for rider in body["riders"].as_array().unwrap() {
        assert_eq!(rider["routeSegments"].as_array().unwrap().len(), 6);
    }
}

#[actix_web::test]
async fn test_latest_requires_a_tick() {
    let app = test::init_service(App::new().app_data(test_dashboard()).configure(api::configure)).await;

    let req = test::TestRequest::get().uri("/dashboard/latest").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/dashboard?hour=20").to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get().uri("/dashboard/latest").to_request();
    let latest: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(latest["hour"], 20);
    assert_eq!(latest["timeLabel"], "8:00 PM");
}

#[actix_web::test]
async fn test_zones_filter_red() {
    let layout = ZoneLayout::from_sites(vec![
        ZoneSite { id: 0, name: "Sector 17".to_string(), lat: 30.738, lng: 76.782 },
        ZoneSite { id: 1, name: "Sector 44".to_string(), lat: 30.78, lng: 76.70 },
    ]);
    let dashboard = web::Data::new(Dashboard::new(layout, TrafficRouter::fallback_only()));
    let app = test::init_service(App::new().app_data(dashboard).configure(api::configure)).await;

    let req = test::TestRequest::get().uri("/zones?hour=14&filter=red").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let zones = body["zones"].as_array().unwrap();

    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0]["name"], "Sector 17");
    assert_eq!(zones[0]["tier"], "red");
    let orders = zones[0]["orderCount"].as_u64().unwrap();
    assert_eq!(zones[0]["ridersRequired"].as_u64().unwrap(), (orders + 14) / 15);
}

#[actix_web::test]
async fn test_route_matches_fallback() {
    let app = test::init_service(App::new().app_data(test_dashboard()).configure(api::configure)).await;
    let uri = "/route?start_lat=30.7&start_lng=76.71&end_lat=30.738&end_lng=76.782&hour=18";

    let first: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let second: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(first["live"], false);
    assert_eq!(first["segments"], second["segments"]);

    // Parse the expected side from text too, so both go through the same float parser.
    let expected_text = serde_json::to_string(&fallback_route((30.7, 76.71), (30.738, 76.782), 18)).unwrap();
    let expected: Value = serde_json::from_str(&expected_text).unwrap();
    assert_eq!(first["segments"], expected);
}

#[actix_web::test]
async fn test_hour_out_of_u32_range_is_rejected() {
    let app = test::init_service(App::new().app_data(test_dashboard()).configure(api::configure)).await;

    let req = test::TestRequest::get().uri("/dashboard?hour=-1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

    // Large but valid hours take the no-boost path
    let req = test::TestRequest::get().uri("/dashboard?hour=4294967295").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["zones"].as_array().unwrap().len(), 60);
    assert_eq!(body["timeLabel"], "3:00 PM");
}

#[actix_web::test]
async fn test_time_label_edge_cases() {
    let app = test::init_service(App::new().app_data(test_dashboard()).configure(api::configure)).await;
    for (hour, label) in [(0, "12:00 AM"), (12, "12:00 PM"), (23, "11:00 PM")] {
        let req = test::TestRequest::get().uri(&format!("/time-label?hour={}", hour)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["label"], label);
    }
}
