// Integration tests for Salon Match

use actix_web::{http::StatusCode, test, web, App};
use salon_match::core::{RecommendationMatcher, StyleHeuristic};
use salon_match::error::handle_json_payload_error;
use salon_match::routes::{self, recommendations::AppState};
use salon_match::services::{CatalogCache, CatalogClient};
use serde_json::{json, Value};
use std::sync::Arc;

fn app_state(catalog_url: &str) -> AppState {
    AppState {
        catalog: Arc::new(CatalogClient::new(catalog_url.to_string(), None, 5).unwrap()),
        cache: Arc::new(CatalogCache::new(4, 60)),
        matcher: RecommendationMatcher::default(),
        heuristic: StyleHeuristic::default(),
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(routes::configure_routes),
        )
        .await
    };
}

fn services_json() -> Value {
    json!([
        {"id": "svc1", "name": "Modern Fade Cut", "description": "", "durationMinutes": 45, "priceCents": 3500},
        {"id": "svc2", "name": "Basic Cut", "description": "modern style", "durationMinutes": 30, "priceCents": 2500},
        {"id": "svc3", "name": "Shave", "description": "hot towel", "durationMinutes": 20, "priceCents": 1500}
    ])
}

fn stylists_json() -> Value {
    json!([
        {"id": "sty1", "name": "Robin", "specialties": ["Color"], "bio": ""},
        {"id": "sty2", "name": "Sam", "specialties": ["fade specialist"], "bio": ""}
    ])
}

// Nothing listens on the discard port; any backend call fails
const UNREACHABLE: &str = "http://127.0.0.1:9";

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!(app_state(UNREACHABLE));

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_match_with_inline_catalogs() {
    let app = init_app!(app_state(UNREACHABLE));

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations/match")
        .set_json(json!({
            "recommendations": [
                {"styleName": "Modern Fade", "confidenceScore": 92, "matchingServiceIds": [], "recommendedStylistIds": ["gone"]},
                {"styleName": "Pompadour", "confidenceScore": 88, "matchingServiceIds": [], "recommendedStylistIds": []}
            ],
            "services": services_json(),
            "stylists": stylists_json()
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["totalRecommendations"], 2);

    let first = &body["recommendations"][0];
    assert_eq!(first["styleName"], "Modern Fade");
    assert_eq!(first["matchedServices"][0]["id"], "svc1");
    assert_eq!(first["matchedServices"][1]["id"], "svc2");
    assert_eq!(first["recommendedStylists"][0]["id"], "sty2");
    assert!(first.get("closestService").is_none());

    let second = &body["recommendations"][1];
    assert_eq!(second["matchedServices"], json!([]));
    assert_eq!(second["closestService"]["id"], "svc1");
}

#[actix_web::test]
async fn test_match_rejects_out_of_range_confidence() {
    let app = init_app!(app_state(UNREACHABLE));

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations/match")
        .set_json(json!({
            "recommendations": [{"styleName": "Fade", "confidenceScore": 150}],
            "services": [],
            "stylists": []
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_failed");
}

#[actix_web::test]
async fn test_invalid_json_returns_json_error() {
    let app = init_app!(app_state(UNREACHABLE));

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations/match")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_match_fetches_catalogs_from_backend_once() {
    let mut server = mockito::Server::new_async().await;
    let services_mock = server
        .mock("GET", "/services")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(services_json().to_string())
        .expect(1)
        .create_async()
        .await;
    let stylists_mock = server
        .mock("GET", "/stylists")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"documents": stylists_json()}).to_string())
        .expect(1)
        .create_async()
        .await;

    let app = init_app!(app_state(&server.url()));

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/v1/recommendations/match")
            .set_json(json!({
                "recommendations": [{"styleName": "Fade", "confidenceScore": 90, "matchingServiceIds": ["svc3"]}]
            }))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["recommendations"][0]["matchedServices"][0]["id"], "svc3");
        assert_eq!(body["recommendations"][0]["recommendedStylists"][0]["id"], "sty2");
    }

    // Second request is served from the cached snapshot
    services_mock.assert_async().await;
    stylists_mock.assert_async().await;
}

#[actix_web::test]
async fn test_backend_failure_maps_to_bad_gateway() {
    let mut server = mockito::Server::new_async().await;
    let _services = server.mock("GET", "/services").with_status(500).create_async().await;
    let _stylists = server
        .mock("GET", "/stylists")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let app = init_app!(app_state(&server.url()));

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations/match")
        .set_json(json!({"recommendations": []}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "catalog_unavailable");
}

#[actix_web::test]
async fn test_generate_from_description() {
    let app = init_app!(app_state(UNREACHABLE));

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations/generate")
        .set_json(json!({
            "description": "Short and modern, maybe something edgy",
            "services": services_json(),
            "stylists": stylists_json()
        }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalRecommendations"], 2);
    let first = &body["recommendations"][0];
    assert_eq!(first["styleName"], "Modern Fade");
    assert_eq!(first["confidenceScore"], 92);
    assert_eq!(first["matchingServiceIds"], json!(["svc1", "svc2"]));
    assert_eq!(first["matchedServices"][0]["id"], "svc1");
    assert_eq!(first["recommendedStylists"][0]["id"], "sty2");
    assert_eq!(body["recommendations"][1]["styleName"], "Undercut Style");
}

#[actix_web::test]
async fn test_generate_rejects_empty_description() {
    let app = init_app!(app_state(UNREACHABLE));

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations/generate")
        .set_json(json!({"description": "", "services": [], "stylists": []}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_accept_uses_closest_and_first_stylist() {
    let app = init_app!(app_state(UNREACHABLE));

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations/accept")
        .set_json(json!({
            "recommendation": {
                "styleName": "Pompadour",
                "confidenceScore": 88,
                "matchedServices": [],
                "recommendedStylists": [],
                "closestService": services_json()[2]
            },
            "stylists": stylists_json()
        }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({"serviceId": "svc3", "stylistId": "sty1"}));
}

#[actix_web::test]
async fn test_accept_without_service_is_unprocessable() {
    let app = init_app!(app_state(UNREACHABLE));

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations/accept")
        .set_json(json!({
            "recommendation": {
                "styleName": "Pompadour",
                "confidenceScore": 88,
                "recommendedStylists": stylists_json()
            }
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
