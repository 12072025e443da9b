//! Integration tests driving the full router

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use yard_api::api::http::create_router;
use yard_api::api::state::AppState;
use yard_api::config::Config;
use yard_api::yard::YardDb;

const TEST_API_KEY: &str = "test-key";
const TEST_HOST: &str = "yard.test";

fn test_app() -> Router {
    let config = Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        api_key: TEST_API_KEY.to_string(),
        max_page_size: 100,
    };
    let state = Arc::new(AppState::new(Arc::new(YardDb::seeded()), config));
    create_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::HOST, TEST_HOST)
        .header("X-API-Key", TEST_API_KEY)
        .body(Body::empty())
        .unwrap()
}

fn send_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, TEST_HOST)
        .header("X-API-Key", TEST_API_KEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::HOST, TEST_HOST)
        .header("X-API-Key", TEST_API_KEY)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response<axum::body::Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn rels(links: &Value) -> Vec<&str> {
    links
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["rel"].as_str().unwrap())
        .collect()
}

// ---- Auth ----

#[tokio::test]
async fn test_missing_api_key_is_unauthorized() {
    let app = test_app();
    let request = Request::builder()
        .uri("/api/v1/patios")
        .header(header::HOST, TEST_HOST)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_api_key_is_unauthorized() {
    let app = test_app();
    let request = Request::builder()
        .uri("/api/v1/patios")
        .header(header::HOST, TEST_HOST)
        .header("X-API-Key", "not-the-key")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_needs_no_key() {
    let app = test_app();
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ---- Pátios ----

#[tokio::test]
async fn test_list_patios_first_page_links() {
    let app = test_app();
    let response = app
        .oneshot(get("/api/v1/patios?page=1&pageSize=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 1);
    assert_eq!(body["totalItems"], 2);

    assert_eq!(rels(&body["links"]), ["self", "next"]);
    assert_eq!(
        body["links"][0]["href"],
        "http://yard.test/api/v1/patios?page=1&pageSize=1"
    );
    assert_eq!(
        body["links"][1]["href"],
        "http://yard.test/api/v1/patios?page=2&pageSize=1"
    );
}

#[tokio::test]
async fn test_list_patios_last_page_links() {
    let app = test_app();
    let body = body_json(
        app.oneshot(get("/api/v1/patios?page=2&pageSize=1"))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(body["page"], 2);
    assert_eq!(rels(&body["links"]), ["self", "prev"]);
    assert_eq!(
        body["links"][1]["href"],
        "http://yard.test/api/v1/patios?page=1&pageSize=1"
    );
}

#[tokio::test]
async fn test_list_patios_normalizes_bad_paging_input() {
    let app = test_app();
    let body = body_json(
        app.oneshot(get("/api/v1/patios?page=0&pageSize=0"))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 10);
}

#[tokio::test]
async fn test_get_patio_with_relation_links() {
    let app = test_app();
    let response = app.oneshot(get("/api/v1/patios/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "CD São Paulo");
    assert_eq!(rels(&body["links"]), ["self", "zonas"]);
    assert_eq!(body["links"][0]["href"], "http://yard.test/api/v1/patios/1");
    assert_eq!(
        body["links"][1]["href"],
        "http://yard.test/api/v1/zonas/patio/1"
    );
}

#[tokio::test]
async fn test_get_unknown_patio_is_not_found() {
    let app = test_app();
    let response = app.oneshot(get("/api/v1/patios/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_patio_sets_location_and_self_link() {
    let app = test_app();
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/v1/patios",
            json!({"name": "CD Curitiba", "city": "Curitiba", "state": "PR"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/v1/patios/3"
    );

    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], 3);
    assert_eq!(body["links"][0]["rel"], "self");
    assert_eq!(body["links"][0]["href"], "http://yard.test/api/v1/patios/3");
}

#[tokio::test]
async fn test_update_patio_is_visible_on_next_read() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(send_json(
            "PUT",
            "/api/v1/patios/1",
            json!({"name": "CD São Paulo Norte", "city": "São Paulo", "state": "SP"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = body_json(app.oneshot(get("/api/v1/patios/1")).await.unwrap()).await;
    assert_eq!(body["data"]["name"], "CD São Paulo Norte");
}

#[tokio::test]
async fn test_delete_patio_cascades_to_zonas_and_motos() {
    let app = test_app();
    let response = app.clone().oneshot(delete("/api/v1/patios/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // zona B1 went away with its pátio
    let response = app.clone().oneshot(get("/api/v1/zonas/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // its moto survived but is unallocated now
    let body = body_json(app.oneshot(get("/api/v1/motos/3")).await.unwrap()).await;
    assert!(body["data"].get("zonaId").is_none());
    assert_eq!(rels(&body["links"]), ["self"]);
}

// ---- Zonas ----

#[tokio::test]
async fn test_list_zonas_resolves_patio_name() {
    let app = test_app();
    let body = body_json(app.oneshot(get("/api/v1/zonas")).await.unwrap()).await;

    assert_eq!(body["totalItems"], 3);
    assert_eq!(body["items"][0]["name"], "A1");
    assert_eq!(body["items"][0]["patioName"], "CD São Paulo");
}

#[tokio::test]
async fn test_get_zona_links_to_motos_and_patio() {
    let app = test_app();
    let body = body_json(app.oneshot(get("/api/v1/zonas/1")).await.unwrap()).await;

    assert_eq!(rels(&body["links"]), ["self", "motos", "patio"]);
    assert_eq!(
        body["links"][1]["href"],
        "http://yard.test/api/v1/motos/zona/1"
    );
    assert_eq!(body["links"][2]["href"], "http://yard.test/api/v1/patios/1");
}

#[tokio::test]
async fn test_zonas_by_patio_is_a_single_page() {
    let app = test_app();
    let response = app.oneshot(get("/api/v1/zonas/patio/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 2);
    assert_eq!(body["totalItems"], 2);
    assert_eq!(rels(&body["links"]), ["self"]);
    assert_eq!(
        body["links"][0]["href"],
        "http://yard.test/api/v1/zonas/patio/1?page=1&pageSize=2"
    );
}

#[tokio::test]
async fn test_zonas_by_patio_empty_still_one_page() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/v1/patios",
            json!({"name": "CD Salvador", "city": "Salvador", "state": "BA"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(app.oneshot(get("/api/v1/zonas/patio/3")).await.unwrap()).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["totalItems"], 0);
    assert_eq!(body["pageSize"], 1);
    assert_eq!(rels(&body["links"]), ["self"]);
}

#[tokio::test]
async fn test_zonas_by_unknown_patio_is_not_found() {
    let app = test_app();
    let response = app.oneshot(get("/api/v1/zonas/patio/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_zona_in_unknown_patio_is_bad_request() {
    let app = test_app();
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/v1/zonas",
            json!({"name": "C1", "patioId": 999}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "PatioId inválido");
}

#[tokio::test]
async fn test_create_zona_resolves_patio_name() {
    let app = test_app();
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/v1/zonas",
            json!({"name": "B2", "patioId": 2}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/v1/zonas/4"
    );

    let body = body_json(response).await;
    assert_eq!(body["data"]["patioName"], "CD Rio de Janeiro");
}

// ---- Motos ----

#[tokio::test]
async fn test_list_motos_resolves_location() {
    let app = test_app();
    let body = body_json(app.oneshot(get("/api/v1/motos")).await.unwrap()).await;

    assert_eq!(body["totalItems"], 3);
    assert_eq!(body["items"][0]["plate"], "ABC1D23");
    assert_eq!(body["items"][0]["zonaName"], "A1");
    assert_eq!(body["items"][0]["patioName"], "CD São Paulo");
}

#[tokio::test]
async fn test_get_moto_links_to_its_zona() {
    let app = test_app();
    let body = body_json(app.oneshot(get("/api/v1/motos/2")).await.unwrap()).await;

    assert_eq!(body["data"]["status"], "Manutenção");
    assert_eq!(rels(&body["links"]), ["self", "zona"]);
    assert_eq!(body["links"][1]["href"], "http://yard.test/api/v1/zonas/2");
}

#[tokio::test]
async fn test_unallocated_moto_has_no_zona_link() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/v1/motos",
            json!({"plate": "NEW0A00", "model": "CG 160", "status": "Ativa"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(app.oneshot(get("/api/v1/motos/4")).await.unwrap()).await;
    assert!(body["data"].get("zonaId").is_none());
    assert!(body["data"].get("zonaName").is_none());
    assert_eq!(rels(&body["links"]), ["self"]);
}

#[tokio::test]
async fn test_motos_by_zona_is_a_single_page() {
    let app = test_app();
    let body = body_json(app.oneshot(get("/api/v1/motos/zona/1")).await.unwrap()).await;

    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["pageSize"], 1);
    assert_eq!(rels(&body["links"]), ["self"]);
    assert_eq!(
        body["links"][0]["href"],
        "http://yard.test/api/v1/motos/zona/1?page=1&pageSize=1"
    );
}

#[tokio::test]
async fn test_motos_by_unknown_zona_is_not_found() {
    let app = test_app();
    let response = app.oneshot(get("/api/v1/motos/zona/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_moto_in_unknown_zona_is_bad_request() {
    let app = test_app();
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/v1/motos",
            json!({"plate": "NEW0A00", "model": "CG 160", "status": "Ativa", "zonaId": 999}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "ZonaId inválida");
}

#[tokio::test]
async fn test_move_moto_between_zonas() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/v1/motos/1/mover",
            json!({"newZonaId": 2}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = body_json(app.oneshot(get("/api/v1/motos/1")).await.unwrap()).await;
    assert_eq!(body["data"]["zonaId"], 2);
    assert_eq!(body["data"]["zonaName"], "A2");
}

#[tokio::test]
async fn test_move_moto_to_unknown_zona_is_bad_request() {
    let app = test_app();
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/v1/motos/1/mover",
            json!({"newZonaId": 999}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "NovaZonaId inválida");
}

#[tokio::test]
async fn test_move_unknown_moto_is_not_found() {
    let app = test_app();
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/v1/motos/999/mover",
            json!({"newZonaId": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_moto_with_unknown_zona_is_bad_request() {
    let app = test_app();
    let response = app
        .oneshot(send_json(
            "PUT",
            "/api/v1/motos/1",
            json!({"plate": "ABC1D23", "model": "CG 160", "status": "Ativa", "zonaId": 999}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_moto() {
    let app = test_app();
    let response = app.clone().oneshot(delete("/api/v1/motos/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/api/v1/motos/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---- Analytics ----

#[tokio::test]
async fn test_maintenance_prediction() {
    let app = test_app();
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/v1/analytics/maintenance-prediction",
            json!({"daysSinceMaintenance": 30.0, "completedDeliveries": 120.0, "breakdownHistory": 2.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["requiresMaintenance"], true);
    let probability = body["probability"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&probability));
}
