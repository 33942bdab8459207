//! Integration tests for the route endpoint
//!
//! Each test binds the real axum app on an ephemeral port with the
//! directions client pointed at a wiremock server playing MapQuest, then
//! drives it over HTTP like a browser would.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rutero::Config;

/// Bind the app on an ephemeral port and return its base URL
async fn spawn_app(config: Config) -> String {
    let app = rutero::server::app(config);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    format!("http://{addr}")
}

fn test_config(upstream: &MockServer) -> Config {
    Config {
        mapquest_key: Some("test-key".to_string()),
        directions_url: format!("{}/directions/v2/route", upstream.uri()),
        ..Config::default()
    }
}

fn mapquest_success_body() -> serde_json::Value {
    json!({
        "route": {
            "distance": 120.0,
            "time": 3600.0,
            "realTime": 4200.0,
            "hasTollRoad": true,
            "tollRoadDistance": 30.0,
            "legs": [
                { "maneuvers": [
                    { "narrative": "Dirígete al norte por Av. Insurgentes" },
                    { "narrative": "Incorpórate a la autopista" },
                    { "narrative": "Has llegado a tu destino" }
                ]}
            ],
            "shape": { "shapePoints": [19.4326, -99.1332, 19.30, -98.90, 19.0414, -98.2063] },
            "locations": [
                { "latLng": { "lat": 19.4326, "lng": -99.1332 } },
                { "latLng": { "lat": 19.0414, "lng": -98.2063 } }
            ]
        },
        "info": { "statuscode": 0, "messages": [] }
    })
}

#[tokio::test]
async fn test_happy_path_returns_full_summary() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/directions/v2/route"))
        .and(query_param("key", "test-key"))
        .and(query_param("from", "19.4326,-99.1332"))
        .and(query_param("to", "Puebla"))
        .and(query_param("routeType", "fastest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mapquest_success_body()))
        .expect(1)
        .mount(&upstream)
        .await;

    let base = spawn_app(test_config(&upstream)).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/ruta"))
        .json(&json!({
            "origen": "19.4326,-99.1332",
            "destino": "Puebla",
            "travelMode": "car",
            "avoids": []
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();

    assert_eq!(body["distance_km"], 120.0);
    assert_eq!(body["time_minutes"], 70.0);
    assert_eq!(body["traffic_delay_minutes"], 10);
    assert_eq!(body["toll_distance_km"], 30.0);
    assert_eq!(body["has_tolls"], true);
    assert_eq!(body["costs"]["consumo_litros"], 10.0);
    assert_eq!(body["costs"]["gasolina_mxn"], 245.0);
    assert_eq!(body["costs"]["casetas_mxn"], 105.0);
    assert_eq!(body["costs"]["total_mxn"], 350.0);
    assert_eq!(body["directions"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["shape"],
        json!([[19.4326, -99.1332], [19.30, -98.90], [19.0414, -98.2063]])
    );
    assert_eq!(body["start_lat_lng"], json!([19.4326, -99.1332]));
    assert_eq!(body["end_lat_lng"], json!([19.0414, -98.2063]));
    assert_eq!(body["travel_mode"], "car");
    assert_eq!(body["applied_avoids"], json!([]));
}

#[tokio::test]
async fn test_motorcycle_sends_limited_access_upstream() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("avoids", "Limited Access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mapquest_success_body()))
        .expect(1)
        .mount(&upstream)
        .await;

    let base = spawn_app(test_config(&upstream)).await;

    let res = reqwest::Client::new()
        .post(format!("{base}/ruta"))
        .json(&json!({
            "origen": "CDMX",
            "destino": "Puebla",
            "travelMode": "motorcycle"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["applied_avoids"], json!(["Limited Access"]));
    assert_eq!(body["travel_mode"], "motorcycle");
    // Motorcycle performance: 120 km / 25 km/l = 4.8 l
    assert_eq!(body["costs"]["consumo_litros"], 4.8);
}

#[tokio::test]
async fn test_missing_origin_is_rejected_without_upstream_call() {
    let upstream = MockServer::start().await;
    let base = spawn_app(test_config(&upstream)).await;

    let res = reqwest::Client::new()
        .post(format!("{base}/ruta"))
        .json(&json!({ "destino": "Puebla" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Se requiere el campo 'origen'");

    let requests = upstream.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_out_of_range_coordinates_are_rejected() {
    let upstream = MockServer::start().await;
    let base = spawn_app(test_config(&upstream)).await;

    let res = reqwest::Client::new()
        .post(format!("{base}/ruta"))
        .json(&json!({ "origen": "CDMX", "destino": "91.5,-99.13" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Destino inválido: Coordenadas fuera de rango.");

    let requests = upstream.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_cannot_route_gets_fixed_message() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "info": {
                "statuscode": 402,
                "messages": ["Cannot route from point A to point B"]
            }
        })))
        .mount(&upstream)
        .await;

    let base = spawn_app(test_config(&upstream)).await;

    let res = reqwest::Client::new()
        .post(format!("{base}/ruta"))
        .json(&json!({ "origen": "CDMX", "destino": "Isla remota" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["error"],
        "No se pudo encontrar una ruta. Verifica las ubicaciones y las restricciones."
    );
}

#[tokio::test]
async fn test_slow_upstream_is_a_gateway_timeout() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mapquest_success_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&upstream)
        .await;

    let mut config = test_config(&upstream);
    config.upstream_timeout = Duration::from_millis(200);
    let base = spawn_app(config).await;

    let res = reqwest::Client::new()
        .post(format!("{base}/ruta"))
        .json(&json!({ "origen": "CDMX", "destino": "Puebla" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 504);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "El servidor de rutas no respondió a tiempo.");
}

#[tokio::test]
async fn test_landing_page_injects_key() {
    let upstream = MockServer::start().await;
    let base = spawn_app(test_config(&upstream)).await;

    let res = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(res.status(), 200);
    let html = res.text().await.unwrap();
    assert!(html.contains("test-key"));
    assert!(!html.contains("{{MAPQUEST_KEY}}"));
}

#[tokio::test]
async fn test_landing_page_without_key_is_a_visible_error() {
    let upstream = MockServer::start().await;
    let mut config = test_config(&upstream);
    config.mapquest_key = None;
    let base = spawn_app(config).await;

    let res = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(res.status(), 500);
    let html = res.text().await.unwrap();
    assert!(html.contains("La API Key de MapQuest no está configurada"));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let upstream = MockServer::start().await;
    let base = spawn_app(test_config(&upstream)).await;

    let res = reqwest::get(format!("{base}/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let doc: serde_json::Value = res.json().await.unwrap();
    assert!(doc["paths"]["/ruta"]["post"].is_object());
}
