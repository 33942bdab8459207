//! HTTP transport shell
//!
//! Thin axum layer over the core: one landing page, one route endpoint, and
//! the OpenAPI document. A single boundary adapter maps domain errors to
//! status codes, so handlers never panic and never need a catch-all.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::{
    build_avoids, normalize, validate_location, Config, CostBreakdown, CostCalculator,
    DirectionsClient, Error, LocationField, RouteSummary, TravelMode,
};

const LANDING_TEMPLATE: &str = include_str!("../templates/index.html");
const MISSING_KEY_PAGE: &str =
    "<h1>Error: La API Key de MapQuest no está configurada en el servidor.</h1>";

/// Shared, immutable per-process state
struct AppState {
    client: DirectionsClient,
    costs: CostCalculator,
    mapquest_key: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(route_handler),
    components(schemas(RouteRequest, RouteSummary, CostBreakdown, ErrorResponse))
)]
struct ApiDoc;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RouteRequest {
    /// Origin: place name or "lat,lng"
    #[serde(default)]
    #[schema(example = "19.4326,-99.1332")]
    pub origen: String,

    /// Destination: place name or "lat,lng"
    #[serde(default)]
    #[schema(example = "Puebla, México")]
    pub destino: String,

    /// Travel mode: car, motorcycle, pedestrian, ...
    #[serde(default = "default_travel_mode", rename = "travelMode")]
    #[schema(example = "car")]
    pub travel_mode: String,

    /// Road categories to avoid
    #[serde(default)]
    #[schema(example = json!(["toll road"]))]
    pub avoids: Vec<String>,
}

fn default_travel_mode() -> String {
    "car".to_string()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message, in Spanish
    pub error: String,
}

/// Landing page with the MapQuest key injected for the map client. Without
/// a key the page is a visible server error, never a silently broken map.
async fn index_handler(State(state): State<Arc<AppState>>) -> Response {
    match &state.mapquest_key {
        Some(key) => Html(LANDING_TEMPLATE.replace("{{MAPQUEST_KEY}}", key)).into_response(),
        None => {
            error!("landing page requested but MAPQUEST_KEY is not configured");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(MISSING_KEY_PAGE)).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/ruta",
    request_body = RouteRequest,
    responses(
        (status = 200, description = "Route found and quoted", body = RouteSummary),
        (status = 400, description = "Invalid input or no route available", body = ErrorResponse),
        (status = 504, description = "Routing provider did not answer in time", body = ErrorResponse),
        (status = 500, description = "Unexpected upstream failure", body = ErrorResponse)
    ),
    tag = "rutas"
)]
async fn route_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<RouteSummary>, (StatusCode, Json<ErrorResponse>)> {
    match compute_route(&state, req).await {
        Ok(summary) => Ok(Json(summary)),
        Err(err) => Err(error_response(err)),
    }
}

/// The one logical flow per request: validate, build avoids, call upstream,
/// normalize. No upstream call is issued when validation fails.
async fn compute_route(state: &AppState, req: RouteRequest) -> crate::core::Result<RouteSummary> {
    let origen = req.origen.trim();
    let destino = req.destino.trim();

    if origen.is_empty() {
        return Err(Error::MissingLocation(LocationField::Origin));
    }
    if destino.is_empty() {
        return Err(Error::MissingLocation(LocationField::Destination));
    }

    validate_location(origen).map_err(|reason| Error::InvalidLocation {
        field: LocationField::Origin,
        reason,
    })?;
    validate_location(destino).map_err(|reason| Error::InvalidLocation {
        field: LocationField::Destination,
        reason,
    })?;

    let mode = TravelMode::parse(&req.travel_mode);
    let avoids = build_avoids(&req.avoids, &mode);

    let reply = state.client.route(origen, destino, &mode, &avoids).await?;
    normalize(reply, &mode, avoids, &state.costs)
}

/// Boundary adapter from domain errors to transport status codes
fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        Error::MissingLocation(_)
        | Error::InvalidLocation { .. }
        | Error::RouteUnavailable(_) => StatusCode::BAD_REQUEST,
        Error::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
        Error::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    match status {
        StatusCode::INTERNAL_SERVER_ERROR => error!("route request failed: {err}"),
        StatusCode::GATEWAY_TIMEOUT => warn!("upstream timed out: {err}"),
        _ => warn!("route request rejected: {err}"),
    }

    (status, Json(ErrorResponse { error: err.to_string() }))
}

/// Build the application router from configuration
pub fn app(config: Config) -> Router {
    let state = Arc::new(AppState {
        client: DirectionsClient::new(&config),
        costs: CostCalculator::new(config.costs.clone(), config.performance.clone()),
        mapquest_key: config.mapquest_key.clone(),
    });

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(index_handler))
        .route("/ruta", post(route_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until shutdown
pub async fn run_server(config: Config, host: &str, port: u16) -> anyhow::Result<()> {
    let key_configured = config.mapquest_key.is_some();
    let app = app(config);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{addr}");
    info!("📚 API docs available at http://{addr}/docs");
    if !key_configured {
        warn!("MAPQUEST_KEY is not set; the landing page will report an error");
    }

    axum::serve(listener, app).await?;
    Ok(())
}
