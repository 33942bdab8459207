//! MapQuest Directions v2 client
//!
//! One GET per request, 20-second budget, JSON body decoded regardless of
//! HTTP status because MapQuest reports errors inside the body. The HTTP
//! success flag rides along so the normalizer can apply its failure
//! predicate in one place.

use std::collections::BTreeSet;
use std::time::Duration;

use log::debug;
use serde::Deserialize;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::mode::TravelMode;

/// Decoded MapQuest response body. Every field defaults when absent so a
/// sparse error body still deserializes.
#[derive(Debug, Default, Deserialize)]
pub struct DirectionsPayload {
    #[serde(default)]
    pub route: Option<Route>,
    #[serde(default)]
    pub info: Info,
}

#[derive(Debug, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub statuscode: i64,
    #[serde(default)]
    pub messages: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Total distance in kilometers (metric units requested)
    #[serde(default)]
    pub distance: f64,

    /// Static travel time in seconds
    #[serde(default)]
    pub time: f64,

    /// Travel time with live traffic, in seconds
    #[serde(default)]
    pub real_time: f64,

    #[serde(default)]
    pub has_toll_road: bool,

    /// Kilometers of the route on toll roads
    #[serde(default)]
    pub toll_road_distance: f64,

    #[serde(default)]
    pub legs: Vec<Leg>,

    #[serde(default)]
    pub shape: Option<Shape>,

    /// Resolved endpoints; [0] is the origin, [1] the destination
    #[serde(default)]
    pub locations: Vec<Location>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub maneuvers: Vec<Maneuver>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Maneuver {
    #[serde(default)]
    pub narrative: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Flat array of alternating lat/lng values
    #[serde(default)]
    pub shape_points: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub lat_lng: LatLng,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

/// Transport status plus decoded body, handed to the normalizer
#[derive(Debug)]
pub struct DirectionsReply {
    pub http_success: bool,
    pub payload: DirectionsPayload,
}

/// Client for the MapQuest Directions endpoint
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    url: String,
    key: Option<String>,
}

impl DirectionsClient {
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(config, config.upstream_timeout)
    }

    /// Variant with an explicit timeout, for tests and operational tuning
    pub fn with_timeout(config: &Config, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rutero/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            url: config.directions_url.clone(),
            key: config.mapquest_key.clone(),
        }
    }

    /// Request one route from origin to destination.
    pub async fn route(
        &self,
        origin: &str,
        destination: &str,
        mode: &TravelMode,
        avoids: &BTreeSet<String>,
    ) -> Result<DirectionsReply> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(key) = &self.key {
            query.push(("key", key.clone()));
        }
        query.push(("from", origin.to_string()));
        query.push(("to", destination.to_string()));
        query.push(("outFormat", "json".to_string()));
        query.push(("ambiguities", "ignore".to_string()));
        query.push(("narrativeType", "text".to_string()));
        query.push(("fullShape", "true".to_string()));
        query.push(("generalize", "0".to_string()));
        query.push(("unit", "k".to_string()));
        query.push(("locale", "es_MX".to_string()));
        query.push(("routeType", mode.route_type().to_string()));
        if !avoids.is_empty() {
            let joined = avoids.iter().cloned().collect::<Vec<_>>().join(",");
            query.push(("avoids", joined));
        }

        debug!("requesting route {origin} -> {destination} ({})", mode.as_str());

        let response = self.http.get(&self.url).query(&query).send().await?;
        let http_success = response.status().is_success();
        let payload: DirectionsPayload = response.json().await?;

        Ok(DirectionsReply {
            http_success,
            payload,
        })
    }
}
