//! Route response normalization
//!
//! Turns the raw MapQuest reply into the client-facing summary: effective
//! travel time under live traffic, cost figures, first-leg narratives, and
//! paired shape geometry.

use std::collections::BTreeSet;

use serde::Serialize;
use utoipa::ToSchema;

use crate::core::cost::{round2, CostBreakdown, CostCalculator};
use crate::core::error::{Error, Result};
use crate::core::mapquest::{DirectionsReply, Route};
use crate::core::mode::TravelMode;

const NO_ROUTE_MESSAGE: &str =
    "No se pudo encontrar una ruta. Verifica las ubicaciones y las restricciones.";
const UNKNOWN_UPSTREAM_MESSAGE: &str = "Error desconocido.";

/// Normalized route returned to the client
#[derive(Debug, Serialize, ToSchema)]
pub struct RouteSummary {
    /// Turn-by-turn narratives from the first leg
    pub directions: Vec<String>,

    /// Total distance in kilometers
    #[schema(example = 125.4)]
    pub distance_km: f64,

    /// Effective travel time in minutes, live traffic included
    #[schema(example = 70.0)]
    pub time_minutes: f64,

    /// Whole minutes of delay attributable to traffic
    #[schema(example = 10)]
    pub traffic_delay_minutes: i64,

    /// Kilometers of the route on toll roads
    pub toll_distance_km: f64,

    pub has_tolls: bool,

    pub costs: CostBreakdown,

    /// Route geometry as [lat, lng] pairs
    pub shape: Vec<[f64; 2]>,

    pub start_lat_lng: [f64; 2],
    pub end_lat_lng: [f64; 2],

    /// Echo of the requested travel mode
    pub travel_mode: String,

    /// Avoidance tags actually applied, mandatory ones included
    pub applied_avoids: Vec<String>,
}

/// Normalize an upstream reply into a `RouteSummary`.
///
/// Fails with `RouteUnavailable` when the reply carries no usable route,
/// and with `Upstream` when a nominally successful payload is missing the
/// pieces the summary needs.
pub fn normalize(
    reply: DirectionsReply,
    mode: &TravelMode,
    avoids: BTreeSet<String>,
    costs: &CostCalculator,
) -> Result<RouteSummary> {
    let usable = reply.http_success && reply.payload.info.statuscode == 0;
    let route = match reply.payload.route {
        Some(route) if usable => route,
        _ => return Err(Error::RouteUnavailable(unavailable_message(&reply.payload.info.messages))),
    };

    // Traffic only ever increases the displayed time, never lowers it
    // below the static estimate.
    let static_time = route.time;
    let real_time = route.real_time;
    let effective = if real_time > static_time {
        real_time
    } else {
        static_time
    };
    // Half-to-even, like the cost figures
    let traffic_delay_minutes = if real_time > static_time {
        ((real_time - static_time) / 60.0).round_ties_even() as i64
    } else {
        0
    };
    let time_minutes = (effective / 60.0 * 10.0).round_ties_even() / 10.0;

    let breakdown = costs.calculate(route.distance, route.toll_road_distance, mode);

    let directions = first_leg_narratives(&route)?;
    let shape = paired_shape(&route)?;
    let (start_lat_lng, end_lat_lng) = endpoints(&route)?;

    Ok(RouteSummary {
        directions,
        distance_km: round2(route.distance),
        time_minutes,
        traffic_delay_minutes,
        toll_distance_km: round2(route.toll_road_distance),
        has_tolls: route.has_toll_road,
        costs: breakdown,
        shape,
        start_lat_lng,
        end_lat_lng,
        travel_mode: mode.as_str().to_string(),
        applied_avoids: avoids.into_iter().collect(),
    })
}

fn unavailable_message(messages: &[String]) -> String {
    let msg = messages
        .first()
        .map(String::as_str)
        .unwrap_or(UNKNOWN_UPSTREAM_MESSAGE);
    if msg.contains("Cannot route from") {
        NO_ROUTE_MESSAGE.to_string()
    } else {
        msg.to_string()
    }
}

/// Only the first leg is consumed; multi-leg routes with waypoints are out
/// of scope.
fn first_leg_narratives(route: &Route) -> Result<Vec<String>> {
    let leg = route
        .legs
        .first()
        .ok_or_else(|| Error::Upstream("la ruta no incluye tramos".to_string()))?;
    Ok(leg.maneuvers.iter().map(|m| m.narrative.clone()).collect())
}

/// Pair the flat alternating lat/lng array; an odd trailing value is
/// dropped.
fn paired_shape(route: &Route) -> Result<Vec<[f64; 2]>> {
    let shape = route
        .shape
        .as_ref()
        .ok_or_else(|| Error::Upstream("la ruta no incluye geometría".to_string()))?;
    Ok(shape
        .shape_points
        .chunks_exact(2)
        .map(|pair| [pair[0], pair[1]])
        .collect())
}

fn endpoints(route: &Route) -> Result<([f64; 2], [f64; 2])> {
    if route.locations.len() < 2 {
        return Err(Error::Upstream(
            "la ruta no incluye ubicaciones de origen y destino".to_string(),
        ));
    }
    let start = route.locations[0].lat_lng;
    let end = route.locations[1].lat_lng;
    Ok(([start.lat, start.lng], [end.lat, end.lng]))
}
