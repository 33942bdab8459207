//! # Rutero Library
//!
//! Route quoting over the MapQuest Directions API: validates origin and
//! destination input, applies travel-mode avoidance rules, and normalizes
//! the upstream reply into a response with fuel and toll cost estimates in
//! Mexican pesos.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use rutero::{build_avoids, normalize, Config, CostCalculator, DirectionsClient, TravelMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let client = DirectionsClient::new(&config);
//!     let costs = CostCalculator::new(config.costs.clone(), config.performance.clone());
//!
//!     let mode = TravelMode::parse("car");
//!     let avoids = build_avoids(&["toll road".to_string()], &mode);
//!     let reply = client.route("19.4326,-99.1332", "Puebla", &mode, &avoids).await?;
//!     let summary = normalize(reply, &mode, avoids, &costs)?;
//!     println!("{} km, {} min", summary.distance_km, summary.time_minutes);
//!     Ok(())
//! }
//! ```
//!
//! The HTTP transport shell lives in [`server`]; the binary in `main.rs` is
//! a thin clap wrapper around [`server::run_server`].

// Re-export core types that users might need
pub use crate::core::{
    build_avoids, normalize, validate_location, Config, CostBreakdown, CostCalculator, CostRates,
    DirectionsClient, DirectionsReply, Error, LocationError, LocationField, PerformanceTable,
    Result, RouteSummary, TravelMode,
};

// Internal modules
mod core;

// HTTP transport shell
pub mod server;
