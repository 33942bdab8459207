//! Core library modules for rutero
//!
//! This module contains the request-scoped route quoting logic: validation,
//! avoidance rules, cost math, the MapQuest client, and response
//! normalization.

pub mod avoid;
pub mod config;
pub mod cost;
pub mod error;
pub mod mapquest;
pub mod mode;
pub mod normalize;
pub mod validate;

// Re-export main types for internal use
pub use avoid::build_avoids;
pub use config::Config;
pub use cost::{CostBreakdown, CostCalculator, CostRates, PerformanceTable};
pub use error::{Error, LocationError, LocationField, Result};
pub use mapquest::{DirectionsClient, DirectionsReply};
pub use mode::TravelMode;
pub use normalize::{normalize, RouteSummary};
pub use validate::validate_location;
