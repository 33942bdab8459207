//! Server configuration
//!
//! Built once at startup and passed into components; nothing reads the
//! process environment after `from_env` returns.

use std::env;
use std::time::Duration;

use crate::core::cost::{CostRates, PerformanceTable};

/// Immutable configuration for the route server
#[derive(Debug, Clone)]
pub struct Config {
    /// MapQuest API key. Optional at startup; its absence surfaces as a
    /// visible error on the landing page rather than a crash.
    pub mapquest_key: Option<String>,

    /// MapQuest Directions endpoint
    pub directions_url: String,

    /// Total budget for one upstream call
    pub upstream_timeout: Duration,

    pub costs: CostRates,
    pub performance: PerformanceTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mapquest_key: None,
            directions_url: "https://www.mapquestapi.com/directions/v2/route".to_string(),
            upstream_timeout: Duration::from_secs(20),
            costs: CostRates::default(),
            performance: PerformanceTable::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `MAPQUEST_KEY` supplies the API key; `MAPQUEST_URL` overrides the
    /// directions endpoint (used by tests). Empty values count as unset.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        config.mapquest_key = env::var("MAPQUEST_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if let Ok(url) = env::var("MAPQUEST_URL") {
            if !url.trim().is_empty() {
                config.directions_url = url.trim().to_string();
            }
        }

        config
    }
}
