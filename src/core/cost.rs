//! Trip cost estimation
//!
//! Fuel and toll figures in Mexican pesos, derived from distance and the
//! vehicle performance table. Field names in the breakdown follow the
//! client contract and stay in Spanish.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::core::mode::TravelMode;

/// Fixed monetary rates used by the calculator
#[derive(Debug, Clone)]
pub struct CostRates {
    /// Fuel price in MXN per liter
    pub fuel_price_mxn_liter: f64,

    /// Average toll cost in MXN per toll-road kilometer
    pub toll_cost_mxn_km: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            fuel_price_mxn_liter: 24.50,
            toll_cost_mxn_km: 3.50,
        }
    }
}

/// Average fuel performance (km per liter) per travel mode.
///
/// Modes without an entry get zero fuel cost; tolls still apply.
#[derive(Debug, Clone)]
pub struct PerformanceTable {
    km_per_liter: HashMap<String, f64>,
}

impl Default for PerformanceTable {
    fn default() -> Self {
        let mut km_per_liter = HashMap::new();
        km_per_liter.insert("car".to_string(), 12.0);
        km_per_liter.insert("motorcycle".to_string(), 25.0);
        Self { km_per_liter }
    }
}

impl PerformanceTable {
    pub fn km_per_liter(&self, mode: &TravelMode) -> Option<f64> {
        self.km_per_liter.get(mode.as_str()).copied()
    }
}

/// Cost breakdown returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CostBreakdown {
    /// Estimated fuel consumption in liters
    #[schema(example = 10.0)]
    pub consumo_litros: f64,

    /// Fuel cost in MXN
    #[schema(example = 245.0)]
    pub gasolina_mxn: f64,

    /// Toll cost in MXN
    #[schema(example = 105.0)]
    pub casetas_mxn: f64,

    /// Total trip cost in MXN
    #[schema(example = 350.0)]
    pub total_mxn: f64,
}

/// Computes trip costs from distances and the travel mode
#[derive(Debug, Clone, Default)]
pub struct CostCalculator {
    rates: CostRates,
    performance: PerformanceTable,
}

impl CostCalculator {
    pub fn new(rates: CostRates, performance: PerformanceTable) -> Self {
        Self { rates, performance }
    }

    /// Calculate the cost breakdown for a trip.
    ///
    /// The total is computed from the unrounded fuel and toll figures and
    /// only then rounded, so it may differ by up to 0.01 from the sum of
    /// the rounded components. That matches the client contract.
    pub fn calculate(
        &self,
        distance_km: f64,
        toll_distance_km: f64,
        mode: &TravelMode,
    ) -> CostBreakdown {
        let casetas = toll_distance_km * self.rates.toll_cost_mxn_km;

        let (litros, gasolina) = match self.performance.km_per_liter(mode) {
            Some(km_per_liter) => {
                let litros = distance_km / km_per_liter;
                (litros, litros * self.rates.fuel_price_mxn_liter)
            }
            None => (0.0, 0.0),
        };

        let total = gasolina + casetas;

        CostBreakdown {
            consumo_litros: round2(litros),
            gasolina_mxn: round2(gasolina),
            casetas_mxn: round2(casetas),
            total_mxn: round2(total),
        }
    }
}

// Half-to-even, so exact .005 ties land on the even cent.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
