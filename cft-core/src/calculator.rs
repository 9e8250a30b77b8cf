//! The footprint calculator: a pure mapping from normalized inputs to
//! annual category subtotals and a grand total.
//!
//! Deterministic, no side effects, no I/O. The divisors below are exact
//! projection constants, not calendar-accurate; this is an accepted
//! approximation of the model.

use serde::{Deserialize, Serialize};

use crate::factors;
use crate::inputs::CalculationInputs;

/// Weeks per year used to annualize weekly quantities.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Months per year used to annualize monthly quantities.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Days per year used for the daily projection.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Annual footprint totals for one run, in kg CO₂e unless noted.
///
/// Field names mirror the persisted `totals_json` payload. Invariant:
/// `grand_total_kg` equals the sum of the four category subtotals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub transport_total: f64,
    pub electricity_total: f64,
    pub diet_total: f64,
    pub shopping_total: f64,
    pub grand_total_kg: f64,
    /// Grand total in tonnes CO₂e.
    pub grand_total_t: f64,
}

impl CalculationResult {
    /// Daily projection of the annual total.
    pub fn daily_kg(&self) -> f64 {
        self.grand_total_kg / DAYS_PER_YEAR
    }

    /// Weekly projection of the annual total.
    pub fn weekly_kg(&self) -> f64 {
        self.grand_total_kg / WEEKS_PER_YEAR
    }

    /// Monthly projection of the annual total.
    pub fn monthly_kg(&self) -> f64 {
        self.grand_total_kg / MONTHS_PER_YEAR
    }
}

/// Compute annual category subtotals and the grand total.
pub fn calculate(inputs: &CalculationInputs) -> CalculationResult {
    let transport_total = inputs.car_per_week_kg * WEEKS_PER_YEAR
        + inputs.flight_km_per_year * factors::FLIGHT_KM
        + inputs.bus_km_per_week * WEEKS_PER_YEAR * factors::BUS_KM;

    let electricity_total = inputs.kwh_per_month * MONTHS_PER_YEAR * inputs.selected_grid_factor;

    let diet_total = inputs.beef_kg_per_week * WEEKS_PER_YEAR * factors::BEEF_KG
        + inputs.chicken_kg_per_week * WEEKS_PER_YEAR * factors::CHICKEN_KG;

    let shopping_total = inputs.spend_usd * MONTHS_PER_YEAR * factors::SHOPPING_USD;

    let grand_total_kg = transport_total + electricity_total + diet_total + shopping_total;

    CalculationResult {
        transport_total,
        electricity_total,
        diet_total,
        shopping_total,
        grand_total_kg,
        grand_total_t: grand_total_kg / 1000.0,
    }
}
