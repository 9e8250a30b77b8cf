//! Raw lifestyle inputs and their normalization to canonical units.
//!
//! Unit and currency selection is modeled as tagged variants rather
//! than implicit fallback: the calculator only ever receives an
//! already-converted kg CO₂e figure for car travel and a USD figure
//! for spend. The inactive distance unit is simply absent, so it can
//! never leak into downstream math.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::factors::{self, GridChoice};

/// Weekly car travel in the unit the user actually selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceInput {
    Miles(f64),
    Kilometers(f64),
}

impl DistanceInput {
    /// Convert the active distance to weekly kg CO₂e.
    pub fn weekly_car_kg(&self) -> f64 {
        match *self {
            DistanceInput::Miles(miles) => miles * factors::MILE_DRIVEN,
            DistanceInput::Kilometers(km) => km * factors::KM_DRIVEN,
        }
    }

    /// Unit label stored alongside saved runs.
    pub fn unit_label(&self) -> &'static str {
        match self {
            DistanceInput::Miles(_) => "miles",
            DistanceInput::Kilometers(_) => "km",
        }
    }

    /// The raw magnitude in the selected unit.
    pub fn raw(&self) -> f64 {
        match *self {
            DistanceInput::Miles(v) | DistanceInput::Kilometers(v) => v,
        }
    }
}

/// Monthly shopping spend in the user's currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpendInput {
    Usd(f64),
    Ngn { amount: f64, fx_rate: f64 },
}

impl SpendInput {
    /// Resolve the spend to USD.
    ///
    /// An `fx_rate` below 1.0 is rejected here, before any division.
    pub fn monthly_usd(&self) -> Result<f64, InputError> {
        match *self {
            SpendInput::Usd(usd) => Ok(usd),
            SpendInput::Ngn { amount, fx_rate } => {
                if fx_rate < 1.0 {
                    return Err(InputError::FxRateTooLow(fx_rate));
                }
                Ok(amount / fx_rate)
            }
        }
    }

    /// Currency label stored alongside saved runs.
    pub fn currency_label(&self) -> &'static str {
        match self {
            SpendInput::Usd(_) => "USD",
            SpendInput::Ngn { .. } => "NGN",
        }
    }

    /// The raw magnitude in the selected currency.
    pub fn raw(&self) -> f64 {
        match *self {
            SpendInput::Usd(v) => v,
            SpendInput::Ngn { amount, .. } => amount,
        }
    }
}

/// The complete pre-conversion payload for one run.
///
/// This is what the suggestion engine evaluates (thresholds apply to
/// the raw quantities in their original units) and what
/// [`normalize`](RawInputs::normalize) turns into [`CalculationInputs`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawInputs {
    pub car_distance: DistanceInput,
    pub flight_km_per_year: f64,
    pub bus_km_per_week: f64,
    pub grid: GridChoice,
    pub kwh_per_month: f64,
    pub beef_kg_per_week: f64,
    pub chicken_kg_per_week: f64,
    pub spend: SpendInput,
}

impl RawInputs {
    /// Reject negative magnitudes and sub-1.0 FX rates at the boundary.
    pub fn validate(&self) -> Result<(), InputError> {
        let quantities = [
            ("car distance per week", self.car_distance.raw()),
            ("flight_km_per_year", self.flight_km_per_year),
            ("bus_km_per_week", self.bus_km_per_week),
            ("kwh_per_month", self.kwh_per_month),
            ("beef_kg_per_week", self.beef_kg_per_week),
            ("chicken_kg_per_week", self.chicken_kg_per_week),
            ("spend per month", self.spend.raw()),
        ];
        for (field, value) in quantities {
            if value < 0.0 {
                return Err(InputError::Negative { field, value });
            }
        }
        if let GridChoice::Custom(factor) = self.grid {
            if factor < 0.0 {
                return Err(InputError::Negative {
                    field: "custom grid factor",
                    value: factor,
                });
            }
        }
        if let SpendInput::Ngn { fx_rate, .. } = self.spend {
            if fx_rate < 1.0 {
                return Err(InputError::FxRateTooLow(fx_rate));
            }
        }
        Ok(())
    }

    /// Validate, then resolve every unit/currency/grid choice to
    /// canonical units.
    pub fn normalize(&self) -> Result<CalculationInputs, InputError> {
        self.validate()?;
        log::debug!(
            "normalize: {} {} -> {} kg/wk, spend {} {} -> USD, grid {} -> {}",
            self.car_distance.raw(),
            self.car_distance.unit_label(),
            self.car_distance.weekly_car_kg(),
            self.spend.raw(),
            self.spend.currency_label(),
            self.grid.label(),
            self.grid.factor()
        );
        Ok(CalculationInputs {
            distance_unit: self.car_distance.unit_label().to_string(),
            car_per_week_kg: self.car_distance.weekly_car_kg(),
            flight_km_per_year: self.flight_km_per_year,
            bus_km_per_week: self.bus_km_per_week,
            grid_factor_choice: self.grid.label().to_string(),
            selected_grid_factor: self.grid.factor(),
            kwh_per_month: self.kwh_per_month,
            beef_kg_per_week: self.beef_kg_per_week,
            chicken_kg_per_week: self.chicken_kg_per_week,
            currency: self.spend.currency_label().to_string(),
            spend_usd: self.spend.monthly_usd()?,
        })
    }
}

/// Normalized inputs for one calculation run.
///
/// Field names mirror the persisted `inputs_json` payload so stored
/// history stays readable across versions. Invariant: every quantity
/// is non-negative and all conversions are already resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInputs {
    pub distance_unit: String,
    pub car_per_week_kg: f64,
    pub flight_km_per_year: f64,
    pub bus_km_per_week: f64,
    pub grid_factor_choice: String,
    pub selected_grid_factor: f64,
    pub kwh_per_month: f64,
    pub beef_kg_per_week: f64,
    pub chicken_kg_per_week: f64,
    pub currency: String,
    pub spend_usd: f64,
}
