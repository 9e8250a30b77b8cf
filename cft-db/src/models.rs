//! Record types read back from the run history store.
//!
//! All structs derive `Serialize` so presentation layers can hand them
//! to charting code as JSON.

use cft_core::calculator::CalculationResult;
use cft_core::inputs::CalculationInputs;
use serde::Serialize;

/// One persisted calculation run. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRecord {
    /// Monotonically increasing surrogate key.
    pub id: i64,
    /// UTC ISO-8601 write time.
    pub timestamp: String,
    pub inputs: CalculationInputs,
    pub totals: CalculationResult,
}

/// A single point on the annual-footprint trend line.
///
/// Flattened from the stored totals so a chart can plot the annual
/// figure and the per-category stack without re-parsing payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub timestamp: String,
    pub annual_kg: f64,
    pub transport_kg: f64,
    pub electricity_kg: f64,
    pub diet_kg: f64,
    pub shopping_kg: f64,
}
