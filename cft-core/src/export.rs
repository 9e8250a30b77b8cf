//! CSV and JSON export encodings for a single run.
//!
//! The CSV export is one header row plus one data row of annual totals
//! and projections. The JSON export is the full `{inputs, totals}`
//! document, pretty-printed, and round-trips bit-exactly through
//! [`run_from_json`].

use serde::{Deserialize, Serialize};

use crate::calculator::CalculationResult;
use crate::inputs::CalculationInputs;

/// The JSON export document: exactly two top-level keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunExport {
    pub inputs: CalculationInputs,
    pub totals: CalculationResult,
}

/// The single CSV data row. Serde renames produce the export's
/// fixed column headers.
#[derive(Debug, Serialize)]
struct ResultRow {
    #[serde(rename = "Transport_kg")]
    transport_kg: f64,
    #[serde(rename = "Electricity_kg")]
    electricity_kg: f64,
    #[serde(rename = "Diet_kg")]
    diet_kg: f64,
    #[serde(rename = "Shopping_kg")]
    shopping_kg: f64,
    #[serde(rename = "Annual_kg")]
    annual_kg: f64,
    #[serde(rename = "Annual_tonnes")]
    annual_tonnes: f64,
    #[serde(rename = "Daily_kg")]
    daily_kg: f64,
    #[serde(rename = "Weekly_kg")]
    weekly_kg: f64,
    #[serde(rename = "Monthly_kg")]
    monthly_kg: f64,
}

/// Render the results CSV: one header row, one data row.
pub fn results_csv(totals: &CalculationResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.serialize(ResultRow {
        transport_kg: totals.transport_total,
        electricity_kg: totals.electricity_total,
        diet_kg: totals.diet_total,
        shopping_kg: totals.shopping_total,
        annual_kg: totals.grand_total_kg,
        annual_tonnes: totals.grand_total_t,
        daily_kg: totals.daily_kg(),
        weekly_kg: totals.weekly_kg(),
        monthly_kg: totals.monthly_kg(),
    })?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush csv writer: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Render the pretty-printed JSON export of a full run.
pub fn run_json(
    inputs: &CalculationInputs,
    totals: &CalculationResult,
) -> anyhow::Result<String> {
    let doc = RunExport {
        inputs: inputs.clone(),
        totals: totals.clone(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse a JSON export back into its structured form.
pub fn run_from_json(json: &str) -> anyhow::Result<RunExport> {
    Ok(serde_json::from_str(json)?)
}
