//! The `calculate` subcommand: normalize inputs, compute totals,
//! render the breakdown and suggestions, optionally save and export.
//!
//! Flag defaults mirror the interactive app's starting values, so a
//! bare `calculate` produces the familiar reference footprint.

use cft_core::calculator::{self, CalculationResult};
use cft_core::factors::GridChoice;
use cft_core::inputs::{DistanceInput, RawInputs, SpendInput};
use cft_core::{export, suggestions};
use cft_db::HistoryDb;
use clap::{Args, ValueEnum};
use log::{info, warn};

use crate::DEFAULT_DB_PATH;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum DistanceUnit {
    Km,
    Miles,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum Currency {
    Ngn,
    Usd,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum GridRegion {
    GlobalAverage,
    Nigeria,
    Custom,
}

#[derive(Args)]
pub struct CalculateArgs {
    /// Distance unit for car travel
    #[arg(long, value_enum, default_value_t = DistanceUnit::Km)]
    pub distance_unit: DistanceUnit,

    /// Car distance per week in the selected unit (default: 80 km / 50 miles)
    #[arg(long)]
    pub car_distance: Option<f64>,

    /// Flight distance per year (km, economy)
    #[arg(long, default_value_t = 1000.0)]
    pub flight_km: f64,

    /// Bus distance per week (km)
    #[arg(long, default_value_t = 10.0)]
    pub bus_km: f64,

    /// Grid emission factor preset
    #[arg(long, value_enum, default_value_t = GridRegion::GlobalAverage)]
    pub grid_region: GridRegion,

    /// Custom grid factor (kg CO₂e/kWh), used with --grid-region custom
    #[arg(long)]
    pub grid_factor: Option<f64>,

    /// Electricity per month (kWh)
    #[arg(long, default_value_t = 150.0)]
    pub kwh: f64,

    /// Beef per week (kg)
    #[arg(long, default_value_t = 0.3)]
    pub beef: f64,

    /// Chicken per week (kg)
    #[arg(long, default_value_t = 0.5)]
    pub chicken: f64,

    /// Currency for the monthly spend
    #[arg(long, value_enum, default_value_t = Currency::Ngn)]
    pub currency: Currency,

    /// Spend per month in the selected currency (default: 150000 NGN / 100 USD)
    #[arg(long)]
    pub spend: Option<f64>,

    /// Exchange rate (NGN per USD), used when the currency is NGN
    #[arg(long, default_value_t = 1500.0)]
    pub fx_rate: f64,

    /// Save this run to the history database
    #[arg(long)]
    pub save: bool,

    /// Path to the history database
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db: String,

    /// Write the results CSV to this path
    #[arg(long)]
    pub csv: Option<String>,

    /// Write the results JSON to this path
    #[arg(long)]
    pub json: Option<String>,
}

/// Resolve CLI flags into the tagged raw-input payload.
fn raw_inputs(args: &CalculateArgs) -> RawInputs {
    let car_distance = match args.distance_unit {
        DistanceUnit::Km => DistanceInput::Kilometers(args.car_distance.unwrap_or(80.0)),
        DistanceUnit::Miles => DistanceInput::Miles(args.car_distance.unwrap_or(50.0)),
    };
    let grid = match args.grid_region {
        GridRegion::GlobalAverage => GridChoice::GlobalAverage,
        GridRegion::Nigeria => GridChoice::Nigeria,
        GridRegion::Custom => GridChoice::Custom(args.grid_factor.unwrap_or(0.60)),
    };
    let spend = match args.currency {
        Currency::Usd => SpendInput::Usd(args.spend.unwrap_or(100.0)),
        Currency::Ngn => SpendInput::Ngn {
            amount: args.spend.unwrap_or(150_000.0),
            fx_rate: args.fx_rate,
        },
    };
    RawInputs {
        car_distance,
        flight_km_per_year: args.flight_km,
        bus_km_per_week: args.bus_km,
        grid,
        kwh_per_month: args.kwh,
        beef_kg_per_week: args.beef,
        chicken_kg_per_week: args.chicken,
        spend,
    }
}

pub fn run_calculate(args: CalculateArgs) -> anyhow::Result<()> {
    let raw = raw_inputs(&args);
    let inputs = raw.normalize()?;
    let totals = calculator::calculate(&inputs);

    print_summary(&totals);
    print_breakdown(&totals);

    println!();
    println!("Suggestions:");
    for message in suggestions::advise(&raw) {
        println!("- {}", message);
    }

    if args.save {
        // Storage failure degrades to a notice; the output above stands.
        match HistoryDb::open(&args.db).and_then(|db| db.record(&inputs, &totals)) {
            Ok(id) => info!("saved run {} to {}", id, args.db),
            Err(e) => warn!("could not save run to {}: {}", args.db, e),
        }
    }

    if let Some(path) = &args.csv {
        std::fs::write(path, export::results_csv(&totals)?)?;
        info!("wrote results CSV to {}", path);
    }
    if let Some(path) = &args.json {
        std::fs::write(path, export::run_json(&inputs, &totals)?)?;
        info!("wrote results JSON to {}", path);
    }

    Ok(())
}

fn print_summary(totals: &CalculationResult) {
    println!(
        "Estimated annual footprint: {:.0} kg CO₂e ({:.2} tonnes)",
        totals.grand_total_kg, totals.grand_total_t
    );
    println!(
        "Daily {:.2} kg | Weekly {:.2} kg | Monthly {:.2} kg",
        totals.daily_kg(),
        totals.weekly_kg(),
        totals.monthly_kg()
    );
}

fn print_breakdown(totals: &CalculationResult) {
    println!();
    println!("Breakdown by category (kg CO₂e/year):");
    println!("  Transport    {:>10.1}", totals.transport_total);
    println!("  Electricity  {:>10.1}", totals.electricity_total);
    println!("  Diet         {:>10.1}", totals.diet_total);
    println!("  Shopping     {:>10.1}", totals.shopping_total);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: CalculateArgs,
    }

    fn parse(argv: &[&str]) -> CalculateArgs {
        let mut full = vec!["test"];
        full.extend_from_slice(argv);
        TestCli::parse_from(full).args
    }

    #[test]
    fn defaults_mirror_the_original_app() {
        let raw = raw_inputs(&parse(&[]));
        assert_eq!(raw.car_distance, DistanceInput::Kilometers(80.0));
        assert_eq!(raw.flight_km_per_year, 1000.0);
        assert_eq!(raw.bus_km_per_week, 10.0);
        assert_eq!(raw.grid, GridChoice::GlobalAverage);
        assert_eq!(raw.kwh_per_month, 150.0);
        assert_eq!(raw.beef_kg_per_week, 0.3);
        assert_eq!(raw.chicken_kg_per_week, 0.5);
        assert_eq!(
            raw.spend,
            SpendInput::Ngn {
                amount: 150_000.0,
                fx_rate: 1500.0
            }
        );
    }

    #[test]
    fn mile_unit_switches_default_distance() {
        let raw = raw_inputs(&parse(&["--distance-unit", "miles"]));
        assert_eq!(raw.car_distance, DistanceInput::Miles(50.0));
    }

    #[test]
    fn usd_currency_ignores_fx_rate() {
        let raw = raw_inputs(&parse(&["--currency", "usd", "--spend", "250"]));
        assert_eq!(raw.spend, SpendInput::Usd(250.0));
    }

    #[test]
    fn custom_grid_region_takes_the_custom_factor() {
        let raw = raw_inputs(&parse(&[
            "--grid-region",
            "custom",
            "--grid-factor",
            "0.45",
        ]));
        assert_eq!(raw.grid, GridChoice::Custom(0.45));
    }

    #[test]
    fn explicit_distance_overrides_the_default() {
        let raw = raw_inputs(&parse(&["--car-distance", "200"]));
        assert_eq!(raw.car_distance, DistanceInput::Kilometers(200.0));
    }
}
