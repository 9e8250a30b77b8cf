//! The `history` subcommand: render saved runs and the annual trend.
//!
//! An unavailable or empty store is never fatal here; it renders the
//! same "no history yet" notice and exits cleanly.

use cft_db::HistoryDb;
use log::warn;

const NO_HISTORY_NOTICE: &str = "No history yet. Save a run to start tracking trends.";

/// Width of the widest trend bar, in characters.
const TREND_BAR_WIDTH: f64 = 40.0;

pub fn run_history(db_path: &str) -> anyhow::Result<()> {
    let db = match HistoryDb::open(db_path) {
        Ok(db) => db,
        Err(e) => {
            warn!("history store unavailable at {}: {}", db_path, e);
            println!("{}", NO_HISTORY_NOTICE);
            return Ok(());
        }
    };

    let records = match db.list_all() {
        Ok(records) => records,
        Err(e) => {
            warn!("could not read history from {}: {}", db_path, e);
            println!("{}", NO_HISTORY_NOTICE);
            return Ok(());
        }
    };

    if records.is_empty() {
        println!("{}", NO_HISTORY_NOTICE);
        return Ok(());
    }

    println!(
        "{:>5}  {:<32}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
        "id", "timestamp", "annual_kg", "transport", "electric", "diet", "shopping"
    );
    for record in &records {
        println!(
            "{:>5}  {:<32}  {:>10.1}  {:>10.1}  {:>10.1}  {:>10.1}  {:>10.1}",
            record.id,
            record.timestamp,
            record.totals.grand_total_kg,
            record.totals.transport_total,
            record.totals.electricity_total,
            record.totals.diet_total,
            record.totals.shopping_total
        );
    }

    let points = match db.trend_points() {
        Ok(points) => points,
        Err(e) => {
            warn!("could not derive trend from {}: {}", db_path, e);
            return Ok(());
        }
    };

    println!();
    println!("Annual footprint over time:");
    let max = points
        .iter()
        .map(|p| p.annual_kg)
        .fold(f64::MIN, f64::max)
        .max(1.0);
    for point in &points {
        let width = ((point.annual_kg / max) * TREND_BAR_WIDTH).round() as usize;
        println!(
            "{:<32} {} {:.0} kg",
            point.timestamp,
            "#".repeat(width),
            point.annual_kg
        );
    }

    Ok(())
}
