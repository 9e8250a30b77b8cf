//! Append and listing operations for the run history store.

use cft_core::calculator::CalculationResult;
use cft_core::inputs::CalculationInputs;
use chrono::{SecondsFormat, Utc};
use rusqlite::params;

use crate::models::{HistoryRecord, TrendPoint};
use crate::{HistoryDb, StoreError};

impl HistoryDb {
    /// Append one run and return its new id.
    ///
    /// Both payloads are serialized to flat JSON documents and stamped
    /// with the current UTC time. There is no update path; ids only
    /// ever grow.
    pub fn record(
        &self,
        inputs: &CalculationInputs,
        totals: &CalculationResult,
    ) -> Result<i64, StoreError> {
        let inputs_json = serde_json::to_string(inputs)?;
        let totals_json = serde_json::to_string(totals)?;
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let conn = self.conn.borrow();
        conn.execute(
            "INSERT INTO runs (timestamp, inputs_json, totals_json) VALUES (?1, ?2, ?3)",
            params![timestamp, inputs_json, totals_json],
        )?;
        let id = conn.last_insert_rowid();
        log::info!("history: recorded run {} at {}", id, timestamp);
        Ok(id)
    }

    /// All stored runs, most recent first (descending by id).
    ///
    /// An empty store yields an empty vec, not an error. Rows whose
    /// payloads no longer parse are skipped with a warning rather than
    /// aborting the whole listing.
    pub fn list_all(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, timestamp, inputs_json, totals_json FROM runs ORDER BY id DESC",
        )?;
        let raw_rows: Vec<(i64, String, String, String)> = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut records = Vec::with_capacity(raw_rows.len());
        for (id, timestamp, inputs_json, totals_json) in raw_rows {
            let inputs: CalculationInputs = match serde_json::from_str(&inputs_json) {
                Ok(v) => v,
                Err(e) => {
                    log::warn!("history: skipping run {} with malformed inputs: {}", id, e);
                    continue;
                }
            };
            let totals: CalculationResult = match serde_json::from_str(&totals_json) {
                Ok(v) => v,
                Err(e) => {
                    log::warn!("history: skipping run {} with malformed totals: {}", id, e);
                    continue;
                }
            };
            records.push(HistoryRecord {
                id,
                timestamp,
                inputs,
                totals,
            });
        }
        log::info!("history: list_all returned {} records", records.len());
        Ok(records)
    }

    /// Trend points for charting annual totals over time, oldest first.
    pub fn trend_points(&self) -> Result<Vec<TrendPoint>, StoreError> {
        let mut points: Vec<TrendPoint> = self
            .list_all()?
            .into_iter()
            .map(|record| TrendPoint {
                timestamp: record.timestamp,
                annual_kg: record.totals.grand_total_kg,
                transport_kg: record.totals.transport_total,
                electricity_kg: record.totals.electricity_total,
                diet_kg: record.totals.diet_total,
                shopping_kg: record.totals.shopping_total,
            })
            .collect();
        points.reverse();
        Ok(points)
    }
}
