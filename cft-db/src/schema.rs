//! SQL schema for the run history store.

/// Returns the full SQL schema as a single batch string.
///
/// One table, `runs`: an append-only log of calculation runs keyed by
/// an auto-incrementing surrogate id. `inputs_json` and `totals_json`
/// hold flat JSON encodings of the run payloads; `timestamp` is the
/// UTC ISO-8601 write time. Applied with `IF NOT EXISTS` so every open
/// can run it unconditionally.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS runs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp TEXT,
        inputs_json TEXT,
        totals_json TEXT
    );
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_runs_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='runs'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "Table 'runs' should exist");
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }

    #[test]
    fn id_autoincrements() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute(
            "INSERT INTO runs (timestamp, inputs_json, totals_json) VALUES ('a', '{}', '{}')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO runs (timestamp, inputs_json, totals_json) VALUES ('b', '{}', '{}')",
            [],
        )
        .unwrap();
        let max_id: i64 = conn
            .query_row("SELECT MAX(id) FROM runs", [], |row| row.get(0))
            .unwrap();
        assert_eq!(max_id, 2);
    }
}
