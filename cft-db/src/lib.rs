//! SQLite-backed run history for the carbon footprint toolkit.
//!
//! This crate persists `(inputs, totals)` pairs from past calculation
//! runs and reads them back for history listings and trend charts.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in the
//!   single-threaded per-request model
//! - File-backed SQLite via `rusqlite` (in-memory variant for tests)
//! - Payloads stored as flat JSON documents with an explicit
//!   serialization contract (`cft-core` serde types), so a record that
//!   no longer parses is a structural failure we can skip, not a
//!   silent key error
//!
//! # Store semantics
//!
//! Append-only: records are created on explicit save, never updated,
//! never deleted. Concurrent savers are serialized by SQLite's own
//! atomic append; no application-level coordination exists.
//!
//! # Usage
//!
//! ```rust
//! use cft_db::HistoryDb;
//!
//! let db = HistoryDb::open_in_memory().unwrap();
//! assert!(db.list_all().unwrap().is_empty());
//! ```

pub mod models;
pub mod schema;
mod store;

use std::cell::RefCell;
use std::rc::Rc;

use rusqlite::Connection;
use thiserror::Error;

/// Errors surfaced by the history store.
///
/// Every variant is non-fatal to the caller: the calculation and
/// display path continues to function without history.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be opened, read, or written.
    #[error("history store unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),

    /// A run payload could not be encoded for writing.
    #[error("failed to encode run payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only SQLite store of past calculation runs.
///
/// Cheaply cloneable via `Rc`. Connections live for the duration of a
/// single record/list operation in the single-user model, so there are
/// no long-held locks.
#[derive(Clone)]
pub struct HistoryDb {
    conn: Rc<RefCell<Connection>>,
}

impl HistoryDb {
    /// Open (or create) a file-backed history store.
    ///
    /// The schema is applied idempotently on every open, so first
    /// access creates the `runs` table and later opens are no-ops.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// In-memory store for tests and throwaway sessions.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
