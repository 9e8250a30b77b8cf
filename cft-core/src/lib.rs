//! Core types and pure logic for the carbon footprint toolkit.
//!
//! This crate holds everything that does not touch a database or a
//! terminal: the static emission factor table, tagged unit/currency
//! input variants with their normalization rules, the footprint
//! calculator itself, the rule-based suggestion engine, and the
//! CSV/JSON export encodings.
//!
//! # Pipeline
//!
//! ```text
//! RawInputs --normalize()--> CalculationInputs --calculate()--> CalculationResult
//!     |                                                              |
//!     +--> advise() (suggestions)                 export / history --+
//! ```
//!
//! All quantities reaching [`calculator::calculate`] are already in
//! canonical units (kg CO₂e for car travel, USD for spend, a resolved
//! kg CO₂e/kWh grid factor). Validation happens once, at the input
//! boundary, in [`inputs::RawInputs::validate`].

pub mod calculator;
pub mod error;
pub mod export;
pub mod factors;
pub mod inputs;
pub mod suggestions;
