//! Input-boundary error taxonomy.

use thiserror::Error;

/// A lifestyle input failed validation before reaching the calculator.
///
/// No constraint violation is ever allowed to propagate into the
/// formulas; callers reject the run and re-prompt instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    /// A numeric quantity was negative. All inputs are magnitudes.
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// NGN-to-USD exchange rate below 1.0. Zero or negative rates would
    /// corrupt the spend proxy, so the floor is enforced at the boundary.
    #[error("fx_rate must be at least 1.0 NGN per USD, got {0}")]
    FxRateTooLow(f64),
}
