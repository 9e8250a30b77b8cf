//! Static emission factors used to convert activity quantities into kg CO₂e.
//!
//! All values are lifecycle approximations, not scientific-grade
//! coefficients. They are fixed for the process lifetime.

/// kg CO₂e per mile driven in an average passenger car.
pub const MILE_DRIVEN: f64 = 0.404;

/// kg CO₂e per kilometer driven in an average passenger car.
pub const KM_DRIVEN: f64 = 0.251;

/// kg CO₂e per kilogram of beef.
pub const BEEF_KG: f64 = 27.0;

/// kg CO₂e per kilogram of chicken.
pub const CHICKEN_KG: f64 = 6.9;

/// kg CO₂e per passenger-kilometer flown, economy class.
pub const FLIGHT_KM: f64 = 0.115;

/// kg CO₂e per passenger-kilometer traveled by bus.
pub const BUS_KM: f64 = 0.089;

/// kg CO₂e per USD of general shopping spend (product lifecycle proxy).
pub const SHOPPING_USD: f64 = 0.6;

/// Global-average grid intensity in kg CO₂e per kWh.
pub const GLOBAL_AVERAGE_GRID: f64 = 0.92;

/// Nigerian grid intensity in kg CO₂e per kWh.
pub const NIGERIA_GRID: f64 = 0.80;

/// Electricity grid intensity selection.
///
/// Presets resolve to a fixed kg CO₂e/kWh value; `Custom` carries a
/// user-supplied local value. Labels match the original preset table so
/// stored runs stay comparable across versions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridChoice {
    GlobalAverage,
    Nigeria,
    Custom(f64),
}

impl GridChoice {
    /// Resolve the choice to a scalar grid factor (kg CO₂e/kWh).
    pub fn factor(&self) -> f64 {
        match *self {
            GridChoice::GlobalAverage => GLOBAL_AVERAGE_GRID,
            GridChoice::Nigeria => NIGERIA_GRID,
            GridChoice::Custom(value) => value,
        }
    }

    /// Display label stored alongside saved runs.
    pub fn label(&self) -> &'static str {
        match self {
            GridChoice::GlobalAverage => "Global average",
            GridChoice::Nigeria => "Nigeria",
            GridChoice::Custom(_) => "Custom…",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve_to_table_values() {
        assert_eq!(GridChoice::GlobalAverage.factor(), 0.92);
        assert_eq!(GridChoice::Nigeria.factor(), 0.80);
    }

    #[test]
    fn custom_passes_through_user_value() {
        assert_eq!(GridChoice::Custom(0.60).factor(), 0.60);
        assert_eq!(GridChoice::Custom(0.0).factor(), 0.0);
    }

    #[test]
    fn labels_match_preset_table() {
        assert_eq!(GridChoice::GlobalAverage.label(), "Global average");
        assert_eq!(GridChoice::Nigeria.label(), "Nigeria");
        assert_eq!(GridChoice::Custom(0.5).label(), "Custom…");
    }
}
