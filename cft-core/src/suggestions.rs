//! Rule-based suggestion engine over the raw (pre-conversion) inputs.
//!
//! Stateless and deterministic: the same raw inputs always produce the
//! same messages in the same order. Rules fire independently, not
//! mutually exclusively; thresholds are fixed policy constants.

use crate::inputs::{DistanceInput, RawInputs};

/// Weekly beef above this (kg) triggers the diet suggestion.
pub const BEEF_THRESHOLD_KG_WEEK: f64 = 0.5;

/// Weekly car distance threshold when the selected unit is miles.
pub const CAR_THRESHOLD_MILES_WEEK: f64 = 100.0;

/// Weekly car distance threshold when the selected unit is kilometers.
pub const CAR_THRESHOLD_KM_WEEK: f64 = 160.0;

/// Monthly electricity above this (kWh) triggers the efficiency suggestion.
pub const ELECTRICITY_THRESHOLD_KWH_MONTH: f64 = 200.0;

/// Annual flight distance above this (km) triggers the flight suggestion.
pub const FLIGHT_THRESHOLD_KM_YEAR: f64 = 3000.0;

pub const BEEF_MSG: &str = "Reduce beef intake or swap with chicken/plant-based options.";
pub const CAR_MSG: &str =
    "Combine trips, carpool, or consider public transport for some journeys.";
pub const ELECTRICITY_MSG: &str =
    "Improve home efficiency: LED bulbs, efficient appliances, and switch off standby loads.";
pub const FLIGHT_MSG: &str =
    "Consider train alternatives for short-haul or offset essential flights.";
pub const FALLBACK_MSG: &str =
    "Nice balance of activities — keep tracking to find small improvements.";

/// Lazy, finite iterator of advisory messages for one run.
///
/// Yields messages in fixed rule order; if no rule fired, yields the
/// fallback affirmation exactly once.
pub struct Advice {
    slots: std::array::IntoIter<Option<&'static str>, 5>,
}

impl Iterator for Advice {
    type Item = &'static str;

    fn next(&mut self) -> Option<&'static str> {
        self.slots.by_ref().flatten().next()
    }
}

/// Evaluate the suggestion rules against the raw inputs.
///
/// The car-distance rule applies the threshold of whichever unit the
/// user actually selected (100 miles or 160 km); the inactive unit is
/// never consulted.
pub fn advise(raw: &RawInputs) -> Advice {
    let car_over_threshold = match raw.car_distance {
        DistanceInput::Miles(miles) => miles > CAR_THRESHOLD_MILES_WEEK,
        DistanceInput::Kilometers(km) => km > CAR_THRESHOLD_KM_WEEK,
    };

    let mut slots = [
        (raw.beef_kg_per_week > BEEF_THRESHOLD_KG_WEEK).then_some(BEEF_MSG),
        car_over_threshold.then_some(CAR_MSG),
        (raw.kwh_per_month > ELECTRICITY_THRESHOLD_KWH_MONTH).then_some(ELECTRICITY_MSG),
        (raw.flight_km_per_year > FLIGHT_THRESHOLD_KM_YEAR).then_some(FLIGHT_MSG),
        None,
    ];
    if slots.iter().all(Option::is_none) {
        slots[4] = Some(FALLBACK_MSG);
    }

    Advice {
        slots: slots.into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::GridChoice;
    use crate::inputs::SpendInput;

    fn quiet_raw() -> RawInputs {
        RawInputs {
            car_distance: DistanceInput::Kilometers(0.0),
            flight_km_per_year: 0.0,
            bus_km_per_week: 0.0,
            grid: GridChoice::GlobalAverage,
            kwh_per_month: 0.0,
            beef_kg_per_week: 0.0,
            chicken_kg_per_week: 0.0,
            spend: SpendInput::Usd(0.0),
        }
    }

    #[test]
    fn no_rules_fired_yields_exactly_the_fallback() {
        let messages: Vec<_> = advise(&quiet_raw()).collect();
        assert_eq!(messages, vec![FALLBACK_MSG]);
    }

    #[test]
    fn beef_over_threshold_yields_exactly_one_message() {
        let raw = RawInputs {
            beef_kg_per_week: 0.6,
            ..quiet_raw()
        };
        let messages: Vec<_> = advise(&raw).collect();
        assert_eq!(messages, vec![BEEF_MSG]);
    }

    #[test]
    fn beef_at_threshold_does_not_fire() {
        let raw = RawInputs {
            beef_kg_per_week: 0.5,
            ..quiet_raw()
        };
        let messages: Vec<_> = advise(&raw).collect();
        assert_eq!(messages, vec![FALLBACK_MSG], "threshold is strict >");
    }

    #[test]
    fn car_threshold_matches_the_selected_unit() {
        // 120 km is under the 160 km threshold.
        let km = RawInputs {
            car_distance: DistanceInput::Kilometers(120.0),
            ..quiet_raw()
        };
        assert_eq!(advise(&km).collect::<Vec<_>>(), vec![FALLBACK_MSG]);

        // 120 miles is over the 100 mile threshold.
        let miles = RawInputs {
            car_distance: DistanceInput::Miles(120.0),
            ..quiet_raw()
        };
        assert_eq!(advise(&miles).collect::<Vec<_>>(), vec![CAR_MSG]);
    }

    #[test]
    fn rules_fire_independently_in_fixed_order() {
        let raw = RawInputs {
            car_distance: DistanceInput::Kilometers(200.0),
            flight_km_per_year: 5000.0,
            kwh_per_month: 300.0,
            beef_kg_per_week: 1.0,
            ..quiet_raw()
        };
        let messages: Vec<_> = advise(&raw).collect();
        assert_eq!(
            messages,
            vec![BEEF_MSG, CAR_MSG, ELECTRICITY_MSG, FLIGHT_MSG]
        );
    }

    #[test]
    fn fallback_is_suppressed_when_any_rule_fires() {
        let raw = RawInputs {
            kwh_per_month: 250.0,
            ..quiet_raw()
        };
        let messages: Vec<_> = advise(&raw).collect();
        assert_eq!(messages, vec![ELECTRICITY_MSG]);
        assert!(!messages.contains(&FALLBACK_MSG));
    }

    #[test]
    fn advise_is_deterministic() {
        let raw = RawInputs {
            beef_kg_per_week: 2.0,
            flight_km_per_year: 4000.0,
            ..quiet_raw()
        };
        let first: Vec<_> = advise(&raw).collect();
        let second: Vec<_> = advise(&raw).collect();
        assert_eq!(first, second);
    }
}
