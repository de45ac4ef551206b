use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::modules::models::race::RaceRecord;

/// # a driver followed by the points chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackedDriver {
    pub driver_id: String,
    pub name: String,
    pub constructor: String,
}

/// # the running totals after one race
/// one snapshot per processed round, keyed by driver id.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CumulativePoint {
    pub round: u32,
    pub totals: HashMap<String, f64>,
}

/// points arrive as strings and carry fractions (half points for shortened
/// races). malformed values score zero instead of aborting the calculation.
pub fn parse_points(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// # fold race results into running per-driver totals
/// a prefix sum over the round-ordered result stream, computed independently
/// per tracked driver. a driver without a result in a round carries their
/// total forward unchanged; untracked drivers are ignored, not stored.
pub fn cumulative_points(races: &[RaceRecord], tracked: &[TrackedDriver]) -> Vec<CumulativePoint> {
    let mut running: HashMap<String, f64> = tracked
        .iter()
        .map(|driver| (driver.driver_id.clone(), 0.0))
        .collect();

    races
        .iter()
        .map(|race| {
            for entry in &race.results {
                if let Some(total) = running.get_mut(&entry.driver.driver_id) {
                    *total += parse_points(&entry.points);
                }
            }

            CumulativePoint {
                round: race.round,
                totals: running.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::models::race::{Circuit, CircuitLocation, RaceResultEntry};
    use crate::modules::models::standings::{ConstructorInfo, DriverInfo};

    fn tracked(driver_id: &str) -> TrackedDriver {
        TrackedDriver {
            driver_id: driver_id.to_string(),
            name: driver_id.to_string(),
            constructor: "McLaren".to_string(),
        }
    }

    fn result_entry(driver_id: &str, points: &str) -> RaceResultEntry {
        RaceResultEntry {
            position: "1".to_string(),
            points: points.to_string(),
            driver: DriverInfo {
                driver_id: driver_id.to_string(),
                given_name: driver_id.to_string(),
                family_name: driver_id.to_string(),
                code: None,
                nationality: None,
            },
            constructor: ConstructorInfo {
                constructor_id: "mclaren".to_string(),
                name: "McLaren".to_string(),
                nationality: None,
            },
            time: None,
            status: None,
        }
    }

    fn race(round: u32, results: Vec<RaceResultEntry>) -> RaceRecord {
        RaceRecord {
            round,
            race_name: format!("Race {round}"),
            circuit: Circuit {
                circuit_id: "albert_park".to_string(),
                circuit_name: "Albert Park".to_string(),
                location: CircuitLocation {
                    locality: "Melbourne".to_string(),
                    country: "Australia".to_string(),
                },
            },
            date: None,
            results,
            qualifying: Vec::new(),
        }
    }

    #[test]
    fn sums_points_race_by_race() {
        let races = vec![
            race(1, vec![result_entry("a", "10"), result_entry("b", "0")]),
            race(2, vec![result_entry("b", "8")]),
            race(3, vec![result_entry("a", "5"), result_entry("b", "2")]),
        ];

        let snapshots = cumulative_points(&races, &[tracked("a"), tracked("b")]);

        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[0].totals["a"], 10.0);
        assert_eq!(snapshots[0].totals["b"], 0.0);
        assert_eq!(snapshots[1].totals["a"], 10.0);
        assert_eq!(snapshots[1].totals["b"], 8.0);
        assert_eq!(snapshots[2].totals["a"], 15.0);
        assert_eq!(snapshots[2].totals["b"], 10.0);
    }

    #[test]
    fn totals_never_decrease() {
        let races = vec![
            race(1, vec![result_entry("a", "25"), result_entry("b", "12.5")]),
            race(2, vec![result_entry("b", "18")]),
            race(3, vec![]),
            race(4, vec![result_entry("a", "25")]),
        ];

        let snapshots = cumulative_points(&races, &[tracked("a"), tracked("b")]);

        for window in snapshots.windows(2) {
            for (driver_id, total) in &window[1].totals {
                assert!(*total >= window[0].totals[driver_id]);
            }
        }
    }

    #[test]
    fn untracked_drivers_are_ignored() {
        let races = vec![race(
            1,
            vec![result_entry("a", "25"), result_entry("somebody_else", "18")],
        )];

        let snapshots = cumulative_points(&races, &[tracked("a")]);

        assert_eq!(snapshots[0].totals.len(), 1);
        assert_eq!(snapshots[0].totals["a"], 25.0);
    }

    #[test]
    fn empty_tracked_set_yields_empty_snapshots() {
        let races = vec![race(1, vec![result_entry("a", "25")])];

        let snapshots = cumulative_points(&races, &[]);

        assert_eq!(snapshots.len(), 1);
        assert!(snapshots[0].totals.is_empty());
    }

    #[test]
    fn malformed_points_score_zero() {
        let races = vec![race(
            1,
            vec![result_entry("a", "not a number"), result_entry("a", "7.5")],
        )];

        let snapshots = cumulative_points(&races, &[tracked("a")]);

        assert_eq!(snapshots[0].totals["a"], 7.5);
    }
}
