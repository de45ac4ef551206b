use serde::{Deserialize, Serialize};

use crate::modules::models::points::TrackedDriver;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverInfo {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl DriverInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstructorInfo {
    #[serde(rename = "constructorId")]
    pub constructor_id: String,
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverStanding {
    pub position: String,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Driver")]
    pub driver: DriverInfo,
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<ConstructorInfo>,
}

impl DriverStanding {
    /// a driver's current constructor; mid-season seat swaps list several,
    /// the last one is the current seat
    pub fn constructor_name(&self) -> Option<&str> {
        self.constructors.last().map(|c| c.name.as_str())
    }

    pub fn drives_for(&self, constructor_id: &str) -> bool {
        self.constructors
            .iter()
            .any(|c| c.constructor_id == constructor_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstructorStanding {
    pub position: String,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Constructor")]
    pub constructor: ConstructorInfo,
}

/// # one season-cumulative standings table
/// sourced wholesale from the standings endpoints, never recomputed locally.
/// depending on the endpoint either the driver or the constructor list is
/// filled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StandingsList {
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub round: String,
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<DriverStanding>,
    #[serde(rename = "ConstructorStandings", default)]
    pub constructor_standings: Vec<ConstructorStanding>,
}

impl StandingsList {
    pub fn leader(&self) -> Option<&DriverStanding> {
        self.driver_standings.first()
    }

    pub fn top_drivers(&self, n: usize) -> &[DriverStanding] {
        &self.driver_standings[..n.min(self.driver_standings.len())]
    }

    /// # pick the drivers tracked by the points chart
    /// the tracked set is fixed before the calculation starts; results for
    /// anyone else are ignored by the calculator.
    pub fn tracked_drivers(&self, n: usize) -> Vec<TrackedDriver> {
        self.top_drivers(n)
            .iter()
            .map(|standing| TrackedDriver {
                driver_id: standing.driver.driver_id.clone(),
                name: standing.driver.full_name(),
                constructor: standing.constructor_name().unwrap_or_default().to_string(),
            })
            .collect()
    }

    pub fn constructor_entry(&self, constructor_id: &str) -> Option<&ConstructorStanding> {
        self.constructor_standings
            .iter()
            .find(|standing| standing.constructor.constructor_id == constructor_id)
    }

    pub fn drivers_for_constructor(&self, constructor_id: &str) -> Vec<&DriverStanding> {
        self.driver_standings
            .iter()
            .filter(|standing| standing.drives_for(constructor_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver_standing(driver_id: &str, position: &str, constructor_id: &str) -> DriverStanding {
        DriverStanding {
            position: position.to_string(),
            points: "100".to_string(),
            wins: "2".to_string(),
            driver: DriverInfo {
                driver_id: driver_id.to_string(),
                given_name: "Test".to_string(),
                family_name: driver_id.to_string(),
                code: None,
                nationality: None,
            },
            constructors: vec![ConstructorInfo {
                constructor_id: constructor_id.to_string(),
                name: constructor_id.to_string(),
                nationality: None,
            }],
        }
    }

    fn standings() -> StandingsList {
        StandingsList {
            season: "2025".to_string(),
            round: "14".to_string(),
            driver_standings: vec![
                driver_standing("piastri", "1", "mclaren"),
                driver_standing("norris", "2", "mclaren"),
                driver_standing("verstappen", "3", "red_bull"),
            ],
            constructor_standings: Vec::new(),
        }
    }

    #[test]
    fn top_drivers_is_bounded_by_the_table_size() {
        let list = standings();

        assert_eq!(list.top_drivers(2).len(), 2);
        assert_eq!(list.top_drivers(10).len(), 3);
        assert_eq!(list.leader().unwrap().driver.driver_id, "piastri");
    }

    #[test]
    fn tracked_drivers_carry_name_and_constructor() {
        let tracked = standings().tracked_drivers(2);

        assert_eq!(tracked.len(), 2);
        assert_eq!(tracked[0].driver_id, "piastri");
        assert_eq!(tracked[0].name, "Test piastri");
        assert_eq!(tracked[0].constructor, "mclaren");
    }

    #[test]
    fn filters_drivers_by_constructor() {
        let list = standings();

        let mclaren = list.drivers_for_constructor("mclaren");
        assert_eq!(mclaren.len(), 2);

        assert!(list.drivers_for_constructor("unknown_team").is_empty());
    }
}
