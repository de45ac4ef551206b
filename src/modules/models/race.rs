use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::formula_api::RaceTablePayload;
use crate::modules::models::standings::{ConstructorInfo, DriverInfo};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircuitLocation {
    pub locality: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Circuit {
    #[serde(rename = "circuitId")]
    pub circuit_id: String,
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
    #[serde(rename = "Location")]
    pub location: CircuitLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinishTime {
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceResultEntry {
    pub position: String,
    pub points: String,
    #[serde(rename = "Driver")]
    pub driver: DriverInfo,
    #[serde(rename = "Constructor")]
    pub constructor: ConstructorInfo,
    #[serde(rename = "Time", default)]
    pub time: Option<FinishTime>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualifyingEntry {
    pub position: String,
    #[serde(rename = "Driver")]
    pub driver: DriverInfo,
    #[serde(rename = "Constructor")]
    pub constructor: ConstructorInfo,
    #[serde(rename = "Q1", default)]
    pub q1: Option<String>,
    #[serde(rename = "Q2", default)]
    pub q2: Option<String>,
    #[serde(rename = "Q3", default)]
    pub q3: Option<String>,
}

/// # one race as it arrives from a single page
/// the result and qualifying lists may be partial when the source truncates
/// a race at a page boundary. fragments sharing a round are merged by
/// [`merge_race_pages`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceFragment {
    pub round: String,
    #[serde(rename = "raceName")]
    pub race_name: String,
    #[serde(rename = "Circuit")]
    pub circuit: Circuit,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "Results", default)]
    pub results: Vec<RaceResultEntry>,
    #[serde(rename = "QualifyingResults", default)]
    pub qualifying: Vec<QualifyingEntry>,
}

/// # a fully merged race
/// identity key is `round`, unique within the season.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RaceRecord {
    pub round: u32,
    pub race_name: String,
    pub circuit: Circuit,
    pub date: Option<NaiveDate>,
    pub results: Vec<RaceResultEntry>,
    pub qualifying: Vec<QualifyingEntry>,
}

impl RaceRecord {
    fn from_fragment(round: u32, fragment: RaceFragment) -> RaceRecord {
        RaceRecord {
            round,
            race_name: fragment.race_name,
            circuit: fragment.circuit,
            date: fragment.date,
            results: fragment.results,
            qualifying: fragment.qualifying,
        }
    }

    /// additive merge: entries are appended, never replaced. the source does
    /// not repeat individual result entries across fragments of one round.
    fn absorb(&mut self, fragment: RaceFragment) {
        self.results.extend(fragment.results);
        self.qualifying.extend(fragment.qualifying);

        if self.date.is_none() {
            self.date = fragment.date;
        }
    }

    /// # get the top three finishers
    pub fn podium(&self) -> Vec<&RaceResultEntry> {
        let mut entries: Vec<&RaceResultEntry> = self.results.iter().collect();
        entries.sort_by_key(|entry| entry.position.parse::<u32>().unwrap_or(u32::MAX));

        entries.into_iter().take(3).collect()
    }

    /// # get the pole sitter
    pub fn pole_position(&self) -> Option<&QualifyingEntry> {
        self.qualifying.iter().find(|entry| entry.position == "1")
    }

    /// # get the pole lap time
    /// the best time set in the last session the pole sitter ran
    pub fn pole_time(&self) -> Option<&str> {
        let pole = self.pole_position()?;

        pole.q3
            .as_deref()
            .or(pole.q2.as_deref())
            .or(pole.q1.as_deref())
    }
}

/// # merge paginated race pages
/// fold every fragment of every page into an accumulator keyed by round and
/// return the records sorted by round ascending. the arrival order of pages
/// does not matter. a single failed page fails the whole merge and yields no
/// partial output.
pub fn merge_race_pages<I>(pages: I) -> CustomResult<Vec<RaceRecord>>
where
    I: IntoIterator<Item = CustomResult<RaceTablePayload>>,
{
    let mut merged: BTreeMap<u32, RaceRecord> = BTreeMap::new();

    for page in pages {
        for fragment in page?.race_table.races {
            absorb_fragment(&mut merged, fragment);
        }
    }

    Ok(merged.into_values().collect())
}

fn absorb_fragment(merged: &mut BTreeMap<u32, RaceRecord>, fragment: RaceFragment) {
    let round: u32 = match fragment.round.parse() {
        Ok(round) if round > 0 => round,
        _ => {
            warn!(target: "race_merge", "ignoring race fragment with invalid round `{}`", fragment.round);
            return;
        }
    };

    match merged.entry(round) {
        Entry::Vacant(entry) => {
            entry.insert(RaceRecord::from_fragment(round, fragment));
        }
        Entry::Occupied(mut entry) => entry.get_mut().absorb(fragment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::modules::formula_api::RaceTable;

    fn circuit(id: &str) -> Circuit {
        Circuit {
            circuit_id: id.to_string(),
            circuit_name: format!("{id} circuit"),
            location: CircuitLocation {
                locality: "Somewhere".to_string(),
                country: "Somewhere".to_string(),
            },
        }
    }

    fn result_entry(driver_id: &str, position: &str, points: &str) -> RaceResultEntry {
        RaceResultEntry {
            position: position.to_string(),
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

    fn fragment(round: &str, results: Vec<RaceResultEntry>) -> RaceFragment {
        RaceFragment {
            round: round.to_string(),
            race_name: format!("Race {round}"),
            circuit: circuit("albert_park"),
            date: None,
            results,
            qualifying: Vec::new(),
        }
    }

    fn page(races: Vec<RaceFragment>) -> RaceTablePayload {
        RaceTablePayload {
            total: races.len().to_string(),
            race_table: RaceTable {
                season: "2025".to_string(),
                races,
            },
        }
    }

    #[test]
    fn merges_out_of_order_pages_into_round_order() {
        let pages = vec![
            Ok(page(vec![fragment("3", vec![]), fragment("4", vec![])])),
            Ok(page(vec![fragment("1", vec![]), fragment("2", vec![])])),
        ];

        let races = merge_race_pages(pages).unwrap();

        let rounds: Vec<u32> = races.iter().map(|race| race.round).collect();
        assert_eq!(rounds, vec![1, 2, 3, 4]);
    }

    #[test]
    fn unions_fragments_sharing_a_round() {
        let first = fragment(
            "2",
            vec![
                result_entry("norris", "1", "25"),
                result_entry("piastri", "2", "18"),
            ],
        );
        let second = fragment("2", vec![result_entry("leclerc", "3", "15")]);

        let races =
            merge_race_pages(vec![Ok(page(vec![first])), Ok(page(vec![second]))]).unwrap();

        assert_eq!(races.len(), 1);
        assert_eq!(races[0].results.len(), 3);
    }

    #[test]
    fn zero_pages_yield_an_empty_calendar() {
        let races = merge_race_pages(Vec::<CustomResult<RaceTablePayload>>::new()).unwrap();
        assert!(races.is_empty());

        let races = merge_race_pages(vec![Ok(page(Vec::new()))]).unwrap();
        assert!(races.is_empty());
    }

    #[test]
    fn one_failed_page_fails_the_whole_merge() {
        let pages = vec![
            Ok(page(vec![fragment("1", vec![result_entry("norris", "1", "25")])])),
            Err(Error::InvalidTotal {
                value: "garbage".to_string(),
                source: "garbage".parse::<u32>().unwrap_err(),
            }),
        ];

        assert!(merge_race_pages(pages).is_err());
    }

    #[test]
    fn fragments_with_invalid_rounds_are_ignored() {
        let pages = vec![Ok(page(vec![
            fragment("not-a-round", vec![]),
            fragment("0", vec![]),
            fragment("1", vec![]),
        ]))];

        let races = merge_race_pages(pages).unwrap();

        assert_eq!(races.len(), 1);
        assert_eq!(races[0].round, 1);
    }

    #[test]
    fn podium_is_position_ordered() {
        let race = RaceRecord::from_fragment(
            1,
            fragment(
                "1",
                vec![
                    result_entry("russell", "4", "12"),
                    result_entry("leclerc", "3", "15"),
                    result_entry("norris", "1", "25"),
                    result_entry("piastri", "2", "18"),
                ],
            ),
        );

        let podium = race.podium();

        let ids: Vec<&str> = podium.iter().map(|e| e.driver.driver_id.as_str()).collect();
        assert_eq!(ids, vec!["norris", "piastri", "leclerc"]);
    }

    #[test]
    fn pole_time_prefers_the_latest_session() {
        let mut race = RaceRecord::from_fragment(1, fragment("1", vec![]));
        race.qualifying.push(QualifyingEntry {
            position: "1".to_string(),
            driver: DriverInfo {
                driver_id: "verstappen".to_string(),
                given_name: "Max".to_string(),
                family_name: "Verstappen".to_string(),
                code: Some("VER".to_string()),
                nationality: None,
            },
            constructor: ConstructorInfo {
                constructor_id: "red_bull".to_string(),
                name: "Red Bull".to_string(),
                nationality: None,
            },
            q1: Some("1:21.500".to_string()),
            q2: Some("1:20.800".to_string()),
            q3: None,
        });

        assert_eq!(race.pole_time(), Some("1:20.800"));
    }
}
