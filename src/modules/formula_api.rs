use std::env;

use dotenvy::dotenv;
use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use snafu::ResultExt;
use tokio::task::JoinSet;

use crate::errors::{self, CustomResult};
use crate::modules::models::race::{merge_race_pages, RaceFragment, RaceRecord};
use crate::modules::models::standings::StandingsList;

const DEFAULT_API_URL: &str = "https://api.jolpi.ca/ergast/f1";

/// page size used for every paginated request. the loop bound is the
/// server-reported total, never this constant.
pub const PAGE_SIZE: u32 = 100;

pub fn api_base_url() -> String {
    dotenv().ok();

    env::var("FORMULA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// # get the current driver standings
/// single non-paginated fetch. the api wraps the season standings in a list
/// which is empty before the first race, hence the `Option`.
pub async fn fetch_driver_standings() -> CustomResult<Option<StandingsList>> {
    let url = format!("{}/current/driverstandings.json", api_base_url());
    info!(target: "formula_api", "querying driver standings");

    let response: StandingsResponse = get_json(&url).await?;
    Ok(response.data.standings_table.standings_lists.into_iter().next())
}

/// # get the current constructor standings
pub async fn fetch_constructor_standings() -> CustomResult<Option<StandingsList>> {
    let url = format!("{}/current/constructorstandings.json", api_base_url());
    info!(target: "formula_api", "querying constructor standings");

    let response: StandingsResponse = get_json(&url).await?;
    Ok(response.data.standings_table.standings_lists.into_iter().next())
}

/// # load the full season calendar
/// fetch every race-result page and every qualifying page, then merge the
/// fragments into one round-sorted list. a single failed page fails the
/// whole call; the caller renders an empty view instead of a partial one.
pub async fn load_season_races() -> CustomResult<Vec<RaceRecord>> {
    let (results, qualifying) = tokio::join!(
        fetch_result_pages("results"),
        fetch_result_pages("qualifying"),
    );

    let pages = results?.into_iter().chain(qualifying?);
    merge_race_pages(pages.map(Ok))
}

/// # fetch all pages of a race-table endpoint
/// page 0 is fetched first to learn the server's total; the remaining
/// offsets are fetched concurrently. the total is authoritative on every
/// response, so if a later page raises it another round of fetches picks up
/// the remainder. no retries.
pub async fn fetch_result_pages(endpoint: &str) -> CustomResult<Vec<RaceTablePayload>> {
    let base = api_base_url();

    info!(target: "formula_api", "querying {} page at offset 0", endpoint);
    let first: ResultsResponse = get_json(&page_url(&base, endpoint, 0)).await?;

    let mut total = parse_total(&first.data.total)?;
    let mut pages = vec![first.data];
    let mut offset = PAGE_SIZE;

    while offset < total {
        let mut tasks = JoinSet::new();
        while offset < total {
            let url = page_url(&base, endpoint, offset);
            tasks.spawn(async move { get_json::<ResultsResponse>(&url).await });
            offset += PAGE_SIZE;
        }

        while let Some(joined) = tasks.join_next().await {
            let response = joined.context(errors::PageJoinSnafu)??;
            total = parse_total(&response.data.total)?;
            pages.push(response.data);
        }
    }

    Ok(pages)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> CustomResult<T> {
    let response = reqwest::get(url)
        .await
        .context(errors::ApiRequestSnafu { url })?;

    let body = response.text().await.context(errors::ApiBodySnafu { url })?;

    serde_json::from_str(&body).context(errors::ApiDecodeSnafu { url })
}

fn page_url(base: &str, endpoint: &str, offset: u32) -> String {
    format!("{base}/current/{endpoint}.json?limit={PAGE_SIZE}&offset={offset}")
}

fn parse_total(value: &str) -> CustomResult<u32> {
    value.parse().context(errors::InvalidTotalSnafu { value })
}

#[derive(Debug, Deserialize)]
pub struct ResultsResponse {
    #[serde(rename = "MRData")]
    pub data: RaceTablePayload,
}

#[derive(Debug, Deserialize)]
pub struct RaceTablePayload {
    pub total: String,
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

#[derive(Debug, Deserialize)]
pub struct RaceTable {
    pub season: String,
    #[serde(rename = "Races")]
    pub races: Vec<RaceFragment>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsResponse {
    #[serde(rename = "MRData")]
    pub data: StandingsPayload,
}

#[derive(Debug, Deserialize)]
pub struct StandingsPayload {
    pub total: String,
    #[serde(rename = "StandingsTable")]
    pub standings_table: StandingsTable,
}

#[derive(Debug, Deserialize)]
pub struct StandingsTable {
    pub season: String,
    #[serde(rename = "StandingsLists")]
    pub standings_lists: Vec<StandingsList>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_FIXTURE: &str = r#"{
        "MRData": {
            "total": "2",
            "limit": "100",
            "offset": "0",
            "RaceTable": {
                "season": "2025",
                "Races": [{
                    "round": "1",
                    "raceName": "Australian Grand Prix",
                    "date": "2025-03-16",
                    "Circuit": {
                        "circuitId": "albert_park",
                        "circuitName": "Albert Park Grand Prix Circuit",
                        "Location": {"locality": "Melbourne", "country": "Australia"}
                    },
                    "Results": [{
                        "position": "1",
                        "points": "25",
                        "Driver": {
                            "driverId": "norris",
                            "givenName": "Lando",
                            "familyName": "Norris",
                            "code": "NOR",
                            "nationality": "British"
                        },
                        "Constructor": {"constructorId": "mclaren", "name": "McLaren"}
                    }]
                }]
            }
        }
    }"#;

    const STANDINGS_FIXTURE: &str = r#"{
        "MRData": {
            "total": "1",
            "StandingsTable": {
                "season": "2025",
                "StandingsLists": [{
                    "season": "2025",
                    "round": "14",
                    "DriverStandings": [{
                        "position": "1",
                        "points": "284",
                        "wins": "6",
                        "Driver": {
                            "driverId": "piastri",
                            "givenName": "Oscar",
                            "familyName": "Piastri",
                            "code": "PIA",
                            "nationality": "Australian"
                        },
                        "Constructors": [{"constructorId": "mclaren", "name": "McLaren"}]
                    }]
                }]
            }
        }
    }"#;

    #[test]
    fn decodes_race_table_envelope() {
        let response: ResultsResponse = serde_json::from_str(RESULTS_FIXTURE).unwrap();

        assert_eq!(response.data.total, "2");
        assert_eq!(response.data.race_table.season, "2025");

        let race = &response.data.race_table.races[0];
        assert_eq!(race.round, "1");
        assert_eq!(race.circuit.circuit_id, "albert_park");
        assert_eq!(race.results[0].driver.driver_id, "norris");
        assert_eq!(race.results[0].points, "25");
    }

    #[test]
    fn decodes_standings_envelope() {
        let response: StandingsResponse = serde_json::from_str(STANDINGS_FIXTURE).unwrap();

        let list = &response.data.standings_table.standings_lists[0];
        assert_eq!(list.round, "14");
        assert_eq!(list.driver_standings[0].driver.driver_id, "piastri");
        assert_eq!(list.driver_standings[0].wins, "6");
    }

    #[test]
    fn parses_totals() {
        assert_eq!(parse_total("53").unwrap(), 53);
        assert!(parse_total("not a number").is_err());
    }
}
