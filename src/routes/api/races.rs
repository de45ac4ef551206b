use chrono::NaiveDate;
use log::error;
use rocket::http::uri::Origin;
use rocket::http::Status;
use rocket::{get, post, State};
use serde::{Deserialize, Serialize};

use rocket::http::ContentType;
use rocket::response;
use rocket::response::{Responder, Response};
use rocket::Request;

use json_response_derive::JsonResponse;

use crate::modules::formula_api;
use crate::modules::helpers::lookup;
use crate::modules::helpers::math::Math;
use crate::modules::models::points::{cumulative_points, TrackedDriver};
use crate::modules::models::race::RaceRecord;
use crate::modules::track_selection::TrackSelection;
use crate::{ChartData, ChartDataset};

/// default size of the tracked-driver set for the progression chart
pub const CHART_DRIVER_COUNT: usize = 5;
const CHART_DRIVER_LIMIT: usize = 10;

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

#[get("/calendar")]
pub async fn calendar(origin: &Origin<'_>) -> Result<ApiCalendar, Status> {
    let races = match formula_api::load_season_races().await {
        Ok(races) => races,
        Err(error) => {
            error!(target: "routes/api/races:calendar", "Error loading the calendar. (uri: {}, error: {})", origin.path(), error);
            return Err(Status::InternalServerError);
        }
    };

    Ok(ApiCalendar {
        races: races.iter().map(race_card).collect(),
    })
}

#[get("/points-progression?<drivers>")]
pub async fn points_progression(drivers: Option<usize>) -> Result<ApiChart, Status> {
    let tracked_count = drivers.unwrap_or(CHART_DRIVER_COUNT).min(CHART_DRIVER_LIMIT);

    let (standings, races) = tokio::join!(
        formula_api::fetch_driver_standings(),
        formula_api::load_season_races(),
    );

    let standings = match standings {
        Ok(standings) => standings.unwrap_or_default(),
        Err(error) => {
            error!(target: "routes/api/races:points_progression", "Error getting driver standings. (error: {})", error);
            return Err(Status::InternalServerError);
        }
    };

    let races = match races {
        Ok(races) => races,
        Err(error) => {
            error!(target: "routes/api/races:points_progression", "Error loading race results. (error: {})", error);
            return Err(Status::InternalServerError);
        }
    };

    Ok(ApiChart {
        season: standings.season.clone(),
        chart: progression_chart(&races, &standings.tracked_drivers(tracked_count)),
    })
}

#[get("/selected-round")]
pub fn selected_round(selection: &State<TrackSelection>) -> ApiSelectedRound {
    ApiSelectedRound {
        selected_round: selection.selected_round(),
    }
}

#[post("/selected-round?<round>")]
pub fn select_round(round: Option<u32>, selection: &State<TrackSelection>) -> ApiSelectedRound {
    selection.select_round(round);

    ApiSelectedRound {
        selected_round: selection.selected_round(),
    }
}

/**************************************************************************************************/
/**************** HELPERS *************************************************************************/
/**************************************************************************************************/

/// # build the chart for a set of tracked drivers
/// one dataset per driver, one value per round, colored by constructor.
pub fn progression_chart(races: &[RaceRecord], tracked: &[TrackedDriver]) -> ChartData {
    let snapshots = cumulative_points(races, tracked);

    ChartData {
        labels: snapshots
            .iter()
            .map(|snapshot| format!("R{}", snapshot.round))
            .collect(),
        datasets: tracked
            .iter()
            .map(|driver| ChartDataset {
                label: driver.name.clone(),
                color: lookup::constructor_color(&driver.constructor).to_string(),
                data: snapshots
                    .iter()
                    .map(|snapshot| {
                        let total = snapshot.totals.get(&driver.driver_id).copied().unwrap_or(0.0);
                        Math::round_float_to_n_decimals(total, 1)
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// # build the carousel view of one race
pub fn race_card(race: &RaceRecord) -> ApiRace {
    let pole = race.pole_position().map(|entry| ApiPole {
        code: entry
            .driver
            .code
            .clone()
            .unwrap_or_else(|| entry.driver.family_name.clone()),
        name: entry.driver.full_name(),
        constructor: entry.constructor.name.clone(),
        color: lookup::constructor_color(&entry.constructor.name).to_string(),
        time: race.pole_time().map(str::to_string),
    });

    ApiRace {
        round: race.round,
        race_name: race.race_name.clone(),
        circuit_id: race.circuit.circuit_id.clone(),
        circuit_name: race.circuit.circuit_name.clone(),
        locality: race.circuit.location.locality.clone(),
        country: race.circuit.location.country.clone(),
        date: race.date,
        track_image: lookup::track_image_url(&race.circuit.circuit_id).map(str::to_string),
        pole,
        podium: race
            .podium()
            .into_iter()
            .map(|entry| ApiPodiumEntry {
                position: entry.position.clone(),
                code: entry
                    .driver
                    .code
                    .clone()
                    .unwrap_or_else(|| entry.driver.family_name.clone()),
                name: entry.driver.full_name(),
                constructor: entry.constructor.name.clone(),
                color: lookup::constructor_color(&entry.constructor.name).to_string(),
            })
            .collect(),
    }
}

#[derive(Serialize, Deserialize, Clone, JsonResponse)]
pub struct ApiCalendar {
    pub races: Vec<ApiRace>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ApiRace {
    pub round: u32,
    pub race_name: String,
    pub circuit_id: String,
    pub circuit_name: String,
    pub locality: String,
    pub country: String,
    pub date: Option<NaiveDate>,
    pub track_image: Option<String>,
    pub pole: Option<ApiPole>,
    pub podium: Vec<ApiPodiumEntry>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ApiPole {
    pub code: String,
    pub name: String,
    pub constructor: String,
    pub color: String,
    pub time: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ApiPodiumEntry {
    pub position: String,
    pub code: String,
    pub name: String,
    pub constructor: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, JsonResponse)]
pub struct ApiChart {
    pub season: String,
    pub chart: ChartData,
}

#[derive(Serialize, Deserialize, Clone, JsonResponse)]
pub struct ApiSelectedRound {
    pub selected_round: Option<u32>,
}
