use log::warn;
use rocket::get;
use rocket_dyn_templates::Template;
use serde::Serialize;

use crate::modules::formula_api;
use crate::modules::helpers::lookup;
use crate::modules::models::standings::{DriverStanding, StandingsList};
use crate::routes::api::races::{progression_chart, race_card, ApiRace, CHART_DRIVER_COUNT};
use crate::ChartData;

/// # the home page
/// hero banner, championship standings, race carousel and points chart in
/// one view. the sections fetch independently; a failed section renders
/// empty while the rest of the page stays up.
#[get("/")]
pub async fn index() -> Template {
    let (standings, races) = tokio::join!(
        formula_api::fetch_driver_standings(),
        formula_api::load_season_races(),
    );

    let standings: Option<StandingsList> = match standings {
        Ok(standings) => standings,
        Err(error) => {
            warn!(target: "routes/home:index", "failed loading driver standings: {}", error);
            None
        }
    };

    let races = match races {
        Ok(races) => Some(races),
        Err(error) => {
            warn!(target: "routes/home:index", "failed loading the race calendar: {}", error);
            None
        }
    };

    let chart = match (&standings, &races) {
        (Some(standings), Some(races)) => Some(progression_chart(
            races,
            &standings.tracked_drivers(CHART_DRIVER_COUNT),
        )),
        _ => None,
    };

    let (season, round) = standings
        .as_ref()
        .map(|list| (list.season.clone(), list.round.clone()))
        .unwrap_or_default();

    let data = TemplateDataHome {
        season,
        round,
        leader: standings.as_ref().and_then(|list| list.leader()).map(standing_card),
        top_three: standings
            .as_ref()
            .map(|list| list.top_drivers(3).iter().map(standing_card).collect())
            .unwrap_or_default(),
        race_count: races.as_ref().map(Vec::len).unwrap_or(0),
        races: races
            .as_ref()
            .map(|races| races.iter().map(race_card).collect())
            .unwrap_or_default(),
        chart,
    };

    Template::render("index", data)
}

fn standing_card(standing: &DriverStanding) -> StandingCard {
    StandingCard {
        position: standing.position.clone(),
        name: standing.driver.full_name(),
        given_name: standing.driver.given_name.clone(),
        family_name: standing.driver.family_name.clone(),
        nationality: standing.driver.nationality.clone(),
        constructor: standing.constructor_name().unwrap_or_default().to_string(),
        color: lookup::constructor_color(standing.constructor_name().unwrap_or_default())
            .to_string(),
        points: standing.points.clone(),
        wins: standing.wins.clone(),
        image: lookup::driver_image_url(&standing.driver.driver_id).map(str::to_string),
    }
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct TemplateDataHome {
    pub season: String,
    pub round: String,
    pub leader: Option<StandingCard>,
    pub top_three: Vec<StandingCard>,
    pub race_count: usize,
    pub races: Vec<ApiRace>,
    pub chart: Option<ChartData>,
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct StandingCard {
    pub position: String,
    pub name: String,
    pub given_name: String,
    pub family_name: String,
    pub nationality: Option<String>,
    pub constructor: String,
    pub color: String,
    pub points: String,
    pub wins: String,
    pub image: Option<String>,
}
