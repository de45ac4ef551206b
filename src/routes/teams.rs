use log::warn;
use rocket::get;
use rocket::http::Status;
use rocket_dyn_templates::Template;
use serde::Serialize;

use crate::modules::formula_api;
use crate::modules::helpers::lookup;
use crate::modules::models::standings::ConstructorStanding;
use crate::modules::models::team::{sanitize_identifier, TeamProfile};

/// # the team listing page
/// static profiles joined with the live constructor standings; a standings
/// failure still renders every card, just without season numbers.
#[get("/")]
pub async fn list() -> Template {
    let standings = match formula_api::fetch_constructor_standings().await {
        Ok(standings) => standings,
        Err(error) => {
            warn!(target: "routes/teams:list", "failed loading constructor standings: {}", error);
            None
        }
    };

    let teams = TeamProfile::all()
        .iter()
        .map(|team| TeamCard {
            team: team.clone(),
            standing: standings
                .as_ref()
                .and_then(|list| list.constructor_entry(team.id))
                .cloned(),
        })
        .collect();

    Template::render("teams", TemplateDataTeams { teams })
}

#[get("/<team_id>")]
pub async fn detail(team_id: String) -> Result<Template, Status> {
    let sanitized = sanitize_identifier(&team_id);
    if sanitized != team_id {
        return Err(Status::BadRequest);
    }

    let profile = match TeamProfile::get(&team_id) {
        Some(profile) => profile,
        None => return Err(Status::NotFound),
    };

    let (constructors, drivers) = tokio::join!(
        formula_api::fetch_constructor_standings(),
        formula_api::fetch_driver_standings(),
    );

    let standing = match constructors {
        Ok(list) => list.and_then(|list| list.constructor_entry(&team_id).cloned()),
        Err(error) => {
            warn!(target: "routes/teams:detail", "failed loading constructor standings. (team: {}, error: {})", team_id, error);
            None
        }
    };

    let drivers = match drivers {
        Ok(list) => list
            .map(|list| {
                list.drivers_for_constructor(&team_id)
                    .into_iter()
                    .map(|standing| TeamDriverCard {
                        driver_id: standing.driver.driver_id.clone(),
                        given_name: standing.driver.given_name.clone(),
                        family_name: standing.driver.family_name.clone(),
                        points: standing.points.clone(),
                        wins: standing.wins.clone(),
                        image: lookup::driver_image_url(&standing.driver.driver_id)
                            .map(str::to_string),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        Err(error) => {
            warn!(target: "routes/teams:detail", "failed loading driver standings. (team: {}, error: {})", team_id, error);
            Vec::new()
        }
    };

    Ok(Template::render(
        "team",
        TemplateDataTeam {
            team: profile.clone(),
            standing,
            drivers,
        },
    ))
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct TemplateDataTeams {
    pub teams: Vec<TeamCard>,
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct TeamCard {
    pub team: TeamProfile,
    pub standing: Option<ConstructorStanding>,
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct TemplateDataTeam {
    pub team: TeamProfile,
    pub standing: Option<ConstructorStanding>,
    pub drivers: Vec<TeamDriverCard>,
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct TeamDriverCard {
    pub driver_id: String,
    pub given_name: String,
    pub family_name: String,
    pub points: String,
    pub wins: String,
    pub image: Option<String>,
}
