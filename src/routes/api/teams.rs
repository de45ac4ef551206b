use log::warn;
use rocket::get;
use rocket::http::Status;
use serde::Serialize;

use rocket::http::ContentType;
use rocket::response;
use rocket::response::{Responder, Response};
use rocket::Request;

use json_response_derive::JsonResponse;

use crate::modules::formula_api;
use crate::modules::helpers::lookup;
use crate::modules::models::points::parse_points;
use crate::modules::models::standings::ConstructorStanding;
use crate::modules::models::team::{sanitize_identifier, TeamProfile};

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

#[get("/teams")]
pub fn list() -> ApiTeamList {
    ApiTeamList {
        teams: TeamProfile::all().to_vec(),
    }
}

#[get("/teams/<team_id>")]
pub async fn detail(team_id: String) -> Result<ApiTeamDetail, Status> {
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

    // standings failures degrade to a profile-only response
    let standing = match constructors {
        Ok(list) => list.and_then(|list| list.constructor_entry(&team_id).cloned()),
        Err(error) => {
            warn!(target: "routes/api/teams:detail", "failed loading constructor standings. (team: {}, error: {})", team_id, error);
            None
        }
    };

    let drivers = match drivers {
        Ok(list) => list
            .map(|list| {
                list.drivers_for_constructor(&team_id)
                    .into_iter()
                    .map(|standing| ApiTeamDriver {
                        driver_id: standing.driver.driver_id.clone(),
                        name: standing.driver.full_name(),
                        points: parse_points(&standing.points),
                        wins: standing.wins.parse().unwrap_or(0),
                        image: lookup::driver_image_url(&standing.driver.driver_id)
                            .map(str::to_string),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        Err(error) => {
            warn!(target: "routes/api/teams:detail", "failed loading driver standings. (team: {}, error: {})", team_id, error);
            Vec::new()
        }
    };

    Ok(ApiTeamDetail {
        team: profile.clone(),
        standing,
        drivers,
    })
}

/**************************************************************************************************/
/**************** HELPERS *************************************************************************/
/**************************************************************************************************/

#[derive(Serialize, Clone, JsonResponse)]
pub struct ApiTeamList {
    pub teams: Vec<TeamProfile>,
}

#[derive(Serialize, Clone, JsonResponse)]
pub struct ApiTeamDetail {
    pub team: TeamProfile,
    pub standing: Option<ConstructorStanding>,
    pub drivers: Vec<ApiTeamDriver>,
}

#[derive(Serialize, Clone)]
pub struct ApiTeamDriver {
    pub driver_id: String,
    pub name: String,
    pub points: f64,
    pub wins: u32,
    pub image: Option<String>,
}
