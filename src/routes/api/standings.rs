use log::error;
use rocket::get;
use rocket::http::Status;
use serde::{Deserialize, Serialize};

use rocket::http::ContentType;
use rocket::response;
use rocket::response::{Responder, Response};
use rocket::Request;

use json_response_derive::JsonResponse;

use crate::modules::formula_api;
use crate::modules::models::standings::{ConstructorStanding, DriverStanding};

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

#[get("/standings/drivers")]
pub async fn drivers() -> Result<ApiDriverStandings, Status> {
    let list = match formula_api::fetch_driver_standings().await {
        Ok(Some(list)) => list,
        Ok(None) => return Err(Status::NotFound),
        Err(error) => {
            error!(target: "routes/api/standings:drivers", "Error getting driver standings. (error: {})", error);
            return Err(Status::InternalServerError);
        }
    };

    Ok(ApiDriverStandings {
        season: list.season.clone(),
        round: list.round.clone(),
        standings: list.driver_standings,
    })
}

#[get("/standings/constructors")]
pub async fn constructors() -> Result<ApiConstructorStandings, Status> {
    let list = match formula_api::fetch_constructor_standings().await {
        Ok(Some(list)) => list,
        Ok(None) => return Err(Status::NotFound),
        Err(error) => {
            error!(target: "routes/api/standings:constructors", "Error getting constructor standings. (error: {})", error);
            return Err(Status::InternalServerError);
        }
    };

    Ok(ApiConstructorStandings {
        season: list.season.clone(),
        round: list.round.clone(),
        standings: list.constructor_standings,
    })
}

/**************************************************************************************************/
/**************** HELPERS *************************************************************************/
/**************************************************************************************************/

#[derive(Serialize, Deserialize, Clone, JsonResponse)]
pub struct ApiDriverStandings {
    pub season: String,
    pub round: String,
    pub standings: Vec<DriverStanding>,
}

#[derive(Serialize, Deserialize, Clone, JsonResponse)]
pub struct ApiConstructorStandings {
    pub season: String,
    pub round: String,
    pub standings: Vec<ConstructorStanding>,
}
