use std::collections::HashMap;

use rocket::fs::{relative, FileServer};
use rocket::{Build, Request, Rocket};
use rocket_dyn_templates::Template;

use f1_championship_tracker::modules::helpers::fairings::cors::CORS;
use f1_championship_tracker::modules::helpers::handlebars::driver_initials::DriverInitialsHelper;
use f1_championship_tracker::modules::helpers::handlebars::format_date::FormatDateHelper;
use f1_championship_tracker::modules::helpers::handlebars::format_points::FormatPointsHelper;
use f1_championship_tracker::modules::helpers::handlebars::to_json::ToJsonHelper;
use f1_championship_tracker::modules::helpers::logging::setup_logging;
use f1_championship_tracker::modules::track_selection::TrackSelection;

#[macro_use]
extern crate rocket;

use f1_championship_tracker::routes::{api, home, teams};

#[catch(404)]
fn not_found(req: &Request) -> Template {
    let mut context = HashMap::new();
    context.insert("uri", req.uri().to_string());

    Template::render("error/404", context)
}

#[launch]
fn rocket() -> Rocket<Build> {
    setup_logging().expect("Failed to setup logging");

    rocket::build()
        .attach(CORS)
        .attach(Template::custom(|engines| {
            engines
                .handlebars
                .register_helper("formatDate", Box::new(FormatDateHelper));
            engines
                .handlebars
                .register_helper("formatPoints", Box::new(FormatPointsHelper));
            engines
                .handlebars
                .register_helper("driverInitials", Box::new(DriverInitialsHelper));
            engines
                .handlebars
                .register_helper("toJson", Box::new(ToJsonHelper));
            engines.handlebars.set_strict_mode(true);
        }))
        .manage(TrackSelection::new())
        .mount("/", routes![home::index])
        .mount("/teams", routes![teams::list, teams::detail])
        .mount(
            "/api",
            routes![
                // standings
                api::standings::drivers,
                api::standings::constructors,
                // calendar
                api::races::calendar,
                api::races::points_progression,
                api::races::selected_round,
                api::races::select_round,
                // teams
                api::teams::list,
                api::teams::detail,
            ],
        )
        .mount("/static", FileServer::from(relative!("static")))
        .register("/", catchers![not_found])
}
