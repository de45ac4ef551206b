use log::info;
use serde_json::json;

use f1_championship_tracker::modules::formula_api::{
    fetch_constructor_standings, fetch_driver_standings, load_season_races,
};
use f1_championship_tracker::modules::helpers::logging::setup_logging;
use f1_championship_tracker::routes::api::races::race_card;

/// dump the season summary the site renders as one json document, for
/// scripting and offline inspection
#[tokio::main]
async fn main() {
    setup_logging().expect("Failed to setup logging");

    info!(target: "export_season", "exporting the current season");

    let (drivers, constructors, races) = tokio::join!(
        fetch_driver_standings(),
        fetch_constructor_standings(),
        load_season_races(),
    );

    let drivers = drivers.expect("Failed to fetch driver standings");
    let constructors = constructors.expect("Failed to fetch constructor standings");
    let races = races.expect("Failed to fetch race results");

    let summary = json!({
        "season": drivers.as_ref().map(|list| list.season.clone()),
        "round": drivers.as_ref().map(|list| list.round.clone()),
        "driver_standings": drivers.map(|list| list.driver_standings).unwrap_or_default(),
        "constructor_standings": constructors
            .map(|list| list.constructor_standings)
            .unwrap_or_default(),
        "calendar": races.iter().map(race_card).collect::<Vec<_>>(),
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).expect("Failed to serialize the season summary")
    );
}
