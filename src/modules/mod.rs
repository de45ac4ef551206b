pub mod formula_api;
pub mod track_selection;

pub mod models {
    pub mod points;
    pub mod race;
    pub mod standings;
    pub mod team;
}

pub mod helpers {
    pub mod logging;
    pub mod lookup;
    pub mod math;

    pub mod fairings {
        pub mod cors;
    }

    pub mod handlebars {
        pub mod driver_initials;
        pub mod format_date;
        pub mod format_points;
        pub mod to_json;
    }
}
