use serde::{Deserialize, Serialize};

pub mod errors;

pub mod modules;
pub mod routes {
    pub mod home;
    pub mod teams;

    pub mod api {
        pub mod races;
        pub mod standings;
        pub mod teams;
    }
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct ChartDataset {
    pub label: String,
    pub color: String,
    pub data: Vec<f64>,
}
