#[macro_use]
extern crate log;

mod store;
pub use store::{HealthStore, JsonSampleStore, SampleExport};

mod dashboard;
pub use dashboard::HealthDashboard;

pub mod fake;

pub mod algo {
    pub use healthtracker_algos::*;
}

pub mod types {
    pub use healthtracker_types::*;
}
