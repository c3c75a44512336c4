mod error;
pub use error::MetricError;

pub mod weekday;
pub use weekday::Weekday;

pub mod metrics;
pub use metrics::{AverageMetric, DailyStatistic, DiscreteMetric, MetricType, QuantitySample};
