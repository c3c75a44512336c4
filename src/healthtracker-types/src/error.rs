use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MetricError {
    #[error("unknown weekday: `{0}`")]
    UnknownWeekday(String),
    #[error("unknown metric type: `{0}`")]
    UnknownMetricType(String),
    #[error("{metric} sample at {start} has a non-finite value")]
    NonFiniteValue { metric: String, start: String },
    #[error("{metric} sample at {start} has a negative value: {value}")]
    NegativeValue {
        metric: String,
        start: String,
        value: f64,
    },
}
