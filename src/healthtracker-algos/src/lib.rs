#[macro_use]
extern crate log;

pub(crate) mod aggregator;
pub use aggregator::MetricAggregator;

pub(crate) mod daily;
pub use daily::DailyStatistics;

pub(crate) mod summary;
pub use summary::MetricSummary;

pub mod helpers;
