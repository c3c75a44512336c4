use healthtracker_types::{AverageMetric, DiscreteMetric};

use crate::helpers::stats::mean;

/// Single-number summaries shown next to the charts.
pub struct MetricSummary;

impl MetricSummary {
    pub fn overall_average(metrics: &[DiscreteMetric]) -> f64 {
        let values = metrics.iter().map(|m| m.value).collect::<Vec<_>>();
        mean(&values)
    }

    pub fn average_of_averages(averages: &[AverageMetric]) -> f64 {
        let values = averages.iter().map(|a| a.value).collect::<Vec<_>>();
        mean(&values)
    }

    pub fn min_value(metrics: &[DiscreteMetric]) -> Option<f64> {
        metrics.iter().map(|m| m.value).min_by(f64::total_cmp)
    }
}
