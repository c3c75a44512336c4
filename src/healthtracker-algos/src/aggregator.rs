use std::collections::BTreeMap;

use healthtracker_types::{AverageMetric, DiscreteMetric, Weekday};

use crate::helpers::stats::order_independent_mean;

/// Weekday bucketing of daily metrics.
///
/// Both entry points are pure: they only read their input and return a
/// freshly built list, at most one entry per weekday, Sunday first.
pub struct MetricAggregator;

impl MetricAggregator {
    pub fn averages_by_weekday(samples: &[DiscreteMetric]) -> Vec<AverageMetric> {
        let mut buckets: BTreeMap<Weekday, Vec<f64>> = BTreeMap::new();
        for sample in samples {
            buckets.entry(sample.weekday()).or_default().push(sample.value);
        }

        buckets
            .into_iter()
            .map(|(weekday, mut values)| AverageMetric {
                weekday,
                value: order_independent_mean(&mut values),
            })
            .collect()
    }

    /// `samples` must be in ascending chronological order. Each difference
    /// is dated on the later day of its pair.
    pub fn day_over_day_differences(samples: &[DiscreteMetric]) -> Vec<DiscreteMetric> {
        samples
            .windows(2)
            .map(|pair| DiscreteMetric::new(pair[1].date, pair[1].value - pair[0].value))
            .collect()
    }

    pub fn averages_of_day_over_day_differences(samples: &[DiscreteMetric]) -> Vec<AverageMetric> {
        let differences = Self::day_over_day_differences(samples);
        Self::averages_by_weekday(&differences)
    }
}
