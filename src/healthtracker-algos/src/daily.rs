use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use healthtracker_types::{DailyStatistic, DiscreteMetric, MetricType, QuantitySample};

/// Collapses raw quantity samples into one value per calendar day over a
/// trailing window that ends on (and includes) `window_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyStatistics {
    pub window_end: NaiveDate,
    pub days: u32,
}

impl DailyStatistics {
    pub const DEFAULT_WINDOW_DAYS: u32 = 28;

    pub fn new(window_end: NaiveDate, days: u32) -> Self {
        Self { window_end, days }
    }

    pub fn trailing(window_end: NaiveDate) -> Self {
        Self::new(window_end, Self::DEFAULT_WINDOW_DAYS)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.window_end - TimeDelta::days(i64::from(self.days.saturating_sub(1)))
    }

    /// Half open `[from, to)` range covering the whole window, suitable for
    /// a store query.
    pub fn range(&self) -> (NaiveDateTime, NaiveDateTime) {
        let from = self.first_day().and_time(NaiveTime::MIN);
        let to = (self.window_end + TimeDelta::days(1)).and_time(NaiveTime::MIN);
        (from, to)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days > 0 && date >= self.first_day() && date <= self.window_end
    }

    /// One entry per day with at least one `metric` sample, oldest first.
    pub fn collect(&self, metric: MetricType, samples: &[QuantitySample]) -> Vec<DiscreteMetric> {
        let mut days: BTreeMap<NaiveDate, Vec<&QuantitySample>> = BTreeMap::new();
        for sample in samples
            .iter()
            .filter(|s| s.metric == metric && self.contains(s.date()))
        {
            days.entry(sample.date()).or_default().push(sample);
        }

        let statistic = metric.daily_statistic();
        let metrics = days
            .into_iter()
            .filter_map(|(date, day)| {
                let value = match statistic {
                    DailyStatistic::Sum => day.iter().map(|s| s.value).sum::<f64>(),
                    DailyStatistic::MostRecent => most_recent(&day)?,
                };
                Some(DiscreteMetric::new(date, value))
            })
            .collect::<Vec<_>>();

        trace!(
            "{} daily {} metrics between {} and {}",
            metrics.len(),
            metric,
            self.first_day(),
            self.window_end
        );

        metrics
    }
}

fn most_recent(day: &[&QuantitySample]) -> Option<f64> {
    // `max_by_key` keeps the last of equal keys, so ties go to input order
    day.iter().max_by_key(|s| s.start).map(|s| s.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    #[test]
    fn window_bounds() {
        let stats = DailyStatistics::trailing(date(28));
        assert_eq!(stats.first_day(), date(1));
        assert!(stats.contains(date(1)));
        assert!(stats.contains(date(28)));
        assert!(!stats.contains(date(29)));
        assert!(!stats.contains(NaiveDate::from_ymd_opt(2026, 9, 30).unwrap()));

        let (from, to) = stats.range();
        assert_eq!(from, at(1, 0));
        assert_eq!(to, at(29, 0));
    }

    #[test]
    fn empty_window_contains_nothing() {
        let stats = DailyStatistics::new(date(10), 0);
        assert!(!stats.contains(date(10)));
        let samples = [QuantitySample::new(MetricType::Steps, at(10, 9), 100.0)];
        assert!(stats.collect(MetricType::Steps, &samples).is_empty());
    }

    #[test]
    fn steps_are_summed_per_day() {
        let samples = [
            QuantitySample::new(MetricType::Steps, at(3, 8), 1000.0),
            QuantitySample::new(MetricType::Steps, at(3, 18), 2500.0),
            QuantitySample::new(MetricType::Steps, at(2, 12), 400.0),
            QuantitySample::new(MetricType::Weight, at(3, 7), 160.0),
        ];

        let metrics = DailyStatistics::trailing(date(5)).collect(MetricType::Steps, &samples);
        assert_eq!(
            metrics,
            vec![
                DiscreteMetric::new(date(2), 400.0),
                DiscreteMetric::new(date(3), 3500.0),
            ]
        );
    }

    #[test]
    fn weight_takes_most_recent_reading() {
        let samples = [
            QuantitySample::new(MetricType::Weight, at(4, 21), 163.2),
            QuantitySample::new(MetricType::Weight, at(4, 7), 161.0),
            QuantitySample::new(MetricType::Weight, at(5, 7), 162.4),
        ];

        let metrics = DailyStatistics::trailing(date(5)).collect(MetricType::Weight, &samples);
        assert_eq!(
            metrics,
            vec![
                DiscreteMetric::new(date(4), 163.2),
                DiscreteMetric::new(date(5), 162.4),
            ]
        );
    }

    #[test]
    fn weight_tie_goes_to_later_input() {
        let samples = [
            QuantitySample::new(MetricType::Weight, at(4, 7), 161.0),
            QuantitySample::new(MetricType::Weight, at(4, 7), 161.5),
        ];

        let metrics = DailyStatistics::trailing(date(4)).collect(MetricType::Weight, &samples);
        assert_eq!(metrics, vec![DiscreteMetric::new(date(4), 161.5)]);
    }

    #[test]
    fn samples_outside_window_are_dropped() {
        let samples = [
            QuantitySample::new(MetricType::Steps, at(1, 8), 1.0),
            QuantitySample::new(MetricType::Steps, at(2, 8), 2.0),
            QuantitySample::new(MetricType::Steps, at(9, 8), 9.0),
            QuantitySample::new(MetricType::Steps, at(10, 8), 10.0),
        ];

        let metrics = DailyStatistics::new(date(9), 8).collect(MetricType::Steps, &samples);
        let dates = metrics.iter().map(|m| m.date).collect::<Vec<_>>();
        assert_eq!(dates, vec![date(2), date(9)]);
    }
}
