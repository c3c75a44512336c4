use std::fmt::Display;

use chrono::NaiveDate;
use healthtracker_algos::{DailyStatistics, MetricAggregator, MetricSummary};
use healthtracker_types::{AverageMetric, DiscreteMetric, MetricType, QuantitySample};

use crate::HealthStore;

/// Everything the dashboard shows, rebuilt on every fetch.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HealthDashboard {
    pub window: Option<DailyStatistics>,
    pub step_metrics: Vec<DiscreteMetric>,
    pub weight_metrics: Vec<DiscreteMetric>,
    pub step_averages: Vec<AverageMetric>,
    pub weight_difference_averages: Vec<AverageMetric>,
}

impl HealthDashboard {
    pub async fn fetch<S: HealthStore>(store: &S, today: NaiveDate) -> anyhow::Result<Self> {
        let mut dashboard = Self::default();
        dashboard.fetch_metrics(store, today).await?;
        Ok(dashboard)
    }

    /// Refreshes every category, steps first.
    pub async fn fetch_metrics<S: HealthStore>(
        &mut self,
        store: &S,
        today: NaiveDate,
    ) -> anyhow::Result<()> {
        for metric in MetricType::ALL {
            self.fetch_metric(store, metric, today).await?;
        }
        Ok(())
    }

    /// Refreshes one category and leaves the other untouched.
    pub async fn fetch_metric<S: HealthStore>(
        &mut self,
        store: &S,
        metric: MetricType,
        today: NaiveDate,
    ) -> anyhow::Result<()> {
        let window = DailyStatistics::trailing(today);
        self.window = Some(window);

        let daily = fetch_daily(store, metric, window).await?;
        match metric {
            MetricType::Steps => {
                self.step_averages = MetricAggregator::averages_by_weekday(&daily);
                self.step_metrics = daily;
            }
            MetricType::Weight => {
                self.weight_difference_averages =
                    MetricAggregator::averages_of_day_over_day_differences(&daily);
                self.weight_metrics = daily;
            }
        }
        Ok(())
    }

    /// Saves one reading, then refreshes only its category.
    pub async fn add_sample<S: HealthStore>(
        &mut self,
        store: &mut S,
        sample: QuantitySample,
        today: NaiveDate,
    ) -> anyhow::Result<()> {
        store.save_sample(sample).await?;
        self.fetch_metric(store, sample.metric, today).await
    }

    pub fn metrics(&self, metric: MetricType) -> &[DiscreteMetric] {
        match metric {
            MetricType::Steps => &self.step_metrics,
            MetricType::Weight => &self.weight_metrics,
        }
    }

    /// Steps are charted as plain weekday averages, weight as the average
    /// change from the previous day.
    pub fn weekday_averages(&self, metric: MetricType) -> &[AverageMetric] {
        match metric {
            MetricType::Steps => &self.step_averages,
            MetricType::Weight => &self.weight_difference_averages,
        }
    }

    pub fn average_step_count(&self) -> f64 {
        MetricSummary::overall_average(&self.step_metrics)
    }

    pub fn average_weight_difference(&self) -> f64 {
        MetricSummary::average_of_averages(&self.weight_difference_averages)
    }
}

async fn fetch_daily<S: HealthStore>(
    store: &S,
    metric: MetricType,
    window: DailyStatistics,
) -> anyhow::Result<Vec<DiscreteMetric>> {
    let (from, to) = window.range();
    let samples = store.quantity_samples(metric, from, to).await?;
    let metrics = window.collect(metric, &samples);
    info!(
        "{}: {} samples over {} days",
        metric,
        samples.len(),
        metrics.len()
    );
    Ok(metrics)
}

impl Display for HealthDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(window) = self.window {
            f.write_fmt(format_args!(
                "Window: {} - {}\n\n",
                window.first_day(),
                window.window_end
            ))?;
        }

        f.write_fmt(format_args!(
            "Steps\n\tAverage: {}\n\tBy weekday:\n",
            MetricType::Steps.format_value(self.average_step_count())
        ))?;
        for average in &self.step_averages {
            f.write_fmt(format_args!(
                "\t\t{}: {}\n",
                average.weekday.short_symbol(),
                MetricType::Steps.format_value(average.value)
            ))?;
        }

        f.write_str("\nWeight\n")?;
        if let Some(latest) = self.weight_metrics.last() {
            f.write_fmt(format_args!(
                "\tLatest: {} ({})\n",
                MetricType::Weight.format_value(latest.value),
                latest.date
            ))?;
        }
        if let Some(lowest) = MetricSummary::min_value(&self.weight_metrics) {
            f.write_fmt(format_args!(
                "\tLowest: {}\n",
                MetricType::Weight.format_value(lowest)
            ))?;
        }
        f.write_fmt(format_args!(
            "\tAverage change: {:+.2} {}\n\tChange by weekday:",
            self.average_weight_difference(),
            MetricType::Weight.unit()
        ))?;
        for average in &self.weight_difference_averages {
            f.write_fmt(format_args!(
                "\n\t\t{}: {:+.2} {}",
                average.weekday.short_symbol(),
                average.value,
                MetricType::Weight.unit()
            ))?;
        }

        Ok(())
    }
}
