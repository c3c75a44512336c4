use std::{fmt::Display, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{MetricError, Weekday};

/// One category's reading for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscreteMetric {
    pub date: NaiveDate,
    pub value: f64,
}

impl DiscreteMetric {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::of(self.date)
    }
}

/// Mean of some metric's values on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageMetric {
    pub weekday: Weekday,
    pub value: f64,
}

/// How a day's worth of raw samples collapses into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyStatistic {
    Sum,
    MostRecent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Steps,
    Weight,
}

impl MetricType {
    pub const ALL: [MetricType; 2] = [MetricType::Steps, MetricType::Weight];

    pub fn daily_statistic(self) -> DailyStatistic {
        match self {
            MetricType::Steps => DailyStatistic::Sum,
            MetricType::Weight => DailyStatistic::MostRecent,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            MetricType::Steps => "steps",
            MetricType::Weight => "lb",
        }
    }

    /// Fractional digits used when showing a value of this category.
    pub fn precision(self) -> usize {
        match self {
            MetricType::Steps => 0,
            MetricType::Weight => 1,
        }
    }

    pub fn format_value(self, value: f64) -> String {
        format!("{:.*} {}", self.precision(), value, self.unit())
    }
}

impl Display for MetricType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricType::Steps => f.write_str("Steps"),
            MetricType::Weight => f.write_str("Weight"),
        }
    }
}

impl FromStr for MetricType {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "steps" | "step" | "step_count" => Ok(Self::Steps),
            "weight" | "body_mass" => Ok(Self::Weight),
            _ => Err(MetricError::UnknownMetricType(s.to_owned())),
        }
    }
}

/// A raw reading as kept by the health store, in local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantitySample {
    pub metric: MetricType,
    pub start: NaiveDateTime,
    pub value: f64,
}

impl QuantitySample {
    pub fn new(metric: MetricType, start: NaiveDateTime, value: f64) -> Self {
        Self {
            metric,
            start,
            value,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Rejects readings no health store would hold: NaN, infinities and
    /// negative counts or masses.
    pub fn validate(&self) -> Result<(), MetricError> {
        if !self.value.is_finite() {
            return Err(MetricError::NonFiniteValue {
                metric: self.metric.to_string(),
                start: self.start.to_string(),
            });
        }

        if self.value < 0.0 {
            return Err(MetricError::NegativeValue {
                metric: self.metric.to_string(),
                start: self.start.to_string(),
                value: self.value,
            });
        }

        Ok(())
    }
}
