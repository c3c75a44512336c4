use chrono::{NaiveDateTime, TimeDelta};
use healthtracker_types::{MetricType, QuantitySample};
use rand::Rng;

pub const STEP_RANGE: (f64, f64) = (4000.0, 20000.0);
pub const WEIGHT_BASE: f64 = 160.0;
pub const WEIGHT_SPREAD: f64 = 5.0;

/// Demo data: one step count and one weigh-in per day, both stamped at
/// `now - i days` for `i` in `0..days`.
///
/// Steps are uniform in `STEP_RANGE` and not rounded. Weight is uniform in
/// `WEIGHT_BASE + i / 3` up to `WEIGHT_SPREAD` above that, using integer
/// division, so it drifts up by a pound every three days into the past.
pub fn fake_samples(now: NaiveDateTime, days: u32) -> Vec<QuantitySample> {
    let mut rng = rand::rng();
    let mut samples = Vec::with_capacity(days as usize * 2);

    for i in 0..days {
        let start = now - TimeDelta::days(i64::from(i));
        let drift = f64::from(i / 3);

        let steps = rng.random_range(STEP_RANGE.0..=STEP_RANGE.1);
        samples.push(QuantitySample::new(MetricType::Steps, start, steps));

        let low = WEIGHT_BASE + drift;
        let weight = rng.random_range(low..=low + WEIGHT_SPREAD);
        samples.push(QuantitySample::new(MetricType::Weight, start, weight));
    }

    samples
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn one_sample_per_category_per_day() {
        let samples = fake_samples(now(), 28);
        assert_eq!(samples.len(), 56);

        let steps = samples
            .iter()
            .filter(|s| s.metric == MetricType::Steps)
            .count();
        assert_eq!(steps, 28);
        assert_eq!(samples[0].start, now());
        assert_eq!(samples[54].start, now() - TimeDelta::days(27));
        assert_eq!(samples[54].start.time(), now().time());
    }

    #[test]
    fn values_stay_in_range() {
        for (i, pair) in fake_samples(now(), 28).chunks(2).enumerate() {
            let (steps, weight) = (pair[0], pair[1]);
            assert!(steps.value >= STEP_RANGE.0 && steps.value <= STEP_RANGE.1);
            assert!(steps.validate().is_ok());

            let low = WEIGHT_BASE + (i / 3) as f64;
            assert!(weight.value >= low && weight.value <= low + WEIGHT_SPREAD);
        }
    }

    #[test]
    fn zero_days() {
        assert!(fake_samples(now(), 0).is_empty());
    }
}
