use std::{fmt::Display, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::MetricError;

/// Day of the week, ordered the way the weekday charts lay them out:
/// Sunday first, Saturday last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub fn short_symbol(self) -> &'static str {
        &self.symbol()[..3]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl FromStr for Weekday {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| {
                day.symbol().eq_ignore_ascii_case(needle)
                    || day.short_symbol().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| MetricError::UnknownWeekday(s.to_owned()))
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_from_date() {
        // 2026-10-18 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(Weekday::of(sunday), Weekday::Sunday);
        assert_eq!(Weekday::of(sunday.succ_opt().unwrap()), Weekday::Monday);
        assert_eq!(
            Weekday::of(NaiveDate::from_ymd_opt(2026, 10, 24).unwrap()),
            Weekday::Saturday
        );
    }

    #[test]
    fn ordering_starts_on_sunday() {
        let mut days = Weekday::ALL.to_vec();
        days.reverse();
        days.sort();
        assert_eq!(days, Weekday::ALL.to_vec());
        assert!(Weekday::Sunday < Weekday::Monday);
        assert!(Weekday::Friday < Weekday::Saturday);
    }

    #[test]
    fn parse_full_and_short_names() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Thu".parse::<Weekday>().unwrap(), Weekday::Thursday);
        assert_eq!(" SATURDAY ".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert_eq!(
            "funday".parse::<Weekday>(),
            Err(MetricError::UnknownWeekday("funday".into()))
        );
    }

    #[test]
    fn symbols() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
        assert_eq!(Weekday::Wednesday.short_symbol(), "Wed");
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Weekday::Friday).unwrap();
        assert_eq!(json, "\"friday\"");
        let day: Weekday = serde_json::from_str("\"tuesday\"").unwrap();
        assert_eq!(day, Weekday::Tuesday);
    }
}
