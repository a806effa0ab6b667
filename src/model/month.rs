use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::format::{Locale, format_month_year};

/// Year-month token used by salary records and the month filter, e.g. `2024-03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthToken {
    year: i32,
    month: u32,
}

impl MonthToken {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month `count` months before this one.
    pub fn months_back(&self, count: u32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 - count as i32;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn label(&self, locale: Locale) -> String {
        format_month_year(self.year, self.month, locale)
    }
}

impl fmt::Display for MonthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidMonth(pub String);

impl fmt::Display for InvalidMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a YYYY-MM month", self.0)
    }
}

impl std::error::Error for InvalidMonth {}

impl FromStr for MonthToken {
    type Err = InvalidMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        MonthToken::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for MonthToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One entry of the month selector.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthOption {
    pub value: MonthToken,
    pub label: String,
}

/// The current month and the eleven before it, newest first.
pub fn month_options(today: NaiveDate, locale: Locale) -> Vec<MonthOption> {
    let current = MonthToken::of(today);
    (0..12)
        .map(|back| {
            let value = current.months_back(back);
            MonthOption {
                value,
                label: value.label(locale),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_tokens() {
        let token: MonthToken = "2024-03".parse().unwrap();
        assert_eq!((token.year(), token.month()), (2024, 3));
        assert_eq!(token.to_string(), "2024-03");
        assert!("2024-13".parse::<MonthToken>().is_err());
        assert!("2024-3".parse::<MonthToken>().is_err());
        assert!("March".parse::<MonthToken>().is_err());
    }

    #[test]
    fn options_cover_the_last_twelve_months() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let options = month_options(today, Locale::En);

        assert_eq!(options.len(), 12);
        assert_eq!(options[0].value.to_string(), "2024-03");
        assert_eq!(options[0].label, "March 2024");
        assert_eq!(options[3].value.to_string(), "2023-12");
        assert_eq!(options[11].value.to_string(), "2023-04");
    }
}
