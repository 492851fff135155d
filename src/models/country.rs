//! Country identity and the per-country list entry.

use std::fmt;

use super::metric::MetricKind;
use crate::error::SelectionError;

/// Two-letter country code, upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoCode(String);

impl IsoCode {
    /// Parse a code, accepting surrounding whitespace and any case.
    pub fn parse(raw: &str) -> Result<Self, SelectionError> {
        let trimmed = raw.trim();
        if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(SelectionError::InvalidCode(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IsoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the country picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryOption {
    pub name: String,
    pub iso_code: IsoCode,
}

impl CountryOption {
    /// Case-insensitive match on name or code, used by the picker filter.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.iso_code.as_str().to_lowercase() == needle
    }
}

/// A validated entry of the country list.
///
/// Entries without a usable iso2 (cruise ships, for instance) still carry
/// counts for the table and the map, but never become a [`CountryOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySummary {
    pub name: String,
    pub iso_code: Option<IsoCode>,
    pub lat: f64,
    pub long: f64,
    pub cases: i64,
    pub today_cases: i64,
    pub recovered: i64,
    pub today_recovered: i64,
    pub deaths: i64,
    pub today_deaths: i64,
}

impl CountrySummary {
    /// Cumulative count for a metric.
    pub fn total(&self, metric: MetricKind) -> i64 {
        match metric {
            MetricKind::Cases => self.cases,
            MetricKind::Recovered => self.recovered,
            MetricKind::Deaths => self.deaths,
        }
    }
}

/// One row of the "Total cases by country" table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub country: String,
    pub cases: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_code_normalizes() {
        let code = IsoCode::parse(" pe ").unwrap();
        assert_eq!(code.as_str(), "PE");
        assert_eq!(code.to_string(), "PE");
    }

    #[test]
    fn test_iso_code_rejects_bad_input() {
        assert!(IsoCode::parse("").is_err());
        assert!(IsoCode::parse("PER").is_err());
        assert!(IsoCode::parse("P1").is_err());
        assert_eq!(
            IsoCode::parse("global"),
            Err(SelectionError::InvalidCode("global".to_string()))
        );
    }

    #[test]
    fn test_option_matches() {
        let option = CountryOption {
            name: "Peru".to_string(),
            iso_code: IsoCode::parse("PE").unwrap(),
        };
        assert!(option.matches(""));
        assert!(option.matches("er"));
        assert!(option.matches("pe"));
        assert!(!option.matches("cl"));
        assert!(!option.matches("chile"));
    }
}
