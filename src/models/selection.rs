//! What the user asked to see.

use std::fmt;

use super::country::IsoCode;
use super::metric::MetricKind;
use super::stats::WORLDWIDE;
use crate::error::SelectionError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    Global,
    Country(IsoCode),
}

impl Selection {
    /// Accepts "global"/"worldwide" in any case, otherwise an iso code.
    pub fn parse(raw: &str) -> Result<Self, SelectionError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("global") || trimmed.eq_ignore_ascii_case("worldwide") {
            return Ok(Selection::Global);
        }
        IsoCode::parse(trimmed).map(Selection::Country)
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Selection::Global)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Global => f.write_str("global"),
            Selection::Country(code) => write!(f, "{}", code),
        }
    }
}

/// Whose history the line graph shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GraphTarget {
    #[default]
    Global,
    Country(String),
}

impl GraphTarget {
    pub fn display_name(&self) -> &str {
        match self {
            GraphTarget::Global => WORLDWIDE,
            GraphTarget::Country(name) => name,
        }
    }

    pub fn title(&self, metric: MetricKind) -> String {
        format!("Total {} in {}", metric, self.display_name())
    }
}
