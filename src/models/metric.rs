//! Which statistic drives the info box highlight, the graph and the map.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricKind {
    #[default]
    Cases,
    Recovered,
    Deaths,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::Cases, MetricKind::Recovered, MetricKind::Deaths];

    /// Lowercase name, matching the API's field names.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Cases => "cases",
            MetricKind::Recovered => "recovered",
            MetricKind::Deaths => "deaths",
        }
    }

    /// Info box title.
    pub fn title(&self) -> &'static str {
        match self {
            MetricKind::Cases => "Coronavirus cases",
            MetricKind::Recovered => "Recovered",
            MetricKind::Deaths => "Deaths",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            MetricKind::Cases => MetricKind::Recovered,
            MetricKind::Recovered => MetricKind::Deaths,
            MetricKind::Deaths => MetricKind::Cases,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            MetricKind::Cases => MetricKind::Deaths,
            MetricKind::Recovered => MetricKind::Cases,
            MetricKind::Deaths => MetricKind::Recovered,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
