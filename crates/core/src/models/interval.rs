use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Granularity of the price trend: drives both the `interval` query
/// parameter and the label format of each trend point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    #[default]
    Daily,
    Monthly,
}

impl Interval {
    /// Value sent as the `interval` query parameter.
    pub fn as_query_str(&self) -> &'static str {
        match self {
            Interval::Daily => "daily",
            Interval::Monthly => "monthly",
        }
    }

    /// chrono format string for a trend point's display label.
    ///
    /// `DD MMM YYYY` for daily buckets, `MMM YYYY` for everything coarser.
    pub fn label_format(&self) -> &'static str {
        match self {
            Interval::Daily => "%d %b %Y",
            _ => "%b %Y",
        }
    }

    /// Human-readable option label for the interval selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Interval::Daily => "Daily",
            Interval::Monthly => "Monthly",
        }
    }

    pub fn all() -> [Interval; 2] {
        [Interval::Daily, Interval::Monthly]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_str())
    }
}

impl FromStr for Interval {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Interval::Daily),
            "monthly" => Ok(Interval::Monthly),
            other => Err(CoreError::ValidationError(format!(
                "unknown interval '{other}' (expected 'daily' or 'monthly')"
            ))),
        }
    }
}
