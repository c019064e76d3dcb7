use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Placeholder shown while no percentage is known.
pub const MISSING_PERCENTAGE: &str = "--";

/// Currency prefix for the total savings figure.
pub const CURRENCY_PREFIX: &str = "₹";

/// Savings percentage as shown on the highlights card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PercentageSavings {
    /// Always exactly two decimal digits, e.g. `"12.35"`.
    Formatted(String),
    #[default]
    Missing,
}

impl PercentageSavings {
    /// Coerce a number or numeric string into a two-decimal figure.
    /// Absent, null, or non-numeric input collapses to `Missing`.
    pub fn from_wire(raw: Option<&Value>) -> Self {
        let parsed = match raw {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(v) if v.is_finite() => PercentageSavings::Formatted(two_decimals(v)),
            _ => PercentageSavings::Missing,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PercentageSavings::Formatted(s) => s,
            PercentageSavings::Missing => MISSING_PERCENTAGE,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, PercentageSavings::Missing)
    }
}

/// Two-decimal rendering with exact halves rounded away from zero
/// (`12.125` → `"12.13"`). `{:.2}` alone rounds those ties to even.
fn two_decimals(v: f64) -> String {
    let scaled = v * 100.0;
    // Only multiples of 1/8 sit exactly on a half at two decimals.
    if (v * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        format!("{:.2}", scaled.round() / 100.0)
    } else {
        format!("{v:.2}")
    }
}

impl fmt::Display for PercentageSavings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the bare display string so the frontend can bind it directly.
impl Serialize for PercentageSavings {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PercentageSavings {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::String(s)) if s == MISSING_PERCENTAGE => PercentageSavings::Missing,
            other => PercentageSavings::from_wire(other.as_ref()),
        })
    }
}

/// Aggregate savings figures displayed on the Cost Analysis Highlights card.
///
/// The default value (`0` / `"--"`) is shown before the first successful
/// fetch and whenever the API returns an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostHighlights {
    pub total_savings: f64,
    pub percentage_savings: PercentageSavings,
}

impl CostHighlights {
    /// Normalize one raw API row into display shape.
    pub fn from_record(record: HighlightsRecord) -> Self {
        Self {
            total_savings: record.total_savings.unwrap_or(0.0),
            percentage_savings: PercentageSavings::from_wire(record.percentage_savings.as_ref()),
        }
    }

    /// Total savings with the currency prefix, e.g. `"₹1500"`.
    pub fn display_total(&self) -> String {
        format!("{CURRENCY_PREFIX}{}", self.total_savings)
    }

    /// Percentage with a `%` suffix, or `"--"` when unknown.
    pub fn display_percentage(&self) -> String {
        match &self.percentage_savings {
            PercentageSavings::Formatted(s) => format!("{s}%"),
            PercentageSavings::Missing => MISSING_PERCENTAGE.to_string(),
        }
    }
}

/// One row of the cost-highlights response, exactly as it comes off the wire.
///
/// `percentage_savings` may arrive as a number or a string, so it is kept
/// untyped until normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightsRecord {
    #[serde(default)]
    pub total_savings: Option<f64>,
    #[serde(default)]
    pub percentage_savings: Option<Value>,
}

/// The endpoint answers with a list; only the first element carries meaning.
pub fn first_record(records: Vec<HighlightsRecord>) -> Option<HighlightsRecord> {
    records.into_iter().next()
}
