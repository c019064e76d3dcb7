use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Date format of the `start_date` / `end_date` query parameters.
pub const QUERY_DATE_FORMAT: &str = "%d-%m-%Y";

/// A validated start/end pair of calendar dates (inclusive, start ≤ end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::ValidationError(format!(
                "range start ({start}) must not be after range end ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Both dates as `DD-MM-YYYY`, the format the query endpoints expect.
    pub fn query_dates(&self) -> (String, String) {
        (
            self.start.format(QUERY_DATE_FORMAT).to_string(),
            self.end.format(QUERY_DATE_FORMAT).to_string(),
        )
    }
}

/// Raw output of a range picker: zero, one or two dates.
///
/// Replaced wholesale on every picker interaction. Only a selection holding
/// exactly two ordered dates is usable by the panels; anything else is a
/// partial selection and is ignored downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSelection(Vec<NaiveDate>);

impl RangeSelection {
    /// A cleared picker.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A complete start/end selection.
    pub fn pair(start: NaiveDate, end: NaiveDate) -> Self {
        Self(vec![start, end])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exactly two dates were picked (ordering not checked).
    pub fn is_complete(&self) -> bool {
        self.0.len() == 2
    }

    /// The usable range, if the selection has exactly two dates in order.
    pub fn as_range(&self) -> Option<DateRange> {
        match self.0.as_slice() {
            [start, end] => DateRange::new(*start, *end).ok(),
            _ => None,
        }
    }
}

impl From<Vec<NaiveDate>> for RangeSelection {
    fn from(dates: Vec<NaiveDate>) -> Self {
        Self(dates)
    }
}

impl From<DateRange> for RangeSelection {
    fn from(range: DateRange) -> Self {
        Self::pair(range.start, range.end)
    }
}
