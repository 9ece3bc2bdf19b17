use chrono::NaiveDate;

use crate::foundation::error::{AutodesignError, AutodesignResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date naming a batch output folder, rendered as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateLabel(NaiveDate);

impl DateLabel {
    /// Wrap a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Parse a strict `YYYY-MM-DD` label naming a real calendar date.
    pub fn parse(s: &str) -> AutodesignResult<Self> {
        let s = s.trim();
        // chrono accepts unpadded fields; folder names must stay canonical.
        if s.len() != 10 {
            return Err(AutodesignError::invalid_parameter(format!(
                "invalid date \"{s}\" (expected YYYY-MM-DD)"
            )));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|e| AutodesignError::invalid_parameter(format!("invalid date \"{s}\": {e}")))
    }

    /// The wrapped date.
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for DateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl std::str::FromStr for DateLabel {
    type Err = AutodesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/date.rs"]
mod tests;
