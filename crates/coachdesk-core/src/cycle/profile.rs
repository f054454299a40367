//! Client-reported menstrual history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

use super::phase::fertile_window;

/// Self-reported menstrual history for a client.
///
/// Owned by a client record and mutated only through explicit update
/// operations; the engine reads it and never alters it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenstrualProfile {
    /// First day of the most recently logged period (day 1 of that cycle)
    pub last_period_start: NaiveDate,
    /// Days between period onsets (typically 21-35, not enforced)
    pub cycle_length: u32,
    /// Days of menstrual bleeding
    pub period_duration: u32,
    /// Whether the client reports a regular cycle. Descriptive only,
    /// no effect on calculation.
    pub is_regular: bool,
    /// Free-text symptom tags. Order carries no meaning.
    pub symptoms: Vec<String>,
}

impl MenstrualProfile {
    /// Create a profile with no symptoms logged, assumed regular.
    pub fn new(last_period_start: NaiveDate, cycle_length: u32, period_duration: u32) -> Self {
        Self {
            last_period_start,
            cycle_length,
            period_duration,
            is_regular: true,
            symptoms: Vec::new(),
        }
    }

    /// Parse from the `YYYY-MM-DD` wire format the mobile app submits.
    pub fn from_wire(
        last_period_start: &str,
        cycle_length: u32,
        period_duration: u32,
    ) -> Result<Self, ProfileError> {
        let date = NaiveDate::parse_from_str(last_period_start, "%Y-%m-%d")
            .map_err(|_| ProfileError::BadDate(last_period_start.to_string()))?;
        Ok(Self::new(date, cycle_length, period_duration))
    }

    /// Advisory data-quality checks.
    ///
    /// A flagged profile still classifies; the fixed evaluation order
    /// (Menstrual checked first) decides the overlapping days. Callers may
    /// warn the user but must not treat these as failures.
    pub fn consistency_warnings(&self) -> Vec<ProfileWarning> {
        let mut warnings = Vec::new();
        if self.period_duration > self.cycle_length {
            warnings.push(ProfileWarning::PeriodExceedsCycle);
        }
        let window = fertile_window(self.cycle_length);
        if window.start <= self.period_duration as i64 {
            warnings.push(ProfileWarning::PhaseWindowsOverlap);
        }
        warnings
    }
}

/// Non-fatal data-quality findings on a [`MenstrualProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileWarning {
    /// Period duration exceeds the cycle length
    PeriodExceedsCycle,
    /// The fertile window starts on or before the last period day, so the
    /// phase ranges overlap or invert
    PhaseWindowsOverlap,
}
