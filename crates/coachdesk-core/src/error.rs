//! Core error types for coachdesk-core.
//!
//! Structural problems (a profile the engine cannot compute from, a roster
//! lookup that misses) are errors. Data-quality findings that still permit a
//! best-effort answer are not errors; see
//! [`ProfileWarning`](crate::cycle::ProfileWarning).

use thiserror::Error;

/// Core error type for coachdesk-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Menstrual profile data the engine cannot compute from
    #[error("Invalid profile: {0}")]
    InvalidProfile(#[from] ProfileError),

    /// Roster lookup against an id that is not present
    #[error("Unknown client id '{0}'")]
    UnknownClient(String),

    /// Operation needs menstrual data the client has not provided
    #[error("Client '{0}' has no menstrual profile")]
    NoMenstrualProfile(String),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a menstrual profile fails structural validation.
///
/// These are programming or data-entry faults to fix upstream, not expected
/// runtime conditions. The engine never substitutes a fallback cycle length;
/// defaulting, if wanted, belongs to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Cycle length of zero makes the day-within-cycle modulo undefined
    #[error("cycle length must be at least 1 day")]
    ZeroCycleLength,

    /// Date string did not parse as a calendar date
    #[error("unparsable date '{0}' (expected YYYY-MM-DD)")]
    BadDate(String),
}
