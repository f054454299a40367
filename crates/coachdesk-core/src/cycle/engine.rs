//! The cycle phase calculation engine.
//!
//! Pure functions from `(reference date, profile)` to derived cycle state.
//! The reference date is an explicit argument everywhere; both UI surfaces
//! (home tile and detail screen) call [`evaluate`] with the same pair and
//! therefore can never disagree.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

use super::phase::{classify_phase, fertile_window, Phase, PhaseSpan};
use super::profile::MenstrualProfile;

/// Single-letter weekday labels for the calendar strip, Sunday first.
const DAY_LETTERS: [char; 7] = ['S', 'M', 'T', 'W', 'T', 'F', 'S'];

/// Per-day classification for the calendar strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarDayTag {
    /// Day falls within the period
    Period,
    /// Day falls within the fertile window
    Fertile,
    /// Neither
    None,
}

/// One day of the 7-day calendar strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Single-letter weekday label (S M T W T F S)
    pub day_label: char,
    pub day_of_month: u32,
    /// This day's own position within the cycle
    pub cycle_day: u32,
    pub tag: CalendarDayTag,
}

/// Everything the cycle-tracking surfaces render, derived in one call.
///
/// Recomputed on every query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePhaseResult {
    /// 1-based day within the cycle, always in `[1, cycle_length]`
    pub cycle_day: u32,
    pub phase: Phase,
    /// The current phase's span within the cycle
    pub span: PhaseSpan,
    /// Inclusive day-range label for the current phase, e.g. "Days 1-5"
    pub phase_range: String,
    /// Sunday-aligned week containing the reference date, 7 entries
    pub calendar_window: Vec<CalendarDay>,
}

/// 1-based day within the cycle for `reference`, treating
/// `last_period_start` as day 1 of some cycle.
///
/// Uses the signed day difference with a floor-divided (Euclidean) modulo,
/// so the result wraps correctly in both directions: a date k days before
/// the stored start lands on day `cycle_length - k + 1` of the previous
/// cycle, and `cycle_day(d) == cycle_day(d + cycle_length)` holds for every
/// date. (An absolute-value difference would mirror past dates onto future
/// ones and break that periodicity.)
pub fn cycle_day(
    reference: NaiveDate,
    last_period_start: NaiveDate,
    cycle_length: u32,
) -> Result<u32, ProfileError> {
    if cycle_length == 0 {
        return Err(ProfileError::ZeroCycleLength);
    }
    let diff_days = (reference - last_period_start).num_days();
    let len = cycle_length as i64;
    Ok((diff_days.rem_euclid(len) + 1) as u32)
}

/// The Sunday-aligned week containing `reference`, each day classified
/// independently.
///
/// Every entry gets its own cycle day via [`cycle_day`] with that date as
/// the reference, then a period/fertile/none tag from the same boundaries
/// the phase classifier uses. Tags are computed per day, so a week that
/// straddles a cycle boundary tags correctly even though the marked days
/// are not contiguous on screen.
pub fn calendar_window(
    reference: NaiveDate,
    last_period_start: NaiveDate,
    cycle_length: u32,
    period_duration: u32,
) -> Result<Vec<CalendarDay>, ProfileError> {
    let window = fertile_window(cycle_length);
    let sunday = reference - Duration::days(reference.weekday().num_days_from_sunday() as i64);

    let mut days = Vec::with_capacity(7);
    for offset in 0..7 {
        let date = sunday + Duration::days(offset);
        let day = cycle_day(date, last_period_start, cycle_length)?;

        let tag = if day <= period_duration {
            CalendarDayTag::Period
        } else if window.start <= day as i64 && day as i64 <= window.end {
            CalendarDayTag::Fertile
        } else {
            CalendarDayTag::None
        };

        days.push(CalendarDay {
            date,
            day_label: DAY_LETTERS[date.weekday().num_days_from_sunday() as usize],
            day_of_month: date.day(),
            cycle_day: day,
            tag,
        });
    }
    Ok(days)
}

/// Derive the full cycle state for one reference date.
///
/// The single entry point for both callers; neither the home tile nor the
/// detail screen recomputes any of this locally.
pub fn evaluate(
    profile: &MenstrualProfile,
    reference: NaiveDate,
) -> Result<CyclePhaseResult, ProfileError> {
    let day = cycle_day(reference, profile.last_period_start, profile.cycle_length)?;
    let span = classify_phase(day, profile.cycle_length, profile.period_duration);
    let window = calendar_window(
        reference,
        profile.last_period_start,
        profile.cycle_length,
        profile.period_duration,
    )?;

    Ok(CyclePhaseResult {
        cycle_day: day,
        phase: span.phase,
        span,
        phase_range: span.label(),
        calendar_window: window,
    })
}
