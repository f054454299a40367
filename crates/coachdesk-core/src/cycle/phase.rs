//! Phase classification: cycle day -> physiological phase.

use serde::{Deserialize, Serialize};

/// Physiological phase of the menstrual cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menstrual => "Menstrual",
            Phase::Follicular => "Follicular",
            Phase::Ovulation => "Ovulation",
            Phase::Luteal => "Luteal",
        }
    }

    /// One-line "what to expect" copy shown on the detail screen.
    pub fn description(&self) -> &'static str {
        match self {
            Phase::Menstrual => "Shedding of the uterine lining.",
            Phase::Follicular => "Rising estrogen, improved insulin sensitivity.",
            Phase::Ovulation => "Peak estrogen and fertility window.",
            Phase::Luteal => "Progesterone rises, body temp increases.",
        }
    }

    /// Three physiological-change tags shown beneath the description.
    pub fn physiological_tags(&self) -> [&'static str; 3] {
        match self {
            Phase::Menstrual => ["Low Energy", "Cramps", "Iron Drop"],
            Phase::Follicular => ["High Energy", "Estrogen Rise", "Anabolic"],
            Phase::Ovulation => ["Peak Strength", "High Libido", "Confidence"],
            Phase::Luteal => ["Higher Metabolism", "Cravings", "Bloating"],
        }
    }
}

/// A phase together with the inclusive day span it occupies in the cycle.
///
/// Bounds are signed: for very short cycles the derived fertile window can
/// start at or before day 0, producing an inverted or empty span. That is
/// reported as-is rather than clamped; `MenstrualProfile::consistency_warnings`
/// flags the condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSpan {
    pub phase: Phase,
    /// First cycle day of the span, inclusive
    pub start_day: i64,
    /// Last cycle day of the span, inclusive
    pub end_day: i64,
}

impl PhaseSpan {
    /// Range label as the UI prints it, e.g. "Days 1-5".
    pub fn label(&self) -> String {
        format!("Days {}-{}", self.start_day, self.end_day)
    }
}

/// Fertile window in cycle-day coordinates, derived from cycle length only.
///
/// Ovulation is predicted 14 days before the next period; the window spans
/// 6 days ending one day after predicted ovulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FertileWindow {
    pub start: i64,
    pub end: i64,
}

pub(crate) fn fertile_window(cycle_length: u32) -> FertileWindow {
    let ovulation_day = cycle_length as i64 - 14;
    FertileWindow {
        start: ovulation_day - 5,
        end: ovulation_day + 1,
    }
}

/// Classify a cycle day into its phase and that phase's day span.
///
/// The four arms are checked in a fixed order, so when a malformed profile
/// makes the windows overlap, the earlier phase wins (Menstrual first).
pub fn classify_phase(cycle_day: u32, cycle_length: u32, period_duration: u32) -> PhaseSpan {
    let day = cycle_day as i64;
    let period = period_duration as i64;
    let window = fertile_window(cycle_length);

    if day <= period {
        PhaseSpan {
            phase: Phase::Menstrual,
            start_day: 1,
            end_day: period,
        }
    } else if day < window.start {
        PhaseSpan {
            phase: Phase::Follicular,
            start_day: period + 1,
            end_day: window.start - 1,
        }
    } else if day <= window.end {
        PhaseSpan {
            phase: Phase::Ovulation,
            start_day: window.start,
            end_day: window.end,
        }
    } else {
        PhaseSpan {
            phase: Phase::Luteal,
            start_day: window.end + 1,
            end_day: cycle_length as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_standard_cycle_spans() {
        // 28-day cycle, 5-day period: ovulation day 14, fertile days 9-15
        assert_eq!(
            classify_phase(3, 28, 5),
            PhaseSpan { phase: Phase::Menstrual, start_day: 1, end_day: 5 }
        );
        assert_eq!(
            classify_phase(7, 28, 5),
            PhaseSpan { phase: Phase::Follicular, start_day: 6, end_day: 8 }
        );
        assert_eq!(
            classify_phase(12, 28, 5),
            PhaseSpan { phase: Phase::Ovulation, start_day: 9, end_day: 15 }
        );
        assert_eq!(
            classify_phase(20, 28, 5),
            PhaseSpan { phase: Phase::Luteal, start_day: 16, end_day: 28 }
        );
    }

    #[test]
    fn test_fertile_window_bounds_are_inclusive() {
        // fertile window for a 28-day cycle is days 9..=15
        assert_eq!(classify_phase(8, 28, 5).phase, Phase::Follicular);
        assert_eq!(classify_phase(9, 28, 5).phase, Phase::Ovulation);
        assert_eq!(classify_phase(15, 28, 5).phase, Phase::Ovulation);
        assert_eq!(classify_phase(16, 28, 5).phase, Phase::Luteal);
    }

    #[test]
    fn test_menstrual_boundary_is_inclusive() {
        assert_eq!(classify_phase(5, 28, 5).phase, Phase::Menstrual);
        assert_eq!(classify_phase(6, 28, 5).phase, Phase::Follicular);
    }

    #[test]
    fn test_range_label_format() {
        assert_eq!(classify_phase(1, 28, 5).label(), "Days 1-5");
        assert_eq!(classify_phase(28, 28, 5).label(), "Days 16-28");
    }

    #[test]
    fn test_overlapping_windows_fall_to_menstrual_first() {
        // cycle 20 -> fertile window days 1-7, inside the period; the fixed
        // evaluation order gives Menstrual for days 1-5
        assert_eq!(classify_phase(3, 20, 5).phase, Phase::Menstrual);
        assert_eq!(classify_phase(6, 20, 5).phase, Phase::Ovulation);
    }

    #[test]
    fn test_degenerate_one_day_cycle() {
        // must not panic even though every derived boundary is negative
        let span = classify_phase(1, 1, 1);
        assert_eq!(span.phase, Phase::Menstrual);
    }

    proptest! {
        // In the well-formed regime the four spans tile [1, L] exactly: every
        // day belongs to the one phase whose span contains it.
        #[test]
        fn prop_phases_partition_the_cycle(
            cycle_length in 21u32..=35,
            period_duration in 1u32..=7,
        ) {
            let window = fertile_window(cycle_length);
            prop_assume!((period_duration as i64) < window.start - 1);
            prop_assume!(window.end < cycle_length as i64);

            for day in 1..=cycle_length {
                let span = classify_phase(day, cycle_length, period_duration);
                prop_assert!(span.start_day <= day as i64 && day as i64 <= span.end_day);

                let expected = if day <= period_duration {
                    Phase::Menstrual
                } else if (day as i64) < window.start {
                    Phase::Follicular
                } else if (day as i64) <= window.end {
                    Phase::Ovulation
                } else {
                    Phase::Luteal
                };
                prop_assert_eq!(span.phase, expected);
            }

            // spans are contiguous with no gap or overlap
            let menstrual = classify_phase(1, cycle_length, period_duration);
            let follicular = classify_phase(period_duration + 1, cycle_length, period_duration);
            let ovulation = classify_phase(window.start as u32, cycle_length, period_duration);
            let luteal = classify_phase(cycle_length, cycle_length, period_duration);
            prop_assert_eq!(menstrual.end_day + 1, follicular.start_day);
            prop_assert_eq!(follicular.end_day + 1, ovulation.start_day);
            prop_assert_eq!(ovulation.end_day + 1, luteal.start_day);
            prop_assert_eq!(luteal.end_day, cycle_length as i64);
        }
    }
}
