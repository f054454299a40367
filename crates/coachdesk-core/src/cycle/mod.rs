//! Menstrual-cycle tracking: profile data and the phase calculation engine.
//!
//! Everything here is pure calendar-date arithmetic. The reference date is
//! always an explicit argument; nothing reads a system clock, so the same
//! inputs give the same answer every time, on any thread.

mod engine;
mod phase;
mod profile;

pub use engine::{calendar_window, cycle_day, evaluate, CalendarDay, CalendarDayTag, CyclePhaseResult};
pub use phase::{classify_phase, Phase, PhaseSpan};
pub use profile::{MenstrualProfile, ProfileWarning};
