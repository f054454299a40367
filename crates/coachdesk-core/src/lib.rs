//! # Coachdesk Core Library
//!
//! Headless core for the Coachdesk coaching dashboard: a trainer authors
//! weekly meal plans and assigns them to clients, who view them through a
//! mobile app that also tracks a menstrual-cycle wellness feature. The UI
//! shells are thin layers over this crate.
//!
//! ## Key Components
//!
//! - [`cycle`]: the cycle phase calculation engine — pure calendar-date
//!   arithmetic from `(reference date, profile)` to cycle day, phase, and
//!   a 7-day calendar strip. The reference date is always passed in;
//!   nothing here reads a clock.
//! - [`roster`]: client records keyed by id, with the active selection
//!   held as an id reference so no caller works from a stale copy.
//! - [`plan`]: meal slots, food items with portion rescaling, weekly diet
//!   plans, and nutrition summation against daily targets.

pub mod cycle;
pub mod error;
pub mod plan;
pub mod roster;

pub use cycle::{
    calendar_window, classify_phase, cycle_day, evaluate, CalendarDay, CalendarDayTag,
    CyclePhaseResult, MenstrualProfile, Phase, PhaseSpan, ProfileWarning,
};
pub use error::{CoreError, ProfileError};
pub use plan::{
    DailyTargets, DayOfWeek, DietPlan, FoodItem, MealType, NutritionTotals, TargetProgress,
    WeeklyDietPlan,
};
pub use roster::{Client, ClientStatus, Gender, Roster};
