//! Daily and weekly diet plans keyed by fixed meal slots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::food::FoodItem;
use super::nutrition::NutritionTotals;

/// The nine fixed meal slots of a day, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealType {
    #[serde(rename = "Early Morning")]
    EarlyMorning,
    Breakfast,
    #[serde(rename = "Mid Day Snack")]
    MidDaySnack,
    Lunch,
    #[serde(rename = "Pre Workout")]
    PreWorkout,
    #[serde(rename = "Post Workout")]
    PostWorkout,
    #[serde(rename = "Late Evening Snack")]
    LateEveningSnack,
    Dinner,
    #[serde(rename = "Late Evening")]
    LateEvening,
}

impl MealType {
    pub const ALL: [MealType; 9] = [
        MealType::EarlyMorning,
        MealType::Breakfast,
        MealType::MidDaySnack,
        MealType::Lunch,
        MealType::PreWorkout,
        MealType::PostWorkout,
        MealType::LateEveningSnack,
        MealType::Dinner,
        MealType::LateEvening,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::EarlyMorning => "Early Morning",
            MealType::Breakfast => "Breakfast",
            MealType::MidDaySnack => "Mid Day Snack",
            MealType::Lunch => "Lunch",
            MealType::PreWorkout => "Pre Workout",
            MealType::PostWorkout => "Post Workout",
            MealType::LateEveningSnack => "Late Evening Snack",
            MealType::Dinner => "Dinner",
            MealType::LateEvening => "Late Evening",
        }
    }
}

/// Days of the plan week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

/// One day's plan: every meal slot present, possibly empty.
///
/// The key set is fixed to [`MealType::ALL`]; mutation goes through the
/// methods so a slot missing from deserialized data heals on first write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    meals: BTreeMap<MealType, Vec<FoodItem>>,
}

impl Default for DietPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl DietPlan {
    /// An empty plan with all nine slots present.
    pub fn new() -> Self {
        let mut meals = BTreeMap::new();
        for meal in MealType::ALL {
            meals.insert(meal, Vec::new());
        }
        Self { meals }
    }

    /// Items assigned to a meal slot.
    pub fn items(&self, meal: MealType) -> &[FoodItem] {
        self.meals.get(&meal).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn add_item(&mut self, meal: MealType, item: FoodItem) {
        self.meals.entry(meal).or_default().push(item);
    }

    /// Remove an item by id, returning it if found.
    pub fn remove_item(&mut self, meal: MealType, item_id: &str) -> Option<FoodItem> {
        let slot = self.meals.get_mut(&meal)?;
        let index = slot.iter().position(|item| item.id == item_id)?;
        Some(slot.remove(index))
    }

    /// Replace the item with the same id, returning false when absent.
    pub fn replace_item(&mut self, meal: MealType, item: FoodItem) -> bool {
        if let Some(slot) = self.meals.get_mut(&meal) {
            if let Some(existing) = slot.iter_mut().find(|i| i.id == item.id) {
                *existing = item;
                return true;
            }
        }
        false
    }

    /// Nutrition sum for one meal slot.
    pub fn meal_totals(&self, meal: MealType) -> NutritionTotals {
        NutritionTotals::sum(self.items(meal).iter())
    }

    /// Nutrition sum across the whole day.
    pub fn day_totals(&self) -> NutritionTotals {
        NutritionTotals::sum(self.meals.values().flatten())
    }
}

/// A full week of daily plans, all seven days present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyDietPlan {
    days: BTreeMap<DayOfWeek, DietPlan>,
}

impl Default for WeeklyDietPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl WeeklyDietPlan {
    pub fn new() -> Self {
        let mut days = BTreeMap::new();
        for day in DayOfWeek::ALL {
            days.insert(day, DietPlan::new());
        }
        Self { days }
    }

    pub fn day(&self, day: DayOfWeek) -> &DietPlan {
        // every key is seeded in new(); a miss can only follow partial
        // deserialized data, so fall back to a shared empty plan
        static EMPTY: std::sync::OnceLock<DietPlan> = std::sync::OnceLock::new();
        self.days
            .get(&day)
            .unwrap_or_else(|| EMPTY.get_or_init(DietPlan::new))
    }

    pub fn day_mut(&mut self, day: DayOfWeek) -> &mut DietPlan {
        self.days.entry(day).or_default()
    }
}
