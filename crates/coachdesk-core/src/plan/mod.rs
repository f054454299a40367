//! Diet-plan data model: meal slots, food items, weekly plans, nutrition sums.

mod diet;
mod food;
mod nutrition;

pub use diet::{DayOfWeek, DietPlan, MealType, WeeklyDietPlan};
pub use food::FoodItem;
pub use nutrition::{DailyTargets, NutritionTotals, TargetProgress};
