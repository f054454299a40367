//! Nutrition summation and daily-target comparison.

use serde::{Deserialize, Serialize};

use super::food::FoodItem;

/// Summed nutrient values across a set of food items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl NutritionTotals {
    pub fn add(&mut self, item: &FoodItem) {
        self.calories += item.calories;
        self.protein += item.protein;
        self.carbs += item.carbs;
        self.fat += item.fat;
        self.fiber += item.fiber;
        self.sugar += item.sugar;
        self.sodium += item.sodium;
    }

    pub fn sum<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a FoodItem>,
    {
        let mut totals = Self::default();
        for item in items {
            totals.add(item);
        }
        totals
    }

    /// Fraction of each daily target reached, 0.0 when the target is 0.
    pub fn progress_toward(&self, targets: &DailyTargets) -> TargetProgress {
        fn fraction(value: f64, target: f64) -> f64 {
            if target == 0.0 {
                0.0
            } else {
                value / target
            }
        }
        TargetProgress {
            calories: fraction(self.calories, targets.calories),
            protein: fraction(self.protein, targets.protein),
            carbs: fraction(self.carbs, targets.carbs),
            fat: fraction(self.fat, targets.fat),
        }
    }
}

/// Per-day intake targets a trainer sets for a client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Intake as a fraction of each target (1.0 = target met exactly).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetProgress {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}
