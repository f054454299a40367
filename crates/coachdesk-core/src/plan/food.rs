//! A single food entry with portion tracking.

use serde::{Deserialize, Serialize};

/// One food item as assigned to a meal slot.
///
/// Nutrient fields hold the values for the currently assigned portion.
/// `base_*` fields, when present, remember the reference portion the item
/// was entered with so repeated portion edits rescale without drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,

    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,

    /// Original text description, e.g. "1 medium"
    pub serving_size: String,
    /// Portion unit, e.g. "g", "ml", "piece", "cup"
    pub unit: String,
    /// Assigned portion amount in `unit`
    pub amount: f64,

    pub base_unit: Option<String>,
    pub base_amount: Option<f64>,
    pub base_calories: Option<f64>,

    pub category: Option<String>,
}

impl FoodItem {
    /// Rescale all nutrient fields to a new portion amount.
    ///
    /// Scaling is linear. When base values are stored, calories are
    /// recomputed from them; otherwise the current values act as the base.
    /// A zero current amount leaves the item unchanged (nothing to scale
    /// from).
    pub fn rescale(&mut self, new_amount: f64) {
        if self.amount == 0.0 {
            return;
        }
        let factor = new_amount / self.amount;
        self.protein *= factor;
        self.carbs *= factor;
        self.fat *= factor;
        self.fiber *= factor;
        self.sugar *= factor;
        self.sodium *= factor;

        self.calories = match (self.base_amount, self.base_calories) {
            (Some(base_amount), Some(base_calories)) if base_amount != 0.0 => {
                base_calories * (new_amount / base_amount)
            }
            _ => self.calories * factor,
        };
        self.amount = new_amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oats_100g() -> FoodItem {
        FoodItem {
            id: "oats".to_string(),
            name: "Rolled Oats".to_string(),
            calories: 389.0,
            protein: 16.9,
            carbs: 66.3,
            fat: 6.9,
            fiber: 10.6,
            sugar: 0.99,
            sodium: 2.0,
            serving_size: "100 g".to_string(),
            unit: "g".to_string(),
            amount: 100.0,
            base_unit: Some("g".to_string()),
            base_amount: Some(100.0),
            base_calories: Some(389.0),
            category: Some("Grains".to_string()),
        }
    }

    #[test]
    fn test_rescale_is_linear() {
        let mut item = oats_100g();
        item.rescale(50.0);
        assert_eq!(item.amount, 50.0);
        assert!((item.calories - 194.5).abs() < 1e-9);
        assert!((item.protein - 8.45).abs() < 1e-9);
    }

    #[test]
    fn test_rescale_from_base_does_not_drift() {
        let mut item = oats_100g();
        for amount in [30.0, 77.0, 12.5, 100.0] {
            item.rescale(amount);
        }
        // back at the base portion, calories match the base exactly
        assert_eq!(item.calories, 389.0);
    }

    #[test]
    fn test_rescale_without_base_uses_current_values() {
        let mut item = oats_100g();
        item.base_amount = None;
        item.base_calories = None;
        item.rescale(200.0);
        assert!((item.calories - 778.0).abs() < 1e-9);
    }

    #[test]
    fn test_rescale_from_zero_amount_is_a_no_op() {
        let mut item = oats_100g();
        item.amount = 0.0;
        let before = item.clone();
        item.rescale(150.0);
        assert_eq!(item, before);
    }
}
