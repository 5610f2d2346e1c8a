use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::catalog::{FoodId, FoodItem};

/// Calorie and macro sums. Derived on every query, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
}

impl DailyTotals {
    pub fn of(food: &FoodItem, servings: f64) -> Self {
        Self {
            calories: food.calories * servings,
            protein: food.protein * servings,
            fat: food.fat * servings,
        }
    }
}

impl Add for DailyTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
        }
    }
}

impl Sum for DailyTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealEntry {
    pub id: u64,
    pub food: &'static FoodItem,
    pub servings: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
    pub time_of_day: String,
}

impl MealEntry {
    /// What this entry contributes to the day.
    pub fn macros(&self) -> DailyTotals {
        DailyTotals::of(self.food, self.servings)
    }
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub totals: DailyTotals,
    pub water_liters: f64,
    pub meal_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct LogMealRequest {
    pub food_id: FoodId,
    #[serde(default = "default_servings")]
    pub servings: f64,
}
fn default_servings() -> f64 { 1.0 }

#[derive(Debug, Deserialize)]
pub struct AdjustWaterRequest {
    pub delta_liters: f64,
}

#[derive(Debug, Serialize)]
pub struct WaterResponse {
    pub liters: f64,
}

#[derive(Debug, Serialize)]
pub struct TipResponse {
    pub tip: &'static str,
}

#[cfg(test)]
mod dto_tests {
    use super::*;
    use crate::ledger::catalog::{find, EGGS, RIBEYE_STEAK};

    #[test]
    fn totals_sum_is_order_independent() {
        let steak = DailyTotals::of(find(RIBEYE_STEAK).unwrap(), 1.0);
        let eggs = DailyTotals::of(find(EGGS).unwrap(), 1.0);
        let forward: DailyTotals = [steak, eggs].into_iter().sum();
        let backward: DailyTotals = [eggs, steak].into_iter().sum();
        assert_eq!(forward, backward);
        assert_eq!(forward, DailyTotals { calories: 446.0, protein: 38.0, fat: 32.0 });
    }

    #[test]
    fn empty_sum_is_zero() {
        let none: DailyTotals = std::iter::empty().sum();
        assert_eq!(none, DailyTotals::default());
    }

    #[test]
    fn log_meal_request_defaults_to_one_serving() {
        let req: LogMealRequest = serde_json::from_str(r#"{"food_id": 3}"#).unwrap();
        assert_eq!(req.food_id, 3);
        assert_eq!(req.servings, 1.0);
    }
}
