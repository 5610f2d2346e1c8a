use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use super::catalog::{self, FoodId, FoodItem};
use super::clock::{time_of_day, Clock};
use super::dto::{DailyTotals, MealEntry, Summary};
use super::tips;
use crate::error::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterStep {
    Up,
    Down,
}

/// Today's meals and water intake.
///
/// Meals are append-only and kept in logging order. Totals are always
/// recomputed from the meal list, so they cannot drift from it.
pub struct Ledger {
    meals: Vec<MealEntry>,
    water_liters: f64,
    next_id: u64,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            meals: Vec::new(),
            water_liters: 0.0,
            next_id: 1,
            clock,
        }
    }

    pub fn catalog(&self) -> &'static [FoodItem] {
        catalog::catalog()
    }

    pub fn log_meal(&mut self, food_id: FoodId, servings: f64) -> Result<MealEntry, TrackerError> {
        let food = catalog::find(food_id)
            .ok_or_else(|| TrackerError::invalid(format!("unknown food id {food_id}")))?;
        if !(servings.is_finite() && servings > 0.0) {
            return Err(TrackerError::invalid(format!(
                "servings must be a positive finite number, got {servings}"
            )));
        }

        let logged_at = self.clock.now();
        let entry = MealEntry {
            id: self.next_id,
            food,
            servings,
            logged_at,
            time_of_day: time_of_day(logged_at),
        };
        self.next_id += 1;
        self.meals.push(entry.clone());
        debug!(meal_id = entry.id, food = food.name, servings, "meal logged");
        Ok(entry)
    }

    pub fn compute_totals(&self) -> DailyTotals {
        self.meals.iter().map(MealEntry::macros).sum()
    }

    /// Applies `max(0, current + delta)` and returns the new value.
    pub fn adjust_water(&mut self, delta_liters: f64) -> Result<f64, TrackerError> {
        if !delta_liters.is_finite() {
            return Err(TrackerError::invalid(format!(
                "water delta must be finite, got {delta_liters}"
            )));
        }
        self.water_liters = (self.water_liters + delta_liters).max(0.0);
        debug!(delta_liters, water_liters = self.water_liters, "water adjusted");
        Ok(self.water_liters)
    }

    pub fn step_water(&mut self, step_liters: f64, direction: WaterStep) -> Result<f64, TrackerError> {
        match direction {
            WaterStep::Up => self.adjust_water(step_liters),
            WaterStep::Down => self.adjust_water(-step_liters),
        }
    }

    pub fn water_liters(&self) -> f64 {
        self.water_liters
    }

    pub fn pick_tip<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        tips::pick_tip(rng)
    }

    pub fn list_meals(&self) -> &[MealEntry] {
        &self.meals
    }

    pub fn summary(&self) -> Summary {
        Summary {
            totals: self.compute_totals(),
            water_liters: self.water_liters,
            meal_count: self.meals.len(),
        }
    }
}
