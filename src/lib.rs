pub mod app;
pub mod config;
pub mod error;
pub mod ledger;
pub mod profile;
pub mod state;

pub use error::TrackerError;
pub use ledger::catalog::{catalog, FoodId, FoodItem};
pub use ledger::dto::{DailyTotals, MealEntry};
pub use ledger::services::Ledger;
