use serde::Serialize;

pub type FoodId = u32;

/// Per-serving nutrition for one selectable food.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: &'static str,
    pub calories: f64,
    pub protein: f64, // grams
    pub fat: f64,     // grams
    pub serving: &'static str,
}

const fn food(
    id: FoodId,
    name: &'static str,
    calories: f64,
    protein: f64,
    fat: f64,
    serving: &'static str,
) -> FoodItem {
    FoodItem {
        id,
        name,
        calories,
        protein,
        fat,
        serving,
    }
}

pub static CATALOG: [FoodItem; 8] = [
    food(1, "Ribeye Steak", 291.0, 25.0, 21.0, "100g"),
    food(2, "Ground Beef", 254.0, 17.0, 20.0, "100g"),
    food(3, "Bacon", 541.0, 37.0, 42.0, "100g"),
    food(4, "Eggs", 155.0, 13.0, 11.0, "2 large"),
    food(5, "Salmon", 206.0, 22.0, 13.0, "100g"),
    food(6, "Chicken Thighs", 209.0, 26.0, 11.0, "100g"),
    food(7, "Pork Chops", 242.0, 26.0, 14.0, "100g"),
    food(8, "Butter", 717.0, 1.0, 81.0, "100g"),
];

pub const RIBEYE_STEAK: FoodId = 1;
pub const EGGS: FoodId = 4;

/// The fixed food catalog, in display order.
pub fn catalog() -> &'static [FoodItem] {
    &CATALOG
}

pub fn find(id: FoodId) -> Option<&'static FoodItem> {
    CATALOG.iter().find(|f| f.id == id)
}
