use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            weight_kg: 80.0,
            height_cm: 180.0,
            age: 35,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::WeightLoss,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HealthScoreRequest {
    pub sleep_hours: f64,
    pub steps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub overall_score: f64,
    pub sleep_score: f64,
    pub activity_score: f64,
    pub nutrition_score: f64,
    pub bmi: f64,
    pub recommendations: Vec<&'static str>,
}
