//! Profile validation and the daily health score.
//!
//! The score weighs sleep (40%), activity (30%) and nutrition (30%), where
//! nutrition blends water intake against a 2 L target with a BMI band check.

use super::dto::{HealthReport, UserProfile};
use crate::error::TrackerError;

const WATER_TARGET_LITERS: f64 = 2.0;

pub fn validate_profile(p: &UserProfile) -> Result<(), TrackerError> {
    if !(p.weight_kg.is_finite() && p.weight_kg > 0.0) {
        return Err(TrackerError::invalid("weight_kg must be a positive number"));
    }
    if !(p.height_cm.is_finite() && p.height_cm > 0.0) {
        return Err(TrackerError::invalid("height_cm must be a positive number"));
    }
    Ok(())
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let m = height_cm / 100.0;
    weight_kg / (m * m)
}

/// Full marks for 7 to 9 hours, 75 for anything else.
pub fn sleep_score(hours: f64) -> f64 {
    if (7.0..=9.0).contains(&hours) {
        100.0
    } else {
        75.0
    }
}

pub fn activity_score(steps: u32) -> f64 {
    match steps {
        10_000.. => 100.0,
        7_500.. => 80.0,
        5_000.. => 60.0,
        _ => 40.0,
    }
}

pub fn nutrition_score(water_liters: f64, bmi: f64) -> f64 {
    let water = (water_liters / WATER_TARGET_LITERS * 100.0).min(100.0);
    let bmi_band = if (18.5..=24.9).contains(&bmi) { 100.0 } else { 50.0 };
    (water + bmi_band) / 2.0
}

pub fn recommendations(overall: f64) -> Vec<&'static str> {
    if overall >= 80.0 {
        vec!["That is great keep going"]
    } else if overall >= 60.0 {
        vec!["Good Job you should increase your sleep hours"]
    } else {
        vec![
            "you try to sleep at least 8 hours a day",
            "10.000 steps a day",
            "Drink 2-3 L Water with salt",
        ]
    }
}

/// One decimal place, ties to even.
fn round1(v: f64) -> f64 {
    (v * 10.0).round_ties_even() / 10.0
}

pub fn health_report(
    profile: &UserProfile,
    water_liters: f64,
    sleep_hours: f64,
    steps: u32,
) -> Result<HealthReport, TrackerError> {
    validate_profile(profile)?;
    if !(sleep_hours.is_finite() && sleep_hours >= 0.0) {
        return Err(TrackerError::invalid("sleep_hours must be a non-negative number"));
    }

    let bmi = bmi(profile.weight_kg, profile.height_cm);
    let sleep = sleep_score(sleep_hours);
    let activity = activity_score(steps);
    let nutrition = nutrition_score(water_liters, bmi);
    let overall = sleep * 0.4 + activity * 0.3 + nutrition * 0.3;

    Ok(HealthReport {
        overall_score: round1(overall),
        sleep_score: sleep,
        activity_score: activity,
        nutrition_score: nutrition,
        bmi: round1(bmi),
        recommendations: recommendations(overall),
    })
}
