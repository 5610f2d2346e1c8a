use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::catalog::{self, FoodItem};
use super::dto::{
    AdjustWaterRequest, DailyTotals, LogMealRequest, MealEntry, Summary, TipResponse,
    WaterResponse,
};
use super::services::WaterStep;
use super::tips;
use crate::state::AppState;

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(list_catalog))
        .route("/meals", get(list_meals))
        .route("/totals", get(get_totals))
        .route("/summary", get(get_summary))
        .route("/water", get(get_water))
        .route("/tip", get(get_tip))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", post(log_meal))
        .route("/water", post(adjust_water))
        .route("/water/increment", post(increment_water))
        .route("/water/decrement", post(decrement_water))
}

// --- handlers ---

#[instrument]
pub async fn list_catalog() -> Json<&'static [FoodItem]> {
    Json(catalog::catalog())
}

#[instrument(skip(state))]
pub async fn list_meals(State(state): State<AppState>) -> Json<Vec<MealEntry>> {
    Json(state.ledger.lock().await.list_meals().to_vec())
}

#[instrument(skip(state))]
pub async fn get_totals(State(state): State<AppState>) -> Json<DailyTotals> {
    Json(state.ledger.lock().await.compute_totals())
}

#[instrument(skip(state))]
pub async fn get_summary(State(state): State<AppState>) -> Json<Summary> {
    Json(state.ledger.lock().await.summary())
}

#[instrument(skip(state))]
pub async fn get_water(State(state): State<AppState>) -> Json<WaterResponse> {
    let liters = state.ledger.lock().await.water_liters();
    Json(WaterResponse { liters })
}

#[instrument]
pub async fn get_tip() -> Json<TipResponse> {
    let tip = tips::pick_tip(&mut rand::thread_rng());
    Json(TipResponse { tip })
}

#[instrument(skip(state))]
pub async fn log_meal(
    State(state): State<AppState>,
    Json(req): Json<LogMealRequest>,
) -> Result<(StatusCode, Json<MealEntry>), (StatusCode, String)> {
    let mut ledger = state.ledger.lock().await;
    match ledger.log_meal(req.food_id, req.servings) {
        Ok(entry) => {
            info!(meal_id = entry.id, food = entry.food.name, "meal logged");
            Ok((StatusCode::CREATED, Json(entry)))
        }
        Err(e) => {
            warn!(error = %e, food_id = req.food_id, "log_meal rejected");
            Err(e.into())
        }
    }
}

#[instrument(skip(state))]
pub async fn adjust_water(
    State(state): State<AppState>,
    Json(req): Json<AdjustWaterRequest>,
) -> Result<Json<WaterResponse>, (StatusCode, String)> {
    let liters = state
        .ledger
        .lock()
        .await
        .adjust_water(req.delta_liters)
        .map_err(rejected)?;
    Ok(Json(WaterResponse { liters }))
}

#[instrument(skip(state))]
pub async fn increment_water(
    State(state): State<AppState>,
) -> Result<Json<WaterResponse>, (StatusCode, String)> {
    step(&state, WaterStep::Up).await
}

#[instrument(skip(state))]
pub async fn decrement_water(
    State(state): State<AppState>,
) -> Result<Json<WaterResponse>, (StatusCode, String)> {
    step(&state, WaterStep::Down).await
}

async fn step(
    state: &AppState,
    direction: WaterStep,
) -> Result<Json<WaterResponse>, (StatusCode, String)> {
    let liters = state
        .ledger
        .lock()
        .await
        .step_water(state.config.water_step_liters, direction)
        .map_err(rejected)?;
    Ok(Json(WaterResponse { liters }))
}

fn rejected(e: crate::error::TrackerError) -> (StatusCode, String) {
    warn!(error = %e, "water update rejected");
    e.into()
}
