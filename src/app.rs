use std::net::SocketAddr;
use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use crate::config::AppConfig;
use crate::state::AppState;
use crate::{ledger, profile};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1",
              Router::new()
                  .merge(ledger::router())
                  .merge(profile::router())
                  .route("/health", get(|| async { "ok" }))
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router, config: &AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        });
        (status, value)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = build_app(AppState::fake());
        let (status, body) = call(&app, "GET", "/api/v1/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn catalog_lists_eight_foods() {
        let app = build_app(AppState::fake());
        let (status, body) = call(&app, "GET", "/api/v1/catalog", None).await;
        assert_eq!(status, StatusCode::OK);
        let foods = body.as_array().unwrap();
        assert_eq!(foods.len(), 8);
        assert_eq!(foods[0]["name"], "Ribeye Steak");
        assert_eq!(foods[3]["serving"], "2 large");
    }

    #[tokio::test]
    async fn logging_meals_updates_totals() {
        let app = build_app(AppState::fake());

        let (status, entry) = call(&app, "POST", "/api/v1/meals", Some(json!({"food_id": 1}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(entry["id"], 1);
        assert_eq!(entry["servings"], 1.0);
        assert_eq!(entry["time_of_day"], "08:30:00");
        assert_eq!(entry["food"]["name"], "Ribeye Steak");

        let (status, _) = call(&app, "POST", "/api/v1/meals", Some(json!({"food_id": 4, "servings": 1}))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, totals) = call(&app, "GET", "/api/v1/totals", None).await;
        assert_eq!(totals, json!({"calories": 446.0, "protein": 38.0, "fat": 32.0}));

        let (_, meals) = call(&app, "GET", "/api/v1/meals", None).await;
        let names: Vec<_> = meals.as_array().unwrap().iter().map(|m| m["food"]["name"].clone()).collect();
        assert_eq!(names, vec![json!("Ribeye Steak"), json!("Eggs")]);
    }

    #[tokio::test]
    async fn unknown_food_is_bad_request() {
        let app = build_app(AppState::fake());
        let (status, body) = call(&app, "POST", "/api/v1/meals", Some(json!({"food_id": 77}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.as_str().unwrap().contains("unknown food id 77"));

        let (_, meals) = call(&app, "GET", "/api/v1/meals", None).await;
        assert_eq!(meals, json!([]));
    }

    #[tokio::test]
    async fn water_steps_and_clamps() {
        let app = build_app(AppState::fake());
        let (_, w) = call(&app, "POST", "/api/v1/water/decrement", None).await;
        assert_eq!(w["liters"], 0.0);
        call(&app, "POST", "/api/v1/water/increment", None).await;
        let (_, w) = call(&app, "POST", "/api/v1/water/increment", None).await;
        assert_eq!(w["liters"], 1.0);

        let (status, w) = call(&app, "POST", "/api/v1/water", Some(json!({"delta_liters": -0.25}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(w["liters"], 0.75);

        let (_, summary) = call(&app, "GET", "/api/v1/summary", None).await;
        assert_eq!(summary["water_liters"], 0.75);
        assert_eq!(summary["meal_count"], 0);
    }

    #[tokio::test]
    async fn tip_comes_from_fixed_set() {
        let app = build_app(AppState::fake());
        let (status, body) = call(&app, "GET", "/api/v1/tip", None).await;
        assert_eq!(status, StatusCode::OK);
        let tip = body["tip"].as_str().unwrap();
        assert!(ledger::tips::TIPS.contains(&tip));
    }

    #[tokio::test]
    async fn profile_and_health_score() {
        let app = build_app(AppState::fake());
        let (_, profile) = call(&app, "GET", "/api/v1/profile", None).await;
        assert_eq!(profile["weight_kg"], 80.0);

        let updated = json!({
            "weight_kg": 70.0, "height_cm": 175.0, "age": 30,
            "activity_level": "active", "goal": "maintenance"
        });
        let (status, _) = call(&app, "PUT", "/api/v1/profile", Some(updated)).await;
        assert_eq!(status, StatusCode::OK);

        call(&app, "POST", "/api/v1/water", Some(json!({"delta_liters": 2.0}))).await;
        let (status, report) = call(&app, "POST", "/api/v1/health-score", Some(json!({"sleep_hours": 8.0, "steps": 12000}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["overall_score"], 100.0);
        assert_eq!(report["bmi"], 22.9);
    }

    #[tokio::test]
    async fn invalid_profile_is_rejected() {
        let app = build_app(AppState::fake());
        let bad = json!({
            "weight_kg": 0.0, "height_cm": 175.0, "age": 30,
            "activity_level": "light", "goal": "weight_loss"
        });
        let (status, _) = call(&app, "PUT", "/api/v1/profile", Some(bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (_, profile) = call(&app, "GET", "/api/v1/profile", None).await;
        assert_eq!(profile["weight_kg"], 80.0);
    }
}
