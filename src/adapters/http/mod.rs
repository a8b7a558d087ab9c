//! HTTP adapters - REST API implementations.
//!
//! - `GET /health` - liveness probe
//! - `/api/plans/...` - travel plan endpoints

pub mod travel_plan;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

pub use travel_plan::{travel_plan_routes, TravelPlanHandlers};

/// Assembles the application router without middleware layers.
pub fn router(handlers: TravelPlanHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/plans", travel_plan_routes(handlers))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
