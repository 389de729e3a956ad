use axum::{Json, Router, response::IntoResponse, routing::get};
use util::state::AppState;

use crate::response::MessageBody;

/// Builds the `/health` route group.
///
/// A single `GET /health` endpoint for uptime checks, load balancers, or
/// deployment health monitoring.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
async fn health_check() -> impl IntoResponse {
    Json(MessageBody {
        message: "OK".to_string(),
    })
}
