use api::routes::routes;
use axum::Router;
use db::test_utils::setup_test_db;
use util::state::AppState;

/// Builds the full router over a fresh in-memory database and hands back the
/// state so tests can seed rows through the model helpers.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let state = AppState::new(db);
    let app = routes(state.clone());
    (app, state)
}
