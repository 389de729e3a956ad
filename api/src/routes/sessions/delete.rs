use axum::{
    Json,
    extract::{Path, State},
};
use util::state::AppState;

use super::common::DeleteSessionsResponse;
use crate::response::ApiError;
use db::models::class_session::Model as ClassSession;

/// DELETE `/deleteClases/{id_asignatura}`
///
/// Removes every session of a subject. Zero matches still succeeds; this is
/// a roster-reset operation, not a lookup.
pub async fn delete_sessions_by_subject(
    State(state): State<AppState>,
    Path(id_asignatura): Path<i64>,
) -> Result<Json<DeleteSessionsResponse>, ApiError> {
    let deleted = ClassSession::delete_by_subject(state.db(), id_asignatura).await?;
    Ok(Json(DeleteSessionsResponse {
        message: "Clases eliminadas con éxito".to_string(),
        deleted,
    }))
}
