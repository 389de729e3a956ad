use axum::{
    Json,
    extract::{Path, State},
};
use util::state::AppState;

use crate::response::{ApiError, MessageBody};
use db::models::subject::Model as Subject;

/// DELETE `/deleteAsignatura/{id_asignatura}`
///
/// Cascading delete (attendance rows → sessions → subject) in a single
/// transaction. 404 when the subject id matches nothing.
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id_asignatura): Path<i64>,
) -> Result<Json<MessageBody>, ApiError> {
    let deleted = Subject::delete_cascade(state.db(), id_asignatura).await?;
    if !deleted {
        return Err(ApiError::not_found("Asignatura no encontrada"));
    }
    Ok(Json(MessageBody {
        message: "Asignatura eliminada correctamente".to_string(),
    }))
}
