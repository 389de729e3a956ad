use axum::{Json, extract::State};
use util::state::AppState;
use validator::Validate;

use super::common::{CreateSubjectRequest, CreateSubjectResponse};
use crate::response::ApiError;
use db::models::subject::Model as Subject;

/// POST `/insertAsignatura`
///
/// Creates a subject together with its enrollment session (one transaction),
/// so `GET /getClaseInscripcion/{id}` succeeds immediately afterwards.
pub async fn create_subject(
    State(state): State<AppState>,
    Json(body): Json<CreateSubjectRequest>,
) -> Result<Json<CreateSubjectResponse>, ApiError> {
    body.validate()
        .map_err(|_| ApiError::bad_request("Faltan datos requeridos."))?;

    let (subject, _enrollment) = Subject::create_with_enrollment(
        state.db(),
        body.id_profesor,
        &body.nombre_asignatura,
        &body.siglas_asignatura,
        &body.color_asignatura,
        &body.color_seccion_asignatura,
        &body.seccion_asignatura,
        &body.modalidad_asignatura,
    )
    .await?;

    Ok(Json(CreateSubjectResponse {
        message: "Asignatura insertada correctamente".to_string(),
        id_asignatura: subject.id_asignatura,
    }))
}
