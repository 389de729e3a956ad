//! Session ("clase") resource: read-only routes.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use util::state::AppState;

use super::common::{EnrollmentSessionRow, QrCodeQuery, QrCodeResponse};
use crate::response::ApiError;
use crate::routes::common::parse_fecha;
use db::models::class_session::Model as ClassSession;

/// GET `/clases`
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassSession>>, ApiError> {
    let sessions = ClassSession::get_all(state.db()).await?;
    Ok(Json(sessions))
}

/// GET `/clases/asignatura/{id}`
///
/// Sessions of one subject; 404 when the subject has none.
pub async fn list_sessions_by_subject(
    State(state): State<AppState>,
    Path(id_asignatura): Path<i64>,
) -> Result<Json<Vec<ClassSession>>, ApiError> {
    let sessions = ClassSession::list_by_subject(state.db(), id_asignatura).await?;
    if sessions.is_empty() {
        return Err(ApiError::not_found(
            "No se encontraron clases para la asignatura especificada",
        ));
    }
    Ok(Json(sessions))
}

/// GET `/clases/fecha/{fecha}`
///
/// Sessions on a calendar date. The date is validated before any query; an
/// empty result set is not an error.
pub async fn list_sessions_by_date(
    State(state): State<AppState>,
    Path(fecha): Path<String>,
) -> Result<Json<Vec<ClassSession>>, ApiError> {
    let fecha = parse_fecha(&fecha)?;
    let sessions = ClassSession::list_by_date(state.db(), fecha).await?;
    Ok(Json(sessions))
}

/// GET `/clase/codigoqr?id_asignatura&fecha_clase`
///
/// Stored QR payload of the session matching (subject, date). Returns the
/// first match; 404 when there is none.
pub async fn get_qr_code(
    State(state): State<AppState>,
    Query(query): Query<QrCodeQuery>,
) -> Result<Json<QrCodeResponse>, ApiError> {
    let (Some(id_asignatura), Some(fecha_clase)) = (query.id_asignatura, query.fecha_clase) else {
        return Err(ApiError::bad_request(
            "Faltan parámetros: id_asignatura o fecha_clase",
        ));
    };
    let fecha = parse_fecha(&fecha_clase)?;

    let sessions = ClassSession::find_by_subject_and_date(state.db(), id_asignatura, fecha).await?;
    match sessions.into_iter().next() {
        Some(session) => Ok(Json(QrCodeResponse {
            codigoqr_clase: session.codigoqr_clase,
        })),
        None => Err(ApiError::not_found(
            "No se encontraron resultados para los parámetros proporcionados.",
        )),
    }
}

/// GET `/getClaseInscripcion/{id_asignatura}`
///
/// Id of the subject's enrollment session; 404 when none exists.
pub async fn get_enrollment_session(
    State(state): State<AppState>,
    Path(id_asignatura): Path<i64>,
) -> Result<Json<Vec<EnrollmentSessionRow>>, ApiError> {
    match ClassSession::enrollment_session(state.db(), id_asignatura).await? {
        Some(session) => Ok(Json(vec![EnrollmentSessionRow {
            id_clase: session.id_clase,
        }])),
        None => Err(ApiError::not_found(
            "No se encontró ninguna clase con el código QR \"Clase de inscripción\"",
        )),
    }
}
