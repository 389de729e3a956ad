//! Attendance reads.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use util::state::AppState;

use super::common::SubjectSessionsQuery;
use crate::response::ApiError;
use db::models::attendance_record::{
    Model as AttendanceRecord, StudentIdRow, SubjectSessionAttendanceRow,
};

/// GET `/asistencia/{id_estudiante}/{id_clase}`
///
/// Every record of one student for one session (duplicates included).
pub async fn get_attendance_by_student_and_session(
    State(state): State<AppState>,
    Path((id_estudiante, id_clase)): Path<(i64, i64)>,
) -> Result<Json<Vec<AttendanceRecord>>, ApiError> {
    let records =
        AttendanceRecord::for_student_and_session(state.db(), id_estudiante, id_clase).await?;
    Ok(Json(records))
}

/// GET `/asistencia/estudiante/{usuario}`
///
/// Every record of one student across all sessions; 404 when there are none.
pub async fn get_attendance_by_student_username(
    State(state): State<AppState>,
    Path(usuario): Path<String>,
) -> Result<Json<Vec<AttendanceRecord>>, ApiError> {
    let records = AttendanceRecord::for_student_username(state.db(), &usuario).await?;
    if records.is_empty() {
        return Err(ApiError::not_found(
            "No se encontró asistencia para este estudiante",
        ));
    }
    Ok(Json(records))
}

/// GET `/getEstudiantesAsignatura/{id_asignatura}`
///
/// Distinct student ids with any record under the subject; used to know who
/// to pre-populate when a new session is generated.
pub async fn list_student_ids_for_subject(
    State(state): State<AppState>,
    Path(id_asignatura): Path<i64>,
) -> Result<Json<Vec<StudentIdRow>>, ApiError> {
    let ids = AttendanceRecord::student_ids_for_subject(state.db(), id_asignatura).await?;
    Ok(Json(ids))
}

/// GET `/asignatura-clases-asistencia?idProfesor&idAsignatura`
///
/// Subject × session × attendance join backing the teacher's live view.
/// Both parameters are required.
pub async fn get_subject_sessions_attendance(
    State(state): State<AppState>,
    Query(query): Query<SubjectSessionsQuery>,
) -> Result<Json<Vec<SubjectSessionAttendanceRow>>, ApiError> {
    let (Some(id_profesor), Some(id_asignatura)) = (query.id_profesor, query.id_asignatura) else {
        return Err(ApiError::bad_request(
            "Los parámetros idProfesor e idAsignatura son requeridos",
        ));
    };

    let rows =
        AttendanceRecord::subject_sessions_attendance(state.db(), id_profesor, id_asignatura)
            .await?;
    Ok(Json(rows))
}
