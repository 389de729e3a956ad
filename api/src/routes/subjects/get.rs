//! Subject resource: read-only routes.

use axum::{
    Json,
    extract::{Path, State},
};
use util::state::AppState;

use crate::response::ApiError;
use db::models::subject::{EnrolledStudent, Model as Subject, SubjectAttendanceSummary};

/// GET `/asignaturas`
///
/// All subjects, no filter.
pub async fn list_subjects(State(state): State<AppState>) -> Result<Json<Vec<Subject>>, ApiError> {
    let subjects = Subject::get_all(state.db()).await?;
    Ok(Json(subjects))
}

/// GET `/asignatura/{id}`
///
/// Single subject by id; 404 when the id matches nothing.
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Subject>, ApiError> {
    match Subject::get_by_id(state.db(), id).await? {
        Some(subject) => Ok(Json(subject)),
        None => Err(ApiError::not_found(
            "No se encontró asignatura con el ID proporcionado",
        )),
    }
}

/// GET `/asignaturas/profesor/{id}`
pub async fn list_subjects_by_teacher(
    State(state): State<AppState>,
    Path(id_profesor): Path<i64>,
) -> Result<Json<Vec<Subject>>, ApiError> {
    let subjects = Subject::list_by_teacher(state.db(), id_profesor).await?;
    Ok(Json(subjects))
}

/// GET `/asignaturas/profesor/usuario/{usuario}`
pub async fn list_subjects_by_teacher_username(
    State(state): State<AppState>,
    Path(usuario): Path<String>,
) -> Result<Json<Vec<Subject>>, ApiError> {
    let subjects = Subject::list_by_teacher_username(state.db(), &usuario).await?;
    Ok(Json(subjects))
}

/// GET `/asignaturas/estudiante/{usuario}`
///
/// Per-subject attendance summary for every subject the student has at least
/// one record in. 404 when the student has none at all.
pub async fn list_subjects_by_student_username(
    State(state): State<AppState>,
    Path(usuario): Path<String>,
) -> Result<Json<Vec<SubjectAttendanceSummary>>, ApiError> {
    let summary = Subject::attendance_summary_for_student(state.db(), &usuario, None).await?;
    if summary.is_empty() {
        return Err(ApiError::not_found(
            "No se encontraron asignaturas para el estudiante proporcionado.",
        ));
    }
    Ok(Json(summary))
}

/// GET `/asignatura/{id_asignatura}/{usuario_estudiante}`
///
/// Same aggregation scoped to one subject. An empty result is not an error.
pub async fn get_subject_detail_for_student(
    State(state): State<AppState>,
    Path((id_asignatura, usuario_estudiante)): Path<(i64, String)>,
) -> Result<Json<Vec<SubjectAttendanceSummary>>, ApiError> {
    let summary = Subject::attendance_summary_for_student(
        state.db(),
        &usuario_estudiante,
        Some(id_asignatura),
    )
    .await?;
    Ok(Json(summary))
}

/// GET `/asignaturas/{id_asignatura}/estudiantes`
///
/// Enrolled roster: one row per distinct student holding any record under
/// the subject.
pub async fn list_enrolled_students(
    State(state): State<AppState>,
    Path(id_asignatura): Path<i64>,
) -> Result<Json<Vec<EnrolledStudent>>, ApiError> {
    let roster = Subject::enrolled_students(state.db(), id_asignatura).await?;
    Ok(Json(roster))
}
