//! Account resource: read-only routes. Password hash columns are skipped
//! during serialization, so none of these responses ever carry credentials.

use axum::{
    Json,
    extract::{Path, State},
};
use util::state::AppState;

use crate::response::ApiError;
use db::models::{student::Model as Student, teacher::Model as Teacher};

/// GET `/estudiantes`
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, ApiError> {
    let students = Student::get_all(state.db()).await?;
    Ok(Json(students))
}

/// GET `/estudiantes/usuario/{usuario}`
pub async fn get_student_by_username(
    State(state): State<AppState>,
    Path(usuario): Path<String>,
) -> Result<Json<Student>, ApiError> {
    match Student::get_by_username(state.db(), &usuario).await? {
        Some(student) => Ok(Json(student)),
        None => Err(ApiError::not_found("Estudiante no encontrado")),
    }
}

/// GET `/profesores`
pub async fn list_teachers(State(state): State<AppState>) -> Result<Json<Vec<Teacher>>, ApiError> {
    let teachers = Teacher::get_all(state.db()).await?;
    Ok(Json(teachers))
}

/// GET `/profesores/usuario/{usuario}`
pub async fn get_teacher_by_username(
    State(state): State<AppState>,
    Path(usuario): Path<String>,
) -> Result<Json<Teacher>, ApiError> {
    match Teacher::get_by_username(state.db(), &usuario).await? {
        Some(teacher) => Ok(Json(teacher)),
        None => Err(ApiError::not_found("Profesor no encontrado")),
    }
}
