use axum::{Json, extract::State};
use util::state::AppState;
use validator::Validate;

use super::common::{CreateAccountResponse, CreateStudentRequest, CreateTeacherRequest};
use crate::response::ApiError;
use db::models::{student::Model as Student, teacher::Model as Teacher};

/// POST `/insertar-estudiante`
///
/// The password is argon2-hashed before insert. Usernames carry no
/// uniqueness constraint; duplicates are permitted at the store level.
pub async fn create_student(
    State(state): State<AppState>,
    Json(body): Json<CreateStudentRequest>,
) -> Result<Json<CreateAccountResponse>, ApiError> {
    body.validate()
        .map_err(|_| ApiError::bad_request("Faltan datos requeridos."))?;

    let student =
        Student::create(state.db(), &body.usuario_estudiante, &body.contrasena_estudiante).await?;

    Ok(Json(CreateAccountResponse {
        message: "Estudiante insertado correctamente".to_string(),
        id: student.id_estudiante,
    }))
}

/// POST `/insertar-profesor`
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(body): Json<CreateTeacherRequest>,
) -> Result<Json<CreateAccountResponse>, ApiError> {
    body.validate()
        .map_err(|_| ApiError::bad_request("Faltan datos requeridos."))?;

    let teacher =
        Teacher::create(state.db(), &body.usuario_profesor, &body.contrasena_profesor).await?;

    Ok(Json(CreateAccountResponse {
        message: "Profesor insertado correctamente".to_string(),
        id: teacher.id_profesor,
    }))
}
