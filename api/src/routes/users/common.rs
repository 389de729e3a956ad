use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /insertar-estudiante`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1))]
    pub usuario_estudiante: String,
    #[validate(length(min = 1))]
    pub contrasena_estudiante: String,
}

/// Body of `POST /insertar-profesor`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeacherRequest {
    #[validate(length(min = 1))]
    pub usuario_profesor: String,
    #[validate(length(min = 1))]
    pub contrasena_profesor: String,
}

#[derive(Debug, Serialize)]
pub struct CreateAccountResponse {
    pub message: String,
    pub id: i64,
}
