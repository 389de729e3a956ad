use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /insertAsignatura`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubjectRequest {
    pub id_profesor: i64,
    #[validate(length(min = 1))]
    pub nombre_asignatura: String,
    #[validate(length(min = 1))]
    pub siglas_asignatura: String,
    #[validate(length(min = 1))]
    pub color_asignatura: String,
    #[validate(length(min = 1))]
    pub color_seccion_asignatura: String,
    #[validate(length(min = 1))]
    pub seccion_asignatura: String,
    #[validate(length(min = 1))]
    pub modalidad_asignatura: String,
}

#[derive(Debug, Serialize)]
pub struct CreateSubjectResponse {
    pub message: String,
    pub id_asignatura: i64,
}
