use serde::{Deserialize, Serialize};

/// Body of `POST /insertClase`. All three fields are required; missing ones
/// are reported as a 400, not a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub id_asignatura: Option<i64>,
    pub fecha_clase: Option<String>,
    pub codigoqr_clase: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteSessionsResponse {
    pub message: String,
    pub deleted: u64,
}

/// Single-row shape of `GET /getClaseInscripcion/{id_asignatura}`.
#[derive(Debug, Serialize)]
pub struct EnrollmentSessionRow {
    pub id_clase: i64,
}

/// Query of `GET /clase/codigoqr`.
#[derive(Debug, Deserialize)]
pub struct QrCodeQuery {
    pub id_asignatura: Option<i64>,
    pub fecha_clase: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QrCodeResponse {
    pub codigoqr_clase: String,
}
