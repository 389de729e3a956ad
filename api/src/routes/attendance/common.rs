use serde::{Deserialize, Serialize};

/// Body of `POST /insertAsistencia` and `POST /insertAsistencia/automatica`.
/// The presence value is never part of the body; each endpoint forces its
/// own (scan = 1, pre-population = 0).
#[derive(Debug, Deserialize)]
pub struct RecordAttendanceRequest {
    pub id_clase: Option<i64>,
    pub id_estudiante: Option<i64>,
    pub fecha_asistencia: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecordAttendanceResponse {
    pub message: String,
    pub id_asistencia: i64,
}

/// Body of `PUT /actualizar-asistencia`. Field names are camelCase on the
/// wire, matching the client that calls it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkPresentRequest {
    pub id_clase: Option<i64>,
    pub fecha_asistencia: Option<String>,
    pub id_estudiante: Option<i64>,
}

/// Body of `POST /escanearAsistencia`: the scanned payload is compared by
/// literal string equality against the stored payload of the subject's
/// session on the given date.
#[derive(Debug, Deserialize)]
pub struct ScanAttendanceRequest {
    pub id_asignatura: Option<i64>,
    pub id_estudiante: Option<i64>,
    pub fecha: Option<String>,
    pub codigoqr_escaneado: Option<String>,
}

/// Query of `GET /asignatura-clases-asistencia`.
#[derive(Debug, Deserialize)]
pub struct SubjectSessionsQuery {
    #[serde(rename = "idProfesor")]
    pub id_profesor: Option<i64>,
    #[serde(rename = "idAsignatura")]
    pub id_asignatura: Option<i64>,
}
