//! Attendance writes: scan insert, pre-population insert, and the
//! server-side scan verification flow.

use axum::{Json, extract::State, http::StatusCode};
use util::state::AppState;

use super::common::{RecordAttendanceRequest, RecordAttendanceResponse, ScanAttendanceRequest};
use crate::response::{ApiError, MessageBody};
use crate::routes::common::parse_fecha;
use db::models::{attendance_record::Model as AttendanceRecord, class_session::Model as ClassSession};

/// POST `/insertAsistencia`
///
/// Records a successful scan: inserts a row with present forced to 1.
/// Duplicate calls for the same (session, student) insert duplicate rows;
/// the schema deliberately carries no uniqueness constraint.
pub async fn record_attendance(
    State(state): State<AppState>,
    Json(body): Json<RecordAttendanceRequest>,
) -> Result<(StatusCode, Json<RecordAttendanceResponse>), ApiError> {
    let (Some(id_clase), Some(id_estudiante), Some(fecha_asistencia)) =
        (body.id_clase, body.id_estudiante, body.fecha_asistencia)
    else {
        return Err(ApiError::bad_request("Faltan parámetros requeridos"));
    };
    let fecha = parse_fecha(&fecha_asistencia)?;

    let record = AttendanceRecord::record(state.db(), id_clase, id_estudiante, fecha, true).await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordAttendanceResponse {
            message: "Asistencia registrada exitosamente".to_string(),
            id_asistencia: record.id_asistencia,
        }),
    ))
}

/// POST `/insertAsistencia/automatica`
///
/// Pre-populates a "not yet scanned" row (present = 0). Called once per
/// enrolled student when a session and its QR payload are generated.
pub async fn record_attendance_automatic(
    State(state): State<AppState>,
    Json(body): Json<RecordAttendanceRequest>,
) -> Result<Json<MessageBody>, ApiError> {
    let (Some(id_clase), Some(id_estudiante), Some(fecha_asistencia)) =
        (body.id_clase, body.id_estudiante, body.fecha_asistencia)
    else {
        return Err(ApiError::bad_request("Faltan parámetros requeridos"));
    };
    let fecha = parse_fecha(&fecha_asistencia)?;

    AttendanceRecord::record(state.db(), id_clase, id_estudiante, fecha, false).await?;

    Ok(Json(MessageBody {
        message: "Asistencia registrada exitosamente".to_string(),
    }))
}

/// POST `/escanearAsistencia`
///
/// Server-side scan verification: loads the subject's session for the given
/// date and compares the scanned payload to the stored one by literal string
/// equality. On equality the student's pre-populated row is flipped to
/// present = 1; inequality changes nothing and is surfaced as a 400.
pub async fn scan_attendance(
    State(state): State<AppState>,
    Json(body): Json<ScanAttendanceRequest>,
) -> Result<Json<MessageBody>, ApiError> {
    let (Some(id_asignatura), Some(id_estudiante), Some(fecha), Some(codigoqr_escaneado)) = (
        body.id_asignatura,
        body.id_estudiante,
        body.fecha,
        body.codigoqr_escaneado,
    ) else {
        return Err(ApiError::bad_request("Faltan parámetros requeridos"));
    };
    let fecha = parse_fecha(&fecha)?;

    let sessions =
        ClassSession::find_by_subject_and_date(state.db(), id_asignatura, fecha).await?;
    let Some(session) = sessions.into_iter().next() else {
        return Err(ApiError::not_found(
            "No se encontró ninguna clase para la fecha indicada",
        ));
    };

    if !session.matches_payload(&codigoqr_escaneado) {
        return Err(ApiError::bad_request("El código QR no coincide"));
    }

    let updated =
        AttendanceRecord::mark_present(state.db(), session.id_clase, fecha, id_estudiante).await?;
    if updated == 0 {
        return Err(ApiError::not_found(
            "No se encontró asistencia para actualizar",
        ));
    }

    Ok(Json(MessageBody {
        message: "Asistencia registrada exitosamente".to_string(),
    }))
}
