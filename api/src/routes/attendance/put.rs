use axum::{Json, extract::State};
use util::state::AppState;

use super::common::MarkPresentRequest;
use crate::response::{ApiError, MessageBody};
use crate::routes::common::parse_fecha;
use db::models::attendance_record::Model as AttendanceRecord;

/// PUT `/actualizar-asistencia`
///
/// Flips existing rows matching (session, date, student) to present = 1.
/// Zero matched rows is a 404: a no-op update here means the scan flow is
/// pointing at a row that was never pre-populated.
pub async fn mark_attendance_present(
    State(state): State<AppState>,
    Json(body): Json<MarkPresentRequest>,
) -> Result<Json<MessageBody>, ApiError> {
    let (Some(id_clase), Some(fecha_asistencia), Some(id_estudiante)) =
        (body.id_clase, body.fecha_asistencia, body.id_estudiante)
    else {
        return Err(ApiError::bad_request("Faltan parámetros requeridos"));
    };
    let fecha = parse_fecha(&fecha_asistencia)?;

    let updated =
        AttendanceRecord::mark_present(state.db(), id_clase, fecha, id_estudiante).await?;
    if updated == 0 {
        return Err(ApiError::not_found(
            "No se encontró asistencia para actualizar",
        ));
    }

    Ok(Json(MessageBody {
        message: "Asistencia actualizada correctamente".to_string(),
    }))
}
