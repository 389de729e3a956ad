use axum::{Json, extract::State, http::StatusCode};
use util::state::AppState;

use super::common::{CreateSessionRequest, CreateSessionResponse};
use crate::response::ApiError;
use crate::routes::common::parse_fecha;
use db::models::class_session::Model as ClassSession;

/// POST `/insertClase`
///
/// Creates a dated session carrying its QR payload. All fields required.
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<CreateSessionResponse>), ApiError> {
    let (Some(id_asignatura), Some(fecha_clase), Some(codigoqr_clase)) =
        (body.id_asignatura, body.fecha_clase, body.codigoqr_clase)
    else {
        return Err(ApiError::bad_request("Faltan datos requeridos."));
    };
    let fecha = parse_fecha(&fecha_clase)?;

    let session = ClassSession::create(state.db(), id_asignatura, fecha, &codigoqr_clase).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            message: "Clase insertada correctamente".to_string(),
            id: session.id_clase,
        }),
    ))
}
