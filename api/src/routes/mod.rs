//! HTTP route entry point.
//!
//! Routes are organized by resource (subjects, sessions, attendance, account
//! management) plus a public `/health` probe. Paths are the Spanish API
//! surface the mobile/web clients call.

use axum::Router;
use util::state::AppState;

pub mod attendance;
pub mod common;
pub mod health;
pub mod sessions;
pub mod subjects;
pub mod users;

/// Builds the complete application router for all HTTP endpoints.
///
/// # Route structure:
/// - `/health` → health probe.
/// - `/asignaturas`, `/asignatura/...`, `/insertAsignatura`,
///   `/deleteAsignatura/...` → subject resource.
/// - `/clases...`, `/insertClase`, `/deleteClases/...`,
///   `/getClaseInscripcion/...`, `/clase/codigoqr` → session resource.
/// - `/insertAsistencia...`, `/actualizar-asistencia`, `/asistencia/...`,
///   `/getEstudiantesAsignatura/...`, `/asignatura-clases-asistencia`,
///   `/escanearAsistencia` → attendance resource.
/// - `/estudiantes...`, `/profesores...`, `/insertar-estudiante`,
///   `/insertar-profesor` → account resource.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .merge(subjects::subject_routes())
        .merge(sessions::session_routes())
        .merge(attendance::attendance_routes())
        .merge(users::user_routes())
        .with_state(app_state)
}
