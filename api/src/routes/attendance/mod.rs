use axum::{
    Router,
    routing::{get, post, put},
};
use util::state::AppState;

mod common;
mod get;
mod post;
mod put;

pub use get::{
    get_attendance_by_student_and_session, get_attendance_by_student_username,
    get_subject_sessions_attendance, list_student_ids_for_subject,
};
pub use post::{record_attendance, record_attendance_automatic, scan_attendance};
pub use put::mark_attendance_present;

pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/insertAsistencia", post(record_attendance))
        .route(
            "/insertAsistencia/automatica",
            post(record_attendance_automatic),
        )
        .route("/escanearAsistencia", post(scan_attendance))
        .route("/actualizar-asistencia", put(mark_attendance_present))
        .route(
            "/asistencia/estudiante/{usuario}",
            get(get_attendance_by_student_username),
        )
        .route(
            "/asistencia/{id_estudiante}/{id_clase}",
            get(get_attendance_by_student_and_session),
        )
        .route(
            "/getEstudiantesAsignatura/{id_asignatura}",
            get(list_student_ids_for_subject),
        )
        .route(
            "/asignatura-clases-asistencia",
            get(get_subject_sessions_attendance),
        )
}
