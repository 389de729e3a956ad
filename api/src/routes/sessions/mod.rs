use axum::{
    Router,
    routing::{delete, get, post},
};
use util::state::AppState;

mod common;
mod delete;
mod get;
mod post;

pub use delete::delete_sessions_by_subject;
pub use get::{
    get_enrollment_session, get_qr_code, list_sessions, list_sessions_by_date,
    list_sessions_by_subject,
};
pub use post::create_session;

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/clases", get(list_sessions))
        .route("/clases/asignatura/{id}", get(list_sessions_by_subject))
        .route("/clases/fecha/{fecha}", get(list_sessions_by_date))
        .route("/clase/codigoqr", get(get_qr_code))
        .route(
            "/getClaseInscripcion/{id_asignatura}",
            get(get_enrollment_session),
        )
        .route("/insertClase", post(create_session))
        .route(
            "/deleteClases/{id_asignatura}",
            delete(delete_sessions_by_subject),
        )
}
