use axum::{
    Router,
    routing::{delete, get, post},
};
use util::state::AppState;

mod common;
mod delete;
mod get;
mod post;

pub use delete::delete_subject;
pub use get::{
    get_subject, get_subject_detail_for_student, list_enrolled_students, list_subjects,
    list_subjects_by_student_username, list_subjects_by_teacher,
    list_subjects_by_teacher_username,
};
pub use post::create_subject;

pub fn subject_routes() -> Router<AppState> {
    Router::new()
        .route("/asignaturas", get(list_subjects))
        .route("/asignatura/{id}", get(get_subject))
        .route("/asignaturas/profesor/{id}", get(list_subjects_by_teacher))
        .route(
            "/asignaturas/profesor/usuario/{usuario}",
            get(list_subjects_by_teacher_username),
        )
        .route(
            "/asignaturas/estudiante/{usuario}",
            get(list_subjects_by_student_username),
        )
        .route(
            "/asignatura/{id_asignatura}/{usuario_estudiante}",
            get(get_subject_detail_for_student),
        )
        .route(
            "/asignaturas/{id_asignatura}/estudiantes",
            get(list_enrolled_students),
        )
        .route("/insertAsignatura", post(create_subject))
        .route("/deleteAsignatura/{id_asignatura}", delete(delete_subject))
}
