use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

mod common;
mod get;
mod post;

pub use get::{get_student_by_username, get_teacher_by_username, list_students, list_teachers};
pub use post::{create_student, create_teacher};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/estudiantes", get(list_students))
        .route("/estudiantes/usuario/{usuario}", get(get_student_by_username))
        .route("/profesores", get(list_teachers))
        .route("/profesores/usuario/{usuario}", get(get_teacher_by_username))
        .route("/insertar-estudiante", post(create_student))
        .route("/insertar-profesor", post(create_teacher))
}
