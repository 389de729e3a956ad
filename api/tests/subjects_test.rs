mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tower::ServiceExt;

use db::models::{
    attendance_record::Model as RecordModel, class_session::Model as SessionModel,
    student::Model as StudentModel, subject::Model as SubjectModel,
    teacher::Model as TeacherModel,
};
use helpers::app::make_test_app;

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_subject_bootstraps_enrollment_session() {
    let (app, state) = make_test_app().await;
    let teacher = TeacherModel::create(state.db(), "profe", "pw").await.unwrap();

    let resp = app
        .clone()
        .oneshot(post_json(
            "/insertAsignatura",
            json!({
                "id_profesor": teacher.id_profesor,
                "nombre_asignatura": "Redes de Computadores",
                "siglas_asignatura": "RDC",
                "color_asignatura": "#1e88e5",
                "color_seccion_asignatura": "#bbdefb",
                "seccion_asignatura": "A-1",
                "modalidad_asignatura": "presencial"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let id = body["id_asignatura"].as_i64().unwrap();
    assert_eq!(body["message"], "Asignatura insertada correctamente");

    // The enrollment session exists immediately after subject creation.
    let resp = app
        .clone()
        .oneshot(get(&format!("/getClaseInscripcion/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert!(rows[0]["id_clase"].as_i64().is_some());
}

#[tokio::test]
async fn test_create_subject_empty_field_is_bad_request() {
    let (app, state) = make_test_app().await;
    let teacher = TeacherModel::create(state.db(), "profe", "pw").await.unwrap();

    let resp = app
        .oneshot(post_json(
            "/insertAsignatura",
            json!({
                "id_profesor": teacher.id_profesor,
                "nombre_asignatura": "",
                "siglas_asignatura": "RDC",
                "color_asignatura": "#1e88e5",
                "color_seccion_asignatura": "#bbdefb",
                "seccion_asignatura": "A-1",
                "modalidad_asignatura": "presencial"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_subject_unknown_id_is_not_found() {
    let (app, _state) = make_test_app().await;

    let resp = app.oneshot(get("/asignatura/424242")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_subject_then_get_is_not_found() {
    let (app, state) = make_test_app().await;
    let teacher = TeacherModel::create(state.db(), "profe", "pw").await.unwrap();
    let (subject, _) = SubjectModel::create_with_enrollment(
        state.db(),
        teacher.id_profesor,
        "Redes",
        "RED",
        "#fff",
        "#000",
        "A",
        "presencial",
    )
    .await
    .unwrap();
    let id = subject.id_asignatura;

    let resp = app
        .clone()
        .oneshot(delete(&format!("/deleteAsignatura/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(get(&format!("/asignatura/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Deleting again matches nothing.
    let resp = app
        .oneshot(delete(&format!("/deleteAsignatura/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_student_subject_listing_requires_at_least_one_record() {
    let (app, state) = make_test_app().await;
    let db = state.db();

    let teacher = TeacherModel::create(db, "profe", "pw").await.unwrap();
    let (subject, _) = SubjectModel::create_with_enrollment(
        db, teacher.id_profesor, "Redes", "RED", "#fff", "#000", "A", "presencial",
    )
    .await
    .unwrap();
    let student = StudentModel::create(db, "alumno", "pw").await.unwrap();
    StudentModel::create(db, "sin_registros", "pw").await.unwrap();

    let fecha = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let session = SessionModel::create(db, subject.id_asignatura, fecha, "qr-1")
        .await
        .unwrap();
    RecordModel::record(db, session.id_clase, student.id_estudiante, fecha, true)
        .await
        .unwrap();
    let fecha2 = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
    let session2 = SessionModel::create(db, subject.id_asignatura, fecha2, "qr-2")
        .await
        .unwrap();
    RecordModel::record(db, session2.id_clase, student.id_estudiante, fecha2, false)
        .await
        .unwrap();

    // The student with records sees the subject, with the derived percentage.
    let resp = app
        .clone()
        .oneshot(get("/asignaturas/estudiante/alumno"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["count_asistencias"], 1);
    assert_eq!(rows[0]["count_total_asistencias"], 2);
    assert_eq!(rows[0]["porcentaje_asistencia"], 50.0);

    // A student with no records gets a 404.
    let resp = app
        .oneshot(get("/asignaturas/estudiante/sin_registros"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_subject_detail_for_student_allows_empty_result() {
    let (app, state) = make_test_app().await;
    let teacher = TeacherModel::create(state.db(), "profe", "pw").await.unwrap();
    let (subject, _) = SubjectModel::create_with_enrollment(
        state.db(),
        teacher.id_profesor,
        "Redes",
        "RED",
        "#fff",
        "#000",
        "A",
        "presencial",
    )
    .await
    .unwrap();

    let resp = app
        .oneshot(get(&format!(
            "/asignatura/{}/desconocido",
            subject.id_asignatura
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let rows = body_json(resp).await;
    assert!(rows.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_subjects_by_teacher_username() {
    let (app, state) = make_test_app().await;
    let db = state.db();

    let teacher = TeacherModel::create(db, "profe_redes", "pw").await.unwrap();
    let other = TeacherModel::create(db, "profe_bd", "pw").await.unwrap();
    SubjectModel::create_with_enrollment(
        db, teacher.id_profesor, "Redes", "RED", "#fff", "#000", "A", "presencial",
    )
    .await
    .unwrap();
    SubjectModel::create_with_enrollment(
        db, other.id_profesor, "Bases de Datos", "BD", "#333", "#ccc", "B", "online",
    )
    .await
    .unwrap();

    let resp = app
        .oneshot(get("/asignaturas/profesor/usuario/profe_redes"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["nombre_asignatura"], "Redes");
}
