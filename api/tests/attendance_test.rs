mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tower::ServiceExt;

use db::models::{
    class_session::Model as SessionModel, student::Model as StudentModel,
    subject::Model as SubjectModel, teacher::Model as TeacherModel,
};
use helpers::app::make_test_app;
use util::state::AppState;

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

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

struct Seeded {
    id_profesor: i64,
    id_asignatura: i64,
    id_clase: i64,
    id_estudiante: i64,
}

/// One teacher, one subject, one dated session with payload "qr-lunes", one
/// student.
async fn seed(state: &AppState) -> Seeded {
    let db = state.db();
    let teacher = TeacherModel::create(db, "profe", "pw").await.unwrap();
    let (subject, _) = SubjectModel::create_with_enrollment(
        db, teacher.id_profesor, "Redes", "RED", "#fff", "#000", "A", "presencial",
    )
    .await
    .unwrap();
    let fecha = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let session = SessionModel::create(db, subject.id_asignatura, fecha, "qr-lunes")
        .await
        .unwrap();
    let student = StudentModel::create(db, "alumno", "pw").await.unwrap();

    Seeded {
        id_profesor: teacher.id_profesor,
        id_asignatura: subject.id_asignatura,
        id_clase: session.id_clase,
        id_estudiante: student.id_estudiante,
    }
}

#[tokio::test]
async fn test_record_attendance_missing_field_is_bad_request() {
    let (app, _state) = make_test_app().await;

    let resp = app
        .oneshot(post_json(
            "/insertAsistencia",
            json!({ "id_clase": 1, "fecha_asistencia": "2026-03-02" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_inserts_produce_two_rows() {
    let (app, state) = make_test_app().await;
    let s = seed(&state).await;

    let body = json!({
        "id_clase": s.id_clase,
        "id_estudiante": s.id_estudiante,
        "fecha_asistencia": "2026-03-02"
    });
    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(post_json("/insertAsistencia", body.clone()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app
        .oneshot(get(&format!(
            "/asistencia/{}/{}",
            s.id_estudiante, s.id_clase
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_automatic_then_mark_present_yields_single_present_record() {
    let (app, state) = make_test_app().await;
    let s = seed(&state).await;

    let resp = app
        .clone()
        .oneshot(post_json(
            "/insertAsistencia/automatica",
            json!({
                "id_clase": s.id_clase,
                "id_estudiante": s.id_estudiante,
                "fecha_asistencia": "2026-03-02"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(put_json(
            "/actualizar-asistencia",
            json!({
                "idClase": s.id_clase,
                "fechaAsistencia": "2026-03-02",
                "idEstudiante": s.id_estudiante
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(get(&format!(
            "/asistencia/{}/{}",
            s.id_estudiante, s.id_clase
        )))
        .await
        .unwrap();
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["asistencia"], 1);
}

#[tokio::test]
async fn test_mark_present_without_prepopulated_row_is_not_found() {
    let (app, state) = make_test_app().await;
    let s = seed(&state).await;

    let resp = app
        .oneshot(put_json(
            "/actualizar-asistencia",
            json!({
                "idClase": s.id_clase,
                "fechaAsistencia": "2026-03-02",
                "idEstudiante": s.id_estudiante
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_scan_with_matching_payload_marks_present() {
    let (app, state) = make_test_app().await;
    let s = seed(&state).await;

    app.clone()
        .oneshot(post_json(
            "/insertAsistencia/automatica",
            json!({
                "id_clase": s.id_clase,
                "id_estudiante": s.id_estudiante,
                "fecha_asistencia": "2026-03-02"
            }),
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(post_json(
            "/escanearAsistencia",
            json!({
                "id_asignatura": s.id_asignatura,
                "id_estudiante": s.id_estudiante,
                "fecha": "2026-03-02",
                "codigoqr_escaneado": "qr-lunes"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(get(&format!(
            "/asistencia/{}/{}",
            s.id_estudiante, s.id_clase
        )))
        .await
        .unwrap();
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["asistencia"], 1);
}

#[tokio::test]
async fn test_scan_with_wrong_payload_changes_nothing() {
    let (app, state) = make_test_app().await;
    let s = seed(&state).await;

    app.clone()
        .oneshot(post_json(
            "/insertAsistencia/automatica",
            json!({
                "id_clase": s.id_clase,
                "id_estudiante": s.id_estudiante,
                "fecha_asistencia": "2026-03-02"
            }),
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(post_json(
            "/escanearAsistencia",
            json!({
                "id_asignatura": s.id_asignatura,
                "id_estudiante": s.id_estudiante,
                "fecha": "2026-03-02",
                "codigoqr_escaneado": "qr-martes"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .oneshot(get(&format!(
            "/asistencia/{}/{}",
            s.id_estudiante, s.id_clase
        )))
        .await
        .unwrap();
    let rows = body_json(resp).await;
    assert_eq!(rows[0]["asistencia"], 0);
}

#[tokio::test]
async fn test_scan_without_session_on_date_is_not_found() {
    let (app, state) = make_test_app().await;
    let s = seed(&state).await;

    let resp = app
        .oneshot(post_json(
            "/escanearAsistencia",
            json!({
                "id_asignatura": s.id_asignatura,
                "id_estudiante": s.id_estudiante,
                "fecha": "2026-03-03",
                "codigoqr_escaneado": "qr-lunes"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_attendance_by_username_is_not_found_when_empty() {
    let (app, state) = make_test_app().await;
    let s = seed(&state).await;

    let resp = app
        .clone()
        .oneshot(get("/asistencia/estudiante/alumno"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    app.clone()
        .oneshot(post_json(
            "/insertAsistencia",
            json!({
                "id_clase": s.id_clase,
                "id_estudiante": s.id_estudiante,
                "fecha_asistencia": "2026-03-02"
            }),
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(get("/asistencia/estudiante/alumno"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_student_ids_for_subject_are_distinct() {
    let (app, state) = make_test_app().await;
    let s = seed(&state).await;

    let body = json!({
        "id_clase": s.id_clase,
        "id_estudiante": s.id_estudiante,
        "fecha_asistencia": "2026-03-02"
    });
    for _ in 0..2 {
        app.clone()
            .oneshot(post_json("/insertAsistencia", body.clone()))
            .await
            .unwrap();
    }

    let resp = app
        .oneshot(get(&format!(
            "/getEstudiantesAsignatura/{}",
            s.id_asignatura
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["id_estudiante"], s.id_estudiante);
}

#[tokio::test]
async fn test_subject_sessions_attendance_requires_both_params() {
    let (app, _state) = make_test_app().await;

    let resp = app
        .oneshot(get("/asignatura-clases-asistencia?idProfesor=1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_subject_sessions_attendance_join() {
    let (app, state) = make_test_app().await;
    let s = seed(&state).await;

    app.clone()
        .oneshot(post_json(
            "/insertAsistencia",
            json!({
                "id_clase": s.id_clase,
                "id_estudiante": s.id_estudiante,
                "fecha_asistencia": "2026-03-02"
            }),
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(get(&format!(
            "/asignatura-clases-asistencia?idProfesor={}&idAsignatura={}",
            s.id_profesor, s.id_asignatura
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["id_clase"], s.id_clase);
    assert_eq!(rows[0]["asistencia"], 1);
    assert_eq!(rows[0]["nombre_asignatura"], "Redes");
}
