mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use tower::ServiceExt;

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

#[tokio::test]
async fn test_create_student_then_get_by_username() {
    let (app, _state) = make_test_app().await;

    let resp = app
        .clone()
        .oneshot(post_json(
            "/insertar-estudiante",
            json!({ "usuario_estudiante": "alumno1", "contrasena_estudiante": "secreta" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["id"].as_i64().is_some());

    let resp = app
        .oneshot(get("/estudiantes/usuario/alumno1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let student = body_json(resp).await;
    assert_eq!(student["usuario_estudiante"], "alumno1");
    // The hash column is never serialized.
    assert!(student.get("contrasena_estudiante").is_none());
}

#[tokio::test]
async fn test_get_student_unknown_username_is_not_found() {
    let (app, _state) = make_test_app().await;

    let resp = app.oneshot(get("/estudiantes/usuario/nadie")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_teacher_then_list() {
    let (app, _state) = make_test_app().await;

    let resp = app
        .clone()
        .oneshot(post_json(
            "/insertar-profesor",
            json!({ "usuario_profesor": "profe1", "contrasena_profesor": "secreta" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/profesores")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["usuario_profesor"], "profe1");
    assert!(rows[0].get("contrasena_profesor").is_none());
}

#[tokio::test]
async fn test_create_student_empty_username_is_bad_request() {
    let (app, _state) = make_test_app().await;

    let resp = app
        .oneshot(post_json(
            "/insertar-estudiante",
            json!({ "usuario_estudiante": "", "contrasena_estudiante": "secreta" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_usernames_are_permitted() {
    let (app, _state) = make_test_app().await;

    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(post_json(
                "/insertar-estudiante",
                json!({ "usuario_estudiante": "repetido", "contrasena_estudiante": "pw" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = app.oneshot(get("/estudiantes")).await.unwrap();
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 2);
}
