mod common;

use axum::http::StatusCode;
use common::{DEAD_UPSTREAM, create_session, image_form, spawn_app};
use serde_json::Value;

#[tokio::test]
async fn test_new_session_awaits_an_image() {
    let app = spawn_app(DEAD_UPSTREAM).await;

    let response = app.server.post("/sessions").await;
    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["step"], "awaiting_image");
    assert_eq!(body["step_index"], 0);
    assert_eq!(body["has_image"], false);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let app = spawn_app(DEAD_UPSTREAM).await;

    let response = app
        .server
        .get("/sessions/0191f2b4-7c1e-7a3c-9a51-2f3b5d6c7e80")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["code"], "E_NOT_FOUND");
}

#[tokio::test]
async fn test_attach_image_moves_to_step_one() {
    let app = spawn_app(DEAD_UPSTREAM).await;
    let id = create_session(&app.server).await;

    let response = app
        .server
        .post(&format!("/sessions/{id}/image"))
        .multipart(image_form(None))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["step_index"], 1);
    assert_eq!(body["has_image"], true);
    assert!(
        body["image_data_url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,")
    );
}

#[tokio::test]
async fn test_captured_png_keeps_its_type() {
    let app = spawn_app(DEAD_UPSTREAM).await;
    let id = create_session(&app.server).await;

    let response = app
        .server
        .post(&format!("/sessions/{id}/image"))
        .multipart(image_form(Some("capture")))
        .await;

    response.assert_status_ok();
    assert!(
        response.json::<Value>()["image_data_url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,")
    );
}

#[tokio::test]
async fn test_missing_image_field_is_rejected() {
    let app = spawn_app(DEAD_UPSTREAM).await;
    let id = create_session(&app.server).await;

    let form = axum_test::multipart::MultipartForm::new().add_text("source", "upload");
    let response = app
        .server
        .post(&format!("/sessions/{id}/image"))
        .multipart(form)
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_scan_without_image_is_rejected() {
    let app = spawn_app(DEAD_UPSTREAM).await;
    let id = create_session(&app.server).await;

    let response = app.server.post(&format!("/sessions/{id}/scan")).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_failed_ocr_returns_to_image_selected() {
    let app = spawn_app(DEAD_UPSTREAM).await;
    let id = create_session(&app.server).await;
    app.server
        .post(&format!("/sessions/{id}/image"))
        .multipart(image_form(None))
        .await
        .assert_status_ok();

    let response = app.server.post(&format!("/sessions/{id}/scan")).await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    let session = app
        .server
        .get(&format!("/sessions/{id}"))
        .await
        .json::<Value>();
    assert_eq!(session["step"], "image_selected");
    assert_eq!(session["step_index"], 1);

    let history = app.server.get("/history").await.json::<Value>();
    assert_eq!(history["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_closed_session_is_gone() {
    let app = spawn_app(DEAD_UPSTREAM).await;
    let id = create_session(&app.server).await;

    app.server
        .delete(&format!("/sessions/{id}"))
        .await
        .assert_status_ok();

    app.server
        .get(&format!("/sessions/{id}"))
        .await
        .assert_status_not_found();
    app.server
        .delete(&format!("/sessions/{id}"))
        .await
        .assert_status_not_found();
}
