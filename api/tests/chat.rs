mod common;

use axum::http::StatusCode;
use common::{DEAD_UPSTREAM, create_session, image_form, spawn_app, spawn_upstream};
use serde_json::{Value, json};

#[tokio::test]
async fn test_chat_appends_question_and_reply() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(&upstream).await;
    let id = create_session(&app.server).await;

    let response = app
        .server
        .post(&format!("/sessions/{id}/chat"))
        .json(&json!({ "message": "Is this safe for kids?" }))
        .await;

    response.assert_status_ok();
    let exchange = response.json::<Value>();
    assert_eq!(exchange["reply"]["text"], "Best kept in moderation.");
    assert_eq!(exchange["reply"]["origin"], "assistant");

    let transcript = app
        .server
        .get(&format!("/sessions/{id}/chat"))
        .await
        .json::<Value>();
    let messages = transcript["data"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["origin"], "user");
    assert_eq!(messages[0]["text"], "Is this safe for kids?");
}

#[tokio::test]
async fn test_unreachable_assistant_becomes_an_apology() {
    let app = spawn_app(DEAD_UPSTREAM).await;
    let id = create_session(&app.server).await;

    let response = app
        .server
        .post(&format!("/sessions/{id}/chat"))
        .json(&json!({ "message": "What is E621?" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["reply"]["text"],
        "⚠️ AI request failed. Please try again."
    );
}

#[tokio::test]
async fn test_blank_question_is_rejected_and_not_recorded() {
    let app = spawn_app(DEAD_UPSTREAM).await;
    let id = create_session(&app.server).await;

    app.server
        .post(&format!("/sessions/{id}/chat"))
        .json(&json!({ "message": "   " }))
        .await
        .assert_status_bad_request();

    let transcript = app
        .server
        .get(&format!("/sessions/{id}/chat"))
        .await
        .json::<Value>();
    assert!(transcript["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_message_fails_validation() {
    let app = spawn_app(DEAD_UPSTREAM).await;
    let id = create_session(&app.server).await;

    app.server
        .post(&format!("/sessions/{id}/chat"))
        .json(&json!({ "message": "" }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_ingredient_shortcut_asks_about_the_selected_card() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(&upstream).await;
    let id = create_session(&app.server).await;
    app.server
        .post(&format!("/sessions/{id}/image"))
        .multipart(image_form(None))
        .await
        .assert_status_ok();
    app.server
        .post(&format!("/sessions/{id}/scan"))
        .await
        .assert_status_ok();

    let response = app
        .server
        .post(&format!("/sessions/{id}/ingredients/1/chat"))
        .await;

    response.assert_status_ok();
    let transcript = response.json::<Value>()["transcript"].clone();
    assert_eq!(transcript[0]["text"], "Tell me about Salt");

    app.server
        .post(&format!("/sessions/{id}/ingredients/9/chat"))
        .await
        .assert_status_not_found();
}
