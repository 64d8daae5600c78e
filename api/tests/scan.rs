mod common;

use common::{create_session, image_form, spawn_app, spawn_upstream};
use serde_json::Value;

async fn scanned_session(app: &common::TestApp) -> (String, Value) {
    let id = create_session(&app.server).await;
    app.server
        .post(&format!("/sessions/{id}/image"))
        .multipart(image_form(None))
        .await
        .assert_status_ok();

    let response = app.server.post(&format!("/sessions/{id}/scan")).await;
    response.assert_status_ok();

    (id, response.json::<Value>())
}

#[tokio::test]
async fn test_scan_classifies_ingredients_and_records_history() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(&upstream).await;

    let (id, report) = scanned_session(&app).await;

    assert_eq!(report["provider"], "primary");
    assert_eq!(report["extracted_text"], " Sugar, Salt, Water.");
    assert_eq!(
        report["ingredients"],
        serde_json::json!(["Sugar", "Salt", "Water"])
    );
    assert_eq!(report["ocr_progress"], serde_json::json!([]));
    assert_eq!(
        report["banner"],
        "User, analyzing ingredients for your health condition: general health"
    );

    let tiers: Vec<&str> = report["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["tier"].as_str().unwrap())
        .collect();
    assert_eq!(tiers, vec!["bad", "moderate", "good"]);

    let history = report["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["summary"], "Sugar, Salt, Water");

    let session = app
        .server
        .get(&format!("/sessions/{id}"))
        .await
        .json::<Value>();
    assert_eq!(session["step"], "results_ready");
    assert_eq!(session["step_index"], 3);
}

#[tokio::test]
async fn test_history_keeps_the_five_most_recent_scans() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(&upstream).await;

    for _ in 0..6 {
        scanned_session(&app).await;
    }

    let history = app.server.get("/history").await.json::<Value>();
    assert_eq!(history["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_filter_combines_search_and_risk() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(&upstream).await;
    let (id, _) = scanned_session(&app).await;

    let bad = app
        .server
        .get(&format!("/sessions/{id}/ingredients"))
        .add_query_param("risk", "bad")
        .await
        .json::<Value>();
    let bad = bad["data"].as_array().unwrap();
    assert_eq!(bad.len(), 1);
    assert_eq!(bad[0]["ingredient"], "Sugar");
    assert_eq!(bad[0]["note"], "High sugar can worsen diabetes and increase obesity risk.");

    let none = app
        .server
        .get(&format!("/sessions/{id}/ingredients"))
        .add_query_param("search", "wat")
        .add_query_param("risk", "bad")
        .await
        .json::<Value>();
    assert!(none["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_risk_filter_is_rejected() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(&upstream).await;
    let (id, _) = scanned_session(&app).await;

    app.server
        .get(&format!("/sessions/{id}/ingredients"))
        .add_query_param("risk", "terrible")
        .await
        .assert_status_bad_request();
}
