#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::Path,
    routing::{get, post},
};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use labelguard_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Address nothing listens on, so every upstream call fails fast.
pub const DEAD_UPSTREAM: &str = "http://127.0.0.1:9";

pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

pub struct TestApp {
    pub server: TestServer,
    // Dropping the directory deletes the stored files.
    pub data_dir: TempDir,
}

pub async fn spawn_app(upstream: &str) -> TestApp {
    let data_dir = tempfile::tempdir().expect("temp dir");
    let ocr_endpoint = format!("{}/parse/image", upstream);

    let args = Args::parse_from([
        "labelguard-api",
        "--metrics",
        "false",
        "--data-dir",
        data_dir.path().to_str().expect("utf-8 temp path"),
        "--ocr-api-key",
        "test-key",
        "--ocr-endpoint",
        &ocr_endpoint,
        "--tesseract-path",
        "/nonexistent/labelguard-tesseract",
        "--nutrition-base-url",
        upstream,
        "--gemini-api-key",
        "test-key",
        "--gemini-base-url",
        upstream,
    ]);

    let app_state = state(Arc::new(args)).await.expect("app state");
    let app = router(app_state).expect("router");

    TestApp {
        server: TestServer::new(app).expect("test server"),
        data_dir,
    }
}

/// Serves canned OCR, food database and assistant answers on a random port.
pub async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/parse/image", post(ocr_space))
        .route("/ingredient/{file}", get(open_food_facts))
        .route("/models/{*action}", post(gemini));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind upstream");
    let addr: SocketAddr = listener.local_addr().expect("upstream addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("upstream server");
    });

    format!("http://{}", addr)
}

async fn ocr_space() -> Json<Value> {
    Json(json!({
        "ParsedResults": [{ "ParsedText": "Ingredients: Sugar, Salt, Water." }],
        "OCRExitCode": 1,
        "IsErroredOnProcessing": false
    }))
}

async fn open_food_facts(Path(file): Path<String>) -> Json<Value> {
    let name = file.trim_end_matches(".json").to_lowercase();

    let products = match name.as_str() {
        "sugar" => json!([{ "nutriscore_grade": "e" }]),
        "water" => json!([{ "nutriscore_grade": "a", "nova_group": 1 }]),
        _ => json!([]),
    };

    Json(json!({ "products": products }))
}

async fn gemini() -> Json<Value> {
    Json(json!({
        "candidates": [{
            "content": { "parts": [{ "text": "Best kept in moderation." }], "role": "model" }
        }]
    }))
}

pub fn image_form(source: Option<&str>) -> MultipartForm {
    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(PNG_BYTES.to_vec())
            .file_name("label.png")
            .mime_type("image/png"),
    );

    match source {
        Some(source) => form.add_text("source", source.to_string()),
        None => form,
    }
}

pub async fn create_session(server: &TestServer) -> String {
    let response = server.post("/sessions").await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Value>()["id"]
        .as_str()
        .expect("session id")
        .to_string()
}
