use super::handlers::{
    filter_ingredients::{__path_filter_ingredients, filter_ingredients},
    scan_session::{__path_scan_session, scan_session},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(scan_session, filter_ingredients))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/sessions/{{session_id}}/scan", state.args.server.root_path),
            post(scan_session),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/ingredients",
                state.args.server.root_path
            ),
            get(filter_ingredients),
        )
}
