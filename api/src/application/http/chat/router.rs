use super::handlers::{
    ask_about_ingredient::{__path_ask_about_ingredient, ask_about_ingredient},
    get_transcript::{__path_get_transcript, get_transcript},
    send_message::{__path_send_message, send_message},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(send_message, get_transcript, ask_about_ingredient))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/sessions/{{session_id}}/chat", state.args.server.root_path),
            post(send_message).get(get_transcript),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/ingredients/{{index}}/chat",
                state.args.server.root_path
            ),
            post(ask_about_ingredient),
        )
}
