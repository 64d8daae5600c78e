use super::handlers::{
    attach_image::{__path_attach_image, attach_image},
    create_session::{__path_create_session, create_session},
    delete_session::{__path_delete_session, delete_session},
    get_session::{__path_get_session, get_session},
};
use super::validators::MAX_UPLOAD_BODY;
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_session, get_session, delete_session, attach_image))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/sessions", state.args.server.root_path),
            post(create_session),
        )
        .route(
            &format!("{}/sessions/{{session_id}}", state.args.server.root_path),
            get(get_session).delete(delete_session),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/image",
                state.args.server.root_path
            ),
            post(attach_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY)),
        )
}
