use axum::extract::{Path, State};
use labelguard_core::domain::chat::{entities::ChatExchange, ports::ChatService};
use uuid::Uuid;

use crate::application::http::{
    chat::validators::SendMessageValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/{session_id}/chat",
    tag = "chat",
    summary = "Ask the assistant",
    description = "Appends the question and the assistant reply to the session transcript. Assistant failures come back as a reply, not an error.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = SendMessageValidator,
    responses(
        (status = 200, body = ChatExchange),
        (status = 400, description = "Empty question"),
        (status = 404, description = "Session not found")
    )
)]
pub async fn send_message(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SendMessageValidator>,
) -> Result<Response<ChatExchange>, ApiError> {
    state
        .service
        .ask(session_id, payload.message)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
