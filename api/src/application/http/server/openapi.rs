use crate::application::http::{
    chat::router::ChatApiDoc, health::router::HealthApiDoc, history::router::HistoryApiDoc,
    profile::router::ProfileApiDoc, scan::router::ScanApiDoc, session::router::SessionApiDoc,
};
use utoipa::OpenApi;

/// Profile routes sit at the root, so they are merged rather than nested.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(ProfileApiDoc::openapi());
    openapi
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LabelGuard API",
        description = "Scan food labels, classify ingredients and ask about them"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/sessions", api = SessionApiDoc),
        (path = "/sessions", api = ScanApiDoc),
        (path = "/sessions", api = ChatApiDoc),
        (path = "/history", api = HistoryApiDoc),
    )
)]
pub struct ApiDoc;
