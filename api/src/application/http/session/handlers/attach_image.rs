use axum::extract::{Multipart, Path, State};
use bytes::Bytes;
use labelguard_core::domain::{
    image::entities::ImageSource,
    session::{
        entities::SessionSnapshot,
        ports::{AttachImageInput, SessionService},
    },
};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::validators::MAX_IMAGE_SIZE,
};

#[utoipa::path(
    post,
    path = "/{session_id}/image",
    tag = "session",
    summary = "Attach an image to a session",
    description = "Accepts a multipart form with an `image` file and an optional `source` of `upload` or `capture`. Replaces any previous image.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = SessionSnapshot, description = "Image attached, ready to scan"),
        (status = 400, description = "Missing, empty or oversized image"),
        (status = 404, description = "Session not found")
    )
)]
pub async fn attach_image(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<SessionSnapshot>, ApiError> {
    let mut image: Option<(Bytes, Option<String>)> = None;
    let mut source = ImageSource::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let mime_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some((data, mime_type));
            }
            "source" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read source: {}", e)))?;
                source = value
                    .parse()
                    .map_err(|_| ApiError::BadRequest(format!("Unknown image source: {}", value)))?;
            }
            _ => {}
        }
    }

    let (bytes, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("image field is required".to_string()))?;

    let session = state
        .service
        .attach_image(AttachImageInput {
            session_id,
            bytes,
            mime_type,
            source,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(session))
}
