pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Room for multipart boundaries and the `source` field on top of the image.
pub const MAX_UPLOAD_BODY: usize = MAX_IMAGE_SIZE + 64 * 1024;
