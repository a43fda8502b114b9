//! File upload endpoint.

use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;

use super::ApiResult;
use crate::errors::AppError;
use crate::uploads;
use crate::AppState;

/// Multipart field carrying the file.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadedFile {
    pub filename: String,
    pub url: String,
}

/// POST /uploadfile/ - Store a file and return its public link.
pub async fn upload_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> ApiResult<UploadedFile> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await?;
        let stored_name = uploads::save_upload(&state.config.upload_dir, &filename, &bytes).await?;

        let base = uploads::resolve_base_url(state.config.public_base_url.as_deref(), &headers);
        let url = uploads::public_url(&base, &stored_name);

        tracing::info!(file = %stored_name, size = bytes.len(), "File uploaded");
        return Ok(Json(UploadedFile { filename, url }));
    }

    Err(AppError::BadRequest(format!(
        "Multipart field '{}' is required",
        FILE_FIELD
    )))
}
