//! Local storage for uploaded files and the public links pointing at them.

use std::path::Path;

use axum::http::{header, HeaderMap};
use uuid::Uuid;

use crate::errors::AppError;

/// Path prefix uploaded files are served under.
pub const PUBLIC_PREFIX: &str = "/uploads";

const MAX_FILENAME_CHARS: usize = 100;

/// Reduce a client-supplied filename to a safe single path component.
pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .filter(|&c| c != '/' && c != '\\' && c != '\0')
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    // Path traversal
    let sanitized = sanitized.replace("..", "");
    let sanitized: String = sanitized.chars().take(MAX_FILENAME_CHARS).collect();

    if sanitized.is_empty() || sanitized == "." {
        "upload".into()
    } else {
        sanitized
    }
}

/// Write `bytes` into `dir` under a collision-free name and return that name.
pub async fn save_upload(dir: &Path, original_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    tokio::fs::create_dir_all(dir).await?;

    let stored_name = format!("{}_{}", Uuid::new_v4(), sanitize_filename(original_name));
    tokio::fs::write(dir.join(&stored_name), bytes).await?;

    Ok(stored_name)
}

/// Base URL for links: the configured one, else the request's `Host`.
///
/// `Host` is client-controlled, so the fallback must not be relied on behind
/// untrusted proxies. Set `RANDEVU_PUBLIC_BASE_URL` there.
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or("localhost");
    format!("http://{}", host)
}

pub fn public_url(base: &str, stored_name: &str) -> String {
    format!("{}{}/{}", base.trim_end_matches('/'), PUBLIC_PREFIX, stored_name)
}
