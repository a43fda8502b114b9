//! REST API module.
//!
//! Contains all routes' handlers and the response bodies they return.

mod appointments;
mod doctors;
mod patients;
mod uploads;

pub use appointments::*;
pub use doctors::*;
pub use patients::*;
pub use uploads::*;

use axum::Json;
use serde::Serialize;

use crate::errors::AppError;

/// Handler result: a JSON body or an error envelope.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Service status message.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}

/// GET / - Service status.
pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "API aktif 🚀",
    })
}

/// GET /health - Liveness check.
pub async fn health_check() -> &'static str {
    "OK"
}
