//! Doctor API endpoints.

use axum::{extract::Path, Json};

use super::ApiResult;
use crate::booking;
use crate::models::{Doctor, DoctorSummary};

/// GET /doktorlar - List the doctor catalog.
pub async fn list_doctors() -> Json<Vec<DoctorSummary>> {
    Json(booking::list_doctors())
}

/// GET /doktorlar/{id} - Get one doctor's full record.
pub async fn get_doctor(Path(id): Path<i64>) -> ApiResult<Doctor> {
    booking::get_doctor(id).map(Json)
}
