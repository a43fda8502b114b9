//! Patient API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::ApiResult;
use crate::booking;
use crate::models::{Patient, PatientSummary, RegisterPatientRequest};
use crate::AppState;

/// Response to a successful registration.
#[derive(Debug, Serialize)]
pub struct PatientRegistered {
    pub success: bool,
    pub hasta_id: String,
}

#[derive(Debug, Serialize)]
pub struct PatientList {
    pub hasta_sayisi: usize,
    pub hastalar: Vec<PatientSummary>,
}

/// POST /hastalar, POST /hasta_kayit - Register a patient.
pub async fn register_patient(
    State(state): State<AppState>,
    Json(request): Json<RegisterPatientRequest>,
) -> ApiResult<PatientRegistered> {
    let patient = booking::register_patient(state.store.as_ref(), request).await?;

    Ok(Json(PatientRegistered {
        success: true,
        hasta_id: patient.id,
    }))
}

/// GET /hastalar - List patients.
pub async fn list_patients(State(state): State<AppState>) -> ApiResult<PatientList> {
    let hastalar = booking::list_patients(state.store.as_ref()).await?;

    Ok(Json(PatientList {
        hasta_sayisi: hastalar.len(),
        hastalar,
    }))
}

/// GET /hastalar/{id} - Get one patient.
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Patient> {
    booking::get_patient(state.store.as_ref(), &id)
        .await
        .map(Json)
}
