//! Appointment API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::ApiResult;
use crate::booking;
use crate::models::{
    Appointment, ConfirmAppointmentRequest, CreateAppointmentRequest, SetConfirmationRequest,
};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AppointmentList {
    pub randevu_sayisi: usize,
    pub randevular: Vec<Appointment>,
}

#[derive(Debug, Serialize)]
pub struct PatientAppointments {
    pub hasta_id: String,
    pub randevu_sayisi: usize,
    pub randevular: Vec<Appointment>,
}

/// Response to a confirmation update.
#[derive(Debug, Serialize)]
pub struct AppointmentUpdated {
    pub success: bool,
    pub randevu: Appointment,
}

/// POST /randevular - Book an appointment.
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> ApiResult<Appointment> {
    booking::create_appointment(state.store.as_ref(), request)
        .await
        .map(Json)
}

/// GET /randevular - List all appointments.
pub async fn list_appointments(State(state): State<AppState>) -> ApiResult<AppointmentList> {
    let randevular = booking::list_all_appointments(state.store.as_ref()).await?;

    Ok(Json(AppointmentList {
        randevu_sayisi: randevular.len(),
        randevular,
    }))
}

/// Literal segment of the confirmation route, also a valid patient id.
pub const CONFIRM_SEGMENT: &str = "onayla";

/// GET /randevular/{hasta_id} - List one patient's appointments.
pub async fn list_patient_appointments(
    State(state): State<AppState>,
    Path(hasta_id): Path<String>,
) -> ApiResult<PatientAppointments> {
    patient_appointments(&state, hasta_id).await
}

/// GET /randevular/onayla - The static confirmation route shadows `{hasta_id}`
/// for this one id, so listing is served here too.
pub async fn list_confirm_segment_appointments(
    State(state): State<AppState>,
) -> ApiResult<PatientAppointments> {
    patient_appointments(&state, CONFIRM_SEGMENT.to_string()).await
}

async fn patient_appointments(
    state: &AppState,
    hasta_id: String,
) -> ApiResult<PatientAppointments> {
    let randevular = booking::list_appointments_for_patient(state.store.as_ref(), &hasta_id).await?;

    Ok(Json(PatientAppointments {
        hasta_id,
        randevu_sayisi: randevular.len(),
        randevular,
    }))
}

/// PATCH /randevular, PATCH /randevular/onayla - Update the appointment matching a triple.
pub async fn confirm_appointment(
    State(state): State<AppState>,
    Json(request): Json<ConfirmAppointmentRequest>,
) -> ApiResult<AppointmentUpdated> {
    let randevu = booking::confirm_or_update(state.store.as_ref(), &request).await?;

    Ok(Json(AppointmentUpdated {
        success: true,
        randevu,
    }))
}

/// PATCH /randevular/id/{id} - Update one appointment by id.
pub async fn set_appointment_confirmation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<SetConfirmationRequest>,
) -> ApiResult<AppointmentUpdated> {
    let randevu =
        booking::set_confirmation_by_id(state.store.as_ref(), id, request.confirmed).await?;

    Ok(Json(AppointmentUpdated {
        success: true,
        randevu,
    }))
}
