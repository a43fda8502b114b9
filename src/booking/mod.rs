//! Booking operations: patient registration, appointment creation, confirmation and queries.
//!
//! Everything here is written against [`RecordStore`] so the same rules hold for
//! every backend.

use chrono::Utc;

use crate::db::{AppointmentFilter, RecordStore};
use crate::errors::AppError;
use crate::models::{
    Appointment, ConfirmAppointmentRequest, CreateAppointmentRequest, Doctor, DoctorSummary,
    Patient, PatientSummary, RegisterPatientRequest,
};

/// Static doctor list.
pub fn list_doctors() -> Vec<DoctorSummary> {
    Doctor::catalog().iter().map(DoctorSummary::from).collect()
}

/// Full record of one catalog doctor.
pub fn get_doctor(id: i64) -> Result<Doctor, AppError> {
    Doctor::catalog()
        .into_iter()
        .find(|d| d.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", id)))
}

/// Register a new patient. The id must not already exist.
pub async fn register_patient(
    store: &dyn RecordStore,
    request: RegisterPatientRequest,
) -> Result<Patient, AppError> {
    require("id", &request.id)?;
    require("ad", &request.name)?;

    if store.get_patient(&request.id).await?.is_some() {
        return Err(AppError::Duplicate(format!(
            "Patient {} is already registered",
            request.id
        )));
    }

    let patient = request.into_patient(now());
    store.insert_patient(&patient).await?;

    tracing::info!(patient_id = %patient.id, "Patient registered");
    Ok(patient)
}

pub async fn list_patients(store: &dyn RecordStore) -> Result<Vec<PatientSummary>, AppError> {
    let patients = store.list_patients().await?;
    Ok(patients.iter().map(PatientSummary::from).collect())
}

pub async fn get_patient(store: &dyn RecordStore, id: &str) -> Result<Patient, AppError> {
    store
        .get_patient(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Patient {} not found", id)))
}

/// Book an appointment. No duplicate or double-booking check is made.
pub async fn create_appointment(
    store: &dyn RecordStore,
    request: CreateAppointmentRequest,
) -> Result<Appointment, AppError> {
    require("hasta_id", &request.patient_id)?;
    require("doktor_id", &request.doctor_id)?;
    require("tarih", &request.date)?;

    let appointment = store.insert_appointment(&request.into_new(now())).await?;

    tracing::info!(
        appointment_id = appointment.id,
        patient_id = %appointment.patient_id,
        doctor_id = %appointment.doctor_id,
        "Appointment created"
    );
    Ok(appointment)
}

pub async fn list_all_appointments(store: &dyn RecordStore) -> Result<Vec<Appointment>, AppError> {
    store.list_appointments().await
}

/// Appointments of one patient in store order. Unknown patients yield an empty list.
pub async fn list_appointments_for_patient(
    store: &dyn RecordStore,
    patient_id: &str,
) -> Result<Vec<Appointment>, AppError> {
    store
        .find_appointments(&AppointmentFilter::Patient(patient_id.to_string()))
        .await
}

/// Set the confirmation flag of the first appointment matching the request's triple.
///
/// Later matches, if any, are left untouched.
pub async fn confirm_or_update(
    store: &dyn RecordStore,
    request: &ConfirmAppointmentRequest,
) -> Result<Appointment, AppError> {
    let key = request.key();
    let matches = store
        .find_appointments(&AppointmentFilter::Key(key.clone()))
        .await?;

    let Some(first) = matches.first() else {
        return Err(AppError::NotFound(format!(
            "No appointment for doctor {}, patient {} on {}",
            key.doctor_id, key.patient_id, key.date
        )));
    };

    if matches.len() > 1 {
        tracing::warn!(
            matches = matches.len(),
            appointment_id = first.id,
            "Several appointments share the same doctor/patient/date; updating the first"
        );
    }

    set_confirmation_by_id(store, first.id, request.confirmed).await
}

/// Set the confirmation flag of one appointment by generated id.
pub async fn set_confirmation_by_id(
    store: &dyn RecordStore,
    id: i64,
    confirmed: bool,
) -> Result<Appointment, AppError> {
    let appointment = store
        .set_confirmation(id, confirmed)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;

    tracing::info!(appointment_id = id, confirmed, "Appointment confirmation updated");
    Ok(appointment)
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn now() -> String {
    Utc::now().to_rfc3339()
}
