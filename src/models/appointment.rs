//! Appointment model and the request types that create or confirm appointments.

use serde::{Deserialize, Serialize};

use super::id_string;

/// A booked appointment.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Appointment {
    /// Store-generated, increasing in store order
    pub id: i64,
    #[serde(rename = "hasta_id")]
    pub patient_id: String,
    #[serde(rename = "doktor_id")]
    pub doctor_id: String,
    /// Free-form; never parsed as a date
    #[serde(rename = "tarih")]
    pub date: String,
    #[serde(rename = "not")]
    pub note: String,
    #[serde(rename = "onayli")]
    pub confirmed: bool,
    #[serde(rename = "olusturma_tarihi")]
    pub created_at: String,
}

/// The (doctor, patient, date) triple that identifies an appointment for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentKey {
    pub doctor_id: String,
    pub patient_id: String,
    pub date: String,
}

impl AppointmentKey {
    /// Exact, case-sensitive comparison; no normalization.
    pub fn matches(&self, appointment: &Appointment) -> bool {
        appointment.doctor_id == self.doctor_id
            && appointment.patient_id == self.patient_id
            && appointment.date == self.date
    }
}

/// An appointment ready to be appended to the store.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: String,
    pub doctor_id: String,
    pub date: String,
    pub note: String,
    pub created_at: String,
}

/// Request body for booking an appointment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointmentRequest {
    #[serde(rename = "hasta_id", alias = "patient_id", deserialize_with = "id_string")]
    pub patient_id: String,
    #[serde(rename = "doktor_id", alias = "doctor_id", deserialize_with = "id_string")]
    pub doctor_id: String,
    #[serde(rename = "tarih", alias = "date")]
    pub date: String,
    #[serde(rename = "not", alias = "note", default)]
    pub note: String,
}

impl CreateAppointmentRequest {
    pub fn into_new(self, created_at: String) -> NewAppointment {
        NewAppointment {
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            date: self.date,
            note: self.note,
            created_at,
        }
    }
}

/// Request body for confirming (or un-confirming) the appointment matching a triple.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmAppointmentRequest {
    #[serde(rename = "doktor_id", alias = "doctor_id", deserialize_with = "id_string")]
    pub doctor_id: String,
    #[serde(rename = "hasta_id", alias = "patient_id", deserialize_with = "id_string")]
    pub patient_id: String,
    #[serde(rename = "tarih", alias = "date")]
    pub date: String,
    /// Omitted means confirm
    #[serde(rename = "onayli", alias = "confirmed", default = "default_confirmed")]
    pub confirmed: bool,
}

impl ConfirmAppointmentRequest {
    pub fn key(&self) -> AppointmentKey {
        AppointmentKey {
            doctor_id: self.doctor_id.clone(),
            patient_id: self.patient_id.clone(),
            date: self.date.clone(),
        }
    }
}

/// Request body for setting the confirmation flag of one appointment by id.
#[derive(Debug, Clone, Deserialize)]
pub struct SetConfirmationRequest {
    #[serde(rename = "onayli", alias = "confirmed", default = "default_confirmed")]
    pub confirmed: bool,
}

fn default_confirmed() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn appointment(doctor: &str, patient: &str, date: &str) -> Appointment {
        Appointment {
            id: 1,
            patient_id: patient.into(),
            doctor_id: doctor.into(),
            date: date.into(),
            note: String::new(),
            confirmed: false,
            created_at: "2024-01-01T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn test_key_matching_is_exact() {
        let key = AppointmentKey {
            doctor_id: "d1".into(),
            patient_id: "p1".into(),
            date: "2024-01-01".into(),
        };

        assert!(key.matches(&appointment("d1", "p1", "2024-01-01")));
        assert!(!key.matches(&appointment("D1", "p1", "2024-01-01")));
        assert!(!key.matches(&appointment("d1", "p1", "2024-01-01 ")));
        assert!(!key.matches(&appointment("d1", "p1", "01.01.2024")));
    }

    #[test]
    fn test_confirm_request_defaults_to_confirm() {
        let request: ConfirmAppointmentRequest = serde_json::from_value(json!({
            "doctor_id": 1, "patient_id": "p1", "date": "2024-01-01"
        }))
        .unwrap();

        assert!(request.confirmed);
        assert_eq!(request.doctor_id, "1");
    }

    #[test]
    fn test_create_request_accepts_english_names() {
        let request: CreateAppointmentRequest = serde_json::from_value(json!({
            "patient_id": "p1", "doctor_id": "d1", "date": "2024-01-01", "note": "x"
        }))
        .unwrap();

        assert_eq!(request.patient_id, "p1");
        assert_eq!(request.note, "x");
    }
}
