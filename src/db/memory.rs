//! Process-local record store.
//!
//! Records live in insertion-ordered vectors; every lookup is a linear scan.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AppointmentFilter, RecordStore};
use crate::errors::AppError;
use crate::models::{Appointment, NewAppointment, Patient};

#[derive(Default)]
struct Tables {
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
    last_appointment_id: i64,
}

/// In-memory record store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_patient(&self, patient: &Patient) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        if tables.patients.iter().any(|p| p.id == patient.id) {
            return Err(AppError::Duplicate(format!(
                "Patient {} is already registered",
                patient.id
            )));
        }
        tables.patients.push(patient.clone());
        Ok(())
    }

    async fn get_patient(&self, id: &str) -> Result<Option<Patient>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.patients.iter().find(|p| p.id == id).cloned())
    }

    async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        Ok(self.tables.read().await.patients.clone())
    }

    async fn insert_appointment(&self, new: &NewAppointment) -> Result<Appointment, AppError> {
        let mut tables = self.tables.write().await;
        tables.last_appointment_id += 1;

        let appointment = Appointment {
            id: tables.last_appointment_id,
            patient_id: new.patient_id.clone(),
            doctor_id: new.doctor_id.clone(),
            date: new.date.clone(),
            note: new.note.clone(),
            confirmed: false,
            created_at: new.created_at.clone(),
        };
        tables.appointments.push(appointment.clone());

        Ok(appointment)
    }

    async fn get_appointment(&self, id: i64) -> Result<Option<Appointment>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.appointments.iter().find(|a| a.id == id).cloned())
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        Ok(self.tables.read().await.appointments.clone())
    }

    async fn find_appointments(
        &self,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .appointments
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }

    async fn set_confirmation(
        &self,
        id: i64,
        confirmed: bool,
    ) -> Result<Option<Appointment>, AppError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .map(|a| {
                a.confirmed = confirmed;
                a.clone()
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentKey;

    fn patient(id: &str, name: &str) -> Patient {
        Patient {
            id: id.into(),
            name: name.into(),
            surname: "Demir".into(),
            email: None,
            gender: None,
            birth_date: None,
            city: None,
            address: None,
            national_id: None,
            blood_type: None,
            medications: None,
            notes: None,
            photo: None,
            created_at: "2024-01-01T00:00:00+00:00".into(),
        }
    }

    fn new_appointment(patient: &str, doctor: &str, date: &str) -> NewAppointment {
        NewAppointment {
            patient_id: patient.into(),
            doctor_id: doctor.into(),
            date: date.into(),
            note: String::new(),
            created_at: "2024-01-01T00:00:00+00:00".into(),
        }
    }

    #[tokio::test]
    async fn test_appointment_ids_follow_insertion_order() {
        let store = MemoryStore::new();

        let first = store
            .insert_appointment(&new_appointment("p1", "d1", "2024-01-01"))
            .await
            .unwrap();
        let second = store
            .insert_appointment(&new_appointment("p2", "d1", "2024-01-01"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!first.confirmed);

        let all = store.list_appointments().await.unwrap();
        assert_eq!(all.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_find_by_patient_and_key() {
        let store = MemoryStore::new();
        store
            .insert_appointment(&new_appointment("p1", "d1", "2024-01-01"))
            .await
            .unwrap();
        store
            .insert_appointment(&new_appointment("p2", "d1", "2024-01-01"))
            .await
            .unwrap();
        store
            .insert_appointment(&new_appointment("p1", "d2", "2024-02-01"))
            .await
            .unwrap();

        let for_p1 = store
            .find_appointments(&AppointmentFilter::Patient("p1".into()))
            .await
            .unwrap();
        assert_eq!(for_p1.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);

        let by_key = store
            .find_appointments(&AppointmentFilter::Key(AppointmentKey {
                doctor_id: "d2".into(),
                patient_id: "p1".into(),
                date: "2024-02-01".into(),
            }))
            .await
            .unwrap();
        assert_eq!(by_key.len(), 1);
        assert_eq!(by_key[0].id, 3);
    }

    #[tokio::test]
    async fn test_set_confirmation_unknown_id() {
        let store = MemoryStore::new();
        assert!(store.set_confirmation(7, true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_patient_insert_rejected() {
        let store = MemoryStore::new();

        store.insert_patient(&patient("p1", "Ayşe")).await.unwrap();
        let err = store
            .insert_patient(&patient("p1", "Başka"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));

        let all = store.list_patients().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ayşe");
    }
}
