//! SQLite-backed record store.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use super::{AppointmentFilter, RecordStore};
use crate::errors::AppError;
use crate::models::{Appointment, NewAppointment, Patient};

const PATIENT_COLUMNS: &str = "id, name, surname, email, gender, birth_date, city, address, \
     national_id, blood_type, medications, notes, photo, created_at";

const APPOINTMENT_COLUMNS: &str =
    "id, patient_id, doctor_id, date, note, confirmed, created_at";

/// Relational record store. Equality filters are pushed down into SQL.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn insert_patient(&self, patient: &Patient) -> Result<(), AppError> {
        let result = sqlx::query(
            "INSERT INTO patients (id, name, surname, email, gender, birth_date, city, address, national_id, blood_type, medications, notes, photo, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&patient.id)
        .bind(&patient.name)
        .bind(&patient.surname)
        .bind(&patient.email)
        .bind(&patient.gender)
        .bind(&patient.birth_date)
        .bind(&patient.city)
        .bind(&patient.address)
        .bind(&patient.national_id)
        .bind(&patient.blood_type)
        .bind(&patient.medications)
        .bind(&patient.notes)
        .bind(&patient.photo)
        .bind(&patient.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(
                AppError::Duplicate(format!("Patient {} is already registered", patient.id)),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn get_patient(&self, id: &str) -> Result<Option<Patient>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM patients WHERE id = ?",
            PATIENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(patient_from_row))
    }

    async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM patients ORDER BY rowid",
            PATIENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(patient_from_row).collect())
    }

    async fn insert_appointment(&self, new: &NewAppointment) -> Result<Appointment, AppError> {
        let result = sqlx::query(
            "INSERT INTO appointments (patient_id, doctor_id, date, note, confirmed, created_at) VALUES (?, ?, ?, ?, 0, ?)"
        )
        .bind(&new.patient_id)
        .bind(&new.doctor_id)
        .bind(&new.date)
        .bind(&new.note)
        .bind(&new.created_at)
        .execute(&self.pool)
        .await?;

        Ok(Appointment {
            id: result.last_insert_rowid(),
            patient_id: new.patient_id.clone(),
            doctor_id: new.doctor_id.clone(),
            date: new.date.clone(),
            note: new.note.clone(),
            confirmed: false,
            created_at: new.created_at.clone(),
        })
    }

    async fn get_appointment(&self, id: i64) -> Result<Option<Appointment>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM appointments WHERE id = ?",
            APPOINTMENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(appointment_from_row))
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM appointments ORDER BY id",
            APPOINTMENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(appointment_from_row).collect())
    }

    async fn find_appointments(
        &self,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, AppError> {
        let rows = match filter {
            AppointmentFilter::Patient(patient_id) => {
                sqlx::query(&format!(
                    "SELECT {} FROM appointments WHERE patient_id = ? ORDER BY id",
                    APPOINTMENT_COLUMNS
                ))
                .bind(patient_id)
                .fetch_all(&self.pool)
                .await?
            }
            AppointmentFilter::Key(key) => {
                sqlx::query(&format!(
                    "SELECT {} FROM appointments WHERE doctor_id = ? AND patient_id = ? AND date = ? ORDER BY id",
                    APPOINTMENT_COLUMNS
                ))
                .bind(&key.doctor_id)
                .bind(&key.patient_id)
                .bind(&key.date)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.iter().map(appointment_from_row).collect())
    }

    async fn set_confirmation(
        &self,
        id: i64,
        confirmed: bool,
    ) -> Result<Option<Appointment>, AppError> {
        let result = sqlx::query("UPDATE appointments SET confirmed = ? WHERE id = ?")
            .bind(confirmed as i32)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_appointment(id).await
    }
}

// Helper functions for row conversion

fn patient_from_row(row: &sqlx::sqlite::SqliteRow) -> Patient {
    Patient {
        id: row.get("id"),
        name: row.get("name"),
        surname: row.get("surname"),
        email: row.get("email"),
        gender: row.get("gender"),
        birth_date: row.get("birth_date"),
        city: row.get("city"),
        address: row.get("address"),
        national_id: row.get("national_id"),
        blood_type: row.get("blood_type"),
        medications: row.get("medications"),
        notes: row.get("notes"),
        photo: row.get("photo"),
        created_at: row.get("created_at"),
    }
}

fn appointment_from_row(row: &sqlx::sqlite::SqliteRow) -> Appointment {
    let confirmed: i32 = row.get("confirmed");
    Appointment {
        id: row.get("id"),
        patient_id: row.get("patient_id"),
        doctor_id: row.get("doctor_id"),
        date: row.get("date"),
        note: row.get("note"),
        confirmed: confirmed != 0,
        created_at: row.get("created_at"),
    }
}
