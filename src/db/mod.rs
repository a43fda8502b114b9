//! Record store for patients and appointments.
//!
//! Handlers only see [`RecordStore`]; the backing substrate is chosen at startup.

mod memory;
mod repository;

pub use memory::MemoryStore;
pub use repository::SqliteStore;

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::{Config, StoreBackend};
use crate::errors::AppError;
use crate::models::{Appointment, AppointmentKey, NewAppointment, Patient};

/// Equality filter over appointments.
#[derive(Debug, Clone)]
pub enum AppointmentFilter {
    Patient(String),
    Key(AppointmentKey),
}

impl AppointmentFilter {
    pub fn matches(&self, appointment: &Appointment) -> bool {
        match self {
            AppointmentFilter::Patient(patient_id) => &appointment.patient_id == patient_id,
            AppointmentFilter::Key(key) => key.matches(appointment),
        }
    }
}

/// Holder of all patient and appointment records.
///
/// Every listing is returned in store (insertion) order.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Append a patient. Fails with `Duplicate` if the id is taken.
    async fn insert_patient(&self, patient: &Patient) -> Result<(), AppError>;

    async fn get_patient(&self, id: &str) -> Result<Option<Patient>, AppError>;

    async fn list_patients(&self) -> Result<Vec<Patient>, AppError>;

    /// Append an appointment, assigning the next id. The flag starts unconfirmed.
    async fn insert_appointment(&self, new: &NewAppointment) -> Result<Appointment, AppError>;

    async fn get_appointment(&self, id: i64) -> Result<Option<Appointment>, AppError>;

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError>;

    async fn find_appointments(
        &self,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, AppError>;

    /// Overwrite the confirmation flag; `None` when the id is unknown.
    async fn set_confirmation(
        &self,
        id: i64,
        confirmed: bool,
    ) -> Result<Option<Appointment>, AppError>;
}

/// Open the store selected by the configuration.
pub async fn open_store(config: &Config) -> Result<Arc<dyn RecordStore>, sqlx::Error> {
    match config.store_backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreBackend::Sqlite => {
            let pool = init_database(&config.database_url).await?;
            Ok(Arc::new(SqliteStore::new(pool)))
        }
    }
}

/// Initialize the database connection pool and run migrations.
pub async fn init_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // Ensure the parent directory exists
    if let Some(parent) = options.get_filename().parent() {
        if parent != Path::new("") {
            tokio::fs::create_dir_all(parent).await.ok();
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS patients (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            surname TEXT NOT NULL,
            email TEXT,
            gender TEXT,
            birth_date TEXT,
            city TEXT,
            address TEXT,
            national_id TEXT,
            blood_type TEXT,
            medications TEXT,
            notes TEXT,
            photo TEXT,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            patient_id TEXT NOT NULL,
            doctor_id TEXT NOT NULL,
            date TEXT NOT NULL,
            note TEXT NOT NULL DEFAULT '',
            confirmed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_appointments_patient ON appointments(patient_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_triple ON appointments(doctor_id, patient_id, date);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
