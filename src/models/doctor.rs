//! Doctor model and the static doctor catalog.

use serde::Serialize;

/// A doctor. Doctors are never created through the API.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Doctor {
    pub id: i64,
    #[serde(rename = "ad")]
    pub name: String,
    #[serde(rename = "uzmanlik")]
    pub specialty: String,
    #[serde(rename = "universite")]
    pub university: String,
    #[serde(rename = "sehir")]
    pub city: String,
    #[serde(rename = "profil_foto", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "olusturma_tarihi")]
    pub created_at: String,
}

/// Entry of the public doctor list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DoctorSummary {
    pub id: i64,
    #[serde(rename = "ad")]
    pub name: String,
}

impl From<&Doctor> for DoctorSummary {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name.clone(),
        }
    }
}

impl Doctor {
    /// The hardcoded doctor catalog.
    pub fn catalog() -> Vec<Doctor> {
        vec![
            Doctor {
                id: 1,
                name: "Dr. Ayşe".to_string(),
                specialty: "Kardiyoloji".to_string(),
                university: "Hacettepe Üniversitesi".to_string(),
                city: "Ankara".to_string(),
                photo: None,
                created_at: "2024-01-01T00:00:00+00:00".to_string(),
            },
            Doctor {
                id: 2,
                name: "Dr. Mehmet".to_string(),
                specialty: "Dahiliye".to_string(),
                university: "İstanbul Üniversitesi".to_string(),
                city: "İstanbul".to_string(),
                photo: None,
                created_at: "2024-01-01T00:00:00+00:00".to_string(),
            },
        ]
    }
}
