//! Patient model.

use serde::{Deserialize, Serialize};

use super::id_string;

/// A registered patient. `id` is supplied by the client and unique.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Patient {
    pub id: String,
    #[serde(rename = "ad")]
    pub name: String,
    #[serde(rename = "soyad")]
    pub surname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "cinsiyet", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "dogum_tarihi", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(rename = "sehir", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "adres", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "tc_kimlik_no", skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    #[serde(rename = "kan_grubu", skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(rename = "ilaclar", skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(rename = "notlar", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "profil_foto", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "olusturma_tarihi")]
    pub created_at: String,
}

/// Short form used by the patient list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PatientSummary {
    pub id: String,
    #[serde(rename = "ad")]
    pub name: String,
    #[serde(rename = "soyad")]
    pub surname: String,
    #[serde(rename = "sehir", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl From<&Patient> for PatientSummary {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.clone(),
            name: patient.name.clone(),
            surname: patient.surname.clone(),
            city: patient.city.clone(),
        }
    }
}

/// Request body for registering a patient.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterPatientRequest {
    #[serde(alias = "hasta_id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "ad", alias = "name")]
    pub name: String,
    #[serde(rename = "soyad", alias = "surname", default)]
    pub surname: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "cinsiyet", alias = "gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "dogum_tarihi", alias = "birth_date", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "sehir", alias = "city", default)]
    pub city: Option<String>,
    #[serde(rename = "adres", alias = "address", default)]
    pub address: Option<String>,
    #[serde(rename = "tc_kimlik_no", alias = "national_id", default)]
    pub national_id: Option<String>,
    #[serde(rename = "kan_grubu", alias = "blood_type", default)]
    pub blood_type: Option<String>,
    #[serde(rename = "ilaclar", alias = "medications", default)]
    pub medications: Option<String>,
    #[serde(rename = "notlar", alias = "notes", default)]
    pub notes: Option<String>,
    #[serde(rename = "profil_foto", alias = "photo", default)]
    pub photo: Option<String>,
}

impl RegisterPatientRequest {
    /// Build the stored record, stamped with `created_at`.
    pub fn into_patient(self, created_at: String) -> Patient {
        Patient {
            id: self.id,
            name: self.name,
            surname: self.surname,
            email: self.email,
            gender: self.gender,
            birth_date: self.birth_date,
            city: self.city,
            address: self.address,
            national_id: self.national_id,
            blood_type: self.blood_type,
            medications: self.medications,
            notes: self.notes,
            photo: self.photo,
            created_at,
        }
    }
}
