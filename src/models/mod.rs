//! Data models for the booking backend.
//!
//! Wire names follow the public Turkish contract (`hasta_id`, `onayli`, ...);
//! request bodies also accept the English field names.

mod appointment;
mod doctor;
mod patient;

pub use appointment::*;
pub use doctor::*;
pub use patient::*;

use serde::{Deserialize, Deserializer};

/// Accept an identifier given either as a JSON string or an integer.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}
