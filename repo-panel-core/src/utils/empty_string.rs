//! Optional-string serialization helpers.
//!
//! The backend encodes "absent" text fields as empty strings rather than `null`.
//! - Serialization: `None` -> `""`
//! - Deserialization: `""`, whitespace-only or `null` -> `None`

use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `Option<String>` as the string itself or `""`.
#[allow(clippy::ref_option)]
pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

/// Deserializes `Option<String>`, folding blank strings into `None`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
