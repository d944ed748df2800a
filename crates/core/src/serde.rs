//! Serde helper functions for request deserialization.
//!
//! Optional free-text fields arrive from forms and scripts as empty strings
//! just as often as they are omitted; both mean "no value".

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating blank strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
