// src/shared/api/fields.rs
use serde::{Deserialize, Deserializer, Serializer};

//
// ──────────────────────────────────────────────────────────
// Wire-field normalization
// ──────────────────────────────────────────────────────────
// The portfolio API carries absent optional fields as `""`. In memory
// they are `Option<String>`; on the wire the key is always present so
// a `""` can clear a previously stored value (the server merges keys
// it receives and keeps the ones it doesn't).
//

pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

pub fn none_as_empty_string<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(v),
        None => serializer.serialize_str(""),
    }
}
