//! Deserializers for host field encodings.

use serde::{Deserialize, Deserializer, de};

/// "Check" fields arrive as `0`/`1` from the host and as booleans from JSON fixtures.
pub(crate) fn check<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Check {
        Bool(bool),
        Int(i64),
    }

    match Check::deserialize(deserializer)? {
        Check::Bool(b) => Ok(b),
        Check::Int(0) => Ok(false),
        Check::Int(1) => Ok(true),
        Check::Int(other) => Err(de::Error::custom(format!(
            "check field must be 0 or 1, got {other}"
        ))),
    }
}

/// Link fields may be absent, `null`, or `""`; all three mean "unset".
pub(crate) fn link<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()).map(T::from))
}
