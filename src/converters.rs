//! Serde helpers for the API's field encodings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parses a timestamp in either of the two textual formats the API emits.
///
/// The 2010 API uses RFC 2822 (`Mon, 16 Aug 2010 03:45:01 +0000`); the v1
/// products use RFC 3339 (`2016-08-16T03:45:01Z`).
///
/// # Examples
///
/// ```
/// use callwire::converters::parse_datetime;
///
/// let a = parse_datetime("Tue, 16 Aug 2016 03:45:01 +0000").unwrap();
/// let b = parse_datetime("2016-08-16T03:45:01Z").unwrap();
/// assert_eq!(a, b);
/// assert!(parse_datetime("yesterday").is_none());
/// ```
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Deserializes an optional timestamp field.
///
/// `null` and a missing field both yield `None`; a string in neither
/// accepted format is an error, which surfaces as a deserialization failure
/// of the whole resource.
pub fn optional_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => parse_datetime(value).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid timestamp `{}`", value))
        }),
    }
}

/// Deserializes an optional HTTP method field such as `status_callback_method`.
pub fn optional_method<'de, D>(deserializer: D) -> Result<Option<http::Method>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => http::Method::from_bytes(value.to_ascii_uppercase().as_bytes())
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid HTTP method `{}`", value))),
    }
}

/// Deserializes a collection field, treating `null` like a missing field.
///
/// `#[serde(default)]` only covers an absent key; the API also sends
/// explicit `null` for empty `links`, `tags` and similar fields.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
