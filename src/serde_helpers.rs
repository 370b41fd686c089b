//! Serde helpers for decoding Sportmonks payloads.
//!
//! With the `tracing` feature enabled, decoding also reports fields the types do not model and
//! the JSON path at which decoding failed.

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Timestamp layout Sportmonks uses for `starting_at`, `last_played_at` and similar fields.
pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A `serde_as` type for `"2023-08-11 19:00:00"` style timestamps.
///
/// Use with `#[serde_as(as = "SportmonksDateTime")]` for `NaiveDateTime` fields
/// or `#[serde_as(as = "Option<SportmonksDateTime>")]` for optional ones.
pub(crate) struct SportmonksDateTime;

impl<'de> serde_with::DeserializeAs<'de, NaiveDateTime> for SportmonksDateTime {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: String = serde::Deserialize::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, DATE_TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

impl serde_with::SerializeAs<NaiveDateTime> for SportmonksDateTime {
    fn serialize_as<S>(source: &NaiveDateTime, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&source.format(DATE_TIME_FORMAT))
    }
}

/// Decodes a response body, logging unknown fields when `tracing` is enabled.
///
/// Malformed JSON and shape mismatches both surface as [`crate::error::Kind::Decode`].
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> crate::Result<T> {
    let value: Value = serde_json::from_slice(body)?;
    deserialize_with_warnings(value)
}

/// Deserialize JSON with unknown field warnings.
///
/// Unknown fields are logged at `warn` with their value and never fail decoding. On failure the
/// offending path and value are logged at `error` before the error is returned.
#[cfg(feature = "tracing")]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    let type_name = type_name::<T>();
    tracing::trace!(type_name = %type_name, json = %value, "decoding response");

    let mut unknown: Vec<String> = Vec::new();
    let decoded: std::result::Result<T, serde_json::Error> =
        serde_ignored::deserialize(&value, |path| unknown.push(path.to_string()));

    let decoded = match decoded {
        Ok(decoded) => decoded,
        Err(e) => {
            if let Err(located) = serde_path_to_error::deserialize::<_, T>(&value) {
                let path = located.path().to_string();
                tracing::error!(
                    type_name = %type_name,
                    path = %path,
                    value = %describe(value.pointer(&json_pointer(&path))),
                    error = %located.inner(),
                    "response decoding failed"
                );
            }
            return Err(e.into());
        }
    };

    for path in unknown {
        tracing::warn!(
            type_name = %type_name,
            field = %path,
            value = %describe(value.pointer(&json_pointer(&path))),
            "unknown field in API response"
        );
    }

    Ok(decoded)
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Converts a `serde_ignored` / `serde_path_to_error` path into an RFC 6901 JSON pointer.
///
/// `?` segments mark `Option` layers and have no JSON counterpart, so they are dropped:
/// `"data.?.participants[1].meta"` becomes `"/data/participants/1/meta"`.
#[cfg(any(feature = "tracing", test))]
fn json_pointer(path: &str) -> String {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty() && *segment != "?")
        .fold(String::new(), |mut pointer, segment| {
            pointer.push('/');
            pointer.push_str(&segment.replace('~', "~0").replace('/', "~1"));
            pointer
        })
}

#[cfg(feature = "tracing")]
fn describe(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}
