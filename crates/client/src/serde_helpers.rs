//! Serde helpers for SharePoint's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept the different spellings SharePoint and
//!   Microsoft Graph use for the same semantic type (Edm.Int64 as string or
//!   number, GUIDs with or without braces, ISO-8601 or legacy `/Date(ms)/`
//!   timestamps, collections as bare arrays or `{"results": [...]}`).
//! - Keep parsing behavior centralized so model definitions stay readable and
//!   consistent.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//! - Envelope unwrapping (see [`crate::odata`]).
//!
//! Invariants / assumptions:
//! - OData verbose payloads render 64-bit integers as `"123"` strings; the
//!   nometadata flavor renders them as numbers. Both must parse.
//! - These helpers must not log or print key material; errors stay generic.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use serde::de::Error as _;
use url::Url;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum I64OrString {
    I64(i64),
    U64(u64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    String(String),
}

/// Collections arrive either as a bare JSON array or wrapped in the
/// OData-verbose `{"results": [...]}` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArrayOrResults<T> {
    Plain(Vec<T>),
    Wrapped { results: Vec<T> },
}

pub fn i64_from_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = I64OrString::deserialize(deserializer)?;
    match value {
        I64OrString::I64(v) => Ok(v),
        I64OrString::U64(v) => i64::try_from(v).map_err(D::Error::custom),
        I64OrString::String(s) => s.parse::<i64>().map_err(D::Error::custom),
    }
}

#[allow(dead_code)]
pub fn opt_i64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<I64OrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(I64OrString::I64(v)) => Ok(Some(v)),
        Some(I64OrString::U64(v)) => Ok(Some(i64::try_from(v).map_err(D::Error::custom)?)),
        Some(I64OrString::String(s)) => Ok(Some(s.parse::<i64>().map_err(D::Error::custom)?)),
    }
}

pub fn opt_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<I64OrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(I64OrString::I64(v)) => u32::try_from(v).map(Some).map_err(D::Error::custom),
        Some(I64OrString::U64(v)) => u32::try_from(v).map(Some).map_err(D::Error::custom),
        Some(I64OrString::String(s)) => s.parse::<u32>().map(Some).map_err(D::Error::custom),
    }
}

pub fn bool_from_bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = BoolOrString::deserialize(deserializer)?;
    match value {
        BoolOrString::Bool(v) => Ok(v),
        BoolOrString::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(D::Error::custom(format!("invalid boolean string: {other}"))),
        },
    }
}

/// Parses a GUID, tolerating the brace-wrapped form SharePoint emits in
/// some payloads (`"{9a8b...}"`) alongside the bare form Graph uses.
pub fn parse_guid(raw: &str) -> Result<Uuid, uuid::Error> {
    Uuid::parse_str(raw.trim_start_matches('{').trim_end_matches('}'))
}

pub fn guid_from_string<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_guid(&raw).map_err(D::Error::custom)
}

pub fn guids_from_array_or_results<'de, D>(deserializer: D) -> Result<Vec<Uuid>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Vec<String> = vec_from_array_or_results(deserializer)?;
    raw.iter()
        .map(|s| parse_guid(s).map_err(D::Error::custom))
        .collect()
}

pub fn opt_url_from_string<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => Url::parse(&s).map(Some).map_err(D::Error::custom),
    }
}

/// Decodes standard base64; an absent or empty string maps to an empty key.
pub fn bytes_from_base64<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(Vec::new()),
        Some(s) if s.is_empty() => Ok(Vec::new()),
        Some(s) => BASE64.decode(s.as_bytes()).map_err(D::Error::custom),
    }
}

/// Parses the legacy WCF `/Date(1472132400000)/` form, including the variant
/// carrying a `+HHMM`/`-HHMM` suffix (the millisecond value is already UTC).
fn parse_msjson_date(raw: &str) -> Option<DateTime<Utc>> {
    let inner = raw.strip_prefix("/Date(")?.strip_suffix(")/")?;
    let millis_part = inner
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '+' || *c == '-')
        .map_or(inner, |(i, _)| &inner[..i]);
    let millis: i64 = millis_part.parse().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}

pub fn opt_datetime_from_iso_or_msjson<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw else { return Ok(None) };
    if raw.is_empty() {
        return Ok(None);
    }
    if let Some(parsed) = parse_msjson_date(&raw) {
        return Ok(Some(parsed));
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(D::Error::custom)
}

pub fn vec_from_array_or_results<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = ArrayOrResults::<T>::deserialize(deserializer)?;
    match value {
        ArrayOrResults::Plain(v) => Ok(v),
        ArrayOrResults::Wrapped { results } => Ok(results),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_from_string_or_number_accepts_number() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "i64_from_string_or_number")]
            value: i64,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": 42 }"#).unwrap();
        assert_eq!(parsed.value, 42);
    }

    #[test]
    fn test_i64_from_string_or_number_accepts_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "i64_from_string_or_number")]
            value: i64,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "9007199254740993" }"#).unwrap();
        assert_eq!(parsed.value, 9_007_199_254_740_993);
    }

    #[test]
    fn test_bool_from_bool_or_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "bool_from_bool_or_string")]
            value: bool,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": true }"#).unwrap();
        assert!(parsed.value);

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "True" }"#).unwrap();
        assert!(parsed.value);

        assert!(serde_json::from_str::<Wrapper>(r#"{ "value": "yes" }"#).is_err());
    }

    #[test]
    fn test_parse_guid_accepts_braced_and_bare() {
        let bare = "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d";
        let braced = format!("{{{bare}}}");
        assert_eq!(parse_guid(bare).unwrap(), parse_guid(&braced).unwrap());
    }

    #[test]
    fn test_bytes_from_base64_decodes_key() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "bytes_from_base64")]
            value: Vec<u8>,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "AQIDBA==" }"#).unwrap();
        assert_eq!(parsed.value, vec![1, 2, 3, 4]);

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "" }"#).unwrap();
        assert!(parsed.value.is_empty());

        let parsed: Wrapper = serde_json::from_str(r#"{}"#).unwrap();
        assert!(parsed.value.is_empty());
    }

    #[test]
    fn test_msjson_date_parsing() {
        let parsed = parse_msjson_date("/Date(1472132400000)/").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_472_132_400_000);

        let parsed = parse_msjson_date("/Date(1472132400000+0200)/").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_472_132_400_000);

        assert!(parse_msjson_date("not a date").is_none());
    }

    #[test]
    fn test_opt_datetime_accepts_iso_and_msjson() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "opt_datetime_from_iso_or_msjson")]
            value: Option<DateTime<Utc>>,
        }

        let parsed: Wrapper =
            serde_json::from_str(r#"{ "value": "2016-08-25T13:40:00Z" }"#).unwrap();
        assert_eq!(parsed.value.unwrap().timestamp(), 1_472_132_400);

        let parsed: Wrapper =
            serde_json::from_str(r#"{ "value": "/Date(1472132400000)/" }"#).unwrap();
        assert_eq!(parsed.value.unwrap().timestamp(), 1_472_132_400);

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": null }"#).unwrap();
        assert_eq!(parsed.value, None);
    }

    #[test]
    fn test_vec_from_array_or_results() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "vec_from_array_or_results")]
            value: Vec<String>,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": ["a", "b", "a"] }"#).unwrap();
        assert_eq!(parsed.value, vec!["a", "b", "a"]);

        let parsed: Wrapper =
            serde_json::from_str(r#"{ "value": { "results": ["a", "b"] } }"#).unwrap();
        assert_eq!(parsed.value, vec!["a", "b"]);
    }

    #[test]
    fn test_guids_from_array_or_results_tolerates_braces() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "guids_from_array_or_results")]
            value: Vec<Uuid>,
        }

        let json = r#"{ "value": { "results": [
            "{11111111-2222-3333-4444-555555555555}",
            "11111111-2222-3333-4444-555555555555"
        ] } }"#;
        let parsed: Wrapper = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.value[0], parsed.value[1]);
    }
}
