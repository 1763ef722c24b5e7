//! OData envelope unwrapping for SharePoint REST responses.
//!
//! Depending on the `odata` metadata level negotiated by the caller,
//! SharePoint wraps the same payload three different ways:
//! - verbose: `{"d": {...}}`, collections under `{"d": {"results": [...]}}`
//! - minimal/no metadata: collections under `{"value": [...]}`
//! - bare object or array (some Graph endpoints)
//!
//! The functions here normalize all three into typed models so the model
//! definitions never have to know which flavor produced them.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{ClientError, Result};

/// Deserializes a single entity from a response body, unwrapping the
/// verbose `d` envelope when present.
pub fn from_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    trace!(bytes = body.len(), "parsing response body");
    let value: Value = serde_json::from_str(body)?;
    Ok(serde_json::from_value(unwrap_verbose(value))?)
}

/// Deserializes a collection from a response body, accepting a bare array,
/// a `value` array, or a verbose `d.results` array.
pub fn collection_from_response<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    trace!(bytes = body.len(), "parsing collection response body");
    let value: Value = serde_json::from_str(body)?;
    let payload = unwrap_verbose(value);
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let inner = map
                .remove("results")
                .or_else(|| map.remove("value"))
                .ok_or_else(|| {
                    ClientError::InvalidResponse(
                        "expected a `results` or `value` collection".to_string(),
                    )
                })?;
            match inner {
                Value::Array(items) => items,
                other => {
                    return Err(ClientError::InvalidResponse(format!(
                        "collection field holds {} instead of an array",
                        json_kind(&other)
                    )));
                }
            }
        }
        other => {
            return Err(ClientError::InvalidResponse(format!(
                "expected a collection, got {}",
                json_kind(&other)
            )));
        }
    };
    debug!(items = items.len(), "extracted collection payload");
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ClientError::from))
        .collect()
}

fn unwrap_verbose(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("d") => {
            debug!("unwrapping verbose OData envelope");
            map.remove("d").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
