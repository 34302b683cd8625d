use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::FetchError;
use crate::domain::ChartRecord;

/// Parse a response body and validate its `{ "data": [...] }` envelope.
pub fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &str) -> Result<Vec<T>, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|source| FetchError::Decode { endpoint, source })?;
    decode_value(endpoint, value)
}

/// Validate an already-parsed envelope.
///
/// A missing or non-array `data` is a schema error. Individual entries that
/// fail to deserialize are dropped and logged so one bad row does not blank
/// the whole table.
pub fn decode_value<T: DeserializeOwned>(
    endpoint: &'static str,
    value: Value,
) -> Result<Vec<T>, FetchError> {
    let Value::Object(mut envelope) = value else {
        return Err(FetchError::Schema {
            endpoint,
            reason: "response is not a JSON object".to_string(),
        });
    };

    let entries = match envelope.remove("data") {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(FetchError::Schema {
                endpoint,
                reason: format!("`data` is {}, expected an array", kind(&other)),
            })
        }
        None => {
            return Err(FetchError::Schema {
                endpoint,
                reason: "missing `data`".to_string(),
            })
        }
    };

    let total = entries.len();
    let records: Vec<T> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(endpoint, index, %error, "dropping malformed entry");
                None
            }
        })
        .collect();

    tracing::debug!(endpoint, total, kept = records.len(), "decoded response");
    Ok(records)
}

/// Chart records are expected in ascending date order; report when they are
/// not. Returns whether the order holds.
pub fn warn_if_unordered(records: &[ChartRecord]) -> bool {
    let ordered = records.windows(2).all(|pair| pair[0].date <= pair[1].date);
    if !ordered {
        tracing::warn!(count = records.len(), "chart records are not in ascending date order");
    }
    ordered
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
