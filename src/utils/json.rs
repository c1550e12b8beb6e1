use mongodb::bson::{self, Bson};
use serde::Serialize;
use serde_json::Value;

use super::error::AppError;

/// Renders a stored document the way clients expect it: ObjectIds as hex
/// strings and dates as RFC 3339 strings instead of extended JSON wrappers.
pub fn to_client_json<T: Serialize>(value: &T) -> Result<Value, AppError> {
    let bson = bson::to_bson(value)?;
    Ok(bson_to_json(bson))
}

/// Same as [`to_client_json`] for a list of documents.
pub fn to_client_json_list<T: Serialize>(values: &[T]) -> Result<Value, AppError> {
    values
        .iter()
        .map(to_client_json)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        Bson::Document(doc) => Value::Object(
            doc.into_iter()
                .map(|(key, value)| (key, bson_to_json(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::Int32(n) => Value::from(n),
        Bson::Int64(n) => Value::from(n),
        other => other.into_relaxed_extjson(),
    }
}
