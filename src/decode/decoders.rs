//! Parser constructors

use super::types::Parser;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;

/// Parser backed by the type's serde `Deserialize` impl
///
/// A payload missing a required field fails as a whole.
pub fn json<T>() -> Parser<T>
where
    T: DeserializeOwned + 'static,
{
    Parser::new(|value: &JsonValue| {
        T::deserialize(value).map_err(|e| Error::decode(e.to_string()))
    })
}

/// Parser from a plain function over the payload
pub fn with<T>(f: fn(&JsonValue) -> Result<T>) -> Parser<T>
where
    T: 'static,
{
    Parser::new(f)
}

/// Parser for a JSON array, applying `item` to every element
///
/// All-or-nothing: one failing element fails the whole array.
pub fn items<T>(item: Parser<T>) -> Parser<Vec<T>>
where
    T: 'static,
{
    Parser::new(move |value: &JsonValue| {
        let array = value
            .as_array()
            .ok_or_else(|| Error::decode(format!("expected an array, got {}", kind_of(value))))?;

        array
            .iter()
            .enumerate()
            .map(|(index, element)| {
                item.parse(element).map_err(|e| match e {
                    Error::Decode { message } => Error::decode(format!("item {index}: {message}")),
                    other => other,
                })
            })
            .collect()
    })
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
