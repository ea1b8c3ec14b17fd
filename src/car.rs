//! The car record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One car in the inventory.
///
/// Every field is a string, including the numeric-looking ones, and
/// serializes in declaration order. Keys missing from an incoming body
/// decode to the empty string; unknown keys are ignored. Key matching is
/// exact: `"Make"` is an unknown key, not `make`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Car {
    pub id: String,
    pub make: String,
    pub model: String,
    pub package_level: String,
    pub color: String,
    pub year: String,
    pub category: String,
    pub mileage: String,
    pub price: String,
}

impl Car {
    /// Decodes the first JSON value in `body`. Bytes after it are not read.
    ///
    /// A repeated key keeps its last value and `null` is an empty car.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<Value>();
        let value = match stream.next() {
            Some(value) => value?,
            None => Value::deserialize(&mut serde_json::Deserializer::from_slice(body))?,
        };
        match value {
            Value::Null => Ok(Self::default()),
            value @ Value::Object(_) => Self::deserialize(value),
            other => Err(serde::de::Error::custom(format_args!(
                "expected a car object, found {other}"
            ))),
        }
    }
}
