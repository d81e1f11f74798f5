use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// A backend field that is only ever shown to the user, kept as the JSON it arrived as.
/// Strings print without quotes; numbers print in their JSON form (`42`, `3.0`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DisplayValue(Value);

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        Self(Value::from(value))
    }
}

impl From<i64> for DisplayValue {
    fn from(value: i64) -> Self {
        Self(Value::from(value))
    }
}
