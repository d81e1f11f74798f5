use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read-only view of the conversation a host framework hands to an action.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub slots: BTreeMap<String, Value>,
}

impl Tracker {
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self { sender_id: Some(sender_id.into()), slots: BTreeMap::new() }
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    /// Current slot value as text. Null, blank, list and object slots read as unset.
    pub fn get_slot(&self, name: &str) -> Option<String> {
        self.slots.get(name).and_then(slot_text)
    }
}

fn slot_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                return Some(integer.to_string());
            }
            if let Some(integer) = number.as_u64() {
                return Some(integer.to_string());
            }
            // slot engines often hand integers over as floats (`2.0`)
            number.as_f64().map(|float| {
                if float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
                    (float as i64).to_string()
                } else {
                    float.to_string()
                }
            })
        }
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
