use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An application-defined record. Any JSON shape is accepted and kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(pub Value);

impl Event {
    /// Builds an event from a raw request body.
    ///
    /// An empty body becomes `{}`, a JSON body is kept verbatim, anything
    /// else is stored as a JSON string holding the body text.
    pub fn from_raw(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self(Value::Object(Default::default()));
        }
        match serde_json::from_slice(body) {
            Ok(value) => Self(value),
            Err(_) => Self(Value::String(String::from_utf8_lossy(body).into_owned())),
        }
    }
}

impl From<Value> for Event {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
