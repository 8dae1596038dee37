use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const FIRST_NAME_KEY: &str = "FirstName";
pub const LAST_NAME_KEY: &str = "LastName";
pub const HEADLINE_KEY: &str = "Headline";

/// A primitive value attached to a profile under an arbitrary key.
///
/// Backends are expected to send strings, numbers, booleans or null. Nested
/// arrays and objects are kept verbatim instead of failing the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Nested(serde_json::Value),
}

impl FieldValue {
    /// Value usable for a named slot such as `FirstName`. Null, `false` and
    /// zero read as absent so the card shows its placeholder.
    fn into_slot(self) -> Option<String> {
        match self {
            FieldValue::Null | FieldValue::Bool(false) => None,
            FieldValue::Number(number) if number.as_f64() == Some(0.0) => None,
            FieldValue::Text(text) => Some(text),
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(value) => write!(f, "{value}"),
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Nested(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

/// One profile returned by the search backend.
///
/// The three well-known fields are lifted out of the JSON object; every other
/// key lands in `extra` in the order the backend sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, FieldValue>",
    into = "IndexMap<String, FieldValue>"
)]
pub struct ProfileRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub headline: Option<String>,
    pub extra: IndexMap<String, FieldValue>,
}

impl ProfileRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn with_headline(mut self, value: impl Into<String>) -> Self {
        self.headline = Some(value.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl From<IndexMap<String, FieldValue>> for ProfileRecord {
    fn from(mut fields: IndexMap<String, FieldValue>) -> Self {
        let first_name = fields.shift_remove(FIRST_NAME_KEY).and_then(FieldValue::into_slot);
        let last_name = fields.shift_remove(LAST_NAME_KEY).and_then(FieldValue::into_slot);
        let headline = fields.shift_remove(HEADLINE_KEY).and_then(FieldValue::into_slot);
        Self {
            first_name,
            last_name,
            headline,
            extra: fields,
        }
    }
}

impl From<ProfileRecord> for IndexMap<String, FieldValue> {
    fn from(record: ProfileRecord) -> Self {
        let mut fields = IndexMap::with_capacity(record.extra.len() + 3);
        let named = [
            (FIRST_NAME_KEY, record.first_name),
            (LAST_NAME_KEY, record.last_name),
            (HEADLINE_KEY, record.headline),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                fields.insert(key.to_string(), FieldValue::Text(value));
            }
        }
        fields.extend(record.extra);
        fields
    }
}
