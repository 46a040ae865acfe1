//! Raw room documents as delivered by the catalog provider
//!
//! Upstream documents are loosely typed: prices and sizes arrive as numbers or
//! strings, amenities may be missing or not a list at all. Every field is kept
//! as an untyped JSON value so that any object deserializes; interpretation is
//! deferred to the normalizer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untyped room record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRoomRecord {
    /// Display name
    pub name: Option<Value>,
    /// Nightly price, number or string, possibly already prefixed with "₹"
    pub price: Option<Value>,
    /// Room size, number or string, possibly already suffixed with "sq ft"
    pub size: Option<Value>,
    /// Free-text amenity labels
    pub amenities: Option<Value>,
    /// Single image URL
    pub image: Option<Value>,
    /// Image URLs for the carousel
    pub images: Option<Value>,
    /// Marketing description
    pub description: Option<Value>,
}

/// Raw record together with the provider's document id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRoomDocument {
    /// Document id, when the provider supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Record fields
    #[serde(flatten)]
    pub data: RawRoomRecord,
}

impl RawRoomDocument {
    /// Create a document with an explicit id
    pub fn new(id: impl Into<String>, data: RawRoomRecord) -> Self {
        Self { id: Some(Value::String(id.into())), data }
    }

    /// Document id as text, if it is a non-empty string or a number
    pub fn id_text(&self) -> Option<String> {
        self.id.as_ref().and_then(scalar_text).filter(|id| !id.is_empty())
    }
}

/// Render a scalar JSON value as display text
///
/// Strings are returned as-is and numbers/booleans in their JSON spelling,
/// except that a whole-valued float drops its fraction.
/// Null, arrays and objects have no scalar text.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match n.as_f64() {
            // Whole doubles print without a fraction: 2500.0 -> "2500"
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
