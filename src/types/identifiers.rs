//! Identifier types for the reservation engine
//!
//! Rooms are keyed by the opaque document id handed out by the catalog
//! provider. Bookings receive a UUID-based reference once the submission sink
//! accepts them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Opaque, stable identifier of a room document in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Wrap a provider document id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Positional id used when a raw document carries no id of its own
    pub fn positional(index: usize) -> Self {
        Self(format!("room-{}", index + 1))
    }

    /// Borrow the raw id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Reference issued for a booking accepted by the submission sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingId(pub Uuid);

impl BookingId {
    /// Create a new random booking reference
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BKG_{}", self.0.simple())
    }
}

impl Serialize for BookingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("BKG_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for BookingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("BKG_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(BookingId(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_is_opaque() {
        let id = RoomId::new("deluxe-suite");
        assert_eq!(id.as_str(), "deluxe-suite");
        assert_eq!(id.to_string(), "deluxe-suite");
        assert_eq!(RoomId::from("deluxe-suite"), id);
    }

    #[test]
    fn test_positional_room_id_is_one_based() {
        assert_eq!(RoomId::positional(0).as_str(), "room-1");
        assert_eq!(RoomId::positional(4).as_str(), "room-5");
    }

    #[test]
    fn test_room_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&RoomId::new("heritage")).unwrap();
        assert_eq!(json, "\"heritage\"");
    }

    #[test]
    fn test_booking_id_uniqueness_and_prefix() {
        let a = BookingId::new();
        let b = BookingId::new();
        assert_ne!(a, b);
        assert!(a.to_string().starts_with("BKG_"));
    }

    #[test]
    fn test_booking_id_accepts_raw_uuid() {
        let id = BookingId::new();
        let raw = format!("\"{}\"", id.0);
        let parsed: BookingId = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, id);

        let prefixed = serde_json::to_string(&id).unwrap();
        let parsed: BookingId = serde_json::from_str(&prefixed).unwrap();
        assert_eq!(parsed, id);
    }
}
