//! Raw room record normalization
//!
//! Turns loosely-typed upstream records into canonical [`Room`] values. The
//! normalizer never fails: missing or malformed fields fall back to empty
//! defaults so the catalog renders partially instead of not at all.

use crate::catalog::raw::{scalar_text, RawRoomRecord};
use crate::catalog::room::{Amenity, Room};
use crate::types::RoomId;
use serde_json::Value;
use tracing::{debug, warn};

/// Currency glyph every display price starts with
pub const CURRENCY_GLYPH: char = '₹';

/// Unit suffix every display size ends with
pub const SIZE_UNIT: &str = "sq ft";

/// Stateless normalizer for raw catalog records
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomCatalogNormalizer;

impl RoomCatalogNormalizer {
    /// Create a normalizer
    pub fn new() -> Self {
        Self
    }

    /// Normalize one raw record into a canonical room
    pub fn normalize(&self, raw: &RawRoomRecord, id: RoomId) -> Room {
        let name = text_or_empty(raw.name.as_ref());
        if name.is_empty() {
            warn!(room_id = %id, "room record has no usable name");
        }

        let images = resolve_images(raw.images.as_ref(), raw.image.as_ref());
        let image = images.first().cloned().unwrap_or_default();

        let room = Room {
            price: format_price(raw.price.as_ref()),
            size: format_size(raw.size.as_ref()),
            image,
            images,
            description: text_or_empty(raw.description.as_ref()),
            amenities: map_amenities(raw.amenities.as_ref()),
            name,
            id,
        };

        debug!(
            room_id = %room.id,
            price = %room.price,
            images = room.images.len(),
            amenities = room.amenities.len(),
            "normalized room record"
        );
        room
    }
}

/// Normalize one raw record with the default normalizer
pub fn normalize(raw: &RawRoomRecord, id: RoomId) -> Room {
    RoomCatalogNormalizer::new().normalize(raw, id)
}

fn text_or_empty(value: Option<&Value>) -> String {
    value.and_then(scalar_text).unwrap_or_default()
}

/// Prefix the price with the currency glyph unless it already carries it
pub fn format_price(price: Option<&Value>) -> String {
    let text = text_or_empty(price);
    if text.starts_with(CURRENCY_GLYPH) {
        text
    } else {
        format!("{}{}", CURRENCY_GLYPH, text)
    }
}

/// Suffix the size with the unit unless it already mentions it
///
/// Absent or empty sizes stay absent. A unit already at the end of the value
/// is rewritten in canonical casing.
pub fn format_size(size: Option<&Value>) -> Option<String> {
    let text = size.and_then(scalar_text).filter(|s| !s.is_empty())?;

    if !text.to_lowercase().contains(SIZE_UNIT) {
        return Some(format!("{} {}", text, SIZE_UNIT));
    }

    let split = text.len().checked_sub(SIZE_UNIT.len()).filter(|&i| text.is_char_boundary(i));
    match split {
        Some(i) if text[i..].eq_ignore_ascii_case(SIZE_UNIT) => {
            Some(format!("{}{}", &text[..i], SIZE_UNIT))
        }
        _ => Some(text),
    }
}

/// Resolve the ordered image list
///
/// A non-empty `images` list wins; otherwise the single `image` URL, if any.
pub fn resolve_images(images: Option<&Value>, image: Option<&Value>) -> Vec<String> {
    let listed: Vec<String> = match images {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    if !listed.is_empty() {
        return listed;
    }

    match image.and_then(Value::as_str) {
        Some(url) if !url.is_empty() => vec![url.to_string()],
        _ => Vec::new(),
    }
}

/// Classify every amenity label; a non-list value counts as no amenities
///
/// Every list entry yields an amenity. Entries without scalar text get an
/// empty label (`null`) or their compact JSON text (lists and objects).
pub fn map_amenities(amenities: Option<&Value>) -> Vec<Amenity> {
    let Some(Value::Array(labels)) = amenities else {
        return Vec::new();
    };

    labels.iter().map(|label| Amenity::from_label(amenity_label(label))).collect()
}

fn amenity_label(label: &Value) -> String {
    scalar_text(label).unwrap_or_else(|| {
        debug!(?label, "amenity entry without a text label");
        match label {
            Value::Null => String::new(),
            other => other.to_string(),
        }
    })
}
