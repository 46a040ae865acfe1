//! Canonical, display-ready room records

use crate::types::{AmenityCategory, RoomId};
use serde::{Deserialize, Serialize};

/// Number of amenities shown on a room card
pub const FEATURED_AMENITY_COUNT: usize = 3;

/// A labelled amenity with its presentation category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    /// Category selecting the icon
    pub category: AmenityCategory,
    /// Label exactly as provided upstream
    pub label: String,
}

impl Amenity {
    /// Classify a label into an amenity
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self { category: AmenityCategory::classify(&label), label }
    }
}

/// Normalized room, immutable once produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Provider document id
    pub id: RoomId,
    /// Display name
    pub name: String,
    /// Nightly price, always starting with "₹"
    pub price: String,
    /// Size ending with "sq ft", absent when the upstream record had none
    pub size: Option<String>,
    /// Primary image URL; the first of `images`, or empty
    pub image: String,
    /// Carousel image URLs
    pub images: Vec<String>,
    /// Marketing description
    pub description: String,
    /// Amenities in upstream order
    pub amenities: Vec<Amenity>,
}

impl Room {
    /// Amenities previewed on the room card
    pub fn featured_amenities(&self) -> &[Amenity] {
        let count = self.amenities.len().min(FEATURED_AMENITY_COUNT);
        &self.amenities[..count]
    }

    /// Whether any image is available
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Amenities of a given category
    pub fn amenities_in(&self, category: AmenityCategory) -> impl Iterator<Item = &Amenity> {
        self.amenities.iter().filter(move |amenity| amenity.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_with_amenities(labels: &[&str]) -> Room {
        Room {
            id: RoomId::new("test"),
            name: "Test Room".to_string(),
            price: "₹1000".to_string(),
            size: None,
            image: String::new(),
            images: Vec::new(),
            description: String::new(),
            amenities: labels.iter().map(|label| Amenity::from_label(*label)).collect(),
        }
    }

    #[test]
    fn test_featured_amenities_capped_at_three() {
        let room = room_with_amenities(&["Free WiFi", "Smart TV", "Mini Bar", "AC", "Balcony"]);
        let featured: Vec<&str> =
            room.featured_amenities().iter().map(|a| a.label.as_str()).collect();
        assert_eq!(featured, vec!["Free WiFi", "Smart TV", "Mini Bar"]);

        let room = room_with_amenities(&["Free WiFi"]);
        assert_eq!(room.featured_amenities().len(), 1);

        let room = room_with_amenities(&[]);
        assert!(room.featured_amenities().is_empty());
    }

    #[test]
    fn test_amenities_in_category() {
        let room = room_with_amenities(&["Mini Bar", "King Bed", "Coffee Maker"]);
        assert_eq!(room.amenities_in(AmenityCategory::Beverage).count(), 2);
        assert_eq!(room.amenities_in(AmenityCategory::Generic).count(), 1);
        assert_eq!(room.amenities_in(AmenityCategory::Wifi).count(), 0);
        assert!(!room.has_image());
    }
}
