//! Tests for raw room record normalization

use serde_json::{json, Value};
use shyam_heritage_booking::*;

fn raw(value: Value) -> RawRoomRecord {
    serde_json::from_value(value).unwrap()
}

/// Numeric price/size, two amenities and a single image
#[test]
fn test_numeric_record_normalization() {
    let room = normalize(
        &raw(json!({
            "name": "Heritage Room",
            "price": 2500,
            "size": 350,
            "amenities": ["Free WiFi", "Mini Bar"],
            "image": "a.jpg"
        })),
        RoomId::new("heritage"),
    );

    assert_eq!(room.price, "₹2500");
    assert_eq!(room.size.as_deref(), Some("350 sq ft"));
    assert_eq!(room.images, vec!["a.jpg".to_string()]);
    assert_eq!(room.image, "a.jpg");
    assert_eq!(room.amenities.len(), 2);
    assert_eq!(room.amenities[0].category, AmenityCategory::Wifi);
    assert_eq!(room.amenities[0].label, "Free WiFi");
    assert_eq!(room.amenities[1].category, AmenityCategory::Beverage);
    assert_eq!(room.amenities[1].label, "Mini Bar");
}

/// Already-formatted values are not prefixed or suffixed twice
#[test]
fn test_preformatted_values_are_unchanged() {
    let room = normalize(
        &raw(json!({"name": "Suite", "price": "₹6,000", "size": "600 sq ft"})),
        RoomId::new("suite"),
    );
    assert_eq!(room.price, "₹6,000");
    assert_eq!(room.size.as_deref(), Some("600 sq ft"));

    // Normalizing the normalized output again changes nothing
    let again = normalize(
        &raw(json!({"price": room.price.clone(), "size": room.size.clone()})),
        RoomId::new("suite"),
    );
    assert_eq!(again.price, room.price);
    assert_eq!(again.size, room.size);
}

/// Document stores often hand back whole prices as doubles
#[test]
fn test_whole_float_values_print_without_fraction() {
    let room: Room = normalize(
        &serde_json::from_str(r#"{"price": 2500.0, "size": 350.0}"#).unwrap(),
        RoomId::new("r"),
    );
    assert_eq!(room.price, "₹2500");
    assert_eq!(room.size.as_deref(), Some("350 sq ft"));

    let room = normalize(&raw(json!({"price": 2499.5, "size": 180.25})), RoomId::new("r"));
    assert_eq!(room.price, "₹2499.5");
    assert_eq!(room.size.as_deref(), Some("180.25 sq ft"));
}

#[test]
fn test_size_unit_check_is_case_insensitive() {
    let room = normalize(&raw(json!({"size": "420 SQ FT"})), RoomId::new("r"));
    assert_eq!(room.size.as_deref(), Some("420 sq ft"));
}

#[test]
fn test_missing_size_stays_absent() {
    let room = normalize(&raw(json!({"name": "Cottage", "price": 1800})), RoomId::new("c"));
    assert_eq!(room.size, None);
}

#[test]
fn test_images_list_wins_over_single_image() {
    let room = normalize(
        &raw(json!({"image": "cover.jpg", "images": ["1.jpg", "2.jpg", "3.jpg"]})),
        RoomId::new("r"),
    );
    assert_eq!(room.images, vec!["1.jpg", "2.jpg", "3.jpg"]);
    assert_eq!(room.image, "1.jpg");

    let room = normalize(&raw(json!({"image": "cover.jpg", "images": []})), RoomId::new("r"));
    assert_eq!(room.images, vec!["cover.jpg"]);
    assert_eq!(room.image, "cover.jpg");

    let room = normalize(&raw(json!({})), RoomId::new("r"));
    assert!(room.images.is_empty());
    assert_eq!(room.image, "");
}

#[test]
fn test_amenity_categories_follow_priority() {
    let room = normalize(
        &raw(json!({
            "amenities": ["WiFi", "LED TV", "Coffee Maker", "Air Conditioning", "In-room Dining", "Jharokha View"]
        })),
        RoomId::new("r"),
    );

    let categories: Vec<AmenityCategory> = room.amenities.iter().map(|a| a.category).collect();
    assert_eq!(
        categories,
        vec![
            AmenityCategory::Wifi,
            AmenityCategory::Tv,
            AmenityCategory::Beverage,
            AmenityCategory::Climate,
            AmenityCategory::Dining,
            AmenityCategory::Generic,
        ]
    );
}

#[test]
fn test_malformed_record_degrades_without_failing() {
    let room = normalize(
        &raw(json!({
            "name": null,
            "price": null,
            "size": {"value": 300},
            "amenities": "WiFi, TV",
            "image": 42,
            "images": "not-a-list",
            "description": ["x"]
        })),
        RoomId::new("broken"),
    );

    assert_eq!(room.name, "");
    assert!(room.price.starts_with(catalog::CURRENCY_GLYPH));
    assert_eq!(room.size, None);
    assert!(room.amenities.is_empty());
    assert!(room.images.is_empty());
    assert_eq!(room.image, "");
    assert_eq!(room.description, "");
}

#[test]
fn test_every_amenity_entry_survives() {
    let room = normalize(
        &raw(json!({"amenities": ["Free WiFi", null, {"kind": "spa"}, "Mini Bar"]})),
        RoomId::new("r"),
    );

    let labels: Vec<&str> = room.amenities.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["Free WiFi", "", r#"{"kind":"spa"}"#, "Mini Bar"]);
    assert_eq!(room.amenities[1].category, AmenityCategory::Generic);
    assert_eq!(room.amenities[3].category, AmenityCategory::Beverage);
}

#[test]
fn test_normalizer_is_reusable() {
    let normalizer = RoomCatalogNormalizer::new();
    let a = normalizer.normalize(&raw(json!({"price": 100})), RoomId::new("a"));
    let b = normalizer.normalize(&raw(json!({"price": 100})), RoomId::new("a"));
    assert_eq!(a, b);
}
