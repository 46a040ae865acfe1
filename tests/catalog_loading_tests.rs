//! Tests for fetching the room catalog through providers

use serde_json::json;
use shyam_heritage_booking::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

struct UnreachableStore;

impl CatalogProvider for UnreachableStore {
    async fn fetch_rooms(&self) -> Result<Vec<RawRoomDocument>, CatalogError> {
        Err(CatalogError::Provider("permission denied".to_string()))
    }
}

#[tokio::test]
async fn test_json_file_catalog_loads_in_order() {
    let file = catalog_file(
        &json!([
            {"id": "heritage", "name": "Heritage Room", "price": 2500, "size": 350,
             "amenities": ["Free WiFi", "Mini Bar", "LED TV", "Air Conditioning"], "image": "a.jpg"},
            {"name": "Maharaja Suite", "price": "₹9,500", "images": ["s1.jpg", "s2.jpg"]}
        ])
        .to_string(),
    );

    let catalog = RoomCatalog::load(&JsonFileCatalogProvider::new(file.path())).await;

    assert_eq!(catalog.len(), 2);
    let heritage = &catalog.rooms()[0];
    assert_eq!(heritage.id.as_str(), "heritage");
    assert_eq!(heritage.price, "₹2500");
    assert_eq!(heritage.featured_amenities().len(), 3);

    // Documents without an id fall back to their position
    let suite = catalog.get(&RoomId::new("room-2")).unwrap();
    assert_eq!(suite.name, "Maharaja Suite");
    assert_eq!(suite.image, "s1.jpg");
}

#[tokio::test]
async fn test_missing_file_yields_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let provider = JsonFileCatalogProvider::new(dir.path().join("rooms.json"));

    assert!(matches!(provider.fetch_rooms().await, Err(CatalogError::NotFound(_))));
    assert!(RoomCatalog::load(&provider).await.is_empty());
}

#[tokio::test]
async fn test_unreadable_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let provider = JsonFileCatalogProvider::new(dir.path());

    assert!(matches!(provider.fetch_rooms().await, Err(CatalogError::Io(_))));
    assert!(RoomCatalog::load(&provider).await.is_empty());
}

#[tokio::test]
async fn test_unparseable_file_yields_empty_catalog() {
    let file = catalog_file("{\"rooms\": not json");
    let provider = JsonFileCatalogProvider::new(file.path());

    assert!(matches!(provider.fetch_rooms().await, Err(CatalogError::Json(_))));
    assert!(RoomCatalog::load(&provider).await.is_empty());
}

#[tokio::test]
async fn test_provider_failure_yields_empty_catalog() {
    let catalog = RoomCatalog::load(&UnreachableStore).await;
    assert!(catalog.is_empty());
    assert!(catalog.start_booking(&RoomId::new("room-1")).is_none());
}

#[tokio::test]
async fn test_static_provider_and_booking_entry() {
    let documents: Vec<RawRoomDocument> =
        serde_json::from_value(json!([{"id": "deluxe", "name": "Deluxe Room", "price": 2500}]))
            .unwrap();
    let catalog = RoomCatalog::load(&StaticCatalogProvider::new(documents)).await;

    let booking = catalog.start_booking(&RoomId::new("deluxe")).unwrap();
    assert_eq!(booking.state(), WizardState::Configuring);
    assert_eq!(booking.room().name, "Deluxe Room");
    assert_eq!((booking.adults(), booking.children(), booking.rooms_requested()), (1, 0, 1));

    assert!(catalog.start_booking(&RoomId::new("royal-suite")).is_none());
}

#[tokio::test]
async fn test_empty_array_is_an_empty_catalog() {
    let file = catalog_file("[]");
    let catalog = RoomCatalog::load(&JsonFileCatalogProvider::new(file.path())).await;
    assert_eq!(catalog.len(), 0);
}
