//! Room catalog loading and normalization
//!
//! This module turns the raw documents of the remote room store into
//! display-ready rooms.
//!
//! # Overview
//!
//! - **RawRoomRecord / RawRoomDocument**: untyped upstream records
//! - **RoomCatalogNormalizer**: canonicalizes price, size, images and amenities
//! - **Room / Amenity**: normalized, immutable room values
//! - **CatalogProvider**: async source of raw documents (JSON file, in-memory)
//! - **RoomCatalog**: the loaded rooms and the "Book Now" entry point
//!
//! # Usage Example
//!
//! ```rust
//! use shyam_heritage_booking::catalog::*;
//! use shyam_heritage_booking::types::*;
//! use serde_json::json;
//!
//! let raw: RawRoomRecord = serde_json::from_value(json!({
//!     "name": "Heritage Room",
//!     "price": 2500,
//!     "size": 350,
//!     "amenities": ["Free WiFi", "Mini Bar"],
//!     "image": "a.jpg"
//! })).unwrap();
//!
//! let room = normalize(&raw, RoomId::new("heritage"));
//! assert_eq!(room.price, "₹2500");
//! assert_eq!(room.size.as_deref(), Some("350 sq ft"));
//! assert_eq!(room.images, vec!["a.jpg".to_string()]);
//! assert_eq!(room.amenities[1].category, AmenityCategory::Beverage);
//! ```

pub mod normalizer;
pub mod provider;
pub mod raw;
pub mod registry;
pub mod room;

// Re-export all public types for convenience
pub use normalizer::{normalize, RoomCatalogNormalizer, CURRENCY_GLYPH, SIZE_UNIT};
pub use provider::{CatalogError, CatalogProvider, JsonFileCatalogProvider, StaticCatalogProvider};
pub use raw::{RawRoomDocument, RawRoomRecord};
pub use registry::RoomCatalog;
pub use room::{Amenity, Room, FEATURED_AMENITY_COUNT};
