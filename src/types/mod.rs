//! Core types and identifiers for the reservation engine
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the engine.
//!
//! # Overview
//!
//! - **Identifiers**: opaque room ids from the catalog and UUID-based booking references
//! - **Enums**: amenity categories, wizard states, guest fields and output formats
//! - **Configuration**: engine configuration with validation and CLI support, plus
//!   the occupancy constants
//!
//! # Usage Example
//!
//! ```rust
//! use shyam_heritage_booking::types::*;
//!
//! let room_id = RoomId::new("heritage-suite");
//! assert_eq!(room_id.as_str(), "heritage-suite");
//!
//! assert_eq!(AmenityCategory::classify("Free WiFi"), AmenityCategory::Wifi);
//! assert_eq!(occupancy::rooms_required(7), 3);
//!
//! let config = EngineConfig {
//!     submission_delay_ms: 0,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
