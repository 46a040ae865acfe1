//! Shyam Heritage Palace booking engine
//!
//! Room catalog normalization and the reservation configuration engine behind
//! the hotel's booking dialog.
//!
//! # Overview
//!
//! Raw room documents from the remote store are normalized into display-ready
//! rooms. When a guest picks "Book Now" on a room, a reservation configurator
//! is opened for it; the configurator keeps adults, children and rooms
//! consistent under the occupancy ceiling (at most three adults per room) and
//! drives the two-step wizard from configuration to confirmation.
//!
//! ## Key Features
//!
//! - **Resilient normalization**: prices, sizes, images and amenities are
//!   canonicalized; malformed fields degrade to empty defaults
//! - **Guarded mutators**: the occupancy ceiling cannot be violated by any edit
//! - **Wizard state machine**: `Configuring -> Submitting -> Confirmed`, with
//!   fallible async submission
//! - **Configurable driver**: a CLI with JSON configuration and structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use shyam_heritage_booking::*;
//! use serde_json::json;
//!
//! let documents: Vec<RawRoomDocument> = serde_json::from_value(json!([
//!     {"id": "deluxe", "name": "Deluxe Room", "price": 2500, "size": 350,
//!      "amenities": ["Free WiFi", "Mini Bar"], "image": "a.jpg"}
//! ]))?;
//! let catalog = RoomCatalog::from_documents(documents);
//!
//! let mut booking = catalog.start_booking(&RoomId::new("deluxe")).unwrap();
//! booking.set_adults(4);
//! assert_eq!(booking.rooms_requested(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enumerations, configuration and occupancy rules
//! - [`catalog`]: raw records, normalization, providers and the loaded catalog
//! - [`booking`]: reservation configuration, configurator and submission sink
//! - [`runtime`]: top-level errors and logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod booking;
pub mod catalog;
pub mod runtime;
pub mod types;

// Core types and identifiers
pub use types::{
    occupancy,
    AmenityCategory,
    // Identifiers
    BookingId,
    // Configuration
    CliArgs,
    ConfigError,
    ConfigValidationError,
    EngineConfig,
    GuestField,
    OutputFormat,
    RoomId,
    // Enums
    WizardState,
};

// Catalog types and functionality
pub use catalog::{
    normalize, Amenity, CatalogError, CatalogProvider, JsonFileCatalogProvider, RawRoomDocument,
    RawRoomRecord, Room, RoomCatalog, RoomCatalogNormalizer, StaticCatalogProvider,
};

// Booking types and functionality
pub use booking::{
    BookingConfirmation, BookingRequest, MutationOutcome, Rejection, ReservationConfiguration,
    ReservationConfigurator, ReservationError, SimulatedSubmissionSink, SinkError,
    SubmissionSink,
};

// Runtime support
pub use runtime::{EngineError, EngineResult, LoggingConfig};
