//! Top-level error type
//!
//! Aggregates configuration, catalog and reservation failures for callers that
//! drive the whole engine, such as the command line binary.

use crate::booking::ReservationError;
use crate::catalog::CatalogError;
use crate::types::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur while running the engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration failed validation
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ConfigValidationError),

    /// Room catalog could not be fetched
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Booking could not be completed
    #[error("Reservation error: {0}")]
    Reservation(#[from] ReservationError),

    /// Requested room is not in the catalog
    #[error("Room not found: {0}")]
    RoomNotFound(String),
}

impl EngineError {
    /// Create a room-not-found error
    pub fn room_not_found(id: impl Into<String>) -> Self {
        Self::RoomNotFound(id.into())
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            EngineError::Config(_) => false,
            EngineError::Validation(_) => false,
            EngineError::Catalog(_) => true,
            EngineError::Reservation(e) => e.is_retryable(),
            EngineError::RoomNotFound(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            EngineError::Config(_) => "Configuration",
            EngineError::Validation(_) => "Configuration Validation",
            EngineError::Catalog(_) => "Catalog",
            EngineError::Reservation(_) => "Reservation",
            EngineError::RoomNotFound(_) => "Room Lookup",
        }
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
