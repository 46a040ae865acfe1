//! Loaded room catalog
//!
//! Holds the normalized rooms in provider order and is the entry point for
//! starting a booking on a chosen room.

use crate::booking::ReservationConfigurator;
use crate::catalog::normalizer::RoomCatalogNormalizer;
use crate::catalog::provider::CatalogProvider;
use crate::catalog::raw::RawRoomDocument;
use crate::catalog::room::Room;
use crate::types::RoomId;
use tracing::{error, info, instrument};

/// Normalized rooms available for booking
#[derive(Debug, Clone, Default)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    /// Fetch and normalize the catalog
    ///
    /// A failed fetch is logged and yields an empty catalog; the normalizer is
    /// not run in that case.
    #[instrument(skip(provider))]
    pub async fn load<P: CatalogProvider>(provider: &P) -> Self {
        match provider.fetch_rooms().await {
            Ok(documents) => {
                let catalog = Self::from_documents(documents);
                info!(rooms = catalog.len(), "room catalog loaded");
                catalog
            }
            Err(e) => {
                error!(error = %e, "failed to fetch rooms");
                Self::default()
            }
        }
    }

    /// Normalize raw documents in order
    ///
    /// Documents without an id are keyed by their one-based position.
    pub fn from_documents(documents: Vec<RawRoomDocument>) -> Self {
        let normalizer = RoomCatalogNormalizer::new();
        let rooms = documents
            .iter()
            .enumerate()
            .map(|(index, document)| {
                let id = document
                    .id_text()
                    .map(RoomId::new)
                    .unwrap_or_else(|| RoomId::positional(index));
                normalizer.normalize(&document.data, id)
            })
            .collect();

        Self { rooms }
    }

    /// Rooms in provider order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room by id
    pub fn get(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    /// Number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether no rooms are available
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Open a booking for the given room ("Book Now")
    pub fn start_booking(&self, id: &RoomId) -> Option<ReservationConfigurator> {
        self.get(id).cloned().map(ReservationConfigurator::new)
    }
}
