//! In-progress reservation configuration

use crate::catalog::Room;
use crate::types::{occupancy, GuestField};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking configuration held by one open booking dialog
///
/// The [`ReservationConfigurator`](crate::booking::ReservationConfigurator)
/// owning a configuration only hands out shared references, so every change
/// passes through its guarded mutators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationConfiguration {
    /// Room being booked
    pub room: Room,
    /// Adults, at least one
    pub adults: u32,
    /// Children, unconstrained
    pub children: u32,
    /// Rooms requested, never fewer than the occupancy ceiling requires
    pub rooms_requested: u32,
    /// Arrival date
    pub check_in: Option<NaiveDate>,
    /// Departure date
    pub check_out: Option<NaiveDate>,
    /// Guest full name
    pub guest_name: String,
    /// Guest phone number
    pub guest_phone: String,
}

impl ReservationConfiguration {
    /// Fresh configuration: one adult, no children, one room, no dates or contact
    pub fn new(room: Room) -> Self {
        Self {
            room,
            adults: occupancy::MIN_ADULTS,
            children: 0,
            rooms_requested: occupancy::MIN_ROOMS,
            check_in: None,
            check_out: None,
            guest_name: String::new(),
            guest_phone: String::new(),
        }
    }

    /// Rooms the current adult count requires
    pub fn min_rooms_required(&self) -> u32 {
        occupancy::rooms_required(self.adults)
    }

    /// Whether the occupancy ceiling holds
    pub fn satisfies_occupancy(&self) -> bool {
        self.rooms_requested >= self.min_rooms_required()
    }

    /// Required fields that are still missing, in form order
    pub fn missing_fields(&self) -> Vec<GuestField> {
        let mut missing = Vec::new();
        if self.check_in.is_none() {
            missing.push(GuestField::CheckIn);
        }
        if self.check_out.is_none() {
            missing.push(GuestField::CheckOut);
        }
        if self.guest_name.trim().is_empty() {
            missing.push(GuestField::GuestName);
        }
        if self.guest_phone.trim().is_empty() {
            missing.push(GuestField::GuestPhone);
        }
        missing
    }

    /// Whether every required field is present
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawRoomRecord;
    use crate::types::RoomId;

    fn configuration() -> ReservationConfiguration {
        let room = crate::catalog::normalize(&RawRoomRecord::default(), RoomId::new("r1"));
        ReservationConfiguration::new(room)
    }

    #[test]
    fn test_initial_configuration() {
        let config = configuration();
        assert_eq!(config.adults, 1);
        assert_eq!(config.children, 0);
        assert_eq!(config.rooms_requested, 1);
        assert!(config.satisfies_occupancy());
        assert_eq!(
            config.missing_fields(),
            vec![
                GuestField::CheckIn,
                GuestField::CheckOut,
                GuestField::GuestName,
                GuestField::GuestPhone
            ]
        );
    }

    #[test]
    fn test_blank_contact_counts_as_missing() {
        let mut config = configuration();
        config.check_in = NaiveDate::from_ymd_opt(2026, 12, 20);
        config.check_out = NaiveDate::from_ymd_opt(2026, 12, 22);
        config.guest_name = "   ".to_string();
        config.guest_phone = "+91 98765 43210".to_string();

        assert_eq!(config.missing_fields(), vec![GuestField::GuestName]);
        assert!(!config.is_complete());
    }
}
