//! Reservation configuration and the booking wizard
//!
//! This module contains the in-progress booking, the configurator that guards
//! it, and the submission sink the finished booking is handed to.
//!
//! # Overview
//!
//! - **ReservationConfiguration**: dates, occupancy and contact details for one dialog
//! - **ReservationConfigurator**: guarded mutators plus the
//!   `Configuring -> Submitting -> Confirmed` wizard
//! - **SubmissionSink**: async, fallible destination for finalized bookings
//! - **ReservationError / MutationOutcome**: submission failures and routine
//!   mutation refusals
//!
//! # Usage Example
//!
//! ```rust
//! use shyam_heritage_booking::booking::*;
//! use shyam_heritage_booking::catalog::*;
//! use shyam_heritage_booking::types::*;
//! use std::time::Duration;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let room = normalize(&RawRoomRecord::default(), RoomId::new("deluxe"));
//! let mut booking = ReservationConfigurator::new(room);
//!
//! booking.set_adults(7);
//! assert_eq!(booking.rooms_requested(), 3);
//! assert!(booking.set_rooms(2).is_rejected());
//!
//! booking.set_dates(chrono::NaiveDate::from_ymd_opt(2026, 12, 20), chrono::NaiveDate::from_ymd_opt(2026, 12, 22));
//! booking.set_contact_info("Asha Verma", "+91 98765 43210");
//!
//! let sink = SimulatedSubmissionSink::new(Duration::ZERO);
//! let confirmation = booking.submit(&sink).await.unwrap();
//! assert_eq!(confirmation.request.rooms, 3);
//! assert_eq!(booking.state(), WizardState::Confirmed);
//! # });
//! ```

pub mod configuration;
pub mod configurator;
pub mod error;
pub mod sink;

// Re-export all public types for convenience
pub use configuration::ReservationConfiguration;
pub use configurator::ReservationConfigurator;
pub use error::{MutationOutcome, Rejection, ReservationError};
pub use sink::{
    BookingConfirmation, BookingRequest, SimulatedSubmissionSink, SinkError, SubmissionSink,
};
