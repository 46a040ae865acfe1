//! Booking submission sink
//!
//! The backend that receives finalized bookings sits behind
//! [`SubmissionSink`]. The engine treats it as fallible and slow.

use crate::booking::configuration::ReservationConfiguration;
use crate::types::{BookingId, RoomId};
use chrono::{DateTime, NaiveDate, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Finalized booking handed to the sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Room being booked
    pub room_id: RoomId,
    /// Room display name
    pub room_name: String,
    /// Nightly price as displayed
    pub nightly_price: String,
    /// Arrival date
    pub check_in: NaiveDate,
    /// Departure date
    pub check_out: NaiveDate,
    /// Adults
    pub adults: u32,
    /// Children
    pub children: u32,
    /// Rooms
    pub rooms: u32,
    /// Guest full name
    pub guest_name: String,
    /// Guest phone number
    pub guest_phone: String,
}

impl BookingRequest {
    /// Build a request from a configuration
    ///
    /// Returns `None` while either date is missing.
    pub fn from_configuration(config: &ReservationConfiguration) -> Option<Self> {
        Some(Self {
            room_id: config.room.id.clone(),
            room_name: config.room.name.clone(),
            nightly_price: config.room.price.clone(),
            check_in: config.check_in?,
            check_out: config.check_out?,
            adults: config.adults,
            children: config.children,
            rooms: config.rooms_requested,
            guest_name: config.guest_name.trim().to_string(),
            guest_phone: config.guest_phone.trim().to_string(),
        })
    }

    /// Nights between check-in and check-out, if check-out is later
    pub fn nights(&self) -> Option<u32> {
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).ok().filter(|&nights| nights > 0)
    }

    /// Total guests on the booking
    pub fn total_guests(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }
}

/// Acknowledgement returned by the sink for an accepted booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Booking reference
    pub booking_id: BookingId,
    /// When the sink accepted the booking
    pub confirmed_at: DateTime<Utc>,
    /// The accepted request
    pub request: BookingRequest,
}

/// Failure reported by a submission sink; the reason is opaque to the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct SinkError {
    /// Sink-provided failure reason
    pub reason: String,
}

impl SinkError {
    /// Create a sink error
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Destination for finalized bookings
pub trait SubmissionSink {
    /// Submit a booking and wait for the outcome
    fn submit(
        &self,
        request: BookingRequest,
    ) -> impl Future<Output = Result<BookingConfirmation, SinkError>> + Send;
}

/// Stand-in backend: waits a fixed delay, then accepts the booking
///
/// An optional failure rate makes it reject a share of submissions, drawn
/// from a seedable generator.
#[derive(Debug)]
pub struct SimulatedSubmissionSink {
    delay: Duration,
    failure_rate: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedSubmissionSink {
    /// Always-succeeding sink with the given latency
    pub fn new(delay: Duration) -> Self {
        Self { delay, failure_rate: 0.0, rng: Mutex::new(StdRng::from_entropy()) }
    }

    /// Reject submissions with the given probability (clamped to 0.0-1.0)
    ///
    /// A non-finite rate disables failures.
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = if failure_rate.is_finite() { failure_rate.clamp(0.0, 1.0) } else { 0.0 };
        self
    }

    /// Seed the failure draw for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Configured latency
    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn should_fail(&self) -> bool {
        if self.failure_rate <= 0.0 {
            return false;
        }
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_bool(self.failure_rate),
            Err(poisoned) => poisoned.into_inner().gen_bool(self.failure_rate),
        }
    }
}

impl Default for SimulatedSubmissionSink {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl SubmissionSink for SimulatedSubmissionSink {
    async fn submit(&self, request: BookingRequest) -> Result<BookingConfirmation, SinkError> {
        debug!(room_id = %request.room_id, delay_ms = self.delay.as_millis() as u64, "simulating submission");
        tokio::time::sleep(self.delay).await;

        if self.should_fail() {
            warn!(room_id = %request.room_id, "simulated sink rejected booking");
            return Err(SinkError::new("booking service unavailable, please try again"));
        }

        Ok(BookingConfirmation { booking_id: BookingId::new(), confirmed_at: Utc::now(), request })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(check_in: NaiveDate, check_out: NaiveDate) -> BookingRequest {
        BookingRequest {
            room_id: RoomId::new("deluxe"),
            room_name: "Deluxe Room".to_string(),
            nightly_price: "₹2500".to_string(),
            check_in,
            check_out,
            adults: 2,
            children: 1,
            rooms: 1,
            guest_name: "Asha Verma".to_string(),
            guest_phone: "+91 98765 43210".to_string(),
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, day).unwrap()
    }

    #[test]
    fn test_nights() {
        assert_eq!(request(date(20), date(23)).nights(), Some(3));
        assert_eq!(request(date(20), date(20)).nights(), None);
        assert_eq!(request(date(23), date(20)).nights(), None);
        assert_eq!(request(date(20), date(23)).total_guests(), 3);
    }

    #[tokio::test]
    async fn test_simulated_sink_succeeds_by_default() {
        let sink = SimulatedSubmissionSink::new(Duration::ZERO);
        let confirmation = sink.submit(request(date(20), date(23))).await.unwrap();
        assert_eq!(confirmation.request.room_id.as_str(), "deluxe");
        assert!(confirmation.booking_id.to_string().starts_with("BKG_"));
    }

    #[tokio::test]
    async fn test_simulated_sink_always_fails_at_full_rate() {
        let sink = SimulatedSubmissionSink::new(Duration::ZERO).with_failure_rate(1.0).with_seed(7);
        let err = sink.submit(request(date(20), date(23))).await.unwrap_err();
        assert!(!err.reason.is_empty());
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        let sink = SimulatedSubmissionSink::default().with_failure_rate(3.0);
        assert_eq!(sink.failure_rate, 1.0);
        assert_eq!(sink.delay(), Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_non_finite_failure_rate_never_fails() {
        for rate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let sink = SimulatedSubmissionSink::new(Duration::ZERO).with_failure_rate(rate);
            assert_eq!(sink.failure_rate, 0.0);
            assert!(sink.submit(request(date(20), date(23))).await.is_ok());
        }
    }
}
