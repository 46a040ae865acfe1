//! Reservation errors and mutation outcomes

use crate::booking::sink::SinkError;
use crate::types::{GuestField, WizardState};
use std::fmt;
use thiserror::Error;

/// Errors returned by [`submit`](crate::booking::ReservationConfigurator::submit)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReservationError {
    /// Required fields are missing; the wizard stays in `Configuring`
    #[error("Missing required fields: {}", join_fields(.missing))]
    Validation {
        /// Missing fields in form order
        missing: Vec<GuestField>,
    },

    /// The submission sink failed; the wizard is back in `Configuring`
    #[error("Booking submission failed: {0}")]
    Submission(#[source] SinkError),

    /// Submission was attempted outside `Configuring`
    #[error("Cannot submit a booking while {0}")]
    InvalidState(WizardState),
}

impl ReservationError {
    /// Whether the guest can fix the problem and submit again
    pub fn is_retryable(&self) -> bool {
        match self {
            ReservationError::Validation { .. } => true,
            ReservationError::Submission(_) => true,
            ReservationError::InvalidState(_) => false,
        }
    }

    /// Missing fields, for validation failures
    pub fn missing_fields(&self) -> &[GuestField] {
        match self {
            ReservationError::Validation { missing } => missing,
            _ => &[],
        }
    }
}

fn join_fields(fields: &[GuestField]) -> String {
    fields.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Why a guarded mutation left the configuration unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The value is below the field minimum
    BelowMinimum {
        /// Requested value
        requested: i64,
        /// Smallest accepted value
        minimum: u32,
    },
    /// The value does not fit a count
    OutOfRange {
        /// Requested value
        requested: i64,
    },
    /// Fewer rooms than the current adults need
    ExceedsOccupancy {
        /// Current adults
        adults: u32,
        /// Adults the requested rooms could seat
        capacity: u64,
    },
    /// The wizard has left `Configuring`
    NotEditable(WizardState),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::BelowMinimum { requested, minimum } => {
                write!(f, "{} is below the minimum of {}", requested, minimum)
            }
            Rejection::OutOfRange { requested } => write!(f, "{} is out of range", requested),
            Rejection::ExceedsOccupancy { adults, capacity } => {
                write!(f, "{} adults exceed the capacity of {}", adults, capacity)
            }
            Rejection::NotEditable(state) => write!(f, "booking is not editable while {}", state),
        }
    }
}

/// Result of a guarded mutation
///
/// Rejections are routine (a "-" press at the floor, an edit during
/// submission) and are reported as values, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The change was applied
    Applied,
    /// The configuration is unchanged
    Rejected(Rejection),
}

impl MutationOutcome {
    /// Whether the change was applied
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }

    /// Whether the configuration was left unchanged
    pub fn is_rejected(&self) -> bool {
        !self.is_applied()
    }

    /// Rejection reason, if any
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MutationOutcome::Applied => None,
            MutationOutcome::Rejected(rejection) => Some(*rejection),
        }
    }
}
