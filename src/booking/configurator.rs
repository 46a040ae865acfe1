//! Reservation configurator: guarded mutators and the booking wizard
//!
//! The configurator owns one [`ReservationConfiguration`] and is the only way
//! to change it. Every mutator keeps the occupancy ceiling
//! (`rooms_requested >= ceil(adults / 3)`) intact:
//!
//! - raising adults may raise rooms, lowering adults never lowers rooms;
//! - lowering rooms below what the adults need is refused outright.
//!
//! Mutators report routine refusals as [`MutationOutcome::Rejected`] and leave
//! the configuration untouched. Once the wizard leaves `Configuring` every
//! mutator is refused.

use crate::booking::configuration::ReservationConfiguration;
use crate::booking::error::{MutationOutcome, Rejection, ReservationError};
use crate::booking::sink::{BookingConfirmation, BookingRequest, SubmissionSink};
use crate::catalog::Room;
use crate::types::{occupancy, WizardState};
use chrono::NaiveDate;
use tracing::{debug, error, info, instrument, warn};

/// State machine for one open booking dialog
#[derive(Debug, Clone)]
pub struct ReservationConfigurator {
    configuration: ReservationConfiguration,
    state: WizardState,
    transitions: Vec<WizardState>,
    confirmation: Option<BookingConfirmation>,
}

impl ReservationConfigurator {
    /// Open a booking for the chosen room
    pub fn new(room: Room) -> Self {
        debug!(room_id = %room.id, "opening booking");
        Self {
            configuration: ReservationConfiguration::new(room),
            state: WizardState::Configuring,
            transitions: vec![WizardState::Configuring],
            confirmation: None,
        }
    }

    /// Current configuration
    pub fn configuration(&self) -> &ReservationConfiguration {
        &self.configuration
    }

    /// Room being booked
    pub fn room(&self) -> &Room {
        &self.configuration.room
    }

    /// Current wizard state
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Every state the wizard has been in, oldest first
    pub fn transitions(&self) -> &[WizardState] {
        &self.transitions
    }

    /// Sink acknowledgement, once confirmed
    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }

    /// Adults on the booking
    pub fn adults(&self) -> u32 {
        self.configuration.adults
    }

    /// Children on the booking
    pub fn children(&self) -> u32 {
        self.configuration.children
    }

    /// Rooms requested
    pub fn rooms_requested(&self) -> u32 {
        self.configuration.rooms_requested
    }

    /// Rooms the current adults need
    pub fn min_rooms_required(&self) -> u32 {
        self.configuration.min_rooms_required()
    }

    /// Whether a one-room decrease would be accepted
    pub fn can_decrease_rooms(&self) -> bool {
        self.state.is_editable() && self.rooms_requested() > self.min_rooms_required()
    }

    /// Set the adult count, raising rooms when the ceiling requires it
    pub fn set_adults(&mut self, n: i64) -> MutationOutcome {
        if let Err(rejection) = self.ensure_editable() {
            return self.reject("set_adults", rejection);
        }
        let adults = match to_count(n, occupancy::MIN_ADULTS) {
            Ok(adults) => adults,
            Err(rejection) => return self.reject("set_adults", rejection),
        };

        self.configuration.adults = adults;

        let required = occupancy::rooms_required(adults);
        if self.configuration.rooms_requested < required {
            info!(
                adults,
                from = self.configuration.rooms_requested,
                to = required,
                "raising rooms to seat adults"
            );
            self.configuration.rooms_requested = required;
        }

        debug!(adults, rooms = self.configuration.rooms_requested, "adults updated");
        MutationOutcome::Applied
    }

    /// Set the room count; refused if the current adults would not fit
    pub fn set_rooms(&mut self, n: i64) -> MutationOutcome {
        if let Err(rejection) = self.ensure_editable() {
            return self.reject("set_rooms", rejection);
        }
        let rooms = match to_count(n, occupancy::MIN_ROOMS) {
            Ok(rooms) => rooms,
            Err(rejection) => return self.reject("set_rooms", rejection),
        };

        let capacity = u64::from(rooms) * u64::from(occupancy::MAX_ADULTS_PER_ROOM);
        let adults = self.configuration.adults;
        if capacity < u64::from(adults) {
            return self.reject("set_rooms", Rejection::ExceedsOccupancy { adults, capacity });
        }

        self.configuration.rooms_requested = rooms;
        debug!(rooms, "rooms updated");
        MutationOutcome::Applied
    }

    /// Set the child count, clamping negatives to zero
    pub fn set_children(&mut self, n: i64) -> MutationOutcome {
        if let Err(rejection) = self.ensure_editable() {
            return self.reject("set_children", rejection);
        }

        let children = n.clamp(0, i64::from(u32::MAX)) as u32;
        self.configuration.children = children;
        debug!(children, "children updated");
        MutationOutcome::Applied
    }

    /// Set guest contact details
    pub fn set_contact_info(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> MutationOutcome {
        if let Err(rejection) = self.ensure_editable() {
            return self.reject("set_contact_info", rejection);
        }

        self.configuration.guest_name = name.into();
        self.configuration.guest_phone = phone.into();
        debug!("contact details updated");
        MutationOutcome::Applied
    }

    /// Set (or clear) the stay dates; ordering is not checked here
    pub fn set_dates(
        &mut self,
        check_in: impl Into<Option<NaiveDate>>,
        check_out: impl Into<Option<NaiveDate>>,
    ) -> MutationOutcome {
        if let Err(rejection) = self.ensure_editable() {
            return self.reject("set_dates", rejection);
        }

        self.configuration.check_in = check_in.into();
        self.configuration.check_out = check_out.into();
        debug!(check_in = ?self.configuration.check_in, check_out = ?self.configuration.check_out, "dates updated");
        MutationOutcome::Applied
    }

    /// "+" on the adults stepper
    pub fn increment_adults(&mut self) -> MutationOutcome {
        self.set_adults(i64::from(self.adults()) + 1)
    }

    /// "-" on the adults stepper
    pub fn decrement_adults(&mut self) -> MutationOutcome {
        self.set_adults(i64::from(self.adults()) - 1)
    }

    /// "+" on the children stepper
    pub fn increment_children(&mut self) -> MutationOutcome {
        self.set_children(i64::from(self.children()) + 1)
    }

    /// "-" on the children stepper
    pub fn decrement_children(&mut self) -> MutationOutcome {
        self.set_children(i64::from(self.children()) - 1)
    }

    /// "+" on the rooms stepper
    pub fn increment_rooms(&mut self) -> MutationOutcome {
        self.set_rooms(i64::from(self.rooms_requested()) + 1)
    }

    /// "-" on the rooms stepper
    pub fn decrement_rooms(&mut self) -> MutationOutcome {
        self.set_rooms(i64::from(self.rooms_requested()) - 1)
    }

    /// Validate and hand the booking to the sink
    ///
    /// Moves `Configuring -> Submitting` and then to `Confirmed` on success or
    /// back to `Configuring` on sink failure. Missing fields fail without any
    /// transition.
    #[instrument(skip(self, sink), fields(room_id = %self.configuration.room.id))]
    pub async fn submit<S: SubmissionSink>(
        &mut self,
        sink: &S,
    ) -> Result<BookingConfirmation, ReservationError> {
        if self.state != WizardState::Configuring {
            warn!(state = %self.state, "submit outside configuring");
            return Err(ReservationError::InvalidState(self.state));
        }

        let missing = self.configuration.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "booking incomplete");
            return Err(ReservationError::Validation { missing });
        }
        let Some(request) = BookingRequest::from_configuration(&self.configuration) else {
            return Err(ReservationError::Validation {
                missing: self.configuration.missing_fields(),
            });
        };

        self.transition(WizardState::Submitting);

        match sink.submit(request).await {
            Ok(confirmation) => {
                info!(booking_id = %confirmation.booking_id, "booking confirmed");
                self.confirmation = Some(confirmation.clone());
                self.transition(WizardState::Confirmed);
                Ok(confirmation)
            }
            Err(e) => {
                error!(error = %e, "booking submission failed");
                self.transition(WizardState::Configuring);
                Err(ReservationError::Submission(e))
            }
        }
    }

    /// Close the dialog, discarding the configuration
    pub fn close(self) {
        info!(room_id = %self.configuration.room.id, state = %self.state, "booking dialog closed");
    }

    fn ensure_editable(&self) -> Result<(), Rejection> {
        if self.state.is_editable() {
            Ok(())
        } else {
            Err(Rejection::NotEditable(self.state))
        }
    }

    fn reject(&self, operation: &'static str, rejection: Rejection) -> MutationOutcome {
        debug!(operation, %rejection, "mutation rejected");
        MutationOutcome::Rejected(rejection)
    }

    fn transition(&mut self, next: WizardState) {
        info!(from = %self.state, to = %next, "wizard transition");
        self.state = next;
        self.transitions.push(next);
    }
}

/// Convert a requested count, enforcing the field minimum
fn to_count(n: i64, minimum: u32) -> Result<u32, Rejection> {
    if n < i64::from(minimum) {
        return Err(Rejection::BelowMinimum { requested: n, minimum });
    }
    u32::try_from(n).map_err(|_| Rejection::OutOfRange { requested: n })
}
