use std::collections::HashMap;

use chrono::Utc;

use crate::domain::models::{
    Booking, BookingStatus, GeoPoint, TargetSkill, OPEN_MATCH_LABEL, OPPONENT_JOINED_LABEL,
};
use crate::errors::BookingError;

/// What a new reservation should look like, before the store admits it
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub court_id: String,
    pub host_id: String,
    pub date: String,
    pub time: String,
    pub kind: MatchKind,
    pub location: Option<GeoPoint>,
}

/// Specific-opponent bookings confirm immediately; open ones wait for a guest.
#[derive(Debug, Clone)]
pub enum MatchKind {
    Specific { opponent: Option<String> },
    Open { target: TargetSkill },
}

pub type TicketId = u64;

/// A mutation waiting for the caller to confirm it
#[derive(Debug, Clone)]
pub enum PendingAction {
    Create(BookingDraft),
    Join { booking_id: String, player_id: String },
    Cancel { booking_id: String, player_id: String },
}

/// What a confirmed mutation did
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Created(Booking),
    Joined(Booking),
    Cancelled { booking_id: String },
    /// Guest left a confirmed match and the slot is open again
    Reopened(Booking),
}

/// Authoritative in-memory collection of bookings.
///
/// All mutation goes through the two-step protocol: `request_*` validates and
/// hands back a ticket, `confirm` re-validates against current state and
/// executes. The re-validation is what settles races: of two join tickets on
/// the same slot, only the first confirm succeeds.
pub struct BookingStore {
    bookings: Vec<Booking>,
    pending: HashMap<TicketId, PendingAction>,
    next_booking: u64,
    next_ticket: u64,
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            pending: HashMap::new(),
            next_booking: 1,
            next_ticket: 1,
        }
    }

    /// Snapshot of the collection in insertion order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }

    pub fn request_create(&mut self, draft: BookingDraft) -> Result<TicketId, BookingError> {
        Self::validate_draft(&draft)?;
        Ok(self.enqueue(PendingAction::Create(draft)))
    }

    pub fn request_join(
        &mut self,
        booking_id: &str,
        player_id: &str,
    ) -> Result<TicketId, BookingError> {
        let booking = self.require(booking_id)?;
        Self::check_joinable(booking, player_id)?;
        Ok(self.enqueue(PendingAction::Join {
            booking_id: booking_id.to_string(),
            player_id: player_id.to_string(),
        }))
    }

    pub fn request_cancel(
        &mut self,
        booking_id: &str,
        player_id: &str,
    ) -> Result<TicketId, BookingError> {
        let booking = self.require(booking_id)?;
        Self::check_participant(booking, player_id)?;
        Ok(self.enqueue(PendingAction::Cancel {
            booking_id: booking_id.to_string(),
            player_id: player_id.to_string(),
        }))
    }

    /// Execute a pending action. The ticket is consumed either way, and every
    /// check runs again against current state, so a ticket that went stale
    /// (slot taken, booking cancelled) fails cleanly instead of overwriting.
    pub fn confirm(&mut self, ticket: TicketId) -> Result<ActionOutcome, BookingError> {
        let action = self
            .pending
            .remove(&ticket)
            .ok_or(BookingError::UnknownTicket)?;

        match action {
            PendingAction::Create(draft) => self.admit(draft).map(ActionOutcome::Created),
            PendingAction::Join {
                booking_id,
                player_id,
            } => self.join(&booking_id, &player_id).map(ActionOutcome::Joined),
            PendingAction::Cancel {
                booking_id,
                player_id,
            } => self.resolve_cancel(&booking_id, &player_id),
        }
    }

    /// Abandon a pending action ("Back to Edit"). Returns false if the ticket
    /// was never issued or already handled.
    pub fn discard(&mut self, ticket: TicketId) -> bool {
        self.pending.remove(&ticket).is_some()
    }

    // --- Validation ---

    fn validate_draft(draft: &BookingDraft) -> Result<(), BookingError> {
        if draft.court_id.trim().is_empty() {
            return Err(BookingError::IncompleteBooking("court"));
        }
        if draft.date.trim().is_empty() {
            return Err(BookingError::IncompleteBooking("date"));
        }
        if draft.time.trim().is_empty() {
            return Err(BookingError::IncompleteBooking("time"));
        }
        Ok(())
    }

    fn check_joinable(booking: &Booking, player_id: &str) -> Result<(), BookingError> {
        if booking.status != BookingStatus::Open {
            return Err(BookingError::AlreadyTaken);
        }
        if booking.host_id == player_id {
            return Err(BookingError::SelfJoinRejected);
        }
        Ok(())
    }

    fn check_participant(booking: &Booking, player_id: &str) -> Result<(), BookingError> {
        if !booking.involves(player_id) {
            return Err(BookingError::NotParticipant {
                player: player_id.to_string(),
                booking: booking.id.clone(),
            });
        }
        Ok(())
    }

    fn require(&self, booking_id: &str) -> Result<&Booking, BookingError> {
        self.get(booking_id)
            .ok_or_else(|| BookingError::UnknownBooking(booking_id.to_string()))
    }

    fn require_mut(&mut self, booking_id: &str) -> Result<&mut Booking, BookingError> {
        self.bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| BookingError::UnknownBooking(booking_id.to_string()))
    }

    // --- Mutation (validation already re-run by the caller path) ---

    fn admit(&mut self, draft: BookingDraft) -> Result<Booking, BookingError> {
        Self::validate_draft(&draft)?;
        let booking = self.build_booking(draft);
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    fn build_booking(&mut self, draft: BookingDraft) -> Booking {
        let id = self.allocate_id();
        let (status, opponent_label, target_skill) = match draft.kind {
            MatchKind::Specific { opponent } => {
                let label = opponent
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| OPEN_MATCH_LABEL.to_string());
                (BookingStatus::Confirmed, label, None)
            }
            MatchKind::Open { target } => (
                BookingStatus::Open,
                OPEN_MATCH_LABEL.to_string(),
                Some(target),
            ),
        };

        Booking {
            id,
            court_id: draft.court_id,
            host_id: draft.host_id,
            guest_id: None,
            date: draft.date,
            time: draft.time,
            registered_at: Utc::now(),
            location_at_registration: draft.location,
            opponent_label,
            target_skill,
            status,
        }
    }

    fn allocate_id(&mut self) -> String {
        // Never reused, so ids stay unique even after cancellations.
        let id = format!("b{}", self.next_booking);
        self.next_booking += 1;
        id
    }

    fn join(&mut self, booking_id: &str, player_id: &str) -> Result<Booking, BookingError> {
        let booking = self.require_mut(booking_id)?;
        Self::check_joinable(booking, player_id)?;

        booking.guest_id = Some(player_id.to_string());
        booking.status = BookingStatus::Confirmed;
        booking.opponent_label = OPPONENT_JOINED_LABEL.to_string();
        Ok(booking.clone())
    }

    fn resolve_cancel(
        &mut self,
        booking_id: &str,
        player_id: &str,
    ) -> Result<ActionOutcome, BookingError> {
        let booking = self.require_mut(booking_id)?;
        Self::check_participant(booking, player_id)?;

        if booking.status == BookingStatus::Cancelled {
            // Already cancelled, nothing left to do.
            return Ok(ActionOutcome::Cancelled {
                booking_id: booking.id.clone(),
            });
        }

        if booking.host_id == player_id {
            booking.status = BookingStatus::Cancelled;
            return Ok(ActionOutcome::Cancelled {
                booking_id: booking.id.clone(),
            });
        }

        // Guest leave: hand the slot back to the host.
        booking.guest_id = None;
        booking.status = BookingStatus::Open;
        booking.opponent_label = OPEN_MATCH_LABEL.to_string();
        Ok(ActionOutcome::Reopened(booking.clone()))
    }

    fn enqueue(&mut self, action: PendingAction) -> TicketId {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending.insert(ticket, action);
        ticket
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}
