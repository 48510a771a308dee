pub mod bookings;

pub use bookings::{
    ActionOutcome, BookingDraft, BookingStore, MatchKind, PendingAction, TicketId,
};
