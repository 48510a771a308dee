use thiserror::Error;

/// Recoverable booking failures, surfaced to the user as-is.
///
/// None of these are fatal: every failure path leaves the store in its prior
/// consistent state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// A required field was missing at creation
    #[error("Please fill in the required {0} field")]
    IncompleteBooking(&'static str),

    /// Join attempted on a booking that is no longer open
    #[error("This match is no longer open")]
    AlreadyTaken,

    /// A host tried to join their own open booking
    #[error("You cannot join your own open match")]
    SelfJoinRejected,

    #[error("No booking found with id {0}")]
    UnknownBooking(String),

    /// Cancel/leave attempted by someone who is neither host nor guest
    #[error("Player {player} is not part of booking {booking}")]
    NotParticipant { player: String, booking: String },

    /// Confirmation ticket was never issued, already confirmed, or discarded
    #[error("Unknown or already handled confirmation ticket")]
    UnknownTicket,
}
