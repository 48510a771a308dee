use std::sync::Mutex;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::domain::models::{Court, GeoPoint, Player};
use crate::errors::BookingError;
use crate::store::BookingStore;

pub mod advice;
pub mod bookings;
pub mod matches;
pub mod reference;

pub struct AppState {
    pub store: Mutex<BookingStore>,
    pub config: AppConfig,
    pub courts: Vec<Court>,
    pub players: Vec<Player>,
    /// Resolved once at startup; default coordinate if the lookup failed
    pub session_location: GeoPoint,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerParams {
    pub player_id: Option<String>,
    pub skill: Option<String>,
}

pub fn booking_error_response(err: &BookingError) -> Response {
    let status = match err {
        BookingError::IncompleteBooking(_) => StatusCode::UNPROCESSABLE_ENTITY,
        BookingError::AlreadyTaken => StatusCode::CONFLICT,
        BookingError::SelfJoinRejected | BookingError::NotParticipant { .. } => {
            StatusCode::FORBIDDEN
        }
        BookingError::UnknownBooking(_) | BookingError::UnknownTicket => StatusCode::NOT_FOUND,
    };
    (status, err.to_string()).into_response()
}
