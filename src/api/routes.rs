use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    advice::get_advice,
    bookings::{
        confirm_action, discard_action, get_my_bookings, request_booking, request_cancel,
        request_join,
    },
    matches::get_open_matches,
    reference::{get_courts, get_players},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/courts", get(get_courts))
        .route("/api/players", get(get_players))
        .route("/api/bookings", get(get_my_bookings).post(request_booking))
        .route("/api/bookings/:id/join", post(request_join))
        .route("/api/bookings/:id/cancel", post(request_cancel))
        .route("/api/matches/open", get(get_open_matches))
        .route("/api/actions/:ticket/confirm", post(confirm_action))
        .route("/api/actions/:ticket", delete(discard_action))
        .route("/api/advice", post(get_advice))
        .with_state(state)
}
