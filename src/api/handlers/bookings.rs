use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;
use std::sync::Arc;

use crate::api::models::{
    ActionResult, ActionReview, ActorRequest, BookingListItem, BookingListResponse,
    CreateBookingRequest,
};
use crate::domain::models::{Booking, TargetSkill};
use crate::errors::BookingError;
use crate::matching;
use crate::store::{ActionOutcome, BookingDraft, MatchKind};
use super::{booking_error_response, AppState, ViewerParams};

pub async fn get_my_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewerParams>,
) -> impl IntoResponse {
    let Some(player_id) = params.player_id else {
        return (StatusCode::BAD_REQUEST, "playerId query parameter is required").into_response();
    };

    let store = match state.store.lock() {
        Ok(store) => store,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "State Lock Error").into_response(),
    };

    let items: Vec<BookingListItem> = matching::my_bookings(store.bookings(), &player_id)
        .into_iter()
        .map(|booking| build_booking_item(&state, booking, &player_id))
        .collect();
    let total = items.len();

    Json(BookingListResponse { items, total }).into_response()
}

pub async fn request_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookingRequest>,
) -> impl IntoResponse {
    let kind = parse_match_kind(&req);
    // A booking submitted without a coordinate gets the session's snapshot.
    let location = req.location.or(Some(state.session_location));

    let draft = BookingDraft {
        court_id: req.court_id,
        host_id: req.player_id,
        date: req.date,
        time: req.time,
        kind,
        location,
    };

    let (court_name, court_address) = resolve_court(&state, &draft.court_id);
    let date = draft.date.clone();
    let time = draft.time.clone();
    let summary = describe_kind(&draft.kind);

    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "State Lock Error").into_response(),
    };

    let ticket = match store.request_create(draft) {
        Ok(ticket) => ticket,
        Err(e) => return booking_error_response(&e),
    };

    Json(ActionReview {
        ticket,
        action: "create".to_string(),
        court_name,
        court_address,
        date,
        time,
        summary,
    })
    .into_response()
}

pub async fn request_join(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
    Json(req): Json<ActorRequest>,
) -> impl IntoResponse {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "State Lock Error").into_response(),
    };

    let (court_id, host_id, date, time) = match store.get(&booking_id) {
        Some(b) => (
            b.court_id.clone(),
            b.host_id.clone(),
            b.date.clone(),
            b.time.clone(),
        ),
        None => {
            return booking_error_response(&BookingError::UnknownBooking(booking_id));
        }
    };

    let ticket = match store.request_join(&booking_id, &req.player_id) {
        Ok(ticket) => ticket,
        Err(e) => return booking_error_response(&e),
    };

    let (court_name, court_address) = resolve_court(&state, &court_id);
    let host_name = resolve_player_name(&state, &host_id);

    Json(ActionReview {
        ticket,
        action: "join".to_string(),
        court_name,
        court_address,
        date,
        time,
        summary: format!("Do you want to join {host_name}'s match?"),
    })
    .into_response()
}

pub async fn request_cancel(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
    Json(req): Json<ActorRequest>,
) -> impl IntoResponse {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "State Lock Error").into_response(),
    };

    let (court_id, host_id, date, time) = match store.get(&booking_id) {
        Some(b) => (
            b.court_id.clone(),
            b.host_id.clone(),
            b.date.clone(),
            b.time.clone(),
        ),
        None => {
            return booking_error_response(&BookingError::UnknownBooking(booking_id));
        }
    };

    let ticket = match store.request_cancel(&booking_id, &req.player_id) {
        Ok(ticket) => ticket,
        Err(e) => return booking_error_response(&e),
    };

    let is_host = host_id == req.player_id;
    let (action, summary) = if is_host {
        ("cancel", "Are you sure you want to cancel this booking?")
    } else {
        ("leave", "Leave this match and hand the slot back?")
    };

    let (court_name, court_address) = resolve_court(&state, &court_id);

    Json(ActionReview {
        ticket,
        action: action.to_string(),
        court_name,
        court_address,
        date,
        time,
        summary: summary.to_string(),
    })
    .into_response()
}

pub async fn confirm_action(
    State(state): State<Arc<AppState>>,
    Path(ticket): Path<u64>,
) -> impl IntoResponse {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "State Lock Error").into_response(),
    };

    match store.confirm(ticket) {
        Ok(outcome) => {
            let result = describe_outcome(outcome);
            info!("Booking {} {}", result.booking_id, result.result);
            Json(result).into_response()
        }
        Err(e) => booking_error_response(&e),
    }
}

pub async fn discard_action(
    State(state): State<Arc<AppState>>,
    Path(ticket): Path<u64>,
) -> impl IntoResponse {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "State Lock Error").into_response(),
    };

    if store.discard(ticket) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        booking_error_response(&BookingError::UnknownTicket)
    }
}

// --- Helpers ---

fn parse_match_kind(req: &CreateBookingRequest) -> MatchKind {
    match req.match_type.as_deref() {
        Some("open") => MatchKind::Open {
            target: req
                .target_skill
                .as_deref()
                .and_then(TargetSkill::parse)
                .unwrap_or(TargetSkill::Any),
        },
        _ => MatchKind::Specific {
            opponent: req.opponent.clone(),
        },
    }
}

fn describe_kind(kind: &MatchKind) -> String {
    match kind {
        MatchKind::Specific { opponent } => match opponent
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            Some(name) => format!("Match against {name}"),
            None => "Match with an unnamed opponent".to_string(),
        },
        MatchKind::Open { target } => {
            format!("Open match, looking for: {}", target.as_str())
        }
    }
}

fn describe_outcome(outcome: ActionOutcome) -> ActionResult {
    match outcome {
        ActionOutcome::Created(booking) => ActionResult {
            result: "created".to_string(),
            booking_id: booking.id,
            message: "Booking confirmed. Your slot is reserved.".to_string(),
        },
        ActionOutcome::Joined(booking) => ActionResult {
            result: "joined".to_string(),
            booking_id: booking.id,
            message: "Match joined successfully! Check your dashboard.".to_string(),
        },
        ActionOutcome::Cancelled { booking_id } => ActionResult {
            result: "cancelled".to_string(),
            booking_id,
            message: "Booking cancelled.".to_string(),
        },
        ActionOutcome::Reopened(booking) => ActionResult {
            result: "reopened".to_string(),
            booking_id: booking.id,
            message: "You left the match. The slot is open again.".to_string(),
        },
    }
}

fn resolve_court(state: &AppState, court_id: &str) -> (String, String) {
    match state.courts.iter().find(|c| c.id == court_id) {
        Some(court) => (court.name.clone(), court.address.clone()),
        None => ("Unknown Court".to_string(), String::new()),
    }
}

fn resolve_player_name(state: &AppState, player_id: &str) -> String {
    state
        .players
        .iter()
        .find(|p| p.id == player_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Unknown Player".to_string())
}

fn build_booking_item(state: &AppState, booking: &Booking, viewer: &str) -> BookingListItem {
    let (court_name, court_address) = resolve_court(state, &booking.court_id);

    BookingListItem {
        id: booking.id.clone(),
        court_id: booking.court_id.clone(),
        court_name,
        court_address,
        date: booking.date.clone(),
        time: booking.time.clone(),
        status: booking.status.as_str().to_string(),
        opponent_label: booking.opponent_label.clone(),
        is_host: booking.host_id == viewer,
        target_skill: booking.target_skill.map(|t| t.as_str().to_string()),
        registered_from: booking.location_at_registration,
    }
}
