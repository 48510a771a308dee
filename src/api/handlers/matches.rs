use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{OpenMatchItem, OpenMatchListResponse};
use crate::domain::models::{Booking, SkillFilter, TargetSkill};
use crate::matching;
use super::{AppState, ViewerParams};

pub async fn get_open_matches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewerParams>,
) -> impl IntoResponse {
    let Some(player_id) = params.player_id else {
        return (StatusCode::BAD_REQUEST, "playerId query parameter is required").into_response();
    };

    let filter = SkillFilter::parse(params.skill.as_deref());

    let store = match state.store.lock() {
        Ok(store) => store,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "State Lock Error").into_response(),
    };

    let items: Vec<OpenMatchItem> = matching::open_matches(store.bookings(), &player_id, filter)
        .into_iter()
        .map(|booking| build_open_match_item(&state, booking))
        .collect();
    let total = items.len();

    Json(OpenMatchListResponse { items, total }).into_response()
}

fn build_open_match_item(state: &AppState, booking: &Booking) -> OpenMatchItem {
    let court = state.courts.iter().find(|c| c.id == booking.court_id);
    let host = state.players.iter().find(|p| p.id == booking.host_id);

    OpenMatchItem {
        id: booking.id.clone(),
        court_name: court
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown Court".to_string()),
        court_address: court.map(|c| c.address.clone()).unwrap_or_default(),
        date: booking.date.clone(),
        time: booking.time.clone(),
        host_id: booking.host_id.clone(),
        host_name: host
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Unknown Player".to_string()),
        host_skill_level: host.map(|p| p.skill_level.as_str().to_string()),
        host_rating: host.map(|p| p.rating),
        host_avatar: host.map(|p| p.avatar.clone()),
        target_skill: booking
            .target_skill
            .unwrap_or(TargetSkill::Any)
            .as_str()
            .to_string(),
    }
}
