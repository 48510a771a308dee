use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;

pub async fn get_courts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.courts.clone())
}

pub async fn get_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.players.clone())
}
