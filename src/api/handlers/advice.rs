use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{AdviceRequest, AdviceResponse};
use crate::coach::CoachClient;
use crate::domain::models::SkillLevel;
use super::AppState;

pub async fn get_advice(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AdviceRequest>,
) -> impl IntoResponse {
    let Some(player_skill) = SkillLevel::parse(&req.player_skill) else {
        return (
            StatusCode::BAD_REQUEST,
            format!("Unknown skill level: {}", req.player_skill),
        )
            .into_response();
    };
    let opponent_skill = req.opponent_skill.as_deref().and_then(SkillLevel::parse);

    let mut coach = match CoachClient::new(state.config.coach.clone()) {
        Ok(coach) => coach,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "Coach Client Error").into_response();
        }
    };

    let advice = coach.advice(player_skill, opponent_skill, &req.context).await;

    Json(AdviceResponse { advice }).into_response()
}
