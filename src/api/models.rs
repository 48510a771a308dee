use serde::{Deserialize, Serialize};

use crate::domain::models::GeoPoint;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListItem {
    pub id: String,
    pub court_id: String,
    pub court_name: String,
    pub court_address: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub opponent_label: String,
    pub is_host: bool,
    pub target_skill: Option<String>,
    pub registered_from: Option<GeoPoint>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListResponse {
    pub items: Vec<BookingListItem>,
    pub total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenMatchItem {
    pub id: String,
    pub court_name: String,
    pub court_address: String,
    pub date: String,
    pub time: String,
    pub host_id: String,
    pub host_name: String,
    pub host_skill_level: Option<String>,
    pub host_rating: Option<f64>,
    pub host_avatar: Option<String>,
    pub target_skill: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenMatchListResponse {
    pub items: Vec<OpenMatchItem>,
    pub total: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub court_id: String,
    pub player_id: String,
    pub date: String,
    pub time: String,
    /// "specific" (default) or "open"
    pub match_type: Option<String>,
    pub opponent: Option<String>,
    pub target_skill: Option<String>,
    pub location: Option<GeoPoint>,
}

/// Body for join and cancel requests
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRequest {
    pub player_id: String,
}

/// Pending action echoed back for the confirmation dialog
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReview {
    pub ticket: u64,
    pub action: String,
    pub court_name: String,
    pub court_address: String,
    pub date: String,
    pub time: String,
    pub summary: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub result: String,
    pub booking_id: String,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    pub player_skill: String,
    pub opponent_skill: Option<String>,
    pub context: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResponse {
    pub advice: String,
}
