use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label shown while a booking has no named opponent
pub const OPEN_MATCH_LABEL: &str = "Open Match";

/// Label shown once a guest has claimed an open slot
pub const OPPONENT_JOINED_LABEL: &str = "Opponent Joined";

/// Self-reported player skill tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Pro,
}

impl SkillLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Beginner" => Some(SkillLevel::Beginner),
            "Intermediate" => Some(SkillLevel::Intermediate),
            "Advanced" => Some(SkillLevel::Advanced),
            "Pro" => Some(SkillLevel::Pro),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Pro => "Pro",
        }
    }
}

/// Skill tier an open-match host is willing to play against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetSkill {
    Any,
    Beginner,
    Intermediate,
    Advanced,
    Pro,
}

impl TargetSkill {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Any" => Some(TargetSkill::Any),
            other => SkillLevel::parse(other).map(TargetSkill::from),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetSkill::Any => "Any",
            TargetSkill::Beginner => "Beginner",
            TargetSkill::Intermediate => "Intermediate",
            TargetSkill::Advanced => "Advanced",
            TargetSkill::Pro => "Pro",
        }
    }

    /// An "Any" target stays visible under every concrete filter level.
    pub fn accepts(&self, wanted: SkillLevel) -> bool {
        *self == TargetSkill::Any || *self == TargetSkill::from(wanted)
    }
}

impl From<SkillLevel> for TargetSkill {
    fn from(level: SkillLevel) -> Self {
        match level {
            SkillLevel::Beginner => TargetSkill::Beginner,
            SkillLevel::Intermediate => TargetSkill::Intermediate,
            SkillLevel::Advanced => TargetSkill::Advanced,
            SkillLevel::Pro => TargetSkill::Pro,
        }
    }
}

/// Skill filter selected in the find-match view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillFilter {
    All,
    Level(SkillLevel),
}

impl SkillFilter {
    /// Unrecognized values fall back to All rather than erroring.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("All") => SkillFilter::All,
            Some(other) => SkillLevel::parse(other)
                .map(SkillFilter::Level)
                .unwrap_or(SkillFilter::All),
        }
    }
}

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Squash centre reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: GeoPoint,
}

/// Player reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub skill_level: SkillLevel,
    pub rating: f64, // 0 to 5
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Open,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Open => "OPEN",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

/// A court reservation and its match lifecycle state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub court_id: String,
    pub host_id: String,
    /// Set once a guest claims an open slot; cleared again if they leave
    pub guest_id: Option<String>,
    pub date: String,
    pub time: String,
    pub registered_at: DateTime<Utc>,
    pub location_at_registration: Option<GeoPoint>,
    pub opponent_label: String,
    /// Only meaningful while status is Open
    pub target_skill: Option<TargetSkill>,
    pub status: BookingStatus,
}

impl Booking {
    /// True for the host and for a joined guest.
    pub fn involves(&self, player_id: &str) -> bool {
        self.host_id == player_id || self.guest_id.as_deref() == Some(player_id)
    }

    pub fn is_open(&self) -> bool {
        self.status == BookingStatus::Open
    }

    pub fn is_active(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}
