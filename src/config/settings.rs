use crate::domain::models::GeoPoint;

/// Geolocation lookup settings
#[derive(Debug, Clone)]
pub struct GeoSettings {
    pub lookup_url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub default_lat: f64,
    pub default_lng: f64,
}

impl Default for GeoSettings {
    fn default() -> Self {
        Self {
            lookup_url: "http://ip-api.com/json",
            user_agent: "SquashProBooking/1.0",
            timeout_secs: 5,
            // Singapore city centre
            default_lat: 1.3521,
            default_lng: 103.8198,
        }
    }
}

impl GeoSettings {
    pub fn default_location(&self) -> GeoPoint {
        GeoPoint {
            lat: self.default_lat,
            lng: self.default_lng,
        }
    }
}

/// Coach advice (Gemini) settings
#[derive(Debug, Clone)]
pub struct CoachSettings {
    pub api_base_url: &'static str,
    pub model: &'static str,
    pub api_key_env: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
    /// Served whenever the API call fails
    pub fallback_tip: &'static str,
    /// Served when the model answers with an empty body
    pub empty_reply_tip: &'static str,
}

impl Default for CoachSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://generativelanguage.googleapis.com",
            model: "gemini-2.5-flash",
            api_key_env: "GEMINI_API_KEY",
            user_agent: "SquashProBooking/1.0",
            timeout_secs: 30,
            rate_limit_ms: 100, // 10 req/sec
            fallback_tip: "Focus on controlling the T and keeping your opponent moving to the back corners.",
            empty_reply_tip: "Keep your eye on the ball and dominate the T!",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub geo: GeoSettings,
    pub coach: CoachSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            geo: GeoSettings::default(),
            coach: CoachSettings::default(),
        }
    }
}
