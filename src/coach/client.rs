use anyhow::{Context, Result};
use log::warn;
use serde_json::{json, Value};

use crate::config::settings::CoachSettings;
use crate::domain::models::SkillLevel;
use crate::http::OutboundClient;

/// Pre-match advice client backed by the Gemini API.
///
/// Advice is cosmetic: nothing here touches booking state, and every failure
/// degrades to a canned tip instead of an error.
pub struct CoachClient {
    client: OutboundClient,
    settings: CoachSettings,
}

impl CoachClient {
    pub fn new(settings: CoachSettings) -> Result<Self> {
        let client = OutboundClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;
        Ok(Self { client, settings })
    }

    /// Fetch a short tactical tip. Never fails: a missing API key, transport
    /// error, or unusable reply all fall back to the configured tips.
    pub async fn advice(
        &mut self,
        player_skill: SkillLevel,
        opponent_skill: Option<SkillLevel>,
        context: &str,
    ) -> String {
        let prompt = build_prompt(player_skill, opponent_skill, context);

        match self.generate(&prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => self.settings.empty_reply_tip.to_string(),
            Err(e) => {
                warn!("Coach advice unavailable, serving fallback: {:?}", e);
                self.settings.fallback_tip.to_string()
            }
        }
    }

    async fn generate(&mut self, prompt: &str) -> Result<Option<String>> {
        let api_key = std::env::var(self.settings.api_key_env)
            .with_context(|| format!("{} is not set", self.settings.api_key_env))?;

        let url = self.build_generate_url(&api_key);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self.client.post_json(&url, &body).await?;

        if !response.status().is_success() {
            anyhow::bail!("Gemini API returned status: {}", response.status());
        }

        let data: Value = response.json().await?;
        Ok(extract_text(&data))
    }

    fn build_generate_url(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.settings.api_base_url, self.settings.model, api_key
        )
    }
}

/// Pull the first candidate's text out of a generateContent response.
fn extract_text(data: &Value) -> Option<String> {
    let text = data
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn build_prompt(
    player_skill: SkillLevel,
    opponent_skill: Option<SkillLevel>,
    context: &str,
) -> String {
    let opponent_line = opponent_skill
        .map(|skill| format!("My opponent's skill level is {}.\n", skill.as_str()))
        .unwrap_or_default();

    format!(
        "You are a world-class Squash Coach.\n\
         My skill level is {}.\n\
         {}\n\
         The user is asking: \"{}\"\n\n\
         Provide a concise, tactical, and motivating tip (max 3 sentences) to help me win or improve.\n\
         Focus on court positioning, shot selection, or mental game.",
        player_skill.as_str(),
        opponent_line,
        context
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prompt_mentions_both_skill_levels() {
        let prompt = build_prompt(
            SkillLevel::Intermediate,
            Some(SkillLevel::Advanced),
            "How should I prepare?",
        );
        assert!(prompt.contains("My skill level is Intermediate."));
        assert!(prompt.contains("My opponent's skill level is Advanced."));
        assert!(prompt.contains("How should I prepare?"));
    }

    #[test]
    fn prompt_skips_unknown_opponent() {
        let prompt = build_prompt(SkillLevel::Beginner, None, "Warm-up routine?");
        assert!(!prompt.contains("opponent's skill level"));
    }

    #[test]
    fn extracts_first_candidate_text() {
        let data = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hold the T." }] }
            }]
        });
        assert_eq!(extract_text(&data), Some("Hold the T.".to_string()));
    }

    #[test]
    fn empty_or_missing_text_yields_none() {
        assert_eq!(extract_text(&json!({})), None);
        let blank = json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
        });
        assert_eq!(extract_text(&blank), None);
    }
}
