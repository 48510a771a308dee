use anyhow::Result;
use log::info;
use serde::Deserialize;

use crate::config::settings::GeoSettings;
use crate::domain::models::GeoPoint;
use crate::http::OutboundClient;

/// Coarse IP-based location lookup, run once at startup.
pub struct Locator {
    client: OutboundClient,
    settings: GeoSettings,
}

/// ip-api.com payload, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct LookupResponse {
    status: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

impl Locator {
    pub fn new(settings: GeoSettings) -> Result<Self> {
        // A single lookup needs no pacing.
        let client = OutboundClient::new(settings.user_agent, settings.timeout_secs, 0)?;
        Ok(Self { client, settings })
    }

    /// Resolve a coordinate, falling back to the configured default
    /// (Singapore) when the lookup fails or times out.
    pub async fn locate(&mut self) -> GeoPoint {
        match self.fetch_current().await {
            Ok(point) => {
                info!("Resolved session location: {:.4}, {:.4}", point.lat, point.lng);
                point
            }
            Err(e) => {
                let fallback = self.settings.default_location();
                info!(
                    "Using default location ({:.4}, {:.4}). Reason: {}",
                    fallback.lat, fallback.lng, e
                );
                fallback
            }
        }
    }

    async fn fetch_current(&mut self) -> Result<GeoPoint> {
        let response = self.client.get(self.settings.lookup_url).await?;

        if !response.status().is_success() {
            anyhow::bail!("Location service returned status: {}", response.status());
        }

        let data: LookupResponse = response.json().await?;
        parse_lookup(data)
    }
}

fn parse_lookup(data: LookupResponse) -> Result<GeoPoint> {
    if data.status != "success" {
        anyhow::bail!("Location service reported status: {}", data.status);
    }
    Ok(GeoPoint {
        lat: data.lat,
        lng: data.lon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_lookup_maps_to_geo_point() {
        let data = LookupResponse {
            status: "success".to_string(),
            lat: 1.3069,
            lon: 103.8760,
        };
        let point = parse_lookup(data).unwrap();
        assert_eq!(point.lat, 1.3069);
        assert_eq!(point.lng, 103.8760);
    }

    #[test]
    fn failed_lookup_is_an_error() {
        let data = LookupResponse {
            status: "fail".to_string(),
            lat: 0.0,
            lon: 0.0,
        };
        assert!(parse_lookup(data).is_err());
    }
}
