use anyhow::Result;
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::config::{get_courts, get_players};
use crate::domain::models::{GeoPoint, TargetSkill};
use crate::geo::Locator;
use crate::store::{BookingDraft, BookingStore, MatchKind};

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let session_location = self.resolve_location().await;

        let mut store = BookingStore::new();
        seed_demo_matches(&mut store)?;

        let state = Arc::new(AppState {
            store: Mutex::new(store),
            config: self.config.clone(),
            courts: get_courts(),
            players: get_players(),
            session_location,
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn resolve_location(&self) -> GeoPoint {
        match Locator::new(self.config.geo.clone()) {
            Ok(mut locator) => locator.locate().await,
            Err(e) => {
                warn!("Failed to build location client: {:?}", e);
                self.config.geo.default_location()
            }
        }
    }
}

/// Open matches other players are hosting when the server starts, so the
/// find-match view has something to show. Seeds go through the same
/// request/confirm path as user bookings.
fn seed_demo_matches(store: &mut BookingStore) -> Result<()> {
    let drafts = vec![
        BookingDraft {
            court_id: "c1".to_string(),
            host_id: "p1".to_string(),
            date: "2024-11-15".to_string(),
            time: "18:00".to_string(),
            kind: MatchKind::Open {
                target: TargetSkill::Advanced,
            },
            location: None,
        },
        BookingDraft {
            court_id: "c3".to_string(),
            host_id: "p2".to_string(),
            date: "2024-11-16".to_string(),
            time: "10:00".to_string(),
            kind: MatchKind::Open {
                target: TargetSkill::Intermediate,
            },
            location: None,
        },
    ];

    let count = drafts.len();
    for draft in drafts {
        let ticket = store.request_create(draft)?;
        store.confirm(ticket)?;
    }

    info!("Seeded {} demo open matches", count);
    Ok(())
}
