//! Shared fixtures for booking integration tests.

use std::sync::Arc;

use backend::domain::ports::{DomainStore, SequentialIdGenerator};
use backend::domain::CampaignService;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;

/// Clock pinned to 2026-03-14T17:00:00Z.
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 17, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }
}

/// Service over `store` with sequential ids and the fixture clock.
pub fn service_over<S: DomainStore>(store: Arc<S>) -> CampaignService<S> {
    CampaignService::new(
        store,
        Arc::new(SequentialIdGenerator::default()),
        Arc::new(FixtureClock),
    )
}

pub fn online_campaign(email: &str) -> Value {
    serde_json::json!({
        "dmName": "Ana",
        "dmEmail": email,
        "title": "La Tumba del Rey",
        "description": "Terror gótico",
        "mode": "online",
        "onlineUrl": "https://meet.example/tumba"
    })
}

pub fn evening_session(price: f64) -> Value {
    serde_json::json!({
        "startAt": "2026-04-01T18:00",
        "durationMinutes": 180,
        "slotsTotal": 5,
        "pricePerPlayer": price
    })
}
