//! Lookups, listings and integrity checks over in-memory snapshots.

use std::num::NonZeroU32;

use chrono::{DateTime, TimeZone, Utc};
use rstest::{fixture, rstest};
use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::domain::{CampaignVenue, PricePerPlayer, SessionStatus, UserRole};

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 1, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn user(n: u128, email: &str) -> User {
    User {
        id: UserId::from_uuid(Uuid::from_u128(n)),
        role: UserRole::Dm,
        display_name: "Ana".to_owned(),
        email: EmailAddress::normalized(email),
        created_at: at(8),
    }
}

fn campaign(n: u128, dm: u128) -> Campaign {
    Campaign {
        id: CampaignId::from_uuid(Uuid::from_u128(n)),
        dm_id: UserId::from_uuid(Uuid::from_u128(dm)),
        title: format!("Campaign {n}"),
        description: "A long enough description".to_owned(),
        venue: CampaignVenue::Presencial {
            location_text: "Madrid".to_owned(),
        },
        created_at: at(9),
    }
}

fn session(n: u128, campaign: u128, hour: u32) -> Session {
    Session {
        id: SessionId::from_uuid(Uuid::from_u128(n)),
        campaign_id: CampaignId::from_uuid(Uuid::from_u128(campaign)),
        start_at: at(hour),
        duration_minutes: NonZeroU32::MIN,
        slots_total: NonZeroU32::MIN,
        price_per_player: PricePerPlayer::from_amount(10.0).expect("in range"),
        status: SessionStatus::Scheduled,
        created_at: at(10),
    }
}

#[fixture]
fn snapshot() -> StoreSnapshot {
    StoreSnapshot {
        users: vec![user(1, "ana@example.com")],
        campaigns: vec![campaign(10, 1), campaign(11, 1)],
        sessions: vec![session(20, 10, 18), session(21, 11, 19), session(22, 10, 20)],
    }
}

#[rstest]
fn finds_users_by_normalised_email(snapshot: StoreSnapshot) {
    let found = snapshot.find_user_by_email(&EmailAddress::normalized(" ANA@example.COM"));
    assert_eq!(found.map(|user| user.id), Some(UserId::from_uuid(Uuid::from_u128(1))));
    assert!(
        snapshot
            .find_user_by_email(&EmailAddress::normalized("bob@example.com"))
            .is_none()
    );
}

#[rstest]
fn campaign_views_embed_sessions_in_insertion_order(snapshot: StoreSnapshot) {
    let views = snapshot.campaign_views();

    assert_eq!(views.len(), 2);
    let first: Vec<_> = views[0].sessions.iter().map(|s| s.id.as_uuid().as_u128()).collect();
    assert_eq!(first, vec![20, 22]);
    assert_eq!(views[1].sessions.len(), 1);
}

#[rstest]
fn campaign_view_serialises_flat_with_sessions(snapshot: StoreSnapshot) {
    let value = serde_json::to_value(&snapshot.campaign_views()[1]).expect("serialise");

    assert_eq!(value["id"], json!("00000000-0000-0000-0000-00000000000b"));
    assert_eq!(value["mode"], json!("presencial"));
    assert_eq!(value["onlineUrl"], serde_json::Value::Null);
    assert_eq!(value["sessions"][0]["campaignId"], value["id"]);
}

#[rstest]
fn empty_document_reads_as_default() {
    let parsed: StoreSnapshot = serde_json::from_value(json!({
        "users": [],
        "campaigns": [],
        "sessions": []
    }))
    .expect("deserialise");
    assert_eq!(parsed, StoreSnapshot::default());
    assert_eq!(
        serde_json::to_value(&parsed).expect("serialise"),
        json!({"users": [], "campaigns": [], "sessions": []})
    );
}

#[rstest]
fn consistent_snapshot_passes_integrity_check(snapshot: StoreSnapshot) {
    assert_eq!(snapshot.check_integrity(), Ok(()));
}

#[rstest]
fn duplicate_email_is_reported(mut snapshot: StoreSnapshot) {
    snapshot.users.push(user(2, "Ana@Example.com"));

    assert!(matches!(
        snapshot.check_integrity(),
        Err(SnapshotIntegrityError::DuplicateEmail { .. })
    ));
}

#[rstest]
fn dangling_dm_reference_is_reported(mut snapshot: StoreSnapshot) {
    snapshot.campaigns.push(campaign(12, 99));

    assert!(matches!(
        snapshot.check_integrity(),
        Err(SnapshotIntegrityError::UnknownDm { .. })
    ));
}

#[rstest]
fn dangling_campaign_reference_is_reported(mut snapshot: StoreSnapshot) {
    snapshot.sessions.push(session(23, 77, 21));

    assert!(matches!(
        snapshot.check_integrity(),
        Err(SnapshotIntegrityError::UnknownCampaign { .. })
    ));
}

#[rstest]
fn reused_identifier_is_reported(mut snapshot: StoreSnapshot) {
    snapshot.sessions.push(session(10, 10, 21));

    assert_eq!(
        snapshot.check_integrity(),
        Err(SnapshotIntegrityError::DuplicateId {
            id: "00000000-0000-0000-0000-00000000000a".to_owned()
        })
    );
}
