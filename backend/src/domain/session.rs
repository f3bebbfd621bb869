//! Scheduled play sessions belonging to a campaign.

use std::fmt;
use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{CampaignId, SessionId};

/// Lifecycle state of a session. New sessions start as `scheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
}

/// Smallest accepted price per player, in currency units.
pub const MIN_PRICE_PER_PLAYER: f64 = 0.5;
/// Largest accepted price per player, in currency units.
pub const MAX_PRICE_PER_PLAYER: f64 = 50.0;

/// Price charged to each player, held as whole cents.
///
/// The range check applies to the amount as submitted; rounding to cents
/// happens afterwards, so `49.999` is accepted and stored as `50`.
///
/// # Examples
/// ```
/// use backend::domain::PricePerPlayer;
///
/// let price = PricePerPlayer::from_amount(19.999).expect("in range");
/// assert_eq!(price.cents(), 2000);
/// assert!(PricePerPlayer::from_amount(0.4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PricePerPlayer(u32);

/// A price outside `0.5..=50`, or not a finite number.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("price per player must be between 0.5 and 50, got {0}")]
pub struct PriceOutOfRange(pub f64);

impl PricePerPlayer {
    pub fn from_amount(amount: f64) -> Result<Self, PriceOutOfRange> {
        if !amount.is_finite() || !(MIN_PRICE_PER_PLAYER..=MAX_PRICE_PER_PLAYER).contains(&amount) {
            return Err(PriceOutOfRange(amount));
        }
        exact_cents(amount).map(Self).ok_or(PriceOutOfRange(amount))
    }

    pub const fn cents(self) -> u32 {
        self.0
    }

    pub fn amount(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

/// Cents nearest to the exact binary value of `amount`, ties upward.
///
/// Rounding the decimal expansion keeps `0.585` (stored as
/// 0.58499999999999996...) at 58 cents, where `(amount * 100.0).round()`
/// would give 59.
fn exact_cents(amount: f64) -> Option<u32> {
    let expansion = format!("{amount:.60}");
    let (whole, fraction) = expansion.split_once('.')?;
    let mut digits = fraction.chars().map(|digit| digit.to_digit(10));
    let tenths = digits.next()??;
    let hundredths = digits.next()??;
    let remainder = digits.next()??;
    let cents = whole.parse::<u32>().ok()? * 100 + tenths * 10 + hundredths;
    Some(if remainder >= 5 { cents + 1 } else { cents })
}

impl fmt::Display for PricePerPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for PricePerPlayer {
    // Whole amounts are written as integers (`20`, not `20.0`).
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_u32(self.0 / 100)
        } else {
            serializer.serialize_f64(self.amount())
        }
    }
}

impl<'de> Deserialize<'de> for PricePerPlayer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Self::from_amount(amount).map_err(serde::de::Error::custom)
    }
}

/// A persisted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub campaign_id: CampaignId,
    pub start_at: DateTime<Utc>,
    pub duration_minutes: NonZeroU32,
    pub slots_total: NonZeroU32,
    pub price_per_player: PricePerPlayer,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
}

/// A validated session request, ready to be attached to a campaign.
///
/// Only produced by `SessionDraft::try_from(SessionPayload)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDraft {
    start_at: DateTime<Utc>,
    duration_minutes: NonZeroU32,
    slots_total: NonZeroU32,
    price_per_player: PricePerPlayer,
}

impl SessionDraft {
    pub(crate) const fn new(
        start_at: DateTime<Utc>,
        duration_minutes: NonZeroU32,
        slots_total: NonZeroU32,
        price_per_player: PricePerPlayer,
    ) -> Self {
        Self {
            start_at,
            duration_minutes,
            slots_total,
            price_per_player,
        }
    }

    pub const fn duration_minutes(&self) -> NonZeroU32 {
        self.duration_minutes
    }

    pub const fn price_per_player(&self) -> PricePerPlayer {
        self.price_per_player
    }

    /// Materialise the session as `scheduled` under `campaign_id`.
    pub fn into_session(
        self,
        id: SessionId,
        campaign_id: CampaignId,
        created_at: DateTime<Utc>,
    ) -> Session {
        Session {
            id,
            campaign_id,
            start_at: self.start_at,
            duration_minutes: self.duration_minutes,
            slots_total: self.slots_total,
            price_per_player: self.price_per_player,
            status: SessionStatus::Scheduled,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    #[rstest]
    #[case::lower_bound(0.5, 50)]
    #[case::upper_bound(50.0, 5000)]
    #[case::rounds_up(19.999, 2000)]
    #[case::rounds_down(12.344, 1234)]
    #[case::rounds_to_upper_bound(49.999, 5000)]
    #[case::binary_below_half_cent(0.585, 58)]
    #[case::binary_below_half_cent_near_sixty(0.595, 59)]
    #[case::binary_below_half_cent_large(2.675, 267)]
    #[case::exact_tie_rounds_up(0.625, 63)]
    fn accepts_prices_in_range(#[case] amount: f64, #[case] cents: u32) {
        let price = PricePerPlayer::from_amount(amount).expect("in range");
        assert_eq!(price.cents(), cents);
    }

    #[rstest]
    #[case::below(0.4)]
    #[case::just_below(0.4999)]
    #[case::above(50.0001)]
    #[case::negative(-3.0)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn rejects_prices_out_of_range(#[case] amount: f64) {
        assert!(PricePerPlayer::from_amount(amount).is_err());
    }

    #[rstest]
    #[case::whole(2000, json!(20))]
    #[case::fractional(1250, json!(12.5))]
    #[case::cents(1999, json!(19.99))]
    fn serialises_price_as_two_decimal_number(#[case] cents: u32, #[case] expected: serde_json::Value) {
        let price = PricePerPlayer(cents);
        assert_eq!(serde_json::to_value(price).expect("serialise"), expected);
        assert_eq!(price.to_string(), format!("{}.{:02}", cents / 100, cents % 100));
    }

    #[rstest]
    fn draft_becomes_a_scheduled_session() {
        let start_at = Utc
            .with_ymd_and_hms(2026, 6, 1, 18, 0, 0)
            .single()
            .expect("valid timestamp");
        let created_at = Utc
            .with_ymd_and_hms(2026, 5, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        let draft = SessionDraft::new(
            start_at,
            NonZeroU32::new(180).expect("non-zero"),
            NonZeroU32::new(5).expect("non-zero"),
            PricePerPlayer::from_amount(12.5).expect("in range"),
        );

        let session = draft.into_session(
            SessionId::from_uuid(Uuid::from_u128(4)),
            CampaignId::from_uuid(Uuid::from_u128(2)),
            created_at,
        );

        assert_eq!(
            serde_json::to_value(&session).expect("serialise"),
            json!({
                "id": "00000000-0000-0000-0000-000000000004",
                "campaignId": "00000000-0000-0000-0000-000000000002",
                "startAt": "2026-06-01T18:00:00Z",
                "durationMinutes": 180,
                "slotsTotal": 5,
                "pricePerPlayer": 12.5,
                "status": "scheduled",
                "createdAt": "2026-05-01T09:00:00Z"
            })
        );
    }
}
