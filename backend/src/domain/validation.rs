//! Domain validator for campaign and session requests.
//!
//! Validation never fails fast: every rule runs and every broken rule is
//! reported, in a fixed order. A payload that passes becomes a typed draft,
//! and the store only accepts drafts.

mod payload;

use std::fmt;
use std::num::NonZeroU32;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde::Serialize;
use serde_json::Number;

pub use self::payload::{CampaignPayload, SessionPayload};
use super::{CampaignDraft, CampaignMode, CampaignVenue, PricePerPlayer, SessionDraft};

const DM_NAME_MIN: usize = 2;
const TITLE_MIN: usize = 3;
const DESCRIPTION_MIN: usize = 10;
const LOCATION_TEXT_MIN: usize = 3;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// One broken rule, named after the payload field it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Violation {
    #[error("dmName is required and must have at least 2 characters.")]
    DmName,
    #[error("dmEmail is not a valid email address.")]
    DmEmail,
    #[error("title is required and must have at least 3 characters.")]
    Title,
    #[error("description must have at least 10 characters.")]
    Description,
    #[error("mode must be online or presencial.")]
    Mode,
    #[error("onlineUrl must be an http(s) URL for online campaigns.")]
    OnlineUrl,
    #[error("locationText is required for presencial campaigns.")]
    LocationText,
    #[error("startAt must be a valid date.")]
    StartAt,
    #[error("durationMinutes must be an integer greater than 0.")]
    DurationMinutes,
    #[error("slotsTotal must be an integer greater than 0.")]
    SlotsTotal,
    #[error("pricePerPlayer must be between 0.5 and 50.")]
    PricePerPlayer,
}

impl Violation {
    /// Payload field, in its camelCase wire spelling.
    pub const fn field(self) -> &'static str {
        match self {
            Self::DmName => "dmName",
            Self::DmEmail => "dmEmail",
            Self::Title => "title",
            Self::Description => "description",
            Self::Mode => "mode",
            Self::OnlineUrl => "onlineUrl",
            Self::LocationText => "locationText",
            Self::StartAt => "startAt",
            Self::DurationMinutes => "durationMinutes",
            Self::SlotsTotal => "slotsTotal",
            Self::PricePerPlayer => "pricePerPlayer",
        }
    }
}

impl Serialize for Violation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a> {
            field: &'a str,
            message: String,
        }
        Wire {
            field: self.field(),
            message: self.to_string(),
        }
        .serialize(serializer)
    }
}

/// Non-empty, ordered list of violations for one payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|violation| violation.field())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut messages = self.0.iter();
        if let Some(first) = messages.next() {
            write!(f, "{first}")?;
        }
        for message in messages {
            write!(f, " {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Every rule a campaign payload breaks, in rule order.
///
/// # Examples
/// ```
/// use backend::domain::{CampaignPayload, Violation, validate_campaign};
///
/// let violations = validate_campaign(&CampaignPayload::default());
/// assert_eq!(violations.first(), Some(&Violation::DmName));
/// assert!(!violations.contains(&Violation::OnlineUrl));
/// ```
pub fn validate_campaign(payload: &CampaignPayload) -> Vec<Violation> {
    check_campaign(payload).err().unwrap_or_default()
}

/// Every rule a session payload breaks, in rule order.
pub fn validate_session(payload: &SessionPayload) -> Vec<Violation> {
    check_session(payload).err().unwrap_or_default()
}

impl TryFrom<CampaignPayload> for CampaignDraft {
    type Error = ValidationErrors;

    fn try_from(payload: CampaignPayload) -> Result<Self, Self::Error> {
        check_campaign(&payload).map_err(ValidationErrors)
    }
}

impl TryFrom<SessionPayload> for SessionDraft {
    type Error = ValidationErrors;

    fn try_from(payload: SessionPayload) -> Result<Self, Self::Error> {
        check_session(&payload).map_err(ValidationErrors)
    }
}

fn check_campaign(payload: &CampaignPayload) -> Result<CampaignDraft, Vec<Violation>> {
    let mut violations = Vec::new();

    let dm_name = require(
        &mut violations,
        text_of_min_len(payload.dm_name.as_deref(), DM_NAME_MIN),
        Violation::DmName,
    );
    let dm_email = require(
        &mut violations,
        payload.dm_email.as_deref().filter(|email| email_regex().is_match(email)),
        Violation::DmEmail,
    );
    let title = require(
        &mut violations,
        text_of_min_len(payload.title.as_deref(), TITLE_MIN),
        Violation::Title,
    );
    let description = require(
        &mut violations,
        text_of_min_len(payload.description.as_deref(), DESCRIPTION_MIN),
        Violation::Description,
    );
    let mode = payload.mode.as_deref().and_then(|mode| mode.parse::<CampaignMode>().ok());
    if mode.is_none() {
        violations.push(Violation::Mode);
    }
    let venue = match mode {
        Some(CampaignMode::Online) => {
            let url = payload.online_url.as_deref().filter(|url| is_http_url(url));
            if url.is_none() {
                violations.push(Violation::OnlineUrl);
            }
            url.map(|url| CampaignVenue::Online {
                url: url.trim().to_owned(),
            })
        }
        Some(CampaignMode::Presencial) => {
            let location = text_of_min_len(payload.location_text.as_deref(), LOCATION_TEXT_MIN);
            if location.is_none() {
                violations.push(Violation::LocationText);
            }
            location.map(|location| CampaignVenue::Presencial {
                location_text: location.trim().to_owned(),
            })
        }
        None => None,
    };

    match (dm_name, dm_email, title, description, venue) {
        (Some(dm_name), Some(dm_email), Some(title), Some(description), Some(venue))
            if violations.is_empty() =>
        {
            Ok(CampaignDraft::new(dm_name, dm_email, title, description, venue))
        }
        _ => Err(violations),
    }
}

fn check_session(payload: &SessionPayload) -> Result<SessionDraft, Vec<Violation>> {
    let mut violations = Vec::new();

    let start_at = payload.start_at.as_deref().and_then(parse_start_at);
    if start_at.is_none() {
        violations.push(Violation::StartAt);
    }
    let duration = payload.duration_minutes.as_ref().and_then(positive_integer);
    if duration.is_none() {
        violations.push(Violation::DurationMinutes);
    }
    let slots = payload.slots_total.as_ref().and_then(positive_integer);
    if slots.is_none() {
        violations.push(Violation::SlotsTotal);
    }
    let price = payload
        .price_per_player
        .as_ref()
        .and_then(Number::as_f64)
        .and_then(|amount| PricePerPlayer::from_amount(amount).ok());
    if price.is_none() {
        violations.push(Violation::PricePerPlayer);
    }

    match (start_at, duration, slots, price) {
        (Some(start_at), Some(duration), Some(slots), Some(price)) => {
            Ok(SessionDraft::new(start_at, duration, slots, price))
        }
        _ => Err(violations),
    }
}

fn require<'a>(
    violations: &mut Vec<Violation>,
    value: Option<&'a str>,
    violation: Violation,
) -> Option<&'a str> {
    if value.is_none() {
        violations.push(violation);
    }
    value
}

fn text_of_min_len(value: Option<&str>, min: usize) -> Option<&str> {
    // Lengths count UTF-16 code units, so one astral emoji is two.
    value.filter(|text| text.trim().encode_utf16().count() >= min)
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Accepts integral JSON numbers, including `60.0`, in `1..=u32::MAX`.
fn positive_integer(value: &Number) -> Option<NonZeroU32> {
    if let Some(whole) = value.as_u64() {
        return u32::try_from(whole).ok().and_then(NonZeroU32::new);
    }
    if value.is_i64() {
        return None;
    }
    let float = value.as_f64()?;
    if float.fract() != 0.0 || !(1.0..=f64::from(u32::MAX)).contains(&float) {
        return None;
    }
    // Integral and within u32 range, checked above.
    NonZeroU32::new(float as u32)
}

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a session start time.
///
/// RFC 3339, RFC 2822 and ISO-like timestamps with a `+hhmm` offset keep
/// their offset. A naive `YYYY-MM-DD[T ]HH:MM[:SS]` value, or a bare
/// `YYYY-MM-DD` date, is read as UTC.
pub fn parse_start_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let with_offset = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(raw, format).ok())
        });
    if let Some(parsed) = with_offset {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests;
