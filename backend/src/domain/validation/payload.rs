//! Untrusted request payloads.
//!
//! Fields are read leniently: a field holding the wrong JSON type reads as
//! absent, so it is reported by the validator instead of failing the whole
//! payload. Unknown fields are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Raw body of a create-campaign request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignPayload {
    #[serde(deserialize_with = "lenient_string")]
    pub dm_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub dm_email: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub mode: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub online_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub location_text: Option<String>,
}

/// Raw body of a create-session request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionPayload {
    #[serde(deserialize_with = "lenient_string")]
    pub start_at: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub duration_minutes: Option<Number>,
    #[serde(deserialize_with = "lenient_number")]
    pub slots_total: Option<Number>,
    #[serde(deserialize_with = "lenient_number")]
    pub price_per_player: Option<Number>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => Some(number),
        _ => None,
    })
}
