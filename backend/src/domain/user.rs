//! Dungeon-master accounts.
//!
//! Users are never registered directly: creating a campaign for an unknown
//! email address creates its DM as a side effect.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Role of a user. Only dungeon masters exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Dm,
}

/// Email address in canonical form: trimmed and lower-cased.
///
/// Two addresses that differ only by case or surrounding whitespace compare
/// equal once normalised.
///
/// # Examples
/// ```
/// use backend::domain::EmailAddress;
///
/// let email = EmailAddress::normalized("  Ana@Example.COM ");
/// assert_eq!(email.as_str(), "ana@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn normalized(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EmailAddress {
    fn from(value: String) -> Self {
        Self::normalized(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted dungeon master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub role: UserRole,
    pub display_name: String,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new DM. `display_name` is stored trimmed.
    pub fn new_dm(
        id: UserId,
        display_name: &str,
        email: EmailAddress,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            role: UserRole::Dm,
            display_name: display_name.trim().to_owned(),
            email,
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
    #[case::mixed_case("Ana@Example.com", "ana@example.com")]
    #[case::padded("\t bob@mail.org  ", "bob@mail.org")]
    fn normalises_email_addresses(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(EmailAddress::normalized(raw).as_str(), expected);
    }

    #[rstest]
    fn serialises_with_camel_case_fields() {
        let created_at = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let user = User::new_dm(
            UserId::from_uuid(Uuid::from_u128(7)),
            "  Ana  ",
            EmailAddress::normalized("ANA@example.com"),
            created_at,
        );

        let value = serde_json::to_value(&user).expect("serialise");

        assert_eq!(
            value,
            json!({
                "id": "00000000-0000-0000-0000-000000000007",
                "role": "dm",
                "displayName": "Ana",
                "email": "ana@example.com",
                "createdAt": "2026-03-01T12:00:00Z"
            })
        );
    }
}
