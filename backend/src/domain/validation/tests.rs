//! Rule-by-rule coverage of the campaign and session validators.

use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;

fn campaign_payload(value: Value) -> CampaignPayload {
    serde_json::from_value(value).expect("payload objects always deserialise")
}

fn session_payload(value: Value) -> SessionPayload {
    serde_json::from_value(value).expect("payload objects always deserialise")
}

#[fixture]
fn online_campaign() -> Value {
    json!({
        "dmName": "Ana",
        "dmEmail": "Ana@Example.com",
        "title": "La Tumba",
        "description": "Una campaña de terror gótico",
        "mode": "online",
        "onlineUrl": "https://meet.example/table"
    })
}

#[fixture]
fn valid_session() -> Value {
    json!({
        "startAt": "2026-06-01T18:00:00Z",
        "durationMinutes": 180,
        "slotsTotal": 5,
        "pricePerPlayer": 12.5
    })
}

fn with_field(mut payload: Value, field: &str, value: Value) -> Value {
    payload[field] = value;
    payload
}

#[rstest]
fn valid_campaign_has_no_violations(online_campaign: Value) {
    assert!(validate_campaign(&campaign_payload(online_campaign)).is_empty());
}

#[rstest]
fn empty_campaign_reports_every_required_field_at_once() {
    let violations = validate_campaign(&CampaignPayload::default());
    assert_eq!(
        violations,
        vec![
            Violation::DmName,
            Violation::DmEmail,
            Violation::Title,
            Violation::Description,
            Violation::Mode,
        ]
    );
}

#[rstest]
#[case::short_name("dmName", json!(" A "), Violation::DmName)]
#[case::name_wrong_type("dmName", json!(42), Violation::DmName)]
#[case::email_without_domain("dmEmail", json!("ana@example"), Violation::DmEmail)]
#[case::email_with_space("dmEmail", json!("ana maria@example.com"), Violation::DmEmail)]
#[case::short_title("title", json!("ab "), Violation::Title)]
#[case::short_description("description", json!("  corta   "), Violation::Description)]
#[case::unknown_mode("mode", json!("hybrid"), Violation::Mode)]
#[case::capitalised_mode("mode", json!("Online"), Violation::Mode)]
#[case::not_a_url("onlineUrl", json!("not-a-url"), Violation::OnlineUrl)]
#[case::ftp_url("onlineUrl", json!("ftp://files.example"), Violation::OnlineUrl)]
#[case::missing_url("onlineUrl", Value::Null, Violation::OnlineUrl)]
fn single_broken_rule_is_reported_alone(
    online_campaign: Value,
    #[case] field: &str,
    #[case] value: Value,
    #[case] expected: Violation,
) {
    let payload = campaign_payload(with_field(online_campaign, field, value));
    assert_eq!(validate_campaign(&payload), vec![expected]);
}

#[rstest]
#[case::astral_emoji_name("dmName", "\u{1F409}")]
#[case::emoji_and_letter_title("title", "\u{1F3B2}a")]
fn lengths_count_utf16_units(online_campaign: Value, #[case] field: &str, #[case] text: &str) {
    let payload = campaign_payload(with_field(online_campaign, field, json!(text)));

    assert!(validate_campaign(&payload).is_empty());
}

#[rstest]
fn single_bmp_character_name_is_too_short(online_campaign: Value) {
    let payload = campaign_payload(with_field(online_campaign, "dmName", json!("\u{00C1}")));

    assert_eq!(validate_campaign(&payload), vec![Violation::DmName]);
}

#[rstest]
fn presencial_without_location_names_only_location_text(online_campaign: Value) {
    let payload = campaign_payload(with_field(online_campaign, "mode", json!("presencial")));

    let violations = validate_campaign(&payload);

    assert_eq!(violations, vec![Violation::LocationText]);
}

#[rstest]
fn invalid_mode_skips_venue_rules(online_campaign: Value) {
    let payload = campaign_payload(with_field(online_campaign, "mode", json!("hybrid")));
    let payload = CampaignPayload {
        online_url: None,
        ..payload
    };

    assert_eq!(validate_campaign(&payload), vec![Violation::Mode]);
}

#[rstest]
fn draft_keeps_only_the_venue_of_its_mode(online_campaign: Value) {
    let payload = campaign_payload(with_field(
        online_campaign,
        "locationText",
        json!("Bar Dragón"),
    ));

    let draft = CampaignDraft::try_from(payload).expect("valid payload");

    assert_eq!(
        draft.venue(),
        &CampaignVenue::Online {
            url: "https://meet.example/table".to_owned()
        }
    );
    assert_eq!(draft.dm_email().as_str(), "ana@example.com");
}

#[rstest]
fn draft_conversion_returns_all_violations() {
    let payload = campaign_payload(json!({ "mode": "presencial", "title": "Ok title" }));

    let err = CampaignDraft::try_from(payload).expect_err("invalid payload");

    assert_eq!(
        err.fields().collect::<Vec<_>>(),
        vec!["dmName", "dmEmail", "description", "locationText"]
    );
}

#[rstest]
fn violations_serialise_with_field_and_message() {
    let errors = ValidationErrors(vec![Violation::OnlineUrl]);
    assert_eq!(
        serde_json::to_value(&errors).expect("serialise"),
        json!([{
            "field": "onlineUrl",
            "message": "onlineUrl must be an http(s) URL for online campaigns."
        }])
    );
    assert_eq!(
        errors.to_string(),
        "onlineUrl must be an http(s) URL for online campaigns."
    );
}

#[rstest]
fn valid_session_has_no_violations(valid_session: Value) {
    assert!(validate_session(&session_payload(valid_session)).is_empty());
}

#[rstest]
fn empty_session_reports_every_field() {
    assert_eq!(
        validate_session(&SessionPayload::default()),
        vec![
            Violation::StartAt,
            Violation::DurationMinutes,
            Violation::SlotsTotal,
            Violation::PricePerPlayer,
        ]
    );
}

#[rstest]
#[case::unparseable_date("startAt", json!("next friday"), Violation::StartAt)]
#[case::date_as_number("startAt", json!(1_717_000_000), Violation::StartAt)]
#[case::zero_duration("durationMinutes", json!(0), Violation::DurationMinutes)]
#[case::negative_duration("durationMinutes", json!(-30), Violation::DurationMinutes)]
#[case::fractional_duration("durationMinutes", json!(90.5), Violation::DurationMinutes)]
#[case::duration_as_string("durationMinutes", json!("90"), Violation::DurationMinutes)]
#[case::zero_slots("slotsTotal", json!(0), Violation::SlotsTotal)]
#[case::huge_slots("slotsTotal", json!(5_000_000_000_u64), Violation::SlotsTotal)]
#[case::price_too_low("pricePerPlayer", json!(0.4), Violation::PricePerPlayer)]
#[case::price_too_high("pricePerPlayer", json!(50.0001), Violation::PricePerPlayer)]
#[case::price_as_string("pricePerPlayer", json!("12"), Violation::PricePerPlayer)]
fn single_broken_session_rule_is_reported_alone(
    valid_session: Value,
    #[case] field: &str,
    #[case] value: Value,
    #[case] expected: Violation,
) {
    let payload = session_payload(with_field(valid_session, field, value));
    assert_eq!(validate_session(&payload), vec![expected]);
}

#[rstest]
fn integral_floats_count_as_integers(valid_session: Value) {
    let payload = session_payload(with_field(valid_session, "durationMinutes", json!(60.0)));

    let draft = SessionDraft::try_from(payload).expect("valid payload");

    assert_eq!(draft.duration_minutes().get(), 60);
}

#[rstest]
fn session_draft_rounds_price_to_cents(valid_session: Value) {
    let payload = session_payload(with_field(valid_session, "pricePerPlayer", json!(19.999)));

    let draft = SessionDraft::try_from(payload).expect("valid payload");

    assert_eq!(draft.price_per_player().cents(), 2000);
}

#[rstest]
#[case::rfc3339_utc("2026-06-01T18:00:00Z", (2026, 6, 1, 18, 0))]
#[case::rfc3339_offset("2026-06-01T20:00:00+02:00", (2026, 6, 1, 18, 0))]
#[case::naive_seconds("2026-06-01T18:00:00", (2026, 6, 1, 18, 0))]
#[case::naive_minutes("2026-06-01T18:00", (2026, 6, 1, 18, 0))]
#[case::bare_date("2026-06-01", (2026, 6, 1, 0, 0))]
#[case::space_minutes("2026-06-01 18:00", (2026, 6, 1, 18, 0))]
#[case::space_seconds("2026-06-01 18:00:00", (2026, 6, 1, 18, 0))]
#[case::offset_without_colon("2026-06-01T20:00:00.000+0200", (2026, 6, 1, 18, 0))]
#[case::rfc2822("Mon, 01 Jun 2026 20:00:00 +0200", (2026, 6, 1, 18, 0))]
fn parses_supported_start_formats(#[case] raw: &str, #[case] expected: (i32, u32, u32, u32, u32)) {
    let (year, month, day, hour, minute) = expected;
    let expected = Utc
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid timestamp");
    assert_eq!(parse_start_at(raw), Some(expected));
}

#[rstest]
#[case::empty("")]
#[case::impossible_date("2026-02-30")]
#[case::words("tomorrow evening")]
fn rejects_unsupported_start_formats(#[case] raw: &str) {
    assert_eq!(parse_start_at(raw), None);
}
