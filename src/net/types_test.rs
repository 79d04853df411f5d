use super::*;

#[test]
fn session_parses_minimal_service_payload() {
    let parsed: Session =
        serde_json::from_str(r#"{"user":{"id":"u1","email":"pat@example.com"}}"#).unwrap();
    assert_eq!(parsed.user.id, "u1");
    assert_eq!(parsed.user.email.as_deref(), Some("pat@example.com"));
    assert!(parsed.user.display_name.is_none());
}

#[test]
fn session_user_tolerates_null_email() {
    let parsed: SessionUser = serde_json::from_str(r#"{"id":"u1","email":null}"#).unwrap();
    assert!(parsed.email.is_none());
}

#[test]
fn account_profile_notes_default_to_empty() {
    let parsed: AccountProfile = serde_json::from_str(r#"{"display_name":"Pat"}"#).unwrap();
    assert_eq!(parsed.display_name, "Pat");
    assert!(parsed.availability_notes.is_empty());
}

#[test]
fn probe_reply_parses_echoed_fields() {
    let parsed: ProbeReply =
        serde_json::from_str(r#"{"request_id":"r-1","status":"ok"}"#).unwrap();
    assert_eq!(parsed.request_id, "r-1");
    assert_eq!(parsed.status, "ok");
}
