use super::*;

#[test]
fn poll_cadence_is_two_seconds() {
    assert_eq!(POLL_INTERVAL_MS, 2_000);
}

#[test]
fn check_trace_message_formats_origin_and_result() {
    assert_eq!(
        check_trace_message("interval", true),
        "auth status check (interval): authenticated=true"
    );
    assert_eq!(
        check_trace_message("refresh", false),
        "auth status check (refresh): authenticated=false"
    );
}

#[test]
fn hook_defaults_to_signed_out_without_a_browser() {
    let status = use_auth_status();
    assert!(!status.is_authenticated.get_untracked());
    assert!(status.user_email.get_untracked().is_none());
}
