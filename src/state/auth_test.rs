use super::*;
use crate::net::types::SessionUser;

fn session(email: Option<&str>) -> Session {
    Session {
        user: SessionUser {
            id: "3b5c0f3e-9f2a-4a1d-8d5f-0c9a4be31a77".to_owned(),
            email: email.map(str::to_owned),
            display_name: None,
        },
    }
}

#[test]
fn default_is_signed_out_without_email() {
    let status = AuthStatus::default();
    assert!(!status.is_authenticated);
    assert!(status.user_email.is_none());
}

#[test]
fn from_session_present_sets_authenticated_and_email() {
    let status = AuthStatus::from_session(Some(&session(Some("pat@example.com"))));
    assert!(status.is_authenticated);
    assert_eq!(status.user_email.as_deref(), Some("pat@example.com"));
}

#[test]
fn from_session_present_without_email_keeps_email_absent() {
    let status = AuthStatus::from_session(Some(&session(None)));
    assert!(status.is_authenticated);
    assert!(status.user_email.is_none());
}

#[test]
fn from_session_absent_clears_everything() {
    let status = AuthStatus::from_session(None);
    assert_eq!(status, AuthStatus::default());
}

#[test]
fn email_is_never_present_while_signed_out() {
    for input in [None, Some(session(Some("pat@example.com"))), Some(session(None))] {
        let status = AuthStatus::from_session(input.as_ref());
        if !status.is_authenticated {
            assert!(status.user_email.is_none());
        }
    }
}
