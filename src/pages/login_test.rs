use super::*;

#[test]
fn validate_sign_in_input_trims_email() {
    assert_eq!(
        validate_sign_in_input("  pat@example.com  ", "hunter2!"),
        Ok(("pat@example.com".to_owned(), "hunter2!".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_rejects_missing_at_sign() {
    assert_eq!(
        validate_sign_in_input("pat.example.com", "hunter2!"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_sign_in_input_rejects_empty_email() {
    assert_eq!(
        validate_sign_in_input("   ", "hunter2!"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_sign_in_input_rejects_empty_password() {
    assert_eq!(
        validate_sign_in_input("pat@example.com", ""),
        Err("Enter your password.")
    );
}
