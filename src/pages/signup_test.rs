use super::*;

#[test]
fn validate_sign_up_input_accepts_matching_passwords() {
    assert_eq!(
        validate_sign_up_input(" pat@example.com ", "hunter2!!", "hunter2!!"),
        Ok(("pat@example.com".to_owned(), "hunter2!!".to_owned()))
    );
}

#[test]
fn validate_sign_up_input_rejects_invalid_email() {
    assert_eq!(
        validate_sign_up_input("pat", "hunter2!!", "hunter2!!"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_sign_up_input_rejects_short_password() {
    assert_eq!(
        validate_sign_up_input("pat@example.com", "short1!", "short1!"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_sign_up_input_accepts_exactly_eight_characters() {
    assert!(validate_sign_up_input("pat@example.com", "8chars!!", "8chars!!").is_ok());
}

#[test]
fn validate_sign_up_input_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_sign_up_input("pat@example.com", "hunter2!!", "hunter2!"),
        Err("Passwords do not match.")
    );
}
