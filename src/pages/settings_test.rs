use super::*;

#[test]
fn validate_display_name_trims_whitespace() {
    assert_eq!(validate_display_name("  Pat Moreno  "), Ok("Pat Moreno".to_owned()));
}

#[test]
fn validate_display_name_rejects_blank_input() {
    assert_eq!(validate_display_name("   "), Err("Enter a display name."));
}

#[test]
fn validate_display_name_accepts_sixty_four_characters() {
    let name = "x".repeat(64);
    assert_eq!(validate_display_name(&name), Ok(name.clone()));
}

#[test]
fn validate_display_name_rejects_sixty_five_characters() {
    let name = "x".repeat(65);
    assert_eq!(
        validate_display_name(&name),
        Err("Display name must be 64 characters or fewer.")
    );
}
