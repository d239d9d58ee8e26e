use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "pw"),
        Ok(("alice".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("alice", " pw "),
        Ok(("alice".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter username and password."));
}
