use super::AuthToken;

#[test]
fn test_parse_blank_disables_auth() {
    assert!(AuthToken::parse("").is_none());
    assert!(AuthToken::parse("   ").is_none());
}

#[test]
fn test_parse_trims() {
    assert_eq!(AuthToken::parse("  abc \n"), AuthToken::parse("abc"));
}

#[test]
fn test_matches_bearer_header() {
    let token = AuthToken::parse("abc123").unwrap();

    assert!(token.matches_authorization_header("Bearer abc123"));
    assert!(token.matches_authorization_header("  Bearer abc123  "));
    assert!(!token.matches_authorization_header("Bearer abc1234"));
    assert!(!token.matches_authorization_header("Bearer abc12"));
    assert!(!token.matches_authorization_header("bearer abc123"));
    assert!(!token.matches_authorization_header("Basic abc123"));
    assert!(!token.matches_authorization_header("abc123"));
    assert!(!token.matches_authorization_header(""));
}

#[test]
fn test_debug_redacts_secret() {
    let token = AuthToken::parse("super-secret").unwrap();
    let rendered = format!("{token:?}");
    assert!(!rendered.contains("super-secret"));
}
