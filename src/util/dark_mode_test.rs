use super::*;

#[test]
fn parse_choice_accepts_only_known_tokens() {
    assert_eq!(parse_choice("dark"), Some(true));
    assert_eq!(parse_choice("light"), Some(false));
    assert_eq!(parse_choice("true"), None);
    assert_eq!(parse_choice(""), None);
}

#[test]
fn explicit_choice_overrides_the_os_scheme() {
    assert!(resolve(Some(true), false));
    assert!(!resolve(Some(false), true));
}

#[test]
fn without_a_choice_the_os_scheme_decides() {
    assert!(resolve(None, true));
    assert!(!resolve(None, false));
}
