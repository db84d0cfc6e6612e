use super::*;

fn config() -> WidgetConfig {
    WidgetConfig::default()
}

#[test]
fn valid_hex_color_accepts_short_and_long_forms() {
    assert!(valid_hex_color("#fff"));
    assert!(valid_hex_color("#2563eb"));
    assert!(valid_hex_color("#ABCDEF"));
}

#[test]
fn valid_hex_color_rejects_malformed_input() {
    assert!(!valid_hex_color("2563eb"));
    assert!(!valid_hex_color("#25 3eb"));
    assert!(!valid_hex_color("#2563e"));
    assert!(!valid_hex_color("#gggggg"));
    assert!(!valid_hex_color(""));
}

#[test]
fn parse_languages_trims_dedupes_and_lowercases() {
    assert_eq!(parse_languages("en, DE, en , fr"), vec!["en", "de", "fr"]);
    assert_eq!(parse_languages(""), Vec::<String>::new());
    assert_eq!(parse_languages(" , ,en"), vec!["en"]);
}

#[test]
fn validate_widget_accepts_the_default_config() {
    assert_eq!(validate_widget("Support widget", &config()), Ok(()));
}

#[test]
fn validate_widget_requires_name_and_label() {
    assert!(validate_widget("  ", &config()).is_err());
    let mut c = config();
    c.button_label = String::new();
    assert!(validate_widget("w", &c).is_err());
}

#[test]
fn validate_widget_requires_default_language_membership() {
    let mut c = config();
    c.default_language = "de".to_owned();
    assert!(validate_widget("w", &c).is_err());
    c.languages.push("de".to_owned());
    assert_eq!(validate_widget("w", &c), Ok(()));
}

#[test]
fn validate_widget_requires_terms_url_when_enforced() {
    let mut c = config();
    c.require_terms_acceptance = true;
    assert!(validate_widget("w", &c).is_err());
    c.terms_url = Some("https://example.com/terms".to_owned());
    assert_eq!(validate_widget("w", &c), Ok(()));
}

#[test]
fn validate_widget_rejects_bad_colors() {
    let mut c = config();
    c.primary_color = "blue".to_owned();
    assert!(validate_widget("w", &c).is_err());
}
