use super::*;

#[test]
fn provider_cache_keys_are_distinct() {
    assert_ne!(provider_cache_key(Provider::Twilio), provider_cache_key(Provider::Plivo));
}

#[test]
fn valid_country_code_accepts_alpha2() {
    assert!(valid_country_code("US"));
    assert!(valid_country_code("DE"));
}

#[test]
fn valid_country_code_rejects_everything_else() {
    assert!(!valid_country_code(""));
    assert!(!valid_country_code("usa"));
    assert!(!valid_country_code("us"));
    assert!(!valid_country_code("U1"));
    assert!(!valid_country_code("ÜS"));
}

#[test]
fn valid_contains_filter_accepts_digits_or_nothing() {
    assert!(valid_contains_filter(""));
    assert!(valid_contains_filter("415"));
}

#[test]
fn valid_contains_filter_rejects_query_breaking_input() {
    assert!(!valid_contains_filter("415a"));
    assert!(!valid_contains_filter("+1415"));
    assert!(!valid_contains_filter("4 15"));
    assert!(!valid_contains_filter("415&country=XX"));
}

#[test]
fn purchase_blocked_only_for_required() {
    assert!(purchase_blocked("required"));
    assert!(!purchase_blocked("pending"));
    assert!(!purchase_blocked("approved"));
}
