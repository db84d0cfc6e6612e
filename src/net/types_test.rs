use super::*;

#[test]
fn admin_user_defaults_role_when_missing() {
    let json = r#"{"id":"u1","email":"op@example.com","name":"Op"}"#;
    let user: AdminUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.role, "operator");
}

#[test]
fn api_key_accepts_float_rate_limit() {
    let json = r#"{
        "id":"k1","name":"prod","key_prefix":"vd_live_ab",
        "active":true,"rate_limit_per_minute":60.0,
        "created_at":"2026-01-01T00:00:00Z","last_used_at":null
    }"#;
    let key: ApiKey = serde_json::from_str(json).unwrap();
    assert_eq!(key.rate_limit_per_minute, 60);
}

#[test]
fn api_key_rejects_fractional_rate_limit() {
    let json = r#"{
        "id":"k1","name":"prod","key_prefix":"vd_live_ab",
        "active":true,"rate_limit_per_minute":60.5,
        "created_at":"2026-01-01T00:00:00Z","last_used_at":null
    }"#;
    assert!(serde_json::from_str::<ApiKey>(json).is_err());
}

#[test]
fn call_record_defaults_scan_fields() {
    let json = r#"{
        "id":"c1","campaign_id":null,
        "from_number":"+15550001111","to_number":"+15550002222",
        "started_at":"2026-02-01T12:00:00Z","duration_secs":42,
        "status":"completed"
    }"#;
    let call: CallRecord = serde_json::from_str(json).unwrap();
    assert_eq!(call.violation_count, 0);
    assert!(!call.scanned);
}

#[test]
fn provider_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Provider::Plivo).unwrap(), "\"plivo\"");
    let p: Provider = serde_json::from_str("\"twilio\"").unwrap();
    assert_eq!(p, Provider::Twilio);
}

#[test]
fn provider_base_paths() {
    assert_eq!(Provider::Twilio.base_path(), "/api/phone-numbers");
    assert_eq!(Provider::Plivo.base_path(), "/api/plivo/phone-numbers");
}

#[test]
fn widget_config_default_is_publishable() {
    let config = WidgetConfig::default();
    assert!(!config.button_label.is_empty());
    assert!(config.languages.contains(&config.default_language));
    assert!(!config.require_terms_acceptance);
}

#[test]
fn call_detail_defaults_violations_to_empty() {
    let json = r#"{
        "call": {
            "id":"c1","campaign_id":"cmp1",
            "from_number":"+15550001111","to_number":"+15550002222",
            "started_at":"2026-02-01T12:00:00Z","duration_secs":10,
            "status":"completed","violation_count":0,"scanned":true
        },
        "transcript": "hello"
    }"#;
    let detail: CallDetail = serde_json::from_str(json).unwrap();
    assert!(detail.violations.is_empty());
    assert_eq!(detail.transcript.as_deref(), Some("hello"));
}
