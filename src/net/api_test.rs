use super::*;

#[test]
fn api_key_endpoint_formats_expected_path() {
    assert_eq!(api_key_endpoint("k123"), "/api/admin/api-keys/k123");
}

#[test]
fn banned_word_endpoint_formats_expected_path() {
    assert_eq!(banned_word_endpoint("w1"), "/api/admin/banned-words/w1");
}

#[test]
fn pool_credential_endpoints_format_expected_paths() {
    assert_eq!(pool_credential_endpoint("c1"), "/api/admin/elevenlabs-pool/c1");
    assert_eq!(pool_credential_test_endpoint("c1"), "/api/admin/elevenlabs-pool/c1/test");
}

#[test]
fn setting_endpoint_formats_expected_path() {
    assert_eq!(setting_endpoint("webhook_retry_limit"), "/api/admin/settings/webhook_retry_limit");
}

#[test]
fn call_endpoints_format_expected_paths() {
    assert_eq!(call_endpoint("c9"), "/api/admin/calls/c9");
    assert_eq!(call_recording_endpoint("c9"), "/api/admin/calls/c9/recording");
    assert_eq!(call_scan_endpoint("c9"), "/api/admin/calls/c9/scan");
}

#[test]
fn phone_number_endpoint_uses_provider_base() {
    assert_eq!(phone_number_endpoint(Provider::Twilio, "n1"), "/api/phone-numbers/n1");
    assert_eq!(phone_number_endpoint(Provider::Plivo, "n1"), "/api/plivo/phone-numbers/n1");
}

#[test]
fn phone_search_endpoint_omits_empty_contains() {
    assert_eq!(
        phone_search_endpoint(Provider::Twilio, "US", ""),
        "/api/phone-numbers/search?country=US"
    );
    assert_eq!(
        phone_search_endpoint(Provider::Plivo, "DE", "415"),
        "/api/plivo/phone-numbers/search?country=DE&contains=415"
    );
}

#[test]
fn widget_endpoints_format_expected_paths() {
    assert_eq!(widget_endpoint("w1"), "/api/widgets/w1");
    assert_eq!(widget_embed_endpoint("w1"), "/api/widgets/w1/embed-code");
}

#[test]
fn flow_endpoint_formats_expected_path() {
    assert_eq!(flow_endpoint("f1"), "/api/flow-automation/flows/f1");
}

#[test]
fn error_from_body_prefers_server_message() {
    assert_eq!(error_from_body(422, r#"{"error":"word already exists"}"#), "word already exists");
}

#[test]
fn error_from_body_falls_back_to_status() {
    assert_eq!(error_from_body(500, "<html>oops</html>"), "request failed: 500");
    assert_eq!(error_from_body(404, r#"{"message":"nope"}"#), "request failed: 404");
}
