//! REST API helpers for communicating with the platform.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Mutations return `Result<_, String>` where the error is the server's
//! `{"error": ...}` message when present, or a generic status fallback.
//! Session fetches return `Option` so auth failures degrade the UI instead
//! of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AdminUser, AgentSyncReport, ApiKey, AvailableNumber, BannedWord, CallDetail, CallRecord, CredentialTestResult,
    ElevenLabsCredential, EmbedCode, Flow, FlowTemplate, KycStatus, PhoneNumber, PoolHealthReport, Provider,
    ScanReport, SystemSetting, Widget, WidgetConfig,
};

#[cfg(not(feature = "hydrate"))]
const OFFLINE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn api_key_endpoint(id: &str) -> String {
    format!("/api/admin/api-keys/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn banned_word_endpoint(id: &str) -> String {
    format!("/api/admin/banned-words/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn pool_credential_endpoint(id: &str) -> String {
    format!("/api/admin/elevenlabs-pool/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn pool_credential_test_endpoint(id: &str) -> String {
    format!("/api/admin/elevenlabs-pool/{id}/test")
}

#[cfg(any(test, feature = "hydrate"))]
fn setting_endpoint(key: &str) -> String {
    format!("/api/admin/settings/{key}")
}

#[cfg(any(test, feature = "hydrate"))]
fn call_endpoint(id: &str) -> String {
    format!("/api/admin/calls/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn call_recording_endpoint(id: &str) -> String {
    format!("/api/admin/calls/{id}/recording")
}

#[cfg(any(test, feature = "hydrate"))]
fn call_scan_endpoint(id: &str) -> String {
    format!("/api/admin/calls/{id}/scan")
}

#[cfg(any(test, feature = "hydrate"))]
fn phone_number_endpoint(provider: Provider, id: &str) -> String {
    format!("{}/{id}", provider.base_path())
}

/// Build the number-search URL. `contains` is omitted when empty so the
/// provider returns an unfiltered page for the country. Both values are
/// interpolated raw; callers validate them (alpha-2 country, digits filter)
/// before building the URL.
#[cfg(any(test, feature = "hydrate"))]
fn phone_search_endpoint(provider: Provider, country: &str, contains: &str) -> String {
    let base = provider.base_path();
    if contains.is_empty() {
        format!("{base}/search?country={country}")
    } else {
        format!("{base}/search?country={country}&contains={contains}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn widget_endpoint(id: &str) -> String {
    format!("/api/widgets/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn widget_embed_endpoint(id: &str) -> String {
    format!("/api/widgets/{id}/embed-code")
}

#[cfg(any(test, feature = "hydrate"))]
fn flow_endpoint(id: &str) -> String {
    format!("/api/flow-automation/flows/{id}")
}

/// Extract the server's `{"error": ...}` message from a non-OK response
/// body, falling back to a generic status line.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(serde_json::Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn decode_or_error<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if resp.ok() {
        resp.json::<T>().await.map_err(|e| e.to_string())
    } else {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(error_from_body(status, &body))
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
    decode_or_error(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(url: &str, body: &serde_json::Value) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode_or_error(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_empty<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url).send().await.map_err(|e| e.to_string())?;
    decode_or_error(resp).await
}

#[cfg(feature = "hydrate")]
async fn patch_json<T: serde::de::DeserializeOwned>(url: &str, body: &serde_json::Value) -> Result<T, String> {
    let resp = gloo_net::http::Request::patch(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode_or_error(resp).await
}

#[cfg(feature = "hydrate")]
async fn delete_empty(url: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::delete(url).send().await.map_err(|e| e.to_string())?;
    if resp.ok() {
        Ok(())
    } else {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(error_from_body(status, &body))
    }
}

// ---- session ----

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<AdminUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AdminUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Start a session via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's error message when credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<AdminUser, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/login", &serde_json::json!({ "email": email, "password": password })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(OFFLINE.to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

// ---- API keys ----

/// List API keys from `/api/admin/api-keys`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_api_keys() -> Result<Vec<ApiKey>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/api-keys").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Update an API key's active flag and rate limit.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn update_api_key(id: &str, active: bool, rate_limit_per_minute: i64) -> Result<ApiKey, String> {
    #[cfg(feature = "hydrate")]
    {
        patch_json(
            &api_key_endpoint(id),
            &serde_json::json!({ "active": active, "rate_limit_per_minute": rate_limit_per_minute }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, active, rate_limit_per_minute);
        Err(OFFLINE.to_owned())
    }
}

/// Revoke an API key permanently.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn delete_api_key(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete_empty(&api_key_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}

// ---- banned words ----

/// List banned words from `/api/admin/banned-words`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_banned_words() -> Result<Vec<BannedWord>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/banned-words").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Add a banned word.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn create_banned_word(word: &str, severity: &str, language: &str) -> Result<BannedWord, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/admin/banned-words",
            &serde_json::json!({ "word": word, "severity": severity, "language": language }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (word, severity, language);
        Err(OFFLINE.to_owned())
    }
}

/// Change a banned word's severity.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn update_banned_word(id: &str, severity: &str) -> Result<BannedWord, String> {
    #[cfg(feature = "hydrate")]
    {
        patch_json(&banned_word_endpoint(id), &serde_json::json!({ "severity": severity })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, severity);
        Err(OFFLINE.to_owned())
    }
}

/// Remove a banned word.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn delete_banned_word(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete_empty(&banned_word_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}

/// Re-scan every stored call transcript against the current word list via
/// `POST /api/admin/banned-words/scan-all-calls`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn scan_all_calls() -> Result<ScanReport, String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty("/api/admin/banned-words/scan-all-calls").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(OFFLINE.to_owned())
    }
}

// ---- ElevenLabs credential pool ----

/// List pool credentials from `/api/admin/elevenlabs-pool`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_pool_credentials() -> Result<Vec<ElevenLabsCredential>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/elevenlabs-pool").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Add a credential to the pool. The API key is sent once and never read back.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn create_pool_credential(label: &str, api_key: &str) -> Result<ElevenLabsCredential, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/admin/elevenlabs-pool",
            &serde_json::json!({ "label": label, "api_key": api_key }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (label, api_key);
        Err(OFFLINE.to_owned())
    }
}

/// Remove a credential from the pool.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn delete_pool_credential(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete_empty(&pool_credential_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}

/// Fire a test request against one credential.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn test_pool_credential(id: &str) -> Result<CredentialTestResult, String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty(&pool_credential_test_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}

/// Run a pool-wide health check via `POST /api/admin/elevenlabs-pool/health-check`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn run_pool_health_check() -> Result<PoolHealthReport, String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty("/api/admin/elevenlabs-pool/health-check").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Sync voice agents across the pool via `POST /api/admin/elevenlabs-pool/sync-agents`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn sync_pool_agents() -> Result<AgentSyncReport, String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty("/api/admin/elevenlabs-pool/sync-agents").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(OFFLINE.to_owned())
    }
}

// ---- system settings ----

/// Fetch all system settings from `/api/admin/system-settings`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_system_settings() -> Result<Vec<SystemSetting>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/system-settings").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Update one setting via `PATCH /api/admin/settings/{key}`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn update_setting(key: &str, value: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&setting_endpoint(key))
            .json(&serde_json::json!({ "value": value }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(())
        } else {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Err(error_from_body(status, &body))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Err(OFFLINE.to_owned())
    }
}

// ---- call monitoring ----

/// List calls from `/api/admin/calls`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_calls() -> Result<Vec<CallRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/calls").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Fetch one call with transcript and violations.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_call_detail(id: &str) -> Result<CallDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&call_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}

/// Fetch a call recording as raw bytes from
/// `GET /api/admin/calls/{id}/recording`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_call_recording(id: &str) -> Result<Vec<u8>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&call_recording_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(status, &body));
        }
        resp.binary().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}

/// Re-scan one call's transcript via `POST /api/admin/calls/{id}/scan`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn scan_call(id: &str) -> Result<ScanReport, String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty(&call_scan_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}

// ---- phone numbers ----

/// List owned numbers for one provider.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_phone_numbers(provider: Provider) -> Result<Vec<PhoneNumber>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(provider.base_path()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = provider;
        Err(OFFLINE.to_owned())
    }
}

/// Search purchasable numbers for one provider.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn search_phone_numbers(
    provider: Provider,
    country: &str,
    contains: &str,
) -> Result<Vec<AvailableNumber>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&phone_search_endpoint(provider, country, contains)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (provider, country, contains);
        Err(OFFLINE.to_owned())
    }
}

/// Purchase a number. The provider charges immediately; the server enforces
/// KYC before accepting the request.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn purchase_phone_number(provider: Provider, number: &str) -> Result<PhoneNumber, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(provider.base_path(), &serde_json::json!({ "number": number })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (provider, number);
        Err(OFFLINE.to_owned())
    }
}

/// Release an owned number back to the provider.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn release_phone_number(provider: Provider, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete_empty(&phone_number_endpoint(provider, id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (provider, id);
        Err(OFFLINE.to_owned())
    }
}

/// Fetch the account's KYC status. Returns `None` on the server or when the
/// endpoint is unavailable; callers treat that as "unknown" and hide the
/// banner rather than blocking the page.
pub async fn fetch_kyc_status() -> Option<KycStatus> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/kyc/status").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<KycStatus>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

// ---- widgets ----

/// List widgets from `/api/widgets`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_widgets() -> Result<Vec<Widget>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/widgets").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Create a widget.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn create_widget(name: &str, config: &WidgetConfig) -> Result<Widget, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/widgets", &serde_json::json!({ "name": name, "config": config })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, config);
        Err(OFFLINE.to_owned())
    }
}

/// Update a widget's name and configuration.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn update_widget(id: &str, name: &str, config: &WidgetConfig) -> Result<Widget, String> {
    #[cfg(feature = "hydrate")]
    {
        patch_json(&widget_endpoint(id), &serde_json::json!({ "name": name, "config": config })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, name, config);
        Err(OFFLINE.to_owned())
    }
}

/// Delete a widget.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn delete_widget(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete_empty(&widget_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}

/// Fetch the copy-paste embed snippet for a widget.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_embed_code(id: &str) -> Result<EmbedCode, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&widget_embed_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}

// ---- flow automation ----

/// List flows from `/api/flow-automation/flows`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_flows() -> Result<Vec<Flow>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/flow-automation/flows").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// List flow templates from `/api/flow-automation/flow-templates`.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn fetch_flow_templates() -> Result<Vec<FlowTemplate>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/flow-automation/flow-templates").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Instantiate a flow from a template.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn create_flow_from_template(template_id: &str, name: &str) -> Result<Flow, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/flow-automation/flows",
            &serde_json::json!({ "template_id": template_id, "name": name }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (template_id, name);
        Err(OFFLINE.to_owned())
    }
}

/// Rename a flow.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn rename_flow(id: &str, name: &str) -> Result<Flow, String> {
    #[cfg(feature = "hydrate")]
    {
        patch_json(&flow_endpoint(id), &serde_json::json!({ "name": name })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, name);
        Err(OFFLINE.to_owned())
    }
}

/// Enable or disable a flow.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn set_flow_enabled(id: &str, enabled: bool) -> Result<Flow, String> {
    #[cfg(feature = "hydrate")]
    {
        patch_json(&flow_endpoint(id), &serde_json::json!({ "enabled": enabled })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, enabled);
        Err(OFFLINE.to_owned())
    }
}

/// Delete a flow.
///
/// # Errors
///
/// Returns the server or transport error message.
pub async fn delete_flow(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete_empty(&flow_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}
