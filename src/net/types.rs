//! REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON payloads of the admin API so serde
//! round-trips stay lossless. Numeric fields that some backends emit as
//! floats go through forgiving deserializers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated admin user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role string (e.g. `"admin"`, `"operator"`).
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "operator".to_owned()
}

/// An API key record from `/api/admin/api-keys`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Unique key identifier (UUID string).
    pub id: String,
    /// Human-assigned label.
    pub name: String,
    /// First characters of the key; the full secret is never returned.
    pub key_prefix: String,
    /// Whether the key is currently accepted by the API.
    pub active: bool,
    /// Requests per minute allowed for this key (enforced server-side).
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub rate_limit_per_minute: i64,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 timestamp of the most recent authenticated request, if any.
    pub last_used_at: Option<String>,
}

/// A banned word used by the content moderation scanner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannedWord {
    /// Unique identifier (UUID string).
    pub id: String,
    /// The word or phrase, stored lowercase.
    pub word: String,
    /// Severity bucket: `"low"`, `"medium"` or `"high"`.
    pub severity: String,
    /// BCP 47 language tag the word applies to (e.g. `"en"`, `"de"`).
    pub language: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// Result summary of a full-corpus violation scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Number of calls whose transcripts were scanned.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub calls_scanned: i64,
    /// Number of banned-word matches found across all scanned calls.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub matches_found: i64,
}

/// One ElevenLabs credential in the shared pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElevenLabsCredential {
    /// Unique identifier (UUID string).
    pub id: String,
    /// Operator-assigned label.
    pub label: String,
    /// Masked API key (prefix + ellipsis); the secret stays server-side.
    pub api_key_masked: String,
    /// Number of voice agents provisioned under this credential.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub agent_count: i64,
    /// Last health-check verdict, if one has run.
    pub healthy: Option<bool>,
    /// ISO 8601 timestamp of the last health check, if any.
    pub last_checked_at: Option<String>,
}

/// Outcome of a per-credential test call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialTestResult {
    /// Whether the credential authenticated successfully.
    pub ok: bool,
    /// Human-readable detail from the provider.
    pub message: String,
}

/// Summary of a pool-wide health check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolHealthReport {
    /// Credentials checked.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub checked: i64,
    /// Credentials that passed.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub healthy: i64,
}

/// Summary of an agent sync run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSyncReport {
    /// Agents created or updated during the sync.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub agents_synced: i64,
}

/// A single system setting key/value pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSetting {
    /// Setting key (e.g. `"webhook_retry_limit"`).
    pub key: String,
    /// Current value, always transported as a string.
    pub value: String,
    /// Operator-facing description.
    #[serde(default)]
    pub description: String,
    /// Grouping category for the settings form (e.g. `"webhooks"`).
    #[serde(default)]
    pub category: String,
}

/// A call row for the monitoring table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Unique call identifier (UUID string).
    pub id: String,
    /// Campaign the call belonged to, if any.
    pub campaign_id: Option<String>,
    /// Caller number in E.164 format.
    pub from_number: String,
    /// Callee number in E.164 format.
    pub to_number: String,
    /// ISO 8601 start timestamp.
    pub started_at: String,
    /// Call duration in seconds.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub duration_secs: i64,
    /// Terminal status (e.g. `"completed"`, `"failed"`, `"no-answer"`).
    pub status: String,
    /// Number of banned-word violations found in the transcript.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub violation_count: i64,
    /// Whether the transcript has been scanned at all.
    #[serde(default)]
    pub scanned: bool,
}

/// A banned-word hit inside one call transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallViolation {
    /// Unique identifier (UUID string).
    pub id: String,
    /// The matched banned word.
    pub word: String,
    /// Severity bucket of the matched word.
    pub severity: String,
    /// Offset into the recording where the match occurred, in seconds.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub offset_secs: i64,
}

/// Full call detail: the record plus transcript and violations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallDetail {
    /// The call row itself.
    pub call: CallRecord,
    /// Full transcript text, if transcription finished.
    pub transcript: Option<String>,
    /// Violations found by the scanner.
    #[serde(default)]
    pub violations: Vec<CallViolation>,
}

/// Telephony provider for phone number provisioning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Twilio,
    Plivo,
}

impl Provider {
    /// REST base path for this provider's phone-number resources.
    pub fn base_path(self) -> &'static str {
        match self {
            Self::Twilio => "/api/phone-numbers",
            Self::Plivo => "/api/plivo/phone-numbers",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Twilio => "Twilio",
            Self::Plivo => "Plivo",
        }
    }
}

/// A phone number owned by the account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// Unique identifier (UUID string).
    pub id: String,
    /// The number in E.164 format.
    pub number: String,
    /// Provider the number was purchased from.
    pub provider: Provider,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// Monthly cost in USD.
    pub monthly_cost: f64,
    /// ISO 8601 purchase timestamp.
    pub purchased_at: String,
}

/// A purchasable number from a provider search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvailableNumber {
    /// The number in E.164 format.
    pub number: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// Region/locality hint from the provider, if any.
    pub region: Option<String>,
    /// Monthly cost in USD.
    pub monthly_cost: f64,
}

/// KYC verification status gating phone number purchases (server-enforced).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycStatus {
    /// One of `"approved"`, `"pending"`, `"required"`.
    pub status: String,
    /// Link to the verification flow, when action is needed.
    pub detail_url: Option<String>,
}

/// An embeddable call widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Unique identifier (UUID string).
    pub id: String,
    /// Operator-assigned name.
    pub name: String,
    /// Branding and behavior configuration.
    pub config: WidgetConfig,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
}

/// Branding and behavior configuration for a call widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Text on the call-invite button.
    pub button_label: String,
    /// Primary brand color (hex).
    pub primary_color: String,
    /// Languages offered in the widget's selector (BCP 47 tags).
    pub languages: Vec<String>,
    /// Default selected language.
    pub default_language: String,
    /// Whether the caller must accept terms before connecting.
    pub require_terms_acceptance: bool,
    /// Terms document shown when acceptance is required.
    pub terms_url: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            button_label: "Call us".to_owned(),
            primary_color: "#2563eb".to_owned(),
            languages: vec!["en".to_owned()],
            default_language: "en".to_owned(),
            require_terms_acceptance: false,
            terms_url: None,
        }
    }
}

/// Embed snippet for a published widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedCode {
    /// Copy-paste HTML snippet.
    pub snippet: String,
}

/// A flow-automation flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    /// Unique identifier (UUID string).
    pub id: String,
    /// Operator-assigned name.
    pub name: String,
    /// Trigger description (e.g. `"call.completed"`).
    pub trigger: String,
    /// Whether the flow currently runs.
    pub enabled: bool,
    /// Number of steps in the flow.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub step_count: i64,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
}

/// A reusable flow template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowTemplate {
    /// Unique identifier (UUID string).
    pub id: String,
    /// Template name.
    pub name: String,
    /// Short description of what the flow does.
    pub description: String,
    /// Number of steps the template instantiates.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub step_count: i64,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
