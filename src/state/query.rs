//! Query cache bookkeeping with explicit invalidation.
//!
//! DESIGN
//! ======
//! Response data itself lives in per-page `LocalResource`s; this module only
//! tracks a monotonically increasing epoch per cache key. Pages read the
//! epoch for their key inside the resource closure, so bumping it via
//! `invalidate` re-runs the fetch. Invalidation is advisory: any component
//! may bump any key after a mutation, and the page converges by refetching
//! server state. There is no client-side conflict resolution.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;

/// Cache keys, one per REST collection the dashboard renders.
pub mod keys {
    pub const API_KEYS: &str = "api-keys";
    pub const BANNED_WORDS: &str = "banned-words";
    pub const ELEVENLABS_POOL: &str = "elevenlabs-pool";
    pub const SYSTEM_SETTINGS: &str = "system-settings";
    pub const CALLS: &str = "calls";
    pub const PHONE_NUMBERS_TWILIO: &str = "phone-numbers/twilio";
    pub const PHONE_NUMBERS_PLIVO: &str = "phone-numbers/plivo";
    pub const WIDGETS: &str = "widgets";
    pub const FLOWS: &str = "flows";
    pub const FLOW_TEMPLATES: &str = "flow-templates";
}

/// Per-key invalidation epochs.
#[derive(Clone, Debug, Default)]
pub struct QueryClient {
    epochs: HashMap<String, u64>,
}

impl QueryClient {
    /// Current epoch for a key. Keys start at 0 before first invalidation.
    pub fn epoch(&self, key: &str) -> u64 {
        self.epochs.get(key).copied().unwrap_or(0)
    }

    /// Mark a key stale so any resource tracking it refetches.
    pub fn invalidate(&mut self, key: &str) {
        *self.epochs.entry(key.to_owned()).or_insert(0) += 1;
    }
}
