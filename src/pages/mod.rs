//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages follow one pattern: a `LocalResource` keyed on the
//! query-cache epoch for its collection, mutations via `spawn_local` that
//! invalidate the key and toast the outcome, and confirmation dialogs for
//! anything destructive.

pub mod api_keys;
pub mod banned_words;
pub mod calls;
pub mod dashboard;
pub mod elevenlabs_pool;
pub mod flows;
pub mod login;
pub mod phone_numbers;
pub mod system_settings;
pub mod widgets;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Redirect to `/login` once the session fetch settles without a user.
/// Shared by every authenticated page.
pub(crate) fn redirect_unauthenticated() {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
