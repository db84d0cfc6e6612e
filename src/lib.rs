//! # voicedash
//!
//! Leptos + WASM admin dashboard for the voice-call automation platform.
//! Covers API key administration, content moderation, the ElevenLabs
//! credential pool, system settings, call monitoring, phone number
//! provisioning (Twilio and Plivo), embeddable call-widget configuration
//! with a live preview, and flow automation.
//!
//! This crate contains pages, components, application state, and the REST
//! client. All business logic lives behind the platform API; this crate is
//! strictly the view layer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered shell into a live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
