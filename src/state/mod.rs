//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `query`, `toast`, ...) so individual
//! components can depend on small focused models. `call_preview` holds the
//! only real state machine in the app: the client-side call simulation used
//! by the widget configurator.

pub mod auth;
pub mod call_preview;
pub mod query;
pub mod toast;
pub mod ui;
