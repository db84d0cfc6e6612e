//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and shared interaction surfaces while
//! reading/writing shared state from Leptos context providers. Pages own the
//! data fetching; components stay presentational.

pub mod confirm_dialog;
pub mod nav;
pub mod pagination;
pub mod toast;
pub mod widget_preview;
