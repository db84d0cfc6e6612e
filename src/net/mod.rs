//! Networking modules for the platform REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls and `types` defines the DTO schema shared
//! with the server. There is no realtime channel; every page converges on
//! server state by refetching after mutations.

pub mod api;
pub mod types;
