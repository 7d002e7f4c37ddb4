//! Networking modules for the admin HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the academy backend and `types` defines
//! the shared wire schema. All state lives server-side; these modules are the
//! only place requests are shaped.

pub mod api;
pub mod types;
