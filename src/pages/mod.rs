//! Routed page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns the signals and request flow for one route and leans on
//! `components` for reusable chrome and on `net` for API access.

pub mod academy;
pub mod scoreboards;
