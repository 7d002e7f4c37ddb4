//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate pure computation from page and component logic to
//! improve reuse and testability.

pub mod pagination;
