//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form and feedback surfaces while reading/writing shared
//! state from Leptos context providers. Route orchestration stays in `pages`.

pub mod notice_host;
pub mod select_image;
