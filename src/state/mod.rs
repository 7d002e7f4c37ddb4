//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`scoreboards`, `notices`) so individual
//! components can depend on small focused models. Pages mutate these through
//! `RwSignal` context providers.

pub mod notices;
pub mod scoreboards;
