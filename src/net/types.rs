//! Wire DTOs for the academy administration API.
//!
//! DESIGN
//! ======
//! These types mirror the server's `camelCase` JSON payloads so serde handles
//! the casing boundary and the rest of the crate works in `snake_case`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A scoreboard device record as represented on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    /// Server-assigned record identifier, immutable.
    pub id: String,
    /// Human-readable label (e.g. which court the device hangs on).
    pub description: String,
    /// Unique hardware identifier printed on the device.
    pub serial_number: String,
    /// Static token the device authenticates with.
    pub static_token: String,
}

/// One page of scoreboard records plus totals for the pager.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardPage {
    /// Records for the requested page only.
    #[serde(default)]
    pub data: Vec<Scoreboard>,
    /// Aggregate counts across all pages.
    pub pagination: Pagination,
}

/// Pagination envelope accompanying list responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total matching records across all pages.
    pub total: u64,
}

/// Editable scoreboard fields submitted on create and update.
///
/// Create requests additionally carry the academy id; `net::api` merges it
/// into the body so this type stays identical for both operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardPayload {
    pub description: String,
    pub serial_number: String,
    pub static_token: String,
}

/// An academy profile as returned by `/api/academy/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Academy {
    /// Server-assigned academy identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current logo image URL, if one was uploaded.
    pub logo_url: Option<String>,
}

/// Raw browser file handle carried from the image selector to page state.
///
/// Only meaningful in hydrate builds; the unit alias keeps component and
/// handler signatures identical under native test and SSR compilation.
#[cfg(feature = "hydrate")]
pub type RawFile = web_sys::File;
#[cfg(not(feature = "hydrate"))]
pub type RawFile = ();
