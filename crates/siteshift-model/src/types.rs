//! Core types for the migration checklist
//!
//! Wire shapes use camelCase keys so every stored document and HTTP body
//! round-trips byte-compatibly with the JSON the collaborating clients
//! exchange.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Migration status of a single URL
///
/// There are no transition restrictions; any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    /// Not started (the implicit default for URLs absent from the map)
    Pending,
    /// Someone is actively working on it
    InProgress,
    /// Migration finished
    Completed,
    /// Needs review before it can proceed
    Questioned,
}

impl Status {
    /// Fixed rendering order: completed, inProgress, questioned, pending
    pub const DISPLAY_ORDER: [Status; 4] = [
        Status::Completed,
        Status::InProgress,
        Status::Questioned,
        Status::Pending,
    ];

    /// Wire name of this status
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "inProgress",
            Status::Completed => "completed",
            Status::Questioned => "questioned",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "inProgress" | "inprogress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            "questioned" => Ok(Status::Questioned),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// Error returned when a string is not a recognized status name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0} (expected pending, inProgress, completed or questioned)")]
pub struct StatusParseError(pub String);

/// Per-URL migration record
///
/// Keyed by its original URL in [`TodoMap`]. Entries are created on first
/// edit and replaced wholesale on every subsequent edit; they are never
/// explicitly deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Original URL of the page
    pub url: String,
    /// Current migration status
    pub status: Status,
    /// Id of the user who last took the item in progress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Last edit time, milliseconds since the Unix epoch
    pub updated_at: i64,
    /// Replacement URL on the target site, once chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrated_url: Option<String>,
    /// Whether the replacement URL requires an HTTP redirect
    ///
    /// Written together with `migrated_url` and never independently of it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_301: Option<bool>,
}

impl TodoItem {
    /// Create a record for `url` with the given status
    #[inline]
    #[must_use]
    pub fn new(url: impl Into<String>, status: Status, updated_at: i64) -> Self {
        Self {
            url: url.into(),
            status,
            assignee: None,
            updated_at,
            migrated_url: None,
            needs_301: None,
        }
    }

    /// Pending record with an empty `url` field
    ///
    /// This is the fallback used when a replacement URL is recorded for a
    /// page that has no entry yet: only the map key carries the original
    /// URL in that case.
    #[inline]
    #[must_use]
    pub fn placeholder(updated_at: i64) -> Self {
        Self::new(String::new(), Status::Pending, updated_at)
    }
}

/// Map of original URL to its migration record
///
/// A BTreeMap keeps serialization deterministic. Keys outside the fixed
/// checklist are tolerated and simply never rendered.
pub type TodoMap = BTreeMap<String, TodoItem>;

/// Global source/target base URL pair
///
/// A single shared record, not per-item. Used for display-path shortening
/// only; no behavior depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSettings {
    /// Base URL of the site being migrated away from
    pub source: String,
    /// Base URL of the site being migrated to
    pub target: String,
}

impl Default for UrlSettings {
    fn default() -> Self {
        Self {
            source: "https://zetarmold.com".to_string(),
            target: "https://google.com".to_string(),
        }
    }
}

/// Client-local identity
///
/// The id is generated client-side and never validated by the server;
/// collaborators trust each other on this checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, freely editable
    pub name: String,
    /// Opaque token, stable across sessions
    pub id: String,
}

impl User {
    /// Create an identity from a name and an already-generated id
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}
