//! Data model for the siteshift migration checklist
//!
//! Defines the shared vocabulary of the workspace:
//! - Per-URL migration records and their map
//! - The four-state status enum
//! - Global source/target settings and client identity
//! - The two decision rules: redirect-need and progress aggregation
//!
//! Everything in this crate is pure and synchronous; persistence and
//! transport live in sibling crates.

#![warn(unreachable_pub)]

pub mod progress;
pub mod redirect;
pub mod types;

// Re-exports for convenience
pub use progress::{aggregate_progress, StatusSlice};
pub use redirect::needs_redirect;
pub use types::{Status, StatusParseError, TodoItem, TodoMap, UrlSettings, User};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
