//! Client side of the siteshift checklist
//!
//! Holds everything a collaborator's machine runs:
//! - [`Checklist`], the application-state object with its explicit
//!   load/edit lifecycle
//! - [`ChecklistBackend`] with HTTP and in-process local implementations
//! - client-local identity, stable across sessions
//! - terminal presentation helpers for the `siteshift` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use siteshift_client::{Checklist, LocalBackend};
//! use siteshift_model::Status;
//! use siteshift_store::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = Arc::new(LocalBackend::new(Store::in_memory()));
//! let mut checklist = Checklist::new(backend);
//! checklist.load().await?;
//! checklist
//!     .update_status("https://zetarmold.com/about", Status::InProgress, "uid-1")
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod backend;
pub mod checklist;
pub mod config;
pub mod display;
pub mod error;
pub mod http;
pub mod identity;

// Re-exports for convenience
pub use backend::{ChecklistBackend, LocalBackend};
pub use checklist::Checklist;
pub use config::load_checklist_urls;
pub use display::{display_path, render_progress, status_icon, status_label};
pub use error::ClientError;
pub use http::HttpBackend;
pub use identity::{generate_user_id, UserProfile};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Milliseconds since the Unix epoch, the `updatedAt` clock
#[inline]
#[must_use]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
