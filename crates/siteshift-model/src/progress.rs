//! Aggregate progress over the fixed URL checklist
//!
//! Pending is never counted from storage. URLs absent from the map and
//! entries stored as pending both land in the derived pending bucket, so
//! the four counts always sum to the checklist length.

use crate::types::{Status, TodoMap};

/// One status bucket of the aggregate progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusSlice {
    /// Which status this bucket covers
    pub status: Status,
    /// Number of checklist items in this bucket
    ///
    /// Signed: stale keys in excess of the checklist length push the
    /// derived pending count below zero rather than being hidden.
    pub count: i64,
    /// `count / total * 100`, or `0.0` when the checklist is empty
    pub percentage: f64,
}

/// Aggregate stored statuses into the four fixed display buckets.
///
/// Buckets are returned in [`Status::DISPLAY_ORDER`]: completed,
/// inProgress, questioned, pending. The pending count is derived as
/// `total` minus everything else. With `total == 0` every percentage is
/// defined as `0.0` instead of NaN.
#[must_use]
pub fn aggregate_progress(todos: &TodoMap, total: usize) -> [StatusSlice; 4] {
    let mut completed = 0_i64;
    let mut in_progress = 0_i64;
    let mut questioned = 0_i64;

    for item in todos.values() {
        match item.status {
            Status::Completed => completed += 1,
            Status::InProgress => in_progress += 1,
            Status::Questioned => questioned += 1,
            Status::Pending => {}
        }
    }

    let pending = total as i64 - (completed + in_progress + questioned);

    [
        slice(Status::Completed, completed, total),
        slice(Status::InProgress, in_progress, total),
        slice(Status::Questioned, questioned, total),
        slice(Status::Pending, pending, total),
    ]
}

fn slice(status: Status, count: i64, total: usize) -> StatusSlice {
    let percentage = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    };
    StatusSlice {
        status,
        count,
        percentage,
    }
}
