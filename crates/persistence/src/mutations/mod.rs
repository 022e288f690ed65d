// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! ## Module Organization
//!
//! - `identity`: Organizations, employees and responsibility links
//! - `tenders`: Tender creation, versioned transitions and deletion
//! - `bids`: Bid creation, versioned transitions and deletion
//! - `reviews`: Review creation
//!
//! Every versioned write runs inside one transaction that appends the
//! version-log row and updates the live row conditionally on its version.

pub mod bids;
pub mod identity;
pub mod reviews;
pub mod tenders;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::PersistenceError;

/// Returns the current UTC time as an RFC 3339 string.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn timestamp_now() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}

/// Turns a unique-index collision on the version log into a concurrency error.
///
/// A second writer that read the same live version tries to log the same
/// version number and trips `UNIQUE (parent, version)`.
pub fn version_conflict(
    err: PersistenceError,
    entity: &str,
    id: i64,
    expected_version: i32,
) -> PersistenceError {
    match err {
        PersistenceError::DuplicateRecord(_) => PersistenceError::ConcurrentModification {
            entity: entity.to_string(),
            id,
            expected_version,
        },
        other => other,
    }
}
