// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tender_bid_domain::DomainError;

/// Errors that can occur during entity transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The snapshot supplied for a rollback does not carry the requested version.
    VersionMismatch {
        /// The version the caller asked for.
        requested: i64,
        /// The version recorded on the supplied snapshot.
        found: i32,
    },
    /// The version counter cannot be incremented any further.
    VersionOverflow {
        /// The live version.
        current: i32,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::VersionMismatch { requested, found } => write!(
                f,
                "Snapshot version mismatch: requested {requested}, found {found}"
            ),
            Self::VersionOverflow { current } => {
                write!(f, "Version {current} cannot be incremented")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
