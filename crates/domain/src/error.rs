// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Tender or bid name is empty or too long.
    InvalidName(String),
    /// Employee username is empty or too long.
    InvalidUsername(String),
    /// Employee first or last name is too long.
    InvalidPersonName(String),
    /// Organization name is empty or too long.
    InvalidOrganizationName(String),
    /// Organization type is not one of the known legal forms.
    InvalidOrganizationType(String),
    /// Status value is not accepted for the entity kind.
    InvalidStatus {
        /// The rejected status value.
        status: String,
    },
    /// Service type is not one of the known categories.
    InvalidServiceType(String),
    /// Review content is empty.
    InvalidReviewContent(String),
    /// Rollback target is outside the range of earlier versions.
    InvalidRollbackTarget {
        /// The version the caller asked to restore.
        requested: i64,
        /// The live version at the time of the request.
        current: i32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidUsername(msg) => write!(f, "Invalid username: {msg}"),
            Self::InvalidPersonName(msg) => write!(f, "Invalid person name: {msg}"),
            Self::InvalidOrganizationName(msg) => write!(f, "Invalid organization name: {msg}"),
            Self::InvalidOrganizationType(value) => {
                write!(f, "Invalid organization type: '{value}'")
            }
            Self::InvalidStatus { status } => write!(f, "Invalid status: '{status}'"),
            Self::InvalidServiceType(value) => write!(f, "Invalid service type: '{value}'"),
            Self::InvalidReviewContent(msg) => write!(f, "Invalid review content: {msg}"),
            Self::InvalidRollbackTarget { requested, current } => {
                write!(
                    f,
                    "Cannot roll back to version {requested}: target must be between 1 and {}",
                    current.saturating_sub(1)
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
