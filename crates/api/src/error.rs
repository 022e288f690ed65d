// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use tender_bid::CoreError;
use tender_bid_domain::DomainError;
use tender_bid_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent
/// the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required field is missing or carries an invalid value.
    BadRequest {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A rollback target is outside `1..current`.
    InvalidVersion {
        /// The version the caller asked for.
        requested: i64,
        /// The live version.
        current: i32,
    },
    /// The actor is neither responsible for the organization nor the creator.
    PermissionDenied {
        /// The action that was attempted.
        action: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The write lost a race with another writer.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidVersion { requested, current } => {
                write!(
                    f,
                    "Invalid version {requested}: must be between 1 and {}",
                    current.saturating_sub(1)
                )
            }
            Self::PermissionDenied { action } => {
                write!(f, "Permission denied: not allowed to {action}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Problems with individual request-body fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// A required field was absent.
    #[error("This field is required")]
    Missing { field: &'static str },

    /// A field held a value outside its allowed set.
    #[error("Invalid value '{value}'")]
    InvalidChoice { field: &'static str, value: String },
}

impl FieldError {
    /// The name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::InvalidChoice { field, .. } => field,
        }
    }
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        Self::BadRequest {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Unwraps a required request field.
///
/// # Errors
///
/// Returns `FieldError::Missing` if the field is absent.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, FieldError> {
    value.ok_or(FieldError::Missing { field })
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let (field, message): (&str, String) = match err {
        DomainError::InvalidRollbackTarget { requested, current } => {
            return ApiError::InvalidVersion { requested, current };
        }
        DomainError::InvalidName(msg) | DomainError::InvalidOrganizationName(msg) => ("name", msg),
        DomainError::InvalidUsername(msg) => ("username", msg),
        DomainError::InvalidPersonName(msg) => ("first_name/last_name", msg),
        DomainError::InvalidOrganizationType(value) => {
            ("type", format!("Invalid organization type: '{value}'"))
        }
        DomainError::InvalidStatus { status } => ("status", format!("Invalid status: '{status}'")),
        DomainError::InvalidServiceType(value) => {
            ("service_type", format!("Invalid service type: '{value}'"))
        }
        DomainError::InvalidReviewContent(msg) => ("content", msg),
    };
    ApiError::BadRequest {
        field: field.to_string(),
        message,
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::VersionMismatch { .. } => ApiError::Internal {
            message: err.to_string(),
        },
        CoreError::VersionOverflow { .. } => ApiError::Conflict {
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        PersistenceError::ConcurrentModification { .. }
        | PersistenceError::DuplicateRecord(_)
        | PersistenceError::ForeignKeyViolation(_) => ApiError::Conflict {
            message: err.to_string(),
        },
        _ => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
