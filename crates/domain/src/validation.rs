// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{BidContent, TenderContent};

/// Maximum length of a tender or bid name.
pub const MAX_ENTITY_NAME_LEN: usize = 255;
/// Maximum length of an employee username.
pub const MAX_USERNAME_LEN: usize = 50;
/// Maximum length of an employee first or last name.
pub const MAX_PERSON_NAME_LEN: usize = 50;
/// Maximum length of an organization name.
pub const MAX_ORGANIZATION_NAME_LEN: usize = 100;

/// Validates a tender or bid name.
///
/// # Errors
///
/// Returns an error if the name is blank or longer than
/// [`MAX_ENTITY_NAME_LEN`] characters.
pub fn validate_entity_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    if name.chars().count() > MAX_ENTITY_NAME_LEN {
        return Err(DomainError::InvalidName(format!(
            "Name cannot exceed {MAX_ENTITY_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validates tender content before it becomes live.
///
/// # Errors
///
/// Returns an error if the name is invalid.
pub fn validate_tender_content(content: &TenderContent) -> Result<(), DomainError> {
    validate_entity_name(&content.name)
}

/// Validates bid content before it becomes live.
///
/// # Errors
///
/// Returns an error if the name is invalid.
pub fn validate_bid_content(content: &BidContent) -> Result<(), DomainError> {
    validate_entity_name(&content.name)
}

/// Validates an employee username.
///
/// # Errors
///
/// Returns an error if the username is blank, contains whitespace, or is
/// longer than [`MAX_USERNAME_LEN`] characters.
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.is_empty() {
        return Err(DomainError::InvalidUsername(String::from(
            "Username cannot be empty",
        )));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidUsername(String::from(
            "Username cannot contain whitespace",
        )));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(DomainError::InvalidUsername(format!(
            "Username cannot exceed {MAX_USERNAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validates an optional first or last name.
///
/// # Errors
///
/// Returns an error if the name is longer than [`MAX_PERSON_NAME_LEN`]
/// characters.
pub fn validate_person_name(name: Option<&str>) -> Result<(), DomainError> {
    match name {
        Some(value) if value.chars().count() > MAX_PERSON_NAME_LEN => {
            Err(DomainError::InvalidPersonName(format!(
                "Name cannot exceed {MAX_PERSON_NAME_LEN} characters"
            )))
        }
        _ => Ok(()),
    }
}

/// Validates an organization name.
///
/// # Errors
///
/// Returns an error if the name is blank or longer than
/// [`MAX_ORGANIZATION_NAME_LEN`] characters.
pub fn validate_organization_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidOrganizationName(String::from(
            "Organization name cannot be empty",
        )));
    }
    if name.chars().count() > MAX_ORGANIZATION_NAME_LEN {
        return Err(DomainError::InvalidOrganizationName(format!(
            "Organization name cannot exceed {MAX_ORGANIZATION_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validates the content of a review.
///
/// # Errors
///
/// Returns an error if the content is empty.
pub fn validate_review_content(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::InvalidReviewContent(String::from(
            "Review content cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a rollback target names a strictly earlier, strictly
/// positive version.
///
/// # Arguments
///
/// * `current` - The live version of the entity
/// * `requested` - The version the caller wants to restore
///
/// # Returns
///
/// The target as a version number.
///
/// # Errors
///
/// Returns `DomainError::InvalidRollbackTarget` when
/// `requested <= 0` or `requested >= current`.
pub fn validate_rollback_target(current: i32, requested: i64) -> Result<i32, DomainError> {
    let target: i32 = match i32::try_from(requested) {
        Ok(target) if target > 0 && target < current => target,
        _ => {
            return Err(DomainError::InvalidRollbackTarget { requested, current });
        }
    };
    Ok(target)
}
