// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, MAX_ENTITY_NAME_LEN, MAX_USERNAME_LEN, validate_entity_name,
    validate_organization_name, validate_person_name, validate_review_content,
    validate_rollback_target, validate_username,
};

#[test]
fn test_entity_name_must_not_be_blank() {
    assert!(validate_entity_name("").is_err());
    assert!(validate_entity_name("   ").is_err());
    assert!(validate_entity_name("Tender").is_ok());
}

#[test]
fn test_entity_name_length_limit() {
    let at_limit: String = "a".repeat(MAX_ENTITY_NAME_LEN);
    let over_limit: String = "a".repeat(MAX_ENTITY_NAME_LEN + 1);

    assert!(validate_entity_name(&at_limit).is_ok());
    assert!(matches!(
        validate_entity_name(&over_limit),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_username_rules() {
    assert!(validate_username("jdoe").is_ok());
    assert!(validate_username("").is_err());
    assert!(validate_username("j doe").is_err());
    assert!(validate_username(&"u".repeat(MAX_USERNAME_LEN + 1)).is_err());
}

#[test]
fn test_person_name_is_optional() {
    assert!(validate_person_name(None).is_ok());
    assert!(validate_person_name(Some("Jane")).is_ok());
    assert!(validate_person_name(Some(&"n".repeat(51))).is_err());
}

#[test]
fn test_organization_name_rules() {
    assert!(validate_organization_name("Acme").is_ok());
    assert!(validate_organization_name("").is_err());
    assert!(validate_organization_name(&"o".repeat(101)).is_err());
}

#[test]
fn test_review_content_must_not_be_empty() {
    assert!(validate_review_content("").is_err());
    assert!(validate_review_content("\n").is_err());
    assert!(validate_review_content("Looks good").is_ok());
}

#[test]
fn test_rollback_target_accepts_strictly_earlier_positive_versions() {
    assert_eq!(validate_rollback_target(3, 1), Ok(1));
    assert_eq!(validate_rollback_target(3, 2), Ok(2));
}

#[test]
fn test_rollback_target_rejects_out_of_range() {
    for requested in [0, -1, 3, 4, i64::MAX] {
        assert_eq!(
            validate_rollback_target(3, requested),
            Err(DomainError::InvalidRollbackTarget {
                requested,
                current: 3,
            }),
            "requested={requested}"
        );
    }
}

#[test]
fn test_rollback_impossible_on_first_version() {
    assert!(validate_rollback_target(1, 1).is_err());
}
