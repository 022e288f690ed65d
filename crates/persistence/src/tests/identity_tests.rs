// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{Fixture, create_fixture};
use crate::{Persistence, PersistenceError};
use tender_bid_domain::{Employee, Organization, OrganizationType};

#[test]
fn test_create_and_get_organization() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let created: Organization = persistence
        .create_organization("Acme", None, OrganizationType::JointStock)
        .unwrap();

    let loaded: Organization = persistence
        .get_organization(created.organization_id)
        .unwrap()
        .unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.organization_type, OrganizationType::JointStock);
}

#[test]
fn test_missing_organization_is_none() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.get_organization(42).unwrap().is_none());
}

#[test]
fn test_create_and_get_employee() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let created: Employee = persistence
        .create_employee("bob", Some("Bob"), Some("Builder"))
        .unwrap();

    assert_eq!(
        persistence.get_employee(created.employee_id).unwrap(),
        Some(created.clone())
    );
    assert_eq!(
        persistence.get_employee_by_username("bob").unwrap(),
        Some(created)
    );
}

#[test]
fn test_duplicate_username_is_rejected() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.create_employee("bob", None, None).unwrap();

    let result: Result<Employee, PersistenceError> =
        persistence.create_employee("bob", Some("Other"), None);

    assert!(matches!(result, Err(PersistenceError::DuplicateRecord(_))));
}

#[test]
fn test_responsibility_lookup() {
    let mut fixture: Fixture = create_fixture();
    let organization_id: i64 = fixture.organization.organization_id;

    assert_eq!(
        fixture
            .persistence
            .list_responsible_organizations(fixture.employee.employee_id)
            .unwrap(),
        vec![organization_id]
    );
    assert!(
        fixture
            .persistence
            .is_username_responsible("alice", organization_id)
            .unwrap()
    );
    assert!(
        !fixture
            .persistence
            .is_username_responsible("nobody", organization_id)
            .unwrap()
    );
}

#[test]
fn test_duplicate_responsibility_grant_is_harmless() {
    let mut fixture: Fixture = create_fixture();
    let organization_id: i64 = fixture.organization.organization_id;
    let employee_id: i64 = fixture.employee.employee_id;

    fixture
        .persistence
        .add_responsible(organization_id, employee_id)
        .unwrap();

    assert_eq!(
        fixture
            .persistence
            .list_responsible_organizations(employee_id)
            .unwrap(),
        vec![organization_id]
    );
}

#[test]
fn test_responsibility_requires_existing_rows() {
    let mut fixture: Fixture = create_fixture();
    let result: Result<i64, PersistenceError> = fixture
        .persistence
        .add_responsible(fixture.organization.organization_id, 999);

    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
}
