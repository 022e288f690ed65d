// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Organization, employee and responsibility mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tender_bid_domain::{Employee, Organization, OrganizationType};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{employees, organization_responsibles, organizations};
use crate::error::PersistenceError;
use crate::mutations::timestamp_now;

/// Creates an organization.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_organization(
    conn: &mut SqliteConnection,
    name: &str,
    description: Option<&str>,
    organization_type: OrganizationType,
) -> Result<Organization, PersistenceError> {
    let now: String = timestamp_now()?;

    diesel::insert_into(organizations::table)
        .values((
            organizations::name.eq(name),
            organizations::description.eq(description),
            organizations::organization_type.eq(organization_type.as_str()),
            organizations::created_at.eq(&now),
            organizations::updated_at.eq(&now),
        ))
        .execute(conn)?;

    let organization_id: i64 = conn.get_last_insert_rowid()?;
    info!(organization_id, name, "Organization created");

    Ok(Organization {
        organization_id,
        name: name.to_string(),
        description: description.map(str::to_string),
        organization_type,
        created_at: now.clone(),
        updated_at: now,
    })
}

/// Creates an employee.
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateRecord` if the username is taken,
/// or another error if the insert fails.
pub fn create_employee(
    conn: &mut SqliteConnection,
    username: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<Employee, PersistenceError> {
    let now: String = timestamp_now()?;

    diesel::insert_into(employees::table)
        .values((
            employees::username.eq(username),
            employees::first_name.eq(first_name),
            employees::last_name.eq(last_name),
            employees::created_at.eq(&now),
            employees::updated_at.eq(&now),
        ))
        .execute(conn)?;

    let employee_id: i64 = conn.get_last_insert_rowid()?;
    info!(employee_id, username, "Employee created");

    Ok(Employee {
        employee_id,
        username: username.to_string(),
        first_name: first_name.map(str::to_string),
        last_name: last_name.map(str::to_string),
        created_at: now.clone(),
        updated_at: now,
    })
}

/// Grants an employee responsibility for an organization.
///
/// Duplicate grants are stored as separate rows and carry the same meaning.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if either side does not
/// exist, or another error if the insert fails.
pub fn add_responsible(
    conn: &mut SqliteConnection,
    organization_id: i64,
    employee_id: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(organization_responsibles::table)
        .values((
            organization_responsibles::organization_id.eq(organization_id),
            organization_responsibles::employee_id.eq(employee_id),
        ))
        .execute(conn)?;

    let responsible_id: i64 = conn.get_last_insert_rowid()?;
    info!(
        responsible_id,
        organization_id, employee_id, "Responsibility granted"
    );

    Ok(responsible_id)
}
