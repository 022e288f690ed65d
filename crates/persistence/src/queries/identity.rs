// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Organization, employee and responsibility queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tender_bid_domain::{Employee, Organization};
use tracing::debug;

use crate::data_models::{EmployeeRow, OrganizationRow};
use crate::diesel_schema::{employees, organization_responsibles, organizations};
use crate::error::PersistenceError;

/// Retrieves an organization by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the organization is not found.
pub fn get_organization(
    conn: &mut SqliteConnection,
    organization_id: i64,
) -> Result<Option<Organization>, PersistenceError> {
    debug!(organization_id, "Looking up organization");

    organizations::table
        .filter(organizations::organization_id.eq(organization_id))
        .select(OrganizationRow::as_select())
        .first::<OrganizationRow>(conn)
        .optional()?
        .map(Organization::try_from)
        .transpose()
}

/// Retrieves an employee by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee is not found.
pub fn get_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<Employee>, PersistenceError> {
    debug!(employee_id, "Looking up employee");

    let row: Option<EmployeeRow> = employees::table
        .filter(employees::employee_id.eq(employee_id))
        .select(EmployeeRow::as_select())
        .first::<EmployeeRow>(conn)
        .optional()?;

    Ok(row.map(Employee::from))
}

/// Retrieves an employee by username. Usernames are matched exactly.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no employee has this username.
pub fn get_employee_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<Employee>, PersistenceError> {
    debug!(username, "Looking up employee by username");

    let row: Option<EmployeeRow> = employees::table
        .filter(employees::username.eq(username))
        .select(EmployeeRow::as_select())
        .first::<EmployeeRow>(conn)
        .optional()?;

    Ok(row.map(Employee::from))
}

/// Lists the organizations an employee is responsible for, without duplicates.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_responsible_organizations(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    debug!(employee_id, "Listing responsible organizations");

    Ok(organization_responsibles::table
        .filter(organization_responsibles::employee_id.eq(employee_id))
        .select(organization_responsibles::organization_id)
        .distinct()
        .order(organization_responsibles::organization_id.asc())
        .load::<i64>(conn)?)
}

/// Checks whether the employee with `username` is responsible for an organization.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_username_responsible(
    conn: &mut SqliteConnection,
    username: &str,
    organization_id: i64,
) -> Result<bool, PersistenceError> {
    debug!(username, organization_id, "Checking responsibility by username");

    let count: i64 = organization_responsibles::table
        .inner_join(employees::table)
        .filter(employees::username.eq(username))
        .filter(organization_responsibles::organization_id.eq(organization_id))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}
