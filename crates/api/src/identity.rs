// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Setup operations for organizations, employees and responsibility links.

use tender_bid_domain::{
    Employee, Organization, OrganizationType, validate_organization_name, validate_person_name,
    validate_username,
};
use tender_bid_persistence::{Persistence, PersistenceError};
use tracing::info;

use crate::error::{ApiError, require, translate_domain_error, translate_persistence_error};
use crate::identifiers::parse_identifier;
use crate::request_response::{
    AddResponsibleRequest, CreateEmployeeRequest, CreateOrganizationRequest, EmployeeResponse,
    OrganizationResponse, ResponsibleResponse,
};

/// Registers an employee.
///
/// # Errors
///
/// Returns an error if the username is missing, invalid, or taken, or if a
/// name is too long.
pub fn create_employee(
    persistence: &mut Persistence,
    request: &CreateEmployeeRequest,
) -> Result<EmployeeResponse, ApiError> {
    let username: &str = require("username", request.username.as_deref())?;
    validate_username(username).map_err(translate_domain_error)?;
    validate_person_name(request.first_name.as_deref()).map_err(translate_domain_error)?;
    validate_person_name(request.last_name.as_deref()).map_err(translate_domain_error)?;

    let employee: Employee = persistence
        .create_employee(
            username,
            request.first_name.as_deref(),
            request.last_name.as_deref(),
        )
        .map_err(|err| match err {
            PersistenceError::DuplicateRecord(_) => ApiError::BadRequest {
                field: String::from("username"),
                message: format!("duplicate_username: '{username}' is already taken"),
            },
            other => translate_persistence_error(other),
        })?;

    info!(employee_id = employee.employee_id, username, "Created employee");
    Ok(EmployeeResponse::from(employee))
}

/// Registers an organization.
///
/// # Errors
///
/// Returns an error if the name is missing or invalid, or the type is not
/// one of `IE`, `LLC`, `JSC`.
pub fn create_organization(
    persistence: &mut Persistence,
    request: &CreateOrganizationRequest,
) -> Result<OrganizationResponse, ApiError> {
    let name: &str = require("name", request.name.as_deref())?;
    validate_organization_name(name).map_err(translate_domain_error)?;
    let organization_type: OrganizationType = require("type", request.organization_type.as_deref())?
        .parse::<OrganizationType>()
        .map_err(translate_domain_error)?;

    let organization: Organization = persistence
        .create_organization(name, request.description.as_deref(), organization_type)
        .map_err(translate_persistence_error)?;

    info!(
        organization_id = organization.organization_id,
        name,
        organization_type = organization_type.as_str(),
        "Created organization"
    );
    Ok(OrganizationResponse::from(organization))
}

/// Makes an employee responsible for an organization.
///
/// Repeating a pair adds another link granting the same capability.
///
/// # Errors
///
/// Returns an error if the organization or the employee does not exist.
pub fn add_responsible(
    persistence: &mut Persistence,
    organization_id: i64,
    request: &AddResponsibleRequest,
) -> Result<ResponsibleResponse, ApiError> {
    let organization: Organization = persistence
        .get_organization(organization_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Organization"),
            message: format!("Organization {organization_id} does not exist"),
        })?;

    let employee: Employee = match parse_identifier(&request.employee) {
        Some(employee_id) => persistence
            .get_employee(employee_id)
            .map_err(translate_persistence_error)?,
        None => None,
    }
    .ok_or_else(|| ApiError::ResourceNotFound {
        resource_type: String::from("Employee"),
        message: String::from("Employee does not exist"),
    })?;

    let link_id: i64 = persistence
        .add_responsible(organization.organization_id, employee.employee_id)
        .map_err(translate_persistence_error)?;

    info!(
        organization_id = organization.organization_id,
        employee_id = employee.employee_id,
        "Added organization responsible"
    );
    Ok(ResponsibleResponse {
        id: link_id,
        organization: organization.organization_id,
        employee: employee.employee_id,
    })
}
