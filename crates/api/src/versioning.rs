// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operations shared by tenders and bids.
//!
//! Everything here is generic over [`Versioned`] and goes through
//! [`VersionedStore`], so the kind-specific modules only translate request
//! bodies into commands and entities into responses.

use serde_json::Value;
use tender_bid::{Capability, Command, Transition, apply, can_create, can_modify};
use tender_bid_domain::{Employee, StatusValue, validate_rollback_target};
use tender_bid_history::{VersionSnapshot, Versioned};
use tender_bid_persistence::{Persistence, VersionedStore};
use tracing::{info, warn};

use crate::error::{
    ApiError, FieldError, require, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
use crate::identifiers::parse_identifier;

/// The identifiers a create request resolved to once access was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner {
    pub creator_id: i64,
    pub organization_id: i64,
}

pub fn not_found<T: Versioned>(id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: T::KIND.resource_name().to_string(),
        message: format!("{} {id} does not exist", T::KIND.resource_name()),
    }
}

/// Loads a live entity or fails with `ResourceNotFound`.
pub fn load<T>(persistence: &mut Persistence, id: i64) -> Result<T, ApiError>
where
    T: Versioned,
    Persistence: VersionedStore<T>,
{
    <Persistence as VersionedStore<T>>::load(persistence, id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found::<T>(id))
}

pub fn list<T>(persistence: &mut Persistence) -> Result<Vec<T>, ApiError>
where
    T: Versioned,
    Persistence: VersionedStore<T>,
{
    <Persistence as VersionedStore<T>>::list_all(persistence).map_err(translate_persistence_error)
}

fn responsible_for(
    persistence: &mut Persistence,
    actor: Option<i64>,
) -> Result<Vec<i64>, ApiError> {
    match actor {
        Some(actor_id) => persistence
            .list_responsible_organizations(actor_id)
            .map_err(translate_persistence_error),
        None => Ok(Vec::new()),
    }
}

/// Checks that the asserted creator may create an entity for the asserted
/// organization.
///
/// # Errors
///
/// Returns `ApiError::PermissionDenied` if either identifier is missing or
/// malformed, or if no responsibility link exists for the pair.
pub fn authorize_create<T: Versioned>(
    persistence: &mut Persistence,
    creator: &Value,
    organization: &Value,
) -> Result<Owner, ApiError> {
    let actor: Option<i64> = parse_identifier(creator);
    let organization_id: Option<i64> = parse_identifier(organization);
    let responsible_for: Vec<i64> = responsible_for(persistence, actor)?;

    match (
        can_create(actor, organization_id, &responsible_for),
        actor,
        organization_id,
    ) {
        (Capability::Allowed, Some(creator_id), Some(organization_id)) => Ok(Owner {
            creator_id,
            organization_id,
        }),
        _ => {
            warn!(
                kind = %T::KIND,
                actor = ?actor,
                organization = ?organization_id,
                "Create denied: not responsible for the organization"
            );
            Err(ApiError::PermissionDenied {
                action: format!("create {} for this organization", T::KIND),
            })
        }
    }
}

/// Checks that the asserted actor is the entity's creator or responsible
/// for its organization.
///
/// # Errors
///
/// Returns `ApiError::PermissionDenied` otherwise.
pub fn authorize_modify<T: Versioned>(
    persistence: &mut Persistence,
    entity: &T,
    creator: &Value,
    action: &str,
) -> Result<i64, ApiError> {
    let actor: Option<i64> = parse_identifier(creator);
    let responsible_for: Vec<i64> = responsible_for(persistence, actor)?;

    match (can_modify(entity, actor, &responsible_for), actor) {
        (Capability::Allowed, Some(actor_id)) => Ok(actor_id),
        _ => {
            warn!(
                kind = %T::KIND,
                id = entity.id(),
                actor = ?actor,
                action,
                "Modification denied"
            );
            Err(ApiError::PermissionDenied {
                action: format!("{action} {} {}", T::KIND, entity.id()),
            })
        }
    }
}

/// Applies a command and persists the resulting transition.
fn commit<T>(
    persistence: &mut Persistence,
    entity: &T,
    command: Command<T>,
    actor: i64,
) -> Result<T, ApiError>
where
    T: Versioned,
    Persistence: VersionedStore<T>,
{
    let transition: Transition<T> = apply(entity, command).map_err(translate_core_error)?;
    let updated: T =
        <Persistence as VersionedStore<T>>::persist_transition(persistence, &transition)
            .map_err(translate_persistence_error)?;

    info!(
        kind = %T::KIND,
        id = updated.id(),
        version = updated.version(),
        actor,
        action = transition.action,
        "Mutation applied"
    );
    Ok(updated)
}

/// Loads, authorizes, and mutates an entity with the command `build`
/// derives from it.
///
/// Authorization runs before `build`, so a caller without access learns
/// nothing about which fields were wrong.
pub fn modify<T, F>(
    persistence: &mut Persistence,
    id: i64,
    creator: &Value,
    action: &str,
    build: F,
) -> Result<T, ApiError>
where
    T: Versioned,
    Persistence: VersionedStore<T>,
    F: FnOnce(&T) -> Result<Command<T>, ApiError>,
{
    let entity: T = load(persistence, id)?;
    let actor: i64 = authorize_modify(persistence, &entity, creator, action)?;
    let command: Command<T> = build(&entity)?;
    commit(persistence, &entity, command, actor)
}

/// Sets the status from the shared three-value set.
pub fn update_status<T>(
    persistence: &mut Persistence,
    id: i64,
    status: Option<String>,
    creator: &Value,
) -> Result<T, ApiError>
where
    T: Versioned,
    Persistence: VersionedStore<T>,
{
    modify(persistence, id, creator, "update status of", |_: &T| {
        let status: String = require("status", status)?;
        let status: StatusValue = status
            .parse::<StatusValue>()
            .map_err(|_| ApiError::from(FieldError::InvalidChoice {
                field: "status",
                value: status,
            }))?;
        Ok(Command::UpdateStatus { status })
    })
}

/// Restores the content logged under `requested` as a new version.
pub fn rollback<T>(
    persistence: &mut Persistence,
    id: i64,
    requested: i64,
    creator: &Value,
) -> Result<T, ApiError>
where
    T: Versioned,
    Persistence: VersionedStore<T>,
{
    let entity: T = load(persistence, id)?;
    let actor: i64 = authorize_modify(persistence, &entity, creator, "roll back")?;
    let target_version: i32 =
        validate_rollback_target(entity.version(), requested).map_err(translate_domain_error)?;

    let target: VersionSnapshot<T::Content> =
        <Persistence as VersionedStore<T>>::load_version(persistence, id, target_version)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Version"),
                message: format!(
                    "{} {id} has no version {target_version}",
                    T::KIND.resource_name()
                ),
            })?;

    commit(
        persistence,
        &entity,
        Command::Rollback { requested, target },
        actor,
    )
}

pub fn delete<T>(persistence: &mut Persistence, id: i64, creator: &Value) -> Result<(), ApiError>
where
    T: Versioned,
    Persistence: VersionedStore<T>,
{
    let entity: T = load(persistence, id)?;
    let actor: i64 = authorize_modify(persistence, &entity, creator, "delete")?;
    <Persistence as VersionedStore<T>>::delete(persistence, id)
        .map_err(translate_persistence_error)?;

    info!(kind = %T::KIND, id, actor, "Entity deleted");
    Ok(())
}

/// Lists the entities created by the employee with `username`.
pub fn list_mine<T>(
    persistence: &mut Persistence,
    username: Option<&str>,
) -> Result<Vec<T>, ApiError>
where
    T: Versioned,
    Persistence: VersionedStore<T>,
{
    let username: &str = username
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest {
            field: String::from("username"),
            message: String::from("Username parameter is required."),
        })?;
    let employee: Employee = find_employee(persistence, username)?;
    <Persistence as VersionedStore<T>>::list_by_creator(persistence, employee.employee_id)
        .map_err(translate_persistence_error)
}

pub fn list_versions<T>(
    persistence: &mut Persistence,
    id: i64,
) -> Result<Vec<VersionSnapshot<T::Content>>, ApiError>
where
    T: Versioned,
    Persistence: VersionedStore<T>,
{
    let _entity: T = load(persistence, id)?;
    <Persistence as VersionedStore<T>>::list_versions(persistence, id)
        .map_err(translate_persistence_error)
}

/// Resolves a username or fails with `ResourceNotFound`.
pub fn find_employee(persistence: &mut Persistence, username: &str) -> Result<Employee, ApiError> {
    persistence
        .get_employee_by_username(username)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: String::from("User not found."),
        })
}
