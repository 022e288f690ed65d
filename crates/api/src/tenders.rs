// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tender operations.

use tender_bid::{Command, validate_creation};
use tender_bid_domain::{NewTender, ServiceType, Tender, TenderContent, TenderPatch, TenderStatus};
use tender_bid_history::VersionSnapshot;
use tender_bid_persistence::Persistence;
use tracing::info;

use crate::error::{
    ApiError, require, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    ActorRequest, CreateTenderRequest, StatusUpdatedResponse, TenderResponse,
    TenderVersionResponse, UpdateStatusRequest, UpdateTenderRequest,
};
use crate::versioning::{self, Owner};

fn parse_service_type(value: Option<String>) -> Result<Option<ServiceType>, ApiError> {
    value
        .map(|text| text.parse::<ServiceType>())
        .transpose()
        .map_err(translate_domain_error)
}

fn parse_status(value: Option<String>) -> Result<Option<TenderStatus>, ApiError> {
    value
        .map(|text| text.parse::<TenderStatus>())
        .transpose()
        .map_err(translate_domain_error)
}

/// Creates a tender at version 1.
///
/// # Errors
///
/// Returns an error if:
/// - The creator is not responsible for the organization
/// - A required field is missing or invalid
pub fn create_tender(
    persistence: &mut Persistence,
    request: CreateTenderRequest,
) -> Result<TenderResponse, ApiError> {
    let owner: Owner = versioning::authorize_create::<Tender>(
        persistence,
        &request.creator,
        &request.organization,
    )?;

    let name: String = require("name", request.name)?;
    let service_type: ServiceType =
        require("service_type", parse_service_type(request.service_type)?)?;
    let status: TenderStatus = parse_status(request.status)?.unwrap_or(TenderStatus::Created);
    let content: TenderContent = TenderContent {
        name,
        description: request.description,
        status,
        service_type,
    };
    validate_creation::<Tender>(&content).map_err(translate_core_error)?;

    let tender: Tender = persistence
        .create_tender(&NewTender {
            organization_id: owner.organization_id,
            creator_id: owner.creator_id,
            content,
        })
        .map_err(translate_persistence_error)?;

    info!(
        tender_id = tender.tender_id,
        organization = owner.organization_id,
        actor = owner.creator_id,
        "Created tender"
    );
    Ok(TenderResponse::from(tender))
}

/// Retrieves a tender.
///
/// # Errors
///
/// Returns an error if the tender does not exist.
pub fn get_tender(persistence: &mut Persistence, id: i64) -> Result<TenderResponse, ApiError> {
    versioning::load::<Tender>(persistence, id).map(TenderResponse::from)
}

/// Lists every tender ordered by ID.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_tenders(persistence: &mut Persistence) -> Result<Vec<TenderResponse>, ApiError> {
    let tenders: Vec<Tender> = versioning::list(persistence)?;
    Ok(tenders.into_iter().map(TenderResponse::from).collect())
}

/// Replaces every mutable field of a tender.
///
/// An absent `description` clears it and an absent `status` keeps the
/// current one.
///
/// # Errors
///
/// Returns an error if:
/// - The tender does not exist
/// - The actor is neither the creator nor responsible for the organization
/// - `name` or `service_type` is missing or invalid
pub fn update_tender(
    persistence: &mut Persistence,
    id: i64,
    request: UpdateTenderRequest,
) -> Result<TenderResponse, ApiError> {
    let UpdateTenderRequest {
        name,
        description,
        service_type,
        status,
        creator,
    } = request;

    let tender: Tender =
        versioning::modify(persistence, id, &creator, "update", |current: &Tender| {
            let content: TenderContent = TenderContent {
                name: require("name", name)?,
                description: description.flatten(),
                status: parse_status(status)?.unwrap_or(current.content.status),
                service_type: require("service_type", parse_service_type(service_type)?)?,
            };
            Ok(Command::Update { content })
        })?;
    Ok(TenderResponse::from(tender))
}

/// Overwrites only the fields present in the request.
///
/// # Errors
///
/// Returns an error if:
/// - The tender does not exist
/// - The actor is neither the creator nor responsible for the organization
/// - A supplied field is invalid
pub fn partial_update_tender(
    persistence: &mut Persistence,
    id: i64,
    request: UpdateTenderRequest,
) -> Result<TenderResponse, ApiError> {
    let UpdateTenderRequest {
        name,
        description,
        service_type,
        status,
        creator,
    } = request;

    let tender: Tender = versioning::modify(persistence, id, &creator, "edit", |_: &Tender| {
        let patch: TenderPatch = TenderPatch {
            name,
            description,
            status: parse_status(status)?,
            service_type: parse_service_type(service_type)?,
        };
        Ok(Command::PartialUpdate { patch })
    })?;
    Ok(TenderResponse::from(tender))
}

/// Sets the status of a tender without logging a version.
///
/// # Errors
///
/// Returns an error if:
/// - The tender does not exist
/// - The actor is neither the creator nor responsible for the organization
/// - The status is not one of `CREATED`, `PUBLISHED`, `CLOSED`
pub fn update_tender_status(
    persistence: &mut Persistence,
    id: i64,
    request: UpdateStatusRequest,
) -> Result<StatusUpdatedResponse, ApiError> {
    let tender: Tender =
        versioning::update_status(persistence, id, request.status, &request.creator)?;
    Ok(StatusUpdatedResponse::new(tender.version))
}

/// Restores the content a tender had at `version`.
///
/// # Errors
///
/// Returns an error if:
/// - The tender does not exist
/// - The actor is neither the creator nor responsible for the organization
/// - `version` is not strictly between 0 and the live version
/// - No version log entry exists for `version`
pub fn rollback_tender(
    persistence: &mut Persistence,
    id: i64,
    version: i64,
    request: &ActorRequest,
) -> Result<TenderResponse, ApiError> {
    versioning::rollback::<Tender>(persistence, id, version, &request.creator)
        .map(TenderResponse::from)
}

/// Deletes a tender with its version log and bids.
///
/// # Errors
///
/// Returns an error if the tender does not exist or the actor lacks access.
pub fn delete_tender(
    persistence: &mut Persistence,
    id: i64,
    request: &ActorRequest,
) -> Result<(), ApiError> {
    versioning::delete::<Tender>(persistence, id, &request.creator)
}

/// Lists the tenders created by the employee with `username`.
///
/// # Errors
///
/// Returns an error if the username is missing or unknown.
pub fn list_my_tenders(
    persistence: &mut Persistence,
    username: Option<&str>,
) -> Result<Vec<TenderResponse>, ApiError> {
    let tenders: Vec<Tender> = versioning::list_mine(persistence, username)?;
    Ok(tenders.into_iter().map(TenderResponse::from).collect())
}

/// Lists the version log of a tender.
///
/// # Errors
///
/// Returns an error if the tender does not exist.
pub fn list_tender_versions(
    persistence: &mut Persistence,
    id: i64,
) -> Result<Vec<TenderVersionResponse>, ApiError> {
    let versions: Vec<VersionSnapshot<TenderContent>> =
        versioning::list_versions::<Tender>(persistence, id)?;
    Ok(versions
        .into_iter()
        .map(TenderVersionResponse::from)
        .collect())
}
