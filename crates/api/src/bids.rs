// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bid operations.

use tender_bid::{Command, validate_creation};
use tender_bid_domain::{Bid, BidContent, BidPatch, BidStatus, NewBid, Tender};
use tender_bid_history::VersionSnapshot;
use tender_bid_persistence::Persistence;
use tracing::info;

use crate::error::{
    ApiError, require, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::identifiers::parse_identifier;
use crate::request_response::{
    ActorRequest, BidResponse, BidVersionResponse, CreateBidRequest, StatusUpdatedResponse,
    UpdateBidRequest, UpdateStatusRequest,
};
use crate::versioning::{self, Owner};

fn parse_status(value: Option<String>) -> Result<Option<BidStatus>, ApiError> {
    value
        .map(|text| text.parse::<BidStatus>())
        .transpose()
        .map_err(translate_domain_error)
}

/// Creates a bid on a tender at version 1.
///
/// # Errors
///
/// Returns an error if:
/// - The creator is not responsible for the organization
/// - The tender does not exist
/// - A required field is missing or invalid
pub fn create_bid(
    persistence: &mut Persistence,
    request: CreateBidRequest,
) -> Result<BidResponse, ApiError> {
    let owner: Owner =
        versioning::authorize_create::<Bid>(persistence, &request.creator, &request.organization)?;

    let tender_id: i64 = parse_identifier(&request.tender).ok_or_else(|| ApiError::BadRequest {
        field: String::from("tender"),
        message: String::from("A valid tender identifier is required"),
    })?;
    let tender: Tender = versioning::load(persistence, tender_id)?;

    let content: BidContent = BidContent {
        name: require("name", request.name)?,
        description: request.description,
        status: parse_status(request.status)?.unwrap_or(BidStatus::Created),
    };
    validate_creation::<Bid>(&content).map_err(translate_core_error)?;

    let bid: Bid = persistence
        .create_bid(&NewBid {
            tender_id: tender.tender_id,
            organization_id: owner.organization_id,
            creator_id: owner.creator_id,
            content,
        })
        .map_err(translate_persistence_error)?;

    info!(
        bid_id = bid.bid_id,
        tender_id = bid.tender_id,
        organization = owner.organization_id,
        actor = owner.creator_id,
        "Created bid"
    );
    Ok(BidResponse::from(bid))
}

/// Retrieves a bid.
///
/// # Errors
///
/// Returns an error if the bid does not exist.
pub fn get_bid(persistence: &mut Persistence, id: i64) -> Result<BidResponse, ApiError> {
    versioning::load::<Bid>(persistence, id).map(BidResponse::from)
}

/// Lists every bid ordered by ID.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_bids(persistence: &mut Persistence) -> Result<Vec<BidResponse>, ApiError> {
    let bids: Vec<Bid> = versioning::list(persistence)?;
    Ok(bids.into_iter().map(BidResponse::from).collect())
}

/// Lists every bid on a tender, whatever its status.
///
/// # Errors
///
/// Returns an error if the tender does not exist.
pub fn list_bids_for_tender(
    persistence: &mut Persistence,
    tender_id: i64,
) -> Result<Vec<BidResponse>, ApiError> {
    let _tender: Tender = versioning::load(persistence, tender_id)?;
    let bids: Vec<Bid> = persistence
        .list_bids_for_tender(tender_id)
        .map_err(translate_persistence_error)?;
    Ok(bids.into_iter().map(BidResponse::from).collect())
}

/// Replaces every mutable field of a bid.
///
/// An absent `description` clears it and an absent `status` keeps the
/// current one.
///
/// # Errors
///
/// Returns an error if:
/// - The bid does not exist
/// - The actor is neither the creator nor responsible for the organization
/// - `name` is missing or a field is invalid
pub fn update_bid(
    persistence: &mut Persistence,
    id: i64,
    request: UpdateBidRequest,
) -> Result<BidResponse, ApiError> {
    let UpdateBidRequest {
        name,
        description,
        status,
        creator,
    } = request;

    let bid: Bid = versioning::modify(persistence, id, &creator, "update", |current: &Bid| {
        let content: BidContent = BidContent {
            name: require("name", name)?,
            description: description.flatten(),
            status: parse_status(status)?.unwrap_or(current.content.status),
        };
        Ok(Command::Update { content })
    })?;
    Ok(BidResponse::from(bid))
}

/// Overwrites only the fields present in the request.
///
/// This is the only path to `CANCELED`.
///
/// # Errors
///
/// Returns an error if:
/// - The bid does not exist
/// - The actor is neither the creator nor responsible for the organization
/// - A supplied field is invalid
pub fn partial_update_bid(
    persistence: &mut Persistence,
    id: i64,
    request: UpdateBidRequest,
) -> Result<BidResponse, ApiError> {
    let UpdateBidRequest {
        name,
        description,
        status,
        creator,
    } = request;

    let bid: Bid = versioning::modify(persistence, id, &creator, "edit", |_: &Bid| {
        let patch: BidPatch = BidPatch {
            name,
            description,
            status: parse_status(status)?,
        };
        Ok(Command::PartialUpdate { patch })
    })?;
    Ok(BidResponse::from(bid))
}

/// Sets the status of a bid without logging a version.
///
/// The value must come from the shared `CREATED`/`PUBLISHED`/`CLOSED` set,
/// and `CLOSED` has no bid counterpart, so only the first two succeed.
///
/// # Errors
///
/// Returns an error if:
/// - The bid does not exist
/// - The actor is neither the creator nor responsible for the organization
/// - The status is not accepted
pub fn update_bid_status(
    persistence: &mut Persistence,
    id: i64,
    request: UpdateStatusRequest,
) -> Result<StatusUpdatedResponse, ApiError> {
    let bid: Bid = versioning::update_status(persistence, id, request.status, &request.creator)?;
    Ok(StatusUpdatedResponse::new(bid.version))
}

/// Restores the content a bid had at `version`.
///
/// # Errors
///
/// Returns an error if:
/// - The bid does not exist
/// - The actor is neither the creator nor responsible for the organization
/// - `version` is not strictly between 0 and the live version
/// - No version log entry exists for `version`
pub fn rollback_bid(
    persistence: &mut Persistence,
    id: i64,
    version: i64,
    request: &ActorRequest,
) -> Result<BidResponse, ApiError> {
    versioning::rollback::<Bid>(persistence, id, version, &request.creator).map(BidResponse::from)
}

/// Deletes a bid with its version log and reviews.
///
/// # Errors
///
/// Returns an error if the bid does not exist or the actor lacks access.
pub fn delete_bid(
    persistence: &mut Persistence,
    id: i64,
    request: &ActorRequest,
) -> Result<(), ApiError> {
    versioning::delete::<Bid>(persistence, id, &request.creator)
}

/// Lists the bids created by the employee with `username`.
///
/// # Errors
///
/// Returns an error if the username is missing or unknown.
pub fn list_my_bids(
    persistence: &mut Persistence,
    username: Option<&str>,
) -> Result<Vec<BidResponse>, ApiError> {
    let bids: Vec<Bid> = versioning::list_mine(persistence, username)?;
    Ok(bids.into_iter().map(BidResponse::from).collect())
}

/// Lists the version log of a bid.
///
/// # Errors
///
/// Returns an error if the bid does not exist.
pub fn list_bid_versions(
    persistence: &mut Persistence,
    id: i64,
) -> Result<Vec<BidVersionResponse>, ApiError> {
    let versions: Vec<VersionSnapshot<BidContent>> =
        versioning::list_versions::<Bid>(persistence, id)?;
    Ok(versions.into_iter().map(BidVersionResponse::from).collect())
}
