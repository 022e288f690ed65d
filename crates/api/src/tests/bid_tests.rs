// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::json;

use crate::{
    ApiError, BidResponse, CreateBidRequest, StatusUpdatedResponse, TenderResponse,
    UpdateBidRequest, UpdateStatusRequest, create_bid, delete_bid, delete_tender, get_bid,
    list_bids, list_bids_for_tender, list_my_bids, update_bid, update_bid_status,
};

use super::helpers::{
    TestContext, actor, actor_value, create_test_bid, create_test_context, create_test_tender,
    grant, register_organization,
};

fn bid_request(context: &TestContext, tender_id: i64) -> CreateBidRequest {
    CreateBidRequest {
        name: Some(String::from("Offer")),
        description: Some(String::from("Fast delivery")),
        status: None,
        tender: json!(tender_id),
        organization: json!(context.organization_id),
        creator: json!(context.alice_id),
    }
}

#[test]
fn test_create_bid() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    let bid: BidResponse = create_test_bid(&mut context, tender.id);

    assert_eq!(bid.version, 1);
    assert_eq!(bid.status, "CREATED");
    assert_eq!(bid.tender, tender.id);
    assert_eq!(bid.organization, context.organization_id);
}

#[test]
fn test_create_bid_for_another_organization() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    let supplier_id: i64 = register_organization(&mut context.persistence, "Supplier");
    grant(&mut context.persistence, supplier_id, context.bob_id);

    let mut request: CreateBidRequest = bid_request(&context, tender.id);
    request.organization = json!(supplier_id);
    request.creator = json!(context.bob_id);

    let bid: BidResponse = create_bid(&mut context.persistence, request).unwrap();
    assert_eq!(bid.organization, supplier_id);
    assert_eq!(bid.creator, context.bob_id);
}

#[test]
fn test_create_bid_requires_existing_tender() {
    let mut context: TestContext = create_test_context();
    let request: CreateBidRequest = bid_request(&context, 404);

    let result: Result<BidResponse, ApiError> = create_bid(&mut context.persistence, request);
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Tender"
    ));
}

#[test]
fn test_create_bid_requires_responsibility() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    let mut request: CreateBidRequest = bid_request(&context, tender.id);
    request.creator = json!(context.bob_id);

    let result: Result<BidResponse, ApiError> = create_bid(&mut context.persistence, request);
    assert!(matches!(result, Err(ApiError::PermissionDenied { .. })));
}

#[test]
fn test_create_bid_rejects_closed_status() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    let mut request: CreateBidRequest = bid_request(&context, tender.id);
    request.status = Some(String::from("CLOSED"));

    let result: Result<BidResponse, ApiError> = create_bid(&mut context.persistence, request);
    assert!(matches!(result, Err(ApiError::BadRequest { ref field, .. }) if field == "status"));
}

#[test]
fn test_list_bids_for_tender_includes_every_status() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    let other: TenderResponse = create_test_tender(&mut context);
    let first: BidResponse = create_test_bid(&mut context, tender.id);
    let second: BidResponse = create_test_bid(&mut context, tender.id);
    create_test_bid(&mut context, other.id);

    update_bid(
        &mut context.persistence,
        second.id,
        UpdateBidRequest {
            name: Some(String::from("Withdrawn")),
            status: Some(String::from("CANCELED")),
            creator: actor_value(context.alice_id),
            ..UpdateBidRequest::default()
        },
    )
    .unwrap();

    let bids: Vec<BidResponse> = list_bids_for_tender(&mut context.persistence, tender.id).unwrap();
    let ids: Vec<i64> = bids.iter().map(|bid| bid.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(bids[1].status, "CANCELED");

    let all: Vec<BidResponse> = list_bids(&mut context.persistence).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn test_list_bids_for_missing_tender_is_not_found() {
    let mut context: TestContext = create_test_context();
    let result: Result<Vec<BidResponse>, ApiError> =
        list_bids_for_tender(&mut context.persistence, 77);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_bid_status_uses_shared_set() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    let bid: BidResponse = create_test_bid(&mut context, tender.id);

    let published: StatusUpdatedResponse = update_bid_status(
        &mut context.persistence,
        bid.id,
        UpdateStatusRequest {
            status: Some(String::from("PUBLISHED")),
            creator: actor_value(context.alice_id),
        },
    )
    .unwrap();
    assert_eq!(published.version, 2);

    for status in ["CLOSED", "CANCELED", "bogus"] {
        let result: Result<StatusUpdatedResponse, ApiError> = update_bid_status(
            &mut context.persistence,
            bid.id,
            UpdateStatusRequest {
                status: Some(status.to_string()),
                creator: actor_value(context.alice_id),
            },
        );
        assert!(
            matches!(result, Err(ApiError::BadRequest { .. })),
            "{status}"
        );
    }

    let fetched: BidResponse = get_bid(&mut context.persistence, bid.id).unwrap();
    assert_eq!(fetched.status, "PUBLISHED");
    assert_eq!(fetched.version, 2);
}

#[test]
fn test_bid_owner_cannot_be_changed_by_update() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    let bid: BidResponse = create_test_bid(&mut context, tender.id);

    let result: Result<BidResponse, ApiError> = update_bid(
        &mut context.persistence,
        bid.id,
        UpdateBidRequest {
            name: Some(String::from("Mine now")),
            creator: actor_value(context.bob_id),
            ..UpdateBidRequest::default()
        },
    );
    assert!(matches!(result, Err(ApiError::PermissionDenied { .. })));

    let updated: BidResponse = update_bid(
        &mut context.persistence,
        bid.id,
        UpdateBidRequest {
            name: Some(String::from("Renamed")),
            creator: actor_value(context.alice_id),
            ..UpdateBidRequest::default()
        },
    )
    .unwrap();
    assert_eq!(updated.creator, context.alice_id);
    assert_eq!(updated.organization, context.organization_id);
    assert_eq!(updated.description, None);
}

#[test]
fn test_list_my_bids() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    let bid: BidResponse = create_test_bid(&mut context, tender.id);

    let mine: Vec<BidResponse> = list_my_bids(&mut context.persistence, Some("alice")).unwrap();
    assert_eq!(mine, vec![bid]);
}

#[test]
fn test_delete_bid_and_cascade_from_tender() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    let first: BidResponse = create_test_bid(&mut context, tender.id);
    let second: BidResponse = create_test_bid(&mut context, tender.id);

    delete_bid(&mut context.persistence, first.id, &actor(context.alice_id)).unwrap();
    let result: Result<BidResponse, ApiError> = get_bid(&mut context.persistence, first.id);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));

    delete_tender(
        &mut context.persistence,
        tender.id,
        &actor(context.alice_id),
    ).unwrap();
    let result: Result<BidResponse, ApiError> = get_bid(&mut context.persistence, second.id);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
