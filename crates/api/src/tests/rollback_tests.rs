// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, BidResponse, BidVersionResponse, TenderResponse, TenderVersionResponse,
    UpdateBidRequest, UpdateStatusRequest, UpdateTenderRequest, list_bid_versions,
    list_tender_versions, partial_update_bid, partial_update_tender, rollback_bid,
    rollback_tender, update_tender_status,
};

use super::helpers::{
    TestContext, actor, actor_value, create_test_bid, create_test_context, create_test_tender,
};

fn edit_description(context: &mut TestContext, tender_id: i64, description: &str) {
    partial_update_tender(
        &mut context.persistence,
        tender_id,
        UpdateTenderRequest {
            description: Some(Some(description.to_string())),
            creator: actor_value(context.alice_id),
            ..UpdateTenderRequest::default()
        },
    )
    .unwrap();
}

#[test]
fn test_rollback_restores_snapshot_as_new_version() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    edit_description(&mut context, tender.id, "x");

    let restored: TenderResponse = rollback_tender(
        &mut context.persistence,
        tender.id,
        1,
        &actor(context.alice_id),
    )
    .unwrap();

    assert_eq!(restored.version, 3);
    assert_eq!(restored.description.as_deref(), Some("original"));
    assert_eq!(restored.name, tender.name);

    let versions: Vec<TenderVersionResponse> =
        list_tender_versions(&mut context.persistence, tender.id).unwrap();
    let logged: Vec<i32> = versions.iter().map(|version| version.version).collect();
    assert_eq!(logged, vec![1, 2]);
    assert_eq!(versions[1].description.as_deref(), Some("x"));
}

#[test]
fn test_rollback_to_intermediate_version() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    edit_description(&mut context, tender.id, "second");
    edit_description(&mut context, tender.id, "third");

    let restored: TenderResponse = rollback_tender(
        &mut context.persistence,
        tender.id,
        2,
        &actor(context.alice_id),
    )
    .unwrap();
    assert_eq!(restored.version, 4);
    assert_eq!(restored.description.as_deref(), Some("second"));
}

#[test]
fn test_rollback_rejects_out_of_range_targets() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    edit_description(&mut context, tender.id, "x");

    for requested in [0, -1, 2, 3, i64::MAX] {
        let result: Result<TenderResponse, ApiError> = rollback_tender(
            &mut context.persistence,
            tender.id,
            requested,
            &actor(context.alice_id),
        );
        assert_eq!(
            result,
            Err(ApiError::InvalidVersion {
                requested,
                current: 2,
            })
        );
    }
}

#[test]
fn test_rollback_on_first_version_is_invalid() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);

    let result: Result<TenderResponse, ApiError> = rollback_tender(
        &mut context.persistence,
        tender.id,
        1,
        &actor(context.alice_id),
    );
    assert!(matches!(result, Err(ApiError::InvalidVersion { .. })));
}

#[test]
fn test_rollback_without_logged_version_is_not_found() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    // Status changes advance the version without logging a snapshot.
    update_tender_status(
        &mut context.persistence,
        tender.id,
        UpdateStatusRequest {
            status: Some(String::from("PUBLISHED")),
            creator: actor_value(context.alice_id),
        },
    )
    .unwrap();

    let result: Result<TenderResponse, ApiError> = rollback_tender(
        &mut context.persistence,
        tender.id,
        1,
        &actor(context.alice_id),
    );
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Version"
    ));
}

#[test]
fn test_rollback_requires_access() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    edit_description(&mut context, tender.id, "x");

    let result: Result<TenderResponse, ApiError> = rollback_tender(
        &mut context.persistence,
        tender.id,
        1,
        &actor(context.bob_id),
    );
    assert!(matches!(result, Err(ApiError::PermissionDenied { .. })));
}

#[test]
fn test_bid_rollback_restores_status() {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    let bid: BidResponse = create_test_bid(&mut context, tender.id);

    let canceled: BidResponse = partial_update_bid(
        &mut context.persistence,
        bid.id,
        UpdateBidRequest {
            status: Some(String::from("CANCELED")),
            creator: actor_value(context.alice_id),
            ..UpdateBidRequest::default()
        },
    )
    .unwrap();
    assert_eq!(canceled.status, "CANCELED");

    let restored: BidResponse =
        rollback_bid(
            &mut context.persistence,
            bid.id,
            1,
            &actor(context.alice_id),
        ).unwrap();
    assert_eq!(restored.version, 3);
    assert_eq!(restored.status, "CREATED");

    let versions: Vec<BidVersionResponse> =
        list_bid_versions(&mut context.persistence, bid.id).unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[1].status, "CANCELED");
}
