// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::json;

use crate::{
    ApiError, BidResponse, CreateReviewRequest, ReviewQuery, ReviewResponse, TenderResponse,
    create_review, list_reviews_for_bid,
};

use super::helpers::{TestContext, create_test_bid, create_test_context, create_test_tender, grant};

fn review_request(organization_id: i64, username: &str, content: &str) -> CreateReviewRequest {
    CreateReviewRequest {
        author_username: Some(username.to_string()),
        organization_id: json!(organization_id),
        content: Some(content.to_string()),
    }
}

fn setup() -> (TestContext, BidResponse) {
    let mut context: TestContext = create_test_context();
    let tender: TenderResponse = create_test_tender(&mut context);
    let bid: BidResponse = create_test_bid(&mut context, tender.id);
    (context, bid)
}

#[test]
fn test_create_and_list_reviews() {
    let (mut context, bid): (TestContext, BidResponse) = setup();

    let first: ReviewResponse = create_review(
        &mut context.persistence,
        bid.id,
        &review_request(context.organization_id, "alice", "Looks good"),
    )
    .unwrap();
    let second: ReviewResponse = create_review(
        &mut context.persistence,
        bid.id,
        &review_request(context.organization_id, "alice", "Price is high"),
    )
    .unwrap();
    assert_eq!(first.author, "alice");
    assert_eq!(first.bid, bid.id);

    let query: ReviewQuery = ReviewQuery {
        author_username: Some(String::from("alice")),
        organization_id: Some(context.organization_id.to_string()),
    };
    let reviews: Vec<ReviewResponse> =
        list_reviews_for_bid(&mut context.persistence, bid.id, &query).unwrap();
    assert_eq!(reviews, vec![first, second]);
}

#[test]
fn test_empty_review_content_is_rejected() {
    let (mut context, bid): (TestContext, BidResponse) = setup();

    let result: Result<ReviewResponse, ApiError> = create_review(
        &mut context.persistence,
        bid.id,
        &review_request(context.organization_id, "alice", ""),
    );
    assert!(matches!(result, Err(ApiError::BadRequest { ref field, .. }) if field == "content"));

    let mut missing: CreateReviewRequest = review_request(context.organization_id, "alice", "x");
    missing.content = None;
    let result: Result<ReviewResponse, ApiError> =
        create_review(&mut context.persistence, bid.id, &missing);
    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn test_reviewer_must_be_responsible() {
    let (mut context, bid): (TestContext, BidResponse) = setup();

    let result: Result<ReviewResponse, ApiError> = create_review(
        &mut context.persistence,
        bid.id,
        &review_request(context.organization_id, "bob", "Nice"),
    );
    assert!(matches!(result, Err(ApiError::PermissionDenied { .. })));

    let mut malformed: CreateReviewRequest =
        review_request(context.organization_id, "alice", "Nice");
    malformed.organization_id = json!("acme");
    let result: Result<ReviewResponse, ApiError> =
        create_review(&mut context.persistence, bid.id, &malformed);
    assert!(matches!(result, Err(ApiError::PermissionDenied { .. })));
}

#[test]
fn test_review_parameters_are_required() {
    let (mut context, bid): (TestContext, BidResponse) = setup();

    let mut no_author: CreateReviewRequest =
        review_request(context.organization_id, "alice", "Nice");
    no_author.author_username = None;
    let result: Result<ReviewResponse, ApiError> =
        create_review(&mut context.persistence, bid.id, &no_author);
    assert!(matches!(result, Err(ApiError::BadRequest { .. })));

    let mut no_organization: CreateReviewRequest =
        review_request(context.organization_id, "alice", "Nice");
    no_organization.organization_id = json!(null);
    let result: Result<ReviewResponse, ApiError> =
        create_review(&mut context.persistence, bid.id, &no_organization);
    assert!(matches!(result, Err(ApiError::BadRequest { .. })));

    let query: ReviewQuery = ReviewQuery {
        author_username: Some(String::from("alice")),
        organization_id: None,
    };
    let result: Result<Vec<ReviewResponse>, ApiError> =
        list_reviews_for_bid(&mut context.persistence, bid.id, &query);
    assert!(matches!(
        result,
        Err(ApiError::BadRequest { ref field, .. }) if field == "organizationId"
    ));
}

#[test]
fn test_reviews_on_missing_bid_are_not_found() {
    let (mut context, _bid): (TestContext, BidResponse) = setup();

    let result: Result<ReviewResponse, ApiError> = create_review(
        &mut context.persistence,
        999,
        &review_request(context.organization_id, "alice", "Nice"),
    );
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));

    let query: ReviewQuery = ReviewQuery {
        author_username: Some(String::from("alice")),
        organization_id: Some(context.organization_id.to_string()),
    };
    let result: Result<Vec<ReviewResponse>, ApiError> =
        list_reviews_for_bid(&mut context.persistence, 999, &query);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_list_reviews_filters_by_author() {
    let (mut context, bid): (TestContext, BidResponse) = setup();
    create_review(
        &mut context.persistence,
        bid.id,
        &review_request(context.organization_id, "alice", "Mine"),
    )
    .unwrap();
    grant(
        &mut context.persistence,
        context.organization_id,
        context.bob_id,
    );
    create_review(
        &mut context.persistence,
        bid.id,
        &review_request(context.organization_id, "bob", "His"),
    )
    .unwrap();

    let query: ReviewQuery = ReviewQuery {
        author_username: Some(String::from("bob")),
        organization_id: Some(context.organization_id.to_string()),
    };
    let reviews: Vec<ReviewResponse> =
        list_reviews_for_bid(&mut context.persistence, bid.id, &query).unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].content, "His");
}

#[test]
fn test_review_by_unknown_author_is_not_found() {
    let (mut context, bid): (TestContext, BidResponse) = setup();

    let result: Result<ReviewResponse, ApiError> = create_review(
        &mut context.persistence,
        bid.id,
        &review_request(context.organization_id, "mallory", "Nice"),
    );
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Employee"
    ));
}
