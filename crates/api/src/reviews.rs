// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Review operations.
//!
//! Reviews are gated on the reviewer being responsible for the
//! organization named in the request, not on ownership of the bid.

use tender_bid_domain::{Bid, Employee, Review, validate_review_content};
use tender_bid_persistence::Persistence;
use tracing::{info, warn};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::identifiers::{parse_identifier, parse_query_identifier};
use crate::request_response::{CreateReviewRequest, ReviewQuery, ReviewResponse};
use crate::versioning;

fn required_parameter<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, ApiError> {
    value
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::BadRequest {
            field: field.to_string(),
            message: String::from("This parameter is required."),
        })
}

fn authorize_reviewer(
    persistence: &mut Persistence,
    username: &str,
    organization_id: Option<i64>,
) -> Result<(), ApiError> {
    let responsible: bool = match organization_id {
        Some(organization_id) => persistence
            .is_username_responsible(username, organization_id)
            .map_err(translate_persistence_error)?,
        None => false,
    };
    if !responsible {
        warn!(
            reviewer = username,
            organization = ?organization_id,
            "Review access denied: not responsible for the organization"
        );
        return Err(ApiError::PermissionDenied {
            action: String::from("review bids for this organization"),
        });
    }
    Ok(())
}

/// Lists the reviews a user left on a bid, oldest first.
///
/// # Errors
///
/// Returns an error if:
/// - `authorUsername` or `organizationId` is missing
/// - The bid does not exist
/// - The user is not responsible for the organization
pub fn list_reviews_for_bid(
    persistence: &mut Persistence,
    bid_id: i64,
    query: &ReviewQuery,
) -> Result<Vec<ReviewResponse>, ApiError> {
    let username: &str = required_parameter("authorUsername", query.author_username.as_deref())?;
    let organization: &str =
        required_parameter("organizationId", query.organization_id.as_deref())?;

    let _bid: Bid = versioning::load(persistence, bid_id)?;
    authorize_reviewer(
        persistence,
        username,
        parse_query_identifier(Some(organization)),
    )?;

    let reviews: Vec<Review> = persistence
        .list_reviews_for_bid(bid_id, username)
        .map_err(translate_persistence_error)?;
    Ok(reviews.into_iter().map(ReviewResponse::from).collect())
}

/// Appends a review to a bid.
///
/// # Errors
///
/// Returns an error if:
/// - `authorUsername` or `organizationId` is missing
/// - `content` is missing or empty
/// - The bid does not exist
/// - The author does not exist
/// - The author is not responsible for the organization
pub fn create_review(
    persistence: &mut Persistence,
    bid_id: i64,
    request: &CreateReviewRequest,
) -> Result<ReviewResponse, ApiError> {
    let username: &str = required_parameter("authorUsername", request.author_username.as_deref())?;
    if request.organization_id.is_null() {
        return Err(ApiError::BadRequest {
            field: String::from("organizationId"),
            message: String::from("This parameter is required."),
        });
    }
    let content: &str = request.content.as_deref().unwrap_or_default();
    validate_review_content(content).map_err(translate_domain_error)?;

    let _bid: Bid = versioning::load(persistence, bid_id)?;
    let author: Employee = versioning::find_employee(persistence, username)?;
    authorize_reviewer(
        persistence,
        username,
        parse_identifier(&request.organization_id),
    )?;

    let review: Review = persistence
        .create_review(bid_id, &author, content)
        .map_err(translate_persistence_error)?;

    info!(
        review_id = review.review_id,
        bid_id,
        author = %author.username,
        "Created review"
    );
    Ok(ReviewResponse::from(review))
}
