// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use status::{BidStatus, StatusValue, TenderStatus};
pub use types::{
    Bid, BidContent, BidPatch, Employee, NewBid, NewTender, Organization, OrganizationType,
    Review, ServiceType, Tender, TenderContent, TenderPatch,
};
pub use validation::{
    MAX_ENTITY_NAME_LEN, MAX_ORGANIZATION_NAME_LEN, MAX_PERSON_NAME_LEN, MAX_USERNAME_LEN,
    validate_bid_content, validate_entity_name, validate_organization_name, validate_person_name,
    validate_review_content, validate_rollback_target, validate_tender_content, validate_username,
};
