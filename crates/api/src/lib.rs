// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operations of the tender and bid service.
//!
//! Each public function is one operation: it checks access, validates the
//! request, applies the change through the core transition logic, and
//! persists it. Functions take the store explicitly and return API-level
//! errors.

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

mod bids;
mod error;
mod identifiers;
mod identity;
mod request_response;
mod reviews;
mod tenders;
mod versioning;

#[cfg(test)]
mod tests;

pub use bids::{
    create_bid, delete_bid, get_bid, list_bid_versions, list_bids, list_bids_for_tender,
    list_my_bids, partial_update_bid, rollback_bid, update_bid, update_bid_status,
};
pub use error::{
    ApiError, FieldError, require, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use identifiers::{parse_identifier, parse_query_identifier};
pub use identity::{add_responsible, create_employee, create_organization};
pub use request_response::{
    ActorRequest, AddResponsibleRequest, BidResponse, BidVersionResponse, CreateBidRequest,
    CreateEmployeeRequest, CreateOrganizationRequest, CreateReviewRequest, CreateTenderRequest,
    EmployeeResponse, OrganizationResponse, ResponsibleResponse, ReviewQuery, ReviewResponse,
    StatusUpdatedResponse, TenderResponse, TenderVersionResponse, UpdateBidRequest,
    UpdateStatusRequest, UpdateTenderRequest,
};
pub use reviews::{create_review, list_reviews_for_bid};
pub use tenders::{
    create_tender, delete_tender, get_tender, list_my_tenders, list_tender_versions,
    list_tenders, partial_update_tender, rollback_tender, update_tender, update_tender_status,
};
