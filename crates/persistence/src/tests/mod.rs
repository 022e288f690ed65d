// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod identity_tests;
mod review_tests;
mod tender_tests;

use crate::Persistence;
use tender_bid_domain::{
    BidContent, BidStatus, Employee, NewBid, NewTender, Organization, OrganizationType,
    ServiceType, Tender, TenderContent, TenderStatus,
};

/// An organization with one responsible employee.
pub struct Fixture {
    pub persistence: Persistence,
    pub organization: Organization,
    pub employee: Employee,
}

pub fn create_fixture() -> Fixture {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let organization: Organization = persistence
        .create_organization("Acme", Some("Builders"), OrganizationType::LimitedLiability)
        .unwrap();
    let employee: Employee = persistence
        .create_employee("alice", Some("Alice"), None)
        .unwrap();
    persistence
        .add_responsible(organization.organization_id, employee.employee_id)
        .unwrap();

    Fixture {
        persistence,
        organization,
        employee,
    }
}

pub fn create_test_tender_content() -> TenderContent {
    TenderContent {
        name: String::from("A"),
        description: None,
        status: TenderStatus::Created,
        service_type: ServiceType::Construction,
    }
}

pub fn new_tender(fixture: &Fixture) -> NewTender {
    NewTender {
        organization_id: fixture.organization.organization_id,
        creator_id: fixture.employee.employee_id,
        content: create_test_tender_content(),
    }
}

pub fn new_bid(fixture: &Fixture, tender: &Tender) -> NewBid {
    NewBid {
        tender_id: tender.tender_id,
        organization_id: fixture.organization.organization_id,
        creator_id: fixture.employee.employee_id,
        content: BidContent {
            name: String::from("Offer"),
            description: Some(String::from("Fast delivery")),
            status: BidStatus::Created,
        },
    }
}
