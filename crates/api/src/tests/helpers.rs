// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::{Value, json};
use tender_bid_persistence::Persistence;

use crate::{
    ActorRequest, AddResponsibleRequest, BidResponse, CreateBidRequest, CreateEmployeeRequest,
    CreateOrganizationRequest, CreateTenderRequest, EmployeeResponse, OrganizationResponse,
    TenderResponse, add_responsible, create_bid, create_employee, create_organization,
    create_tender,
};

/// A store with one organization, one responsible employee (`alice`) and one
/// employee with no responsibilities (`bob`).
pub struct TestContext {
    pub persistence: Persistence,
    pub organization_id: i64,
    pub alice_id: i64,
    pub bob_id: i64,
}

pub fn register_employee(persistence: &mut Persistence, username: &str) -> i64 {
    let employee: EmployeeResponse = create_employee(
        persistence,
        &CreateEmployeeRequest {
            username: Some(username.to_string()),
            first_name: None,
            last_name: None,
        },
    )
    .unwrap();
    employee.id
}

pub fn register_organization(persistence: &mut Persistence, name: &str) -> i64 {
    let organization: OrganizationResponse = create_organization(
        persistence,
        &CreateOrganizationRequest {
            name: Some(name.to_string()),
            description: None,
            organization_type: Some(String::from("LLC")),
        },
    )
    .unwrap();
    organization.id
}

pub fn grant(persistence: &mut Persistence, organization_id: i64, employee_id: i64) {
    add_responsible(
        persistence,
        organization_id,
        &AddResponsibleRequest {
            employee: json!(employee_id),
        },
    )
    .unwrap();
}

pub fn create_test_context() -> TestContext {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let organization_id: i64 = register_organization(&mut persistence, "Acme");
    let alice_id: i64 = register_employee(&mut persistence, "alice");
    let bob_id: i64 = register_employee(&mut persistence, "bob");
    grant(&mut persistence, organization_id, alice_id);

    TestContext {
        persistence,
        organization_id,
        alice_id,
        bob_id,
    }
}

pub fn tender_request(context: &TestContext) -> CreateTenderRequest {
    CreateTenderRequest {
        name: Some(String::from("A")),
        description: Some(String::from("original")),
        service_type: Some(String::from("Construction")),
        status: None,
        organization: json!(context.organization_id),
        creator: json!(context.alice_id),
    }
}

pub fn create_test_tender(context: &mut TestContext) -> TenderResponse {
    let request: CreateTenderRequest = tender_request(context);
    create_tender(&mut context.persistence, request).unwrap()
}

pub fn create_test_bid(context: &mut TestContext, tender_id: i64) -> BidResponse {
    let request: CreateBidRequest = CreateBidRequest {
        name: Some(String::from("Offer")),
        description: None,
        status: None,
        tender: json!(tender_id),
        organization: json!(context.organization_id),
        creator: json!(context.alice_id),
    };
    create_bid(&mut context.persistence, request).unwrap()
}

pub fn actor(id: i64) -> ActorRequest {
    ActorRequest { creator: json!(id) }
}

pub fn actor_value(id: i64) -> Value {
    json!(id)
}
