// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tender_bid_domain::{
    Bid, BidContent, BidStatus, ServiceType, Tender, TenderContent, TenderStatus,
};

pub const ORGANIZATION_ID: i64 = 10;
pub const CREATOR_ID: i64 = 20;

pub fn create_test_tender_content() -> TenderContent {
    TenderContent {
        name: String::from("A"),
        description: None,
        status: TenderStatus::Created,
        service_type: ServiceType::Construction,
    }
}

pub fn create_test_tender() -> Tender {
    Tender {
        tender_id: 1,
        organization_id: ORGANIZATION_ID,
        creator_id: CREATOR_ID,
        content: create_test_tender_content(),
        version: 1,
        created_at: String::from("2026-01-01T00:00:00Z"),
        updated_at: String::from("2026-01-01T00:00:00Z"),
    }
}

pub fn create_test_bid() -> Bid {
    Bid {
        bid_id: 2,
        tender_id: 1,
        organization_id: ORGANIZATION_ID,
        creator_id: CREATOR_ID,
        content: BidContent {
            name: String::from("Offer"),
            description: Some(String::from("Best price")),
            status: BidStatus::Created,
        },
        version: 1,
        created_at: String::from("2026-01-01T00:00:00Z"),
        updated_at: String::from("2026-01-01T00:00:00Z"),
    }
}
