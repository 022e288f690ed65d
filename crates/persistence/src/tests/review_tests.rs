// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::VersionedStore;
use crate::tests::{Fixture, create_fixture, new_bid, new_tender};
use tender_bid_domain::{Bid, Employee, NewBid, NewTender, Review, Tender};

fn create_bid(fixture: &mut Fixture) -> Bid {
    let tender_input: NewTender = new_tender(fixture);
    let tender: Tender = fixture.persistence.create_tender(&tender_input).unwrap();
    let bid_input: NewBid = new_bid(fixture, &tender);
    fixture.persistence.create_bid(&bid_input).unwrap()
}

#[test]
fn test_create_review_and_get() {
    let mut fixture: Fixture = create_fixture();
    let bid: Bid = create_bid(&mut fixture);
    let author: Employee = fixture.employee.clone();

    let review: Review = fixture
        .persistence
        .create_review(bid.bid_id, &author, "Solid offer")
        .unwrap();

    assert_eq!(review.author_username, "alice");
    assert_eq!(
        fixture.persistence.get_review(review.review_id).unwrap(),
        Some(review)
    );
}

#[test]
fn test_list_reviews_filters_by_author_in_creation_order() {
    let mut fixture: Fixture = create_fixture();
    let bid: Bid = create_bid(&mut fixture);
    let alice: Employee = fixture.employee.clone();
    let bob: Employee = fixture
        .persistence
        .create_employee("bob", None, None)
        .unwrap();

    let first: Review = fixture
        .persistence
        .create_review(bid.bid_id, &alice, "first")
        .unwrap();
    fixture
        .persistence
        .create_review(bid.bid_id, &bob, "other")
        .unwrap();
    let second: Review = fixture
        .persistence
        .create_review(bid.bid_id, &alice, "second")
        .unwrap();

    let reviews: Vec<Review> = fixture
        .persistence
        .list_reviews_for_bid(bid.bid_id, "alice")
        .unwrap();

    assert_eq!(reviews, vec![first, second]);
}

#[test]
fn test_reviews_are_removed_with_their_bid() {
    let mut fixture: Fixture = create_fixture();
    let bid: Bid = create_bid(&mut fixture);
    let author: Employee = fixture.employee.clone();
    let review: Review = fixture
        .persistence
        .create_review(bid.bid_id, &author, "gone soon")
        .unwrap();

    VersionedStore::<Bid>::delete(&mut fixture.persistence, bid.bid_id).unwrap();

    assert!(
        fixture
            .persistence
            .get_review(review.review_id)
            .unwrap()
            .is_none()
    );
}
