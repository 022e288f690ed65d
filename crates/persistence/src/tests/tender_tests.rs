// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{Fixture, create_fixture, create_test_tender_content, new_bid, new_tender};
use crate::{PersistenceError, VersionedStore};
use tender_bid::{Command, Transition, apply};
use tender_bid_domain::{StatusValue, Tender, TenderContent, TenderPatch, TenderStatus};
use tender_bid_history::VersionSnapshot;

fn persist(fixture: &mut Fixture, transition: &Transition<Tender>) -> Tender {
    fixture.persistence.persist_transition(transition).unwrap()
}

fn versions(fixture: &mut Fixture, tender_id: i64) -> Vec<VersionSnapshot<TenderContent>> {
    VersionedStore::<Tender>::list_versions(&mut fixture.persistence, tender_id).unwrap()
}

#[test]
fn test_create_tender_starts_at_version_one() {
    let mut fixture: Fixture = create_fixture();
    let tender: Tender = fixture
        .persistence
        .create_tender(&new_tender(&fixture))
        .unwrap();

    assert_eq!(tender.version, 1);
    assert_eq!(tender.content.status, TenderStatus::Created);

    let loaded: Option<Tender> = fixture.persistence.load(tender.tender_id).unwrap();
    assert_eq!(loaded, Some(tender));
}

#[test]
fn test_create_tender_requires_existing_creator() {
    let mut fixture: Fixture = create_fixture();
    let mut input = new_tender(&fixture);
    input.creator_id = 999;

    let result: Result<Tender, PersistenceError> = fixture.persistence.create_tender(&input);
    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
}

#[test]
fn test_partial_update_logs_pre_mutation_snapshot() {
    let mut fixture: Fixture = create_fixture();
    let tender: Tender = fixture
        .persistence
        .create_tender(&new_tender(&fixture))
        .unwrap();

    let transition: Transition<Tender> = apply(
        &tender,
        Command::PartialUpdate {
            patch: TenderPatch {
                description: Some(Some(String::from("x"))),
                ..TenderPatch::default()
            },
        },
    )
    .unwrap();
    let updated: Tender = persist(&mut fixture, &transition);

    assert_eq!(updated.version, 2);
    assert_eq!(updated.content.description.as_deref(), Some("x"));

    let log: Vec<VersionSnapshot<TenderContent>> = versions(&mut fixture, tender.tender_id);
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].version, 1);
    assert!(log[0].content.description.is_none());
    assert!(log[0].saved_at.is_some());
}

#[test]
fn test_status_change_writes_no_snapshot() {
    let mut fixture: Fixture = create_fixture();
    let tender: Tender = fixture
        .persistence
        .create_tender(&new_tender(&fixture))
        .unwrap();

    let transition: Transition<Tender> = apply(
        &tender,
        Command::UpdateStatus {
            status: StatusValue::Published,
        },
    )
    .unwrap();
    let updated: Tender = persist(&mut fixture, &transition);

    assert_eq!(updated.version, 2);
    assert_eq!(updated.content.status, TenderStatus::Published);
    assert!(versions(&mut fixture, tender.tender_id).is_empty());
}

#[test]
fn test_rollback_round_trip_through_store() {
    let mut fixture: Fixture = create_fixture();
    let tender: Tender = fixture
        .persistence
        .create_tender(&new_tender(&fixture))
        .unwrap();

    let edited: Tender = persist(
        &mut fixture,
        &apply(
            &tender,
            Command::Update {
                content: TenderContent {
                    name: String::from("B"),
                    description: Some(String::from("new")),
                    ..create_test_tender_content()
                },
            },
        )
        .unwrap(),
    );

    let target: VersionSnapshot<TenderContent> =
        VersionedStore::<Tender>::load_version(&mut fixture.persistence, tender.tender_id, 1)
            .unwrap()
            .unwrap();
    let rolled_back: Tender = persist(
        &mut fixture,
        &apply(
            &edited,
            Command::Rollback {
                requested: 1,
                target,
            },
        )
        .unwrap(),
    );

    assert_eq!(rolled_back.version, 3);
    assert_eq!(rolled_back.content, tender.content);

    let log: Vec<VersionSnapshot<TenderContent>> = versions(&mut fixture, tender.tender_id);
    assert_eq!(
        log.iter().map(|s| s.version).collect::<Vec<i32>>(),
        vec![1, 2]
    );
    assert_eq!(log[1].content.name, "B");
}

#[test]
fn test_missing_version_is_none() {
    let mut fixture: Fixture = create_fixture();
    let tender: Tender = fixture
        .persistence
        .create_tender(&new_tender(&fixture))
        .unwrap();

    let snapshot: Option<VersionSnapshot<TenderContent>> =
        VersionedStore::<Tender>::load_version(&mut fixture.persistence, tender.tender_id, 1)
            .unwrap();
    assert!(snapshot.is_none());
}

#[test]
fn test_list_tenders_and_by_creator() {
    let mut fixture: Fixture = create_fixture();
    let first: Tender = fixture
        .persistence
        .create_tender(&new_tender(&fixture))
        .unwrap();
    let second: Tender = fixture
        .persistence
        .create_tender(&new_tender(&fixture))
        .unwrap();
    let other = fixture
        .persistence
        .create_employee("carol", None, None)
        .unwrap();

    let all: Vec<Tender> = VersionedStore::<Tender>::list_all(&mut fixture.persistence).unwrap();
    assert_eq!(all, vec![first.clone(), second.clone()]);

    let mine: Vec<Tender> = VersionedStore::<Tender>::list_by_creator(
        &mut fixture.persistence,
        fixture.employee.employee_id,
    )
    .unwrap();
    assert_eq!(mine.len(), 2);

    let theirs: Vec<Tender> =
        VersionedStore::<Tender>::list_by_creator(&mut fixture.persistence, other.employee_id)
            .unwrap();
    assert!(theirs.is_empty());
}

#[test]
fn test_delete_tender_cascades() {
    let mut fixture: Fixture = create_fixture();
    let tender: Tender = fixture
        .persistence
        .create_tender(&new_tender(&fixture))
        .unwrap();
    let bid_input = new_bid(&fixture, &tender);
    fixture.persistence.create_bid(&bid_input).unwrap();
    persist(
        &mut fixture,
        &apply(
            &tender,
            Command::PartialUpdate {
                patch: TenderPatch {
                    name: Some(String::from("Z")),
                    ..TenderPatch::default()
                },
            },
        )
        .unwrap(),
    );

    VersionedStore::<Tender>::delete(&mut fixture.persistence, tender.tender_id).unwrap();

    assert!(
        VersionedStore::<Tender>::load(&mut fixture.persistence, tender.tender_id)
            .unwrap()
            .is_none()
    );
    assert!(versions(&mut fixture, tender.tender_id).is_empty());
    assert!(
        fixture
            .persistence
            .list_bids_for_tender(tender.tender_id)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_delete_missing_tender_is_not_found() {
    let mut fixture: Fixture = create_fixture();
    let result: Result<(), PersistenceError> =
        VersionedStore::<Tender>::delete(&mut fixture.persistence, 404);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}
