// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tender mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tender_bid::Transition;
use tender_bid_domain::{NewTender, Tender};
use tracing::{info, warn};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{tender_versions, tenders};
use crate::error::PersistenceError;
use crate::mutations::{timestamp_now, version_conflict};

/// Inserts a new tender at version 1.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the organization or
/// creator does not exist, or another error if the insert fails.
pub fn insert_tender(
    conn: &mut SqliteConnection,
    new_tender: &NewTender,
) -> Result<Tender, PersistenceError> {
    let now: String = timestamp_now()?;

    conn.transaction::<Tender, PersistenceError, _>(|conn| {
        diesel::insert_into(tenders::table)
            .values((
                tenders::organization_id.eq(new_tender.organization_id),
                tenders::creator_id.eq(new_tender.creator_id),
                tenders::name.eq(&new_tender.content.name),
                tenders::description.eq(new_tender.content.description.as_deref()),
                tenders::status.eq(new_tender.content.status.as_str()),
                tenders::service_type.eq(new_tender.content.service_type.as_str()),
                tenders::version.eq(1),
                tenders::created_at.eq(&now),
                tenders::updated_at.eq(&now),
            ))
            .execute(conn)?;

        let tender_id: i64 = conn.get_last_insert_rowid()?;
        info!(
            tender_id,
            organization_id = new_tender.organization_id,
            creator_id = new_tender.creator_id,
            "Tender created"
        );

        Ok(Tender {
            tender_id,
            organization_id: new_tender.organization_id,
            creator_id: new_tender.creator_id,
            content: new_tender.content.clone(),
            version: 1,
            created_at: now.clone(),
            updated_at: now.clone(),
        })
    })
}

/// Persists a tender transition atomically.
///
/// Appends the pre-mutation snapshot (if any) to the version log, then
/// updates the live row only if it still carries `expected_version`.
///
/// # Errors
///
/// Returns `PersistenceError::ConcurrentModification` if another writer
/// moved the version first. Nothing is written in that case.
pub fn persist_tender_transition(
    conn: &mut SqliteConnection,
    transition: &Transition<Tender>,
) -> Result<Tender, PersistenceError> {
    let tender: &Tender = &transition.new_entity;
    let tender_id: i64 = tender.tender_id;
    let expected_version: i32 = transition.expected_version;
    let now: String = timestamp_now()?;

    let result: Result<Tender, PersistenceError> =
        conn.transaction::<Tender, PersistenceError, _>(|conn| {
            if let Some(snapshot) = &transition.snapshot {
                diesel::insert_into(tender_versions::table)
                    .values((
                        tender_versions::tender_id.eq(tender_id),
                        tender_versions::version.eq(snapshot.version),
                        tender_versions::name.eq(&snapshot.content.name),
                        tender_versions::description.eq(snapshot.content.description.as_deref()),
                        tender_versions::status.eq(snapshot.content.status.as_str()),
                        tender_versions::service_type.eq(snapshot.content.service_type.as_str()),
                        tender_versions::saved_at.eq(&now),
                    ))
                    .execute(conn)?;
            }

            let updated: usize = diesel::update(
                tenders::table
                    .filter(tenders::tender_id.eq(tender_id))
                    .filter(tenders::version.eq(expected_version)),
            )
            .set((
                tenders::name.eq(&tender.content.name),
                tenders::description.eq(tender.content.description.as_deref()),
                tenders::status.eq(tender.content.status.as_str()),
                tenders::service_type.eq(tender.content.service_type.as_str()),
                tenders::version.eq(tender.version),
                tenders::updated_at.eq(&now),
            ))
            .execute(conn)?;

            if updated == 0 {
                return Err(PersistenceError::ConcurrentModification {
                    entity: String::from("Tender"),
                    id: tender_id,
                    expected_version,
                });
            }

            Ok(Tender {
                updated_at: now.clone(),
                ..tender.clone()
            })
        });

    match result {
        Ok(persisted) => {
            info!(
                tender_id,
                version = persisted.version,
                action = transition.action,
                "Tender transition persisted"
            );
            Ok(persisted)
        }
        Err(err) => {
            let err: PersistenceError =
                version_conflict(err, "Tender", tender_id, expected_version);
            warn!(tender_id, expected_version, error = %err, "Tender transition rejected");
            Err(err)
        }
    }
}

/// Deletes a tender. Its version log, bids and their reviews go with it.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the tender does not exist.
pub fn delete_tender(conn: &mut SqliteConnection, tender_id: i64) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(tenders::table)
        .filter(tenders::tender_id.eq(tender_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("Tender {tender_id}")));
    }

    info!(tender_id, "Tender deleted");
    Ok(())
}
