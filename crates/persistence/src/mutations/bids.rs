// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bid mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tender_bid::Transition;
use tender_bid_domain::{Bid, NewBid};
use tracing::{info, warn};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{bid_versions, bids};
use crate::error::PersistenceError;
use crate::mutations::{timestamp_now, version_conflict};

/// Inserts a new bid at version 1.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the tender,
/// organization or creator does not exist, or another error if the insert
/// fails.
pub fn insert_bid(conn: &mut SqliteConnection, new_bid: &NewBid) -> Result<Bid, PersistenceError> {
    let now: String = timestamp_now()?;

    conn.transaction::<Bid, PersistenceError, _>(|conn| {
        diesel::insert_into(bids::table)
            .values((
                bids::tender_id.eq(new_bid.tender_id),
                bids::organization_id.eq(new_bid.organization_id),
                bids::creator_id.eq(new_bid.creator_id),
                bids::name.eq(&new_bid.content.name),
                bids::description.eq(new_bid.content.description.as_deref()),
                bids::status.eq(new_bid.content.status.as_str()),
                bids::version.eq(1),
                bids::created_at.eq(&now),
                bids::updated_at.eq(&now),
            ))
            .execute(conn)?;

        let bid_id: i64 = conn.get_last_insert_rowid()?;
        info!(
            bid_id,
            tender_id = new_bid.tender_id,
            organization_id = new_bid.organization_id,
            creator_id = new_bid.creator_id,
            "Bid created"
        );

        Ok(Bid {
            bid_id,
            tender_id: new_bid.tender_id,
            organization_id: new_bid.organization_id,
            creator_id: new_bid.creator_id,
            content: new_bid.content.clone(),
            version: 1,
            created_at: now.clone(),
            updated_at: now.clone(),
        })
    })
}

/// Persists a bid transition atomically.
///
/// Appends the pre-mutation snapshot (if any) to the version log, then
/// updates the live row only if it still carries `expected_version`.
///
/// # Errors
///
/// Returns `PersistenceError::ConcurrentModification` if another writer
/// moved the version first. Nothing is written in that case.
pub fn persist_bid_transition(
    conn: &mut SqliteConnection,
    transition: &Transition<Bid>,
) -> Result<Bid, PersistenceError> {
    let bid: &Bid = &transition.new_entity;
    let bid_id: i64 = bid.bid_id;
    let expected_version: i32 = transition.expected_version;
    let now: String = timestamp_now()?;

    let result: Result<Bid, PersistenceError> =
        conn.transaction::<Bid, PersistenceError, _>(|conn| {
            if let Some(snapshot) = &transition.snapshot {
                diesel::insert_into(bid_versions::table)
                    .values((
                        bid_versions::bid_id.eq(bid_id),
                        bid_versions::version.eq(snapshot.version),
                        bid_versions::name.eq(&snapshot.content.name),
                        bid_versions::description.eq(snapshot.content.description.as_deref()),
                        bid_versions::status.eq(snapshot.content.status.as_str()),
                        bid_versions::saved_at.eq(&now),
                    ))
                    .execute(conn)?;
            }

            let updated: usize = diesel::update(
                bids::table
                    .filter(bids::bid_id.eq(bid_id))
                    .filter(bids::version.eq(expected_version)),
            )
            .set((
                bids::name.eq(&bid.content.name),
                bids::description.eq(bid.content.description.as_deref()),
                bids::status.eq(bid.content.status.as_str()),
                bids::version.eq(bid.version),
                bids::updated_at.eq(&now),
            ))
            .execute(conn)?;

            if updated == 0 {
                return Err(PersistenceError::ConcurrentModification {
                    entity: String::from("Bid"),
                    id: bid_id,
                    expected_version,
                });
            }

            Ok(Bid {
                updated_at: now.clone(),
                ..bid.clone()
            })
        });

    match result {
        Ok(persisted) => {
            info!(
                bid_id,
                version = persisted.version,
                action = transition.action,
                "Bid transition persisted"
            );
            Ok(persisted)
        }
        Err(err) => {
            let err: PersistenceError = version_conflict(err, "Bid", bid_id, expected_version);
            warn!(bid_id, expected_version, error = %err, "Bid transition rejected");
            Err(err)
        }
    }
}

/// Deletes a bid together with its version log and reviews.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the bid does not exist.
pub fn delete_bid(conn: &mut SqliteConnection, bid_id: i64) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(bids::table)
        .filter(bids::bid_id.eq(bid_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("Bid {bid_id}")));
    }

    info!(bid_id, "Bid deleted");
    Ok(())
}
