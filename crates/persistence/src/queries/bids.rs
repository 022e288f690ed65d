// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bid and bid version-log queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tender_bid_domain::{Bid, BidContent};
use tender_bid_history::VersionSnapshot;
use tracing::debug;

use crate::data_models::{BidRow, BidVersionRow};
use crate::diesel_schema::{bid_versions, bids};
use crate::error::PersistenceError;

/// Retrieves a bid by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is invalid.
/// Returns `Ok(None)` if the bid is not found.
pub fn get_bid(conn: &mut SqliteConnection, bid_id: i64) -> Result<Option<Bid>, PersistenceError> {
    debug!(bid_id, "Looking up bid");

    bids::table
        .filter(bids::bid_id.eq(bid_id))
        .select(BidRow::as_select())
        .first::<BidRow>(conn)
        .optional()?
        .map(Bid::try_from)
        .transpose()
}

/// Lists every bid ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is invalid.
pub fn list_bids(conn: &mut SqliteConnection) -> Result<Vec<Bid>, PersistenceError> {
    debug!("Listing bids");

    bids::table
        .order(bids::bid_id.asc())
        .select(BidRow::as_select())
        .load::<BidRow>(conn)?
        .into_iter()
        .map(Bid::try_from)
        .collect()
}

/// Lists the bids created by an employee, ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is invalid.
pub fn list_bids_by_creator(
    conn: &mut SqliteConnection,
    creator_id: i64,
) -> Result<Vec<Bid>, PersistenceError> {
    debug!(creator_id, "Listing bids by creator");

    bids::table
        .filter(bids::creator_id.eq(creator_id))
        .order(bids::bid_id.asc())
        .select(BidRow::as_select())
        .load::<BidRow>(conn)?
        .into_iter()
        .map(Bid::try_from)
        .collect()
}

/// Lists the version log of a bid ordered by version number ascending.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is invalid.
pub fn list_bid_versions(
    conn: &mut SqliteConnection,
    bid_id: i64,
) -> Result<Vec<VersionSnapshot<BidContent>>, PersistenceError> {
    debug!(bid_id, "Listing bid versions");

    bid_versions::table
        .filter(bid_versions::bid_id.eq(bid_id))
        .order(bid_versions::version.asc())
        .select(BidVersionRow::as_select())
        .load::<BidVersionRow>(conn)?
        .into_iter()
        .map(VersionSnapshot::try_from)
        .collect()
}

/// Retrieves the logged snapshot of a bid at one version.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is invalid.
/// Returns `Ok(None)` if no snapshot was logged for that version.
pub fn get_bid_version(
    conn: &mut SqliteConnection,
    bid_id: i64,
    version: i32,
) -> Result<Option<VersionSnapshot<BidContent>>, PersistenceError> {
    debug!(bid_id, version, "Looking up bid version");

    bid_versions::table
        .filter(bid_versions::bid_id.eq(bid_id))
        .filter(bid_versions::version.eq(version))
        .select(BidVersionRow::as_select())
        .first::<BidVersionRow>(conn)
        .optional()?
        .map(VersionSnapshot::try_from)
        .transpose()
}

/// Lists every bid that references a tender, regardless of status, ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is invalid.
pub fn list_bids_for_tender(
    conn: &mut SqliteConnection,
    tender_id: i64,
) -> Result<Vec<Bid>, PersistenceError> {
    debug!(tender_id, "Listing bids for tender");

    bids::table
        .filter(bids::tender_id.eq(tender_id))
        .order(bids::bid_id.asc())
        .select(BidRow::as_select())
        .load::<BidRow>(conn)?
        .into_iter()
        .map(Bid::try_from)
        .collect()
}
