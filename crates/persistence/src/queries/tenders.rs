// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tender and tender version-log queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tender_bid_domain::{Tender, TenderContent};
use tender_bid_history::VersionSnapshot;
use tracing::debug;

use crate::data_models::{TenderRow, TenderVersionRow};
use crate::diesel_schema::{tender_versions, tenders};
use crate::error::PersistenceError;

/// Retrieves a tender by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is invalid.
/// Returns `Ok(None)` if the tender is not found.
pub fn get_tender(
    conn: &mut SqliteConnection,
    tender_id: i64,
) -> Result<Option<Tender>, PersistenceError> {
    debug!(tender_id, "Looking up tender");

    tenders::table
        .filter(tenders::tender_id.eq(tender_id))
        .select(TenderRow::as_select())
        .first::<TenderRow>(conn)
        .optional()?
        .map(Tender::try_from)
        .transpose()
}

/// Lists every tender ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is invalid.
pub fn list_tenders(conn: &mut SqliteConnection) -> Result<Vec<Tender>, PersistenceError> {
    debug!("Listing tenders");

    tenders::table
        .order(tenders::tender_id.asc())
        .select(TenderRow::as_select())
        .load::<TenderRow>(conn)?
        .into_iter()
        .map(Tender::try_from)
        .collect()
}

/// Lists the tenders created by an employee, ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is invalid.
pub fn list_tenders_by_creator(
    conn: &mut SqliteConnection,
    creator_id: i64,
) -> Result<Vec<Tender>, PersistenceError> {
    debug!(creator_id, "Listing tenders by creator");

    tenders::table
        .filter(tenders::creator_id.eq(creator_id))
        .order(tenders::tender_id.asc())
        .select(TenderRow::as_select())
        .load::<TenderRow>(conn)?
        .into_iter()
        .map(Tender::try_from)
        .collect()
}

/// Lists the version log of a tender ordered by version number ascending.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is invalid.
pub fn list_tender_versions(
    conn: &mut SqliteConnection,
    tender_id: i64,
) -> Result<Vec<VersionSnapshot<TenderContent>>, PersistenceError> {
    debug!(tender_id, "Listing tender versions");

    tender_versions::table
        .filter(tender_versions::tender_id.eq(tender_id))
        .order(tender_versions::version.asc())
        .select(TenderVersionRow::as_select())
        .load::<TenderVersionRow>(conn)?
        .into_iter()
        .map(VersionSnapshot::try_from)
        .collect()
}

/// Retrieves the logged snapshot of a tender at one version.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is invalid.
/// Returns `Ok(None)` if no snapshot was logged for that version.
pub fn get_tender_version(
    conn: &mut SqliteConnection,
    tender_id: i64,
    version: i32,
) -> Result<Option<VersionSnapshot<TenderContent>>, PersistenceError> {
    debug!(tender_id, version, "Looking up tender version");

    tender_versions::table
        .filter(tender_versions::tender_id.eq(tender_id))
        .filter(tender_versions::version.eq(version))
        .select(TenderVersionRow::as_select())
        .first::<TenderVersionRow>(conn)
        .optional()?
        .map(VersionSnapshot::try_from)
        .transpose()
}
