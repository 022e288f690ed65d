// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the tender and bid service.
//!
//! Built on Diesel over `SQLite`. The schema is embedded as migrations and
//! applied when a [`Persistence`] is constructed.
//!
//! ## Versioned writes
//!
//! Every accepted mutation of a tender or bid is written in a single
//! transaction:
//!
//! 1. The pre-mutation snapshot is appended to the version log
//!    (`UNIQUE (parent, version)`).
//! 2. The live row is updated with `WHERE id = ? AND version = expected`.
//!
//! If the conditional update matches no row, or the snapshot collides with
//! one already logged, the transaction is rolled back and the write fails
//! with [`PersistenceError::ConcurrentModification`].
//!
//! ## Testing
//!
//! Tests use [`Persistence::new_in_memory`], which hands out a fresh shared
//! in-memory database per call.

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tender_bid_domain::{
    Bid, Employee, NewBid, NewTender, Organization, OrganizationType, Review, Tender,
};

/// Counter for unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use backend::sqlite::MIGRATIONS;
pub use error::PersistenceError;
pub use store::VersionedStore;

use backend::PersistenceBackend;

/// Persistence adapter owning a single `SQLite` connection.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter over a fresh in-memory database.
    ///
    /// Each call receives its own shared-cache database, so tests never
    /// observe each other's rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter over a database file, creating it if needed.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Organizations, Employees & Responsibility
    // ========================================================================

    /// Creates an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_organization(
        &mut self,
        name: &str,
        description: Option<&str>,
        organization_type: OrganizationType,
    ) -> Result<Organization, PersistenceError> {
        mutations::identity::create_organization(
            &mut self.conn,
            name,
            description,
            organization_type,
        )
    }

    /// Retrieves an organization by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_organization(
        &mut self,
        organization_id: i64,
    ) -> Result<Option<Organization>, PersistenceError> {
        queries::identity::get_organization(&mut self.conn, organization_id)
    }

    /// Creates an employee.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateRecord` if the username is taken.
    pub fn create_employee(
        &mut self,
        username: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Employee, PersistenceError> {
        mutations::identity::create_employee(&mut self.conn, username, first_name, last_name)
    }

    /// Retrieves an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_employee(&mut self, employee_id: i64) -> Result<Option<Employee>, PersistenceError> {
        queries::identity::get_employee(&mut self.conn, employee_id)
    }

    /// Retrieves an employee by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_employee_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<Employee>, PersistenceError> {
        queries::identity::get_employee_by_username(&mut self.conn, username)
    }

    /// Grants an employee responsibility for an organization.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ForeignKeyViolation` if either side is missing.
    pub fn add_responsible(
        &mut self,
        organization_id: i64,
        employee_id: i64,
    ) -> Result<i64, PersistenceError> {
        mutations::identity::add_responsible(&mut self.conn, organization_id, employee_id)
    }

    /// Lists the organizations an employee is responsible for.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_responsible_organizations(
        &mut self,
        employee_id: i64,
    ) -> Result<Vec<i64>, PersistenceError> {
        queries::identity::list_responsible_organizations(&mut self.conn, employee_id)
    }

    /// Checks whether the employee with `username` is responsible for an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn is_username_responsible(
        &mut self,
        username: &str,
        organization_id: i64,
    ) -> Result<bool, PersistenceError> {
        queries::identity::is_username_responsible(&mut self.conn, username, organization_id)
    }

    // ========================================================================
    // Tenders & Bids
    // ========================================================================

    /// Creates a tender at version 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_tender(&mut self, new_tender: &NewTender) -> Result<Tender, PersistenceError> {
        mutations::tenders::insert_tender(&mut self.conn, new_tender)
    }

    /// Creates a bid at version 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_bid(&mut self, new_bid: &NewBid) -> Result<Bid, PersistenceError> {
        mutations::bids::insert_bid(&mut self.conn, new_bid)
    }

    /// Lists every bid on a tender, regardless of status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bids_for_tender(&mut self, tender_id: i64) -> Result<Vec<Bid>, PersistenceError> {
        queries::bids::list_bids_for_tender(&mut self.conn, tender_id)
    }

    // ========================================================================
    // Reviews
    // ========================================================================

    /// Appends a review to a bid.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_review(
        &mut self,
        bid_id: i64,
        author: &Employee,
        content: &str,
    ) -> Result<Review, PersistenceError> {
        mutations::reviews::insert_review(
            &mut self.conn,
            bid_id,
            author.employee_id,
            &author.username,
            content,
        )
    }

    /// Retrieves a review by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_review(&mut self, review_id: i64) -> Result<Option<Review>, PersistenceError> {
        queries::reviews::get_review(&mut self.conn, review_id)
    }

    /// Lists the reviews on a bid written by one author, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reviews_for_bid(
        &mut self,
        bid_id: i64,
        author_username: &str,
    ) -> Result<Vec<Review>, PersistenceError> {
        queries::reviews::list_reviews_for_bid(&mut self.conn, bid_id, author_username)
    }
}
