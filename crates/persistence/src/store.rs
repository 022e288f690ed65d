// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Kind-generic access to versioned entities.
//!
//! [`VersionedStore`] lets callers write one implementation of
//! update, rollback and delete for both tenders and bids.

use tender_bid::Transition;
use tender_bid_domain::{Bid, Tender};
use tender_bid_history::{VersionSnapshot, Versioned};

use crate::error::PersistenceError;
use crate::{Persistence, mutations, queries};

/// Storage operations shared by every versioned entity kind.
pub trait VersionedStore<T: Versioned> {
    /// Loads the live entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn load(&mut self, id: i64) -> Result<Option<T>, PersistenceError>;

    /// Lists every entity of this kind ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_all(&mut self) -> Result<Vec<T>, PersistenceError>;

    /// Lists the entities of this kind created by an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_by_creator(&mut self, creator_id: i64) -> Result<Vec<T>, PersistenceError>;

    /// Lists the version log ordered by version number ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_versions(&mut self, id: i64)
    -> Result<Vec<VersionSnapshot<T::Content>>, PersistenceError>;

    /// Loads the logged snapshot at one version.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn load_version(
        &mut self,
        id: i64,
        version: i32,
    ) -> Result<Option<VersionSnapshot<T::Content>>, PersistenceError>;

    /// Writes a transition: snapshot and live row in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ConcurrentModification` if the live row
    /// moved since it was read.
    fn persist_transition(&mut self, transition: &Transition<T>) -> Result<T, PersistenceError>;

    /// Deletes the entity and everything it owns.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the entity does not exist.
    fn delete(&mut self, id: i64) -> Result<(), PersistenceError>;
}

impl VersionedStore<Tender> for Persistence {
    fn load(&mut self, id: i64) -> Result<Option<Tender>, PersistenceError> {
        queries::tenders::get_tender(&mut self.conn, id)
    }

    fn list_all(&mut self) -> Result<Vec<Tender>, PersistenceError> {
        queries::tenders::list_tenders(&mut self.conn)
    }

    fn list_by_creator(&mut self, creator_id: i64) -> Result<Vec<Tender>, PersistenceError> {
        queries::tenders::list_tenders_by_creator(&mut self.conn, creator_id)
    }

    fn list_versions(
        &mut self,
        id: i64,
    ) -> Result<Vec<VersionSnapshot<<Tender as Versioned>::Content>>, PersistenceError> {
        queries::tenders::list_tender_versions(&mut self.conn, id)
    }

    fn load_version(
        &mut self,
        id: i64,
        version: i32,
    ) -> Result<Option<VersionSnapshot<<Tender as Versioned>::Content>>, PersistenceError> {
        queries::tenders::get_tender_version(&mut self.conn, id, version)
    }

    fn persist_transition(
        &mut self,
        transition: &Transition<Tender>,
    ) -> Result<Tender, PersistenceError> {
        mutations::tenders::persist_tender_transition(&mut self.conn, transition)
    }

    fn delete(&mut self, id: i64) -> Result<(), PersistenceError> {
        mutations::tenders::delete_tender(&mut self.conn, id)
    }
}

impl VersionedStore<Bid> for Persistence {
    fn load(&mut self, id: i64) -> Result<Option<Bid>, PersistenceError> {
        queries::bids::get_bid(&mut self.conn, id)
    }

    fn list_all(&mut self) -> Result<Vec<Bid>, PersistenceError> {
        queries::bids::list_bids(&mut self.conn)
    }

    fn list_by_creator(&mut self, creator_id: i64) -> Result<Vec<Bid>, PersistenceError> {
        queries::bids::list_bids_by_creator(&mut self.conn, creator_id)
    }

    fn list_versions(
        &mut self,
        id: i64,
    ) -> Result<Vec<VersionSnapshot<<Bid as Versioned>::Content>>, PersistenceError> {
        queries::bids::list_bid_versions(&mut self.conn, id)
    }

    fn load_version(
        &mut self,
        id: i64,
        version: i32,
    ) -> Result<Option<VersionSnapshot<<Bid as Versioned>::Content>>, PersistenceError> {
        queries::bids::get_bid_version(&mut self.conn, id, version)
    }

    fn persist_transition(
        &mut self,
        transition: &Transition<Bid>,
    ) -> Result<Bid, PersistenceError> {
        mutations::bids::persist_bid_transition(&mut self.conn, transition)
    }

    fn delete(&mut self, id: i64) -> Result<(), PersistenceError> {
        mutations::bids::delete_bid(&mut self.conn, id)
    }
}
