// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Version history for tenders and bids.
//!
//! Every versioned entity owns an append-only log of snapshots. A snapshot
//! with version number N records the content that was live while the
//! entity's version was N. Snapshots are never mutated once written.
//!
//! The [`Versioned`] trait is the seam between the entity kinds and the
//! generic mutation logic: it exposes the content to snapshot, the way to
//! restore content from a snapshot, and the entity kind.

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

use serde::{Deserialize, Serialize};
use tender_bid_domain::{
    Bid, BidContent, BidPatch, BidStatus, DomainError, StatusValue, Tender, TenderContent,
    TenderPatch, TenderStatus, validate_bid_content, validate_tender_content,
};

/// The kinds of entity that carry a version history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Tender,
    Bid,
}

impl EntityKind {
    /// Returns the lowercase name used in logs and routes.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tender => "tender",
            Self::Bid => "bid",
        }
    }

    /// Returns the human-readable resource name used in error messages.
    #[must_use]
    pub const fn resource_name(&self) -> &'static str {
        match self {
            Self::Tender => "Tender",
            Self::Bid => "Bid",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable record of entity content at a given version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSnapshot<C> {
    /// The version that was live when this content was current.
    pub version: i32,
    /// The captured content.
    pub content: C,
    /// When the snapshot was written. `None` until persisted.
    pub saved_at: Option<String>,
}

impl<C> VersionSnapshot<C> {
    /// Creates a snapshot that has not been persisted yet.
    #[must_use]
    pub const fn new(version: i32, content: C) -> Self {
        Self {
            version,
            content,
            saved_at: None,
        }
    }

    /// Creates a snapshot loaded from the store.
    #[must_use]
    pub const fn persisted(version: i32, content: C, saved_at: String) -> Self {
        Self {
            version,
            content,
            saved_at: Some(saved_at),
        }
    }
}

/// Behavior shared by every entity kind that carries a version history.
///
/// Implemented once per kind so that the mutation and rollback logic can
/// be written a single time and dispatched statically.
pub trait Versioned: Clone {
    /// The fields captured by a snapshot and restored by a rollback.
    type Content: Clone + PartialEq + std::fmt::Debug;
    /// A partial change to the content.
    type Patch;
    /// The kind's own status domain.
    type Status: Copy + PartialEq + std::fmt::Debug;

    /// The entity kind.
    const KIND: EntityKind;

    fn id(&self) -> i64;
    fn organization_id(&self) -> i64;
    fn creator_id(&self) -> i64;
    fn version(&self) -> i32;
    fn set_version(&mut self, version: i32);
    fn content(&self) -> &Self::Content;

    /// Replaces the live content.
    fn restore(&mut self, content: Self::Content);

    /// Returns the live content with the patch applied, leaving `self` untouched.
    fn patched(&self, patch: Self::Patch) -> Self::Content;

    fn set_status(&mut self, status: Self::Status);

    /// Converts a value from the shared status set into this kind's domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the value has no counterpart in this kind's domain.
    fn status_from_shared(value: StatusValue) -> Result<Self::Status, DomainError>;

    /// Validates content before it becomes live.
    ///
    /// # Errors
    ///
    /// Returns an error if a content field violates a domain rule.
    fn validate_content(content: &Self::Content) -> Result<(), DomainError>;

    /// Captures the live content under the live version number.
    fn snapshot(&self) -> VersionSnapshot<Self::Content> {
        VersionSnapshot::new(self.version(), self.content().clone())
    }
}

impl Versioned for Tender {
    type Content = TenderContent;
    type Patch = TenderPatch;
    type Status = TenderStatus;

    const KIND: EntityKind = EntityKind::Tender;

    fn id(&self) -> i64 {
        self.tender_id
    }

    fn organization_id(&self) -> i64 {
        self.organization_id
    }

    fn creator_id(&self) -> i64 {
        self.creator_id
    }

    fn version(&self) -> i32 {
        self.version
    }

    fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    fn content(&self) -> &TenderContent {
        &self.content
    }

    fn restore(&mut self, content: TenderContent) {
        self.content = content;
    }

    fn patched(&self, patch: TenderPatch) -> TenderContent {
        self.content.patched(patch)
    }

    fn set_status(&mut self, status: TenderStatus) {
        self.content.status = status;
    }

    fn status_from_shared(value: StatusValue) -> Result<TenderStatus, DomainError> {
        Ok(TenderStatus::from(value))
    }

    fn validate_content(content: &TenderContent) -> Result<(), DomainError> {
        validate_tender_content(content)
    }
}

impl Versioned for Bid {
    type Content = BidContent;
    type Patch = BidPatch;
    type Status = BidStatus;

    const KIND: EntityKind = EntityKind::Bid;

    fn id(&self) -> i64 {
        self.bid_id
    }

    fn organization_id(&self) -> i64 {
        self.organization_id
    }

    fn creator_id(&self) -> i64 {
        self.creator_id
    }

    fn version(&self) -> i32 {
        self.version
    }

    fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    fn content(&self) -> &BidContent {
        &self.content
    }

    fn restore(&mut self, content: BidContent) {
        self.content = content;
    }

    fn patched(&self, patch: BidPatch) -> BidContent {
        self.content.patched(patch)
    }

    fn set_status(&mut self, status: BidStatus) {
        self.content.status = status;
    }

    fn status_from_shared(value: StatusValue) -> Result<BidStatus, DomainError> {
        BidStatus::try_from(value)
    }

    fn validate_content(content: &BidContent) -> Result<(), DomainError> {
        validate_bid_content(content)
    }
}

#[cfg(test)]
mod tests;
