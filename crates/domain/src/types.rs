// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::{BidStatus, TenderStatus};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Legal form of an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizationType {
    /// Individual entrepreneur.
    #[serde(rename = "IE")]
    SoleProprietor,
    /// Limited liability company.
    #[serde(rename = "LLC")]
    LimitedLiability,
    /// Joint-stock company.
    #[serde(rename = "JSC")]
    JointStock,
}

impl OrganizationType {
    /// Converts this organization type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SoleProprietor => "IE",
            Self::LimitedLiability => "LLC",
            Self::JointStock => "JSC",
        }
    }
}

impl FromStr for OrganizationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IE" => Ok(Self::SoleProprietor),
            "LLC" => Ok(Self::LimitedLiability),
            "JSC" => Ok(Self::JointStock),
            _ => Err(DomainError::InvalidOrganizationType(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of service requested by a tender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    Construction,
    Consulting,
    #[serde(rename = "IT")]
    It,
    Other,
}

impl ServiceType {
    /// Converts this service type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Construction => "Construction",
            Self::Consulting => "Consulting",
            Self::It => "IT",
            Self::Other => "Other",
        }
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Construction" => Ok(Self::Construction),
            "Consulting" => Ok(Self::Consulting),
            "IT" => Ok(Self::It),
            "Other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidServiceType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An organization that owns tenders and bids.
///
/// The organization identifier is the basis of every ownership check and
/// never changes once assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// The canonical numeric identifier assigned by the database.
    pub organization_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub organization_type: OrganizationType,
    pub created_at: String,
    pub updated_at: String,
}

/// An employee who can create entities, be responsible for an
/// organization, or author reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The canonical numeric identifier assigned by the database.
    pub employee_id: i64,
    /// Unique login handle.
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// The versioned content of a tender.
///
/// Exactly these fields are captured by a version snapshot and restored
/// by a rollback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenderContent {
    pub name: String,
    pub description: Option<String>,
    pub status: TenderStatus,
    pub service_type: ServiceType,
}

/// A partial change to tender content. `None` leaves a field untouched.
///
/// `description` is doubly optional so that a patch can clear it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TenderPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TenderStatus>,
    pub service_type: Option<ServiceType>,
}

impl TenderContent {
    /// Returns a copy of this content with the supplied patch fields applied.
    #[must_use]
    pub fn patched(&self, patch: TenderPatch) -> Self {
        Self {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            status: patch.status.unwrap_or(self.status),
            service_type: patch.service_type.unwrap_or(self.service_type),
        }
    }
}

/// A tender as it is currently live in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tender {
    pub tender_id: i64,
    /// Owning organization.
    pub organization_id: i64,
    /// Employee who created the tender.
    pub creator_id: i64,
    pub content: TenderContent,
    /// Starts at 1 and grows by exactly 1 per accepted mutation.
    pub version: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating a tender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTender {
    pub organization_id: i64,
    pub creator_id: i64,
    pub content: TenderContent,
}

/// The versioned content of a bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidContent {
    pub name: String,
    pub description: Option<String>,
    pub status: BidStatus,
}

/// A partial change to bid content. `None` leaves a field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BidPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<BidStatus>,
}

impl BidContent {
    /// Returns a copy of this content with the supplied patch fields applied.
    #[must_use]
    pub fn patched(&self, patch: BidPatch) -> Self {
        Self {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            status: patch.status.unwrap_or(self.status),
        }
    }
}

/// A bid as it is currently live in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub bid_id: i64,
    /// The tender this bid responds to.
    pub tender_id: i64,
    /// Organization submitting the bid.
    pub organization_id: i64,
    /// Employee who created the bid.
    pub creator_id: i64,
    pub content: BidContent,
    /// Starts at 1 and grows by exactly 1 per accepted mutation.
    pub version: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating a bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBid {
    pub tender_id: i64,
    pub organization_id: i64,
    pub creator_id: i64,
    pub content: BidContent,
}

/// Free-text feedback attached to a bid. Reviews are not versioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: i64,
    pub bid_id: i64,
    pub author_id: i64,
    pub author_username: String,
    pub content: String,
    pub created_at: String,
}
