// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types read from the database and their conversion into domain values.

use diesel::prelude::*;
use std::str::FromStr;
use tender_bid_domain::{
    Bid, BidContent, BidStatus, Employee, Organization, OrganizationType, Review, ServiceType,
    Tender, TenderContent, TenderStatus,
};
use tender_bid_history::VersionSnapshot;

use crate::diesel_schema::{
    bid_versions, bids, employees, organizations, reviews, tender_versions, tenders,
};
use crate::error::PersistenceError;

/// Parses a stored enum column, reporting the column on failure.
fn parse_column<T: FromStr>(column: &str, value: &str) -> Result<T, PersistenceError> {
    value.parse::<T>().map_err(|_| {
        PersistenceError::ReconstructionError(format!("invalid {column} value '{value}'"))
    })
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = organizations)]
pub struct OrganizationRow {
    pub organization_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub organization_type: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<OrganizationRow> for Organization {
    type Error = PersistenceError;

    fn try_from(row: OrganizationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            organization_id: row.organization_id,
            name: row.name,
            description: row.description,
            organization_type: parse_column::<OrganizationType>(
                "organization_type",
                &row.organization_type,
            )?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = employees)]
pub struct EmployeeRow {
    pub employee_id: i64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: row.employee_id,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = tenders)]
pub struct TenderRow {
    pub tender_id: i64,
    pub organization_id: i64,
    pub creator_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub service_type: String,
    pub version: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<TenderRow> for Tender {
    type Error = PersistenceError;

    fn try_from(row: TenderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            tender_id: row.tender_id,
            organization_id: row.organization_id,
            creator_id: row.creator_id,
            content: TenderContent {
                name: row.name,
                description: row.description,
                status: parse_column::<TenderStatus>("status", &row.status)?,
                service_type: parse_column::<ServiceType>("service_type", &row.service_type)?,
            },
            version: row.version,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = tender_versions)]
pub struct TenderVersionRow {
    pub version: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub service_type: String,
    pub saved_at: String,
}

impl TryFrom<TenderVersionRow> for VersionSnapshot<TenderContent> {
    type Error = PersistenceError;

    fn try_from(row: TenderVersionRow) -> Result<Self, Self::Error> {
        let content: TenderContent = TenderContent {
            name: row.name,
            description: row.description,
            status: parse_column::<TenderStatus>("status", &row.status)?,
            service_type: parse_column::<ServiceType>("service_type", &row.service_type)?,
        };
        Ok(Self::persisted(row.version, content, row.saved_at))
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = bids)]
pub struct BidRow {
    pub bid_id: i64,
    pub tender_id: i64,
    pub organization_id: i64,
    pub creator_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub version: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<BidRow> for Bid {
    type Error = PersistenceError;

    fn try_from(row: BidRow) -> Result<Self, Self::Error> {
        Ok(Self {
            bid_id: row.bid_id,
            tender_id: row.tender_id,
            organization_id: row.organization_id,
            creator_id: row.creator_id,
            content: BidContent {
                name: row.name,
                description: row.description,
                status: parse_column::<BidStatus>("status", &row.status)?,
            },
            version: row.version,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = bid_versions)]
pub struct BidVersionRow {
    pub version: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub saved_at: String,
}

impl TryFrom<BidVersionRow> for VersionSnapshot<BidContent> {
    type Error = PersistenceError;

    fn try_from(row: BidVersionRow) -> Result<Self, Self::Error> {
        let content: BidContent = BidContent {
            name: row.name,
            description: row.description,
            status: parse_column::<BidStatus>("status", &row.status)?,
        };
        Ok(Self::persisted(row.version, content, row.saved_at))
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = reviews)]
pub struct ReviewRow {
    pub review_id: i64,
    pub bid_id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: String,
}

impl ReviewRow {
    /// Attaches the author's username, read through a join.
    pub fn into_review(self, author_username: String) -> Review {
        Review {
            review_id: self.review_id,
            bid_id: self.bid_id,
            author_id: self.author_id,
            author_username,
            content: self.content,
            created_at: self.created_at,
        }
    }
}
