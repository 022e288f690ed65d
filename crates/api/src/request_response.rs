// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tender_bid_domain::{Bid, BidContent, Employee, Organization, Review, Tender, TenderContent};
use tender_bid_history::VersionSnapshot;

/// Distinguishes an explicit `null` from an absent field.
///
/// Used with `#[serde(default)]`: absent gives `None`, `null` gives
/// `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ========================================================================
// Requests
// ========================================================================

/// Request to create a tender.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTenderRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub service_type: Option<String>,
    /// Initial status. Defaults to `CREATED`.
    pub status: Option<String>,
    /// The owning organization.
    #[serde(default)]
    pub organization: Value,
    /// The acting employee, who becomes the creator.
    #[serde(default)]
    pub creator: Value,
}

/// Request to create a bid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBidRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Initial status. Defaults to `CREATED`.
    pub status: Option<String>,
    /// The tender the bid responds to.
    #[serde(default)]
    pub tender: Value,
    #[serde(default)]
    pub organization: Value,
    #[serde(default)]
    pub creator: Value,
}

/// Request to replace or patch a tender.
///
/// The same body serves full and partial updates. A full update requires
/// `name` and `service_type`; a partial update only touches what is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTenderRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub service_type: Option<String>,
    pub status: Option<String>,
    /// The acting employee.
    #[serde(default)]
    pub creator: Value,
}

/// Request to replace or patch a bid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBidRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub status: Option<String>,
    /// The acting employee.
    #[serde(default)]
    pub creator: Value,
}

/// Request to set the status of a tender or bid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
    #[serde(default)]
    pub creator: Value,
}

/// Body of requests that only identify the actor (rollback, delete).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorRequest {
    #[serde(default)]
    pub creator: Value,
}

/// Query parameters for listing reviews on a bid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewQuery {
    #[serde(rename = "authorUsername")]
    pub author_username: Option<String>,
    #[serde(rename = "organizationId")]
    pub organization_id: Option<String>,
}

/// Request to leave feedback on a bid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReviewRequest {
    #[serde(rename = "authorUsername")]
    pub author_username: Option<String>,
    #[serde(default, rename = "organizationId")]
    pub organization_id: Value,
    pub content: Option<String>,
}

/// Request to register an employee.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEmployeeRequest {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request to register an organization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub organization_type: Option<String>,
}

/// Request to make an employee responsible for an organization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddResponsibleRequest {
    #[serde(default)]
    pub employee: Value,
}

// ========================================================================
// Responses
// ========================================================================

/// A tender as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenderResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub service_type: String,
    pub status: String,
    pub version: i32,
    pub creator: i64,
    pub organization: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Tender> for TenderResponse {
    fn from(tender: Tender) -> Self {
        Self {
            id: tender.tender_id,
            name: tender.content.name,
            description: tender.content.description,
            service_type: tender.content.service_type.as_str().to_string(),
            status: tender.content.status.as_str().to_string(),
            version: tender.version,
            creator: tender.creator_id,
            organization: tender.organization_id,
            created_at: tender.created_at,
            updated_at: tender.updated_at,
        }
    }
}

/// A bid as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub version: i32,
    pub tender: i64,
    pub creator: i64,
    pub organization: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Bid> for BidResponse {
    fn from(bid: Bid) -> Self {
        Self {
            id: bid.bid_id,
            name: bid.content.name,
            description: bid.content.description,
            status: bid.content.status.as_str().to_string(),
            version: bid.version,
            tender: bid.tender_id,
            creator: bid.creator_id,
            organization: bid.organization_id,
            created_at: bid.created_at,
            updated_at: bid.updated_at,
        }
    }
}

/// One row of a tender's version log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenderVersionResponse {
    pub version: i32,
    pub name: String,
    pub description: Option<String>,
    pub service_type: String,
    pub status: String,
    pub saved_at: Option<String>,
}

impl From<VersionSnapshot<TenderContent>> for TenderVersionResponse {
    fn from(snapshot: VersionSnapshot<TenderContent>) -> Self {
        Self {
            version: snapshot.version,
            name: snapshot.content.name,
            description: snapshot.content.description,
            service_type: snapshot.content.service_type.as_str().to_string(),
            status: snapshot.content.status.as_str().to_string(),
            saved_at: snapshot.saved_at,
        }
    }
}

/// One row of a bid's version log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidVersionResponse {
    pub version: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub saved_at: Option<String>,
}

impl From<VersionSnapshot<BidContent>> for BidVersionResponse {
    fn from(snapshot: VersionSnapshot<BidContent>) -> Self {
        Self {
            version: snapshot.version,
            name: snapshot.content.name,
            description: snapshot.content.description,
            status: snapshot.content.status.as_str().to_string(),
            saved_at: snapshot.saved_at,
        }
    }
}

/// Acknowledgement of a status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdatedResponse {
    /// Always `"status updated"`.
    pub status: String,
    /// The version after the change.
    pub version: i32,
}

impl StatusUpdatedResponse {
    #[must_use]
    pub fn new(version: i32) -> Self {
        Self {
            status: String::from("status updated"),
            version,
        }
    }
}

/// A review as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub bid: i64,
    /// Username of the author.
    pub author: String,
    pub content: String,
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.review_id,
            bid: review.bid_id,
            author: review.author_username,
            content: review.content,
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.employee_id,
            username: employee.username,
            first_name: employee.first_name,
            last_name: employee.last_name,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub organization_type: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Organization> for OrganizationResponse {
    fn from(organization: Organization) -> Self {
        Self {
            id: organization.organization_id,
            name: organization.name,
            description: organization.description,
            organization_type: organization.organization_type.as_str().to_string(),
            created_at: organization.created_at,
            updated_at: organization.updated_at,
        }
    }
}

/// A responsibility link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsibleResponse {
    pub id: i64,
    pub organization: i64,
    pub employee: i64,
}
