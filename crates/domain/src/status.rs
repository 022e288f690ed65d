// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifecycle status domains for tenders and bids.
//!
//! Tenders and bids share the same lifecycle shape but end in different
//! terminal states, so they carry two distinct status types. Status is a
//! free choice within each fixed set; there is no forward-only automaton.
//!
//! `StatusValue` is the three-value set accepted by the status-change
//! operation for both entity kinds. A shared value must still be converted
//! into the kind's own domain before it is written.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tender lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenderStatus {
    /// Tender exists but is not visible to bidders yet
    #[default]
    Created,
    /// Tender is open for bids
    Published,
    /// Tender no longer accepts bids
    Closed,
}

impl TenderStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Published => "PUBLISHED",
            Self::Closed => "CLOSED",
        }
    }
}

impl FromStr for TenderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(Self::Created),
            "PUBLISHED" => Ok(Self::Published),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TenderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<StatusValue> for TenderStatus {
    fn from(value: StatusValue) -> Self {
        match value {
            StatusValue::Created => Self::Created,
            StatusValue::Published => Self::Published,
            StatusValue::Closed => Self::Closed,
        }
    }
}

/// Bid lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidStatus {
    /// Bid is drafted by the responding organization
    #[default]
    Created,
    /// Bid is submitted to the tender owner
    Published,
    /// Bid was withdrawn
    Canceled,
}

impl BidStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Published => "PUBLISHED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl FromStr for BidStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(Self::Created),
            "PUBLISHED" => Ok(Self::Published),
            "CANCELED" => Ok(Self::Canceled),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<StatusValue> for BidStatus {
    type Error = DomainError;

    /// `Closed` has no bid counterpart and is rejected.
    fn try_from(value: StatusValue) -> Result<Self, Self::Error> {
        match value {
            StatusValue::Created => Ok(Self::Created),
            StatusValue::Published => Ok(Self::Published),
            StatusValue::Closed => Err(DomainError::InvalidStatus {
                status: value.as_str().to_string(),
            }),
        }
    }
}

/// The status set accepted by the status-change operation for every entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusValue {
    Created,
    Published,
    Closed,
}

impl StatusValue {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Published => "PUBLISHED",
            Self::Closed => "CLOSED",
        }
    }
}

impl FromStr for StatusValue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(Self::Created),
            "PUBLISHED" => Ok(Self::Published),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}
