// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tender_bid_domain::StatusValue;
use tender_bid_history::{VersionSnapshot, Versioned};

/// A mutation request against an existing versioned entity, as data only.
///
/// Commands are the only way to request a change to a live tender or bid.
/// Every command, when accepted, bumps the entity's version by exactly one.
pub enum Command<T: Versioned> {
    /// Replace every mutable field.
    Update {
        /// The complete new content.
        content: T::Content,
    },
    /// Overwrite only the supplied fields.
    PartialUpdate {
        /// The fields to change.
        patch: T::Patch,
    },
    /// Set the status to a value from the shared status set.
    UpdateStatus {
        /// The requested status.
        status: StatusValue,
    },
    /// Restore content from a historical snapshot.
    Rollback {
        /// The version number the caller asked to restore.
        requested: i64,
        /// The snapshot located for that version.
        target: VersionSnapshot<T::Content>,
    },
}

impl<T: Versioned> Command<T> {
    /// Returns the action name recorded in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Update { .. } => "Update",
            Self::PartialUpdate { .. } => "PartialUpdate",
            Self::UpdateStatus { .. } => "UpdateStatus",
            Self::Rollback { .. } => "Rollback",
        }
    }

    /// Whether accepting this command writes a snapshot of the pre-mutation state.
    #[must_use]
    pub const fn takes_snapshot(&self) -> bool {
        !matches!(self, Self::UpdateStatus { .. })
    }
}
