// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use tender_bid_domain::validate_rollback_target;
use tender_bid_history::{VersionSnapshot, Versioned};

/// The result of a successful transition.
///
/// Transitions are pure: persisting `snapshot` and `new_entity` together is
/// the caller's job, and must happen atomically.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<T: Versioned> {
    /// The entity after the mutation, version already incremented.
    pub new_entity: T,
    /// The pre-mutation content to append to the version log, recorded
    /// under the pre-mutation version. `None` for status changes.
    pub snapshot: Option<VersionSnapshot<T::Content>>,
    /// The version the live row must still carry for the write to succeed.
    pub expected_version: i32,
    /// The name of the accepted command.
    pub action: &'static str,
}

/// Applies a command to a live entity, producing the entity's next state.
///
/// # Arguments
///
/// * `entity` - The entity as currently stored (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Transition)` with the new entity and the snapshot to log
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The new content violates domain rules
/// - The requested status has no counterpart in the entity's status domain
/// - The rollback target is not strictly between 0 and the live version
/// - The rollback snapshot does not carry the requested version
/// - The version counter would overflow
pub fn apply<T: Versioned>(entity: &T, command: Command<T>) -> Result<Transition<T>, CoreError> {
    let current_version: i32 = entity.version();
    let action: &'static str = command.name();
    let snapshot: Option<VersionSnapshot<T::Content>> =
        command.takes_snapshot().then(|| entity.snapshot());

    let mut new_entity: T = entity.clone();
    match command {
        Command::Update { content } => {
            T::validate_content(&content)?;
            new_entity.restore(content);
        }
        Command::PartialUpdate { patch } => {
            let content: T::Content = entity.patched(patch);
            T::validate_content(&content)?;
            new_entity.restore(content);
        }
        Command::UpdateStatus { status } => {
            let status: T::Status = T::status_from_shared(status)?;
            new_entity.set_status(status);
        }
        Command::Rollback { requested, target } => {
            validate_rollback_target(current_version, requested)?;
            if i64::from(target.version) != requested {
                return Err(CoreError::VersionMismatch {
                    requested,
                    found: target.version,
                });
            }
            new_entity.restore(target.content);
        }
    }

    let next_version: i32 = current_version
        .checked_add(1)
        .ok_or(CoreError::VersionOverflow {
            current: current_version,
        })?;
    new_entity.set_version(next_version);

    Ok(Transition {
        new_entity,
        snapshot,
        expected_version: current_version,
        action,
    })
}

/// Validates content for a new entity before it is created at version 1.
///
/// # Errors
///
/// Returns an error if the content violates domain rules.
pub fn validate_creation<T: Versioned>(content: &T::Content) -> Result<(), CoreError> {
    T::validate_content(content)?;
    Ok(())
}
