// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Access-control decisions.
//!
//! Decisions are pure. The caller resolves the set of organizations the
//! acting employee is responsible for and passes it in. Any missing
//! identifier denies access rather than raising an error.

use tender_bid_history::Versioned;

/// The outcome of an access-control check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Allowed,
    Denied,
}

impl Capability {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }
}

/// Whether `actor` is responsible for `organization`.
///
/// # Arguments
///
/// * `organization` - The organization being acted on, if one was supplied
/// * `responsible_for` - Organizations the acting employee is responsible for
#[must_use]
pub fn is_organization_responsible(organization: Option<i64>, responsible_for: &[i64]) -> bool {
    organization.is_some_and(|id| responsible_for.contains(&id))
}

/// Decides whether an actor may create an entity for an organization.
///
/// The actor must be responsible for the target organization.
#[must_use]
pub fn can_create(
    actor: Option<i64>,
    organization: Option<i64>,
    responsible_for: &[i64],
) -> Capability {
    Capability::from_bool(
        actor.is_some() && is_organization_responsible(organization, responsible_for),
    )
}

/// Decides whether an actor may mutate or delete an existing entity.
///
/// The actor must either be the entity's creator or be responsible for the
/// entity's owning organization.
#[must_use]
pub fn can_modify<T: Versioned>(
    entity: &T,
    actor: Option<i64>,
    responsible_for: &[i64],
) -> Capability {
    let Some(actor_id) = actor else {
        return Capability::Denied;
    };
    Capability::from_bool(
        actor_id == entity.creator_id()
            || is_organization_responsible(Some(entity.organization_id()), responsible_for),
    )
}
