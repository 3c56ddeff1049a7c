// ABOUTME: Owner resolution for recipe writes
// ABOUTME: Decides which chef a created or updated recipe belongs to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ownership resolution
//!
//! The acting chef is always an explicit argument. An explicit `chef` in the
//! payload is honoured only when an authenticated actor is present, so an
//! anonymous caller can never inject an owner.

use crate::errors::Violation;
use crate::models::{Chef, ChefRef};
use serde::{Deserialize, Serialize};

/// Owner applied by an update whose payload names no chef
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerPolicy {
    /// The updating actor becomes the owner
    #[default]
    #[serde(rename = "reassign")]
    ReassignToActor,
    /// The existing owner is kept
    #[serde(rename = "preserve")]
    PreserveOriginal,
}

impl OwnerPolicy {
    /// Parse a configuration value (`reassign` or `preserve`, any case)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "reassign" => Some(Self::ReassignToActor),
            "preserve" => Some(Self::PreserveOriginal),
            _ => None,
        }
    }

    /// Configuration spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReassignToActor => "reassign",
            Self::PreserveOriginal => "preserve",
        }
    }
}

/// The kind of write being resolved
#[derive(Debug, Clone, Copy)]
pub enum WriteKind<'a> {
    /// New recipe
    Create,
    /// Replacement of an existing recipe
    Update {
        /// Owner before the update
        current_owner: &'a ChefRef,
    },
}

/// Where the resolved owner came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerSource {
    /// `chef` field of the payload
    Explicit,
    /// The authenticated actor
    Actor,
    /// Kept from the stored recipe
    Preserved,
}

/// Outcome of owner resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerResolution {
    /// Owner id to persist
    pub chef_id: i64,
    /// Origin of the id
    pub source: OwnerSource,
}

/// Require an authenticated actor for a write
///
/// # Errors
///
/// `MissingOwner` when no actor is present
pub const fn require_actor(actor: Option<&Chef>) -> Result<&Chef, Violation> {
    match actor {
        Some(chef) => Ok(chef),
        None => Err(Violation::MissingOwner),
    }
}

/// Determine the owner of a write
///
/// # Errors
///
/// `MissingOwner` when there is no authenticated actor, whatever the payload says
pub fn resolve_owner(
    explicit: Option<i64>,
    actor: Option<&Chef>,
    write: WriteKind<'_>,
    policy: OwnerPolicy,
) -> Result<OwnerResolution, Violation> {
    let actor = require_actor(actor)?;

    let resolution = match (explicit, write, policy) {
        (Some(chef_id), _, _) => OwnerResolution {
            chef_id,
            source: OwnerSource::Explicit,
        },
        (None, WriteKind::Update { current_owner }, OwnerPolicy::PreserveOriginal) => {
            OwnerResolution {
                chef_id: current_owner.id,
                source: OwnerSource::Preserved,
            }
        }
        (None, _, _) => OwnerResolution {
            chef_id: actor.id,
            source: OwnerSource::Actor,
        },
    };
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn chef(id: i64, username: &str) -> Chef {
        Chef {
            id,
            username: username.to_owned(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(OwnerPolicy::parse("Reassign"), Some(OwnerPolicy::ReassignToActor));
        assert_eq!(OwnerPolicy::parse(" preserve "), Some(OwnerPolicy::PreserveOriginal));
        assert_eq!(OwnerPolicy::parse("keep"), None);
        assert_eq!(OwnerPolicy::default().as_str(), "reassign");
    }

    #[test]
    fn test_anonymous_write_has_no_owner() {
        let outcome = resolve_owner(Some(3), None, WriteKind::Create, OwnerPolicy::default());
        assert_eq!(outcome, Err(Violation::MissingOwner));
    }

    #[test]
    fn test_create_binds_actor() {
        let ana = chef(1, "ana");
        let outcome = resolve_owner(None, Some(&ana), WriteKind::Create, OwnerPolicy::default());
        assert_eq!(
            outcome,
            Ok(OwnerResolution {
                chef_id: 1,
                source: OwnerSource::Actor
            })
        );
    }

    #[test]
    fn test_explicit_chef_wins_with_actor() {
        let ana = chef(1, "ana");
        let outcome = resolve_owner(Some(2), Some(&ana), WriteKind::Create, OwnerPolicy::default());
        assert_eq!(outcome.map(|r| (r.chef_id, r.source)), Ok((2, OwnerSource::Explicit)));
    }

    #[test]
    fn test_update_policies() {
        let ana = chef(1, "ana");
        let owner = ChefRef {
            id: 9,
            username: "joao".to_owned(),
        };
        let update = WriteKind::Update {
            current_owner: &owner,
        };

        let reassigned = resolve_owner(None, Some(&ana), update, OwnerPolicy::ReassignToActor);
        assert_eq!(reassigned.map(|r| r.chef_id), Ok(1));

        let preserved = resolve_owner(None, Some(&ana), update, OwnerPolicy::PreserveOriginal);
        assert_eq!(
            preserved.map(|r| (r.chef_id, r.source)),
            Ok((9, OwnerSource::Preserved))
        );
    }
}
