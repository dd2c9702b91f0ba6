//! Error types for the battle engine.
//!
//! Errors fall into two groups:
//!
//! - [`ActionError`]: an action was rejected before anything was applied. These
//!   are recovered locally (re-prompt a human, fall back to a basic attack for
//!   the automated policy).
//! - [`GameError`]: configuration or session-level failures. These are surfaced
//!   to the host and never retried.
//!
//! Cancelling a menu is not an error; see [`crate::host::Choice::Cancel`].

use thiserror::Error;

/// Reasons an action is rejected without mutating any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A special was attempted with less charge than it costs.
    #[error("{name} doesn't have enough charge to perform its special ({charge}/{cost})")]
    InsufficientCharge {
        /// Name of the acting warrior
        name: &'static str,
        /// Charge currently held
        charge: u32,
        /// Charge the special costs
        cost: u32,
    },

    /// The chosen target slot is out of range or holds a defeated warrior.
    #[error("slot {slot} is not a living warrior, please choose a living warrior")]
    InvalidTarget {
        /// The rejected slot index
        slot: usize,
    },

    /// A single-target ability was used without naming a target.
    #[error("{ability} needs a target")]
    MissingTarget {
        /// Name of the ability
        ability: &'static str,
    },

    /// The acting warrior has already been defeated.
    #[error("{name} has been defeated and cannot act")]
    ActorDefeated {
        /// Name of the defeated warrior
        name: &'static str,
    },
}

/// Session and configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// An archetype id or name is not present in the catalog.
    #[error("archetype not found in catalog: {0}")]
    ArchetypeNotFound(String),

    /// The catalog cannot supply two distinct teams of three.
    #[error("catalog holds {available} archetypes but a draw needs {required}")]
    CatalogTooSmall {
        /// Archetypes in the catalog
        available: usize,
        /// Archetypes needed for one draw
        required: usize,
    },

    /// A round was requested before any match was started.
    #[error("no match is in progress")]
    NoActiveMatch,

    /// The host asked to stop the session.
    #[error("session abandoned by the host")]
    SessionAbandoned,
}
