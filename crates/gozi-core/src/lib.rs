//! # Gozi Core
//!
//! Turn-based battle engine for GOZI.
//!
//! Two summoners each field three warriors drawn from a shared pool. Every
//! round the six combatants act in speed order; a warrior either attacks or
//! spends charge on its special. The first team to lose all three members
//! loses the match, and the winner scores one point per survivor.
//!
//! ## Architecture
//!
//! - **Roster**: static catalog of archetypes and their special shapes
//! - **Pool**: draws six distinct archetypes per match
//! - **Schedule**: speed-ordered turn order with random tie breaks
//! - **Resolver**: plans an action's effects, then commits them atomically
//! - **Policy**: greedy decisions for automated warriors
//! - **Session**: the match state machine, human menus and scores
//!
//! The engine performs no I/O. Randomness, menu choices and narration go
//! through the capabilities in [`host`].
//!
//! ## Usage
//!
//! ```
//! use gozi_core::host::HeadlessHost;
//! use gozi_core::roster::Catalog;
//! use gozi_core::session::{Session, SessionConfig};
//!
//! let mut session = Session::new(
//!     SessionConfig::automated(),
//!     Catalog::standard(),
//!     HeadlessHost::new(42),
//! ).unwrap();
//! session.run(3).unwrap();
//! assert_eq!(session.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod battle;
pub mod entity;
pub mod error;
pub mod host;
pub mod output;
pub mod policy;
pub mod pool;
pub mod resolver;
pub mod roster;
pub mod schedule;
pub mod session;

pub use battle::{Battle, MatchState};
pub use error::{ActionError, GameError};
pub use host::{Choice, ChoiceRequest, Chooser, Host, RandomSource, Reporter};
pub use output::BattleEvent;
pub use roster::{ArchetypeId, Catalog};
pub use session::{MatchOutcome, Session, SessionConfig};

#[cfg(test)]
mod tests;
