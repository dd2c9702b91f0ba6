//! Action resolver.
//!
//! Resolving an action is split in two phases:
//!
//! 1. **Plan**: validate the action against the current battle, make every
//!    damage roll, and produce a list of [`Effect`]s plus the narration.
//!    Nothing is mutated, so a rejected action leaves no trace.
//! 2. **Commit**: apply the planned effects in order (see [`apply_effects`]).
//!
//! # Invariants
//!
//! - All effects of an action commit, or none do
//! - Health is never clamped here; defeats are settled by the battle's scan
//! - A special is only planned when the actor holds at least its cost in charge
//!
//! # Example
//!
//! ```
//! use gozi_core::battle::Battle;
//! use gozi_core::entity::{CombatantId, Controller, Side, Team};
//! use gozi_core::host::SeededRandom;
//! use gozi_core::resolver::{resolve, Action};
//! use gozi_core::roster::{ArchetypeId, Catalog};
//!
//! let catalog = Catalog::standard();
//! let home = Team::summon(Side::Home, Controller::Human,
//!     [ArchetypeId::Norman, ArchetypeId::Eric, ArchetypeId::Lenna], &catalog).unwrap();
//! let away = Team::summon(Side::Away, Controller::Automated,
//!     [ArchetypeId::Rex, ArchetypeId::Gura, ArchetypeId::Axim], &catalog).unwrap();
//! let mut battle = Battle::new(home, away);
//! let mut rng = SeededRandom::new(1);
//!
//! let norman = CombatantId::new(Side::Home, 0);
//! let resolution = resolve(&mut battle, norman, Action::Attack { target: 1 }, &mut rng).unwrap();
//! assert_eq!(resolution.events.len(), 1);
//! assert_eq!(battle.warrior(norman).unwrap().charge(), 1);
//! ```

mod attack;
mod combat;
mod special;

pub use combat::apply_effects;

use serde::{Deserialize, Serialize};

use crate::battle::Battle;
use crate::entity::{CombatantId, Warrior};
use crate::error::ActionError;
use crate::host::RandomSource;
use crate::output::{BattleEvent, Effect};

/// Lowest damage roll, in percent.
pub const ROLL_MIN: u32 = 80;
/// Highest damage roll, in percent.
pub const ROLL_MAX: u32 = 120;

/// An action a warrior can take on its turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Basic attack on an opposing slot. Always available.
    Attack {
        /// Opposing slot (0, 1 or 2)
        target: usize,
    },
    /// The warrior's special. Splash specials ignore the target.
    Special {
        /// Opposing slot for targeted specials
        target: Option<usize>,
    },
}

/// The planned effects of one action and their narration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Resolution {
    /// State changes, in commit order
    pub effects: Vec<Effect>,
    /// Narration for the host
    pub events: Vec<BattleEvent>,
}

/// Validates, plans and commits `action` for `actor`.
///
/// # Errors
///
/// Returns an [`ActionError`] and leaves the battle untouched if the actor is
/// defeated, the target is not a living opponent, or the special is not
/// charged.
pub fn resolve(
    battle: &mut Battle,
    actor: CombatantId,
    action: Action,
    rng: &mut dyn RandomSource,
) -> Result<Resolution, ActionError> {
    let resolution = plan(battle, actor, action, rng)?;
    apply_effects(battle, &resolution.effects);
    Ok(resolution)
}

/// Validates `action` and plans its effects without mutating the battle.
///
/// Rolls are drawn from `rng` only after validation passes.
///
/// # Errors
///
/// See [`resolve`].
pub fn plan(
    battle: &Battle,
    actor: CombatantId,
    action: Action,
    rng: &mut dyn RandomSource,
) -> Result<Resolution, ActionError> {
    let warrior = battle
        .warrior(actor)
        .ok_or(ActionError::InvalidTarget { slot: actor.slot })?;
    if !warrior.is_alive() {
        return Err(ActionError::ActorDefeated {
            name: warrior.name(),
        });
    }

    match action {
        Action::Attack { target } => attack::plan(battle, actor, target, rng),
        Action::Special { target } => special::plan(battle, actor, target, rng),
    }
}

/// Draws one damage roll in percent.
pub(crate) fn roll(rng: &mut dyn RandomSource) -> u32 {
    let r = rng.random_int(ROLL_MIN, ROLL_MAX);
    tracing::trace!(roll = r, "damage roll");
    r
}

/// Applies a roll to a percent-scaled base value, truncating toward zero.
///
/// `base_pct` is the base value multiplied by a percentage (so `power * 300`
/// for a triple-power hit).
pub(crate) fn scale(base_pct: i64, roll: u32) -> i32 {
    let value = base_pct * i64::from(roll) / 10_000;
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Looks up a living opponent of `actor` in `slot`.
pub(crate) fn living_opponent(
    battle: &Battle,
    actor: CombatantId,
    slot: usize,
) -> Result<(CombatantId, &Warrior), ActionError> {
    let id = CombatantId::new(actor.side.opponent(), slot);
    match battle.warrior(id) {
        Some(w) if w.is_alive() => Ok((id, w)),
        _ => Err(ActionError::InvalidTarget { slot }),
    }
}
