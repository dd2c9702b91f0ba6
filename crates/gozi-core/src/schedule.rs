//! Turn scheduler.
//!
//! Each round every combatant is ordered by descending speed. The list is
//! shuffled before the stable sort, so warriors of equal speed act in a random
//! order instead of their slot order.

use std::cmp::Reverse;

use crate::battle::Battle;
use crate::entity::{CombatantId, Warrior};
use crate::host::{shuffle, RandomSource};

/// Computes the acting order for one round.
///
/// All six combatants are returned, defeated ones included; the round loop
/// skips them when their turn comes up.
pub fn order_turn(battle: &Battle, rng: &mut dyn RandomSource) -> Vec<CombatantId> {
    let mut order = CombatantId::all().to_vec();
    shuffle(&mut order, rng);
    order.sort_by_key(|&id| Reverse(battle.warrior(id).map_or(0, Warrior::speed)));
    tracing::trace!(?order, "turn order");
    order
}
