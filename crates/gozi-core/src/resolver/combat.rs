//! Commit phase: applies planned effects to the battle.
//!
//! # Processing Order
//!
//! Effects are applied in plan order. Every effect in a plan targets an
//! existing slot; an effect naming a missing slot is skipped.
//!
//! Health is not clamped and liveness is not touched. A warrior driven to zero
//! or below is settled by [`Battle::scan_defeats`] after the action.

use crate::battle::Battle;
use crate::output::Effect;

/// Applies `effects` to `battle` in order.
pub fn apply_effects(battle: &mut Battle, effects: &[Effect]) {
    for effect in effects {
        let Some(warrior) = battle.warrior_mut(effect.target()) else {
            tracing::warn!(combatant = %effect.target(), "effect names a missing slot");
            continue;
        };
        match *effect {
            Effect::Damage { amount, .. } => warrior.take_damage(amount),
            Effect::Restore { amount, .. } => warrior.restore(amount),
            Effect::Charge { amount, .. } => warrior.gain_charge(amount),
            Effect::Spend { amount, .. } => warrior.spend_charge(amount),
        }
    }
}
