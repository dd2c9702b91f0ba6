//! Basic attack planning.

use super::{living_opponent, roll, scale, Resolution};
use crate::battle::Battle;
use crate::entity::CombatantId;
use crate::error::ActionError;
use crate::host::RandomSource;
use crate::output::{BattleEvent, Effect};

/// Plans a basic attack: one roll at full power, one charge to each side.
pub(super) fn plan(
    battle: &Battle,
    actor: CombatantId,
    target_slot: usize,
    rng: &mut dyn RandomSource,
) -> Result<Resolution, ActionError> {
    let Some(attacker) = battle.warrior(actor) else {
        return Err(ActionError::InvalidTarget { slot: actor.slot });
    };
    let (target, defender) = living_opponent(battle, actor, target_slot)?;

    let damage = scale(i64::from(attacker.power()) * 100, roll(rng));

    Ok(Resolution {
        effects: vec![
            Effect::Damage {
                target,
                amount: damage,
            },
            Effect::Charge { target, amount: 1 },
            Effect::Charge {
                target: actor,
                amount: 1,
            },
        ],
        events: vec![BattleEvent::Attacked {
            actor: attacker.name(),
            ability: attacker.archetype().attack_name,
            target: defender.name(),
            damage,
        }],
    })
}
