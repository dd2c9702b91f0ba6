//! Special ability planning.
//!
//! A special is interpreted from the archetype's [`SpecialEffect`]; no
//! archetype has hand-written code here.

use super::{living_opponent, roll, scale, Resolution};
use crate::battle::Battle;
use crate::entity::{CombatantId, Warrior, TEAM_SIZE};
use crate::error::ActionError;
use crate::host::RandomSource;
use crate::output::{BattleEvent, Effect};
use crate::roster::{PowerSource, SpecialEffect};

/// Plans the actor's special. The charge cost is the first effect.
pub(super) fn plan(
    battle: &Battle,
    actor: CombatantId,
    target: Option<usize>,
    rng: &mut dyn RandomSource,
) -> Result<Resolution, ActionError> {
    let Some(caster) = battle.warrior(actor) else {
        return Err(ActionError::InvalidTarget { slot: actor.slot });
    };
    let archetype = caster.archetype();
    if caster.charge() < archetype.cost {
        return Err(ActionError::InsufficientCharge {
            name: caster.name(),
            charge: caster.charge(),
            cost: archetype.cost,
        });
    }

    let mut resolution = Resolution::default();
    resolution.effects.push(Effect::Spend {
        target: actor,
        amount: archetype.cost,
    });

    match archetype.special {
        SpecialEffect::SingleTarget {
            multiplier_pct,
            health_scaling_pct,
            drain,
        } => {
            let slot = target.ok_or(ActionError::MissingTarget {
                ability: archetype.special_name,
            })?;
            let (target, defender) = living_opponent(battle, actor, slot)?;
            let base = i64::from(caster.power()) * i64::from(multiplier_pct)
                + i64::from(defender.health()) * i64::from(health_scaling_pct);
            let damage = scale(base, roll(rng));
            strike(&mut resolution, caster, target, defender, damage);

            if drain {
                let heal = if defender.health() - damage < 0 {
                    defender.health() / 2
                } else {
                    damage / 2
                };
                resolution.effects.push(Effect::Restore {
                    target: actor,
                    amount: heal,
                });
                resolution.events.push(BattleEvent::Drained {
                    actor: caster.name(),
                    amount: heal,
                });
            }
        }
        SpecialEffect::Splash {
            multiplier_pct,
            power_source: PowerSource::Caster,
        } => {
            let rolls: [u32; TEAM_SIZE] = std::array::from_fn(|_| roll(rng));
            let base = i64::from(caster.power()) * i64::from(multiplier_pct);
            for (target, defender) in living_opponents(battle, actor) {
                let damage = scale(base, rolls[target.slot]);
                strike(&mut resolution, caster, target, defender, damage);
            }
        }
        SpecialEffect::Splash {
            multiplier_pct,
            power_source: PowerSource::Target,
        } => {
            for (target, defender) in living_opponents(battle, actor) {
                let base = i64::from(defender.power()) * i64::from(multiplier_pct);
                let damage = scale(base, roll(rng));
                strike(&mut resolution, caster, target, defender, damage);
            }
        }
        SpecialEffect::SingleTargetWithTeamUtility {
            multiplier_pct,
            shield_pct,
        } => {
            let slot = target.ok_or(ActionError::MissingTarget {
                ability: archetype.special_name,
            })?;
            let (target, defender) = living_opponent(battle, actor, slot)?;
            let base = i64::from(caster.power()) * i64::from(multiplier_pct);
            let damage = scale(base, roll(rng));
            strike(&mut resolution, caster, target, defender, damage);

            let rolls: [u32; TEAM_SIZE] = std::array::from_fn(|_| roll(rng));
            let shield_base = i64::from(caster.power()) * i64::from(shield_pct);
            let team = battle.team(actor.side);
            for slot in team.living_slots() {
                let Some(ally) = team.get(slot) else {
                    continue;
                };
                let ally_id = CombatantId::new(actor.side, slot);
                let amount = scale(shield_base, rolls[slot]);
                resolution.effects.push(Effect::Restore {
                    target: ally_id,
                    amount,
                });
                resolution.effects.push(Effect::Charge {
                    target: ally_id,
                    amount: 1,
                });
                resolution.events.push(BattleEvent::Shielded {
                    actor: caster.name(),
                    ability: archetype.special_name,
                    target: ally.name(),
                    amount,
                });
            }
        }
    }

    tracing::debug!(
        actor = %actor,
        special = archetype.special_name,
        effects = resolution.effects.len(),
        "special planned"
    );
    Ok(resolution)
}

/// Living members of the actor's opposing team, in slot order.
fn living_opponents(battle: &Battle, actor: CombatantId) -> Vec<(CombatantId, &Warrior)> {
    let side = actor.side.opponent();
    let team = battle.team(side);
    team.living_slots()
        .into_iter()
        .filter_map(|slot| team.get(slot).map(|w| (CombatantId::new(side, slot), w)))
        .collect()
}

/// Damages `target` and grants it one charge.
fn strike(
    resolution: &mut Resolution,
    caster: &Warrior,
    target: CombatantId,
    defender: &Warrior,
    damage: i32,
) {
    resolution.effects.push(Effect::Damage {
        target,
        amount: damage,
    });
    resolution.effects.push(Effect::Charge { target, amount: 1 });
    resolution.events.push(BattleEvent::Attacked {
        actor: caster.name(),
        ability: caster.archetype().special_name,
        target: defender.name(),
        damage,
    });
}
