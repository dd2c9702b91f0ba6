//! Decision policy for automated warriors.
//!
//! The policy is greedy and stateless:
//!
//! 1. Target the living opponent with the lowest health (ties go to the
//!    higher power, then the lower slot).
//! 2. With enough charge, use the special, unless it is a plain single-target
//!    hit and the target would already fall to about one basic attack.
//! 3. Otherwise attack.

use crate::battle::Battle;
use crate::entity::{CombatantId, Team};
use crate::resolver::Action;
use crate::roster::EffectKind;

/// Picks the opponent slot an automated warrior should hit.
///
/// Returns `None` if every member of `opponents` has been defeated.
#[must_use]
pub fn choose_target(opponents: &Team) -> Option<usize> {
    opponents
        .living_slots()
        .into_iter()
        .filter_map(|slot| opponents.get(slot).map(|w| (slot, w)))
        .min_by(|(a_slot, a), (b_slot, b)| {
            a.health()
                .cmp(&b.health())
                .then(b.power().cmp(&a.power()))
                .then(a_slot.cmp(b_slot))
        })
        .map(|(slot, _)| slot)
}

/// Chooses the action for an automated warrior.
///
/// Returns `None` if the actor cannot act or has no living opponent.
#[must_use]
pub fn decide(battle: &Battle, actor: CombatantId) -> Option<Action> {
    let warrior = battle.warrior(actor).filter(|w| w.is_alive())?;
    let opponents = battle.team(actor.side.opponent());
    let target = choose_target(opponents)?;
    let archetype = warrior.archetype();

    let action = if warrior.charge() < archetype.cost {
        Action::Attack { target }
    } else if archetype.special.kind() == EffectKind::SingleTarget {
        let target_health = opponents.get(target).map_or(0, |w| i64::from(w.health()));
        // Save the charge when a basic attack at a low roll finishes the job.
        if 5 * target_health <= 4 * i64::from(warrior.power()) {
            Action::Attack { target }
        } else {
            Action::Special {
                target: Some(target),
            }
        }
    } else if archetype.special.needs_target() {
        Action::Special {
            target: Some(target),
        }
    } else {
        Action::Special { target: None }
    };

    tracing::debug!(actor = %actor, name = warrior.name(), ?action, "policy decision");
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Side;
    use crate::roster::ArchetypeId;
    use crate::tests::battle_of;

    mod target_tests {
        use super::*;

        #[test]
        fn lowest_health_is_preferred() {
            let mut battle = battle_of(
                [ArchetypeId::Norman, ArchetypeId::Eric, ArchetypeId::Lenna],
                [ArchetypeId::Rex, ArchetypeId::Gura, ArchetypeId::Axim],
            );
            battle
                .warrior_mut(CombatantId::new(Side::Away, 2))
                .unwrap()
                .set_health(300);
            assert_eq!(choose_target(battle.team(Side::Away)), Some(2));
        }

        #[test]
        fn health_tie_goes_to_higher_power() {
            // Maria (200 power) and Nimbus (150 power) both start at 600.
            let battle = battle_of(
                [ArchetypeId::Norman, ArchetypeId::Eric, ArchetypeId::Lenna],
                [ArchetypeId::Nimbus, ArchetypeId::Maria, ArchetypeId::Gura],
            );
            assert_eq!(choose_target(battle.team(Side::Away)), Some(1));
        }

        #[test]
        fn full_tie_goes_to_lower_slot() {
            let mut battle = battle_of(
                [ArchetypeId::Norman, ArchetypeId::Eric, ArchetypeId::Lenna],
                [ArchetypeId::Rex, ArchetypeId::Ninji, ArchetypeId::Axim],
            );
            // Rex and Ninji both at 100 power.
            battle
                .warrior_mut(CombatantId::new(Side::Away, 0))
                .unwrap()
                .set_health(400);
            battle
                .warrior_mut(CombatantId::new(Side::Away, 1))
                .unwrap()
                .set_health(400);
            assert_eq!(choose_target(battle.team(Side::Away)), Some(0));
        }

        #[test]
        fn defeated_members_are_never_targeted() {
            let mut battle = battle_of(
                [ArchetypeId::Norman, ArchetypeId::Eric, ArchetypeId::Lenna],
                [ArchetypeId::Raijin, ArchetypeId::Gura, ArchetypeId::Axim],
            );
            battle
                .warrior_mut(CombatantId::new(Side::Away, 0))
                .unwrap()
                .set_health(0);
            battle.scan_defeats();
            // Raijin now sits at 0 health but is dead.
            assert_eq!(choose_target(battle.team(Side::Away)), Some(2));
        }

        #[test]
        fn eliminated_team_has_no_target() {
            let mut battle = battle_of(
                [ArchetypeId::Norman, ArchetypeId::Eric, ArchetypeId::Lenna],
                [ArchetypeId::Rex, ArchetypeId::Gura, ArchetypeId::Axim],
            );
            for slot in 0..3 {
                battle
                    .warrior_mut(CombatantId::new(Side::Away, slot))
                    .unwrap()
                    .set_health(0);
            }
            battle.scan_defeats();
            assert_eq!(choose_target(battle.team(Side::Away)), None);
        }
    }

    mod decide_tests {
        use super::*;

        fn norman_vs_rex() -> (Battle, CombatantId) {
            let battle = battle_of(
                [ArchetypeId::Norman, ArchetypeId::Eric, ArchetypeId::Lenna],
                [ArchetypeId::Rex, ArchetypeId::Gura, ArchetypeId::Axim],
            );
            (battle, CombatantId::new(Side::Home, 0))
        }

        #[test]
        fn uncharged_warrior_attacks() {
            let (battle, norman) = norman_vs_rex();
            // Axim has the lowest health of the away team at 1300.
            assert_eq!(decide(&battle, norman), Some(Action::Attack { target: 2 }));
        }

        #[test]
        fn charged_warrior_uses_special() {
            let (mut battle, norman) = norman_vs_rex();
            battle.warrior_mut(norman).unwrap().set_charge(3);
            assert_eq!(
                decide(&battle, norman),
                Some(Action::Special { target: Some(2) })
            );
        }

        #[test]
        fn special_is_saved_for_a_weak_target() {
            let (mut battle, norman) = norman_vs_rex();
            battle.warrior_mut(norman).unwrap().set_charge(3);
            // 5 * 80 <= 4 * 100
            battle
                .warrior_mut(CombatantId::new(Side::Away, 1))
                .unwrap()
                .set_health(80);
            assert_eq!(decide(&battle, norman), Some(Action::Attack { target: 1 }));

            battle
                .warrior_mut(CombatantId::new(Side::Away, 1))
                .unwrap()
                .set_health(81);
            assert_eq!(
                decide(&battle, norman),
                Some(Action::Special { target: Some(1) })
            );
        }

        #[test]
        fn splash_is_never_held() {
            let mut battle = battle_of(
                [ArchetypeId::Nimbus, ArchetypeId::Eric, ArchetypeId::Lenna],
                [ArchetypeId::Rex, ArchetypeId::Gura, ArchetypeId::Axim],
            );
            let nimbus = CombatantId::new(Side::Home, 0);
            battle.warrior_mut(nimbus).unwrap().set_charge(2);
            battle
                .warrior_mut(CombatantId::new(Side::Away, 0))
                .unwrap()
                .set_health(1);
            assert_eq!(
                decide(&battle, nimbus),
                Some(Action::Special { target: None })
            );
        }

        #[test]
        fn utility_special_is_never_held() {
            let mut battle = battle_of(
                [ArchetypeId::Norman, ArchetypeId::Eric, ArchetypeId::Lenna],
                [ArchetypeId::Rex, ArchetypeId::Gura, ArchetypeId::Axim],
            );
            let rex = CombatantId::new(Side::Away, 0);
            battle.warrior_mut(rex).unwrap().set_charge(4);
            battle
                .warrior_mut(CombatantId::new(Side::Home, 2))
                .unwrap()
                .set_health(10);
            assert_eq!(
                decide(&battle, rex),
                Some(Action::Special { target: Some(2) })
            );
        }

        #[test]
        fn defeated_actor_has_no_decision() {
            let (mut battle, norman) = norman_vs_rex();
            battle.warrior_mut(norman).unwrap().set_health(0);
            battle.scan_defeats();
            assert_eq!(decide(&battle, norman), None);
        }
    }
}
