//! Battle state: the two teams of a match and their liveness bookkeeping.
//!
//! The battle owns both teams for the lifetime of one match. After every
//! action the session calls [`Battle::scan_defeats`] and then
//! [`Battle::eliminated_side`].
//!
//! # Example
//!
//! ```
//! use gozi_core::battle::Battle;
//! use gozi_core::entity::{Controller, Side, Team};
//! use gozi_core::roster::{ArchetypeId, Catalog};
//!
//! let catalog = Catalog::standard();
//! let home = Team::summon(
//!     Side::Home,
//!     Controller::Human,
//!     [ArchetypeId::Norman, ArchetypeId::Eric, ArchetypeId::Lenna],
//!     &catalog,
//! ).unwrap();
//! let away = Team::summon(
//!     Side::Away,
//!     Controller::Automated,
//!     [ArchetypeId::Rex, ArchetypeId::Gura, ArchetypeId::Axim],
//!     &catalog,
//! ).unwrap();
//!
//! let mut battle = Battle::new(home, away);
//! assert!(battle.scan_defeats().is_empty());
//! assert_eq!(battle.eliminated_side(), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::entity::{CombatantId, Side, Team, Warrior};
use crate::output::{BattleEvent, WarriorStats};

/// Where a match stands after a round or action.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Combatants are still acting this round.
    Active,
    /// Every combatant has had its turn and both teams stand.
    RoundComplete,
    /// A team lost all three members.
    TeamEliminated {
        /// The eliminated side
        loser: Side,
    },
}

/// Both teams of the current match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Battle {
    teams: [Team; 2],
    round: u32,
}

impl Battle {
    /// Starts a battle between two summoned teams.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the teams are not on `Home` and `Away`.
    #[must_use]
    pub fn new(home: Team, away: Team) -> Self {
        debug_assert_eq!(home.side(), Side::Home);
        debug_assert_eq!(away.side(), Side::Away);
        Self {
            teams: [home, away],
            round: 0,
        }
    }

    /// The team fighting for `side`.
    #[must_use]
    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    pub(crate) fn team_mut(&mut self, side: Side) -> &mut Team {
        &mut self.teams[side.index()]
    }

    /// The warrior behind `id`, if the slot exists.
    #[must_use]
    pub fn warrior(&self, id: CombatantId) -> Option<&Warrior> {
        self.team(id.side).get(id.slot)
    }

    pub(crate) fn warrior_mut(&mut self, id: CombatantId) -> Option<&mut Warrior> {
        self.team_mut(id.side).get_mut(id.slot)
    }

    /// Rounds started so far in this match.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    pub(crate) fn begin_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    /// Marks every warrior whose health reached zero as defeated.
    ///
    /// Each warrior is reported once: its health is clamped to 0, its charge
    /// reset to 0 and a [`BattleEvent::Defeated`] returned.
    pub fn scan_defeats(&mut self) -> Vec<BattleEvent> {
        let mut events = Vec::new();
        for team in &mut self.teams {
            let side = team.side();
            for warrior in team.warriors_mut().iter_mut() {
                if warrior.settle_defeat() {
                    tracing::debug!(%side, warrior = warrior.name(), "warrior defeated");
                    events.push(BattleEvent::Defeated {
                        side,
                        warrior: warrior.name(),
                    });
                }
            }
        }
        events
    }

    /// The first eliminated side, checking `Home` before `Away`.
    #[must_use]
    pub fn eliminated_side(&self) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.team(side).is_eliminated())
    }

    /// Snapshots of all six combatants, home first.
    #[must_use]
    pub fn stats(&self) -> Vec<WarriorStats> {
        CombatantId::all()
            .into_iter()
            .filter_map(|id| self.warrior(id).map(|w| WarriorStats::capture(id, w)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Controller;
    use crate::roster::{ArchetypeId, Catalog};

    fn battle() -> Battle {
        let catalog = Catalog::standard();
        let home = Team::summon(
            Side::Home,
            Controller::Human,
            [ArchetypeId::Norman, ArchetypeId::Eric, ArchetypeId::Lenna],
            &catalog,
        )
        .unwrap();
        let away = Team::summon(
            Side::Away,
            Controller::Automated,
            [ArchetypeId::Rex, ArchetypeId::Gura, ArchetypeId::Axim],
            &catalog,
        )
        .unwrap();
        Battle::new(home, away)
    }

    mod defeat_scan_tests {
        use super::*;

        #[test]
        fn defeat_is_reported_once() {
            let mut battle = battle();
            let id = CombatantId::new(Side::Away, 1);
            let gura = battle.warrior_mut(id).unwrap();
            gura.set_charge(2);
            gura.set_health(-30);

            let events = battle.scan_defeats();
            assert_eq!(
                events,
                vec![BattleEvent::Defeated {
                    side: Side::Away,
                    warrior: "Gura",
                }]
            );
            let gura = battle.warrior(id).unwrap();
            assert_eq!(gura.health(), 0);
            assert_eq!(gura.charge(), 0);
            assert!(!gura.is_alive());

            assert!(battle.scan_defeats().is_empty());
        }

        #[test]
        fn zero_health_counts_as_defeat() {
            let mut battle = battle();
            battle
                .warrior_mut(CombatantId::new(Side::Home, 0))
                .unwrap()
                .set_health(0);
            assert_eq!(battle.scan_defeats().len(), 1);
        }
    }

    mod elimination_tests {
        use super::*;

        #[test]
        fn team_at_zero_is_eliminated_on_next_scan() {
            let mut battle = battle();
            for slot in 0..3 {
                battle
                    .warrior_mut(CombatantId::new(Side::Away, slot))
                    .unwrap()
                    .set_health(0);
            }
            assert_eq!(battle.eliminated_side(), None, "scan not yet run");

            let events = battle.scan_defeats();
            assert_eq!(events.len(), 3);
            assert_eq!(battle.eliminated_side(), Some(Side::Away));
        }

        #[test]
        fn two_defeats_do_not_eliminate() {
            let mut battle = battle();
            for slot in 0..2 {
                battle
                    .warrior_mut(CombatantId::new(Side::Home, slot))
                    .unwrap()
                    .set_health(-5);
            }
            battle.scan_defeats();
            assert_eq!(battle.eliminated_side(), None);
        }

        #[test]
        fn home_is_checked_first() {
            let mut battle = battle();
            for id in CombatantId::all() {
                battle.warrior_mut(id).unwrap().set_health(0);
            }
            battle.scan_defeats();
            assert_eq!(battle.eliminated_side(), Some(Side::Home));
        }
    }

    #[test]
    fn stats_cover_all_six_in_order() {
        let battle = battle();
        let stats = battle.stats();
        assert_eq!(stats.len(), 6);
        assert_eq!(stats[0].name, "Norman");
        assert_eq!(stats[5].name, "Axim");
        assert_eq!(stats[3].id, CombatantId::new(Side::Away, 0));
    }

    #[test]
    fn rounds_count_up() {
        let mut battle = battle();
        assert_eq!(battle.round(), 0);
        assert_eq!(battle.begin_round(), 1);
        assert_eq!(battle.begin_round(), 2);
    }
}
