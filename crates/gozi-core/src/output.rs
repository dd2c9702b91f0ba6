//! Outputs of action resolution.
//!
//! Resolution produces two kinds of output:
//!
//! - [`Effect`]: a planned state change. The resolver plans every effect of an
//!   action before committing any of them.
//! - [`BattleEvent`]: narration handed to the host [`Reporter`]. `Display`
//!   renders the human-readable line; `Serialize` gives a structured record.
//!
//! [`Reporter`]: crate::host::Reporter

use std::fmt;

use serde::Serialize;

use crate::entity::{CombatantId, Side, Warrior};

// =============================================================================
// Effects
// =============================================================================

/// A single state change planned by the resolver.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Effect {
    /// Subtract health (may drive it below zero).
    Damage {
        /// Combatant losing health
        target: CombatantId,
        /// Health removed
        amount: i32,
    },
    /// Add health (drain heals and shields). Not capped by base health.
    Restore {
        /// Combatant gaining health
        target: CombatantId,
        /// Health added
        amount: i32,
    },
    /// Add charge.
    Charge {
        /// Combatant gaining charge
        target: CombatantId,
        /// Charge added
        amount: u32,
    },
    /// Spend charge on a special.
    Spend {
        /// Combatant paying
        target: CombatantId,
        /// Charge removed
        amount: u32,
    },
}

impl Effect {
    /// The combatant this effect changes.
    #[must_use]
    pub const fn target(&self) -> CombatantId {
        match self {
            Self::Damage { target, .. }
            | Self::Restore { target, .. }
            | Self::Charge { target, .. }
            | Self::Spend { target, .. } => *target,
        }
    }
}

// =============================================================================
// Stat snapshots
// =============================================================================

/// Read-only snapshot of a warrior for the stats menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarriorStats {
    /// Where the warrior stands
    pub id: CombatantId,
    /// Archetype name
    pub name: &'static str,
    /// Archetype title
    pub description: &'static str,
    /// Current health (zero once defeated)
    pub health: i32,
    /// Current charge
    pub charge: u32,
    /// Base power
    pub power: u32,
    /// Base speed
    pub speed: u32,
    /// Whether the warrior can still act
    pub alive: bool,
    /// Name of the basic attack
    pub attack_name: &'static str,
    /// Name of the special
    pub special_name: &'static str,
    /// What the special does
    pub special_description: &'static str,
    /// Charge the special costs
    pub cost: u32,
}

impl WarriorStats {
    /// Captures the current state of `warrior`.
    #[must_use]
    pub fn capture(id: CombatantId, warrior: &Warrior) -> Self {
        let archetype = warrior.archetype();
        Self {
            id,
            name: archetype.name,
            description: archetype.description,
            health: warrior.health(),
            charge: warrior.charge(),
            power: archetype.power,
            speed: archetype.speed,
            alive: warrior.is_alive(),
            attack_name: archetype.attack_name,
            special_name: archetype.special_name,
            special_description: archetype.special_description,
            cost: archetype.cost,
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Narration of something that happened in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BattleEvent {
    /// Both teams were summoned.
    MatchStarted {
        /// 1-based match number within the session
        number: u32,
        /// Home names in slot order
        home: [&'static str; 3],
        /// Away names in slot order
        away: [&'static str; 3],
    },
    /// A new round began.
    RoundStarted {
        /// 1-based round number
        round: u32,
    },
    /// A warrior's turn began.
    TurnStarted {
        /// Warrior about to act
        actor: &'static str,
    },
    /// An attack or special hit an opponent.
    Attacked {
        /// Attacking warrior
        actor: &'static str,
        /// Attack or special name
        ability: &'static str,
        /// Warrior hit
        target: &'static str,
        /// Health removed
        damage: i32,
    },
    /// A drain special healed its user.
    Drained {
        /// Warrior healed
        actor: &'static str,
        /// Health restored
        amount: i32,
    },
    /// A utility special shielded an ally.
    Shielded {
        /// Warrior using the special
        actor: &'static str,
        /// Special name
        ability: &'static str,
        /// Ally shielded
        target: &'static str,
        /// Health added
        amount: i32,
    },
    /// A warrior fell. Reported once per warrior.
    Defeated {
        /// Team the warrior fought for
        side: Side,
        /// Fallen warrior
        warrior: &'static str,
    },
    /// A menu answer was rejected and the menu will be shown again.
    Rejected {
        /// Why the answer was refused
        reason: String,
    },
    /// Health and charge of every combatant.
    StatsOverview {
        /// Home slots first, then away
        warriors: Vec<WarriorStats>,
    },
    /// Full stat block of one combatant.
    StatsDetail {
        /// The inspected warrior
        warrior: WarriorStats,
    },
    /// A team was eliminated.
    MatchEnded {
        /// Side of the surviving team
        winner: Side,
        /// Points awarded: one per surviving member
        points: u32,
    },
    /// Running totals after a match.
    ScoresUpdated {
        /// Home summoner's score
        home: u32,
        /// Away summoner's score
        away: u32,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchStarted { number, home, away } => {
                let [h0, h1, h2] = home;
                let [a0, a1, a2] = away;
                writeln!(f, "Match {number}!")?;
                writeln!(f, "Home summoned {h0}, {h1}, and {h2}!")?;
                write!(f, "Away summoned {a0}, {a1}, and {a2}!")
            }
            Self::RoundStarted { round } => write!(f, "Round {round}!"),
            Self::TurnStarted { actor } => write!(f, "It is {actor}'s turn!"),
            Self::Attacked {
                actor,
                ability,
                target,
                damage,
            } => write!(
                f,
                "{actor} used {ability} on {target} and dealt {damage} damage!"
            ),
            Self::Drained { actor, amount } => write!(f, "{actor} healed {amount} health!"),
            Self::Shielded {
                actor,
                ability,
                target,
                amount,
            } => write!(
                f,
                "{actor} used {ability} on {target} and shielded {amount} health!"
            ),
            Self::Defeated { warrior, .. } => write!(f, "{warrior} has been defeated!"),
            Self::Rejected { reason } => f.write_str(reason),
            Self::StatsOverview { warriors } => {
                for (i, w) in warriors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                        writeln!(f)?;
                    }
                    write!(f, "{}\nHealth: {}\nCharge: {}", w.name, w.health, w.charge)?;
                }
                Ok(())
            }
            Self::StatsDetail { warrior: w } => {
                writeln!(f, "{}\n{}\n", w.name, w.description)?;
                writeln!(f, "Health: {}\nCharge: {}", w.health, w.charge)?;
                writeln!(f, "Power: {}\nSpeed: {}\n", w.power, w.speed)?;
                writeln!(f, "Attack: {}", w.attack_name)?;
                writeln!(f, "Special: {}", w.special_name)?;
                writeln!(f, "Description: {}", w.special_description)?;
                write!(f, "Cost: {}", w.cost)
            }
            Self::MatchEnded { winner, points } => {
                write!(f, "{winner} wins and gets {points} points!")
            }
            Self::ScoresUpdated { home, away } => write!(f, "Home: {home}\nAway: {away}"),
        }
    }
}
