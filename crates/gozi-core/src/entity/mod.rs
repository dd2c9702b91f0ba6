//! Combatant types: sides, identifiers, controllers and warriors.
//!
//! - [`Side`]: which summoner a combatant fights for
//! - [`CombatantId`]: a side plus a slot index (0, 1 or 2)
//! - [`Controller`]: who picks actions for a warrior
//! - [`Warrior`]: the mutable combat instance built from an archetype
//!
//! Teams and summoners live in [`team`].
//!
//! # Example
//!
//! ```
//! use gozi_core::entity::{Controller, Warrior};
//! use gozi_core::roster::{ArchetypeId, Catalog};
//!
//! let catalog = Catalog::standard();
//! let archetype = *catalog.get(ArchetypeId::Gura).unwrap();
//! let gura = Warrior::new(archetype, Controller::Automated);
//!
//! assert_eq!(gura.health(), 1500);
//! assert_eq!(gura.charge(), 0);
//! assert!(gura.is_alive());
//! ```

pub mod team;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::roster::Archetype;

pub use team::{Summoner, Team, TEAM_SIZE};

/// One of the two summoners in a match.
///
/// `Home` is summoner A: it receives the first three warriors of a draw and
/// its team is checked first for elimination.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Summoner A, the first to field a team
    Home,
    /// Summoner B
    Away,
}

impl Side {
    /// Both sides in elimination-check order.
    pub const ALL: [Side; 2] = [Side::Home, Side::Away];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }

    /// Array index of this side.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Away => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Away => write!(f, "Away"),
        }
    }
}

/// Identifies one of the six combatants in a battle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CombatantId {
    /// The team the combatant fights for
    pub side: Side,
    /// Position within the team, stable for the whole match
    pub slot: usize,
}

impl CombatantId {
    /// Creates a combatant id.
    #[must_use]
    pub const fn new(side: Side, slot: usize) -> Self {
        Self { side, slot }
    }

    /// All six combatants, home slots first.
    #[must_use]
    pub fn all() -> [CombatantId; 6] {
        [
            Self::new(Side::Home, 0),
            Self::new(Side::Home, 1),
            Self::new(Side::Home, 2),
            Self::new(Side::Away, 0),
            Self::new(Side::Away, 1),
            Self::new(Side::Away, 2),
        ]
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.side, self.slot)
    }
}

/// Who decides a warrior's actions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Actions come from the host chooser.
    Human,
    /// Actions come from the decision policy.
    Automated,
}

/// A warrior taking part in a match.
///
/// Health is signed: it may drop below zero after a hit and stays there until
/// the battle's defeat scan clamps it and clears the alive flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warrior {
    archetype: Archetype,
    controller: Controller,
    health: i32,
    charge: u32,
    alive: bool,
}

impl Warrior {
    /// Builds a fresh, uncharged warrior from its archetype.
    #[must_use]
    pub fn new(archetype: Archetype, controller: Controller) -> Self {
        Self {
            archetype,
            controller,
            health: archetype.health,
            charge: 0,
            alive: true,
        }
    }

    /// The archetype this warrior was built from.
    #[must_use]
    pub fn archetype(&self) -> &Archetype {
        &self.archetype
    }

    /// Display name taken from the archetype.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.archetype.name
    }

    /// Who picks this warrior's actions.
    #[must_use]
    pub fn controller(&self) -> Controller {
        self.controller
    }

    /// Current health. Negative until the defeat scan clamps it.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Charge banked towards the special ability.
    #[must_use]
    pub fn charge(&self) -> u32 {
        self.charge
    }

    /// Base damage of the standard attack.
    #[must_use]
    pub fn power(&self) -> u32 {
        self.archetype.power
    }

    /// Turn-order weight.
    #[must_use]
    pub fn speed(&self) -> u32 {
        self.archetype.speed
    }

    /// Returns true until the defeat scan has recorded this warrior's defeat.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns true if the warrior holds enough charge for its special.
    #[must_use]
    pub fn special_ready(&self) -> bool {
        self.charge >= self.archetype.cost
    }

    pub(crate) fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub(crate) fn restore(&mut self, amount: i32) {
        self.health += amount;
    }

    pub(crate) fn gain_charge(&mut self, amount: u32) {
        self.charge += amount;
    }

    pub(crate) fn spend_charge(&mut self, amount: u32) {
        debug_assert!(self.charge >= amount, "charge spent below zero");
        self.charge = self.charge.saturating_sub(amount);
    }

    /// Records the defeat if health has reached zero.
    ///
    /// Returns true only on the call that performs the transition.
    pub(crate) fn settle_defeat(&mut self) -> bool {
        if self.alive && self.health <= 0 {
            self.health = 0;
            self.charge = 0;
            self.alive = false;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub(crate) fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    #[cfg(test)]
    pub(crate) fn set_charge(&mut self, charge: u32) {
        self.charge = charge;
    }
}
