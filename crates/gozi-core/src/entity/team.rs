//! Teams of three and the summoners that field them.

use serde::{Deserialize, Serialize};

use super::{Controller, Side, Warrior};
use crate::error::GameError;
use crate::roster::{ArchetypeId, Catalog};

/// Warriors per team.
pub const TEAM_SIZE: usize = 3;

/// Three warriors fighting for one side.
///
/// Defeated warriors keep their slot, so slot indices stay stable for the
/// whole match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    side: Side,
    controller: Controller,
    warriors: [Warrior; TEAM_SIZE],
}

impl Team {
    /// Builds a team from three drawn archetype ids.
    ///
    /// Every warrior shares the summoner's controller tag.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ArchetypeNotFound`] if an id is missing from the catalog.
    pub fn summon(
        side: Side,
        controller: Controller,
        ids: [ArchetypeId; TEAM_SIZE],
        catalog: &Catalog,
    ) -> Result<Self, GameError> {
        let [a, b, c] = ids;
        let warriors = [
            Warrior::new(*catalog.get(a)?, controller),
            Warrior::new(*catalog.get(b)?, controller),
            Warrior::new(*catalog.get(c)?, controller),
        ];
        Ok(Self {
            side,
            controller,
            warriors,
        })
    }

    /// The side this team fights for.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// The controller shared by every warrior on the team.
    #[must_use]
    pub fn controller(&self) -> Controller {
        self.controller
    }

    /// The warrior in `slot`, if the slot exists.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Warrior> {
        self.warriors.get(slot)
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut Warrior> {
        self.warriors.get_mut(slot)
    }

    /// All three warriors, defeated ones included.
    #[must_use]
    pub fn warriors(&self) -> &[Warrior; TEAM_SIZE] {
        &self.warriors
    }

    pub(crate) fn warriors_mut(&mut self) -> &mut [Warrior; TEAM_SIZE] {
        &mut self.warriors
    }

    /// Returns true if `slot` holds a living warrior.
    #[must_use]
    pub fn is_living(&self, slot: usize) -> bool {
        self.get(slot).is_some_and(Warrior::is_alive)
    }

    /// Slots of living warriors in slot order.
    #[must_use]
    pub fn living_slots(&self) -> Vec<usize> {
        (0..TEAM_SIZE)
            .filter(|&slot| self.is_living(slot))
            .collect()
    }

    /// Number of living warriors.
    #[must_use]
    pub fn survivors(&self) -> u32 {
        let living = self.warriors.iter().filter(|w| w.is_alive()).count();
        u32::try_from(living).unwrap_or(u32::MAX)
    }

    /// Returns true once all three warriors have been defeated.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.warriors.iter().all(|w| !w.is_alive())
    }

    /// Warrior names in slot order.
    #[must_use]
    pub fn names(&self) -> [&'static str; TEAM_SIZE] {
        [
            self.warriors[0].name(),
            self.warriors[1].name(),
            self.warriors[2].name(),
        ]
    }

    /// Archetype ids in slot order.
    #[must_use]
    pub fn archetype_ids(&self) -> [ArchetypeId; TEAM_SIZE] {
        [
            self.warriors[0].archetype().id,
            self.warriors[1].archetype().id,
            self.warriors[2].archetype().id,
        ]
    }
}

/// A player or the computer: a controller tag and a running score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summoner {
    /// The side this summoner plays
    pub side: Side,
    /// Controller tag given to every warrior this summoner fields
    pub controller: Controller,
    /// Points accumulated over every match of the session
    pub score: u32,
}

impl Summoner {
    /// Creates a summoner with a zero score.
    #[must_use]
    pub fn new(side: Side, controller: Controller) -> Self {
        Self {
            side,
            controller,
            score: 0,
        }
    }
}
