//! Team builder: the shared warrior pool.
//!
//! Warriors are drawn without replacement. Once fewer than six archetypes
//! remain, the pool is refilled with the whole catalog and the leftovers of
//! the previous cycle are dropped.
//!
//! # Example
//!
//! ```
//! use gozi_core::host::SeededRandom;
//! use gozi_core::pool::WarriorPool;
//! use gozi_core::roster::Catalog;
//!
//! let catalog = Catalog::standard();
//! let mut pool = WarriorPool::new(&catalog).unwrap();
//! let mut rng = SeededRandom::new(1);
//!
//! let draw = pool.draw(&mut rng);
//! assert_eq!(draw.home.len(), 3);
//! assert_eq!(pool.remaining(), 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::entity::TEAM_SIZE;
use crate::error::GameError;
use crate::host::{shuffle, RandomSource};
use crate::roster::{ArchetypeId, Catalog};

/// Archetypes taken from the pool for one match.
pub const DRAW_SIZE: usize = TEAM_SIZE * 2;

/// The six archetypes drawn for a match, split in draw order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    /// First three drawn
    pub home: [ArchetypeId; TEAM_SIZE],
    /// Next three drawn
    pub away: [ArchetypeId; TEAM_SIZE],
}

/// Reservoir of archetype ids not yet drawn in the current cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarriorPool {
    full: Vec<ArchetypeId>,
    available: Vec<ArchetypeId>,
}

impl WarriorPool {
    /// Creates an empty pool over the catalog's archetypes.
    ///
    /// The pool fills itself on the first draw.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CatalogTooSmall`] if the catalog cannot supply six
    /// distinct archetypes.
    pub fn new(catalog: &Catalog) -> Result<Self, GameError> {
        if catalog.len() < DRAW_SIZE {
            return Err(GameError::CatalogTooSmall {
                available: catalog.len(),
                required: DRAW_SIZE,
            });
        }
        Ok(Self {
            full: catalog.ids(),
            available: Vec::new(),
        })
    }

    /// Number of archetypes left in the current cycle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.available.len()
    }

    /// Archetypes left in the current cycle.
    #[must_use]
    pub fn available(&self) -> &[ArchetypeId] {
        &self.available
    }

    /// Draws six distinct archetypes.
    ///
    /// Refills when fewer than six remain, shuffles, then takes six from the
    /// end of the pool.
    pub fn draw(&mut self, rng: &mut dyn RandomSource) -> Draw {
        if self.available.len() < DRAW_SIZE {
            tracing::debug!(
                leftover = self.available.len(),
                "refilling warrior pool"
            );
            self.available.clone_from(&self.full);
        }
        shuffle(&mut self.available, rng);

        let split = self.available.len() - DRAW_SIZE;
        let drawn: Vec<ArchetypeId> = self.available.drain(split..).rev().collect();
        let draw = Draw {
            home: [drawn[0], drawn[1], drawn[2]],
            away: [drawn[3], drawn[4], drawn[5]],
        };
        tracing::debug!(?draw, remaining = self.available.len(), "drew warriors");
        draw
    }
}
