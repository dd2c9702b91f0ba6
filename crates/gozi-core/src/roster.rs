//! Roster catalog: the static registry of warrior archetypes.
//!
//! Every warrior in a match is built from an [`Archetype`]. Archetypes differ
//! only in data; the shape of their special ability is described by a
//! [`SpecialEffect`] variant that the resolver interprets generically.
//!
//! # Example
//!
//! ```
//! use gozi_core::roster::{ArchetypeId, Catalog, EffectKind};
//!
//! let catalog = Catalog::standard();
//! let norman = catalog.get(ArchetypeId::Norman).unwrap();
//! assert_eq!(norman.power, 100);
//! assert_eq!(norman.special.kind(), EffectKind::SingleTarget);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a warrior archetype.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArchetypeId {
    /// Skilled swordsman
    Norman,
    /// Radiant hero with a draining blade
    Eric,
    /// Lady of the cosmos
    Lenna,
    /// Lord of the stars
    FiveStar,
    /// Master assassin
    Assa,
    /// Psychic who turns opponents on themselves
    Kasime,
    /// Blazing warrior
    Pyro,
    /// Hammer knight
    Gura,
    /// Warrior of the storm
    Nimbus,
    /// Fire mage
    Maria,
    /// Lightning warrior
    Raijin,
    /// Shadow knight
    Axim,
    /// King of the realm, shields his team
    Rex,
    /// Sneaky ninja
    Ninji,
}

impl ArchetypeId {
    /// All archetype ids in catalog order.
    pub const ALL: [ArchetypeId; 14] = [
        Self::Norman,
        Self::Eric,
        Self::Lenna,
        Self::FiveStar,
        Self::Assa,
        Self::Kasime,
        Self::Pyro,
        Self::Gura,
        Self::Nimbus,
        Self::Maria,
        Self::Raijin,
        Self::Axim,
        Self::Rex,
        Self::Ninji,
    ];

    /// Returns the display name of the archetype.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Norman => "Norman",
            Self::Eric => "Eric",
            Self::Lenna => "Lenna",
            Self::FiveStar => "FiveStar",
            Self::Assa => "Assa",
            Self::Kasime => "Kasime",
            Self::Pyro => "Pyro",
            Self::Gura => "Gura",
            Self::Nimbus => "Nimbus",
            Self::Maria => "Maria",
            Self::Raijin => "Raijin",
            Self::Axim => "Axim",
            Self::Rex => "Rex",
            Self::Ninji => "Ninji",
        }
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Special effects
// =============================================================================

/// Whose power a splash special scales from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerSource {
    /// Every opponent is hit with the caster's power.
    Caster,
    /// Every opponent is hit with its own power.
    Target,
}

/// The shape of a special ability, with its numeric parameters.
///
/// All multipliers are percentages, so `300` means three times the base value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialEffect {
    /// Hits one opponent.
    SingleTarget {
        /// Multiplier applied to the caster's power
        multiplier_pct: u32,
        /// Share of the target's current health added to the power
        health_scaling_pct: u32,
        /// Heal the caster by half of the damage dealt
        drain: bool,
    },
    /// Hits every living opponent with an independent roll.
    Splash {
        /// Multiplier applied to the power
        multiplier_pct: u32,
        /// Which power the damage scales from
        power_source: PowerSource,
    },
    /// Hits one opponent, then shields every living ally.
    SingleTargetWithTeamUtility {
        /// Multiplier applied to the caster's power for the hit
        multiplier_pct: u32,
        /// Share of the caster's power granted as shield to each ally
        shield_pct: u32,
    },
}

/// Tag-only view of [`SpecialEffect`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// [`SpecialEffect::SingleTarget`]
    SingleTarget,
    /// [`SpecialEffect::Splash`]
    Splash,
    /// [`SpecialEffect::SingleTargetWithTeamUtility`]
    SingleTargetWithTeamUtility,
}

impl SpecialEffect {
    /// Returns the effect shape without its parameters.
    #[must_use]
    pub const fn kind(&self) -> EffectKind {
        match self {
            Self::SingleTarget { .. } => EffectKind::SingleTarget,
            Self::Splash { .. } => EffectKind::Splash,
            Self::SingleTargetWithTeamUtility { .. } => EffectKind::SingleTargetWithTeamUtility,
        }
    }

    /// Returns true if the special needs a single opponent chosen.
    #[must_use]
    pub const fn needs_target(&self) -> bool {
        !matches!(self, Self::Splash { .. })
    }
}

// =============================================================================
// Archetype
// =============================================================================

/// Immutable template a warrior is built from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Archetype {
    /// Registry id
    pub id: ArchetypeId,
    /// Display name
    pub name: &'static str,
    /// Title shown in the stats view
    pub description: &'static str,
    /// Starting health
    pub health: i32,
    /// Base damage before rolls and multipliers
    pub power: u32,
    /// Turn order key; faster warriors act first
    pub speed: u32,
    /// Charge spent by the special
    pub cost: u32,
    /// Name of the basic attack
    pub attack_name: &'static str,
    /// Name of the special
    pub special_name: &'static str,
    /// What the special does, in the game's words
    pub special_description: &'static str,
    /// Shape and parameters of the special
    pub special: SpecialEffect,
}

const fn single(multiplier_pct: u32) -> SpecialEffect {
    SpecialEffect::SingleTarget {
        multiplier_pct,
        health_scaling_pct: 0,
        drain: false,
    }
}

/// The standard roster of fourteen warriors.
pub const STANDARD_ROSTER: [Archetype; 14] = [
    Archetype {
        id: ArchetypeId::Norman,
        name: "Norman",
        description: "Skilled Swordsman",
        health: 1000,
        power: 100,
        speed: 100,
        cost: 3,
        attack_name: "Sword Slash",
        special_name: "Blade Blitz",
        special_description: "Norman rushes to the opponent and slashes at them relentlessly \
            with triple his usual power!",
        special: single(300),
    },
    Archetype {
        id: ArchetypeId::Eric,
        name: "Eric",
        description: "Radiant Hero",
        health: 1200,
        power: 140,
        speed: 70,
        cost: 5,
        attack_name: "Ragnell",
        special_name: "Aether",
        special_description: "Eric imbues his blade with power to attack with double power and \
            heal himself of half the damage dealt!",
        special: SpecialEffect::SingleTarget {
            multiplier_pct: 200,
            health_scaling_pct: 0,
            drain: true,
        },
    },
    Archetype {
        id: ArchetypeId::Lenna,
        name: "Lenna",
        description: "Lady of the Cosmos",
        health: 950,
        power: 110,
        speed: 110,
        cost: 5,
        attack_name: "Cosmic Blade",
        special_name: "Astral Blade",
        special_description: "Lenna uses her powers over the cosmos to boost her power fivefold!",
        special: single(500),
    },
    Archetype {
        id: ArchetypeId::FiveStar,
        name: "FiveStar",
        description: "Lord of the Stars",
        health: 800,
        power: 120,
        speed: 120,
        cost: 4,
        attack_name: "Star Slice",
        special_name: "Star Storm",
        special_description: "FiveStar summons massive stars from the skies to attack all of his \
            opponents with 50% extra power!",
        special: SpecialEffect::Splash {
            multiplier_pct: 150,
            power_source: PowerSource::Caster,
        },
    },
    Archetype {
        id: ArchetypeId::Assa,
        name: "Assa",
        description: "Master Assassin",
        health: 750,
        power: 75,
        speed: 150,
        cost: 1,
        attack_name: "Needler",
        special_name: "Poison Needles",
        special_description: "Assa dips her needles into a special poison that increases her \
            power by 20% of the opponent's health.",
        special: SpecialEffect::SingleTarget {
            multiplier_pct: 100,
            health_scaling_pct: 20,
            drain: false,
        },
    },
    Archetype {
        id: ArchetypeId::Kasime,
        name: "Kasime",
        description: "Psychic Power",
        health: 1200,
        power: 80,
        speed: 40,
        cost: 2,
        attack_name: "Mind Pulse",
        special_name: "Chaos Control",
        special_description: "Kasime uses his psychic powers to force all of the opponents to \
            attack themselves with their own power!",
        special: SpecialEffect::Splash {
            multiplier_pct: 100,
            power_source: PowerSource::Target,
        },
    },
    Archetype {
        id: ArchetypeId::Pyro,
        name: "Pyro",
        description: "Blazing Warrior",
        health: 1000,
        power: 150,
        speed: 50,
        cost: 5,
        attack_name: "Flamethrower",
        special_name: "Inferno",
        special_description: "Pyro uses his flames to torch all of the opponents with 50% extra \
            power!",
        special: SpecialEffect::Splash {
            multiplier_pct: 150,
            power_source: PowerSource::Caster,
        },
    },
    Archetype {
        id: ArchetypeId::Gura,
        name: "Gura",
        description: "Hammer Knight",
        health: 1500,
        power: 125,
        speed: 25,
        cost: 3,
        attack_name: "Hammer Smash",
        special_name: "Hammer Quake",
        special_description: "Gura uses her massive hammer and smashes the ground with force! \
            The opponent is attacked with double power!",
        special: single(200),
    },
    Archetype {
        id: ArchetypeId::Nimbus,
        name: "Nimbus",
        description: "Warrior of the Storm",
        health: 600,
        power: 150,
        speed: 150,
        cost: 2,
        attack_name: "Gale Force",
        special_name: "Hurricane",
        special_description: "Nimbus summons a massive hurricane to attack all of his opponents \
            with full power!",
        special: SpecialEffect::Splash {
            multiplier_pct: 100,
            power_source: PowerSource::Caster,
        },
    },
    Archetype {
        id: ArchetypeId::Maria,
        name: "Maria",
        description: "Fire Mage",
        health: 600,
        power: 200,
        speed: 80,
        cost: 3,
        attack_name: "Bolganone",
        special_name: "Immolate",
        special_description: "Maria focuses her flames into a powerful beam and takes aim at the \
            opponents heart! The attack has 150% extra power!",
        special: single(250),
    },
    Archetype {
        id: ArchetypeId::Raijin,
        name: "Raijin",
        description: "Lightning Warrior",
        health: 500,
        power: 175,
        speed: 175,
        cost: 3,
        attack_name: "Thunder's Fist",
        special_name: "Lightning Chain Combo",
        special_description: "Raijin charges up his body with electricity and attacks the \
            opponent with 2.5x power in a combo over in a flash!",
        special: single(250),
    },
    Archetype {
        id: ArchetypeId::Axim,
        name: "Axim",
        description: "Shadow Knight",
        health: 1300,
        power: 130,
        speed: 13,
        cost: 3,
        attack_name: "Alondite",
        special_name: "New Moon",
        special_description: "Axim uses the power of darkness to deplete the opponent's health! \
            The power of this attack is boosted by 30% of the opponent's health.",
        special: SpecialEffect::SingleTarget {
            multiplier_pct: 100,
            health_scaling_pct: 30,
            drain: false,
        },
    },
    Archetype {
        id: ArchetypeId::Rex,
        name: "Rex",
        description: "King of the Realm",
        health: 1400,
        power: 100,
        speed: 20,
        cost: 4,
        attack_name: "Royal Blade",
        special_name: "Shielded Strike",
        special_description: "Rex uses his shield to protect himself and his allies during his \
            attack! All warriors on Rex's team have their health boosted with half of Rex's \
            power, while Rex attacks with full power!",
        special: SpecialEffect::SingleTargetWithTeamUtility {
            multiplier_pct: 100,
            shield_pct: 50,
        },
    },
    Archetype {
        id: ArchetypeId::Ninji,
        name: "Ninji",
        description: "Sneaky Ninja",
        health: 900,
        power: 100,
        speed: 200,
        cost: 3,
        attack_name: "Shuriken",
        special_name: "Katana",
        special_description: "Ninji draws his katana and slashes with 150% extra power!",
        special: single(250),
    },
];

// =============================================================================
// Catalog
// =============================================================================

/// Read-only lookup of the archetypes available to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Archetype>,
}

impl Catalog {
    /// The full standard roster.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ROSTER.to_vec(),
        }
    }

    /// Builds a catalog from explicit entries.
    #[must_use]
    pub fn from_entries(entries: Vec<Archetype>) -> Self {
        Self { entries }
    }

    /// Builds a catalog restricted to the named standard archetypes.
    ///
    /// Names are matched case-insensitively; repeated names are kept once.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ArchetypeNotFound`] for the first unknown name.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, GameError> {
        let standard = Self::standard();
        let mut entries: Vec<Archetype> = Vec::with_capacity(names.len());
        for name in names {
            let archetype = *standard.by_name(name.as_ref())?;
            if !entries.iter().any(|e| e.id == archetype.id) {
                entries.push(archetype);
            }
        }
        Ok(Self { entries })
    }

    /// Looks up an archetype by id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ArchetypeNotFound`] if the id is not in this catalog.
    pub fn get(&self, id: ArchetypeId) -> Result<&Archetype, GameError> {
        self.entries
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| GameError::ArchetypeNotFound(id.name().to_string()))
    }

    /// Looks up an archetype by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ArchetypeNotFound`] if no archetype has that name.
    pub fn by_name(&self, name: &str) -> Result<&Archetype, GameError> {
        self.entries
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| GameError::ArchetypeNotFound(name.to_string()))
    }

    /// Ids of every archetype in catalog order.
    #[must_use]
    pub fn ids(&self) -> Vec<ArchetypeId> {
        self.entries.iter().map(|a| a.id).collect()
    }

    /// Number of archetypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog holds no archetypes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the archetypes.
    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.entries.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
