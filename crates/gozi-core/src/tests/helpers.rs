//! Test helper functions for building battles and scripting hosts.
//!
//! This module provides factory functions and host doubles that make
//! writing tests more ergonomic and consistent.

use std::collections::VecDeque;

use crate::battle::Battle;
use crate::entity::{Controller, Side, Team};
use crate::host::{Choice, ChoiceRequest, Chooser, RandomSource, Reporter, SeededRandom};
use crate::output::BattleEvent;
use crate::roster::{ArchetypeId, Catalog};

// =============================================================================
// Battle Setup
// =============================================================================

/// Builds a battle from the standard catalog: a human home team against an
/// automated away team.
pub fn battle_of(home: [ArchetypeId; 3], away: [ArchetypeId; 3]) -> Battle {
    let catalog = Catalog::standard();
    Battle::new(
        Team::summon(Side::Home, Controller::Human, home, &catalog).expect("home team"),
        Team::summon(Side::Away, Controller::Automated, away, &catalog).expect("away team"),
    )
}

// =============================================================================
// Random Sources
// =============================================================================

/// Returns the same value on every draw, clamped into the requested range.
///
/// Counts draws so tests can assert that a rejected action rolled nothing.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    value: u32,
    draws: usize,
}

impl FixedRandom {
    pub fn new(value: u32) -> Self {
        Self { value, draws: 0 }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for FixedRandom {
    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        self.draws += 1;
        self.value.clamp(min, max.max(min))
    }
}

// =============================================================================
// Scripted Host
// =============================================================================

/// Host double that answers menus from a script and records everything.
///
/// Once the script runs dry every further menu is answered with
/// [`Choice::Quit`], so a test can never hang on a human turn. An autopilot
/// host instead picks the first available option of every menu.
#[derive(Debug)]
pub struct ScriptedHost {
    rng: SeededRandom,
    script: VecDeque<Choice>,
    autopilot: bool,
    pub requests: Vec<ChoiceRequest>,
    pub events: Vec<BattleEvent>,
}

impl ScriptedHost {
    pub fn new(seed: u64, script: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            rng: SeededRandom::new(seed),
            script: script.into_iter().collect(),
            autopilot: false,
            requests: Vec::new(),
            events: Vec::new(),
        }
    }

    /// A host that always attacks the first living opponent.
    pub fn autopilot(seed: u64) -> Self {
        Self {
            autopilot: true,
            ..Self::new(seed, std::iter::empty())
        }
    }

    /// Narration text of every reported event.
    pub fn narration(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Reasons of every rejected menu answer.
    pub fn rejections(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Rejected { reason } => Some(reason.clone()),
                _ => None,
            })
            .collect()
    }
}

impl RandomSource for ScriptedHost {
    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_int(min, max)
    }
}

impl Chooser for ScriptedHost {
    fn choose(&mut self, request: &ChoiceRequest) -> Choice {
        self.requests.push(request.clone());
        if let Some(choice) = self.script.pop_front() {
            return choice;
        }
        if self.autopilot {
            if let Some(index) = request.options.iter().position(|o| o.available) {
                return Choice::Pick(index);
            }
        }
        Choice::Quit
    }
}

impl Reporter for ScriptedHost {
    fn report(&mut self, event: &BattleEvent) {
        self.events.push(event.clone());
    }
}

/// Automated-only host that records the event log.
#[derive(Debug)]
pub struct RecordingHost {
    rng: SeededRandom,
    pub events: Vec<BattleEvent>,
}

impl RecordingHost {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRandom::new(seed),
            events: Vec::new(),
        }
    }
}

impl RandomSource for RecordingHost {
    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_int(min, max)
    }
}

impl Chooser for RecordingHost {
    fn choose(&mut self, _request: &ChoiceRequest) -> Choice {
        Choice::Quit
    }
}

impl Reporter for RecordingHost {
    fn report(&mut self, event: &BattleEvent) {
        self.events.push(event.clone());
    }
}
