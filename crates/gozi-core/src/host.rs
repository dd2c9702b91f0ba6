//! Host capabilities the engine depends on.
//!
//! The engine never reads input, prints, or owns an entropy source. A host
//! supplies three capabilities:
//!
//! - [`RandomSource`]: inclusive uniform integer draws (damage rolls, shuffles)
//! - [`Chooser`]: a pick among enumerated options for human-controlled warriors
//! - [`Reporter`]: a one-way sink for narration
//!
//! A type implementing all three is a [`Host`].
//!
//! # Example
//!
//! ```
//! use gozi_core::host::{RandomSource, SeededRandom};
//!
//! let mut a = SeededRandom::new(7);
//! let mut b = SeededRandom::new(7);
//! let roll = a.random_int(80, 120);
//! assert!((80..=120).contains(&roll));
//! assert_eq!(roll, b.random_int(80, 120));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::output::BattleEvent;

// =============================================================================
// Capabilities
// =============================================================================

/// Source of uniform random integers.
pub trait RandomSource {
    /// Draws an integer uniformly from `min..=max`.
    fn random_int(&mut self, min: u32, max: u32) -> u32;
}

/// Answers menu requests for human-controlled warriors.
pub trait Chooser {
    /// Picks one of `request.options` or cancels.
    fn choose(&mut self, request: &ChoiceRequest) -> Choice;
}

/// Receives narration for every resolved action, defeat and match outcome.
pub trait Reporter {
    /// Records an event. Failures inside the sink are the sink's concern.
    fn report(&mut self, event: &BattleEvent);
}

/// All three capabilities in one value.
pub trait Host: RandomSource + Chooser + Reporter {}

impl<T: RandomSource + Chooser + Reporter> Host for T {}

/// Shuffles `items` in place with a Fisher-Yates pass over `rng`.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let bound = u32::try_from(i).unwrap_or(u32::MAX);
        let j = rng.random_int(0, bound) as usize;
        items.swap(i, j.min(i));
    }
}

// =============================================================================
// Choice protocol
// =============================================================================

/// What a menu is asking for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChoiceKind {
    /// Top-level action menu for a warrior's turn.
    Action {
        /// Name of the acting warrior
        actor: &'static str,
        /// True if the warrior holds enough charge for its special
        special_ready: bool,
    },
    /// Pick an opponent for an attack or single-target special.
    Target {
        /// Name of the acting warrior
        actor: &'static str,
        /// Name of the ability being aimed
        ability: &'static str,
    },
    /// Confirm a special that needs no target.
    ConfirmSpecial {
        /// Name of the acting warrior
        actor: &'static str,
        /// Name of the special
        special: &'static str,
        /// Description of the special
        description: &'static str,
    },
    /// Pick a warrior to view in detail.
    Inspect,
}

/// One selectable entry in a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// Text shown to the player
    pub label: String,
    /// False for entries that would be rejected (e.g. a defeated target)
    pub available: bool,
}

impl ChoiceOption {
    /// Creates an option.
    pub fn new(label: impl Into<String>, available: bool) -> Self {
        Self {
            label: label.into(),
            available,
        }
    }
}

/// A menu presented to the chooser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceRequest {
    /// Which menu this is, with the context needed to render it
    pub kind: ChoiceKind,
    /// Entries in display order; [`Choice::Pick`] indexes into them
    pub options: Vec<ChoiceOption>,
}

/// The chooser's answer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    /// Index into [`ChoiceRequest::options`].
    Pick(usize),
    /// Back out of the current menu without acting.
    Cancel,
    /// Stop the session.
    Quit,
}

// =============================================================================
// Stock implementations
// =============================================================================

/// Deterministic [`RandomSource`] backed by `ChaCha8`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    /// Creates a source seeded from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this source was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Host for sessions where every warrior is automated.
///
/// The chooser always quits (automated warriors never ask, so a human seat ends
/// the session) and the reporter forwards narration to `tracing` at trace level.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    rng: SeededRandom,
}

impl HeadlessHost {
    /// Creates a headless host seeded from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRandom::new(seed),
        }
    }
}

impl RandomSource for HeadlessHost {
    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_int(min, max)
    }
}

impl Chooser for HeadlessHost {
    fn choose(&mut self, request: &ChoiceRequest) -> Choice {
        tracing::warn!(kind = ?request.kind, "headless host asked for a choice; quitting");
        Choice::Quit
    }
}

impl Reporter for HeadlessHost {
    fn report(&mut self, event: &BattleEvent) {
        tracing::trace!("{event}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod seeded_random_tests {
        use super::*;

        #[test]
        fn draws_stay_in_inclusive_range() {
            let mut rng = SeededRandom::new(1);
            let mut seen_min = false;
            let mut seen_max = false;
            for _ in 0..2000 {
                let v = rng.random_int(80, 120);
                assert!((80..=120).contains(&v));
                seen_min |= v == 80;
                seen_max |= v == 120;
            }
            assert!(seen_min && seen_max, "both bounds should be reachable");
        }

        #[test]
        fn degenerate_range_returns_min() {
            let mut rng = SeededRandom::new(1);
            assert_eq!(rng.random_int(5, 5), 5);
        }

        #[test]
        fn same_seed_same_sequence() {
            let mut a = SeededRandom::new(99);
            let mut b = SeededRandom::new(99);
            for _ in 0..50 {
                assert_eq!(a.random_int(0, 1000), b.random_int(0, 1000));
            }
            assert_eq!(a.seed(), 99);
        }
    }

    mod shuffle_tests {
        use super::*;

        #[test]
        fn shuffle_is_a_permutation() {
            let mut rng = SeededRandom::new(3);
            let mut items: Vec<u32> = (0..14).collect();
            shuffle(&mut items, &mut rng);
            let mut sorted = items.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..14).collect::<Vec<_>>());
        }

        #[test]
        fn shuffle_handles_short_slices() {
            let mut rng = SeededRandom::new(3);
            let mut empty: [u8; 0] = [];
            shuffle(&mut empty, &mut rng);
            let mut one = [7];
            shuffle(&mut one, &mut rng);
            assert_eq!(one, [7]);
        }
    }

    #[test]
    fn headless_host_quits_on_choices() {
        let mut host = HeadlessHost::new(0);
        let request = ChoiceRequest {
            kind: ChoiceKind::Inspect,
            options: vec![ChoiceOption::new("Norman", true)],
        };
        assert_eq!(host.choose(&request), Choice::Quit);
    }
}
