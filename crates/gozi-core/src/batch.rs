//! Batch simulation of fully automated sessions.
//!
//! Sessions are independent: each one owns a [`HeadlessHost`] seeded from
//! `base_seed + index`, so a batch is reproducible regardless of how rayon
//! schedules it.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::entity::Side;
use crate::error::GameError;
use crate::host::HeadlessHost;
use crate::roster::{ArchetypeId, Catalog};
use crate::session::{MatchOutcome, Session, SessionConfig};

/// Shape of a batch run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Independent sessions to run
    pub sessions: u32,
    /// Matches played by each session
    pub matches_per_session: u32,
    /// Seed of the first session; session `i` uses `base_seed + i`
    pub base_seed: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            sessions: 100,
            matches_per_session: 10,
            base_seed: 0,
        }
    }
}

/// Aggregated results of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Matches played across all sessions
    pub matches: u64,
    /// Matches won by the home team
    pub home_wins: u64,
    /// Matches won by the away team
    pub away_wins: u64,
    /// Points scored by the home team
    pub home_points: u64,
    /// Points scored by the away team
    pub away_points: u64,
    /// Matches won by a team that fielded each archetype
    pub archetype_wins: BTreeMap<ArchetypeId, u64>,
}

impl BatchReport {
    fn record(&mut self, outcome: &MatchOutcome) {
        self.matches += 1;
        let points = u64::from(outcome.points);
        match outcome.winner {
            Side::Home => {
                self.home_wins += 1;
                self.home_points += points;
            }
            Side::Away => {
                self.away_wins += 1;
                self.away_points += points;
            }
        }
        for id in outcome.winning_archetypes {
            *self.archetype_wins.entry(id).or_default() += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.matches += other.matches;
        self.home_wins += other.home_wins;
        self.away_wins += other.away_wins;
        self.home_points += other.home_points;
        self.away_points += other.away_points;
        for (id, wins) in other.archetype_wins {
            *self.archetype_wins.entry(id).or_default() += wins;
        }
        self
    }
}

/// Runs one automated session to completion.
///
/// # Errors
///
/// Returns a [`GameError`] if the catalog cannot field a match.
pub fn simulate_session(
    seed: u64,
    matches: u32,
    catalog: &Catalog,
) -> Result<Vec<MatchOutcome>, GameError> {
    let mut session = Session::new(
        SessionConfig::automated(),
        catalog.clone(),
        HeadlessHost::new(seed),
    )?;
    session.run(matches)?;
    Ok(session.history().to_vec())
}

/// Runs `config.sessions` automated sessions in parallel and aggregates them.
///
/// # Errors
///
/// Returns the first [`GameError`] any session produced.
pub fn simulate_batch(config: &BatchConfig, catalog: &Catalog) -> Result<BatchReport, GameError> {
    tracing::info!(
        sessions = config.sessions,
        matches = config.matches_per_session,
        seed = config.base_seed,
        "batch started"
    );

    let reports = (0..config.sessions)
        .into_par_iter()
        .map(|index| {
            let seed = config.base_seed.wrapping_add(u64::from(index));
            let outcomes = simulate_session(seed, config.matches_per_session, catalog)?;
            let mut report = BatchReport::default();
            for outcome in &outcomes {
                report.record(outcome);
            }
            Ok(report)
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    let report = reports
        .into_iter()
        .fold(BatchReport::default(), BatchReport::merge);
    tracing::info!(
        matches = report.matches,
        home_wins = report.home_wins,
        away_wins = report.away_wins,
        "batch finished"
    );
    Ok(report)
}
