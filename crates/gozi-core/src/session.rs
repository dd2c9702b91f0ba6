//! Session: the match state machine and running scores.
//!
//! A session owns the catalog, the warrior pool, both summoners and the host.
//! Each match runs as a sequence of rounds:
//!
//! 1. **DRAW**: six fresh warriors are drawn from the pool and summoned
//! 2. **ORDER**: every round the six combatants are ordered by speed
//! 3. **ACT**: each living combatant takes its turn (policy or host chooser)
//! 4. **SCAN**: after every single action, defeats are settled and the
//!    elimination check runs; the first eliminated team ends the match
//!
//! The winning summoner gains one point per surviving warrior.
//!
//! # Example
//!
//! ```
//! use gozi_core::entity::Controller;
//! use gozi_core::host::HeadlessHost;
//! use gozi_core::roster::Catalog;
//! use gozi_core::session::{Session, SessionConfig};
//!
//! let config = SessionConfig::automated();
//! let mut session = Session::new(config, Catalog::standard(), HeadlessHost::new(5)).unwrap();
//!
//! let outcome = session.play_match().unwrap();
//! assert!((1..=3).contains(&outcome.points));
//! assert_eq!(session.scores()[outcome.winner.index()], outcome.points);
//! ```

use serde::{Deserialize, Serialize};

use crate::battle::{Battle, MatchState};
use crate::entity::{CombatantId, Controller, Side, Summoner, Team, Warrior, TEAM_SIZE};
use crate::error::{ActionError, GameError};
use crate::host::{Choice, ChoiceKind, ChoiceOption, ChoiceRequest, Host};
use crate::output::BattleEvent;
use crate::policy;
use crate::pool::WarriorPool;
use crate::resolver::{resolve, Action, Resolution};
use crate::roster::{Archetype, ArchetypeId, Catalog};
use crate::schedule::order_turn;

// =============================================================================
// Configuration
// =============================================================================

/// Who controls each side of a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Controller of the home summoner
    pub home: Controller,
    /// Controller of the away summoner
    pub away: Controller,
}

impl SessionConfig {
    /// Both sides driven by the decision policy.
    #[must_use]
    pub const fn automated() -> Self {
        Self {
            home: Controller::Automated,
            away: Controller::Automated,
        }
    }

    /// Controller seated on `side`.
    #[must_use]
    pub const fn controller(self, side: Side) -> Controller {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

impl Default for SessionConfig {
    /// A human player against the computer.
    fn default() -> Self {
        Self {
            home: Controller::Human,
            away: Controller::Automated,
        }
    }
}

/// Result of one finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// 1-based match number within the session
    pub number: u32,
    /// Side that still had warriors standing
    pub winner: Side,
    /// Side that was eliminated
    pub loser: Side,
    /// Surviving members of the winning team
    pub points: u32,
    /// Archetypes that fought for the winner, in slot order
    pub winning_archetypes: [ArchetypeId; TEAM_SIZE],
    /// Rounds started before the elimination
    pub rounds: u32,
}

// =============================================================================
// Session
// =============================================================================

/// A sequence of matches between two summoners.
#[derive(Debug)]
pub struct Session<H: Host> {
    catalog: Catalog,
    pool: WarriorPool,
    summoners: [Summoner; 2],
    battle: Option<Battle>,
    matches_started: u32,
    history: Vec<MatchOutcome>,
    host: H,
}

impl<H: Host> Session<H> {
    /// Creates a session with scores at zero and no match in progress.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CatalogTooSmall`] if the catalog cannot field two
    /// distinct teams.
    pub fn new(config: SessionConfig, catalog: Catalog, host: H) -> Result<Self, GameError> {
        let pool = WarriorPool::new(&catalog)?;
        Ok(Self {
            catalog,
            pool,
            summoners: Side::ALL.map(|side| Summoner::new(side, config.controller(side))),
            battle: None,
            matches_started: 0,
            history: Vec::new(),
            host,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Archetypes this session draws from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The summoner seated on `side`.
    #[must_use]
    pub fn summoner(&self, side: Side) -> &Summoner {
        &self.summoners[side.index()]
    }

    /// Running scores as `[home, away]`.
    #[must_use]
    pub fn scores(&self) -> [u32; 2] {
        [self.summoners[0].score, self.summoners[1].score]
    }

    /// The match in progress, if any.
    #[must_use]
    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    /// State of the match in progress, `None` between matches.
    #[must_use]
    pub fn state(&self) -> Option<MatchState> {
        self.battle.as_ref().map(|battle| match battle.eliminated_side() {
            Some(loser) => MatchState::TeamEliminated { loser },
            None => MatchState::Active,
        })
    }

    /// Finished matches in the order they were played.
    #[must_use]
    pub fn history(&self) -> &[MatchOutcome] {
        &self.history
    }

    /// The host driving this session.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to queue input between rounds.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the session, returning its host.
    pub fn into_host(self) -> H {
        self.host
    }

    #[cfg(test)]
    pub(crate) fn battle_mut(&mut self) -> Option<&mut Battle> {
        self.battle.as_mut()
    }

    /// Starts a match with hand-picked teams instead of a draw.
    #[cfg(test)]
    pub(crate) fn install_battle(&mut self, battle: Battle) {
        self.matches_started += 1;
        self.battle = Some(battle);
    }

    // -------------------------------------------------------------------------
    // Match flow
    // -------------------------------------------------------------------------

    /// Draws six warriors and starts a new match.
    ///
    /// A match still in progress is discarded without scoring.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ArchetypeNotFound`] if a drawn id is missing from
    /// the catalog.
    pub fn start_match(&mut self) -> Result<&Battle, GameError> {
        let draw = self.pool.draw(&mut self.host);
        let home_seat = self.summoners[0].controller;
        let away_seat = self.summoners[1].controller;
        let home = Team::summon(Side::Home, home_seat, draw.home, &self.catalog)?;
        let away = Team::summon(Side::Away, away_seat, draw.away, &self.catalog)?;
        self.matches_started += 1;

        let event = BattleEvent::MatchStarted {
            number: self.matches_started,
            home: home.names(),
            away: away.names(),
        };
        tracing::info!(
            number = self.matches_started,
            home = ?home.names(),
            away = ?away.names(),
            "match started"
        );
        self.host.report(&event);

        Ok(&*self.battle.insert(Battle::new(home, away)))
    }

    /// Plays one round of the match in progress.
    ///
    /// Returns [`MatchState::TeamEliminated`] as soon as an action eliminates a
    /// team; the remaining combatants of the round do not act, scores are
    /// updated and the match is closed.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoActiveMatch`] if no match was started
    /// - [`GameError::SessionAbandoned`] if the host quit during a human turn;
    ///   the match stays in progress
    pub fn play_round(&mut self) -> Result<MatchState, GameError> {
        let battle = self.battle.as_mut().ok_or(GameError::NoActiveMatch)?;
        let host = &mut self.host;

        let round = battle.begin_round();
        host.report(&BattleEvent::RoundStarted { round });
        let order = order_turn(battle, &mut *host);

        let mut loser = None;
        for actor in order {
            if !battle.warrior(actor).is_some_and(Warrior::is_alive) {
                continue;
            }
            take_turn(battle, actor, host)?;
            for event in battle.scan_defeats() {
                host.report(&event);
            }
            if let Some(side) = battle.eliminated_side() {
                loser = Some(side);
                break;
            }
        }

        match loser {
            Some(loser) => {
                self.finish_match(loser)?;
                Ok(MatchState::TeamEliminated { loser })
            }
            None => Ok(MatchState::RoundComplete),
        }
    }

    /// Plays a whole match, starting one first if none is in progress.
    ///
    /// # Errors
    ///
    /// See [`Session::start_match`] and [`Session::play_round`].
    pub fn play_match(&mut self) -> Result<MatchOutcome, GameError> {
        if self.battle.is_none() {
            self.start_match()?;
        }
        loop {
            if let MatchState::TeamEliminated { .. } = self.play_round()? {
                return self.history.last().cloned().ok_or(GameError::NoActiveMatch);
            }
        }
    }

    /// Plays `matches` matches back to back.
    ///
    /// # Errors
    ///
    /// Stops at the first error; matches finished before it keep their score.
    pub fn run(&mut self, matches: u32) -> Result<&[MatchOutcome], GameError> {
        for _ in 0..matches {
            self.play_match()?;
        }
        Ok(self.history.as_slice())
    }

    fn finish_match(&mut self, loser: Side) -> Result<(), GameError> {
        let battle = self.battle.take().ok_or(GameError::NoActiveMatch)?;
        let winner = loser.opponent();
        let winning_team = battle.team(winner);
        let points = winning_team.survivors();
        self.summoners[winner.index()].score += points;

        let outcome = MatchOutcome {
            number: self.matches_started,
            winner,
            loser,
            points,
            winning_archetypes: winning_team.archetype_ids(),
            rounds: battle.round(),
        };
        tracing::info!(
            number = outcome.number,
            %winner,
            points,
            rounds = outcome.rounds,
            "match ended"
        );

        self.host.report(&BattleEvent::MatchEnded { winner, points });
        let [home, away] = self.scores();
        self.host.report(&BattleEvent::ScoresUpdated { home, away });
        self.history.push(outcome);
        Ok(())
    }
}

// =============================================================================
// Turns
// =============================================================================

/// Runs one combatant's turn and reports its narration.
fn take_turn<H: Host>(
    battle: &mut Battle,
    actor: CombatantId,
    host: &mut H,
) -> Result<(), GameError> {
    let Some(warrior) = battle.warrior(actor) else {
        return Ok(());
    };
    host.report(&BattleEvent::TurnStarted {
        actor: warrior.name(),
    });

    let resolution = match warrior.controller() {
        Controller::Automated => automated_turn(battle, actor, host),
        Controller::Human => Some(human_turn(battle, actor, host)?),
    };
    if let Some(resolution) = resolution {
        for event in &resolution.events {
            host.report(event);
        }
    }
    Ok(())
}

/// Resolves the policy's decision. The warrior idles if there is nothing to
/// decide or the resolver refuses the decision.
fn automated_turn<H: Host>(
    battle: &mut Battle,
    actor: CombatantId,
    host: &mut H,
) -> Option<Resolution> {
    let action = policy::decide(battle, actor)?;
    match resolve(battle, actor, action, &mut *host) {
        Ok(resolution) => Some(resolution),
        Err(err) => {
            tracing::error!(%actor, %err, ?action, "policy chose an invalid action");
            None
        }
    }
}

/// Drives the menus for a human-controlled warrior until an action resolves.
fn human_turn<H: Host>(
    battle: &mut Battle,
    actor: CombatantId,
    host: &mut H,
) -> Result<Resolution, GameError> {
    loop {
        let Some(action) = choose_action(battle, actor, host)? else {
            continue;
        };
        match resolve(battle, actor, action, &mut *host) {
            Ok(resolution) => return Ok(resolution),
            Err(err) => reject(host, &err),
        }
    }
}

/// The top-level menu: attack, special or check stats.
fn action_menu(warrior: &Warrior) -> ChoiceRequest {
    let archetype = warrior.archetype();
    let special = format!(
        "Special: {} ({}/{})",
        archetype.special_name,
        warrior.charge(),
        archetype.cost
    );
    ChoiceRequest {
        kind: ChoiceKind::Action {
            actor: archetype.name,
            special_ready: warrior.special_ready(),
        },
        options: vec![
            ChoiceOption::new(format!("Attack: {}", archetype.attack_name), true),
            ChoiceOption::new(special, warrior.special_ready()),
            ChoiceOption::new("Check stats", true),
        ],
    }
}

/// Shows the action menu once. `None` means the menu should be shown again.
fn choose_action<H: Host>(
    battle: &Battle,
    actor: CombatantId,
    host: &mut H,
) -> Result<Option<Action>, GameError> {
    let Some(warrior) = battle.warrior(actor) else {
        return Err(GameError::NoActiveMatch);
    };
    let archetype = *warrior.archetype();

    match host.choose(&action_menu(warrior)) {
        Choice::Quit => Err(GameError::SessionAbandoned),
        Choice::Cancel => Ok(None),
        Choice::Pick(0) => {
            let target = pick_target(battle, actor, archetype.attack_name, host)?;
            Ok(target.map(|target| Action::Attack { target }))
        }
        Choice::Pick(1) if !warrior.special_ready() => {
            let err = ActionError::InsufficientCharge {
                name: archetype.name,
                charge: warrior.charge(),
                cost: archetype.cost,
            };
            reject(host, &err);
            Ok(None)
        }
        Choice::Pick(1) if archetype.special.needs_target() => {
            let target = pick_target(battle, actor, archetype.special_name, host)?;
            Ok(target.map(|target| Action::Special {
                target: Some(target),
            }))
        }
        Choice::Pick(1) => {
            let confirmed = confirm_special(actor, &archetype, host)?;
            Ok(confirmed.then_some(Action::Special { target: None }))
        }
        Choice::Pick(2) => {
            show_stats(battle, host)?;
            Ok(None)
        }
        Choice::Pick(index) => {
            host.report(&BattleEvent::Rejected {
                reason: format!("{index} is not an option, please choose again"),
            });
            Ok(None)
        }
    }
}

/// Prompts for an opposing slot. `None` means the player backed out.
fn pick_target<H: Host>(
    battle: &Battle,
    actor: CombatantId,
    ability: &'static str,
    host: &mut H,
) -> Result<Option<usize>, GameError> {
    let opponents = battle.team(actor.side.opponent());
    let request = ChoiceRequest {
        kind: ChoiceKind::Target {
            actor: battle.warrior(actor).map_or("", Warrior::name),
            ability,
        },
        options: opponents
            .warriors()
            .iter()
            .map(|w| ChoiceOption::new(format!("{} ({} HP)", w.name(), w.health()), w.is_alive()))
            .collect(),
    };

    loop {
        match host.choose(&request) {
            Choice::Quit => return Err(GameError::SessionAbandoned),
            Choice::Cancel => return Ok(None),
            Choice::Pick(slot) if opponents.is_living(slot) => return Ok(Some(slot)),
            Choice::Pick(slot) => reject(host, &ActionError::InvalidTarget { slot }),
        }
    }
}

/// Asks the player to confirm a special that needs no target.
fn confirm_special<H: Host>(
    actor: CombatantId,
    archetype: &Archetype,
    host: &mut H,
) -> Result<bool, GameError> {
    let request = ChoiceRequest {
        kind: ChoiceKind::ConfirmSpecial {
            actor: archetype.name,
            special: archetype.special_name,
            description: archetype.special_description,
        },
        options: vec![
            ChoiceOption::new("Yes", true),
            ChoiceOption::new("No", true),
        ],
    };
    tracing::trace!(%actor, "confirming special");
    match host.choose(&request) {
        Choice::Quit => Err(GameError::SessionAbandoned),
        Choice::Pick(0) => Ok(true),
        Choice::Pick(_) | Choice::Cancel => Ok(false),
    }
}

/// Narrates every combatant's health and charge, then offers details until
/// the player backs out.
fn show_stats<H: Host>(battle: &Battle, host: &mut H) -> Result<(), GameError> {
    let stats = battle.stats();
    host.report(&BattleEvent::StatsOverview {
        warriors: stats.clone(),
    });

    let request = ChoiceRequest {
        kind: ChoiceKind::Inspect,
        options: stats
            .iter()
            .map(|s| ChoiceOption::new(format!("{} ({})", s.name, s.id.side), true))
            .collect(),
    };
    loop {
        match host.choose(&request) {
            Choice::Quit => return Err(GameError::SessionAbandoned),
            Choice::Cancel => return Ok(()),
            Choice::Pick(index) => match stats.get(index) {
                Some(warrior) => host.report(&BattleEvent::StatsDetail {
                    warrior: warrior.clone(),
                }),
                None => host.report(&BattleEvent::Rejected {
                    reason: format!("{index} is not an option, please choose again"),
                }),
            },
        }
    }
}

fn reject<H: Host>(host: &mut H, err: &ActionError) {
    tracing::debug!(%err, "menu answer rejected");
    host.report(&BattleEvent::Rejected {
        reason: err.to_string(),
    });
}
