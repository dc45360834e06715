//! Best-of-N matches.
//!
//! A `Match` owns one [`Game`] at a time, the scoreboard, the RNG and the
//! robot pick policy. It is the entry point for the presentation layer:
//!
//! 1. [`Match::start`] validates the configuration and opens game 1
//! 2. [`Match::submit_pick`] is called once per human pick
//! 3. after a `PlayAgain` or `Eliminate` result, [`Match::advance_to_next_round`]
//! 4. after a `Winner` result, [`Match::advance_to_next_game`]
//! 5. a `MatchOver` result ends the match
//!
//! Robots pick as soon as their turn comes up, so every call returns with
//! either a human to wait for or a resolved round.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{
    EngineError, GameRng, GameRngState, MatchConfig, Player, PlayerId, PlayerMap, Result,
};
use crate::round::{ResultCode, RoundResult};
use crate::rules::Variant;
use crate::selection::{resolve_key, KeyCommand, Selection};

use super::game::{Game, GameStatus};
use super::policy::{PickPolicy, UniformPick};

/// A pick as submitted by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickInput {
    Selection(Selection),
    /// An input key, such as `'r'` for Rock.
    Key(char),
    /// A selection's display name, such as `"Spock"`.
    Name(String),
}

impl From<Selection> for PickInput {
    fn from(selection: Selection) -> Self {
        PickInput::Selection(selection)
    }
}

impl From<char> for PickInput {
    fn from(key: char) -> Self {
        PickInput::Key(key)
    }
}

impl From<&str> for PickInput {
    fn from(name: &str) -> Self {
        PickInput::Name(name.to_string())
    }
}

impl From<String> for PickInput {
    fn from(name: String) -> Self {
        PickInput::Name(name)
    }
}

/// State reported back after every call that can move a round forward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Picks are still being collected.
    pub round_in_progress: bool,
    /// The human whose pick is awaited.
    pub current_player: Option<PlayerId>,
    /// Set once the round has resolved.
    pub result: Option<RoundResult>,
}

/// A best-of-N series of games between the same participants.
pub struct Match {
    config: MatchConfig,
    game: Game,
    scores: PlayerMap<u32>,
    /// 1-based; 0 before the first game starts.
    current_game_number: u32,
    rng: GameRng,
    policy: Box<dyn PickPolicy>,
    /// Result of the most recently resolved round, as reported to callers.
    last_result: Option<RoundResult>,
    winner: Option<PlayerId>,
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("config", &self.config)
            .field("game", &self.game)
            .field("scores", &self.scores)
            .field("current_game_number", &self.current_game_number)
            .field("last_result", &self.last_result)
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}

/// Start a match with a fresh random seed and uniformly random robots.
///
/// ```
/// use rps_engine::{start_match, ResultCode, Selection, VariantKind};
///
/// let mut game = start_match(VariantKind::Basic.variant(), 2, 0, 1).unwrap();
/// game.submit_pick(Selection::Rock).unwrap();
/// let outcome = game.submit_pick('s').unwrap();
///
/// assert_eq!(outcome.result.unwrap().code, ResultCode::MatchOver);
/// ```
pub fn start_match(
    variant: Arc<Variant>,
    human_count: usize,
    robot_count: usize,
    best_of: u32,
) -> Result<Match> {
    Match::start(variant, MatchConfig::new(human_count, robot_count, best_of))
}

impl Match {
    /// Validate `config` and open the first game.
    pub fn start(variant: Arc<Variant>, config: MatchConfig) -> Result<Self> {
        Self::start_with_policy(variant, config, Box::new(UniformPick))
    }

    /// Like [`Match::start`], with a custom robot policy.
    pub fn start_with_policy(
        variant: Arc<Variant>,
        config: MatchConfig,
        policy: Box<dyn PickPolicy>,
    ) -> Result<Self> {
        config.validate()?;

        let humans = config.human_count;
        let players = PlayerMap::new(config.player_count(), |id| {
            if id.index() < humans {
                Player::human(id, format!("Player {}", id.index() + 1))
            } else {
                Player::robot(id, format!("Robot {}", id.index() - humans + 1))
            }
        });

        log::info!(
            "starting {} match: {} humans, {} robots, best of {}",
            variant,
            config.human_count,
            config.robot_count,
            config.best_of
        );

        let mut this = Self {
            scores: PlayerMap::with_value(config.player_count(), 0),
            game: Game::new(variant, players),
            rng: GameRng::new(config.seed),
            config,
            current_game_number: 0,
            policy,
            last_result: None,
            winner: None,
        };
        this.begin_game()?;
        Ok(this)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn variant(&self) -> &Variant {
        self.game.variant()
    }

    #[must_use]
    pub fn best_of(&self) -> u32 {
        self.config.best_of
    }

    #[must_use]
    pub fn wins_needed(&self) -> u32 {
        self.config.wins_needed()
    }

    #[must_use]
    pub fn current_game_number(&self) -> u32 {
        self.current_game_number
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Every participant with their game wins, in index order.
    pub fn scoreboard(&self) -> impl Iterator<Item = (&Player, u32)> {
        self.game
            .players()
            .values()
            .zip(self.scores.values().copied())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn match_winner(&self) -> Option<&Player> {
        self.winner.map(|id| self.game.player(id))
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// RNG checkpoint, for replaying a match from this point.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Rewind or fast-forward the random-selection source to a checkpoint
    /// taken with [`Match::rng_state`].
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
        log::debug!("rng restored to seed {} at word {}", state.seed, state.word_pos);
    }

    /// Where the match currently stands.
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome {
            round_in_progress: self.game.is_round_in_progress(),
            current_player: self.game.current_player_id(),
            result: if self.game.is_round_in_progress() {
                None
            } else {
                self.last_result.clone()
            },
        }
    }

    // === Entry points ===

    /// Submit the current human's pick.
    ///
    /// `Random` is resolved here. Rejected picks leave the match untouched.
    pub fn submit_pick(&mut self, input: impl Into<PickInput>) -> Result<RoundOutcome> {
        if self.is_over() {
            return Err(EngineError::InvalidPickContext("the match is over"));
        }
        if !self.game.is_round_in_progress() {
            return Err(EngineError::InvalidPickContext("no round is in progress"));
        }
        if self.game.current_player().map_or(true, |p| p.is_robot) {
            return Err(EngineError::InvalidPickContext("no human is waiting to pick"));
        }

        let mut selection = self.parse_input(input.into())?;
        if selection == Selection::Random {
            selection = self.game.variant().random_selection(&mut self.rng);
            log::trace!("random pick resolved to {}", selection);
        }

        match self.game.record_pick(selection)? {
            Some(result) => self.conclude_round(result),
            None => self.run_robots()?,
        }
        Ok(self.outcome())
    }

    /// Start the next round after a `PlayAgain` or `Eliminate` result.
    pub fn advance_to_next_round(&mut self) -> Result<RoundOutcome> {
        if self.game.status() != GameStatus::InProgress {
            return Err(EngineError::OutOfSequence("the game is not in progress"));
        }
        self.game.next_round()?;
        self.last_result = None;
        self.run_robots()?;
        Ok(self.outcome())
    }

    /// Start the next game after a `Winner` result.
    pub fn advance_to_next_game(&mut self) -> Result<RoundOutcome> {
        if self.is_over() {
            return Err(EngineError::OutOfSequence("the match is over"));
        }
        if self.game.status() != GameStatus::Finished {
            return Err(EngineError::OutOfSequence("the current game has not finished"));
        }
        self.begin_game()?;
        Ok(self.outcome())
    }

    /// Start a new match with the same participants and a clean scoreboard.
    pub fn restart(&mut self) -> Result<RoundOutcome> {
        for score in self.scores.values_mut() {
            *score = 0;
        }
        self.current_game_number = 0;
        self.winner = None;
        log::info!("match restarted");
        self.begin_game()?;
        Ok(self.outcome())
    }

    // === Internals ===

    fn begin_game(&mut self) -> Result<()> {
        self.current_game_number += 1;
        self.last_result = None;
        log::debug!("game {} of up to {}", self.current_game_number, self.config.best_of);
        self.game.start_game();
        self.run_robots()
    }

    fn run_robots(&mut self) -> Result<()> {
        if let Some(result) = self.game.resolve_robots(self.policy.as_ref(), &mut self.rng)? {
            self.conclude_round(result);
        }
        Ok(())
    }

    fn parse_input(&self, input: PickInput) -> Result<Selection> {
        let selection = match input {
            PickInput::Selection(selection) => selection,
            PickInput::Key(key) => match resolve_key(key) {
                KeyCommand::Select(selection) => selection,
                KeyCommand::Control(_) | KeyCommand::Ignore => {
                    return Err(EngineError::UnknownSelection(key.to_string()));
                }
            },
            PickInput::Name(name) => {
                Selection::by_name(&name).ok_or(EngineError::UnknownSelection(name))?
            }
        };

        if selection != Selection::Random && !self.game.variant().is_valid_selection(selection) {
            return Err(EngineError::UnknownSelection(selection.name().to_string()));
        }
        Ok(selection)
    }

    /// Score a game win and upgrade it to `MatchOver` when it decides the match.
    fn conclude_round(&mut self, mut result: RoundResult) {
        if let Some(winner) = result.winner() {
            self.scores[winner] += 1;
            let score = self.scores[winner];
            log::info!(
                "{} wins game {} ({} of {} needed)",
                self.game.player(winner).name,
                self.current_game_number,
                score,
                self.wins_needed()
            );

            if score >= self.wins_needed() {
                result.code = ResultCode::MatchOver;
                self.winner = Some(winner);
                log::info!("{} wins the match", self.game.player(winner).name);
            }
        }
        self.last_result = Some(result);
    }
}
