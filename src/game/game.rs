//! One game: rounds of picks until a single player remains.
//!
//! ```text
//! NotStarted --start_game--> InProgress --(Winner)--> Finished
//!
//! InProgress:
//!   AwaitingPicks --(last pick)--> evaluate + eliminate --> Resolved
//!   Resolved --next_round--> AwaitingPicks
//! ```
//!
//! Picks are collected one player at a time in index order, skipping
//! eliminated players. Robots are resolved through a [`PickPolicy`] as soon
//! as their turn comes up.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRng, Player, PlayerId, PlayerMap, Result};
use crate::round::{ResultCode, RoundData, RoundEvaluation, RoundEvaluator, RoundResult};
use crate::rules::Variant;
use crate::selection::Selection;

use super::policy::PickPolicy;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished,
}

/// Where the current round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for in-game players to pick.
    AwaitingPicks,
    /// Evaluated; the result is the last entry of the history.
    Resolved,
}

/// A single game between a fixed set of participants.
#[derive(Clone, Debug)]
pub struct Game {
    variant: Arc<Variant>,
    players: PlayerMap<Player>,
    status: GameStatus,
    /// Zero-based.
    round_number: u32,
    phase: RoundPhase,
    /// Next player to pick, while `phase` is `AwaitingPicks`.
    current_player: Option<PlayerId>,
    /// Results of the rounds played so far in this game.
    history: Vector<RoundResult>,
}

impl Game {
    #[must_use]
    pub fn new(variant: Arc<Variant>, players: PlayerMap<Player>) -> Self {
        Self {
            variant,
            players,
            status: GameStatus::NotStarted,
            round_number: 0,
            phase: RoundPhase::AwaitingPicks,
            current_player: None,
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The player whose pick is awaited.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_player.map(|id| &self.players[id])
    }

    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.current_player
    }

    #[must_use]
    pub fn history(&self) -> &Vector<RoundResult> {
        &self.history
    }

    /// Most recent round result of this game.
    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.history.last()
    }

    /// Players still in the game, in index order.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.values().filter(|p| p.in_game)
    }

    #[must_use]
    pub fn active_player_count(&self) -> usize {
        self.active_players().count()
    }

    /// Whether picks are being collected.
    #[must_use]
    pub fn is_round_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress && self.phase == RoundPhase::AwaitingPicks
    }

    // === Transitions ===

    /// Start (or restart) the game: everyone back in, round zero.
    pub fn start_game(&mut self) {
        for player in self.players.values_mut() {
            player.in_game = true;
            player.selection = Selection::None;
        }
        self.status = GameStatus::InProgress;
        self.round_number = 0;
        self.history = Vector::new();
        log::debug!("game started with {} players", self.players.player_count());
        self.begin_round();
    }

    /// Move on from a resolved round that did not end the game.
    pub fn next_round(&mut self) -> Result<()> {
        if self.status != GameStatus::InProgress || self.phase != RoundPhase::Resolved {
            return Err(EngineError::OutOfSequence(
                "the next round starts only after a round is resolved",
            ));
        }
        self.round_number += 1;
        self.begin_round();
        Ok(())
    }

    /// Mark the game finished.
    pub fn end_game(&mut self) {
        self.status = GameStatus::Finished;
        self.current_player = None;
        log::debug!("game finished after {} rounds", self.round_number + 1);
    }

    fn begin_round(&mut self) {
        for player in self.players.values_mut().filter(|p| p.in_game) {
            player.selection = Selection::None;
        }
        self.phase = RoundPhase::AwaitingPicks;
        self.current_player = self.next_awaiting();
        log::trace!("round {} begins", self.round_number);
    }

    fn next_awaiting(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.awaiting_pick())
            .map(|(id, _)| id)
    }

    // === Picks ===

    /// Record the current player's pick.
    ///
    /// Returns the round result once the last in-game player has picked.
    /// A rejected pick leaves the game untouched.
    pub fn record_pick(&mut self, selection: Selection) -> Result<Option<RoundResult>> {
        if !self.is_round_in_progress() {
            return Err(EngineError::InvalidPickContext("no round is in progress"));
        }
        if selection == Selection::Random {
            return Err(EngineError::InvalidPickContext(
                "a random pick must be resolved before it is recorded",
            ));
        }
        if !self.variant.is_valid_selection(selection) {
            return Err(EngineError::UnknownSelection(selection.name().to_string()));
        }
        let Some(player) = self.current_player else {
            return Err(EngineError::InvalidPickContext("no player is waiting to pick"));
        };

        self.players[player].selection = selection;
        log::trace!("{} picked {}", self.players[player].name, selection);

        self.current_player = self.next_awaiting();
        if self.current_player.is_some() {
            return Ok(None);
        }
        self.resolve_round().map(Some)
    }

    /// Let robots pick until a human is up or the round resolves.
    ///
    /// A policy answer the variant does not offer is replaced by a uniform draw.
    pub fn resolve_robots(
        &mut self,
        policy: &dyn PickPolicy,
        rng: &mut GameRng,
    ) -> Result<Option<RoundResult>> {
        while self.is_round_in_progress() {
            let Some(id) = self.current_player else {
                break;
            };
            let player = &self.players[id];
            if !player.is_robot {
                break;
            }

            let mut pick = policy.choose(&self.variant, player, rng);
            if !self.variant.is_valid_selection(pick) {
                if pick != Selection::Random {
                    log::warn!(
                        "{} chose {}, which {} does not offer; picking at random",
                        player.name,
                        pick,
                        self.variant
                    );
                }
                pick = self.variant.random_selection(rng);
            }
            if let Some(result) = self.record_pick(pick)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    // === Evaluation ===

    /// Picks of the in-game players, in index order.
    #[must_use]
    pub fn picks(&self) -> Vec<(PlayerId, Selection)> {
        self.players
            .iter()
            .filter(|(_, p)| p.in_game)
            .map(|(id, p)| (id, p.selection))
            .collect()
    }

    /// Evaluate the current picks without changing anything.
    pub fn evaluate(&self) -> Result<RoundEvaluation> {
        RoundEvaluator::new(&self.variant).evaluate(&self.picks())
    }

    fn resolve_round(&mut self) -> Result<RoundResult> {
        let picks = self.picks();
        let evaluation = RoundEvaluator::new(&self.variant).evaluate(&picks)?;
        let result = self.apply_evaluation(picks, evaluation);

        self.phase = RoundPhase::Resolved;
        self.history.push_back(result.clone());
        if result.code == ResultCode::Winner {
            self.end_game();
        }
        Ok(result)
    }

    /// Knock out every in-game player who picked an eliminated loser.
    fn apply_evaluation(
        &mut self,
        picks: Vec<(PlayerId, Selection)>,
        evaluation: RoundEvaluation,
    ) -> RoundResult {
        let mut eliminated: Vec<PlayerId> = Vec::new();

        for contest in &evaluation.eliminated {
            for (id, player) in self.players.iter_mut() {
                if player.in_game && player.selection == contest.loser() {
                    player.in_game = false;
                    eliminated.push(id);
                }
            }
        }
        eliminated.sort_unstable();

        let remaining: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|(_, p)| p.in_game)
            .map(|(id, _)| id)
            .collect();

        let (code, data) = match (evaluation.code, remaining.as_slice()) {
            (ResultCode::PlayAgain, _) => (ResultCode::PlayAgain, RoundData::None),
            (_, &[winner]) => {
                log::info!("{} wins the game", self.players[winner].name);
                (ResultCode::Winner, RoundData::Winner(winner))
            }
            _ => (ResultCode::Eliminate, RoundData::Eliminated(eliminated)),
        };

        log::debug!(
            "round {}: {:?}, {} players remain",
            self.round_number,
            code,
            remaining.len()
        );

        RoundResult {
            code,
            round_number: self.round_number,
            player_selections: picks,
            counts: evaluation.counts,
            eliminated_contests: evaluation.eliminated,
            data,
            explanation: evaluation.explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::UniformPick;
    use crate::rules::VariantKind;

    fn humans(count: u8) -> PlayerMap<Player> {
        PlayerMap::new(count as usize, |id| Player::human(id, format!("Player {}", id.0 + 1)))
    }

    fn basic_game(count: u8) -> Game {
        let mut game = Game::new(VariantKind::Basic.variant(), humans(count));
        game.start_game();
        game
    }

    #[test]
    fn test_new_game_not_started() {
        let game = Game::new(VariantKind::Basic.variant(), humans(2));
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert!(!game.is_round_in_progress());
        assert!(game.current_player().is_none());
    }

    #[test]
    fn test_start_game() {
        let game = basic_game(3);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.round_number(), 0);
        assert_eq!(game.current_player_id(), Some(PlayerId::new(0)));
        assert_eq!(game.active_player_count(), 3);
    }

    #[test]
    fn test_picks_advance_cursor() {
        let mut game = basic_game(3);

        assert_eq!(game.record_pick(Selection::Rock).unwrap(), None);
        assert_eq!(game.current_player_id(), Some(PlayerId::new(1)));

        assert_eq!(game.record_pick(Selection::Rock).unwrap(), None);
        assert_eq!(game.current_player_id(), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_tie_plays_again() {
        let mut game = basic_game(2);
        game.record_pick(Selection::Paper).unwrap();
        let result = game.record_pick(Selection::Paper).unwrap().unwrap();

        assert_eq!(result.code, ResultCode::PlayAgain);
        assert_eq!(result.data, RoundData::None);
        assert_eq!(game.phase(), RoundPhase::Resolved);
        assert_eq!(game.active_player_count(), 2);

        game.next_round().unwrap();
        assert_eq!(game.round_number(), 1);
        assert_eq!(game.current_player_id(), Some(PlayerId::new(0)));
        assert!(game.players().values().all(|p| p.selection == Selection::None));
    }

    #[test]
    fn test_eliminate_then_skip_eliminated_player() {
        let mut game = basic_game(3);
        game.record_pick(Selection::Rock).unwrap();
        game.record_pick(Selection::Rock).unwrap();
        let result = game.record_pick(Selection::Scissors).unwrap().unwrap();

        assert_eq!(result.code, ResultCode::Eliminate);
        assert_eq!(result.eliminated_players(), &[PlayerId::new(2)]);
        assert_eq!(game.active_player_count(), 2);

        game.next_round().unwrap();
        game.record_pick(Selection::Paper).unwrap();
        let result = game.record_pick(Selection::Rock).unwrap().unwrap();

        assert_eq!(result.code, ResultCode::Winner);
        assert_eq!(result.winner(), Some(PlayerId::new(0)));
        assert_eq!(result.player_selections.len(), 2);
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_rejected_pick_leaves_state() {
        let mut game = basic_game(2);

        let err = game.record_pick(Selection::Lizard).unwrap_err();
        assert_eq!(err, EngineError::UnknownSelection("Lizard".to_string()));

        let err = game.record_pick(Selection::Random).unwrap_err();
        assert!(matches!(err, EngineError::InvalidPickContext(_)));

        assert_eq!(game.current_player_id(), Some(PlayerId::new(0)));
        assert_eq!(game.player(PlayerId::new(0)).selection, Selection::None);
    }

    #[test]
    fn test_pick_after_resolution_rejected() {
        let mut game = basic_game(2);
        game.record_pick(Selection::Rock).unwrap();
        game.record_pick(Selection::Rock).unwrap();

        let err = game.record_pick(Selection::Paper).unwrap_err();
        assert!(matches!(err, EngineError::InvalidPickContext(_)));
    }

    #[test]
    fn test_next_round_out_of_sequence() {
        let mut game = basic_game(2);
        assert!(matches!(game.next_round(), Err(EngineError::OutOfSequence(_))));
    }

    #[test]
    fn test_restart_restores_players() {
        let mut game = basic_game(2);
        game.record_pick(Selection::Rock).unwrap();
        game.record_pick(Selection::Scissors).unwrap();
        assert_eq!(game.status(), GameStatus::Finished);

        game.start_game();
        assert_eq!(game.active_player_count(), 2);
        assert!(game.history().is_empty());
        assert!(game.is_round_in_progress());
    }

    #[test]
    fn test_robots_pick_immediately() {
        let players = PlayerMap::new(3, |id| {
            if id.0 == 1 {
                Player::human(id, "Ada")
            } else {
                Player::robot(id, format!("Robot {}", id.0))
            }
        });
        let mut game = Game::new(VariantKind::BigBang.variant(), players);
        game.start_game();

        let mut rng = GameRng::new(1);
        let result = game.resolve_robots(&UniformPick, &mut rng).unwrap();

        assert!(result.is_none());
        assert_eq!(game.current_player_id(), Some(PlayerId::new(1)));
        assert!(game.player(PlayerId::new(0)).selection.is_playable());
        assert_eq!(game.player(PlayerId::new(2)).selection, Selection::None);
    }

    #[test]
    fn test_robot_answer_outside_variant_is_redrawn() {
        struct Always(Selection);
        impl PickPolicy for Always {
            fn choose(&self, _: &Variant, _: &Player, _: &mut GameRng) -> Selection {
                self.0
            }
        }

        let players = PlayerMap::new(2, |id| Player::robot(id, format!("Robot {}", id.0 + 1)));
        let mut game = Game::new(VariantKind::Basic.variant(), players);
        game.start_game();

        let mut rng = GameRng::new(3);
        let result = game.resolve_robots(&Always(Selection::Spock), &mut rng).unwrap().unwrap();

        for (_, pick) in &result.player_selections {
            assert!(game.variant().is_valid_selection(*pick));
        }
        assert_eq!(game.phase(), RoundPhase::Resolved);
    }

    #[test]
    fn test_evaluate_is_side_effect_free() {
        let mut game = basic_game(2);
        game.record_pick(Selection::Rock).unwrap();

        // Player 1 has not picked yet
        assert!(matches!(game.evaluate(), Err(EngineError::InvalidPickContext(_))));
        assert!(game.is_round_in_progress());
    }
}
