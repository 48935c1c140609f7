//! Turn orchestration.
//!
//! `Match` runs the turn state machine:
//!
//! ```text
//! AwaitingMove(p) --move applied--> GameOver { loser: p }      (table empty)
//!                 --move applied--> AwaitingMove(other(p))     (otherwise)
//! ```
//!
//! The applied step is not a resting phase; it is reported to the driver
//! as the `TurnOutcome` returned by each turn.

use log::{debug, info};

use crate::core::{
    GameConfig, GameError, GameState, IllegalState, Move, MoveRecord, Participant, PlayerId,
    PlayerMap, PLAYER_COUNT,
};
use crate::games::ruleset_for;
use crate::rules::{GameResult, Ruleset};
use crate::strategy::Strategy;

use super::source::MoveSource;

/// Where the match stands between turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for this player's move.
    AwaitingMove(PlayerId),
    /// The table is empty; `loser` took the last match.
    GameOver { loser: PlayerId },
}

/// What one turn did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The move that was applied.
    pub record: MoveRecord,

    /// Phase after the move.
    pub phase: TurnPhase,
}

impl TurnOutcome {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver { .. })
    }
}

/// One game between two participants.
pub struct Match<R: Ruleset> {
    rules: R,
    players: PlayerMap<Participant>,
    state: GameState,
    phase: TurnPhase,
    strategy: Box<dyn Strategy>,
}

impl Match<Box<dyn Ruleset>> {
    /// Set a match up from a configuration.
    ///
    /// Resolves the opener (tossing the coin if configured) and picks the
    /// variant's ruleset and strategy.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        let count = config.players.player_count();
        if count != PLAYER_COUNT {
            return Err(IllegalState::PlayerCount(count).into());
        }

        let opener = config.resolve_opener();
        if opener.index() >= PLAYER_COUNT {
            return Err(IllegalState::UnknownPlayer(opener).into());
        }

        info!(
            "{}: {} vs {}, {} opens",
            config.variant.name(),
            config.players[PlayerId::new(0)],
            config.players[PlayerId::new(1)],
            config.players[opener]
        );

        Ok(Self::new(
            ruleset_for(config.variant),
            config.players.clone(),
            opener,
        ))
    }
}

impl<R: Ruleset> Match<R> {
    /// Start a game on the ruleset's initial layout.
    pub fn new(rules: R, players: PlayerMap<Participant>, opener: PlayerId) -> Self {
        assert_eq!(players.player_count(), PLAYER_COUNT, "A match needs exactly 2 players");
        assert!(opener.index() < PLAYER_COUNT, "Opener {opener} has no seat");

        let state = GameState::new(rules.initial_piles(), opener);
        let strategy = rules.strategy();

        Self {
            rules,
            players,
            state,
            phase: TurnPhase::AwaitingMove(opener),
            strategy,
        }
    }

    /// Replace the computer's strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Strategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Participant> {
        &self.players
    }

    #[must_use]
    pub fn participant(&self, player: PlayerId) -> &Participant {
        &self.players[player]
    }

    /// The player to move, or `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::AwaitingMove(player) => Some(player),
            TurnPhase::GameOver { .. } => None,
        }
    }

    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.current_player()
            .is_some_and(|player| self.players[player].is_computer())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            TurnPhase::GameOver { loser } => Some(GameResult { loser }),
            TurnPhase::AwaitingMove(_) => None,
        }
    }

    /// Apply a move for `player`.
    ///
    /// On `GameError::InvalidMove` nothing changes and the same player is
    /// still to move.
    pub fn submit_move(&mut self, player: PlayerId, mv: Move) -> Result<TurnOutcome, GameError> {
        let expected = self.awaiting()?;
        if player != expected {
            return Err(IllegalState::OutOfTurn {
                expected,
                actual: player,
            }
            .into());
        }

        let record = self.rules.apply_move(&mut self.state, mv)?;
        debug!(
            "turn {}: {} {} -> {:?}",
            record.turn,
            self.players[player],
            record.mv,
            self.state.piles().as_slice()
        );

        self.phase = match self.rules.outcome(&self.state) {
            Some(result) => {
                info!(
                    "{} took the last match and lost after {} turns",
                    self.players[result.loser], record.turn
                );
                TurnPhase::GameOver {
                    loser: result.loser,
                }
            }
            None => {
                self.state.pass_turn();
                TurnPhase::AwaitingMove(self.state.active_player())
            }
        };

        Ok(TurnOutcome {
            record,
            phase: self.phase,
        })
    }

    /// Let the strategy move for the computer-controlled current player.
    pub fn play_computer_turn(&mut self) -> Result<TurnOutcome, GameError> {
        let player = self.awaiting()?;
        if !self.players[player].is_computer() {
            return Err(IllegalState::NotComputerControlled(player).into());
        }

        let mv = self.strategy.choose_move(&self.state)?;
        debug!("{} strategy chose {:?}", self.strategy.name(), mv);
        self.submit_move(player, mv)
    }

    /// Play the current turn, asking `source` if the player is human.
    pub fn play_turn(&mut self, source: &mut dyn MoveSource) -> Result<TurnOutcome, GameError> {
        let player = self.awaiting()?;
        if self.players[player].is_computer() {
            return self.play_computer_turn();
        }

        let mv = source.acquire_move(&self.state, player)?;
        self.submit_move(player, mv)
    }

    /// Play turns until the game ends.
    ///
    /// Stops at the first error; a driver that wants to re-prompt on
    /// invalid moves should loop over `play_turn` itself.
    pub fn play_out(&mut self, source: &mut dyn MoveSource) -> Result<GameResult, GameError> {
        loop {
            if let Some(result) = self.result() {
                return Ok(result);
            }
            self.play_turn(source)?;
        }
    }

    fn awaiting(&self) -> Result<PlayerId, IllegalState> {
        match self.phase {
            TurnPhase::AwaitingMove(player) => Ok(player),
            TurnPhase::GameOver { loser } => Err(IllegalState::GameOver { loser }),
        }
    }
}
