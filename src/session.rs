//! One game from creation to its outcome.
//!
//! A [`Session`] is a value: every transition consumes it and hands back the
//! next one, so history is only ever appended to.

use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::feedback::{evaluate_guess, is_winner, TurnResult};
use crate::target::{generate_target, Target};
use crate::validate::Guess;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Active,
    Won,
    Lost,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Active)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameState::Active => "active",
            GameState::Won => "won",
            GameState::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// A guess and the feedback it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Guess,
    pub result: TurnResult,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    target: Target,
    history: Vec<Turn>,
    state: GameState,
}

impl Session {
    /// Start a game with a freshly generated target.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let target = generate_target(rng, config.target_length())?;
        debug!(
            target_length = config.target_length(),
            turn_limit = config.turn_limit(),
            "new game"
        );
        Ok(Self::with_target(config, target))
    }

    /// Start a game on a known target.
    pub fn with_target(config: GameConfig, target: Target) -> Self {
        Self {
            config,
            target,
            history: Vec::new(),
            state: GameState::Active,
        }
    }

    /// Play one turn.
    ///
    /// The guess is scored and recorded, then the game is won on a perfect
    /// score or lost once the history reaches the turn limit. The guess is
    /// not validated again here; build it with [`Guess::parse`].
    pub fn submit_guess(mut self, guess: Guess) -> Result<Self, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver(self.state));
        }

        let result = evaluate_guess(guess.digits(), self.target.digits());
        debug!(turn = self.history.len() + 1, %guess, %result, "turn played");
        self.history.push(Turn { guess, result });

        if is_winner(&self.target, &result) {
            self.state = GameState::Won;
        } else if self.history.len() >= self.config.turn_limit() {
            self.state = GameState::Lost;
        }

        if self.state.is_terminal() {
            debug!(state = %self.state, turns = self.history.len(), "game over");
        }
        Ok(self)
    }

    /// Throw this game away and start a new one with the same configuration.
    pub fn restart<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Self, GameError> {
        Self::new(self.config, rng)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// The answer, shown only once the game is lost
    pub fn revealed_target(&self) -> Option<&Target> {
        (self.state == GameState::Lost).then_some(&self.target)
    }

    pub fn turns_remaining(&self) -> usize {
        self.config.turn_limit().saturating_sub(self.history.len())
    }
}
