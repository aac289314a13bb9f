use thiserror::Error;

use crate::session::GameState;
use crate::validate::GuessValidation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("guess is not submittable: {0}")]
    InvalidGuess(GuessValidation),

    #[error("game is over ({0}), start a new game to keep playing")]
    GameOver(GameState),
}

impl GameError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
