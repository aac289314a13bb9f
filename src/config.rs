//! Game configuration.

use crate::digit::ALPHABET_SIZE;
use crate::error::GameError;
use crate::{TARGET_LENGTH, TURN_LIMIT};

/// Target length and turn budget for a game.
///
/// Built through [`GameConfig::new`], so a session never holds a target
/// length the alphabet cannot satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    target_length: usize,
    turn_limit: usize,
}

impl GameConfig {
    pub fn new(target_length: usize, turn_limit: usize) -> Result<Self, GameError> {
        if target_length == 0 {
            return Err(GameError::config("target length must be at least 1"));
        }
        if target_length > ALPHABET_SIZE {
            return Err(GameError::config(format!(
                "target length {} exceeds the alphabet size of {}",
                target_length, ALPHABET_SIZE
            )));
        }
        if turn_limit == 0 {
            return Err(GameError::config("turn limit must be at least 1"));
        }
        Ok(Self {
            target_length,
            turn_limit,
        })
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn turn_limit(&self) -> usize {
        self.turn_limit
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_length: TARGET_LENGTH,
            turn_limit: TURN_LIMIT,
        }
    }
}
