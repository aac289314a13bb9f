//! # Number Guesser
//!
//! A digit-guessing game in the spirit of Mastermind.
//!
//! The machine picks a secret number made of distinct digits. Each turn the
//! player submits a guess and learns how many digits are in the right place
//! and how many are present but misplaced. The player wins by finding the
//! number before the turn limit runs out.

pub mod config;
pub mod digit;
pub mod error;
pub mod feedback;
pub mod session;
pub mod target;
pub mod validate;

pub use config::GameConfig;
pub use digit::{Digit, ALPHABET_SIZE};
pub use error::GameError;
pub use feedback::{evaluate_guess, is_winner, TurnResult};
pub use session::{GameState, Session, Turn};
pub use target::{generate_target, Target};
pub use validate::{validate_guess, Guess, GuessValidation};

/// Number of digits in the secret target
pub const TARGET_LENGTH: usize = 4;

/// Number of guesses allowed before the game is lost
pub const TURN_LIMIT: usize = 7;
