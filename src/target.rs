//! Secret target generation.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::digit::{fmt_digits, Digit, ALPHABET_SIZE};
use crate::error::GameError;

/// The secret sequence of pairwise distinct digits the player has to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target(Vec<Digit>);

impl Target {
    /// Build a target from known digits, rejecting repeated digits.
    pub fn new(digits: Vec<Digit>) -> Result<Self, GameError> {
        let mut seen = [false; ALPHABET_SIZE];
        for digit in &digits {
            let slot = &mut seen[usize::from(digit.value())];
            if *slot {
                return Err(GameError::config(format!(
                    "target digit {} appears more than once",
                    digit
                )));
            }
            *slot = true;
        }
        Ok(Self(digits))
    }

    pub fn digits(&self) -> &[Digit] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_digits(&self.0, f)
    }
}

/// Pick `required_length` distinct digits in random order.
///
/// The whole alphabet is shuffled and its prefix kept, which draws without
/// replacement and makes every ordering equally likely.
pub fn generate_target<R: Rng + ?Sized>(
    rng: &mut R,
    required_length: usize,
) -> Result<Target, GameError> {
    if required_length > ALPHABET_SIZE {
        return Err(GameError::config(format!(
            "target length {} exceeds the alphabet size of {}",
            required_length, ALPHABET_SIZE
        )));
    }

    let mut alphabet = Digit::ALL;
    alphabet.shuffle(rng);
    let target = Target(alphabet[..required_length].to_vec());

    trace!(%target, "generated target");
    Ok(target)
}
