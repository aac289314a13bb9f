//! Feedback calculation for guesses.
//!
//! This module scores a guess against the target: how many digits sit in the
//! right place and how many exist in the target but elsewhere.

use std::fmt;

use crate::digit::Digit;
use crate::target::Target;

/// Represents the feedback for a single guess position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Same digit as the target at this position
    RightPlaced,
    /// Digit is in the target, at another position
    Misplaced,
    /// Digit is not in the target
    Absent,
}

impl Feedback {
    /// Classify the guess digit at `index`.
    ///
    /// A position past the end of the target never matches, but the digit
    /// can still be misplaced.
    pub fn classify(guess_digit: Digit, index: usize, target: &[Digit]) -> Self {
        if target.get(index) == Some(&guess_digit) {
            Feedback::RightPlaced
        } else if target.contains(&guess_digit) {
            Feedback::Misplaced
        } else {
            Feedback::Absent
        }
    }

    /// Convert to a peg character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::RightPlaced => '●',
            Feedback::Misplaced => '○',
            Feedback::Absent => '·',
        }
    }
}

/// Score of one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TurnResult {
    pub digits_right_placed: usize,
    pub digits_misplaced: usize,
}

impl TurnResult {
    /// True when every position of a target of `target_length` matched and
    /// nothing was left over.
    pub fn is_winner(&self, target_length: usize) -> bool {
        self.digits_right_placed == target_length && self.digits_misplaced == 0
    }

    /// Pegs for this result, right-placed first, padded to `target_length`
    pub fn to_peg_string(self, target_length: usize) -> String {
        let scored = self.digits_right_placed + self.digits_misplaced;
        std::iter::repeat(Feedback::RightPlaced.to_char())
            .take(self.digits_right_placed)
            .chain(std::iter::repeat(Feedback::Misplaced.to_char()).take(self.digits_misplaced))
            .chain(
                std::iter::repeat(Feedback::Absent.to_char())
                    .take(target_length.saturating_sub(scored)),
            )
            .collect()
    }
}

impl fmt::Display for TurnResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in place, {} misplaced",
            self.digits_right_placed, self.digits_misplaced
        )
    }
}

/// Score `guess` against `target`.
///
/// Misplaced digits are an existence check, not a count: a digit repeated in
/// the guess is counted every time it is misplaced, even if the target holds
/// it once. Validated guesses never repeat digits, so this only shows when
/// the validator is bypassed.
pub fn evaluate_guess(guess: &[Digit], target: &[Digit]) -> TurnResult {
    guess
        .iter()
        .enumerate()
        .fold(TurnResult::default(), |mut result, (i, &digit)| {
            match Feedback::classify(digit, i, target) {
                Feedback::RightPlaced => result.digits_right_placed += 1,
                Feedback::Misplaced => result.digits_misplaced += 1,
                Feedback::Absent => {}
            }
            result
        })
}

/// Check if `result` is a win against `target`
pub fn is_winner(target: &Target, result: &TurnResult) -> bool {
    result.is_winner(target.len())
}
