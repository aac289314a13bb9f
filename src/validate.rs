//! Structural checks on raw guesses.
//!
//! [`validate_guess`] reports every rule a raw input breaks. It is the gate
//! in front of the session: [`Guess::parse`] only hands out guesses that
//! pass it. The evaluator itself never validates.

use std::collections::HashSet;
use std::fmt;

use crate::digit::{fmt_digits, Digit};
use crate::error::GameError;

/// Which submission rules a raw guess breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessValidation {
    pub incorrect_length: bool,
    pub unknown_digit: bool,
    pub duplicate_digit: bool,
}

/// One rule of the submission checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The guess has exactly the target's length
    ExactLength,
    /// Only characters `0` to `9`
    KnownDigits,
    /// Every character differs from the others
    UniqueDigits,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::ExactLength, Rule::KnownDigits, Rule::UniqueDigits];

    /// Checklist wording for a guess of `required_length` digits
    pub fn describe(self, required_length: usize) -> String {
        match self {
            Rule::ExactLength => format!("The length must be exactly {}", required_length),
            Rule::KnownDigits => "Only digits from 0 to 9".to_string(),
            Rule::UniqueDigits => "Every digit ought to be different".to_string(),
        }
    }
}

impl GuessValidation {
    pub fn is_submittable(&self) -> bool {
        !self.incorrect_length && !self.unknown_digit && !self.duplicate_digit
    }

    /// Whether the guess satisfies `rule`
    pub fn passes(&self, rule: Rule) -> bool {
        match rule {
            Rule::ExactLength => !self.incorrect_length,
            Rule::KnownDigits => !self.unknown_digit,
            Rule::UniqueDigits => !self.duplicate_digit,
        }
    }

    pub fn violations(&self) -> Vec<Rule> {
        Rule::ALL
            .into_iter()
            .filter(|rule| !self.passes(*rule))
            .collect()
    }
}

impl fmt::Display for GuessValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut problems = Vec::new();
        if self.incorrect_length {
            problems.push("incorrect length");
        }
        if self.unknown_digit {
            problems.push("unknown digit");
        }
        if self.duplicate_digit {
            problems.push("duplicate digit");
        }
        if problems.is_empty() {
            f.write_str("ok")
        } else {
            f.write_str(&problems.join(", "))
        }
    }
}

/// Check `raw_input` against the length, alphabet and uniqueness rules.
///
/// Length counts characters, not bytes. Uniqueness applies to any
/// character, so `"aa12"` is flagged both unknown and duplicate.
pub fn validate_guess(raw_input: &str, required_length: usize) -> GuessValidation {
    let mut report = GuessValidation {
        incorrect_length: raw_input.chars().count() != required_length,
        ..GuessValidation::default()
    };

    let mut seen = HashSet::new();
    for c in raw_input.chars() {
        if Digit::from_char(c).is_none() {
            report.unknown_digit = true;
        }
        if !seen.insert(c) {
            report.duplicate_digit = true;
        }
        if report.unknown_digit && report.duplicate_digit {
            break;
        }
    }

    report
}

/// The digits a player submits for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess(Vec<Digit>);

impl Guess {
    /// Wrap digits as-is. Nothing is checked, so duplicates and odd lengths
    /// get through; the evaluator copes with both.
    pub fn from_digits(digits: Vec<Digit>) -> Self {
        Self(digits)
    }

    /// Validate a raw input and turn it into a guess.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(raw_input: &str, required_length: usize) -> Result<Self, GameError> {
        let input = raw_input.trim();
        let report = validate_guess(input, required_length);
        if !report.is_submittable() {
            return Err(GameError::InvalidGuess(report));
        }
        // Submittable input only holds known digits.
        let digits = input.chars().filter_map(Digit::from_char).collect();
        Ok(Self(digits))
    }

    pub fn digits(&self) -> &[Digit] {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_digits(&self.0, f)
    }
}
