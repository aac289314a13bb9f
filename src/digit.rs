//! The closed digit alphabet used by targets and guesses.

use std::fmt;

/// Number of symbols in the alphabet
pub const ALPHABET_SIZE: usize = 10;

/// A single symbol from the alphabet `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Every digit of the alphabet, in ascending order
    pub const ALL: [Digit; ALPHABET_SIZE] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (usize::from(value) < ALPHABET_SIZE).then_some(Self(value))
    }

    /// Parse from a character ('0' through '9')
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse every character of `s` as a digit, without any other check.
pub fn parse_digits(s: &str) -> Option<Vec<Digit>> {
    s.chars().map(Digit::from_char).collect()
}

/// Write digits separated by single spaces, e.g. `1 2 3 4`.
pub(crate) fn fmt_digits(digits: &[Digit], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", digit)?;
    }
    Ok(())
}
