//! The fixed A–Z alphabet the quiz walks through.
//!
//! A [`Letter`] can only hold one of the 26 uppercase ASCII letters, so the
//! state machine never has to deal with out-of-alphabet input. Conversion from
//! raw `char`/`&str` (keyboard events, JS callers) is the only fallible step.

use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// Number of letters in the quiz alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Ordered alphabet, index 0 is the first question.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Index of the last question.
pub const LAST_INDEX: usize = ALPHABET_LEN - 1;

/// One member of [`ALPHABET`], stored as its index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "char", try_from = "char"))]
pub struct Letter(u8);

impl Letter {
    /// Letter at `index`, or `None` past the end of the alphabet.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ALPHABET_LEN).then(|| Letter(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        ALPHABET[self.index()]
    }

    /// All letters in quiz order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = QuizError;

    /// Accepts either case; anything outside A–Z is rejected.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Letter(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(QuizError::InvalidLetter(c))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

impl FromStr for Letter {
    type Err = QuizError;

    /// Parses a single-letter string such as a `KeyboardEvent.key` value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(QuizError::EmptyInput),
            (Some(c), None) => Letter::try_from(c),
            (Some(c), Some(_)) => Err(QuizError::InvalidLetter(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_through_char() {
        for (i, letter) in Letter::all().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(letter.as_char(), ALPHABET[i]);
        }
        assert_eq!(Letter::from_index(LAST_INDEX).map(|l| l.as_char()), Some('Z'));
        assert!(Letter::from_index(ALPHABET_LEN).is_none());
    }

    #[test]
    fn test_parse_accepts_lowercase() {
        assert_eq!("q".parse::<Letter>().unwrap().as_char(), 'Q');
        assert_eq!(" B ".parse::<Letter>().unwrap().as_char(), 'B');
    }

    #[test]
    fn test_parse_rejects_non_letters() {
        assert!(matches!("".parse::<Letter>(), Err(QuizError::EmptyInput)));
        assert!(matches!("7".parse::<Letter>(), Err(QuizError::InvalidLetter('7'))));
        assert!(matches!("Enter".parse::<Letter>(), Err(QuizError::InvalidLetter('E'))));
        assert!(Letter::try_from('é').is_err());
    }
}
