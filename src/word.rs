//! Five letter words.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WordleError};
use crate::WORD_LENGTH;

/// A 5 letter word. Each byte is an ascii lowercase letter a-z.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Build a word from bytes known at compile time.
    pub(crate) const fn from_ascii(letters: [u8; WORD_LENGTH]) -> Self {
        let mut i = 0;
        while i < WORD_LENGTH {
            assert!(letters[i].is_ascii_lowercase(), "word must be ascii lowercase");
            i += 1;
        }
        Word(letters)
    }

    /// Parse a word, accepting either case and surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = |reason| WordleError::InvalidWord {
            word: text.to_string(),
            reason,
        };
        let trimmed = text.trim();
        if !trimmed.is_ascii() {
            return Err(invalid("not an ASCII word"));
        }
        let mut letters: [u8; WORD_LENGTH] = trimmed
            .as_bytes()
            .try_into()
            .map_err(|_| invalid("not a five-letter word"))?;
        letters.make_ascii_lowercase();
        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(invalid("not all ASCII letters"));
        }
        Ok(Word(letters))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// True when no letter appears twice.
    pub fn has_distinct_letters(&self) -> bool {
        let mut seen = 0u32;
        for &c in &self.0 {
            let bit = 1 << letter_index(c);
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        true
    }

    pub fn as_str(&self) -> &str {
        // Only ever constructed from ascii lowercase bytes.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// Index of an ascii lowercase letter within the alphabet.
pub(crate) fn letter_index(c: u8) -> usize {
    debug_assert!(c.is_ascii_lowercase());
    (c - b'a') as usize
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Word::parse(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordleError;

    fn try_from(value: &str) -> Result<Self> {
        Word::parse(value)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", self.as_str())
    }
}
