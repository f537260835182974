//! Accumulated feedback for a game.
//!
//! This module scores guesses into green/yellow/black information and checks
//! whether a word is still consistent with everything learned so far.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::word::{letter_index, Word};
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// Everything learned about the secret so far.
///
/// A value type: scoring a guess returns a new `Feedback` and leaves the
/// original untouched. Information only accumulates, it is never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    /// Confirmed letter for each position (green)
    green: [Option<u8>; WORD_LENGTH],
    /// Per letter, bit `i` set if the letter is present but not at position `i` (yellow).
    /// A letter is yellow iff its mask is non-zero.
    yellow: [u8; ALPHABET_SIZE],
    /// Bit per letter known to be absent (black)
    black: u32,
}

impl Feedback {
    /// Feedback before any guess has been made.
    pub const EMPTY: Self = Self {
        green: [None; WORD_LENGTH],
        yellow: [0; ALPHABET_SIZE],
        black: 0,
    };

    /// Score `attempt` against `truth`, merging the result on top of `self`.
    ///
    /// Returns whether the attempt was exactly correct along with the merged
    /// feedback. A letter that is not green is yellow whenever it occurs
    /// anywhere in `truth`, without limiting yellows to the number of
    /// unmatched copies of that letter.
    pub fn score(self, truth: Word, attempt: Word) -> (bool, Self) {
        let mut next = self;
        let truth_letters = truth.letters();
        for (i, (&a, &t)) in attempt.letters().iter().zip(truth_letters).enumerate() {
            if a == t {
                next.green[i] = Some(a);
            } else if truth_letters.contains(&a) {
                next.yellow[letter_index(a)] |= 1 << i;
            } else {
                next.black |= 1 << letter_index(a);
            }
        }
        (truth == attempt, next)
    }

    /// Whether `word` could still be the secret given this feedback.
    pub fn matches(&self, word: Word) -> bool {
        let letters = word.letters();

        // Must have green characters in the right places.
        for (c, g) in letters.iter().zip(&self.green) {
            if let Some(g) = g {
                if c != g {
                    return false;
                }
            }
        }

        let present = letter_mask(word);
        if present & self.black != 0 {
            return false;
        }

        // Yellow characters must appear, just not where they were seen.
        for (idx, &positions) in self.yellow.iter().enumerate() {
            if positions == 0 {
                continue;
            }
            if present & (1 << idx) == 0 {
                return false;
            }
            let c = b'a' + idx as u8;
            for (i, &l) in letters.iter().enumerate() {
                if positions & (1 << i) != 0 && l == c {
                    return false;
                }
            }
        }

        true
    }

    /// The words from `words` consistent with this feedback, in order.
    pub fn filter(&self, words: &[Word]) -> Vec<Word> {
        words.iter().copied().filter(|&w| self.matches(w)).collect()
    }

    /// True when `self` holds at least everything `earlier` does.
    pub fn refines(&self, earlier: &Feedback) -> bool {
        let green_kept = self
            .green
            .iter()
            .zip(&earlier.green)
            .all(|(now, before)| before.is_none() || now == before);
        let yellow_kept = self
            .yellow
            .iter()
            .zip(&earlier.yellow)
            .all(|(now, before)| now & before == *before);
        green_kept && yellow_kept && self.black & earlier.black == earlier.black
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Confirmed letters by position.
    pub fn green(&self) -> [Option<char>; WORD_LENGTH] {
        self.green.map(|g| g.map(char::from))
    }

    /// Present letters mapped to the positions they are known not to occupy.
    pub fn yellow(&self) -> BTreeMap<char, BTreeSet<usize>> {
        self.yellow
            .iter()
            .enumerate()
            .filter(|&(_, &positions)| positions != 0)
            .map(|(idx, &positions)| {
                let set = (0..WORD_LENGTH).filter(|&i| positions & (1 << i) != 0).collect();
                ((b'a' + idx as u8) as char, set)
            })
            .collect()
    }

    /// Letters known to be absent.
    pub fn black(&self) -> BTreeSet<char> {
        (0..ALPHABET_SIZE)
            .filter(|&idx| self.black & (1 << idx) != 0)
            .map(|idx| (b'a' + idx as u8) as char)
            .collect()
    }
}

fn letter_mask(word: Word) -> u32 {
    word.letters()
        .iter()
        .fold(0, |mask, &c| mask | 1 << letter_index(c))
}

/// Renders as `_r_n_ a!04 e!2 -xyz`: greens by position, then each yellow
/// letter with its excluded positions, then the black letters.
impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for g in self.green() {
            write!(f, "{}", g.unwrap_or('_'))?;
        }
        for (letter, positions) in self.yellow() {
            write!(f, " {letter}!")?;
            for i in positions {
                write!(f, "{i}")?;
            }
        }
        let black = self.black();
        if !black.is_empty() {
            write!(f, " -{}", black.into_iter().collect::<String>())?;
        }
        Ok(())
    }
}
