//! Offline search for a good first guess.
//!
//! The first guess does not depend on the secret, so it can be chosen once
//! ahead of time. This favors green over yellow: a word is judged by how many
//! greens it gets in total across the answer pool, then by yellows.
//!
//! Scoring here counts letters the way the real game colors them, where each
//! letter of the truth can only be matched once. That differs from
//! [`Feedback::score`](crate::Feedback::score), which marks every copy of a
//! present letter yellow.

use std::ops::Add;

use rayon::prelude::*;
use tracing::info;

use crate::word::{letter_index, Word};
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// Green and yellow counts for one guess, or a sum of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LetterScore {
    pub green: usize,
    pub yellow: usize,
}

impl Add for LetterScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            green: self.green + other.green,
            yellow: self.yellow + other.yellow,
        }
    }
}

/// Count greens and yellows for `attempt` against `truth`.
///
/// Exact matches are removed from both words first. Each remaining attempt
/// letter is then yellow if an unused copy of it is left in the truth.
pub fn compare(truth: Word, attempt: Word) -> LetterScore {
    let mut truth_remaining = [0u8; ALPHABET_SIZE];
    let mut green = 0;
    for (&t, &a) in truth.letters().iter().zip(attempt.letters()) {
        if t == a {
            green += 1;
        } else {
            truth_remaining[letter_index(t)] += 1;
        }
    }

    let mut yellow = 0;
    for (&t, &a) in truth.letters().iter().zip(attempt.letters()) {
        if t == a {
            continue;
        }
        let count = &mut truth_remaining[letter_index(a)];
        if *count > 0 {
            *count -= 1;
            yellow += 1;
        }
    }

    debug_assert!(green + yellow <= WORD_LENGTH);
    LetterScore { green, yellow }
}

/// Total score of `attempt` summed over every word in `answers`.
pub fn total_score(answers: &[Word], attempt: Word) -> LetterScore {
    answers
        .iter()
        .map(|&truth| compare(truth, attempt))
        .fold(LetterScore::default(), Add::add)
}

/// Every answer with five distinct letters that ties for the best total
/// score, in pool order.
pub fn find_openers(answers: &[Word]) -> Vec<Word> {
    let scored: Vec<(Word, LetterScore)> = answers
        .par_iter()
        .filter(|w| w.has_distinct_letters())
        .map(|&w| (w, total_score(answers, w)))
        .collect();

    let mut best = LetterScore::default();
    let mut words = Vec::new();
    for (word, score) in scored {
        if score > best {
            best = score;
            words = vec![word];
        } else if score == best {
            words.push(word);
        }
    }

    info!(
        event = "openers_found",
        candidates = answers.len(),
        tied = words.len(),
        total_green = best.green,
        total_yellow = best.yellow,
    );
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_add_componentwise() {
        let a = LetterScore { green: 1, yellow: 2 };
        let b = LetterScore { green: 3, yellow: 0 };
        assert_eq!(a + b, LetterScore { green: 4, yellow: 2 });
    }

    #[test]
    fn green_dominates_ordering() {
        let more_green = LetterScore { green: 2, yellow: 0 };
        let more_yellow = LetterScore { green: 1, yellow: 4 };
        assert!(more_green > more_yellow);
    }
}
