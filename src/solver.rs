//! Worst-case minimizing guess selection.
//!
//! For every allowed guess the remaining candidates are partitioned by the
//! feedback that guess would produce against each of them. The adversary
//! will put the secret in the biggest partition, so a guess is only as good
//! as the number of candidates it rules out in that case.

use std::cmp::{Ordering, Reverse};
use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::error::{Result, WordleError};
use crate::feedback::Feedback;
use crate::word::Word;

/// Result of analyzing a potential guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessAnalysis {
    pub word: Word,
    /// Candidates ruled out no matter which one is the secret
    pub eliminated: usize,
    /// Size of the largest partition
    pub worst_case: usize,
    pub is_possible_answer: bool,
}

impl GuessAnalysis {
    /// Higher is better. Ties go to guesses that could themselves be correct.
    fn rank_key(&self) -> (usize, bool) {
        (self.eliminated, self.is_possible_answer)
    }
}

/// Chooses guesses for one snapshot of a game.
#[derive(Debug, Clone)]
pub struct GuessSelector<'a> {
    candidates: &'a [Word],
    vocabulary: &'a [Word],
    feedback: Feedback,
    possible: HashSet<Word>,
}

impl<'a> GuessSelector<'a> {
    pub fn new(candidates: &'a [Word], vocabulary: &'a [Word], feedback: Feedback) -> Self {
        Self {
            candidates,
            vocabulary,
            feedback,
            possible: candidates.iter().copied().collect(),
        }
    }

    pub fn candidates(&self) -> &[Word] {
        self.candidates
    }

    /// Group the candidates by the feedback `guess` would produce.
    ///
    /// A candidate equal to `guess` would end the game, so it is left out of
    /// every partition.
    pub fn partition(&self, guess: Word) -> HashMap<Feedback, Vec<Word>> {
        let mut partitions: HashMap<Feedback, Vec<Word>> = HashMap::new();
        for &candidate in self.candidates {
            let (is_correct, next) = self.feedback.score(candidate, guess);
            if !is_correct {
                partitions.entry(next).or_default().push(candidate);
            }
        }
        partitions
    }

    pub fn analyze(&self, guess: Word) -> GuessAnalysis {
        let mut sizes: HashMap<Feedback, usize> = HashMap::new();
        for &candidate in self.candidates {
            let (is_correct, next) = self.feedback.score(candidate, guess);
            if !is_correct {
                *sizes.entry(next).or_default() += 1;
            }
        }
        let worst_case = sizes.values().copied().max().unwrap_or(0);

        GuessAnalysis {
            word: guess,
            eliminated: self.candidates.len() - worst_case,
            worst_case,
            is_possible_answer: self.possible.contains(&guess),
        }
    }

    /// The guess with the highest guaranteed elimination.
    ///
    /// Among equal scores a possible answer wins, then the guess that comes
    /// first in the vocabulary.
    pub fn best_guess(&self) -> Result<GuessAnalysis> {
        self.check_inputs()?;
        self.vocabulary
            .par_iter()
            .enumerate()
            .map(|(i, &word)| (self.analyze(word), i))
            .max_by_key(|(analysis, i)| (analysis.rank_key(), Reverse(*i)))
            .map(|(analysis, _)| analysis)
            .ok_or(WordleError::EmptyVocabulary)
    }

    /// The `n` best guesses, best first, in the same order `best_guess` uses.
    pub fn rank(&self, n: usize) -> Result<Vec<GuessAnalysis>> {
        self.check_inputs()?;
        let mut analyses: Vec<GuessAnalysis> = self
            .vocabulary
            .par_iter()
            .map(|&word| self.analyze(word))
            .collect();

        // Stable, so vocabulary order decides what is left tied.
        analyses.sort_by(|a, b| compare_rank(b, a));
        analyses.truncate(n);
        Ok(analyses)
    }

    fn check_inputs(&self) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(WordleError::EmptyCandidates);
        }
        if self.vocabulary.is_empty() {
            return Err(WordleError::EmptyVocabulary);
        }
        Ok(())
    }
}

fn compare_rank(a: &GuessAnalysis, b: &GuessAnalysis) -> Ordering {
    a.rank_key().cmp(&b.rank_key())
}
