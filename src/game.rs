//! Playing games against a known secret.

use std::borrow::Cow;
use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, error, info, warn};

use crate::dictionary::Dictionary;
use crate::error::{Result, WordleError};
use crate::feedback::Feedback;
use crate::solver::GuessSelector;
use crate::word::Word;

/// Opening guess used when none is given. It does not depend on the secret,
/// so it is computed once offline instead of every game.
pub const DEFAULT_OPENER: Word = Word::from_ascii(*b"aesir");

/// Number of guesses allowed in a standard game.
pub const DEFAULT_MAX_ROUNDS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Only guess words consistent with all feedback so far
    pub hard_mode: bool,
    pub max_rounds: usize,
    /// First guess, played without looking at any feedback
    pub opener: Word,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hard_mode: true,
            max_rounds: DEFAULT_MAX_ROUNDS,
            opener: DEFAULT_OPENER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// `round` is the next round to be played, starting at 1
    Playing { round: usize },
    Won { rounds: usize },
    Exhausted,
}

impl GameState {
    pub fn is_playing(self) -> bool {
        matches!(self, GameState::Playing { .. })
    }
}

/// One guess and what it left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub number: usize,
    pub guess: Word,
    pub is_correct: bool,
    /// Feedback after this guess
    pub feedback: Feedback,
    /// Candidates still consistent after this guess
    pub remaining: Vec<Word>,
}

/// A game in progress against one secret.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    secret: Word,
    config: GameConfig,
    candidates: Cow<'a, [Word]>,
    vocabulary: Cow<'a, [Word]>,
    feedback: Feedback,
    state: GameState,
}

impl<'a> Session<'a> {
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Guesses currently allowed. Narrows each round in hard mode.
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    /// Play the next round. Returns `None` once the game is over.
    pub fn step(&mut self) -> Result<Option<Round>> {
        let GameState::Playing { round } = self.state else {
            return Ok(None);
        };

        let guess = if round == 1 {
            self.config.opener
        } else {
            let analysis =
                GuessSelector::new(&self.candidates, &self.vocabulary, self.feedback).best_guess()?;
            debug!(
                round,
                guess = %analysis.word,
                eliminated = analysis.eliminated,
                worst_case = analysis.worst_case,
                possible_answer = analysis.is_possible_answer,
            );
            analysis.word
        };

        let (is_correct, feedback) = self.feedback.score(self.secret, guess);
        self.feedback = feedback;

        if is_correct {
            self.state = GameState::Won { rounds: round };
            info!(event = "game_won", secret = %self.secret, rounds = round);
            return Ok(Some(Round {
                number: round,
                guess,
                is_correct,
                feedback,
                remaining: vec![guess],
            }));
        }

        let candidates = feedback.filter(&self.candidates);
        if candidates.is_empty() {
            error!(round, guess = %guess, feedback = %feedback, "every candidate was eliminated");
            return Err(WordleError::Inconsistent { round, guess });
        }
        debug_assert!(candidates.contains(&self.secret));
        if self.config.hard_mode {
            self.vocabulary = Cow::Owned(feedback.filter(&self.vocabulary));
        }
        debug!(
            round,
            feedback = %feedback,
            candidates = candidates.len(),
            vocabulary = self.vocabulary.len(),
        );
        self.candidates = Cow::Owned(candidates.clone());

        self.state = if round >= self.config.max_rounds {
            info!(event = "game_exhausted", secret = %self.secret, rounds = round);
            GameState::Exhausted
        } else {
            GameState::Playing { round: round + 1 }
        };

        Ok(Some(Round {
            number: round,
            guess,
            is_correct,
            feedback,
            remaining: candidates,
        }))
    }
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub secret: Word,
    pub rounds: Vec<Round>,
    pub state: GameState,
}

impl GameReport {
    pub fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won { .. })
    }

    pub fn guesses(&self) -> Vec<Word> {
        self.rounds.iter().map(|r| r.guess).collect()
    }
}

/// Outcome of playing every answer in the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkReport {
    /// Games won, keyed by the number of rounds they took
    pub wins: BTreeMap<usize, usize>,
    /// Secrets that were not found in time
    pub exhausted: Vec<Word>,
}

impl BenchmarkReport {
    pub fn games(&self) -> usize {
        self.wins.values().sum::<usize>() + self.exhausted.len()
    }

    /// Mean number of rounds over won games.
    pub fn average_rounds(&self) -> f64 {
        let won: usize = self.wins.values().sum();
        if won == 0 {
            return 0.0;
        }
        let rounds: usize = self.wins.iter().map(|(r, c)| r * c).sum();
        rounds as f64 / won as f64
    }
}

/// The word lists and rules games are played with.
#[derive(Debug, Clone, Copy)]
pub struct Game<'a> {
    answers: &'a [Word],
    vocabulary: &'a [Word],
    config: GameConfig,
}

impl<'a> Game<'a> {
    pub fn new(answers: &'a [Word], vocabulary: &'a [Word], config: GameConfig) -> Self {
        Self {
            answers,
            vocabulary,
            config,
        }
    }

    pub fn with_dictionary(dictionary: &'a Dictionary, config: GameConfig) -> Self {
        Self::new(dictionary.answers(), dictionary.vocabulary(), config)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Begin a game. The secret has to be one of the answers.
    pub fn start(&self, secret: Word) -> Result<Session<'a>> {
        if !self.answers.contains(&secret) {
            return Err(WordleError::UnknownSecret(secret));
        }
        if !self.vocabulary.contains(&self.config.opener) {
            warn!(opener = %self.config.opener, "opener is not in the guess vocabulary");
        }
        info!(
            event = "game_start",
            secret = %secret,
            hard_mode = self.config.hard_mode,
            max_rounds = self.config.max_rounds,
            opener = %self.config.opener,
        );

        let state = if self.config.max_rounds == 0 {
            GameState::Exhausted
        } else {
            GameState::Playing { round: 1 }
        };
        Ok(Session {
            secret,
            config: self.config,
            candidates: Cow::Borrowed(self.answers),
            vocabulary: Cow::Borrowed(self.vocabulary),
            feedback: Feedback::EMPTY,
            state,
        })
    }

    /// Play a whole game.
    pub fn play(&self, secret: Word) -> Result<GameReport> {
        let mut session = self.start(secret)?;
        let mut rounds = Vec::new();
        while let Some(round) = session.step()? {
            rounds.push(round);
        }
        Ok(GameReport {
            secret,
            rounds,
            state: session.state(),
        })
    }

    /// Play every answer as the secret.
    pub fn benchmark(&self) -> Result<BenchmarkReport> {
        let outcomes = self
            .answers
            .par_iter()
            .map(|&secret| self.play(secret).map(|report| (secret, report.state)))
            .collect::<Result<Vec<_>>>()?;

        let mut report = BenchmarkReport::default();
        for (secret, state) in outcomes {
            match state {
                GameState::Won { rounds } => *report.wins.entry(rounds).or_default() += 1,
                _ => report.exhausted.push(secret),
            }
        }
        info!(
            event = "benchmark_end",
            games = report.games(),
            exhausted = report.exhausted.len(),
            average_rounds = report.average_rounds(),
        );
        Ok(report)
    }
}
