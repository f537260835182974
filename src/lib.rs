//! # Wordle Minimax
//!
//! A Wordle player that picks every guess by minimizing the worst case.
//!
//! Each round the solver partitions the remaining candidates by the feedback a
//! guess would produce against each of them, and picks the guess whose largest
//! partition is smallest. Hard mode restricts guesses to words consistent with
//! everything learned so far.

pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod game;
pub mod opener;
pub mod solver;
pub mod word;

pub use dictionary::Dictionary;
pub use error::{Result, WordleError};
pub use feedback::Feedback;
pub use game::{BenchmarkReport, Game, GameConfig, GameReport, GameState, Round, Session};
pub use opener::{compare, find_openers, LetterScore};
pub use solver::{GuessAnalysis, GuessSelector};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet words are drawn from.
pub const ALPHABET_SIZE: usize = 26;
