//! Error types for the solver.

use std::path::PathBuf;

use thiserror::Error;

use crate::word::Word;

/// Everything that can go wrong while loading words or playing a game.
#[derive(Debug, Error)]
pub enum WordleError {
    /// Text that is not a five letter a-z word
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },

    /// A word list line that failed to parse
    #[error("{}:{line}: {source}", .path.display())]
    WordList {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<WordleError>,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The secret is not in the answer pool
    #[error("{0} is not a valid possible answer")]
    UnknownSecret(Word),

    #[error("no candidates remain to choose a guess for")]
    EmptyCandidates,

    #[error("the guess vocabulary is empty")]
    EmptyVocabulary,

    /// Filtering removed every candidate, including the secret itself.
    #[error("no candidates remain after guessing {guess} in round {round}")]
    Inconsistent { round: usize, guess: Word },
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, WordleError>;
