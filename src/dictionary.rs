//! Answer pool and guess vocabulary loading.
//!
//! Both lists are embedded at compile time. Either can be replaced by a file
//! with one word per line.

use std::path::{Path, PathBuf};

use crate::error::{Result, WordleError};
use crate::word::Word;

const ANSWERS: &str = include_str!("../dictionary/answers.txt");
const GUESSES: &str = include_str!("../dictionary/guesses.txt");

/// The two word lists a game is played with.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    vocabulary: Vec<Word>,
}

impl Dictionary {
    /// Build from an answer pool and a list of extra accepted guesses.
    ///
    /// The vocabulary is the sorted union of both, so every answer is also a
    /// legal guess.
    pub fn new(answers: Vec<Word>, extra_guesses: Vec<Word>) -> Self {
        let mut vocabulary: Vec<Word> = answers.iter().copied().chain(extra_guesses).collect();
        vocabulary.sort_unstable();
        vocabulary.dedup();
        Self {
            answers,
            vocabulary,
        }
    }

    /// The lists compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let answers = parse_words(ANSWERS, Path::new("dictionary/answers.txt"))?;
        let guesses = parse_words(GUESSES, Path::new("dictionary/guesses.txt"))?;
        Ok(Self::new(answers, guesses))
    }

    /// Load the lists, reading from the given paths where present and
    /// falling back to the embedded lists otherwise.
    pub fn load(answers: Option<&Path>, guesses: Option<&Path>) -> Result<Self> {
        let answers = match answers {
            Some(path) => read_words(path)?,
            None => parse_words(ANSWERS, Path::new("dictionary/answers.txt"))?,
        };
        let guesses = match guesses {
            Some(path) => read_words(path)?,
            None => parse_words(GUESSES, Path::new("dictionary/guesses.txt"))?,
        };
        Ok(Self::new(answers, guesses))
    }

    /// Words eligible to be the secret.
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Every word accepted as a guess.
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }
}

/// Read a word list file.
pub fn read_words(path: &Path) -> Result<Vec<Word>> {
    let text = std::fs::read_to_string(path).map_err(|source| WordleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_words(&text, path)
}

/// Parse one word per line, skipping blank lines. Order and duplicates are
/// kept as given.
pub fn parse_words(text: &str, origin: &Path) -> Result<Vec<Word>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            Word::parse(line).map_err(|err| WordleError::WordList {
                path: PathBuf::from(origin),
                line: i + 1,
                source: Box::new(err),
            })
        })
        .collect()
}
