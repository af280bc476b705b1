//! Error types for puzzle configuration, generation and mini-game input.

use derive_more::{Display, From};

/// A word-search configuration that cannot produce a valid puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    /// Grid must have at least one row and column.
    #[display("grid size must be at least 1")]
    EmptyGrid,

    /// Nothing to hide in the grid.
    #[display("word list is empty")]
    EmptyWordList,

    /// Words are made of uppercase letters only.
    #[display("word {word:?} must be non-empty uppercase letters")]
    InvalidWord { word: String },

    /// A drag covers at least two cells, so shorter words could never be found.
    #[display("word {word:?} is shorter than {min} letters")]
    WordTooShort { word: String, min: usize },

    /// The same word appears twice in the list.
    #[display("word {word:?} is listed more than once")]
    DuplicateWord { word: String },

    /// The word cannot fit along any direction.
    #[display("word {word:?} has {len} letters but the grid is {grid_size}x{grid_size}")]
    WordTooLong {
        word: String,
        len: usize,
        grid_size: usize,
    },

    /// Filler alphabet is empty or has non-uppercase characters.
    #[display("filler alphabet must be non-empty uppercase letters")]
    InvalidAlphabet,

    /// Config text could not be parsed.
    #[display("config parse error: {message}")]
    Parse { message: String },
}

impl std::error::Error for ConfigError {}

/// Failure to build a word-search puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum PuzzleError {
    /// Configuration was rejected before generation.
    #[display("invalid configuration: {_0}")]
    Config(ConfigError),

    /// Every candidate position was blocked, even after regenerating.
    #[display("could not place {word:?} after {restarts} full regenerations")]
    #[from(ignore)]
    Unplaceable { word: String, restarts: u32 },
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::Config(err) => Some(err),
            PuzzleError::Unplaceable { .. } => None,
        }
    }
}

/// Invalid input to one of the mini-games.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// The game already reached its end state.
    #[display("game is already over")]
    GameOver,

    /// Index does not name a choice / category / level.
    #[display("{what} index {index} is out of range (0..{len})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A guess was submitted with the wrong number of selected items.
    #[display("select exactly {required} items (have {selected})")]
    IncompleteGuess { required: usize, selected: usize },
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn puzzle_error_wraps_config_error_as_source() {
        let err: PuzzleError = ConfigError::EmptyWordList.into();
        assert_eq!(err.to_string(), "invalid configuration: word list is empty");
        assert!(err.source().is_some());
    }

    #[test]
    fn word_too_long_mentions_dimensions() {
        let err = ConfigError::WordTooLong {
            word: "INTEREST".into(),
            len: 8,
            grid_size: 5,
        };
        assert_eq!(
            err.to_string(),
            "word \"INTEREST\" has 8 letters but the grid is 5x5"
        );
    }
}
