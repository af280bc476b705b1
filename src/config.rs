//! Word-search configuration.
//!
//! The defaults reproduce the classic Econome board: a 15x15 grid hiding the
//! sixteen finance terms in [`crate::WORD_SEARCH_WORDS`].

use std::collections::HashSet;

use crate::error::ConfigError;

pub const DEFAULT_GRID_SIZE: usize = 15;
/// Random placement attempts per word before the exhaustive scan kicks in.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;
/// Full regenerations allowed when some word has no legal spot at all.
pub const DEFAULT_MAX_RESTARTS: u32 = 8;
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Shortest word a straight drag can spell.
pub const MIN_WORD_LEN: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WordSearchConfig {
    pub grid_size: usize,
    pub words: Vec<String>,
    pub max_attempts: u32,
    pub max_restarts: u32,
    pub alphabet: String,
}

impl Default for WordSearchConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            words: crate::WORD_SEARCH_WORDS
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_restarts: DEFAULT_MAX_RESTARTS,
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

impl WordSearchConfig {
    /// Config with the default tuning and a custom board.
    pub fn new<I, S>(grid_size: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            grid_size,
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Check the word-list preconditions the generator relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        if self.alphabet.is_empty() || !self.alphabet.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidAlphabet);
        }
        let mut seen = HashSet::with_capacity(self.words.len());
        for word in &self.words {
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(ConfigError::InvalidWord { word: word.clone() });
            }
            if word.len() < MIN_WORD_LEN {
                return Err(ConfigError::WordTooShort {
                    word: word.clone(),
                    min: MIN_WORD_LEN,
                });
            }
            if !seen.insert(word.as_str()) {
                return Err(ConfigError::DuplicateWord { word: word.clone() });
            }
            if word.len() > self.grid_size {
                return Err(ConfigError::WordTooLong {
                    word: word.clone(),
                    len: word.len(),
                    grid_size: self.grid_size,
                });
            }
        }
        Ok(())
    }

    /// Parse a JSON config; absent fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn alphabet_letters(&self) -> Vec<char> {
        self.alphabet.chars().collect()
    }
}
