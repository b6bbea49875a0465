//! Error types for phone conversion, lexicon construction and alignment.

use crate::phonecodes::alphabet::{Alphabet, Language};

/// A specialized Result type for this crate.
pub type Result<T, E = PhoneError> = std::result::Result<T, E>;

/// The error type for every fallible operation in the crate.
#[derive(Debug, thiserror::Error)]
pub enum PhoneError {
    /// The input contains a substring that no table entry covers.
    #[error("unknown {alphabet} symbol {symbol:?} at position {position} for language {language}")]
    UnknownSymbol {
        symbol: String,
        /// Offset in characters from the start of the input.
        position: usize,
        alphabet: Alphabet,
        language: Language,
    },

    /// No symbol table exists for the alphabet and language.
    #[error("no {alphabet} table for language {language}")]
    UnsupportedLanguage { alphabet: Alphabet, language: Language },

    #[error("word not in lexicon: {0:?}")]
    UnknownWord(String),

    /// The search found nothing within the edit budget.
    #[error("no word sequence within {max_distance} edits")]
    NoCandidates { max_distance: usize },

    #[error("malformed pronunciation for {word:?}: {reason}")]
    MalformedPronunciation { word: String, reason: String },

    #[error("invalid language tag {0:?}, expected three lowercase letters")]
    InvalidLanguage(String),

    #[error("unknown alphabet {0:?}")]
    UnknownAlphabet(String),

    #[error("unknown dictionary type {0:?}")]
    UnknownDictType(String),

    /// A dictionary parameter is not recognized, or its value is unusable.
    #[error("invalid dictionary parameter {key:?}: {msg}")]
    InvalidParam { key: String, msg: String },

    /// A dictionary line could not be parsed.
    #[error("line {line}: {msg}")]
    InvalidFormat { line: usize, msg: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PhoneError {
    pub(crate) fn malformed(word: &str, reason: &str) -> Self {
        PhoneError::MalformedPronunciation {
            word: word.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_format<S: Into<String>>(line: usize, msg: S) -> Self {
        PhoneError::InvalidFormat {
            line,
            msg: msg.into(),
        }
    }
}
