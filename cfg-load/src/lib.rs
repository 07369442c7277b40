//! Allows us to load context-free grammars from EBNF listings and from
//! JSON records, and to save them back.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod ebnf;
pub mod json;

pub use crate::ebnf::load_ebnf;
pub use crate::json::{load_json, to_json};

use cfg_grammar::{Cfg, GrammarError};
use thiserror::Error;

/// Represents an error when loading or saving a grammar.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An alternative is not a list of symbol names.
    #[error("nonterminal `{nonterminal}`: alternative {index} is not a list of symbols")]
    MalformedAlternative {
        /// The nonterminal that holds the alternative.
        nonterminal: String,
        /// Zero-based position of the alternative.
        index: usize,
    },
    /// An alternative has no symbols. The empty alternative is spelled `ε`.
    #[error("nonterminal `{nonterminal}`: alternative {index} is empty")]
    EmptyAlternative {
        /// The nonterminal that holds the alternative.
        nonterminal: String,
        /// Zero-based position of the alternative.
        index: usize,
    },
    /// The listing does not follow the `name ::= a b | c` form.
    #[error("parse error at line {line}: {reason}")]
    Syntax {
        /// Line where the error happened.
        ///
        /// One-indexed.
        line: usize,
        /// Human-readable reason for the error.
        reason: String,
    },
    /// The grammar could not be decoded to names.
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    /// The JSON document is invalid.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Extends `Cfg` with loading and saving.
pub trait CfgLoadExt: Sized {
    /// Loads a grammar from an EBNF listing. See [`load_ebnf`].
    fn load(listing: &str) -> Result<Self, LoadError>;

    /// Loads a grammar from JSON records. See [`load_json`].
    fn load_json(json: &str) -> Result<Self, LoadError>;

    /// Saves the grammar as JSON records. See [`to_json`].
    fn to_json(&self) -> Result<String, LoadError>;
}

impl CfgLoadExt for Cfg {
    fn load(listing: &str) -> Result<Self, LoadError> {
        load_ebnf(listing)
    }

    fn load_json(json: &str) -> Result<Self, LoadError> {
        load_json(json)
    }

    fn to_json(&self) -> Result<String, LoadError> {
        to_json(self)
    }
}
