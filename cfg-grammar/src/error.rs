//! Errors raised by the grammar model.

use thiserror::Error;

/// An error that concerns the structure or naming of a grammar.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GrammarError {
    /// A symbol has no name in the grammar's symbol source, so it cannot be
    /// decoded back to its original name.
    #[error("missing name for symbol #{symbol}")]
    MissingSymbolName {
        /// The ID of the offending symbol.
        symbol: usize,
    },
    /// An alternative has no symbols. The empty alternative is spelled `[ε]`.
    #[error("nonterminal `{nonterminal}` has an empty alternative at position {index}")]
    EmptyAlternative {
        /// The name of the nonterminal that holds the alternative.
        nonterminal: String,
        /// Zero-based position of the alternative.
        index: usize,
    },
}
