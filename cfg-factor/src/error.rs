//! Errors raised by factoring passes.

use thiserror::Error;

/// An error that prevents a factoring pass from completing.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FactorError {
    /// Unit alternatives form a cycle, such as `A ::= B` and `B ::= A`,
    /// so inlining would never finish.
    #[error("cycle of unit alternatives through nonterminal `{nonterminal}`")]
    InliningCycle {
        /// The name of a nonterminal on the cycle.
        nonterminal: String,
    },
}
