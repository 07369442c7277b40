//! Library for manipulations on context-free grammars. The grammar keeps its
//! nonterminals in declaration order, and each nonterminal keeps its
//! alternatives in insertion order.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, allow(missing_docs))]

pub mod cfg;
pub mod error;
pub mod record;
pub mod rule_builder;
pub mod rule_ref;
pub mod symbol_bit_set;

pub use crate::cfg::{strip_epsilons, Cfg, Rhs, RhsPropertyMode, Rules};
pub use crate::error::GrammarError;
pub use crate::record::GrammarRecord;
pub use crate::rule_builder::RuleBuilder;
pub use crate::rule_ref::RuleRef;
pub use crate::symbol_bit_set::SymbolBitSet;
pub use cfg_symbol::{Symbol, SymbolName, SymbolSource, EPSILON};

pub(crate) mod local_prelude {
    pub use crate::cfg::{Cfg, Rhs};
    pub use crate::rule_ref::RuleRef;
    pub use crate::symbol_bit_set::SymbolBitSet;
    pub use cfg_symbol::{Symbol, SymbolSource};
}
