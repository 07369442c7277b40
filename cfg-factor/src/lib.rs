//! Simplifications of context-free grammars: factoring of common
//! prefixes, inlining of unit alternatives, normalization of `ε` and
//! merging of identical nonterminals.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod dedup;
pub mod epsilon;
pub mod error;
pub mod inline;
pub mod prefix;

pub use crate::error::FactorError;
pub use crate::prefix::common_prefix;

use cfg_grammar::Cfg;

/// Extends `Cfg` with factoring and normalization passes.
pub trait CfgFactorExt: Sized {
    /// Moves the longest prefix shared by all alternatives of a
    /// nonterminal into a single alternative followed by a fresh
    /// nonterminal `X1`, `X2` and so on, which holds the suffixes.
    ///
    /// Only prefixes common to every alternative are factored. Subsets of
    /// alternatives that share a prefix are left alone.
    fn factor_common_prefixes(self) -> Cfg;

    /// Replaces every alternative made of a single nonterminal with the
    /// alternatives of that nonterminal, until no such alternative is left.
    fn inline_unit_alternatives(self) -> Result<Cfg, FactorError>;

    /// Removes `ε` from alternatives longer than one symbol and keeps at
    /// most one `[ε]` alternative per nonterminal, in last position.
    fn normalize_epsilons(self) -> Cfg;

    /// Merges nonterminals with identical alternatives into the one
    /// declared first, and rewrites references to the merged ones.
    fn deduplicate(self) -> Cfg;

    /// Factors common prefixes, then inlines unit alternatives.
    fn left_factor_and_inline(self) -> Result<Cfg, FactorError> {
        self.factor_common_prefixes().inline_unit_alternatives()
    }
}

impl CfgFactorExt for Cfg {
    fn factor_common_prefixes(self) -> Cfg {
        prefix::factor_common_prefixes(self)
    }

    fn inline_unit_alternatives(self) -> Result<Cfg, FactorError> {
        inline::inline_unit_alternatives(self)
    }

    fn normalize_epsilons(self) -> Cfg {
        epsilon::normalize_epsilons(self)
    }

    fn deduplicate(self) -> Cfg {
        dedup::deduplicate(self)
    }
}
