//! Left recursion: finding nonterminals whose expansion can begin with
//! themselves, and rewriting grammars so that none can.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod detect;
pub mod eliminate;

pub use crate::detect::LeftRecursion;
pub use crate::eliminate::LeftRecursionEliminator;

use cfg_grammar::Cfg;

/// Extends `Cfg` with left recursion analysis and elimination.
pub trait CfgLeftRecursionExt {
    /// Returns an equivalent grammar without direct or indirect left
    /// recursion. See [`LeftRecursionEliminator`].
    fn eliminate_left_recursion(self) -> Cfg;

    /// Finds left-recursive nonterminals.
    fn left_recursion(&self) -> LeftRecursion<'_>;
}

impl CfgLeftRecursionExt for Cfg {
    fn eliminate_left_recursion(self) -> Cfg {
        LeftRecursionEliminator::new(self).eliminate()
    }

    fn left_recursion(&self) -> LeftRecursion<'_> {
        LeftRecursion::new(self)
    }
}
