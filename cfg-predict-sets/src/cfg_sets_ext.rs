//! Shortcuts for computing predict sets of a grammar.

use cfg_grammar::Cfg;

use crate::{FirstSets, FollowSets};

/// Extends `Cfg` with FIRST and FOLLOW set computation.
pub trait CfgSetsExt {
    /// Computes FIRST sets of all nonterminals.
    fn first_sets(&self) -> FirstSets;
    /// Computes FIRST sets, then FOLLOW sets of all nonterminals.
    fn follow_sets(&self) -> FollowSets;
    /// Computes FOLLOW sets of all nonterminals with the given FIRST sets.
    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets;
}

impl CfgSetsExt for Cfg {
    fn first_sets(&self) -> FirstSets {
        FirstSets::new(self)
    }

    fn follow_sets(&self) -> FollowSets {
        FollowSets::new(self, &self.first_sets())
    }

    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets {
        FollowSets::new(self, first_sets)
    }
}
