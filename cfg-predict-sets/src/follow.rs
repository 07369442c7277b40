//! FOLLOW sets.

use std::collections::{BTreeMap, BTreeSet};

use cfg_grammar::Cfg;
use cfg_symbol::Symbol;
use log::debug;

use crate::FirstSets;

/// A terminal that may come next, or `None` for the end of input.
pub type Lookahead = Option<Symbol>;

/// A FOLLOW set.
pub type FollowSet = BTreeSet<Lookahead>;

/// FOLLOW sets.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: BTreeMap<Symbol, FollowSet>,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    pub fn new(grammar: &Cfg, first_sets: &FirstSets) -> Self {
        let mut this = Self::seeded(grammar);
        let mut sweeps = 1;
        while this.propagate(grammar, first_sets) {
            sweeps += 1;
        }
        debug!("computed FOLLOW sets in {} sweeps", sweeps);
        this
    }

    /// Creates empty FOLLOW sets for every nonterminal, except for the start
    /// symbol, which is followed by the end of input.
    pub fn seeded(grammar: &Cfg) -> Self {
        let mut map: BTreeMap<Symbol, FollowSet> = grammar
            .nonterminals()
            .map(|lhs| (lhs, BTreeSet::new()))
            .collect();
        if let Some(start) = grammar.start() {
            map.entry(start).or_default().insert(None);
        }
        FollowSets { map }
    }

    /// Performs a single sweep over all rules and returns whether any
    /// FOLLOW set grew.
    ///
    /// Each alternative is scanned from right to left, carrying the set of
    /// lookaheads that may come after the current position, which starts
    /// as FOLLOW of the LHS. A nonterminal receives this set, then the set
    /// becomes its FIRST set, extended with the previous set if the
    /// nonterminal is nullable. A terminal replaces the set with itself.
    pub fn propagate(&mut self, grammar: &Cfg, first_sets: &FirstSets) -> bool {
        let mut changed = false;
        for rule in grammar.rules() {
            let mut trailing = self.map.get(&rule.lhs).cloned().unwrap_or_default();
            for &sym in rule.rhs.iter().rev() {
                if sym.is_epsilon() {
                    continue;
                }
                if !grammar.is_nonterminal(sym) {
                    trailing.clear();
                    trailing.insert(Some(sym));
                    continue;
                }
                let followed = self.map.entry(sym).or_default();
                let prev_cardinality = followed.len();
                followed.extend(trailing.iter().copied());
                changed |= prev_cardinality != followed.len();

                if let Some(first_set) = first_sets.get(sym) {
                    if !first_set.has_epsilon() {
                        trailing.clear();
                    }
                    trailing.extend(first_set.terminals().map(Some));
                }
            }
        }
        changed
    }

    /// Returns the FOLLOW set of a nonterminal.
    pub fn get(&self, nonterminal: Symbol) -> Option<&FollowSet> {
        self.map.get(&nonterminal)
    }

    /// Iterates over nonterminals and their FOLLOW sets, in order of
    /// symbol IDs.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &FollowSet)> + '_ {
        self.map.iter().map(|(&sym, follow_set)| (sym, follow_set))
    }

    /// Formats the FOLLOW set of a nonterminal with symbol names. The end
    /// of input is displayed as `$`.
    pub fn stringify(&self, grammar: &Cfg, nonterminal: Symbol) -> String {
        self.get(nonterminal)
            .into_iter()
            .flatten()
            .map(|lookahead| stringify_lookahead(grammar, *lookahead))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Formats a lookahead: the name of a terminal, or `$` for the end of input.
pub fn stringify_lookahead(grammar: &Cfg, lookahead: Lookahead) -> String {
    match lookahead {
        Some(terminal) => grammar.stringify_symbols(&[terminal]),
        None => "$".to_string(),
    }
}
