//! Candidate alternatives for each nonterminal and starting token.

use std::collections::{BTreeMap, BTreeSet};

use cfg_grammar::Cfg;
use cfg_symbol::Symbol;
use log::debug;

/// Maps a nonterminal and a token to every alternative whose first symbol
/// can begin with that token.
///
/// Unlike `LlParseTable`, a cell may hold several alternatives, and only
/// first symbols are looked at: nullable prefixes are not skipped, and
/// FOLLOW sets are not consulted. `ε` is a token here, reached through
/// `[ε]` alternatives.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NextStepTable {
    map: BTreeMap<Symbol, BTreeMap<Symbol, Vec<usize>>>,
}

impl NextStepTable {
    /// Builds the table.
    pub fn new(grammar: &Cfg) -> Self {
        let starts = start_tokens(grammar);
        let mut map: BTreeMap<Symbol, BTreeMap<Symbol, Vec<usize>>> = BTreeMap::new();
        for rule in grammar.rules() {
            let Some(&first) = rule.rhs.first() else {
                continue;
            };
            let tokens = match starts.get(&first) {
                Some(tokens) => tokens.iter().copied().collect(),
                None => vec![first],
            };
            let row = map.entry(rule.lhs).or_default();
            for token in tokens {
                let alternatives = row.entry(token).or_default();
                if alternatives.last() != Some(&rule.alternative) {
                    alternatives.push(rule.alternative);
                }
            }
        }
        debug!("built next step table for {} nonterminals", map.len());
        NextStepTable { map }
    }

    /// Returns the candidate alternatives, in increasing order.
    pub fn get(&self, nonterminal: Symbol, token: Symbol) -> &[usize] {
        self.map
            .get(&nonterminal)
            .and_then(|row| row.get(&token))
            .map(|alternatives| &alternatives[..])
            .unwrap_or(&[])
    }

    /// Iterates over cells as `(nonterminal, token, alternatives)`.
    pub fn cells(&self) -> impl Iterator<Item = (Symbol, Symbol, &[usize])> + '_ {
        self.map.iter().flat_map(|(&nonterminal, row)| {
            row.iter()
                .map(move |(&token, alternatives)| (nonterminal, token, &alternatives[..]))
        })
    }

    /// Iterates over cells with more than one candidate.
    pub fn ambiguous_cells(&self) -> impl Iterator<Item = (Symbol, Symbol, &[usize])> + '_ {
        self.cells().filter(|(_, _, alternatives)| alternatives.len() > 1)
    }
}

/// Tokens that can begin each nonterminal through first symbols, to a fixed
/// point.
fn start_tokens(grammar: &Cfg) -> BTreeMap<Symbol, BTreeSet<Symbol>> {
    let mut starts: BTreeMap<Symbol, BTreeSet<Symbol>> = grammar
        .nonterminals()
        .map(|lhs| (lhs, BTreeSet::new()))
        .collect();
    let mut changed = true;
    while changed {
        changed = false;
        for rule in grammar.rules() {
            let Some(&first) = rule.rhs.first() else {
                continue;
            };
            let tokens: Vec<Symbol> = match starts.get(&first) {
                Some(tokens) => tokens.iter().copied().collect(),
                None => vec![first],
            };
            let entry = starts.entry(rule.lhs).or_default();
            for token in tokens {
                changed |= entry.insert(token);
            }
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_step_table() {
        let mut cfg = Cfg::new();
        let [s, a_, a, b, c, eps] = cfg.syms(["S", "A", "a", "b", "c", "ε"]);
        cfg.rule(s)
            .rhs([a_, b])
            .rhs([c])
            .rhs([a])
            .rule(a_)
            .rhs([a])
            .rhs([]);
        let table = NextStepTable::new(&cfg);
        assert_eq!(table.get(s, a), &[0, 2]);
        assert_eq!(table.get(s, c), &[1]);
        assert_eq!(table.get(s, eps), &[0]);
        assert_eq!(table.get(s, b), &[] as &[usize]);
        assert_eq!(table.get(a_, a), &[0]);
        assert_eq!(table.get(a_, eps), &[1]);
        let ambiguous: Vec<_> = table.ambiguous_cells().collect();
        assert_eq!(ambiguous, vec![(s, a, &[0, 2][..])]);
    }

    #[test]
    fn test_left_recursion_terminates() {
        let mut cfg = Cfg::new();
        let [e, x, plus] = cfg.syms(["E", "x", "+"]);
        cfg.rule(e).rhs([e, plus, x]).rhs([x]);
        let table = NextStepTable::new(&cfg);
        assert_eq!(table.get(e, x), &[0, 1]);
        assert_eq!(table.cells().count(), 1);
    }
}
