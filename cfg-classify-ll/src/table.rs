//! LL(1) parse tables.

use std::collections::BTreeMap;

use cfg_grammar::{Cfg, SymbolBitSet};
use cfg_predict_sets::{stringify_lookahead, CfgSetsExt, Lookahead};
use cfg_symbol::Symbol;
use log::{debug, trace};

/// LL(1) parse table.
///
/// Maps pairs of a nonterminal and a lookahead to the index of the
/// alternative to expand. A lookahead of `None` stands for the end of input.
pub struct LlParseTable<'a> {
    map: BTreeMap<LlParseTableKey, usize>,
    conflicts: Vec<LlConflict>,
    grammar: &'a Cfg,
}

#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
struct LlParseTableKey {
    nonterminal: Symbol,
    terminal: Lookahead,
}

/// Two alternatives of one nonterminal competing for one table cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LlConflict {
    /// The nonterminal.
    pub nonterminal: Symbol,
    /// Index of the alternative that took the cell.
    pub alternative: usize,
    /// Index of the alternative that held the cell before.
    pub previous: usize,
    /// The contested lookahead.
    pub terminal: Lookahead,
}

/// Container for classifying nonterminals as LL(1) or context-free.
#[derive(Debug, Eq, PartialEq)]
pub struct LlClassification {
    classes: BTreeMap<Symbol, LlNonterminalClass>,
}

/// A nonterminal class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LlNonterminalClass {
    /// LL(1) class.
    Ll1,
    /// Context-free class.
    ContextFree,
}

impl<'a> LlParseTable<'a> {
    /// Creates an LL parse table.
    pub fn new(grammar: &'a Cfg) -> Self {
        let mut this = LlParseTable {
            map: BTreeMap::new(),
            conflicts: vec![],
            grammar,
        };
        let first = grammar.first_sets();
        let follow = grammar.follow_sets_with_first(&first);
        // LlParseTable[A,a] contains the rule A → w if and only if
        // a is in FIRST(w) or
        // ε is in FIRST(w) and a is in FOLLOW(A).
        for rule in grammar.rules() {
            let rhs_first_set = first.first_set_for_string(rule.rhs);
            for terminal in rhs_first_set.terminals() {
                this.assign(rule.lhs, Some(terminal), rule.alternative);
            }
            if rhs_first_set.has_epsilon() {
                let lhs_follow_set = follow.get(rule.lhs).cloned().unwrap_or_default();
                for terminal in lhs_follow_set {
                    this.assign(rule.lhs, terminal, rule.alternative);
                }
            }
        }
        debug!(
            "built LL(1) table with {} cells and {} conflicts",
            this.map.len(),
            this.conflicts.len()
        );
        this
    }

    /// Fills a cell. A later alternative wins over an earlier one.
    fn assign(&mut self, nonterminal: Symbol, terminal: Lookahead, alternative: usize) {
        let key = LlParseTableKey {
            nonterminal,
            terminal,
        };
        if let Some(previous) = self.map.insert(key, alternative) {
            if previous != alternative {
                let conflict = LlConflict {
                    nonterminal,
                    alternative,
                    previous,
                    terminal,
                };
                trace!("CONFLICT {}", conflict.render(self.grammar));
                self.conflicts.push(conflict);
            }
        }
    }

    /// Returns the index of the alternative to expand for the given
    /// nonterminal and lookahead.
    pub fn get(&self, nonterminal: Symbol, terminal: Lookahead) -> Option<usize> {
        self.map
            .get(&LlParseTableKey {
                nonterminal,
                terminal,
            })
            .copied()
    }

    /// Iterates over filled cells as `(nonterminal, lookahead, alternative)`.
    pub fn cells(&self) -> impl Iterator<Item = (Symbol, Lookahead, usize)> + '_ {
        self.map
            .iter()
            .map(|(key, &alternative)| (key.nonterminal, key.terminal, alternative))
    }

    /// Returns conflicts in order of detection.
    pub fn conflicts(&self) -> &[LlConflict] {
        &self.conflicts[..]
    }

    /// Checks whether the table was built without conflicts.
    pub fn is_ll1(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Classifies nonterminals as LL(1) or context-free.
    pub fn classify(&self) -> LlClassification {
        let mut result = LlClassification {
            classes: self
                .grammar
                .nonterminals()
                .map(|nonterminal| (nonterminal, LlNonterminalClass::Ll1))
                .collect(),
        };
        let mut property = SymbolBitSet::from_elem(self.grammar, false);
        for conflict in &self.conflicts {
            property.set(conflict.nonterminal, true);
        }
        self.grammar.rhs_closure_for_any(&mut property);
        for (&nonterminal, class) in result.classes.iter_mut() {
            if property[nonterminal] {
                *class = LlNonterminalClass::ContextFree;
            }
        }
        result
    }
}

impl LlConflict {
    /// Formats the conflict as `<nonterminal> -> <alternative> with
    /// terminal <terminal>.`, where the end of input is `$`.
    pub fn render(&self, grammar: &Cfg) -> String {
        let rhs = grammar
            .alternatives(self.nonterminal)
            .and_then(|alternatives| alternatives.get(self.alternative))
            .map(|rhs| grammar.stringify_symbols(&rhs[..]))
            .unwrap_or_default();
        format!(
            "{} -> {} with terminal {}.",
            grammar.stringify_symbols(&[self.nonterminal]),
            rhs,
            stringify_lookahead(grammar, self.terminal)
        )
    }
}

impl LlClassification {
    /// Access classes.
    pub fn classes(&self) -> &BTreeMap<Symbol, LlNonterminalClass> {
        &self.classes
    }
}
