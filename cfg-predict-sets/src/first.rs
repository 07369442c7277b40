//! FIRST sets.

use std::collections::{BTreeMap, BTreeSet};

use cfg_grammar::Cfg;
use cfg_symbol::Symbol;
use log::{debug, trace};

/// The set of terminals that can begin a derivation, along with whether
/// the empty string can be derived.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FirstSet {
    terminals: BTreeSet<Symbol>,
    has_epsilon: bool,
}

impl FirstSet {
    /// Creates an empty FIRST set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The FIRST set of a terminal, which holds only the terminal.
    pub fn terminal(sym: Symbol) -> Self {
        FirstSet {
            terminals: BTreeSet::from([sym]),
            has_epsilon: false,
        }
    }

    /// The FIRST set of `ε`.
    pub fn epsilon() -> Self {
        FirstSet {
            terminals: BTreeSet::new(),
            has_epsilon: true,
        }
    }

    /// Checks whether `ε` is in the set.
    pub fn has_epsilon(&self) -> bool {
        self.has_epsilon
    }

    /// Checks whether a terminal is in the set.
    pub fn contains(&self, terminal: Symbol) -> bool {
        self.terminals.contains(&terminal)
    }

    /// Iterates over terminals in the set, in order of symbol IDs.
    pub fn terminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.terminals.iter().copied()
    }

    /// Returns the number of terminals in the set, not counting `ε`.
    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    /// Checks whether the set has neither terminals nor `ε`.
    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty() && !self.has_epsilon
    }

    /// Adds every member of `other` to this set.
    pub fn union(&mut self, other: &FirstSet) {
        self.terminals.extend(other.terminals.iter().copied());
        self.has_epsilon |= other.has_epsilon;
    }

    /// Formats the set with symbol names, `ε` last.
    pub fn stringify(&self, grammar: &Cfg) -> String {
        let mut syms: Vec<Symbol> = self.terminals().collect();
        if self.has_epsilon {
            syms.push(grammar.epsilon());
        }
        grammar.stringify_symbols(&syms[..])
    }
}

/// Collector of FIRST sets.
#[derive(Clone, Debug, Default)]
pub struct FirstSets {
    map: BTreeMap<Symbol, FirstSet>,
}

/// A slot in the memo arena.
#[derive(Clone, Debug)]
enum Slot {
    Unvisited,
    InProgress,
    Done(FirstSet),
}

struct FirstSetsBuilder<'a> {
    grammar: &'a Cfg,
    arena: Vec<Slot>,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// FIRST of a nonterminal is the union of FIRST of its alternatives.
    /// FIRST of a string of symbols gathers FIRST of each symbol, minus `ε`,
    /// up to the first symbol that is not nullable. If there is no such
    /// symbol, `ε` is in the set as well.
    ///
    /// Results for nonterminals are memoized. A nonterminal that is reached
    /// again while its own set is being computed contributes the empty set,
    /// so the first pass is bounded by the number of nonterminals even when
    /// nonterminals refer to each other through their first symbols. Sets
    /// on such a cycle are then completed by sweeping over all rules until
    /// no set grows.
    pub fn new(grammar: &Cfg) -> Self {
        let mut builder = FirstSetsBuilder {
            grammar,
            arena: vec![Slot::Unvisited; grammar.num_syms()],
        };
        let mut map = BTreeMap::new();
        for lhs in grammar.nonterminals() {
            map.insert(lhs, builder.first_of_nonterminal(lhs));
        }
        let mut this = FirstSets { map };
        let num_sweeps = this.collect_from(grammar);
        debug!(
            "computed FIRST sets of {} nonterminals, {} extra sweeps",
            this.map.len(),
            num_sweeps
        );
        this
    }

    /// Returns the FIRST set of a nonterminal.
    pub fn get(&self, nonterminal: Symbol) -> Option<&FirstSet> {
        self.map.get(&nonterminal)
    }

    /// Returns the FIRST set of any symbol. Symbols other than `ε` and
    /// nonterminals are terminals.
    pub fn first_set_for_symbol(&self, sym: Symbol) -> FirstSet {
        if sym.is_epsilon() {
            FirstSet::epsilon()
        } else if let Some(first_set) = self.map.get(&sym) {
            first_set.clone()
        } else {
            FirstSet::terminal(sym)
        }
    }

    /// Calculates a FIRST set for a string of symbols.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> FirstSet {
        let mut result = FirstSet::new();
        for &sym in string {
            if sym.is_epsilon() {
                continue;
            }
            match self.map.get(&sym) {
                Some(first_set) => {
                    result.terminals.extend(first_set.terminals());
                    if !first_set.has_epsilon {
                        return result;
                    }
                }
                None => {
                    result.terminals.insert(sym);
                    return result;
                }
            }
        }
        result.has_epsilon = true;
        result
    }

    /// Applies `FIRST(A) ⊇ FIRST(α)` for every rule `A ⸬= α` until nothing
    /// changes. Returns the number of sweeps that grew some set.
    fn collect_from(&mut self, grammar: &Cfg) -> usize {
        let mut num_sweeps = 0;
        let mut changed = true;
        while changed {
            changed = false;
            for rule in grammar.rules() {
                let first_set = self.first_set_for_string(rule.rhs);
                let entry = self.map.entry(rule.lhs).or_default();
                let prev = (entry.len(), entry.has_epsilon);
                entry.union(&first_set);
                if prev != (entry.len(), entry.has_epsilon) {
                    trace!("FIRST of {} grew", grammar.stringify_symbols(&[rule.lhs]));
                    changed = true;
                }
            }
            if changed {
                num_sweeps += 1;
            }
        }
        num_sweeps
    }

    /// Iterates over nonterminals and their FIRST sets, in order of
    /// symbol IDs.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &FirstSet)> + '_ {
        self.map.iter().map(|(&sym, first_set)| (sym, first_set))
    }
}

impl<'a> FirstSetsBuilder<'a> {
    fn first_of_nonterminal(&mut self, lhs: Symbol) -> FirstSet {
        match &self.arena[lhs.usize()] {
            Slot::Done(first_set) => return first_set.clone(),
            Slot::InProgress => {
                trace!("FIRST cycle through {}", self.grammar.stringify_symbols(&[lhs]));
                return FirstSet::new();
            }
            Slot::Unvisited => {}
        }
        self.arena[lhs.usize()] = Slot::InProgress;
        let grammar = self.grammar;
        let mut result = FirstSet::new();
        for rhs in grammar.alternatives(lhs).unwrap_or(&[]) {
            let first_set = self.first_of_string(&rhs[..]);
            result.union(&first_set);
        }
        self.arena[lhs.usize()] = Slot::Done(result.clone());
        result
    }

    fn first_of_string(&mut self, string: &[Symbol]) -> FirstSet {
        let mut result = FirstSet::new();
        for &sym in string {
            if sym.is_epsilon() {
                continue;
            }
            let first_set = if self.grammar.is_nonterminal(sym) {
                self.first_of_nonterminal(sym)
            } else {
                FirstSet::terminal(sym)
            };
            result.terminals.extend(first_set.terminals);
            if !first_set.has_epsilon {
                return result;
            }
        }
        result.has_epsilon = true;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn first_of(grammar: &Cfg, first_sets: &FirstSets, name: &str) -> String {
        let sym = grammar.sym_source().get(name).unwrap();
        first_sets.get(sym).unwrap().stringify(grammar)
    }

    #[test]
    fn test_first_sets() {
        let mut cfg = Cfg::new();
        cfg.rule_named("S").rhs_names(["A", "b"]).rhs_names(["c"]);
        cfg.rule_named("A").rhs_names(["a"]).rhs([]);
        let first_sets = FirstSets::new(&cfg);
        assert_eq!(first_of(&cfg, &first_sets, "S"), "b c a");
        assert_eq!(first_of(&cfg, &first_sets, "A"), "a ε");
    }

    #[test]
    fn test_nullable_string() {
        let mut cfg = Cfg::new();
        cfg.rule_named("S").rhs_names(["A", "B"]);
        cfg.rule_named("A").rhs([]);
        cfg.rule_named("B").rhs_names(["b"]).rhs([]);
        let first_sets = FirstSets::new(&cfg);
        assert_eq!(first_of(&cfg, &first_sets, "S"), "b ε");
        let [a, b] = [
            cfg.sym_source().get("A").unwrap(),
            cfg.sym_source().get("B").unwrap(),
        ];
        assert!(first_sets.first_set_for_string(&[a, b]).has_epsilon());
        assert!(first_sets.first_set_for_string(&[]).has_epsilon());
        assert_eq!(first_sets.first_set_for_symbol(cfg.epsilon()), FirstSet::epsilon());
    }

    #[test]
    fn test_left_recursion_terminates() {
        let mut cfg = Cfg::new();
        cfg.rule_named("A").rhs_names(["A", "a"]).rhs_names(["b"]);
        cfg.rule_named("B").rhs_names(["C"]);
        cfg.rule_named("C").rhs_names(["B"]).rhs_names(["c"]);
        let first_sets = FirstSets::new(&cfg);
        assert_eq!(first_of(&cfg, &first_sets, "A"), "b");
        assert_eq!(first_of(&cfg, &first_sets, "B"), "c");
        assert_eq!(first_of(&cfg, &first_sets, "C"), "c");
    }

    #[test]
    fn test_mutual_recursion_is_complete() {
        let mut cfg = Cfg::new();
        cfg.rule_named("S").rhs_names(["T", "s"]).rhs_names(["s"]);
        cfg.rule_named("T").rhs_names(["S", "t"]).rhs_names(["t"]);
        cfg.rule_named("U").rhs_names(["V"]);
        cfg.rule_named("V").rhs_names(["W"]).rhs_names(["v"]);
        cfg.rule_named("W").rhs_names(["U"]).rhs_names(["w"]).rhs([]);
        let first_sets = FirstSets::new(&cfg);
        assert_eq!(first_of(&cfg, &first_sets, "S"), "s t");
        assert_eq!(first_of(&cfg, &first_sets, "T"), "s t");
        assert_eq!(first_of(&cfg, &first_sets, "U"), "v w ε");
        assert_eq!(first_of(&cfg, &first_sets, "V"), "v w ε");
        assert_eq!(first_of(&cfg, &first_sets, "W"), "v w ε");
    }

    #[test]
    fn test_declared_without_alternatives() {
        let mut cfg = Cfg::new();
        let [s, a] = cfg.syms(["S", "A"]);
        cfg.declare(a);
        cfg.rule(s).rhs([a]);
        let first_sets = FirstSets::new(&cfg);
        assert!(first_sets.get(s).unwrap().is_empty());
    }

    #[test_case(&["a", "B"], "a" ; "starts with terminal")]
    #[test_case(&["B", "c"], "c b" ; "nullable prefix")]
    #[test_case(&["B", "B"], "b ε" ; "all nullable")]
    #[test_case(&["S"], "a c b" ; "through alternatives")]
    fn test_first_set_for_string(names: &[&str], expected: &str) {
        let mut cfg = Cfg::new();
        cfg.rule_named("S").rhs_names(["a"]).rhs_names(["B", "c"]);
        cfg.rule_named("B").rhs_names(["b"]).rhs([]);
        let first_sets = FirstSets::new(&cfg);
        let string: Vec<Symbol> = names
            .iter()
            .map(|name| cfg.sym_source().get(name).unwrap())
            .collect();
        assert_eq!(first_sets.first_set_for_string(&string).stringify(&cfg), expected);
    }
}
