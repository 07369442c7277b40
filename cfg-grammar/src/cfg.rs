//! Definitions of the context-free grammar type and its rules.

use std::fmt::Write;
use std::mem;
use std::rc::Rc;

use indexmap::IndexMap;
use log::trace;

use crate::error::GrammarError;
use crate::local_prelude::*;
use crate::rule_builder::RuleBuilder;

/// The right-hand side of a rule: one alternative of a nonterminal.
pub type Rhs = Rc<[Symbol]>;

/// Nonterminals mapped to their alternatives, in declaration order.
pub type Rules = IndexMap<Symbol, Vec<Rhs>>;

/// Context-free grammar type.
///
/// The grammar is an ordered mapping from nonterminals to their ordered
/// alternatives. A symbol is a nonterminal if and only if it is a key of
/// this mapping. Every other symbol on a right-hand side is a terminal,
/// except for `ε`, which stands for the empty string.
///
/// Declaration order matters: the first declared nonterminal is the start
/// symbol, and some transformations process nonterminals in this order.
#[derive(Clone, Debug, Default)]
pub struct Cfg {
    /// The symbol source.
    sym_source: SymbolSource,
    /// Alternatives of every nonterminal.
    rules: Rules,
}

/// Removes every `ε` from a string of symbols, unless the string is made
/// only of `ε`, in which case it becomes the canonical `[ε]`.
pub fn strip_epsilons(rhs: &[Symbol]) -> Rhs {
    if rhs.len() <= 1 || !rhs.iter().any(|sym| sym.is_epsilon()) {
        return rhs.into();
    }
    let stripped: Vec<Symbol> = rhs.iter().copied().filter(|sym| !sym.is_epsilon()).collect();
    if stripped.is_empty() {
        Rc::from(&[Symbol::epsilon()][..])
    } else {
        stripped.into()
    }
}

/// Used only for [`fn rhs_closure`].
///
/// [`fn rhs_closure`]: Cfg::rhs_closure
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum RhsPropertyMode {
    /// If **all** symbols on the RHS have the property,
    /// the LHS has it too.
    All,
    /// If **any** symbol on the RHS has the property,
    /// the LHS has it too.
    Any,
}

impl Cfg {
    /// Creates an empty context-free grammar.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol with the given name, interning it if needed.
    pub fn sym(&mut self, name: &str) -> Symbol {
        self.sym_source.intern(name)
    }

    /// Returns symbols with the given names.
    pub fn syms<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        self.sym_source.with_names(names)
    }

    /// Returns the reserved empty-string symbol.
    pub fn epsilon(&self) -> Symbol {
        self.sym_source.epsilon()
    }

    /// Decodes a symbol back to its name.
    pub fn name_of(&self, sym: Symbol) -> Result<&str, GrammarError> {
        self.sym_source
            .name_of(sym)
            .ok_or(GrammarError::MissingSymbolName {
                symbol: sym.usize(),
            })
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Allows access to the symbol source through a reference.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<'_> {
        RuleBuilder::new(self).rule(lhs)
    }

    /// Starts building a new rule, interning the name of its LHS.
    pub fn rule_named(&mut self, lhs: &str) -> RuleBuilder<'_> {
        let lhs = self.sym(lhs);
        self.rule(lhs)
    }

    /// Declares a nonterminal without adding alternatives. Keeps the
    /// position of a nonterminal that is already declared.
    pub fn declare(&mut self, lhs: Symbol) {
        self.rules.entry(lhs).or_default();
    }

    /// Appends an alternative to a nonterminal, declaring it if needed.
    /// An empty list of symbols is stored as `[ε]`.
    pub fn add_alternative(&mut self, lhs: Symbol, rhs: &[Symbol]) {
        let rhs: Rhs = if rhs.is_empty() {
            Rc::from(&[Symbol::epsilon()][..])
        } else {
            rhs.into()
        };
        self.rules.entry(lhs).or_default().push(rhs);
    }

    /// Replaces the alternatives of a nonterminal.
    ///
    /// A nonterminal that is already declared keeps its position; otherwise
    /// it is appended after all other nonterminals.
    pub fn set_alternatives(&mut self, lhs: Symbol, alternatives: Vec<Rhs>) {
        trace!(
            "SET {:?} ::= {} alternatives",
            self.sym_source.name_of(lhs),
            alternatives.len()
        );
        self.rules.insert(lhs, alternatives);
    }

    /// Returns the alternatives of a nonterminal, or `None` for a terminal.
    pub fn alternatives(&self, lhs: Symbol) -> Option<&[Rhs]> {
        self.rules.get(&lhs).map(|alternatives| &alternatives[..])
    }

    /// Removes a nonterminal and returns its alternatives. The order of
    /// other nonterminals is preserved.
    pub fn remove(&mut self, lhs: Symbol) -> Option<Vec<Rhs>> {
        self.rules.shift_remove(&lhs)
    }

    /// Takes the rules out of the grammar, leaving it without nonterminals.
    /// The symbol source stays.
    pub fn take_rules(&mut self) -> Rules {
        mem::take(&mut self.rules)
    }

    /// Returns nonterminals in declaration order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rules.keys().copied()
    }

    /// Returns nonterminals along with their alternatives, in declaration
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[Rhs])> + '_ {
        self.rules
            .iter()
            .map(|(&lhs, alternatives)| (lhs, &alternatives[..]))
    }

    /// Returns an iterator over all rules: every alternative of every
    /// nonterminal, in order.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> + '_ {
        self.rules.iter().flat_map(|(&lhs, alternatives)| {
            alternatives
                .iter()
                .enumerate()
                .map(move |(alternative, rhs)| RuleRef {
                    lhs,
                    rhs: &rhs[..],
                    alternative,
                })
        })
    }

    /// Returns the start symbol, which is the first declared nonterminal.
    pub fn start(&self) -> Option<Symbol> {
        self.rules.keys().next().copied()
    }

    /// Checks whether the symbol is a nonterminal of this grammar.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.rules.contains_key(&sym)
    }

    /// Checks whether the symbol is a terminal of this grammar.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        !sym.is_epsilon() && !self.is_nonterminal(sym)
    }

    /// Returns the number of nonterminals.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Checks whether the grammar has no nonterminals.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Translates every symbol on every right-hand side.
    pub fn remap_rhs(&mut self, mut map: impl FnMut(Symbol) -> Symbol) {
        for alternatives in self.rules.values_mut() {
            for rhs in alternatives.iter_mut() {
                if rhs.iter().any(|&sym| map(sym) != sym) {
                    *rhs = rhs.iter().map(|&sym| map(sym)).collect();
                }
            }
        }
    }

    /// If **all** symbols on the RHS have the property, the LHS has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    pub fn rhs_closure_for_all(&self, property: &mut SymbolBitSet) {
        self.rhs_closure(property, RhsPropertyMode::All)
    }

    /// If **any** symbols on the RHS have the property, the LHS has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    pub fn rhs_closure_for_any(&self, property: &mut SymbolBitSet) {
        self.rhs_closure(property, RhsPropertyMode::Any)
    }

    /// If **any** or **all** symbols on the RHS have the property, the LHS
    /// has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    pub fn rhs_closure(&self, property: &mut SymbolBitSet, property_mode: RhsPropertyMode) {
        let mut changed = true;
        while changed {
            changed = false;
            for rule in self.rules() {
                if property[rule.lhs] {
                    continue;
                }
                let mut rhs_iter = rule.rhs.iter();
                let get_property = |&sym: &Symbol| property[sym];
                let rhs_satisfies_property = match property_mode {
                    RhsPropertyMode::All => rhs_iter.all(get_property),
                    RhsPropertyMode::Any => rhs_iter.any(get_property),
                };
                if rhs_satisfies_property {
                    property.set(rule.lhs, true);
                    changed = true;
                }
            }
        }
    }

    /// Formats a string of symbols, separated by single spaces.
    ///
    /// Symbols without a name are displayed as `g` followed by their ID.
    pub fn stringify_symbols(&self, syms: &[Symbol]) -> String {
        let mut result = String::new();
        for (i, &sym) in syms.iter().enumerate() {
            if i != 0 {
                result.push(' ');
            }
            match self.sym_source.name_of(sym) {
                Some(name) => result.push_str(name),
                None => {
                    let _ = write!(result, "g{}", sym.usize());
                }
            }
        }
        result
    }

    /// Formats the grammar to a `String`. The output looks like this:
    ///
    /// ```ignore
    /// expr ::= term expr' | minus expr
    /// expr' ::= plus term expr' | ε
    /// ```
    ///
    /// One line per nonterminal, in declaration order.
    pub fn stringify_to_ebnf(&self) -> String {
        let mut result = String::new();
        for (lhs, alternatives) in self.iter() {
            result.push_str(&self.stringify_symbols(&[lhs]));
            result.push_str(" ::= ");
            let rhs = alternatives
                .iter()
                .map(|rhs| self.stringify_symbols(&rhs[..]))
                .collect::<Vec<_>>()
                .join(" | ");
            result.push_str(&rhs);
            result.push('\n');
        }
        result
    }
}
