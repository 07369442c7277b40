//! Rewrites repetitions into production rules.

use cfg_grammar::{Cfg, Rhs, Symbol};
use log::trace;

use crate::Repetition::{self, *};

/// Rewrites repetitions into production rules.
///
/// Every suffixed occurrence `X*`, `X+` or `X?` is replaced with a helper
/// nonterminal, whose definition is inserted into the destination:
///
/// - `X_zero_or_more ::= X X_zero_or_more | X | ε`
/// - `X_one_or_more ::= X X_one_or_more | X`
/// - `X_zero_or_one ::= X | ε`
///
/// The definition depends only on the base, so it is inserted again
/// each time the base is repeated, overwriting any earlier definition
/// under the same name.
pub struct RepetitionsToProductions<'a> {
    destination: &'a mut Cfg,
    num_rewritten: usize,
}

impl<'a> RepetitionsToProductions<'a> {
    /// Initializes a rewrite.
    pub fn new(destination: &'a mut Cfg) -> Self {
        RepetitionsToProductions {
            destination,
            num_rewritten: 0,
        }
    }

    /// Returns the number of suffixed occurrences rewritten so far.
    pub fn num_rewritten(&self) -> usize {
        self.num_rewritten
    }

    /// Rewrites all alternatives of a nonterminal and stores them in the
    /// destination. Helpers are stored first, so a nonterminal wins over
    /// a helper of the same name that it defines itself.
    pub fn rewrite_nonterminal(&mut self, lhs: Symbol, alternatives: &[Rhs]) {
        let alternatives = alternatives
            .iter()
            .map(|rhs| self.rewrite_rhs(&rhs[..]))
            .collect();
        self.destination.set_alternatives(lhs, alternatives);
    }

    /// Rewrites one alternative.
    pub fn rewrite_rhs(&mut self, rhs: &[Symbol]) -> Rhs {
        rhs.iter().map(|&sym| self.rewrite_sym(sym)).collect()
    }

    fn rewrite_sym(&mut self, sym: Symbol) -> Symbol {
        let split = self
            .destination
            .sym_source()
            .name_of(sym)
            .and_then(Repetition::split)
            .map(|(base, repetition)| (base.to_string(), repetition));
        match split {
            Some((base, repetition)) => self.define(&base, repetition),
            None => sym,
        }
    }

    fn define(&mut self, base: &str, repetition: Repetition) -> Symbol {
        let helper_name = repetition.helper_name(base);
        trace!("REPETITION {}{} -> {}", base, repetition.suffix(), helper_name);
        let item = self.destination.sym(base);
        let helper = self.destination.sym(&helper_name);
        let epsilon = self.destination.epsilon();
        let alternatives: Vec<Rhs> = match repetition {
            ZeroOrMore => vec![
                vec![item, helper].into(),
                vec![item].into(),
                vec![epsilon].into(),
            ],
            OneOrMore => vec![vec![item, helper].into(), vec![item].into()],
            ZeroOrOne => vec![vec![item].into(), vec![epsilon].into()],
        };
        self.destination.set_alternatives(helper, alternatives);
        self.num_rewritten += 1;
        helper
    }
}
