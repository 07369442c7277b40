//! Grammar rules can be built with the builder pattern.

use std::convert::AsRef;

use crate::local_prelude::*;

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: Option<Symbol>,
    grammar: &'a mut Cfg,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder.
    pub fn new(grammar: &'a mut Cfg) -> Self {
        RuleBuilder { lhs: None, grammar }
    }

    /// Starts building a new rule with the given LHS.
    ///
    /// The LHS is declared as a nonterminal right away, even if no
    /// alternative follows.
    pub fn rule(mut self, lhs: Symbol) -> Self {
        self.grammar.declare(lhs);
        self.lhs = Some(lhs);
        self
    }

    /// Adds an alternative to the current rule. An empty list of symbols
    /// is stored as `[ε]`.
    ///
    /// # Panics
    ///
    /// Panics if called before `rule`.
    pub fn rhs<S>(self, syms: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        let lhs = self.lhs.expect("RuleBuilder::rhs called before RuleBuilder::rule");
        self.grammar.add_alternative(lhs, syms.as_ref());
        self
    }

    /// Adds an alternative given by symbol names, interning every name.
    pub fn rhs_names<'n, I>(self, names: I) -> Self
    where
        I: IntoIterator<Item = &'n str>,
    {
        let syms: Vec<Symbol> = names.into_iter().map(|name| self.grammar.sym(name)).collect();
        self.rhs(syms)
    }
}
