use cfg_grammar::Cfg;
use log::debug;

use crate::rewrite::RepetitionsToProductions;

/// Extends `Cfg` with the expansion of repetitions.
pub trait CfgSequenceExt {
    /// Returns an equivalent grammar with every `X*`, `X+` and `X?` symbol
    /// rewritten into a helper nonterminal.
    ///
    /// Declared nonterminals keep their positions. Helpers are appended in
    /// the order of their first use. Expanding twice is the same as
    /// expanding once.
    fn expand_repetitions(self) -> Cfg;
}

impl CfgSequenceExt for Cfg {
    fn expand_repetitions(mut self) -> Cfg {
        let rules = self.take_rules();
        for &lhs in rules.keys() {
            self.declare(lhs);
        }
        let mut rewrite = RepetitionsToProductions::new(&mut self);
        for (&lhs, alternatives) in &rules {
            rewrite.rewrite_nonterminal(lhs, alternatives);
        }
        debug!("expanded {} repetitions", rewrite.num_rewritten());
        self
    }
}
