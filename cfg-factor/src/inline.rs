//! Inlining of alternatives made of a single nonterminal.

use std::collections::BTreeMap;

use cfg_grammar::{Cfg, Rhs};
use cfg_symbol::Symbol;
use log::{debug, trace};

use crate::error::FactorError;

enum Visit {
    InProgress,
    Done(Vec<Rhs>),
}

struct Inliner<'a> {
    grammar: &'a Cfg,
    visited: BTreeMap<Symbol, Visit>,
    num_inlined: usize,
}

pub(crate) fn inline_unit_alternatives(mut grammar: Cfg) -> Result<Cfg, FactorError> {
    let mut inliner = Inliner {
        grammar: &grammar,
        visited: BTreeMap::new(),
        num_inlined: 0,
    };
    let mut result = Vec::with_capacity(grammar.len());
    for lhs in grammar.nonterminals() {
        result.push((lhs, inliner.resolve(lhs)?));
    }
    debug!("inlined {} unit alternatives", inliner.num_inlined);
    for (lhs, alternatives) in result {
        grammar.set_alternatives(lhs, alternatives);
    }
    Ok(grammar)
}

impl<'a> Inliner<'a> {
    /// Returns the alternatives of `lhs` with unit alternatives replaced,
    /// recursively.
    fn resolve(&mut self, lhs: Symbol) -> Result<Vec<Rhs>, FactorError> {
        match self.visited.get(&lhs) {
            Some(Visit::Done(alternatives)) => return Ok(alternatives.clone()),
            Some(Visit::InProgress) => {
                return Err(FactorError::InliningCycle {
                    nonterminal: self.grammar.stringify_symbols(&[lhs]),
                })
            }
            None => {}
        }
        self.visited.insert(lhs, Visit::InProgress);
        let grammar = self.grammar;
        let mut result = vec![];
        for rhs in grammar.alternatives(lhs).unwrap_or(&[]) {
            match rhs[..] {
                [sym] if grammar.is_nonterminal(sym) => {
                    trace!(
                        "INLINE {} into {}",
                        grammar.stringify_symbols(&[sym]),
                        grammar.stringify_symbols(&[lhs])
                    );
                    self.num_inlined += 1;
                    result.extend(self.resolve(sym)?);
                }
                _ => result.push(rhs.clone()),
            }
        }
        self.visited.insert(lhs, Visit::Done(result.clone()));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use cfg_load::load_ebnf;

    use crate::{CfgFactorExt, FactorError};

    #[test]
    fn test_inline() {
        let cfg = load_ebnf("S ::= A | s\nA ::= B | a\nB ::= b c").unwrap();
        assert_eq!(
            cfg.inline_unit_alternatives().unwrap().stringify_to_ebnf(),
            "S ::= b c | a | s\nA ::= b c | a\nB ::= b c\n"
        );
    }

    #[test]
    fn test_longer_references_stay() {
        let cfg = load_ebnf("S ::= A A | ε\nA ::= a").unwrap();
        assert_eq!(
            cfg.inline_unit_alternatives().unwrap().stringify_to_ebnf(),
            "S ::= A A | ε\nA ::= a\n"
        );
    }

    #[test]
    fn test_cycle() {
        let cfg = load_ebnf("S ::= A | s\nA ::= S | a").unwrap();
        assert_eq!(
            cfg.inline_unit_alternatives().unwrap_err(),
            FactorError::InliningCycle {
                nonterminal: "S".to_string()
            }
        );
    }

    #[test]
    fn test_self_loop() {
        let cfg = load_ebnf("S ::= S | s").unwrap();
        assert!(cfg.inline_unit_alternatives().is_err());
    }

    #[test]
    fn test_left_factor_and_inline() {
        let cfg = load_ebnf("S ::= a b | a c\nT ::= S").unwrap();
        assert_eq!(
            cfg.left_factor_and_inline().unwrap().stringify_to_ebnf(),
            "S ::= a X1\nX1 ::= b | c\nT ::= a X1\n"
        );
    }
}
