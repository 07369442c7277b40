//! Normalization of `ε` in alternatives.

use std::rc::Rc;

use cfg_grammar::{Cfg, Rhs};
use cfg_symbol::Symbol;
use log::debug;

pub(crate) fn normalize_epsilons(mut grammar: Cfg) -> Cfg {
    let rules = grammar.take_rules();
    let mut num_collapsed = 0;
    for (lhs, alternatives) in rules {
        let mut normalized: Vec<Rhs> = Vec::with_capacity(alternatives.len());
        let mut has_epsilon = false;
        for rhs in alternatives {
            if rhs.iter().all(|sym| sym.is_epsilon()) {
                if has_epsilon {
                    num_collapsed += 1;
                }
                has_epsilon = true;
            } else if rhs.iter().any(|sym| sym.is_epsilon()) {
                normalized.push(rhs.iter().copied().filter(|sym| !sym.is_epsilon()).collect());
            } else {
                normalized.push(rhs);
            }
        }
        if has_epsilon {
            normalized.push(Rc::from(&[Symbol::epsilon()][..]));
        }
        grammar.set_alternatives(lhs, normalized);
    }
    debug!("collapsed {} duplicate empty alternatives", num_collapsed);
    grammar
}

#[cfg(test)]
mod tests {
    use cfg_load::load_ebnf;

    use crate::CfgFactorExt;

    #[test]
    fn test_normalize_epsilons() {
        let cfg = load_ebnf("S ::= ε | a ε b | ε | c\nT ::= ε ε | t").unwrap();
        assert_eq!(
            cfg.normalize_epsilons().stringify_to_ebnf(),
            "S ::= a b | c | ε\nT ::= t | ε\n"
        );
    }

    #[test]
    fn test_without_epsilon() {
        let cfg = load_ebnf("S ::= a | b c").unwrap();
        assert_eq!(cfg.normalize_epsilons().stringify_to_ebnf(), "S ::= a | b c\n");
    }
}
