//! Merging of nonterminals with identical alternatives.

use std::collections::BTreeMap;

use cfg_grammar::{Cfg, Rhs};
use cfg_symbol::Symbol;
use log::{debug, trace};

/// Merges until no two nonterminals have identical alternatives. A merge
/// can make more nonterminals identical, so sweeps repeat.
pub(crate) fn deduplicate(mut grammar: Cfg) -> Cfg {
    let mut num_merged = 0;
    loop {
        let merged = merge_identical(&mut grammar);
        if merged == 0 {
            break;
        }
        num_merged += merged;
    }
    debug!("merged {} nonterminals", num_merged);
    grammar
}

fn merge_identical(grammar: &mut Cfg) -> usize {
    let mut canonical: BTreeMap<&[Rhs], Symbol> = BTreeMap::new();
    let mut substitutions: BTreeMap<Symbol, Symbol> = BTreeMap::new();
    for (lhs, alternatives) in grammar.iter() {
        match canonical.get(alternatives) {
            Some(&survivor) => {
                trace!(
                    "MERGE {} into {}",
                    grammar.stringify_symbols(&[lhs]),
                    grammar.stringify_symbols(&[survivor])
                );
                substitutions.insert(lhs, survivor);
            }
            None => {
                canonical.insert(alternatives, lhs);
            }
        }
    }
    for merged in substitutions.keys() {
        grammar.remove(*merged);
    }
    grammar.remap_rhs(|sym| substitutions.get(&sym).copied().unwrap_or(sym));
    substitutions.len()
}

#[cfg(test)]
mod tests {
    use cfg_load::load_ebnf;

    use crate::CfgFactorExt;

    #[test]
    fn test_deduplicate() {
        let cfg = load_ebnf("S ::= A B | B\nA ::= a | b\nB ::= a | b").unwrap();
        let cfg = cfg.deduplicate();
        assert_eq!(cfg.stringify_to_ebnf(), "S ::= A A | A\nA ::= a | b\n");
        let b = cfg.sym_source().get("B").unwrap();
        assert!(cfg.rules().all(|rule| !rule.rhs.contains(&b)));
    }

    #[test]
    fn test_merges_cascade() {
        let cfg = load_ebnf("S ::= C D\nA ::= a\nB ::= a\nC ::= x A\nD ::= x B").unwrap();
        assert_eq!(
            cfg.deduplicate().stringify_to_ebnf(),
            "S ::= C C\nA ::= a\nC ::= x A\n"
        );
    }

    #[test]
    fn test_self_reference_survives() {
        let cfg = load_ebnf("S ::= A B\nA ::= a A | ε\nB ::= a A | ε").unwrap();
        assert_eq!(
            cfg.deduplicate().stringify_to_ebnf(),
            "S ::= A A\nA ::= a A | ε\n"
        );
    }

    #[test]
    fn test_distinct_self_references_are_kept() {
        let cfg = load_ebnf("S ::= A B\nA ::= a A\nB ::= a B").unwrap();
        assert_eq!(
            cfg.deduplicate().stringify_to_ebnf(),
            "S ::= A B\nA ::= a A\nB ::= a B\n"
        );
    }
}
