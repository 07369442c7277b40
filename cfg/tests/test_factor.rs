#![cfg(all(feature = "factor", feature = "load"))]

mod support;

use cfg::factor::{CfgFactorExt, FactorError};
use test_case::test_case;

#[test]
fn test_factor_shared_prefix() {
    support::init_logging();
    let cfg = support::grammar("S ::= a b c | a b d").factor_common_prefixes();
    assert_eq!(cfg.stringify_to_ebnf(), "S ::= a b X1\nX1 ::= c | d\n");
}

#[test]
fn test_factor_without_shared_prefix() {
    support::init_logging();
    let cfg = support::grammar("S ::= a b | c d").factor_common_prefixes();
    assert_eq!(cfg.stringify_to_ebnf(), "S ::= a b | c d\n");
}

#[test_case("S ::= a b c | a b d\nT ::= x S | x" ; "two helpers")]
#[test_case("S ::= a | a b | a b c" ; "prefix is an alternative")]
#[test_case("S ::= a S | a" ; "recursive")]
fn test_factoring_keeps_language(listing: &str) {
    support::init_logging();
    let cfg = support::grammar(listing);
    let factored = cfg.clone().factor_common_prefixes();
    support::assert_same_language(&cfg, &factored, 4);
}

#[test]
fn test_deduplicate_leaves_no_dangling_reference() {
    support::init_logging();
    let cfg = support::grammar(
        "S ::= A B | C\n\
         A ::= x A | y\n\
         B ::= x A | y\n\
         C ::= B z",
    );
    let deduplicated = cfg.clone().deduplicate();
    assert_eq!(
        deduplicated.stringify_to_ebnf(),
        "S ::= A A | C\nA ::= x A | y\nC ::= A z\n"
    );
    for rule in deduplicated.rules() {
        for &sym in rule.rhs {
            let name = deduplicated.name_of(sym).unwrap();
            assert_ne!(name, "B");
        }
    }
    support::assert_same_language(&cfg, &deduplicated, 4);
}

#[test]
fn test_normalize_epsilons() {
    support::init_logging();
    let cfg = support::grammar("S ::= ε | A ε | ε\nA ::= ε a | ε");
    assert_eq!(
        cfg.normalize_epsilons().stringify_to_ebnf(),
        "S ::= A | ε\nA ::= a | ε\n"
    );
}

#[test]
fn test_left_factor_and_inline() {
    support::init_logging();
    let cfg = support::grammar("S ::= T | s\nT ::= a b | a c");
    let result = cfg.clone().left_factor_and_inline().unwrap();
    assert_eq!(
        result.stringify_to_ebnf(),
        "S ::= a X1 | s\nT ::= a X1\nX1 ::= b | c\n"
    );
    support::assert_same_language(&cfg, &result, 3);
}

#[test]
fn test_inlining_cycle_is_reported() {
    support::init_logging();
    let cfg = support::grammar("S ::= A | s\nA ::= B\nB ::= A | b");
    assert_eq!(
        cfg.inline_unit_alternatives().unwrap_err(),
        FactorError::InliningCycle {
            nonterminal: "A".to_string()
        }
    );
}
