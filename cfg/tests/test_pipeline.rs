#![cfg(all(
    feature = "sequence",
    feature = "left-recursion",
    feature = "factor",
    feature = "load"
))]

mod support;

use cfg::left_recursion::CfgLeftRecursionExt;
use cfg::load::{load_json, to_json};
use cfg::sequence::CfgSequenceExt;
use cfg::{Pass, Pipeline};

const BIT_EXPR: &str = r#"[
    { "name": "A", "bnf": [["bitExpr+"]] },
    { "name": "bitExpr", "bnf": [["bitExpr3"], ["bitExpr1", "man"], ["bitExpr2"], ["at"]] },
    { "name": "bitExpr1", "bnf": [["bitExpr", "xor", "bitExpr"]] },
    { "name": "bitExpr2", "bnf": [["bitExpr", "plus", "bitExpr"]] },
    { "name": "bitExpr3", "bnf": [["identifier"]] }
]"#;

#[test]
fn test_expand_mode() {
    support::init_logging();
    let cfg = load_json(BIT_EXPR).unwrap();
    let expanded = "expand".parse::<Pipeline>().unwrap().run(cfg).unwrap();
    let listing = expanded.stringify_to_ebnf();
    assert!(listing.starts_with("A ::= bitExpr_one_or_more\n"));
    assert!(listing.ends_with("bitExpr_one_or_more ::= bitExpr bitExpr_one_or_more | bitExpr\n"));
}

#[test]
fn test_left_recursion_mode() {
    support::init_logging();
    let cfg = load_json(BIT_EXPR).unwrap();
    let expanded = cfg.clone().expand_repetitions();
    assert!(expanded.left_recursion().has_left_recursion());

    let result = Pipeline::left_recursion().run(cfg).unwrap();
    support::assert_no_immediate_left_recursion(&result);
    assert!(!result.left_recursion().has_left_recursion());
    support::assert_same_language(&expanded, &result, 3);

    let reloaded = load_json(&to_json(&result).unwrap()).unwrap();
    assert_eq!(reloaded.stringify_to_ebnf(), result.stringify_to_ebnf());
}

#[test]
fn test_all_mode_with_cleanup() {
    support::init_logging();
    let cfg = support::grammar(
        "S ::= S comma item | item\n\
         item ::= key? value\n\
         value ::= num | num dot num",
    );
    let pipeline = Pipeline::all().normalize_epsilons().deduplicate();
    assert_eq!(
        pipeline.passes(),
        &[
            Pass::ExpandRepetitions,
            Pass::EliminateLeftRecursion,
            Pass::FactorCommonPrefixes,
            Pass::NormalizeEpsilons,
            Pass::Deduplicate,
        ]
    );
    let result = pipeline.run(cfg.clone()).unwrap();
    support::assert_no_immediate_left_recursion(&result);
    support::assert_same_language(&cfg.expand_repetitions(), &result, 4);
    for rule in result.rules() {
        assert!(rule.rhs.len() == 1 || rule.rhs.iter().all(|sym| !sym.is_epsilon()));
    }
}
