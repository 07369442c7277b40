#![cfg(all(feature = "ll", feature = "load"))]

mod support;

use cfg::classify_ll::{BranchPaths, CfgLlExt, ConflictReport, LlConflict, LlNonterminalClass};

#[test]
fn test_ll1_grammar_has_no_conflicts() {
    support::init_logging();
    let cfg = support::grammar("S ::= a B | c\nB ::= b");
    let table = cfg.ll_parse_table();
    assert!(table.conflicts().is_empty());
    let [s, b] = ["S", "B"].map(|name| cfg.sym_source().get(name).unwrap());
    let [ta, tb, tc] = ["a", "b", "c"].map(|name| cfg.sym_source().get(name).unwrap());
    let cells: Vec<_> = table.cells().collect();
    assert_eq!(
        cells,
        vec![(s, Some(ta), 0), (s, Some(tc), 1), (b, Some(tb), 0)]
    );
}

#[test]
fn test_shared_first_terminal_conflicts() {
    support::init_logging();
    let cfg = support::grammar("S ::= a | a b");
    let table = cfg.ll_parse_table();
    let s = cfg.sym_source().get("S").unwrap();
    let a = cfg.sym_source().get("a").unwrap();
    assert_eq!(
        table.conflicts(),
        &[LlConflict {
            nonterminal: s,
            alternative: 1,
            previous: 0,
            terminal: Some(a),
        }]
    );
    assert_eq!(cfg.ll_conflict_lines(), ["S -> a b with terminal a."]);
}

#[test]
fn test_conflict_report() {
    support::init_logging();
    let cfg = support::grammar(
        "S ::= A x | B y\n\
         A ::= a | ε\n\
         B ::= a | ε",
    );
    let lines = cfg.ll_conflict_lines();
    assert_eq!(lines, ["S -> B y with terminal a."]);
    let report = ConflictReport::from_lines(lines.iter().map(|line| &line[..])).unwrap();
    assert_eq!(report.to_string(), "[1] S -> B y with terminals:\na\n\n");
}

#[test]
fn test_classification_after_factoring() {
    support::init_logging();
    let cfg = support::grammar("S ::= a b c | a b d\nT ::= S | e");
    let classification = cfg.ll_parse_table().classify();
    let s = cfg.sym_source().get("S").unwrap();
    let t = cfg.sym_source().get("T").unwrap();
    assert_eq!(classification.classes()[&s], LlNonterminalClass::ContextFree);
    assert_eq!(classification.classes()[&t], LlNonterminalClass::ContextFree);

    #[cfg(feature = "factor")]
    {
        use cfg::factor::CfgFactorExt;
        let factored = cfg.factor_common_prefixes();
        let table = factored.ll_parse_table();
        assert!(table.is_ll1());
        assert!(table
            .classify()
            .classes()
            .values()
            .all(|&class| class == LlNonterminalClass::Ll1));
    }
}

#[test]
fn test_branch_paths_agree_with_next_step_table() {
    support::init_logging();
    let cfg = support::grammar("S ::= A x | a y | b\nA ::= a | c");
    let [s, a, b, c] = ["S", "a", "b", "c"].map(|name| cfg.sym_source().get(name).unwrap());
    let branches = cfg.branch_paths(s);
    let traces: Vec<String> = branches
        .get(a)
        .iter()
        .map(|path| BranchPaths::stringify_path(&cfg, path))
        .collect();
    assert_eq!(traces, ["S[0] A[0]", "S[1]"]);
    assert_eq!(branches.conflicting_tokens(), vec![a]);

    let next_step = cfg.next_step_table();
    assert_eq!(next_step.get(s, a), &[0, 1]);
    assert_eq!(next_step.get(s, b), &[2]);
    assert_eq!(next_step.get(s, c), &[0]);
    let ambiguous: Vec<_> = next_step
        .ambiguous_cells()
        .map(|(nonterminal, token, _)| (nonterminal, token))
        .collect();
    assert_eq!(ambiguous, vec![(s, a)]);
}
