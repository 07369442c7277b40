#![allow(dead_code)]

use std::collections::{BTreeSet, VecDeque};

use cfg::{Cfg, Symbol};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn grammar(listing: &str) -> Cfg {
    cfg::load::load_ebnf(listing).unwrap()
}

/// Enumerates every terminal string of at most `max_len` symbols that the
/// start symbol derives, by leftmost derivation. Sentential forms longer
/// than `max_len + max_nonterminals` are not explored, which is enough for
/// the small grammars under test.
pub fn language(grammar: &Cfg, max_len: usize) -> BTreeSet<Vec<String>> {
    const MAX_NONTERMINALS: usize = 6;
    let mut result = BTreeSet::new();
    let Some(start) = grammar.start() else {
        return result;
    };
    let mut seen: BTreeSet<Vec<Symbol>> = BTreeSet::new();
    let mut queue: VecDeque<Vec<Symbol>> = VecDeque::new();
    queue.push_back(vec![start]);
    seen.insert(vec![start]);
    while let Some(form) = queue.pop_front() {
        let Some(pos) = form.iter().position(|&sym| grammar.is_nonterminal(sym)) else {
            let string = form
                .iter()
                .map(|&sym| grammar.name_of(sym).unwrap().to_string())
                .collect();
            result.insert(string);
            continue;
        };
        for rhs in grammar.alternatives(form[pos]).unwrap() {
            let next: Vec<Symbol> = form[..pos]
                .iter()
                .chain(rhs.iter())
                .chain(form[pos + 1..].iter())
                .copied()
                .filter(|sym| !sym.is_epsilon())
                .collect();
            let num_terminals = next.iter().filter(|&&sym| grammar.is_terminal(sym)).count();
            if num_terminals > max_len || next.len() > max_len + MAX_NONTERMINALS {
                continue;
            }
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    result
}

pub fn assert_same_language(left: &Cfg, right: &Cfg, max_len: usize) {
    let left_language = language(left, max_len);
    let right_language = language(right, max_len);
    if left_language != right_language {
        eprintln!("{}\n{}", left.stringify_to_ebnf(), right.stringify_to_ebnf());
    }
    assert_eq!(left_language, right_language, "languages expected to be equal");
}

/// Asserts that no alternative begins with its own nonterminal.
pub fn assert_no_immediate_left_recursion(grammar: &Cfg) {
    for rule in grammar.rules() {
        assert_ne!(
            rule.rhs.first(),
            Some(&rule.lhs),
            "{} begins with itself",
            grammar.stringify_symbols(&[rule.lhs])
        );
    }
}
