//! Factoring of prefixes shared by all alternatives of a nonterminal.

use std::rc::Rc;

use cfg_grammar::{Cfg, Rhs};
use cfg_symbol::Symbol;
use log::{debug, trace};

/// Returns the longest string of symbols that begins every one of the
/// given strings. Empty for an empty list.
pub fn common_prefix(strings: &[Rhs]) -> &[Symbol] {
    let Some((first, rest)) = strings.split_first() else {
        return &[];
    };
    let mut len = first.len();
    for string in rest {
        len = first[..len]
            .iter()
            .zip(string.iter())
            .take_while(|(a, b)| a == b)
            .count();
        if len == 0 {
            break;
        }
    }
    &first[..len]
}

/// Creates nonterminals named `X1`, `X2`, and so on, skipping names that
/// are already in use.
struct FreshNames {
    next: usize,
}

impl FreshNames {
    fn new() -> Self {
        FreshNames { next: 1 }
    }

    fn next(&mut self, grammar: &mut Cfg) -> Symbol {
        loop {
            let name = format!("X{}", self.next);
            self.next += 1;
            if !grammar.sym_source().contains(&name) {
                return grammar.sym(&name);
            }
        }
    }
}

pub(crate) fn factor_common_prefixes(mut grammar: Cfg) -> Cfg {
    let rules = grammar.take_rules();
    let mut fresh = FreshNames::new();
    let mut num_factored = 0;
    for (lhs, alternatives) in rules {
        let prefix = common_prefix(&alternatives[..]);
        let is_factorable = alternatives.len() >= 2
            && !prefix.is_empty()
            && !(prefix.len() == 1 && prefix[0].is_epsilon());
        if !is_factorable {
            grammar.set_alternatives(lhs, alternatives);
            continue;
        }
        let prefix = prefix.to_vec();
        let helper = fresh.next(&mut grammar);
        let suffixes: Vec<Rhs> = alternatives
            .iter()
            .map(|rhs| {
                if rhs.len() == prefix.len() {
                    Rc::from(&[Symbol::epsilon()][..])
                } else {
                    rhs[prefix.len()..].into()
                }
            })
            .collect();
        trace!(
            "FACTOR {} out of {}",
            grammar.stringify_symbols(&prefix[..]),
            grammar.stringify_symbols(&[lhs])
        );
        let mut factored = prefix;
        factored.push(helper);
        grammar.set_alternatives(lhs, vec![factored.into()]);
        grammar.set_alternatives(helper, suffixes);
        num_factored += 1;
    }
    debug!("factored common prefixes of {} nonterminals", num_factored);
    grammar
}
