//! Leftmost derivation paths from a nonterminal to the tokens that can
//! start it.

use std::collections::BTreeMap;

use cfg_grammar::Cfg;
use cfg_symbol::Symbol;
use log::{debug, trace};

/// One step of a derivation path: an alternative of a nonterminal.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub struct BranchStep {
    /// The expanded nonterminal.
    pub nonterminal: Symbol,
    /// Index of the chosen alternative.
    pub alternative: usize,
}

/// Derivation paths grouped by the token they reach.
///
/// Only the first symbol of each alternative is followed. A path ends at a
/// token, which is any symbol other than a nonterminal, `ε` included. A path
/// that would enter a nonterminal it already went through is cut, so the
/// paths of a left-recursive grammar are finite.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BranchPaths {
    paths: BTreeMap<Symbol, Vec<Vec<BranchStep>>>,
}

impl BranchPaths {
    /// Collects all paths that start at `root`.
    pub fn new(grammar: &Cfg, root: Symbol) -> Self {
        let mut this = BranchPaths::default();
        this.expand(grammar, root, &mut vec![]);
        debug!(
            "found {} tokens reachable from {}",
            this.paths.len(),
            grammar.stringify_symbols(&[root])
        );
        this
    }

    fn expand(&mut self, grammar: &Cfg, sym: Symbol, path: &mut Vec<BranchStep>) {
        let Some(alternatives) = grammar.alternatives(sym) else {
            self.paths.entry(sym).or_default().push(path.clone());
            return;
        };
        if path.iter().any(|step| step.nonterminal == sym) {
            trace!("BRANCH cut at {}", grammar.stringify_symbols(&[sym]));
            return;
        }
        for (alternative, rhs) in alternatives.iter().enumerate() {
            if let Some(&first) = rhs.first() {
                path.push(BranchStep {
                    nonterminal: sym,
                    alternative,
                });
                self.expand(grammar, first, path);
                path.pop();
            }
        }
    }

    /// Returns the paths that reach a token.
    pub fn get(&self, token: Symbol) -> &[Vec<BranchStep>] {
        self.paths.get(&token).map(|paths| &paths[..]).unwrap_or(&[])
    }

    /// Iterates over tokens and their paths, in order of symbol IDs.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[Vec<BranchStep>])> + '_ {
        self.paths.iter().map(|(&token, paths)| (token, &paths[..]))
    }

    /// Returns tokens reached through more than one alternative of the root.
    /// These are the tokens on which a predictive parser cannot choose.
    pub fn conflicting_tokens(&self) -> Vec<Symbol> {
        self.iter()
            .filter(|(_, paths)| {
                let mut roots = paths.iter().filter_map(|path| path.first());
                match roots.next() {
                    Some(first) => roots.any(|step| step != first),
                    None => false,
                }
            })
            .map(|(token, _)| token)
            .collect()
    }

    /// Formats a path as `S[0] A[1]`.
    pub fn stringify_path(grammar: &Cfg, path: &[BranchStep]) -> String {
        path.iter()
            .map(|step| {
                format!(
                    "{}[{}]",
                    grammar.stringify_symbols(&[step.nonterminal]),
                    step.alternative
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
