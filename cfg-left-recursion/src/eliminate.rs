//! Elimination of direct and indirect left recursion.

use cfg_grammar::{strip_epsilons, Cfg, Rhs, Symbol};
use log::{debug, trace};

/// Rewrites a grammar to remove left recursion.
///
/// Nonterminals `A1 .. An` are processed in declaration order. For each
/// `Ai`, every alternative `Aj γ` with `j < i` is replaced with `δ γ` for
/// each alternative `δ` of `Aj`. Then immediate left recursion on `Ai` is
/// removed: with `Ai ::= Ai α1 | .. | β1 | ..`, the result is
///
/// ```text
/// Ai  ::= β1 Ai' | ..
/// Ai' ::= α1 Ai' | .. | ε
/// ```
///
/// Primed nonterminals are appended after all declared nonterminals, in
/// order of creation. The result depends on declaration order.
///
/// The grammar must be free of repetition suffixes.
pub struct LeftRecursionEliminator {
    grammar: Cfg,
    num_primed: usize,
}

impl LeftRecursionEliminator {
    /// Prepares elimination for the given grammar.
    pub fn new(grammar: Cfg) -> Self {
        LeftRecursionEliminator {
            grammar,
            num_primed: 0,
        }
    }

    /// Runs the elimination and returns the rewritten grammar.
    pub fn eliminate(mut self) -> Cfg {
        let order: Vec<Symbol> = self.grammar.nonterminals().collect();
        for (i, &ai) in order.iter().enumerate() {
            for &aj in &order[..i] {
                self.substitute(ai, aj);
            }
            self.eliminate_immediate(ai);
        }
        self.remove_extra_epsilons();
        debug!(
            "eliminated left recursion, {} primed nonterminals",
            self.num_primed
        );
        self.grammar
    }

    /// Replaces alternatives of `ai` that begin with `aj`.
    fn substitute(&mut self, ai: Symbol, aj: Symbol) {
        let (Some(ai_alternatives), Some(aj_alternatives)) =
            (self.grammar.alternatives(ai), self.grammar.alternatives(aj))
        else {
            return;
        };
        if !ai_alternatives.iter().any(|rhs| rhs.first() == Some(&aj)) {
            return;
        }
        let mut rewritten = Vec::with_capacity(ai_alternatives.len());
        for rhs in ai_alternatives {
            if rhs.first() == Some(&aj) {
                for delta in aj_alternatives {
                    rewritten.push(splice(&delta[..], &rhs[1..]));
                }
            } else {
                rewritten.push(rhs.clone());
            }
        }
        trace!(
            "SUBSTITUTE {} in {}",
            self.grammar.stringify_symbols(&[aj]),
            self.grammar.stringify_symbols(&[ai])
        );
        self.grammar.set_alternatives(ai, rewritten);
    }

    fn eliminate_immediate(&mut self, ai: Symbol) {
        let Some(alternatives) = self.grammar.alternatives(ai) else {
            return;
        };
        if !alternatives.iter().any(|rhs| rhs.first() == Some(&ai)) {
            return;
        }
        let mut alphas = vec![];
        let mut betas = vec![];
        for rhs in alternatives {
            if rhs.first() == Some(&ai) {
                let alpha = &rhs[1..];
                // `Ai ::= Ai` derives nothing new.
                if alpha.iter().any(|sym| !sym.is_epsilon()) {
                    alphas.push(alpha.to_vec());
                }
            } else {
                betas.push(rhs.clone());
            }
        }
        if alphas.is_empty() {
            // Only unit self loops: `Ai` derives nothing and is kept as is.
            if betas.is_empty() {
                trace!("VACUOUS {}", self.grammar.stringify_symbols(&[ai]));
                return;
            }
            self.grammar.set_alternatives(ai, betas);
            return;
        }

        let primed_name = format!("{}'", self.grammar.stringify_symbols(&[ai]));
        let primed = self.grammar.sym(&primed_name);
        trace!("PRIME {}", primed_name);

        let new_alternatives: Vec<Rhs> = if betas.is_empty() {
            vec![vec![primed].into()]
        } else {
            betas
                .iter()
                .map(|beta| splice(&beta[..], &[primed]))
                .collect()
        };
        let mut primed_alternatives: Vec<Rhs> = alphas
            .iter()
            .map(|alpha| splice(&alpha[..], &[primed]))
            .collect();
        primed_alternatives.push(vec![self.grammar.epsilon()].into());

        self.grammar.set_alternatives(ai, new_alternatives);
        self.grammar.set_alternatives(primed, primed_alternatives);
        self.num_primed += 1;
    }

    /// Splicing leaves `ε` in longer alternatives. They are stripped.
    fn remove_extra_epsilons(&mut self) {
        let rules = self.grammar.take_rules();
        for (lhs, alternatives) in rules {
            let alternatives = alternatives
                .iter()
                .map(|rhs| strip_epsilons(&rhs[..]))
                .collect();
            self.grammar.set_alternatives(lhs, alternatives);
        }
    }
}

/// Concatenates two strings of symbols. The result is stripped of `ε`
/// right away, so that a nonterminal exposed by the splice is visible to
/// the rest of the elimination.
fn splice(prefix: &[Symbol], suffix: &[Symbol]) -> Rhs {
    let joined: Vec<Symbol> = prefix.iter().chain(suffix).copied().collect();
    strip_epsilons(&joined[..])
}
