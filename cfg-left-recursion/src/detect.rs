//! Detection of left recursion through the left-corner relation.

use bit_matrix::BitMatrix;
use cfg_grammar::{Cfg, Symbol};

/// Calculation of nonterminals that participate in left recursion, be it
/// direct or through other nonterminals.
///
/// We define a binary relation LEFT(A, B), in which A is related to B if
/// the grammar has a production of the form `A ⸬= α B β`, where α is
/// a nullable string of symbols. A is left-recursive if it is related
/// to itself in the transitive closure of this relation.
pub struct LeftRecursion<'a> {
    grammar: &'a Cfg,
    left_corner: BitMatrix,
}

impl<'a> LeftRecursion<'a> {
    /// Computes the left-corner closure of a grammar.
    pub fn new(grammar: &'a Cfg) -> Self {
        let num_syms = grammar.num_syms();
        let mut left_corner = BitMatrix::new(num_syms, num_syms);
        let nullable = grammar.nullable_symbols();
        for rule in grammar.rules() {
            for &sym in rule.rhs {
                if grammar.is_nonterminal(sym) {
                    left_corner.set(rule.lhs.usize(), sym.usize(), true);
                }
                if !nullable[sym] {
                    break;
                }
            }
        }
        left_corner.transitive_closure();
        LeftRecursion {
            grammar,
            left_corner,
        }
    }

    /// Checks whether the nonterminal can derive a string that begins
    /// with itself.
    pub fn is_left_recursive(&self, sym: Symbol) -> bool {
        let (rows, _) = self.left_corner.size();
        sym.usize() < rows && self.left_corner[(sym.usize(), sym.usize())]
    }

    /// Returns left-recursive nonterminals in declaration order.
    pub fn left_recursive_nonterminals(&self) -> Vec<Symbol> {
        self.grammar
            .nonterminals()
            .filter(|&sym| self.is_left_recursive(sym))
            .collect()
    }

    /// Checks whether any nonterminal is left-recursive.
    pub fn has_left_recursion(&self) -> bool {
        self.grammar
            .nonterminals()
            .any(|sym| self.is_left_recursive(sym))
    }

    /// Returns nonterminals with an alternative that begins with the
    /// nonterminal itself.
    pub fn directly_left_recursive(&self) -> Vec<Symbol> {
        self.grammar
            .iter()
            .filter(|&(lhs, alternatives)| {
                alternatives.iter().any(|rhs| rhs.first() == Some(&lhs))
            })
            .map(|(lhs, _)| lhs)
            .collect()
    }
}
