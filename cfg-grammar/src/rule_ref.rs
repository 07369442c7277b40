//! References to single grammar rules. Each rule consists of a single symbol
//! on its left-hand side and one of that symbol's alternatives on its
//! right-hand side.

use crate::local_prelude::*;

/// References rule's components.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RuleRef<'a> {
    /// Left-hand side.
    pub lhs: Symbol,
    /// Right-hand side.
    pub rhs: &'a [Symbol],
    /// Position of this alternative among the alternatives of `lhs`.
    pub alternative: usize,
}

impl<'a> RuleRef<'a> {
    /// Checks whether this rule is the canonical empty alternative `[ε]`.
    pub fn is_epsilon(&self) -> bool {
        matches!(self.rhs, [sym] if sym.is_epsilon())
    }
}
