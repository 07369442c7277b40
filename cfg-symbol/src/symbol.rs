use std::num::NonZeroU32;

/// The numeric representation of a symbol's ID.
pub type SymbolRepr = u32;

/// A common grammar symbol type.
///
/// Symbols are cheap to copy and compare. Their names live in a
/// [`SymbolSource`](crate::SymbolSource).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    n: NonZeroU32,
}

impl Default for Symbol {
    fn default() -> Self {
        Self::first()
    }
}

impl Symbol {
    /// The first symbol of every symbol source.
    pub fn first() -> Self {
        Symbol { n: NonZeroU32::MIN }
    }

    /// The reserved symbol that stands for the empty string.
    ///
    /// Every `SymbolSource` interns `ε` before anything else, so it is
    /// always the first symbol.
    pub fn epsilon() -> Self {
        Self::first()
    }

    /// Checks whether this is the reserved empty-string symbol.
    #[inline]
    pub fn is_epsilon(self) -> bool {
        self == Self::epsilon()
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.n.get() as usize - 1
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        let n = (id as SymbolRepr)
            .checked_add(1)
            .and_then(NonZeroU32::new)
            .expect("ran out of Symbol space?");
        Symbol { n }
    }
}

impl From<Symbol> for SymbolRepr {
    #[inline]
    fn from(sym: Symbol) -> SymbolRepr {
        sym.n.get() - 1
    }
}
