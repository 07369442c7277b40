//! Source of named symbols.

use std::rc::Rc;

use indexmap::IndexSet;

use crate::Symbol;

/// The name of a symbol.
pub type SymbolName = Rc<str>;

/// The reserved name of the empty-string symbol.
pub const EPSILON: &str = "ε";

/// A source of named symbols.
///
/// Names are interned: asking twice for the same name gives the same
/// symbol. The symbol's ID is the position of its name in the interner.
#[derive(Clone, Debug)]
pub struct SymbolSource {
    names: IndexSet<SymbolName>,
}

impl Default for SymbolSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSource {
    /// Creates a source of symbols holding only the reserved `ε` symbol.
    pub fn new() -> Self {
        let mut names = IndexSet::new();
        names.insert(SymbolName::from(EPSILON));
        SymbolSource { names }
    }

    /// Returns the symbol with the given name, interning the name if it was
    /// never seen before.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(index) = self.names.get_index_of(name) {
            return Symbol::from(index);
        }
        let (index, _) = self.names.insert_full(SymbolName::from(name));
        Symbol::from(index)
    }

    /// Returns symbols for the given names.
    pub fn with_names<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.intern(name))
    }

    /// Looks up a symbol by name without interning it.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.names.get_index_of(name).map(Symbol::from)
    }

    /// Checks whether the name is already taken by some symbol.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the name of a symbol, or `None` if the symbol did not
    /// come from this source.
    pub fn name_of(&self, sym: Symbol) -> Option<&str> {
        self.names.get_index(sym.usize()).map(|name| &name[..])
    }

    /// Returns the reserved empty-string symbol.
    pub fn epsilon(&self) -> Symbol {
        Symbol::epsilon()
    }

    /// Returns the number of symbols in use, including `ε`.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }
}
