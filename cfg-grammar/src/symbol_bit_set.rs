//! Informs whether symbols are terminal, nonterminal or nullable.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::local_prelude::*;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Constructs a `SymbolBitSet` covering every symbol of the grammar.
    pub fn from_elem(grammar: &Cfg, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(grammar.num_syms(), elem),
        }
    }

    /// Clears the set and sizes it for the given symbol source.
    pub fn reset(&mut self, sym_source: &SymbolSource) {
        self.bit_vec = BitVec::from_elem(sym_source.num_syms(), false);
    }

    /// Constructs the set of terminals: symbols that appear on some
    /// right-hand side without being a key of the grammar. `ε` is never
    /// a terminal.
    pub fn terminal(&mut self, grammar: &Cfg) {
        self.reset(grammar.sym_source());
        for rule in grammar.rules() {
            for &sym in rule.rhs {
                if !sym.is_epsilon() && !grammar.is_nonterminal(sym) {
                    self.set(sym, true);
                }
            }
        }
    }

    /// Constructs the set of nonterminals that have the alternative `[ε]`.
    pub fn nulling(&mut self, grammar: &Cfg) {
        self.reset(grammar.sym_source());
        for rule in grammar.rules() {
            if rule.is_epsilon() {
                self.set(rule.lhs, true);
            }
        }
    }

    /// Sets membership of a symbol, growing the set when needed.
    pub fn set(&mut self, index: Symbol, elem: bool) {
        let index = index.usize();
        if index >= self.bit_vec.len() {
            if !elem {
                return;
            }
            self.bit_vec.grow(index + 1 - self.bit_vec.len(), false);
        }
        self.bit_vec.set(index, elem);
    }

    /// Checks membership of a symbol.
    pub fn has_sym(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }

    /// Checks whether no symbol is in the set.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.has_sym(index) {
            &TRUE
        } else {
            &FALSE
        }
    }
}

impl Cfg {
    /// Returns the set of terminal symbols against the current grammar.
    pub fn terminal_symbols(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::new();
        set.terminal(self);
        set
    }

    /// Returns the set of nonterminals with an explicit `[ε]` alternative.
    pub fn nulling_symbols(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::new();
        set.nulling(self);
        set
    }

    /// Returns the set of symbols that derive the empty string, `ε` included.
    pub fn nullable_symbols(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::new();
        set.reset(self.sym_source());
        set.set(Symbol::epsilon(), true);
        self.rhs_closure_for_all(&mut set);
        set
    }
}
