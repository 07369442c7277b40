//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs. Every symbol carries a name, which is kept by its `SymbolSource`.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod source;
mod symbol;

pub use self::source::{SymbolName, SymbolSource, EPSILON};
pub use self::symbol::{Symbol, SymbolRepr};
