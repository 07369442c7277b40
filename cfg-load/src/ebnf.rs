//! Loading of EBNF listings, in the form produced by
//! `Cfg::stringify_to_ebnf`.
//!
//! ```text
//! expr ::= term expr' | minus expr
//! expr' ::= plus term expr' | ε
//! ```
//!
//! Each non-blank line defines one nonterminal. Symbols are separated by
//! whitespace, and alternatives by a standalone `|`. Any other token is a
//! symbol name, so names such as `expr'`, `item*` or `(` need no quoting.

use cfg_grammar::{Cfg, Rhs};
use log::debug;

use crate::LoadError;

const BNF_OP: &str = "::=";
const PIPE: &str = "|";

/// Loads a grammar from an EBNF listing.
///
/// Nonterminals are declared in order of their lines. A line whose name
/// was already defined replaces the earlier alternatives and keeps the
/// earlier position.
pub fn load_ebnf(listing: &str) -> Result<Cfg, LoadError> {
    let mut cfg = Cfg::new();
    for (i, line) in listing.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (name, rhs) = line.split_once(BNF_OP).ok_or_else(|| LoadError::Syntax {
            line: line_no,
            reason: format!("expected `{}`", BNF_OP),
        })?;
        let name = name.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(LoadError::Syntax {
                line: line_no,
                reason: format!("expected a single name before `{}`, found `{}`", BNF_OP, name),
            });
        }
        let lhs = cfg.sym(name);
        let mut alternatives: Vec<Rhs> = vec![];
        let mut current = vec![];
        let mut tokens = rhs.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return Err(LoadError::EmptyAlternative {
                nonterminal: name.to_string(),
                index: 0,
            });
        }
        loop {
            let token = tokens.next();
            if let Some(token) = token.filter(|&token| token != PIPE) {
                current.push(cfg.sym(token));
                continue;
            }
            if current.is_empty() {
                return Err(LoadError::EmptyAlternative {
                    nonterminal: name.to_string(),
                    index: alternatives.len(),
                });
            }
            alternatives.push(current.drain(..).collect());
            if token.is_none() {
                break;
            }
        }
        cfg.set_alternatives(lhs, alternatives);
    }
    debug!("loaded {} nonterminals from EBNF", cfg.len());
    Ok(cfg)
}
