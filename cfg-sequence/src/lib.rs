//! Repetitions are EBNF suffixes on symbols: `X*`, `X+` and `X?`. This crate
//! rewrites them into plain context-free productions.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod ext;
pub mod rewrite;

pub use crate::ext::CfgSequenceExt;
pub use crate::rewrite::RepetitionsToProductions;

use self::Repetition::*;

/// The kind of repetition denoted by a symbol suffix.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Repetition {
    /// `X*`, any number of `X`.
    ZeroOrMore,
    /// `X+`, at least one `X`.
    OneOrMore,
    /// `X?`, an optional `X`.
    ZeroOrOne,
}

impl Repetition {
    /// Returns the repetition denoted by a suffix character.
    pub fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            '*' => Some(ZeroOrMore),
            '+' => Some(OneOrMore),
            '?' => Some(ZeroOrOne),
            _ => None,
        }
    }

    /// Returns the suffix character of this repetition.
    pub fn suffix(self) -> char {
        match self {
            ZeroOrMore => '*',
            OneOrMore => '+',
            ZeroOrOne => '?',
        }
    }

    /// Splits a symbol name into its base and repetition.
    ///
    /// Only the last character is considered, so `X*+` splits into `X*`
    /// and `OneOrMore`. Names of a single character are never split, which
    /// keeps terminals such as `*` intact.
    pub fn split(name: &str) -> Option<(&str, Self)> {
        let mut chars = name.chars();
        let suffix = chars.next_back()?;
        let base = chars.as_str();
        if base.is_empty() {
            return None;
        }
        Self::from_suffix(suffix).map(|repetition| (base, repetition))
    }

    /// Returns the name of the helper nonterminal generated for the base.
    pub fn helper_name(self, base: &str) -> String {
        let tail = match self {
            ZeroOrMore => "zero_or_more",
            OneOrMore => "one_or_more",
            ZeroOrOne => "zero_or_one",
        };
        format!("{}_{}", base, tail)
    }
}
