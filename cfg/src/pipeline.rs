//! Runs transformation passes over a grammar in a chosen order.

use std::fmt;
use std::str::FromStr;

use cfg_factor::{CfgFactorExt, FactorError};
use cfg_grammar::Cfg;
use cfg_left_recursion::CfgLeftRecursionExt;
use cfg_sequence::CfgSequenceExt;
use log::debug;
use thiserror::Error;

/// A single transformation over a grammar.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Pass {
    /// Rewrites `X*`, `X+` and `X?` into helper nonterminals.
    ExpandRepetitions,
    /// Removes direct and indirect left recursion.
    EliminateLeftRecursion,
    /// Factors prefixes shared by all alternatives of a nonterminal.
    FactorCommonPrefixes,
    /// Replaces alternatives made of a single nonterminal.
    InlineUnitAlternatives,
    /// Strips `ε` from longer alternatives and keeps one `[ε]`, last.
    NormalizeEpsilons,
    /// Merges nonterminals with identical alternatives.
    Deduplicate,
}

/// An ordered list of passes.
///
/// ```
/// use cfg::{Cfg, Pipeline};
///
/// let mut grammar = Cfg::new();
/// grammar.rule_named("A").rhs_names(["A", "a"]).rhs_names(["b"]);
/// let grammar = Pipeline::left_recursion().run(grammar).unwrap();
/// assert_eq!(grammar.stringify_to_ebnf(), "A ::= b A'\nA' ::= a A' | ε\n");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pipeline {
    passes: Vec<Pass>,
}

/// An error in choosing or running passes.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PipelineError {
    /// The mode is not one of `expand`, `lr`, `cp` or `all`.
    #[error("unknown mode `{0}`, expected one of `expand`, `lr`, `cp`, `all`")]
    UnknownMode(String),
    /// A factoring pass failed.
    #[error(transparent)]
    Factor(#[from] FactorError),
}

impl Pipeline {
    /// Creates a pipeline without passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The `expand` mode: expansion of repetitions.
    pub fn expand() -> Self {
        Self::new().then(Pass::ExpandRepetitions)
    }

    /// The `lr` mode: expansion of repetitions, then elimination of left
    /// recursion.
    pub fn left_recursion() -> Self {
        Self::expand().then(Pass::EliminateLeftRecursion)
    }

    /// The `cp` mode: factoring of common prefixes.
    pub fn factor() -> Self {
        Self::new().then(Pass::FactorCommonPrefixes)
    }

    /// The `all` mode: the `lr` mode followed by the `cp` mode.
    pub fn all() -> Self {
        Self::left_recursion().then(Pass::FactorCommonPrefixes)
    }

    /// Appends a pass.
    pub fn then(mut self, pass: Pass) -> Self {
        self.passes.push(pass);
        self
    }

    /// Appends normalization of `ε`.
    pub fn normalize_epsilons(self) -> Self {
        self.then(Pass::NormalizeEpsilons)
    }

    /// Appends merging of identical nonterminals.
    pub fn deduplicate(self) -> Self {
        self.then(Pass::Deduplicate)
    }

    /// Returns the passes in order.
    pub fn passes(&self) -> &[Pass] {
        &self.passes[..]
    }

    /// Runs every pass in order.
    pub fn run(&self, mut grammar: Cfg) -> Result<Cfg, PipelineError> {
        for &pass in &self.passes {
            debug!("running {}", pass);
            grammar = match pass {
                Pass::ExpandRepetitions => grammar.expand_repetitions(),
                Pass::EliminateLeftRecursion => grammar.eliminate_left_recursion(),
                Pass::FactorCommonPrefixes => grammar.factor_common_prefixes(),
                Pass::InlineUnitAlternatives => grammar.inline_unit_alternatives()?,
                Pass::NormalizeEpsilons => grammar.normalize_epsilons(),
                Pass::Deduplicate => grammar.deduplicate(),
            };
        }
        Ok(grammar)
    }
}

impl FromStr for Pipeline {
    type Err = PipelineError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "expand" => Ok(Pipeline::expand()),
            "lr" => Ok(Pipeline::left_recursion()),
            "cp" => Ok(Pipeline::factor()),
            "all" => Ok(Pipeline::all()),
            _ => Err(PipelineError::UnknownMode(mode.to_string())),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pass::ExpandRepetitions => "repetition expansion",
            Pass::EliminateLeftRecursion => "left recursion elimination",
            Pass::FactorCommonPrefixes => "common prefix factoring",
            Pass::InlineUnitAlternatives => "unit alternative inlining",
            Pass::NormalizeEpsilons => "epsilon normalization",
            Pass::Deduplicate => "deduplication",
        };
        f.write_str(name)
    }
}
