//! The LL(1) grammar class: parse tables, their conflicts, and
//! classification of nonterminals.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod branch;
pub mod next_step;
pub mod report;
pub mod table;

pub use crate::branch::{BranchPaths, BranchStep};
pub use crate::next_step::NextStepTable;
pub use crate::report::{ConflictReport, ReportError};
pub use crate::table::{LlClassification, LlConflict, LlNonterminalClass, LlParseTable};

use cfg_grammar::Cfg;
use cfg_symbol::Symbol;

/// Extends `Cfg` with LL(1) analysis.
pub trait CfgLlExt {
    /// Builds the LL(1) parse table, recording conflicts.
    fn ll_parse_table(&self) -> LlParseTable<'_>;

    /// Renders every conflict of the LL(1) parse table, one per line.
    fn ll_conflict_lines(&self) -> Vec<String>;

    /// Collects leftmost derivation paths from `root`, grouped by the token
    /// they reach.
    fn branch_paths(&self, root: Symbol) -> BranchPaths;

    /// Builds the table of candidate alternatives per nonterminal and
    /// starting token.
    fn next_step_table(&self) -> NextStepTable;
}

impl CfgLlExt for Cfg {
    fn ll_parse_table(&self) -> LlParseTable<'_> {
        LlParseTable::new(self)
    }

    fn ll_conflict_lines(&self) -> Vec<String> {
        let table = self.ll_parse_table();
        table
            .conflicts()
            .iter()
            .map(|conflict| conflict.render(self))
            .collect()
    }

    fn branch_paths(&self, root: Symbol) -> BranchPaths {
        BranchPaths::new(self, root)
    }

    fn next_step_table(&self) -> NextStepTable {
        NextStepTable::new(self)
    }
}
