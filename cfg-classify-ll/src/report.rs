//! Grouping of rendered conflict lines into a readable report.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use cfg_grammar::Cfg;
use thiserror::Error;

use crate::table::LlParseTable;

const SEPARATOR: &str = " with terminal ";

/// Conflicts grouped by nonterminal and alternative.
///
/// Displays as numbered groups, each followed by its sorted terminals:
///
/// ```text
/// [1] S -> a b with terminals:
/// $, a
///
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConflictReport {
    groups: BTreeMap<String, BTreeSet<String>>,
}

/// An error in a conflict line.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ReportError {
    /// The line has no ` with terminal ` part.
    #[error("line {line}: expected `<rule> with terminal <terminal>.`, found `{text}`")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },
}

impl ConflictReport {
    /// Groups conflict lines of the form `<prefix> with terminal
    /// <terminal>.` by prefix. Blank lines are skipped. Terminals repeated
    /// within a group are kept once.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, ReportError> {
        let mut report = ConflictReport::default();
        for (i, line) in lines.into_iter().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !report.insert(line) {
                return Err(ReportError::MalformedLine {
                    line: i + 1,
                    text: line.to_string(),
                });
            }
        }
        Ok(report)
    }

    /// Groups the conflicts of a parse table.
    pub fn from_table(table: &LlParseTable<'_>, grammar: &Cfg) -> Self {
        let mut report = ConflictReport::default();
        for conflict in table.conflicts() {
            report.insert(&conflict.render(grammar));
        }
        report
    }

    fn insert(&mut self, line: &str) -> bool {
        let Some((prefix, suffix)) = line.split_once(SEPARATOR) else {
            return false;
        };
        self.groups
            .entry(prefix.to_string())
            .or_default()
            .insert(suffix.trim_matches('.').to_string());
        true
    }

    /// Iterates over groups, sorted by prefix, each with its sorted
    /// terminals.
    pub fn groups(&self) -> impl Iterator<Item = (&str, Vec<&str>)> + '_ {
        self.groups.iter().map(|(prefix, terminals)| {
            (
                &prefix[..],
                terminals.iter().map(|terminal| &terminal[..]).collect(),
            )
        })
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Checks whether there are no conflicts.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (prefix, terminals)) in self.groups().enumerate() {
            writeln!(f, "[{}] {} with terminals:", i + 1, prefix)?;
            writeln!(f, "{}", terminals.join(", "))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        let lines = "\
            T -> x with terminal y.\n\
            S -> a b with terminal a.\n\
            \n\
            S -> a b with terminal $.\n\
            S -> a b with terminal a.\n";
        let report = ConflictReport::from_lines(lines.lines()).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.to_string(),
            "[1] S -> a b with terminals:\n$, a\n\n[2] T -> x with terminals:\ny\n\n"
        );
    }

    #[test]
    fn test_malformed_line() {
        let result = ConflictReport::from_lines(["S -> a with terminal a.", "garbage"]);
        assert_eq!(
            result,
            Err(ReportError::MalformedLine {
                line: 2,
                text: "garbage".to_string(),
            })
        );
    }

    #[test]
    fn test_from_table() {
        let mut cfg = Cfg::new();
        cfg.rule_named("S")
            .rhs_names(["a"])
            .rhs_names(["a", "b"])
            .rhs_names(["a", "c"]);
        let table = LlParseTable::new(&cfg);
        let report = ConflictReport::from_table(&table, &cfg);
        assert_eq!(
            report.to_string(),
            "[1] S -> a b with terminals:\na\n\n[2] S -> a c with terminals:\na\n\n"
        );
        assert!(ConflictReport::from_lines(std::iter::empty()).unwrap().is_empty());
    }
}
