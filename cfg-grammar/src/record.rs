//! The sequence-of-records form of a grammar, used for interchange.
//!
//! Conversion between `Cfg` and records is lossless and keeps the order
//! of nonterminals, alternatives and symbols.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GrammarError;
use crate::local_prelude::*;

/// A nonterminal along with its alternatives, spelled with symbol names.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrammarRecord {
    /// The name of the nonterminal.
    pub name: String,
    /// Alternatives, each a list of symbol names.
    pub bnf: Vec<Vec<String>>,
}

impl GrammarRecord {
    /// Creates a record from string slices.
    pub fn new<'a>(
        name: &str,
        bnf: impl IntoIterator<Item = impl IntoIterator<Item = &'a str>>,
    ) -> Self {
        GrammarRecord {
            name: name.to_string(),
            bnf: bnf
                .into_iter()
                .map(|rhs| rhs.into_iter().map(str::to_string).collect())
                .collect(),
        }
    }
}

impl Cfg {
    /// Builds a grammar from records.
    ///
    /// A record whose name was already seen replaces the earlier
    /// alternatives but keeps the earlier position.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a GrammarRecord>,
    ) -> Result<Self, GrammarError> {
        let mut cfg = Cfg::new();
        for record in records {
            let lhs = cfg.sym(&record.name);
            let mut alternatives = Vec::with_capacity(record.bnf.len());
            for (index, names) in record.bnf.iter().enumerate() {
                if names.is_empty() {
                    return Err(GrammarError::EmptyAlternative {
                        nonterminal: record.name.clone(),
                        index,
                    });
                }
                let rhs: Rhs = names.iter().map(|name| cfg.sym(name)).collect();
                alternatives.push(rhs);
            }
            cfg.set_alternatives(lhs, alternatives);
        }
        Ok(cfg)
    }

    /// Converts the grammar to records, decoding every symbol to its name.
    pub fn to_records(&self) -> Result<Vec<GrammarRecord>, GrammarError> {
        self.iter()
            .map(|(lhs, alternatives)| -> Result<GrammarRecord, GrammarError> {
                let bnf = alternatives
                    .iter()
                    .map(|rhs| {
                        rhs.iter()
                            .map(|&sym| self.name_of(sym).map(str::to_string))
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(GrammarRecord {
                    name: self.name_of(lhs)?.to_string(),
                    bnf,
                })
            })
            .collect()
    }
}
