//! JSON interchange: an array of records `{ "name": .., "bnf": [[..]] }`.

use cfg_grammar::{Cfg, GrammarRecord};
use log::debug;
use serde::Deserialize;

use crate::LoadError;

#[derive(Deserialize)]
struct RawRecord {
    name: String,
    bnf: Vec<RawAlternative>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAlternative {
    Symbols(Vec<String>),
    Malformed(serde_json::Value),
}

/// Loads a grammar from JSON records.
///
/// Records are declared in order. A record whose name was already seen
/// replaces the earlier alternatives and keeps the earlier position.
pub fn load_json(json: &str) -> Result<Cfg, LoadError> {
    let raw: Vec<RawRecord> = serde_json::from_str(json)?;
    let mut records = Vec::with_capacity(raw.len());
    for RawRecord { name, bnf } in raw {
        let mut alternatives = Vec::with_capacity(bnf.len());
        for (index, alternative) in bnf.into_iter().enumerate() {
            match alternative {
                RawAlternative::Symbols(names) if names.is_empty() => {
                    return Err(LoadError::EmptyAlternative {
                        nonterminal: name,
                        index,
                    })
                }
                RawAlternative::Symbols(names) => alternatives.push(names),
                RawAlternative::Malformed(_) => {
                    return Err(LoadError::MalformedAlternative {
                        nonterminal: name,
                        index,
                    })
                }
            }
        }
        records.push(GrammarRecord {
            name,
            bnf: alternatives,
        });
    }
    let cfg = Cfg::from_records(&records)?;
    debug!("loaded {} nonterminals from JSON", cfg.len());
    Ok(cfg)
}

/// Saves the grammar as pretty-printed JSON records.
pub fn to_json(grammar: &Cfg) -> Result<String, LoadError> {
    let records = grammar.to_records()?;
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAMMAR: &str = r#"[
        { "name": "S", "bnf": [["A", "b"], ["c"]] },
        { "name": "A", "bnf": [["ε"]] }
    ]"#;

    #[test]
    fn test_load_json() {
        let cfg = load_json(GRAMMAR).unwrap();
        assert_eq!(cfg.stringify_to_ebnf(), "S ::= A b | c\nA ::= ε\n");
    }

    #[test]
    fn test_json_roundtrip() {
        let cfg = load_json(GRAMMAR).unwrap();
        let json = to_json(&cfg).unwrap();
        let reloaded = load_json(&json).unwrap();
        assert_eq!(reloaded.to_records().unwrap(), cfg.to_records().unwrap());
    }

    #[test]
    fn test_bare_string_alternative() {
        let err = load_json(r#"[{ "name": "S", "bnf": [["a"], "b c"] }]"#).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedAlternative { ref nonterminal, index: 1 } if nonterminal == "S"
        ));
    }

    #[test]
    fn test_empty_alternative() {
        let err = load_json(r#"[{ "name": "S", "bnf": [[]] }]"#).unwrap_err();
        assert!(matches!(err, LoadError::EmptyAlternative { index: 0, .. }));
    }

    #[test]
    fn test_invalid_document() {
        let err = load_json(r#"{ "name": "S" }"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
