//! Vocabulary handling.
//!
//! A [`Vocabulary`] is an ordered, immutable list of symbol strings. The
//! position of a symbol in that order is its identity: [`SymbolId`] is the
//! 0-based index, and the 1-based *rank* (`id + 1`) is what the output
//! format prints. Matching is always by symbol text; ranks are labels.
//!
//! A vocabulary is loaded once, before any work begins, and shared with
//! the workers as a read-only reference for the rest of the run. Nothing
//! in the crate mutates it after construction.
//!
//! Symbols are matched verbatim against sanitized (lowercase) words, so a
//! custom vocabulary should supply lowercase symbols. The built-in default
//! (see [`default_vocabulary`]) is the 118 periodic-table element symbols,
//! lowercase, in atomic-number order — so rank doubles as atomic number.

use crate::SymbolId;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from vocabulary construction and loading.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("vocabulary is empty")]
    Empty,
    #[error("vocabulary entry at rank {rank} is an empty string")]
    EmptySymbol { rank: usize },
}

/// An ordered, immutable sequence of symbol strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    symbols: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from an already-ordered list of symbols.
    pub fn new(symbols: Vec<String>) -> Self {
        Vocabulary { symbols }
    }

    /// Parse a vocabulary from a JSON array of strings, e.g.
    /// `["h", "he", "li"]`. Rejects empty arrays and empty entries.
    pub fn from_json_str(json: &str) -> Result<Self, VocabError> {
        let vocab: Vocabulary = serde_json::from_str(json)?;
        vocab.validate()?;
        Ok(vocab)
    }

    /// Load a vocabulary from a JSON file (see [`Self::from_json_str`]).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VocabError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<(), VocabError> {
        if self.symbols.is_empty() {
            return Err(VocabError::Empty);
        }
        for (id, symbol) in self.symbols.iter().enumerate() {
            if symbol.is_empty() {
                return Err(VocabError::EmptySymbol { rank: id + 1 });
            }
        }
        Ok(())
    }

    /// Symbol text for `id`. Panics on an out-of-range id; ids only ever
    /// originate from scans of this same vocabulary.
    pub(crate) fn symbol(&self, id: SymbolId) -> &str {
        &self.symbols[id]
    }

    /// 1-based output rank for `id`.
    pub fn rank(&self, id: SymbolId) -> usize {
        id + 1
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate `(id, symbol)` pairs in vocabulary order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> {
        self.symbols.iter().enumerate().map(|(id, s)| (id, s.as_str()))
    }
}

/// The 118 element symbols in atomic-number order, lowercase.
const PERIODIC_SYMBOLS: [&str; 118] = [
    "h", "he", "li", "be", "b", "c", "n", "o", "f", "ne", "na", "mg", "al", "si", "p", "s", "cl",
    "ar", "k", "ca", "sc", "ti", "v", "cr", "mn", "fe", "co", "ni", "cu", "zn", "ga", "ge", "as",
    "se", "br", "kr", "rb", "sr", "y", "zr", "nb", "mo", "tc", "ru", "rh", "pd", "ag", "cd", "in",
    "sn", "sb", "te", "i", "xe", "cs", "ba", "la", "ce", "pr", "nd", "pm", "sm", "eu", "gd", "tb",
    "dy", "ho", "er", "tm", "yb", "lu", "hf", "ta", "w", "re", "os", "ir", "pt", "au", "hg", "tl",
    "pb", "bi", "po", "at", "rn", "fr", "ra", "ac", "th", "pa", "u", "np", "pu", "am", "cm", "bk",
    "cf", "es", "fm", "md", "no", "lr", "rf", "db", "sg", "bh", "hs", "mt", "ds", "rg", "cn", "nh",
    "fl", "mc", "lv", "ts", "og",
];

static PERIODIC_TABLE: Lazy<Vocabulary> =
    Lazy::new(|| Vocabulary::new(PERIODIC_SYMBOLS.iter().map(|s| s.to_string()).collect()));

/// The built-in periodic-table vocabulary.
pub fn default_vocabulary() -> &'static Vocabulary {
    &PERIODIC_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_ranks_are_atomic_numbers() {
        let vocab = default_vocabulary();
        assert_eq!(vocab.len(), 118);
        assert_eq!(vocab.symbol(0), "h");
        assert_eq!(vocab.rank(0), 1);
        assert_eq!(vocab.symbol(1), "he");
        assert_eq!(vocab.symbol(2), "li");
        assert_eq!(vocab.symbol(25), "fe");
        assert_eq!(vocab.rank(25), 26);
        assert_eq!(vocab.symbol(117), "og");
        assert_eq!(vocab.rank(117), 118);
    }

    #[test]
    fn from_json_str_preserves_order() {
        let vocab = Vocabulary::from_json_str(r#"["h", "he", "li"]"#).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.symbol(1), "he");
        let ids: Vec<_> = vocab.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn from_json_str_rejects_empty_array() {
        assert!(matches!(Vocabulary::from_json_str("[]"), Err(VocabError::Empty)));
    }

    #[test]
    fn from_json_str_rejects_empty_symbol() {
        let err = Vocabulary::from_json_str(r#"["h", ""]"#).unwrap_err();
        assert!(matches!(err, VocabError::EmptySymbol { rank: 2 }));
    }

    #[test]
    fn from_json_str_rejects_malformed_json() {
        assert!(matches!(Vocabulary::from_json_str("{not json"), Err(VocabError::Json(_))));
    }
}
