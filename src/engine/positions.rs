//! Position table construction.
//!
//! The enumerator needs to know, for every character offset of a word,
//! which symbols match starting exactly there. This module builds that
//! table once per word from the applicable-symbol set, so the recursive
//! search never touches the vocabulary again.
//!
//! ```text
//! word: "hehe"     vocabulary: ["h", "he", "li"]
//!
//! offset:  0        1    2        3
//! bucket:  {h, he}  {}   {h, he}  {}
//! ```
//!
//! Occurrences of one symbol are scanned left to right, and each search
//! resumes strictly after the end of the previous match. Repeats of the
//! same symbol therefore never overlap: "aa" inside "aaaa" lands at
//! offsets 0 and 2, never 1. Overlapping repeats are invisible to the
//! enumerator by construction; tests pin this down.

use crate::SymbolId;
use crate::vocab::Vocabulary;

/// Per-word occurrence table: bucket `i` holds the ids of symbols that
/// match the word starting at offset `i`, in applicable-set order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PositionTable {
    buckets: Vec<Vec<SymbolId>>,
}

impl PositionTable {
    /// Build the table for `word` from its applicable symbols.
    ///
    /// The resume offset strictly increases with every recorded match, so
    /// the scan for one symbol is bounded by the word length; no retry cap
    /// is needed.
    pub fn build(word: &str, applicable: &[SymbolId], vocab: &Vocabulary) -> Self {
        let mut buckets = vec![Vec::new(); word.len()];

        for &id in applicable {
            let symbol = vocab.symbol(id);
            if symbol.is_empty() {
                // An empty symbol would match at its own end forever.
                continue;
            }

            let mut from = 0;
            while let Some(found) = word[from..].find(symbol) {
                let at = from + found;
                buckets[at].push(id);
                from = at + symbol.len();
            }
        }

        PositionTable { buckets }
    }

    /// Symbol ids matching at `offset`.
    pub fn bucket(&self, offset: usize) -> &[SymbolId] {
        &self.buckets[offset]
    }

    /// Table length == word length.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(symbols: &[&str]) -> Vocabulary {
        Vocabulary::new(symbols.iter().map(|s| s.to_string()).collect())
    }

    fn all_ids(vocab: &Vocabulary) -> Vec<SymbolId> {
        (0..vocab.len()).collect()
    }

    #[test]
    fn buckets_hold_symbols_at_their_start_offsets() {
        let v = vocab(&["h", "he", "li"]);
        let table = PositionTable::build("hehe", &[0, 1], &v);

        assert_eq!(table.len(), 4);
        assert_eq!(table.bucket(0), &[0, 1]);
        assert_eq!(table.bucket(1), &[] as &[SymbolId]);
        assert_eq!(table.bucket(2), &[0, 1]);
        assert_eq!(table.bucket(3), &[] as &[SymbolId]);
    }

    #[test]
    fn same_symbol_occurrences_never_overlap() {
        let v = vocab(&["aa"]);
        let table = PositionTable::build("aaaa", &all_ids(&v), &v);

        assert_eq!(table.bucket(0), &[0]);
        assert_eq!(table.bucket(1), &[] as &[SymbolId]);
        assert_eq!(table.bucket(2), &[0]);
        assert_eq!(table.bucket(3), &[] as &[SymbolId]);
    }

    #[test]
    fn distinct_symbols_may_share_a_bucket() {
        let v = vocab(&["b", "o", "r", "on", "n"]);
        let table = PositionTable::build("boron", &all_ids(&v), &v);

        assert_eq!(table.bucket(0), &[0]); // b
        assert_eq!(table.bucket(1), &[1]); // o
        assert_eq!(table.bucket(2), &[2]); // r
        assert_eq!(table.bucket(3), &[1, 3]); // o, on
        assert_eq!(table.bucket(4), &[4]); // n
    }

    #[test]
    fn only_applicable_symbols_are_scanned() {
        let v = vocab(&["h", "he"]);
        // "he" deliberately excluded from the applicable set.
        let table = PositionTable::build("hehe", &[0], &v);

        assert_eq!(table.bucket(0), &[0]);
        assert_eq!(table.bucket(2), &[0]);
    }

    #[test]
    fn long_repetitive_words_scan_to_completion() {
        // The old implementation capped occurrence scanning at a magic
        // iteration count; the resume-offset bound has no such ceiling.
        let word = "a".repeat(500);
        let v = vocab(&["a"]);
        let table = PositionTable::build(&word, &all_ids(&v), &v);

        assert_eq!(table.len(), 500);
        assert!((0..500).all(|i| table.bucket(i) == [0]));
    }
}
