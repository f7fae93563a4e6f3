//! Exhaustive decomposition enumeration.
//!
//! Given a word's [`PositionTable`], enumerate *every* tiling of the word
//! by vocabulary symbols: a depth-first walk that, at each offset, tries
//! each symbol in that offset's bucket and extends from where the symbol
//! ends. Full coverage with no gaps or overlaps is structural — a branch
//! either lands exactly on the end of the word or keeps walking.
//!
//! ```text
//! "hehe", vocabulary ["h", "he", "li"]
//!
//! offset 0 ──h──► offset 1: empty bucket, dead end (pruned, no recursion)
//!          ──he─► offset 2 ──h──► offset 3: dead end
//!                          ──he─► offset 4 == len: complete ✓
//!
//! result: [he, he]            (exactly one decomposition)
//! ```
//!
//! Different branches frequently re-enter the same offset, so results are
//! memoized per start offset in a table indexed by offset. The memo only
//! short-circuits re-expansion; the set of decompositions and their
//! emission order (bucket order, depth first) are identical to the plain
//! recursion, which the tests check against a naive reference.
//!
//! Worst-case output is still exponential in overlapping matches — every
//! tiling is materialized. Fine for puzzle-length words; a known ceiling
//! for very long ones.

use super::positions::PositionTable;
use crate::vocab::Vocabulary;
use crate::{Decomposition, SymbolId};

/// Enumerate all decompositions of `word`, or `None` when there are none.
pub(crate) fn enumerate(
    word: &str,
    table: &PositionTable,
    vocab: &Vocabulary,
) -> Option<Vec<Decomposition>> {
    if word.is_empty() {
        return None;
    }

    let mut memo: Vec<Option<Vec<Vec<SymbolId>>>> = vec![None; table.len()];
    let tilings = tails_from(0, table, vocab, &mut memo);

    if tilings.is_empty() {
        None
    } else {
        Some(tilings.into_iter().map(|ids| Decomposition { ids }).collect())
    }
}

/// All tilings of the word's suffix starting at `offset`, memoized by
/// `offset`.
fn tails_from(
    offset: usize,
    table: &PositionTable,
    vocab: &Vocabulary,
    memo: &mut Vec<Option<Vec<Vec<SymbolId>>>>,
) -> Vec<Vec<SymbolId>> {
    if let Some(cached) = &memo[offset] {
        return cached.clone();
    }

    let word_len = table.len();
    let mut found: Vec<Vec<SymbolId>> = Vec::new();

    for &id in table.bucket(offset) {
        // A recorded occurrence never runs past the end of the word, so
        // `next` is at most `word_len`.
        let next = offset + vocab.symbol(id).len();

        if next == word_len {
            found.push(vec![id]);
            continue;
        }

        if table.bucket(next).is_empty() {
            // Dead end: nothing can continue from there, skip without
            // recursing.
            continue;
        }

        for tail in tails_from(next, table, vocab, memo) {
            let mut ids = Vec::with_capacity(tail.len() + 1);
            ids.push(id);
            ids.extend(tail);
            found.push(ids);
        }
    }

    memo[offset] = Some(found.clone());
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(symbols: &[&str]) -> Vocabulary {
        Vocabulary::new(symbols.iter().map(|s| s.to_string()).collect())
    }

    fn table_for(word: &str, vocab: &Vocabulary) -> PositionTable {
        let applicable: Vec<SymbolId> = (0..vocab.len()).collect();
        PositionTable::build(word, &applicable, vocab)
    }

    fn ids(decompositions: &[Decomposition]) -> Vec<Vec<SymbolId>> {
        decompositions.iter().map(|d| d.ids.clone()).collect()
    }

    /// Plain unmemoized recursion, written directly off the stage
    /// description, used as a reference for the memoized enumerator.
    fn reference_tails(offset: usize, table: &PositionTable, vocab: &Vocabulary) -> Vec<Vec<SymbolId>> {
        let mut found = Vec::new();
        for &id in table.bucket(offset) {
            let next = offset + vocab.symbol(id).len();
            if next == table.len() {
                found.push(vec![id]);
                continue;
            }
            if table.bucket(next).is_empty() {
                continue;
            }
            for tail in reference_tails(next, table, vocab) {
                let mut full = vec![id];
                full.extend(tail);
                found.push(full);
            }
        }
        found
    }

    #[test]
    fn hehe_has_exactly_one_decomposition() {
        let v = vocab(&["h", "he", "li"]);
        let table = table_for("hehe", &v);
        let result = enumerate("hehe", &table, &v).unwrap();

        // "h" at offset 0 dead-ends (offset 1 is empty); "he,he" completes.
        assert_eq!(ids(&result), vec![vec![1, 1]]);
    }

    #[test]
    fn boron_branches_at_the_shared_offset() {
        let v = vocab(&["b", "o", "r", "on", "n"]);
        let table = table_for("boron", &v);
        let result = enumerate("boron", &table, &v).unwrap();

        // Offset 3 holds both "o" (continuing to "n") and "on" (completing
        // the word); both branches survive, in bucket order.
        assert_eq!(ids(&result), vec![vec![0, 1, 2, 1, 4], vec![0, 1, 2, 3]]);
    }

    #[test]
    fn concatenation_reproduces_the_word() {
        let v = vocab(&["c", "ca", "ar", "r", "b", "o", "n", "rb"]);
        let table = table_for("carbon", &v);
        let result = enumerate("carbon", &table, &v).unwrap();

        assert!(!result.is_empty());
        for d in &result {
            let rebuilt: String = d.ids.iter().map(|&id| v.symbol(id)).collect();
            assert_eq!(rebuilt, "carbon");
        }
    }

    #[test]
    fn absence_when_no_tiling_exists() {
        // Both symbols occur, but no branch reaches the end.
        let v = vocab(&["ab", "ba"]);
        let table = table_for("aba", &v);
        assert!(enumerate("aba", &table, &v).is_none());
    }

    #[test]
    fn empty_word_yields_absence() {
        let v = vocab(&["h"]);
        let table = table_for("", &v);
        assert!(enumerate("", &table, &v).is_none());
    }

    #[test]
    fn memoized_matches_reference_enumeration() {
        let v = vocab(&["a", "aa", "aaa", "b", "ab"]);
        for word in ["aaaa", "aaaaaa", "abab", "aabaa", "ababa"] {
            let table = table_for(word, &v);
            let expected = reference_tails(0, &table, &v);
            let actual = enumerate(word, &table, &v).map(|ds| ids(&ds)).unwrap_or_default();
            assert_eq!(actual, expected, "word {word:?}");
        }
    }

    #[test]
    fn shared_suffixes_are_enumerated_once_per_offset() {
        // Heavily overlapping single-letter matches: every offset is
        // reachable from many parent branches, so this word leans hardest
        // on the memo. The materialized tilings must still match the plain
        // recursion exactly, order included.
        let v = vocab(&["a", "aa"]);
        let word = "a".repeat(12);
        let table = table_for(&word, &v);
        let result = enumerate(&word, &table, &v).unwrap();

        let expected = reference_tails(0, &table, &v);
        assert_eq!(ids(&result), expected);
    }
}
