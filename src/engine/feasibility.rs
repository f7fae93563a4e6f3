//! Necessary-condition pre-filter.
//!
//! Before paying for the exhaustive search, each word gets one cheap scan
//! of the vocabulary. Every symbol occurring in the word contributes its
//! length once per (non-overlapping) occurrence to a running character
//! budget; a word whose budget falls short of its own length is dropped.
//! Pigeonhole: a full tiling spends one table occurrence per covered
//! character, and the occurrence counting here mirrors the position-table
//! scan exactly, so no word with a decomposition is ever dropped.
//!
//! Passing is not sufficient: occurrences may not line up, and the engine
//! can still find nothing. The check's second job is its side output — the
//! applicable-symbol set, which the segmentation engine uses instead of
//! rescanning the vocabulary per offset.

use crate::vocab::Vocabulary;
use crate::{Candidate, SymbolId};

/// Check `word` against the vocabulary.
///
/// Returns `None` if the word is provably unsegmentable, otherwise the
/// word paired with its applicable symbols in vocabulary order. Absence is
/// the only failure signal; there is no error channel.
pub(crate) fn check(word: &str, vocab: &Vocabulary) -> Option<Candidate> {
    let mut applicable: Vec<SymbolId> = Vec::new();
    let mut coverage = 0usize;

    for (id, symbol) in vocab.iter() {
        // `str::matches` counts non-overlapping occurrences, the same ones
        // the position-table scan will later record.
        let occurrences = word.matches(symbol).count();
        if occurrences > 0 {
            coverage += occurrences * symbol.len();
            applicable.push(id);
        }
    }

    if coverage < word.len() {
        if super::debug_enabled() {
            eprintln!("[feasibility:drop] word=\"{word}\" coverage={coverage} len={}", word.len());
        }
        return None;
    }

    Some(Candidate { word: word.to_string(), applicable })
}
