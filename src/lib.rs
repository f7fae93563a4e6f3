extern crate self as tessella;

#[macro_use]
mod macros;
mod api;
mod engine;
mod output;
mod vocab;

pub use api::{
    Options, SolveDetails, SolveResult, SolveResultVerbose, Spelling, StageSummary, solve,
    solve_verbose_with, solve_with,
};
pub use output::{append_lines, format_line, write_lines};
pub use vocab::{VocabError, Vocabulary, default_vocabulary};

use std::collections::BTreeMap;

// --- Internal types ---------------------------------------------------------

/// 0-based index of a symbol within the vocabulary order. The 1-based rank
/// used for output labeling is always `id + 1`; matching logic never looks
/// at ranks.
pub(crate) type SymbolId = usize;

/// A word that survived the feasibility filter, paired with the vocabulary
/// symbols that occur somewhere in it (in vocabulary order).
///
/// The applicable set is computed once by the filter and reused by the
/// segmentation engine; the engine never rescans the full vocabulary.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub word: String,
    pub applicable: Vec<SymbolId>,
}

/// One full tiling of a word: symbol ids in left-to-right order.
///
/// Concatenating the referenced symbols reproduces the word exactly, with
/// no gaps or overlaps. This is structural: the enumerator only extends a
/// prefix that ends flush at the current offset, so no post-hoc coverage
/// check exists anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decomposition {
    pub ids: Vec<SymbolId>,
}

/// Word -> every decomposition found for it. Words with none are absent
/// (never present with an empty list). A `BTreeMap` so iteration yields
/// words in ascending lexicographic order, which is the order the output
/// format wants.
pub(crate) type ResultMap = BTreeMap<String, Vec<Decomposition>>;
