//! Data-parallel pipeline orchestration.
//!
//! Runs the three stages across the whole work set:
//!
//! ```text
//! lines ─ par map ─► words ─ par map ─► candidates ─ par map ─► solved
//!            sanitize           feasibility              table + enumerate
//!                                                              │
//!                                                              ▼
//!                                                          ResultMap
//! ```
//!
//! Every stage is an order-preserving parallel map (`par_iter` +
//! `filter_map` + `collect`, which rayon collects in input order) with the
//! absent results discarded before the next stage. All three stages share
//! rayon's global pool; nothing is spawned or torn down per stage.
//!
//! The vocabulary is passed in as a plain shared reference — workers get a
//! read-only view, never a copy and never a global.
//!
//! A panic inside any item propagates out of the parallel map and aborts
//! the run: fail-fast, no per-item isolation.

use super::metrics::{RunMetrics, RunOutcome, SAMPLE_CAP, StageMetrics};
use super::positions::PositionTable;
use super::{enumerate, feasibility, sanitize};
use crate::vocab::Vocabulary;
use crate::{Candidate, Decomposition, ResultMap};
use rayon::prelude::*;
use std::time::Instant;

/// Run the full pipeline over `lines` with `vocab`.
pub(crate) fn run(lines: &[String], vocab: &Vocabulary) -> RunOutcome {
    let total_start = Instant::now();
    let debug = super::debug_enabled();

    // Stage 1: raw lines -> canonical words.
    let stage_start = Instant::now();
    let words: Vec<String> = lines.par_iter().filter_map(|line| sanitize::sanitize(line)).collect();
    let sanitize_metrics = StageMetrics {
        duration: stage_start.elapsed(),
        input_items: lines.len(),
        kept: words.len(),
        samples: take_samples(words.iter().map(String::as_str)),
    };
    if debug {
        eprintln!("[stage:sanitize] kept {}/{}", words.len(), lines.len());
    }

    // Stage 2: prune infeasible words, computing applicable symbols.
    let stage_start = Instant::now();
    let candidates: Vec<Candidate> =
        words.par_iter().filter_map(|word| feasibility::check(word, vocab)).collect();
    let feasibility_metrics = StageMetrics {
        duration: stage_start.elapsed(),
        input_items: words.len(),
        kept: candidates.len(),
        samples: take_samples(candidates.iter().map(|c| c.word.as_str())),
    };
    if debug {
        eprintln!("[stage:feasibility] kept {}/{}", candidates.len(), words.len());
    }

    // Stage 3: build each word's position table and enumerate tilings.
    let stage_start = Instant::now();
    let solved: Vec<(String, Vec<Decomposition>)> = candidates
        .par_iter()
        .filter_map(|candidate| {
            let table = PositionTable::build(&candidate.word, &candidate.applicable, vocab);
            enumerate::enumerate(&candidate.word, &table, vocab)
                .map(|decompositions| (candidate.word.clone(), decompositions))
        })
        .collect();
    let segmentation_metrics = StageMetrics {
        duration: stage_start.elapsed(),
        input_items: candidates.len(),
        kept: solved.len(),
        samples: take_samples(solved.iter().map(|(word, _)| word.as_str())),
    };
    if debug {
        eprintln!("[stage:segmentation] kept {}/{}", solved.len(), candidates.len());
    }

    // Merge keyed by word. A duplicate input word overwrites its earlier
    // entry; identical words produce identical decomposition lists, so the
    // overwrite is not observable in the output.
    let mut results = ResultMap::new();
    for (word, decompositions) in solved {
        results.insert(word, decompositions);
    }

    RunOutcome {
        results,
        metrics: RunMetrics {
            total: total_start.elapsed(),
            sanitize: sanitize_metrics,
            feasibility: feasibility_metrics,
            segmentation: segmentation_metrics,
        },
    }
}

fn take_samples<'a>(survivors: impl Iterator<Item = &'a str>) -> Vec<String> {
    survivors.take(SAMPLE_CAP).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(symbols: &[&str]) -> Vocabulary {
        Vocabulary::new(symbols.iter().map(|s| s.to_string()).collect())
    }

    fn lines(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn infeasible_words_never_reach_the_results() {
        let v = vocab(&["h", "he", "li"]);
        let run = run(&lines(&["hehe", "xyz", "lihe"]), &v);

        assert!(run.results.contains_key("hehe"));
        assert!(run.results.contains_key("lihe"));
        assert!(!run.results.contains_key("xyz"));
    }

    #[test]
    fn words_without_decompositions_are_absent_not_empty() {
        // "aba" passes the filter (budget 4 >= 3) but has no tiling: "ab"
        // dead-ends one short of the end and "ba" never starts at 0.
        let v = vocab(&["ab", "ba"]);
        let run = run(&lines(&["aba"]), &v);
        assert!(run.results.is_empty());
    }

    #[test]
    fn stage_counts_track_survival() {
        let v = vocab(&["h", "he", "li"]);
        let run = run(&lines(&["Hehe\n", "", "x!", "xyz", "he"]), &v);

        assert_eq!(run.metrics.sanitize.input_items, 5);
        assert_eq!(run.metrics.sanitize.kept, 3); // hehe, xyz, he
        assert_eq!(run.metrics.feasibility.input_items, 3);
        assert_eq!(run.metrics.feasibility.kept, 2); // hehe, he
        assert_eq!(run.metrics.segmentation.input_items, 2);
        assert_eq!(run.metrics.segmentation.kept, 2);
        assert_eq!(run.results.len(), 2);
    }

    #[test]
    fn stage_samples_preserve_input_order() {
        // The parallel maps must collect in input order; the recorded
        // samples are the first survivors and would scramble if ordering
        // broke.
        let v = vocab(&["h", "he", "li"]);
        let input = lines(&["lili", "x9", "hehe", "", "heli", "xyz", "hehehe"]);
        let run = run(&input, &v);

        assert_eq!(run.metrics.sanitize.samples, vec!["lili", "hehe", "heli", "xyz", "hehehe"]);
        assert_eq!(run.metrics.feasibility.samples, vec!["lili", "hehe", "heli", "hehehe"]);
        assert_eq!(run.metrics.segmentation.samples, vec!["lili", "hehe", "heli", "hehehe"]);
    }

    #[test]
    fn duplicate_words_collapse_to_one_entry() {
        let v = vocab(&["h", "he"]);
        let run = run(&lines(&["hehe", "hehe", "HEHE"]), &v);

        assert_eq!(run.results.len(), 1);
        assert_eq!(run.results["hehe"].len(), 1);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let v = vocab(&["b", "o", "r", "on", "n", "bo"]);
        let input = lines(&["boron", "bob", "onon", "no"]);

        let first = run(&input, &v);
        let second = run(&input, &v);
        assert_eq!(first.results, second.results);
    }
}
