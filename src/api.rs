use crate::vocab::{Vocabulary, default_vocabulary};
use crate::{Decomposition, ResultMap, engine};
use std::collections::BTreeMap;
use std::time::Duration;

/// Options that affect solving behavior.
///
/// This is intentionally minimal today and will grow as more batch
/// configuration is exposed.
#[derive(Debug, Clone, Default)]
pub struct Options {
    // later: duplicate-word merge policy, parallelism caps, ...
}

/// One way to spell a word out of vocabulary symbols.
///
/// `symbols` concatenate, in order, to the word exactly; `ranks` are the
/// matching 1-based vocabulary positions (atomic numbers, for the default
/// vocabulary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spelling {
    /// Symbol texts in left-to-right order.
    pub symbols: Vec<String>,
    /// 1-based vocabulary rank of each symbol, same order.
    pub ranks: Vec<usize>,
}

/// Result from [`solve`] and [`solve_with`].
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Word -> all spellings found, words in ascending order, spellings in
    /// the order the engine produced them. Words with none are absent.
    pub spellings: BTreeMap<String, Vec<Spelling>>,
    /// Total elapsed time for the run.
    pub elapsed: Duration,
}

/// Per-stage summary for verbose runs.
#[derive(Debug, Clone)]
pub struct StageSummary {
    pub name: &'static str,
    pub duration: Duration,
    /// Items fed into the stage.
    pub input_items: usize,
    /// Items that survived it.
    pub kept: usize,
    /// First few surviving words, in stage output order.
    pub samples: Vec<String>,
}

/// Additional details returned by [`solve_verbose_with`].
///
/// Compact by design: meant for run summaries and performance inspection,
/// not a dump of internal state.
#[derive(Debug, Clone)]
pub struct SolveDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Pipeline stages in execution order.
    pub stages: Vec<StageSummary>,
    /// Words with at least one spelling.
    pub words_solved: usize,
    /// Total spellings across all words.
    pub spellings_found: usize,
}

/// Result from [`solve_verbose_with`].
#[derive(Debug, Clone)]
pub struct SolveResultVerbose {
    pub spellings: BTreeMap<String, Vec<Spelling>>,
    pub elapsed: Duration,
    pub details: SolveDetails,
}

/// Solve `lines` against the built-in periodic-table vocabulary.
///
/// # Example
/// ```
/// use tessella::solve;
///
/// let out = solve(&["carbon".to_string()]);
/// let spellings = &out.spellings["carbon"];
/// assert!(spellings.iter().any(|s| s.symbols == ["c", "ar", "b", "o", "n"]));
/// ```
pub fn solve(lines: &[String]) -> SolveResult {
    solve_with(lines, default_vocabulary(), &Options::default())
}

/// Solve `lines` against an explicit vocabulary.
///
/// The vocabulary is shared read-only with the workers; the caller keeps
/// ownership and nothing mutates it.
pub fn solve_with(lines: &[String], vocabulary: &Vocabulary, _options: &Options) -> SolveResult {
    let run = engine::run(lines, vocabulary);

    SolveResult {
        spellings: project(run.results, vocabulary),
        elapsed: run.metrics.total,
    }
}

/// Solve `lines` and return per-stage details alongside the results.
///
/// Useful for profiling and batch inspection; the plain [`solve_with`]
/// path does not build the extra summaries.
pub fn solve_verbose_with(
    lines: &[String],
    vocabulary: &Vocabulary,
    _options: &Options,
) -> SolveResultVerbose {
    let run = engine::run(lines, vocabulary);

    let stages = vec![
        stage_summary("sanitize", &run.metrics.sanitize),
        stage_summary("feasibility", &run.metrics.feasibility),
        stage_summary("segmentation", &run.metrics.segmentation),
    ];

    let spellings = project(run.results, vocabulary);
    let words_solved = spellings.len();
    let spellings_found = spellings.values().map(Vec::len).sum();

    SolveResultVerbose {
        spellings,
        elapsed: run.metrics.total,
        details: SolveDetails {
            total: run.metrics.total,
            stages,
            words_solved,
            spellings_found,
        },
    }
}

fn stage_summary(name: &'static str, metrics: &engine::StageMetrics) -> StageSummary {
    StageSummary {
        name,
        duration: metrics.duration,
        input_items: metrics.input_items,
        kept: metrics.kept,
        samples: metrics.samples.clone(),
    }
}

fn project(results: ResultMap, vocabulary: &Vocabulary) -> BTreeMap<String, Vec<Spelling>> {
    results
        .into_iter()
        .map(|(word, decompositions)| {
            let spellings = decompositions.into_iter().map(|d| to_spelling(d, vocabulary)).collect();
            (word, spellings)
        })
        .collect()
}

fn to_spelling(decomposition: Decomposition, vocabulary: &Vocabulary) -> Spelling {
    Spelling {
        symbols: decomposition.ids.iter().map(|&id| vocabulary.symbol(id).to_string()).collect(),
        ranks: decomposition.ids.iter().map(|&id| vocabulary.rank(id)).collect(),
    }
}
