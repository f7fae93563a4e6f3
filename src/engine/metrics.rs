//! Run metrics.
//!
//! Small observation structs for batch runs: how long each pipeline stage
//! took, how many items it saw, and how many survived. Collected on every
//! run — the counters are a handful of integers per stage — and surfaced
//! through the verbose API and the CLI summary.
//!
//! `StageMetrics::samples` keeps the first few surviving words of a stage
//! for human inspection. Because the parallel maps preserve input order,
//! the samples double as a cheap order-preservation probe in tests.

use crate::ResultMap;
use std::time::Duration;

/// How many surviving words each stage records for inspection.
pub const SAMPLE_CAP: usize = 8;

/// Timing and survival for one pipeline stage.
#[derive(Debug, Default, Clone)]
pub struct StageMetrics {
    /// Elapsed wall time for the stage's parallel map.
    pub duration: Duration,
    /// Items fed into the stage.
    pub input_items: usize,
    /// Items that survived the stage.
    pub kept: usize,
    /// First few surviving words, in output order.
    pub samples: Vec<String>,
}

/// Timings for a whole run.
#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time, input lines to merged results.
    pub total: Duration,
    pub sanitize: StageMetrics,
    pub feasibility: StageMetrics,
    pub segmentation: StageMetrics,
}

/// Engine output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Merged word -> decompositions map.
    pub results: ResultMap,
    pub metrics: RunMetrics,
}
