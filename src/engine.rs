//! Segmentation engine.
//!
//! This module is the entry point for the batch segmentation pipeline. A
//! run takes raw word-list lines plus a read-only [`crate::Vocabulary`] and
//! produces, for every word, every way to tile it end-to-end with
//! vocabulary symbols.
//!
//! ## How the parts work together
//!
//! ```text
//! raw lines ──► sanitize            (sanitize.rs)
//!                 │  canonical words
//!                 ▼
//!               feasibility         (feasibility.rs)
//!                 │  Candidate { word, applicable symbols }
//!                 ▼
//!               PositionTable::build (positions.rs)
//!                 │  per-offset symbol buckets
//!                 ▼
//!               enumerate           (enumerate.rs)
//!                 │  Vec<Decomposition> (or absent)
//!                 ▼
//!               ResultMap           (dispatch.rs merges)
//! ```
//!
//! Each stage is a pure function over one item. The dispatcher
//! (`dispatch.rs`) fans every stage out across rayon's global pool with
//! order-preserving parallel maps and drops absent results between stages,
//! so no shared mutable state exists anywhere in the pipeline.
//!
//! ## Responsibilities by module
//!
//! - `sanitize.rs`: raw line -> canonical lowercase word, or dropped.
//! - `feasibility.rs`: pigeonhole necessary-condition prune; computes the
//!   applicable-symbol set the engine reuses.
//! - `positions.rs`: per-word occurrence table (offset -> matching symbols).
//! - `enumerate.rs`: memoized depth-first enumeration of all tilings.
//! - `dispatch.rs`: parallel orchestration and the final merge.
//! - `metrics.rs`: per-stage timing and survival counts for runs.
//!
//! ## Failure model
//!
//! Expected pruning (infeasible word, no decomposition) drops the item
//! silently. An unexpected panic inside any item propagates out of the
//! parallel map and aborts the whole run; there is no per-item isolation
//! or retry. The pipeline has no external side effects to roll back, so
//! fail-fast is the whole story.
//!
//! ## Debugging
//!
//! Set `TESSELLA_DEBUG_STAGES=1` to print per-stage survival traces.

#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/enumerate.rs"]
mod enumerate;
#[path = "engine/feasibility.rs"]
mod feasibility;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/positions.rs"]
mod positions;
#[path = "engine/sanitize.rs"]
mod sanitize;

pub(crate) use dispatch::run;
#[allow(unused_imports)]
pub(crate) use metrics::{RunMetrics, RunOutcome, StageMetrics};

/// Stage traces are opt-in via the environment, not a compile feature.
pub(crate) fn debug_enabled() -> bool {
    std::env::var_os("TESSELLA_DEBUG_STAGES").is_some()
}
