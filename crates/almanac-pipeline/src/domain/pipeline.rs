//! Multi-stage pipeline
//!
//! Folds a working set of ranges (or a single value) through an ordered
//! sequence of category maps.

use crate::domain::category_map::{CategoryHeader, CategoryMap};
use crate::domain::range::Range;
use thiserror::Error;
use tracing::debug;

/// Pipeline errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// No (non-empty) range to take a minimum over
    #[error("cannot take the minimum of an empty range set")]
    EmptyInput,
}

/// Snapshot reported after each stage of a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageProgress<'a> {
    /// Zero-based stage position
    pub index: usize,
    /// Category names of the stage, if known
    pub header: Option<&'a CategoryHeader>,
    /// Size of the working set after the stage
    pub ranges: usize,
}

/// Ordered sequence of category maps, applied left to right
#[derive(Clone, Copy, Debug)]
pub struct Pipeline<'a> {
    stages: &'a [CategoryMap],
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline over the given stages
    pub fn new(stages: &'a [CategoryMap]) -> Self {
        Self { stages }
    }

    /// The stages in application order
    pub fn stages(&self) -> &'a [CategoryMap] {
        self.stages
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the pipeline has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Map a set of ranges through every stage
    ///
    /// Output order is deterministic: input order first, then fragment order.
    /// Ranges are never merged, so the working set never shrinks.
    pub fn run(&self, initial: &[Range]) -> Vec<Range> {
        self.run_with_progress(initial, |_| {})
    }

    /// Map a set of ranges through every stage, reporting after each stage
    ///
    /// Empty input ranges are dropped before the first stage.
    pub fn run_with_progress<F>(&self, initial: &[Range], mut on_stage: F) -> Vec<Range>
    where
        F: FnMut(StageProgress<'a>),
    {
        let stages: &'a [CategoryMap] = self.stages;
        let working: Vec<Range> = initial.iter().copied().filter(|r| !r.is_empty()).collect();

        stages
            .iter()
            .enumerate()
            .fold(working, |ranges, (index, stage)| {
                let next: Vec<Range> = ranges
                    .iter()
                    .flat_map(|&range| stage.fragments(range).map(|fragment| fragment.image))
                    .collect();

                debug!(
                    stage = index,
                    name = %stage.header().map(ToString::to_string).unwrap_or_default(),
                    input = ranges.len(),
                    output = next.len(),
                    "stage applied"
                );
                on_stage(StageProgress {
                    index,
                    header: stage.header(),
                    ranges: next.len(),
                });

                next
            })
    }

    /// Smallest value reachable from `initial` after every stage
    pub fn min_location(&self, initial: &[Range]) -> Result<i64, PipelineError> {
        min_start(&self.run(initial))
    }

    /// Map a single value through every stage
    pub fn traverse(&self, x: i64) -> i64 {
        traverse_point(x, self.stages)
    }
}

/// Smallest start among the non-empty ranges
///
/// Within one range the smallest value is always its start, so this is the
/// smallest value in the whole set. Empty ranges hold no value and are ignored.
pub fn min_start(ranges: &[Range]) -> Result<i64, PipelineError> {
    ranges
        .iter()
        .filter(|range| !range.is_empty())
        .map(|range| range.start)
        .min()
        .ok_or(PipelineError::EmptyInput)
}

/// Map a single value through each stage in order
pub fn traverse_point(x: i64, stages: &[CategoryMap]) -> i64 {
    stages.iter().fold(x, |value, stage| stage.lookup_point(value))
}

/// Every intermediate value of a point traversal
///
/// The first element is `x` itself, followed by one value per stage.
pub fn trace_point(x: i64, stages: &[CategoryMap]) -> Vec<i64> {
    let mut path = Vec::with_capacity(stages.len() + 1);
    path.push(x);

    let mut value = x;
    for stage in stages {
        value = stage.lookup_point(value);
        path.push(value);
    }

    path
}
