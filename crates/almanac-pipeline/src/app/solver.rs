//! Lowest-location workflow
//!
//! Answers the two almanac questions: the lowest location among the listed
//! seeds, and the lowest location among the seed ranges the list describes.

use crate::domain::almanac::{Almanac, AlmanacError};
use crate::domain::pipeline::{PipelineError, min_start};
use rayon::prelude::*;
use tracing::{debug, info};

/// Options for solving
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveOptions {
    /// Evaluate independent seeds and seed ranges on the rayon pool
    pub parallel: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl SolveOptions {
    /// Options for a single-threaded run
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    /// Enable or disable parallel evaluation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Both answers for one almanac
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answers {
    /// Lowest location among the listed seeds
    pub seeds: i64,
    /// Lowest location among the seed ranges
    pub seed_ranges: i64,
}

/// Lowest location reached by any listed seed
///
/// # Errors
/// `PipelineError::EmptyInput` (wrapped) if the almanac lists no seeds.
pub fn lowest_location_for_seeds(
    almanac: &Almanac,
    options: &SolveOptions,
) -> Result<i64, AlmanacError> {
    let seeds = almanac.seeds();

    let lowest = if options.parallel {
        seeds.par_iter().map(|&seed| almanac.location_of(seed)).min()
    } else {
        seeds.iter().map(|&seed| almanac.location_of(seed)).min()
    };

    let lowest = lowest.ok_or(PipelineError::EmptyInput)?;
    info!(seeds = seeds.len(), lowest, "lowest location for seeds");
    Ok(lowest)
}

/// Lowest location reached by any value of any seed range
///
/// The parallel path maps each seed range through the pipeline on its own
/// and reduces with `min`; the sequential path runs them as one working set.
/// Both give the same answer.
///
/// # Errors
/// - `AlmanacError::OddSeedCount` / `SeedRangeOverflow` for an unusable seed list
/// - `PipelineError::EmptyInput` (wrapped) if no seed range holds a value
pub fn lowest_location_for_seed_ranges(
    almanac: &Almanac,
    options: &SolveOptions,
) -> Result<i64, AlmanacError> {
    let ranges = almanac.seed_ranges()?;
    let pipeline = almanac.pipeline();

    let lowest = if options.parallel {
        ranges
            .par_iter()
            .filter(|range| !range.is_empty())
            .map(|range| pipeline.min_location(std::slice::from_ref(range)))
            .try_reduce_with(|a, b| Ok(a.min(b)))
            .unwrap_or(Err(PipelineError::EmptyInput))?
    } else {
        let finals = pipeline.run_with_progress(&ranges, |progress| {
            debug!(stage = progress.index, ranges = progress.ranges, "working set");
        });
        min_start(&finals)?
    };

    info!(ranges = ranges.len(), lowest, "lowest location for seed ranges");
    Ok(lowest)
}

/// Compute both answers
pub fn solve(almanac: &Almanac, options: &SolveOptions) -> Result<Answers, AlmanacError> {
    Ok(Answers {
        seeds: lowest_location_for_seeds(almanac, options)?,
        seed_ranges: lowest_location_for_seed_ranges(almanac, options)?,
    })
}
