//! Almanac aggregate
//!
//! Holds the seed list and the ordered category maps produced by the loader,
//! validates their shape, and hands them to the pipeline.

use crate::constants::{SEED_CATEGORY, STAGE_COUNT};
use crate::domain::category_map::CategoryMap;
use crate::domain::pipeline::{Pipeline, PipelineError, trace_point, traverse_point};
use crate::domain::range::Range;
use thiserror::Error;

#[cfg(feature = "category-index")]
use rustc_hash::FxHashMap;

/// Validation options for almanac construction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlmanacOptions {
    /// Required number of category maps (None = any count)
    pub expected_stages: Option<usize>,
    /// Require named stages to form a chain starting at the seed category
    pub validate_chain: bool,
}

impl AlmanacOptions {
    /// Canonical almanac: seven stages chained from seed to location
    pub fn strict() -> Self {
        Self {
            expected_stages: Some(STAGE_COUNT),
            validate_chain: true,
        }
    }

    /// Accept any number of stages in any naming
    pub fn relaxed() -> Self {
        Self {
            expected_stages: None,
            validate_chain: false,
        }
    }

}

impl Default for AlmanacOptions {
    fn default() -> Self {
        Self::strict()
    }
}

/// Almanac errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlmanacError {
    /// Wrong number of category maps
    #[error("malformed almanac: expected {expected} category maps, found {found}")]
    MalformedAlmanac { expected: usize, found: usize },
    /// A stage does not read the category its predecessor produces
    #[error("broken category chain at stage {index}: expected source '{expected}', found '{found}'")]
    BrokenChain {
        index: usize,
        expected: String,
        found: String,
    },
    /// Seed ranges need (start, length) pairs
    #[error("seed list has {0} values, seed ranges need an even count")]
    OddSeedCount(usize),
    /// `start + length` of a seed range does not fit in an i64
    #[error("seed range overflows (start = {start}, length = {length})")]
    SeedRangeOverflow { start: i64, length: i64 },
    /// Answer extraction failed
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Seed list plus the ordered category maps
#[derive(Clone, Debug)]
pub struct Almanac {
    seeds: Vec<i64>,
    stages: Vec<CategoryMap>,
    #[cfg(feature = "category-index")]
    by_source: FxHashMap<String, usize>,
}

impl Almanac {
    /// Create an almanac with strict validation
    pub fn new(seeds: Vec<i64>, stages: Vec<CategoryMap>) -> Result<Self, AlmanacError> {
        Self::with_options(seeds, stages, &AlmanacOptions::strict())
    }

    /// Create an almanac, validating against `options`
    ///
    /// A stage count mismatch is fatal: no partial almanac is ever built.
    pub fn with_options(
        seeds: Vec<i64>,
        stages: Vec<CategoryMap>,
        options: &AlmanacOptions,
    ) -> Result<Self, AlmanacError> {
        validate_stages(&stages, options)?;

        #[cfg(feature = "category-index")]
        let by_source = {
            let mut index = FxHashMap::default();
            for (i, stage) in stages.iter().enumerate() {
                if let Some(header) = stage.header() {
                    index.entry(header.source.clone()).or_insert(i);
                }
            }
            index
        };

        Ok(Self {
            seeds,
            stages,
            #[cfg(feature = "category-index")]
            by_source,
        })
    }

    /// Raw seed values
    pub fn seeds(&self) -> &[i64] {
        &self.seeds
    }

    /// Category maps in application order
    pub fn stages(&self) -> &[CategoryMap] {
        &self.stages
    }

    /// Pipeline over this almanac's stages
    pub fn pipeline(&self) -> Pipeline<'_> {
        Pipeline::new(&self.stages)
    }

    /// Seed list read as `(start, length)` pairs
    pub fn seed_ranges(&self) -> Result<Vec<Range>, AlmanacError> {
        if self.seeds.len() % 2 != 0 {
            return Err(AlmanacError::OddSeedCount(self.seeds.len()));
        }

        self.seeds
            .chunks_exact(2)
            .map(|pair| {
                let (start, length) = (pair[0], pair[1]);
                if start.checked_add(length).is_none() {
                    return Err(AlmanacError::SeedRangeOverflow { start, length });
                }
                Ok(Range::new(start, length))
            })
            .collect()
    }

    /// Final value of a single seed
    pub fn location_of(&self, seed: i64) -> i64 {
        traverse_point(seed, &self.stages)
    }

    /// Value of a seed in every category along the way
    pub fn trace(&self, seed: i64) -> Vec<i64> {
        trace_point(seed, &self.stages)
    }

    /// Category names along the chain, one more than the number of stages
    ///
    /// Unnamed stages are reported as `stage<N>`.
    pub fn categories(&self) -> Vec<String> {
        let first = self
            .stages
            .first()
            .and_then(|stage| stage.header())
            .map_or_else(|| SEED_CATEGORY.to_string(), |header| header.source.clone());

        std::iter::once(first)
            .chain(self.stages.iter().enumerate().map(|(i, stage)| {
                stage
                    .header()
                    .map_or_else(|| format!("stage{}", i + 1), |header| header.destination.clone())
            }))
            .collect()
    }

    /// Position of the first stage reading the given category
    #[cfg(feature = "category-index")]
    pub fn stage_index(&self, source: &str) -> Option<usize> {
        self.by_source.get(source).copied()
    }

    /// Position of the first stage reading the given category
    #[cfg(not(feature = "category-index"))]
    pub fn stage_index(&self, source: &str) -> Option<usize> {
        self.stages
            .iter()
            .position(|stage| stage.header().is_some_and(|header| header.source == source))
    }

    /// Trace a value of `category` through the remaining stages
    ///
    /// Returns `None` if no stage reads `category`.
    pub fn trace_from(&self, category: &str, value: i64) -> Option<Vec<i64>> {
        let index = self.stage_index(category)?;
        Some(trace_point(value, &self.stages[index..]))
    }
}

/// Validate stage count and, for named stages, the category chain
fn validate_stages(stages: &[CategoryMap], options: &AlmanacOptions) -> Result<(), AlmanacError> {
    if let Some(expected) = options.expected_stages
        && stages.len() != expected
    {
        return Err(AlmanacError::MalformedAlmanac {
            expected,
            found: stages.len(),
        });
    }

    if !options.validate_chain {
        return Ok(());
    }

    // Unnamed stages are unconstrained on either side
    let mut expected_source = Some(SEED_CATEGORY.to_string());
    for (index, stage) in stages.iter().enumerate() {
        if let (Some(expected), Some(header)) = (&expected_source, stage.header())
            && header.source != *expected
        {
            return Err(AlmanacError::BrokenChain {
                index,
                expected: expected.clone(),
                found: header.source.clone(),
            });
        }
        expected_source = stage.header().map(|header| header.destination.clone());
    }

    Ok(())
}
