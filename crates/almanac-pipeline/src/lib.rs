//! almanac-pipeline - Piecewise range remapping through almanac category maps
//!
//! This crate provides functionality to:
//! - Map single values through an ordered chain of category maps
//! - Map whole ranges by splitting them at rule boundaries, without
//!   enumerating the values inside them
//! - Parse the almanac text format and answer the lowest-location queries

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::solver::{
    Answers, SolveOptions, lowest_location_for_seed_ranges, lowest_location_for_seeds, solve,
};
pub use constants::*;
pub use domain::almanac::{Almanac, AlmanacError, AlmanacOptions};
pub use domain::category_map::{CategoryHeader, CategoryMap, Fragment};
pub use domain::pipeline::{
    Pipeline, PipelineError, StageProgress, min_start, trace_point, traverse_point,
};
pub use domain::range::Range;
pub use domain::rule::{MappingRule, RuleError};
pub use infra::almanac_io::{
    AlmanacParseError, load_almanac, load_almanac_with_options, parse_almanac,
    parse_almanac_with_options,
};
