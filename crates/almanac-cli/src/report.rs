//! Human-readable output for the almanac tools

use almanac_pipeline::{AlmanacError, AlmanacParseError, PipelineError};
use std::path::Path;

/// Describe a loading failure with a hint on how to fix the input
pub fn format_load_error(path: &Path, err: &AlmanacParseError) -> String {
    match err {
        AlmanacParseError::Io { source, .. } => format!(
            "Cannot read '{}': {}.\nPass the almanac file as the first argument.",
            path.display(),
            source
        ),
        AlmanacParseError::MissingSeeds { line } => format!(
            "'{}' line {}: the almanac must start with a 'seeds:' line.",
            path.display(),
            line
        ),
        AlmanacParseError::Almanac(inner) => {
            format!("'{}': {}", path.display(), format_almanac_error(inner))
        }
        other => format!("'{}' {}", path.display(), other),
    }
}

/// Describe a validation or solving failure
pub fn format_almanac_error(err: &AlmanacError) -> String {
    match err {
        AlmanacError::MalformedAlmanac { expected, found } => format!(
            "expected {} category maps, found {}. Is the file truncated?",
            expected, found
        ),
        AlmanacError::OddSeedCount(count) => format!(
            "the seed list has {} values; seed ranges are read as (start, length) pairs.",
            count
        ),
        AlmanacError::Pipeline(PipelineError::EmptyInput) => {
            "no seeds to evaluate.".to_string()
        }
        other => other.to_string(),
    }
}

/// One trace line: `seed 79, soil 81, ..., location 82`
///
/// Extra values beyond the known categories are dropped.
pub fn format_trace<S: AsRef<str>>(categories: &[S], values: &[i64]) -> String {
    categories
        .iter()
        .zip(values)
        .map(|(category, value)| format!("{} {}", category.as_ref(), value))
        .collect::<Vec<_>>()
        .join(", ")
}
