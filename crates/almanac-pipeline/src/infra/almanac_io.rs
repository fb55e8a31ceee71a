//! Almanac text format
//!
//! Reads the textual almanac: a `seeds:` line, then blank-line separated
//! sections, each a `<source>-to-<destination> map:` header followed by rows
//! of `dest_start src_start length`.

use crate::constants::{MAP_HEADER_SUFFIX, SEEDS_PREFIX};
use crate::domain::almanac::{Almanac, AlmanacError, AlmanacOptions};
use crate::domain::category_map::{CategoryHeader, CategoryMap};
use crate::domain::rule::{MappingRule, RuleError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Almanac loading errors
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum AlmanacParseError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// First non-blank line is not the seed list
    #[error("line {line}: expected a 'seeds:' line")]
    MissingSeeds { line: usize },
    /// Token is not an integer
    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
    /// Section header missing or malformed
    #[error("line {line}: expected a '<source>-to-<destination> map:' header, found '{text}'")]
    InvalidHeader { line: usize, text: String },
    /// Rule row without exactly three numbers
    #[error("line {line}: expected 3 numbers in a map row, found {found}")]
    InvalidRow { line: usize, found: usize },
    /// Rule row with an unusable rule
    #[error("line {line}: {source}")]
    InvalidRule {
        line: usize,
        #[source]
        source: RuleError,
    },
    /// Parsed almanac failed validation
    #[error(transparent)]
    Almanac(#[from] AlmanacError),
}

/// Parse almanac text with strict validation
pub fn parse_almanac(input: &str) -> Result<Almanac, AlmanacParseError> {
    parse_almanac_with_options(input, &AlmanacOptions::strict())
}

/// Parse almanac text, validating against `options`
///
/// Rows within a section may appear in any order. Trailing whitespace,
/// CRLF line endings and repeated blank lines are accepted.
pub fn parse_almanac_with_options(
    input: &str,
    options: &AlmanacOptions,
) -> Result<Almanac, AlmanacParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()));

    let (line, seeds_text) = lines
        .by_ref()
        .find(|(_, text)| !text.is_empty())
        .ok_or(AlmanacParseError::MissingSeeds { line: 1 })?;
    let seeds_list = seeds_text
        .strip_prefix(SEEDS_PREFIX)
        .ok_or(AlmanacParseError::MissingSeeds { line })?;
    let seeds = parse_numbers(seeds_list, line)?;

    let mut stages = Vec::new();
    let mut section: Option<(CategoryHeader, Vec<MappingRule>)> = None;

    for (line, text) in lines {
        if text.is_empty() {
            if let Some((header, rules)) = section.take() {
                stages.push(CategoryMap::new(rules).with_header(header));
            }
            continue;
        }

        if let Some(name) = text.strip_suffix(MAP_HEADER_SUFFIX) {
            let header = CategoryHeader::parse(name).ok_or_else(|| {
                AlmanacParseError::InvalidHeader {
                    line,
                    text: text.to_string(),
                }
            })?;
            if let Some((header, rules)) = section.replace((header, Vec::new())) {
                stages.push(CategoryMap::new(rules).with_header(header));
            }
            continue;
        }

        let Some((_, rules)) = section.as_mut() else {
            return Err(AlmanacParseError::InvalidHeader {
                line,
                text: text.to_string(),
            });
        };
        rules.push(parse_rule(text, line)?);
    }

    if let Some((header, rules)) = section.take() {
        stages.push(CategoryMap::new(rules).with_header(header));
    }

    debug!(seeds = seeds.len(), stages = stages.len(), "parsed almanac");
    Ok(Almanac::with_options(seeds, stages, options)?)
}

/// Load and parse an almanac file with strict validation
pub fn load_almanac(path: impl AsRef<Path>) -> Result<Almanac, AlmanacParseError> {
    load_almanac_with_options(path, &AlmanacOptions::strict())
}

/// Load and parse an almanac file, validating against `options`
pub fn load_almanac_with_options(
    path: impl AsRef<Path>,
    options: &AlmanacOptions,
) -> Result<Almanac, AlmanacParseError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| AlmanacParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = input.len(), "read almanac file");
    parse_almanac_with_options(&input, options)
}

fn parse_numbers(text: &str, line: usize) -> Result<Vec<i64>, AlmanacParseError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| AlmanacParseError::InvalidNumber {
                    line,
                    value: token.to_string(),
                })
        })
        .collect()
}

fn parse_rule(text: &str, line: usize) -> Result<MappingRule, AlmanacParseError> {
    let values = parse_numbers(text, line)?;
    let &[dest_start, src_start, length] = values.as_slice() else {
        return Err(AlmanacParseError::InvalidRow {
            line,
            found: values.len(),
        });
    };
    MappingRule::new(dest_start, src_start, length)
        .map_err(|source| AlmanacParseError::InvalidRule { line, source })
}
