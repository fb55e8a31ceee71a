//! Category maps and range fragmentation
//!
//! A category map converts values of one category (e.g. seed) into another
//! (e.g. soil). Values covered by a rule are shifted by that rule's offset;
//! every other value maps to itself.
//!
//! Ranges are mapped without enumerating their values: a range is cut into
//! fragments, each lying wholly inside one rule or one identity gap between
//! rules, and every fragment is shifted as a unit.

use crate::constants::CATEGORY_SEPARATOR;
use crate::domain::range::Range;
use crate::domain::rule::{MappingRule, RuleError};
use std::fmt;
use std::iter::FusedIterator;
use tracing::trace;

/// Source and destination category of a map (`seed-to-soil`)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategoryHeader {
    /// Category the map reads
    pub source: String,
    /// Category the map produces
    pub destination: String,
}

impl CategoryHeader {
    /// Create a header from its two category names
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Parse `<source>-to-<destination>`
    ///
    /// Returns `None` if the separator is missing or either side is empty.
    pub fn parse(name: &str) -> Option<Self> {
        let (source, destination) = name.trim().split_once(CATEGORY_SEPARATOR)?;
        if source.is_empty() || destination.is_empty() {
            return None;
        }
        Some(Self::new(source, destination))
    }
}

impl fmt::Display for CategoryHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.source, CATEGORY_SEPARATOR, self.destination)
    }
}

/// One step of a range walk through a category map
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// Consumed part of the input range
    pub source: Range,
    /// Where `source` lands after mapping (same length)
    pub image: Range,
    /// Rule that produced the image, `None` for an identity gap
    pub rule: Option<MappingRule>,
}

impl Fragment {
    /// Check if the fragment passed through unchanged because no rule covers it
    pub fn is_identity(&self) -> bool {
        self.rule.is_none()
    }
}

/// One stage of the pipeline: rules sorted by source start, identity elsewhere
///
/// Rules are expected to be pairwise disjoint in their source intervals.
/// This is not checked; with overlapping rules the result is unspecified
/// but still deterministic and every walk still terminates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryMap {
    header: Option<CategoryHeader>,
    rules: Vec<MappingRule>,
}

impl CategoryMap {
    /// Create a map from rules in any order
    ///
    /// Rules are sorted by source start (stable, so ties keep input order).
    pub fn new(rules: impl IntoIterator<Item = MappingRule>) -> Self {
        let mut rules: Vec<MappingRule> = rules.into_iter().collect();
        rules.sort_by_key(MappingRule::src_start);

        Self {
            header: None,
            rules,
        }
    }

    /// A map with no rules, mapping every value to itself
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a map from `(dest_start, src_start, length)` rows
    pub fn from_rows<I>(rows: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (i64, i64, i64)>,
    {
        let rules = rows
            .into_iter()
            .map(|(dest_start, src_start, length)| MappingRule::new(dest_start, src_start, length))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    /// Attach the category names this map converts between
    pub fn with_header(mut self, header: CategoryHeader) -> Self {
        self.header = Some(header);
        self
    }

    /// Category names, if the map was built with them
    pub fn header(&self) -> Option<&CategoryHeader> {
        self.header.as_ref()
    }

    /// Rules sorted by source start
    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the map has no rules (pure identity)
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Map a single value
    ///
    /// Defined for every i64: values outside all rules map to themselves.
    pub fn lookup_point(&self, x: i64) -> i64 {
        self.find_covering_rule(x)
            .and_then(|rule| rule.map(x))
            .unwrap_or(x)
    }

    /// Find the rule whose source interval contains `start`
    pub fn find_covering_rule(&self, start: i64) -> Option<&MappingRule> {
        self.locate(start).0
    }

    /// Binary search for `x`
    ///
    /// Returns the rule covering `x` (if any) and the first rule starting
    /// strictly after `x` (if any).
    fn locate(&self, x: i64) -> (Option<&MappingRule>, Option<&MappingRule>) {
        let idx = self.rules.partition_point(|rule| rule.src_start() <= x);
        let covering = idx
            .checked_sub(1)
            .map(|i| &self.rules[i])
            .filter(|rule| rule.contains(x));
        (covering, self.rules.get(idx))
    }

    /// Map the longest prefix of `range` that a single rule or identity gap handles
    ///
    /// Returns `None` for an empty range. Otherwise the fragment's source
    /// starts at `range.start` and has a strictly positive length.
    pub fn next_fragment(&self, range: Range) -> Option<Fragment> {
        if range.is_empty() {
            return None;
        }

        let (covering, next) = self.locate(range.start);
        let fragment = match covering {
            Some(rule) => {
                let length = (rule.src_end() - range.start).min(range.length);
                Fragment {
                    source: Range::new(range.start, length),
                    image: Range::new(rule.dest_start() + (range.start - rule.src_start()), length),
                    rule: Some(*rule),
                }
            }
            None => {
                // Identity up to the next rule boundary, or to the end of the input
                let length = next.map_or(range.length, |rule| {
                    rule.src_start().saturating_sub(range.start).min(range.length)
                });
                let source = Range::new(range.start, length);
                Fragment {
                    source,
                    image: source,
                    rule: None,
                }
            }
        };

        Some(fragment)
    }

    /// Image of the next fragment of `range`
    pub fn next_range_fragment(&self, range: Range) -> Option<Range> {
        self.next_fragment(range).map(|fragment| fragment.image)
    }

    /// Walk `range` fragment by fragment
    pub fn fragments(&self, range: Range) -> Fragments<'_> {
        Fragments {
            map: self,
            remaining: range,
        }
    }

    /// Map a whole range, splitting it at rule boundaries
    ///
    /// Output lengths sum to `range.length` (zero outputs for an empty range).
    pub fn transform(&self, range: Range) -> Vec<Range> {
        self.fragments(range).map(|fragment| fragment.image).collect()
    }
}

/// Iterator over the fragments of a range, in source order
///
/// Consecutive fragment sources tile the input range with no gaps or overlaps.
#[derive(Clone, Debug)]
pub struct Fragments<'a> {
    map: &'a CategoryMap,
    remaining: Range,
}

impl Iterator for Fragments<'_> {
    type Item = Fragment;

    fn next(&mut self) -> Option<Self::Item> {
        let fragment = self.map.next_fragment(self.remaining)?;
        self.remaining = self.remaining.advance(fragment.source.length);
        trace!(
            source = %fragment.source,
            image = %fragment.image,
            identity = fragment.is_identity(),
            "fragment"
        );
        Some(fragment)
    }
}

impl FusedIterator for Fragments<'_> {}
