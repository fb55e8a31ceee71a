//! Half-open integer ranges
//!
//! A `Range` is the unit of data flowing through the pipeline. Ranges are
//! `Copy` values: splitting a range produces new ranges, never mutates one.

/// Half-open interval `[start, start + length)`
///
/// A range with `length <= 0` is degenerate. It is accepted everywhere but
/// contributes nothing: transforming it yields no output ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    /// First value in the range
    pub start: i64,
    /// Number of values in the range
    pub length: i64,
}

impl Range {
    /// Create a new range
    pub const fn new(start: i64, length: i64) -> Self {
        Self { start, length }
    }

    /// Range holding the single value `x`
    pub const fn point(x: i64) -> Self {
        Self::new(x, 1)
    }

    /// Exclusive end of the range
    ///
    /// Saturates at `i64::MAX` for ranges reaching past the largest value.
    #[inline]
    pub const fn end(&self) -> i64 {
        self.start.saturating_add(self.length)
    }

    /// Check if the range holds no values
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length <= 0
    }

    /// The part of this range left after consuming its first `count` values
    ///
    /// Consuming everything (or more) yields an empty range at `end()`.
    pub fn advance(&self, count: i64) -> Self {
        let count = count.clamp(0, self.length.max(0));
        Self::new(self.start.saturating_add(count), self.length - count)
    }

    /// The same range moved by `delta`
    #[inline]
    pub const fn shift(&self, delta: i64) -> Self {
        Self::new(self.start + delta, self.length)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}
