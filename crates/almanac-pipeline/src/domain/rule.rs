//! Mapping rules
//!
//! A rule is one row of a category map: it shifts every value of a bounded
//! source interval by a constant offset.

use thiserror::Error;

/// One `(dest_start, src_start, length)` row of a category map
///
/// Maps `x` to `x + (dest_start - src_start)` for `x` in
/// `[src_start, src_start + length)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MappingRule {
    src_start: i64,
    dest_start: i64,
    length: i64,
}

/// Rule construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Rule length is zero or negative
    #[error("rule length must be > 0 (dest_start = {dest_start}, src_start = {src_start}, length = {length})")]
    NonPositiveLength {
        dest_start: i64,
        src_start: i64,
        length: i64,
    },
    /// `src_start + length` does not fit in an i64
    #[error("source end overflows (src_start = {src_start}, length = {length})")]
    SourceOverflow { src_start: i64, length: i64 },
    /// `dest_start + length` does not fit in an i64
    #[error("destination end overflows (dest_start = {dest_start}, length = {length})")]
    DestinationOverflow { dest_start: i64, length: i64 },
}

impl MappingRule {
    /// Create a rule from the fields in almanac row order
    ///
    /// # Arguments
    /// * `dest_start` - First value of the destination interval
    /// * `src_start` - First value of the source interval
    /// * `length` - Number of values mapped (must be > 0)
    pub fn new(dest_start: i64, src_start: i64, length: i64) -> Result<Self, RuleError> {
        if length <= 0 {
            return Err(RuleError::NonPositiveLength {
                dest_start,
                src_start,
                length,
            });
        }
        if src_start.checked_add(length).is_none() {
            return Err(RuleError::SourceOverflow { src_start, length });
        }
        if dest_start.checked_add(length).is_none() {
            return Err(RuleError::DestinationOverflow { dest_start, length });
        }

        Ok(Self {
            src_start,
            dest_start,
            length,
        })
    }

    /// First value of the source interval
    #[inline]
    pub fn src_start(&self) -> i64 {
        self.src_start
    }

    /// First value of the destination interval
    #[inline]
    pub fn dest_start(&self) -> i64 {
        self.dest_start
    }

    /// Number of values covered
    #[inline]
    pub fn length(&self) -> i64 {
        self.length
    }

    /// Exclusive end of the source interval
    #[inline]
    pub fn src_end(&self) -> i64 {
        self.src_start + self.length
    }

    /// Amount added to every covered value
    #[inline]
    pub fn offset(&self) -> i64 {
        self.dest_start - self.src_start
    }

    /// Check if `x` lies in the source interval
    #[inline]
    pub fn contains(&self, x: i64) -> bool {
        self.src_start <= x && x < self.src_end()
    }

    /// Map `x` through this rule, or `None` if the rule does not cover it
    #[inline]
    pub fn map(&self, x: i64) -> Option<i64> {
        // dest_start + (x - src_start) stays below dest_start + length,
        // which construction checked.
        self.contains(x).then(|| self.dest_start + (x - self.src_start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_new_row_order() {
        let rule = MappingRule::new(52, 50, 48).unwrap();
        assert_eq!(rule.dest_start(), 52);
        assert_eq!(rule.src_start(), 50);
        assert_eq!(rule.length(), 48);
        assert_eq!(rule.src_end(), 98);
        assert_eq!(rule.offset(), 2);
    }

    #[test]
    fn test_rule_rejects_zero_length() {
        assert!(matches!(
            MappingRule::new(1, 2, 0),
            Err(RuleError::NonPositiveLength { length: 0, .. })
        ));
        assert!(matches!(
            MappingRule::new(1, 2, -5),
            Err(RuleError::NonPositiveLength { length: -5, .. })
        ));
    }

    #[test]
    fn test_rule_rejects_overflow() {
        assert!(matches!(
            MappingRule::new(0, i64::MAX - 1, 2),
            Err(RuleError::SourceOverflow { .. })
        ));
        assert!(matches!(
            MappingRule::new(i64::MAX, 0, 1),
            Err(RuleError::DestinationOverflow { .. })
        ));
    }

    #[test]
    fn test_rule_map_inside() {
        let rule = MappingRule::new(52, 50, 48).unwrap();
        assert_eq!(rule.map(50), Some(52));
        assert_eq!(rule.map(79), Some(81));
        assert_eq!(rule.map(97), Some(99));
    }

    #[test]
    fn test_rule_map_outside() {
        let rule = MappingRule::new(52, 50, 48).unwrap();
        assert_eq!(rule.map(49), None);
        assert_eq!(rule.map(98), None);
        assert_eq!(rule.map(-1), None);
    }

    #[test]
    fn test_rule_negative_offset() {
        let rule = MappingRule::new(50, 98, 2).unwrap();
        assert_eq!(rule.offset(), -48);
        assert_eq!(rule.map(99), Some(51));
    }

    #[test]
    fn test_rule_error_display() {
        let err = MappingRule::new(3, 4, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "rule length must be > 0 (dest_start = 3, src_start = 4, length = 0)"
        );
    }
}
