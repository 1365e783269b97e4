//! Bounds on counts, used to configure repetitions and prefixes.

use core::ops::{Bound, RangeBounds};

/// Configuration for limiting a count (of repeated elements, or of items in a prefix).
///
/// Both ends are stored inclusively. An empty range (e.g. `5..5`) contains nothing.
///
/// # Examples
///
/// ```
/// use commonware_grammar::RangeCfg;
///
/// let cfg = RangeCfg::new(1..=3);
/// assert!(!cfg.contains(0));
/// assert!(cfg.contains(3));
/// assert_eq!(cfg.max(), 3);
///
/// let cfg: RangeCfg = (2..).into();
/// assert!(cfg.contains(usize::MAX));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RangeCfg {
    /// The smallest count allowed.
    min: usize,

    /// The largest count allowed.
    max: usize,
}

impl RangeCfg {
    /// Creates a new `RangeCfg` from any range of counts.
    pub fn new(r: impl RangeBounds<usize>) -> Self {
        let min = match r.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => match s.checked_add(1) {
                Some(s) => s,
                None => return Self::empty(),
            },
            Bound::Unbounded => 0,
        };
        let max = match r.end_bound() {
            Bound::Included(&e) => e,
            Bound::Excluded(&e) => match e.checked_sub(1) {
                Some(e) => e,
                None => return Self::empty(),
            },
            Bound::Unbounded => usize::MAX,
        };
        Self { min, max }
    }

    /// Creates a `RangeCfg` that only accepts exactly `count`.
    pub fn exact(count: usize) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    /// Creates a `RangeCfg` that accepts any count.
    pub fn unbounded() -> Self {
        Self {
            min: 0,
            max: usize::MAX,
        }
    }

    fn empty() -> Self {
        Self { min: 1, max: 0 }
    }

    /// Returns the smallest count allowed.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Returns the largest count allowed.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns true if `count` is within this range.
    pub fn contains(&self, count: usize) -> bool {
        self.min <= count && count <= self.max
    }
}

impl Default for RangeCfg {
    fn default() -> Self {
        Self::unbounded()
    }
}

macro_rules! impl_from_range {
    ($($range:ty),*) => {
        $(
            impl From<$range> for RangeCfg {
                fn from(r: $range) -> Self {
                    Self::new(r)
                }
            }
        )*
    };
}

impl_from_range!(
    core::ops::Range<usize>,
    core::ops::RangeInclusive<usize>,
    core::ops::RangeFrom<usize>,
    core::ops::RangeTo<usize>,
    core::ops::RangeToInclusive<usize>,
    core::ops::RangeFull
);

impl From<usize> for RangeCfg {
    fn from(count: usize) -> Self {
        Self::exact(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(RangeCfg::from(..), 0, usize::MAX; "full")]
    #[test_case(RangeCfg::from(5..), 5, usize::MAX; "start_inclusive")]
    #[test_case(RangeCfg::from(..10), 0, 9; "end_exclusive")]
    #[test_case(RangeCfg::from(..=10), 0, 10; "end_inclusive")]
    #[test_case(RangeCfg::from(5..10), 5, 9; "half_open")]
    #[test_case(RangeCfg::from(5..=10), 5, 10; "closed")]
    #[test_case(RangeCfg::from(3usize), 3, 3; "exact")]
    fn test_range_cfg_bounds(cfg: RangeCfg, min: usize, max: usize) {
        assert_eq!(cfg.min(), min);
        assert_eq!(cfg.max(), max);
        assert!(cfg.contains(min));
        assert!(cfg.contains(max));
    }

    #[test]
    fn test_range_cfg_contains() {
        let cfg = RangeCfg::new(5..10);
        assert!(!cfg.contains(4));
        assert!(cfg.contains(5));
        assert!(cfg.contains(9));
        assert!(!cfg.contains(10));

        let cfg = RangeCfg::new((Bound::Excluded(5), Bound::Included(10)));
        assert!(!cfg.contains(5));
        assert!(cfg.contains(6));
        assert!(cfg.contains(10));
        assert!(!cfg.contains(11));
    }

    #[test]
    fn test_contains_empty_range() {
        let cfg = RangeCfg::new(5..5);
        assert!(!cfg.contains(4));
        assert!(!cfg.contains(5));
        assert!(!cfg.contains(6));

        let cfg = RangeCfg::new(..0);
        assert!(!cfg.contains(0));

        #[allow(clippy::reversed_empty_ranges)]
        let cfg = RangeCfg::new(6..=5);
        assert!(!cfg.contains(5));
        assert!(!cfg.contains(6));
    }

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(RangeCfg::default(), RangeCfg::unbounded());
        assert_eq!(RangeCfg::default(), RangeCfg::from(..));
    }
}
