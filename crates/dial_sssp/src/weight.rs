use std::cmp::Ordering;
use std::fmt::Debug;

/// Numeric domain of edge weights and distances.
///
/// `INFINITY` doubles as the "unreachable" distance. `extend` must saturate at
/// `INFINITY` so that summing two unreachable distances stays representable.
pub trait Weight: Copy + Debug + PartialEq + PartialOrd {
    const ZERO: Self;
    const INFINITY: Self;

    fn extend(self, edge: Self) -> Self;

    fn total_cmp(&self, other: &Self) -> Ordering;

    #[inline]
    fn is_infinite(self) -> bool {
        self == Self::INFINITY
    }
}

impl Weight for u64 {
    const ZERO: Self = 0;
    const INFINITY: Self = crate::INF;

    #[inline]
    fn extend(self, edge: Self) -> Self {
        self.saturating_add(edge).min(crate::INF)
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Weight for f64 {
    const ZERO: Self = 0.0;
    const INFINITY: Self = f64::INFINITY;

    #[inline]
    fn extend(self, edge: Self) -> Self {
        self + edge
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::Weight;
    use crate::INF;

    #[test]
    fn integer_extend_saturates_at_infinity() {
        assert_eq!(3_u64.extend(4), 7);
        assert_eq!(INF.extend(1), INF);
        assert_eq!(INF.extend(INF), INF);
        assert_eq!((INF - 1).extend(5), INF);
        assert!(<u64 as Weight>::INFINITY.is_infinite());
    }

    #[test]
    fn real_extend_propagates_infinity() {
        assert_eq!(1.5_f64.extend(2.25), 3.75);
        assert!(f64::INFINITY.extend(1.0).is_infinite());
        assert!(!0.0_f64.is_infinite());
    }
}
