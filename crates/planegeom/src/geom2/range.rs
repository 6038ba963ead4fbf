//! Closed numeric interval used by the segment bound checks.

/// Closed interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    /// Construct without reordering; `min > max` describes an empty interval.
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Interval between two values given in either order.
    #[inline]
    pub fn spanning(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Inclusive membership. NaN is never contained.
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}
