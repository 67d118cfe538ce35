use std::fmt;

/// A contiguous span of bearings, `low <= high`, in radians.
///
/// The bounds live in whatever angle space the caller is working in (see
/// [`AngleSpace`](crate::AngleSpace)), so `high` may exceed pi or even 2pi. Only
/// bounds from the same space may be compared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleInterval {
    low: f64,
    high: f64,
}

impl AngleInterval {
    /// Creates an interval from two bounds given in either order.
    pub fn span(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Creates an empty interval sitting at `at`.
    pub fn empty(at: f64) -> Self {
        Self { low: at, high: at }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Width in radians.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Width in degrees.
    pub fn width_degrees(&self) -> f64 {
        self.width().to_degrees()
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0
    }

    /// Whether the two intervals share some interior. Intervals that only touch at a
    /// bound do not overlap, and an empty interval overlaps nothing.
    pub fn overlaps(&self, other: &AngleInterval) -> bool {
        self.low.max(other.low) < self.high.min(other.high)
    }

    pub fn contains(&self, other: &AngleInterval) -> bool {
        self.low <= other.low && other.high <= self.high
    }
}

impl fmt::Display for AngleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}] deg",
            self.low.to_degrees(),
            self.high.to_degrees()
        )
    }
}
