use std::f64::consts::PI;

use goalshot_core::{Angle, GoalSide};

use crate::AngleInterval;

/// The bearing convention used while solving for one goal.
///
/// Bearings are only defined modulo a full turn. The opponent's goal sits around
/// bearing 0, where atan2 is continuous, while our own goal straddles +-pi, where it
/// jumps. Each goal therefore gets a range in which its view cone is contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleSpace {
    /// Bearings as returned by atan2, in (-pi, pi].
    Signed,
    /// Bearings shifted into [0, 2pi).
    Unsigned,
}

/// The order in which a sweep visits the bearings of a view cone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// From the numerically lowest bearing upwards.
    Ascending,
    /// From the numerically highest bearing downwards.
    Descending,
}

impl AngleSpace {
    pub fn for_side(side: GoalSide) -> Self {
        match side {
            GoalSide::Opp => AngleSpace::Signed,
            GoalSide::Own => AngleSpace::Unsigned,
        }
    }

    pub fn normalize(&self, bearing: Angle) -> f64 {
        match self {
            AngleSpace::Signed => bearing.radians(),
            AngleSpace::Unsigned => bearing.to_unsigned_radians(),
        }
    }

    /// Maps a bearing from this space back into (-pi, pi].
    pub fn denormalize(&self, bearing: f64) -> f64 {
        match self {
            AngleSpace::Unsigned if bearing > PI => bearing - 2.0 * PI,
            _ => bearing,
        }
    }

    /// Both spaces sweep starting from the positive-y post of their goal.
    pub fn sweep_direction(&self) -> SweepDirection {
        match self {
            AngleSpace::Signed => SweepDirection::Descending,
            AngleSpace::Unsigned => SweepDirection::Ascending,
        }
    }
}

impl SweepDirection {
    /// Position of a bearing along the sweep; always increases as the sweep advances.
    fn key(&self, bearing: f64) -> f64 {
        match self {
            SweepDirection::Ascending => bearing,
            SweepDirection::Descending => -bearing,
        }
    }

    /// The `(start, end)` keys of an interval in sweep order.
    pub(crate) fn keys(&self, interval: &AngleInterval) -> (f64, f64) {
        match self {
            SweepDirection::Ascending => (interval.low(), interval.high()),
            SweepDirection::Descending => (self.key(interval.high()), self.key(interval.low())),
        }
    }

    /// Inverse of [`SweepDirection::keys`].
    pub(crate) fn interval_from_keys(&self, start: f64, end: f64) -> AngleInterval {
        AngleInterval::span(self.key(start), self.key(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_side_conventions() {
        assert_eq!(AngleSpace::for_side(GoalSide::Opp), AngleSpace::Signed);
        assert_eq!(AngleSpace::for_side(GoalSide::Own), AngleSpace::Unsigned);
    }

    #[test]
    fn test_unsigned_makes_own_goal_contiguous() {
        let space = AngleSpace::Unsigned;
        let upper_post = space.normalize(Angle::from_degrees(175.0));
        let lower_post = space.normalize(Angle::from_degrees(-175.0));
        assert_relative_eq!(upper_post.to_degrees(), 175.0, epsilon = 1e-9);
        assert_relative_eq!(lower_post.to_degrees(), 185.0, epsilon = 1e-9);
    }

    #[test]
    fn test_signed_leaves_bearings_alone() {
        let space = AngleSpace::Signed;
        assert_relative_eq!(
            space.normalize(Angle::from_degrees(-10.0)).to_degrees(),
            -10.0,
            epsilon = 1e-9
        );
        assert_eq!(space.denormalize(3.5), 3.5);
    }

    #[test]
    fn test_denormalize() {
        let space = AngleSpace::Unsigned;
        assert_relative_eq!(space.denormalize(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
        assert_eq!(space.denormalize(PI), PI);
        assert_eq!(space.denormalize(0.5), 0.5);
    }

    #[test]
    fn test_keys_round_trip() {
        let interval = AngleInterval::span(-0.2, 0.3);
        for direction in [SweepDirection::Ascending, SweepDirection::Descending] {
            let (start, end) = direction.keys(&interval);
            assert!(start <= end);
            assert_eq!(direction.interval_from_keys(start, end), interval);
        }
    }

    #[test]
    fn test_descending_starts_at_high_bound() {
        let interval = AngleInterval::span(-0.2, 0.3);
        let (start, _) = SweepDirection::Descending.keys(&interval);
        assert_eq!(start, -0.3);
    }
}
