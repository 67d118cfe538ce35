use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::Vector2;

const FULL_TURN: f64 = 2.0 * PI;

/// A bearing in radians, always in (-pi, pi]. Arithmetic on `Angle` re-wraps the
/// result, so adding or removing a full turn yields the same bearing:
///
/// ```ignore
/// # use goalshot_core::Angle;
/// let a = Angle::from_degrees(170.0);
/// let b = Angle::from_degrees(20.0);
/// assert_eq!((a + b).degrees(), -170.0);
/// ```
#[derive(Debug, Clone, Copy, PartialOrd, Serialize, Deserialize)]
#[typeshare(serialized_as = "f64")]
pub struct Angle(f64);

impl Angle {
    pub const PI: Angle = Angle(PI);

    /// Create a new angle from radians.
    pub fn from_radians(radians: f64) -> Self {
        Angle(wrap_angle(radians))
    }

    /// Create a new angle from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// The bearing of a vector, measured counter-clockwise from the +x axis.
    pub fn of_vector(v: &Vector2) -> Self {
        Self::from_radians(v.y.atan2(v.x))
    }

    /// Compute the bearing of point b as seen from point a.
    pub fn between_points(a: Vector2, b: Vector2) -> Self {
        Self::of_vector(&(b - a))
    }

    /// Get the angle in radians, in (-pi, pi].
    pub fn radians(&self) -> f64 {
        self.0
    }

    /// Get the angle in radians, shifted into [0, 2pi).
    pub fn to_unsigned_radians(&self) -> f64 {
        if self.0 < 0.0 {
            self.0 + FULL_TURN
        } else {
            self.0
        }
    }

    pub fn degrees(&self) -> f64 {
        self.0.to_degrees()
    }

    pub fn sin(&self) -> f64 {
        self.0.sin()
    }

    pub fn cos(&self) -> f64 {
        self.0.cos()
    }
}

impl std::ops::Add for Angle {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Angle::from_radians(self.0 + other.0)
    }
}

impl std::ops::Sub for Angle {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Angle::from_radians(self.0 - other.0)
    }
}

impl std::ops::Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Angle::from_radians(-self.0)
    }
}

impl std::ops::Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Angle::from_radians(self.0 * scalar)
    }
}

impl std::ops::Div<f64> for Angle {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Angle::from_radians(self.0 / scalar)
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.2} deg", self.degrees())
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle(0.0)
    }
}

/// Bearings closer than 1e-5 rad are equal, including across the +-pi seam.
impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        wrap_angle(self.0 - other.0).abs() < 1e-5
    }
}

/// Wrap a value in radians into (-pi, pi].
pub fn wrap_angle(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(FULL_TURN) - PI;
    if wrapped <= -PI {
        wrapped + FULL_TURN
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert_eq!(wrap_angle(0.1), 0.1);
        assert_eq!(wrap_angle(PI), PI);
        assert_eq!(wrap_angle(-PI), PI);
        assert_eq!(wrap_angle(3.0 * PI), PI);
        assert_eq!(wrap_angle(-3.0 * PI), PI);
        assert_relative_eq!(wrap_angle(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-7.5 * PI), 0.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_full_turn_is_same_bearing() {
        let a = Angle::from_degrees(30.0);
        let turn = Angle::from_radians(FULL_TURN);
        assert_eq!(a + turn, a);
        assert_eq!(a - turn, a);
        assert_eq!(Angle::from_radians(a.radians() + FULL_TURN), a);
        assert_eq!(Angle::from_radians(a.radians() - 2.0 * FULL_TURN), a);
    }

    #[test]
    fn test_equality_across_seam() {
        assert_eq!(Angle::from_radians(PI - 1e-7), Angle::from_radians(-PI + 1e-7));
        assert_ne!(Angle::from_degrees(179.0), Angle::from_degrees(-179.0));
    }

    #[test]
    fn test_of_vector() {
        assert_relative_eq!(Angle::of_vector(&Vector2::new(1.0, 1.0)).degrees(), 45.0);
        assert_relative_eq!(Angle::of_vector(&Vector2::new(-1.0, 0.0)).degrees(), 180.0);
        assert_relative_eq!(Angle::of_vector(&Vector2::new(0.0, -2.0)).degrees(), -90.0);
    }

    #[test]
    fn test_between_points() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 1.0);
        assert_eq!(Angle::between_points(a, b).degrees(), 45.0);
        assert_eq!(Angle::between_points(b, a).degrees(), -135.0);
    }

    #[test]
    fn test_unsigned_radians() {
        assert_relative_eq!(Angle::from_degrees(90.0).to_unsigned_radians(), PI / 2.0);
        assert_relative_eq!(
            Angle::from_degrees(-90.0).to_unsigned_radians(),
            3.0 * PI / 2.0
        );
        assert_relative_eq!(Angle::PI.to_unsigned_radians(), PI);
    }

    #[test]
    fn test_add_wraps() {
        let a = Angle::from_degrees(170.0);
        let b = Angle::from_degrees(20.0);
        assert_relative_eq!((a + b).degrees(), -170.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sub_wraps() {
        let a = Angle::from_degrees(-180.0);
        let b = Angle::from_degrees(180.0);
        assert_eq!((a - b).degrees(), 0.0);

        let a = Angle::from_degrees(180.0);
        let b = Angle::from_degrees(-179.0);
        assert_relative_eq!((a - b).degrees(), -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_scalar_ops() {
        let a = Angle::from_degrees(100.0);
        assert_relative_eq!((a * 2.0).degrees(), -160.0, epsilon = 1e-9);
        assert_relative_eq!((a / 4.0).degrees(), 25.0, epsilon = 1e-9);
        assert_relative_eq!((-a).degrees(), -100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_trig() {
        let a = Angle::from_degrees(30.0);
        assert_relative_eq!(a.sin(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(a.cos(), 3f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_eq!(a.to_string(), "30.00 deg");
    }
}
