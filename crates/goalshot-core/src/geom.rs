use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::Vector2;

/// A straight line segment between two points.
///
/// For goal segments `start` is the post with the larger y coordinate (the
/// "positive" post) and `end` the other one.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[typeshare]
pub struct Segment {
    pub start: Vector2,
    pub end: Vector2,
}

impl Segment {
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    pub fn midpoint(&self) -> Vector2 {
        (self.start + self.end) / 2.0
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// Which of the two goals a query refers to, in team coordinates.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[typeshare]
pub enum GoalSide {
    /// Our own goal, on the -x side.
    Own,
    /// The opponent's goal, on the +x side.
    Opp,
}

impl GoalSide {
    /// Sign of the x coordinate of this goal's line.
    pub fn x_sign(&self) -> f64 {
        match self {
            GoalSide::Own => -1.0,
            GoalSide::Opp => 1.0,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            GoalSide::Own => GoalSide::Opp,
            GoalSide::Opp => GoalSide::Own,
        }
    }
}

impl std::fmt::Display for GoalSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalSide::Own => write!(f, "own"),
            GoalSide::Opp => write!(f, "opp"),
        }
    }
}

/// The field geometry.
///
/// All coordinates derived from it are in team coordinates: the opponent's goal
/// is centred on `(field_length / 2, 0)`, our own on `(-field_length / 2, 0)`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[typeshare]
pub struct FieldGeometry {
    /// Field length (distance between goal lines) in mm
    pub field_length: f64,
    /// Field width (distance between touch lines) in mm
    pub field_width: f64,
    /// Goal width (distance inner edges of goal posts) in mm
    pub goal_width: f64,
    /// Goal depth (distance from outer goal line edge to inner goal back) in mm
    pub goal_depth: f64,
    /// Boundary width (distance from touch/goal line centers to boundary walls) in mm
    pub boundary_width: f64,
}

impl FieldGeometry {
    /// The two posts of the given goal, positive post first.
    pub fn goal_posts(&self, side: GoalSide) -> Segment {
        let x = side.x_sign() * self.field_length / 2.0;
        let half_goal = self.goal_width / 2.0;
        Segment::new(Vector2::new(x, half_goal), Vector2::new(x, -half_goal))
    }

    pub fn goal_center(&self, side: GoalSide) -> Vector2 {
        self.goal_posts(side).midpoint()
    }

    pub fn opp_goal_posts(&self) -> Segment {
        self.goal_posts(GoalSide::Opp)
    }

    pub fn own_goal_posts(&self) -> Segment {
        self.goal_posts(GoalSide::Own)
    }

    pub fn opp_goal_center(&self) -> Vector2 {
        self.goal_center(GoalSide::Opp)
    }

    pub fn own_goal_center(&self) -> Vector2 {
        self.goal_center(GoalSide::Own)
    }
}

impl Default for FieldGeometry {
    // Division B field
    fn default() -> Self {
        Self {
            field_length: 9000.0,
            field_width: 6000.0,
            goal_width: 1000.0,
            goal_depth: 180.0,
            boundary_width: 300.0,
        }
    }
}
