//! Best-shot evaluation: finds the widest unobstructed corridor into a goal.
//!
//! Obstacles are projected onto the bearings they block as seen from the shooter,
//! and the goal's view cone is swept for the widest gap between them.

mod angle_space;
mod best_shot;
mod coverage;
mod interval;
mod projection;
mod selection;

pub use angle_space::*;
pub use best_shot::*;
pub use coverage::*;
pub use interval::*;
pub use projection::*;
pub use selection::*;
