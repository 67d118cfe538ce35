mod angle;
mod geom;
mod player;
mod settings;
mod sides;
mod world;

pub mod math;

pub use angle::*;
pub use geom::*;
pub use player::*;
pub use settings::*;
pub use sides::*;
pub use world::*;

pub type Vector2 = nalgebra::Vector2<f64>;
