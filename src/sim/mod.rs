//! Game simulation
//!
//! All gameplay logic lives here. Nothing in this module touches rendering or
//! input directly; callers pass in the frame delta and pointer position.

pub mod ball;
pub mod bricks;
pub mod lives;
pub mod paddle;
pub mod score;
pub mod shapes;
pub mod wall;

pub use ball::Ball;
pub use bricks::{BrickHit, Bricks, HitAxis};
pub use lives::Lives;
pub use paddle::Paddle;
pub use score::Score;
pub use shapes::{Circle, Line, Rect};
