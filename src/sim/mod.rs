//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer positions and velocities only
//! - Entities are values; every transition returns a new one
//! - Stable iteration order (roster order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod ball;
pub mod block;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallKind};
pub use block::{Block, BlockHit, BlockKind};
pub use geometry::{Point, Rect, Vector};
pub use paddle::{Paddle, PaddleDirection, PaddleHit, PaddleKind};
pub use state::GameState;
pub use tick::{TickInput, tick};
