//! Brick Breaker - physics and rules core for a brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, entities, collisions, tick)
//! - `rules`: Tunable gameplay constants
//! - `level`: Seeded level generation
//! - `error`: Construction errors

pub mod error;
pub mod level;
pub mod rules;
pub mod sim;

pub use error::GameError;
pub use level::{LevelConfig, generate_level};
pub use rules::Rules;

/// Default gameplay constants
pub mod consts {
    use crate::sim::Vector;

    /// Super ball lifetime after a power-up (elapsed-time units)
    pub const SUPER_BALL_LIFETIME: i32 = 10_000;
    /// Maximum hit count of a sturdy block
    pub const MAX_STURDY_LIFETIME: i32 = 3;
    /// Paddle hits a replicator paddle lasts
    pub const REPLICATOR_LIFETIME: i32 = 3;

    /// Paddle travel per elapsed-time unit
    pub const PADDLE_SPEED: i32 = 10;
    /// Horizontal speed handed to a ball by a moving paddle
    pub const PADDLE_BOOST: i32 = 2;

    /// Velocity offsets for replicated balls, used in this order
    pub const REPLICATION_OFFSETS: [Vector; 3] =
        [Vector::new(2, -2), Vector::new(-2, 2), Vector::new(2, 2)];
}
