//! Ball entity
//!
//! Balls are plain values: every transition returns a new ball and leaves
//! the original untouched.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect, Vector};
use crate::rules::Rules;

/// Ball variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallKind {
    /// Bounces off everything it touches
    Normal,
    /// Passes through the blocks it destroys until `lifetime` runs out
    Super { lifetime: i32 },
}

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    center: Point,
    diameter: i32,
    velocity: Vector,
    kind: BallKind,
}

impl Ball {
    /// Create a normal ball
    ///
    /// # Panics
    /// If `diameter` is not positive or `velocity` is the zero vector.
    pub fn new(center: Point, diameter: i32, velocity: Vector) -> Self {
        assert!(diameter > 0, "ball diameter must be positive, got {diameter}");
        assert!(!velocity.is_zero(), "ball velocity must not be zero");
        Self {
            center,
            diameter,
            velocity,
            kind: BallKind::Normal,
        }
    }

    /// Create a super ball with the given remaining lifetime
    ///
    /// # Panics
    /// As [`Ball::new`], and if `lifetime` is not positive.
    pub fn new_super(center: Point, diameter: i32, velocity: Vector, lifetime: i32) -> Self {
        assert!(lifetime > 0, "super ball lifetime must be positive, got {lifetime}");
        Self {
            kind: BallKind::Super { lifetime },
            ..Self::new(center, diameter, velocity)
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn diameter(&self) -> i32 {
        self.diameter
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn kind(&self) -> BallKind {
        self.kind
    }

    pub fn is_super(&self) -> bool {
        matches!(self.kind, BallKind::Super { .. })
    }

    /// Remaining super lifetime, `None` for normal balls
    pub fn lifetime(&self) -> Option<i32> {
        match self.kind {
            BallKind::Normal => None,
            BallKind::Super { lifetime } => Some(lifetime),
        }
    }

    /// Collision box: the center extended by one diameter on every side
    pub fn rect(&self) -> Rect {
        Rect::around(self.center, Vector::new(self.diameter, self.diameter))
    }

    pub fn with_center(self, center: Point) -> Self {
        Self { center, ..self }
    }

    /// # Panics
    /// If `velocity` is the zero vector.
    pub fn with_velocity(self, velocity: Vector) -> Self {
        assert!(!velocity.is_zero(), "ball velocity must not be zero");
        Self { velocity, ..self }
    }

    /// Advance the center by `velocity * elapsed`
    ///
    /// # Panics
    /// If `elapsed` is zero.
    pub fn roll(self, elapsed: i32) -> Self {
        assert!(elapsed != 0, "cannot roll a ball by zero elapsed time");
        Self {
            center: self.center + self.velocity.scaled(elapsed),
            ..self
        }
    }

    /// Reflect the velocity off a surface with unit normal `direction`
    ///
    /// # Panics
    /// If `direction` is not a unit vector.
    pub fn bounce(self, direction: Vector) -> Self {
        assert!(direction.is_unit(), "bounce direction {direction:?} is not a unit vector");
        Self {
            velocity: self.velocity.mirror_over(direction),
            ..self
        }
    }

    /// Count down a super ball's lifetime, reverting to normal once it runs out
    pub fn age(self, elapsed: i32) -> Self {
        match self.kind {
            BallKind::Normal => self,
            BallKind::Super { lifetime } => {
                let lifetime = lifetime - elapsed;
                if lifetime <= 0 {
                    log::debug!("Super ball at {:?} reverted to normal", self.center);
                    Self {
                        kind: BallKind::Normal,
                        ..self
                    }
                } else {
                    Self {
                        kind: BallKind::Super { lifetime },
                        ..self
                    }
                }
            }
        }
    }

    /// React to hitting the block occupying `block`
    ///
    /// Normal balls always bounce. Super balls plough straight through a
    /// block their hit destroys and only bounce off blocks that survive.
    pub fn hit_block(self, block: &Rect, destroyed: bool) -> Self {
        if destroyed && self.is_super() {
            return self;
        }
        match self.rect().overlap(block) {
            Some(normal) => self.bounce(normal),
            None => self,
        }
    }

    /// Spawn `count` copies with velocities fanned out by the replication offsets
    ///
    /// An offset that would cancel the velocity entirely is skipped and the
    /// replica keeps the source velocity.
    ///
    /// # Panics
    /// If `count` is outside `1..=3`.
    pub fn replicate(&self, count: usize, rules: &Rules) -> Vec<Ball> {
        assert!(
            (1..=rules.replication_offsets.len()).contains(&count),
            "replica count must be within 1..=3, got {count}"
        );
        rules.replication_offsets[..count]
            .iter()
            .map(|&offset| {
                let velocity = self.velocity + offset;
                if velocity.is_zero() {
                    *self
                } else {
                    Self { velocity, ..*self }
                }
            })
            .collect()
    }

    /// Turn into a super ball with a fresh lifetime
    pub fn powerup(self, rules: &Rules) -> Self {
        Self {
            kind: BallKind::Super {
                lifetime: rules.super_ball_lifetime,
            },
            ..self
        }
    }
}
