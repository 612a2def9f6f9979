//! The player's paddle

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geometry::{Point, Rect, Vector};
use crate::error::GameError;
use crate::rules::Rules;

/// Lateral movement intent for the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleDirection {
    Left,
    #[default]
    Still,
    Right,
}

impl PaddleDirection {
    /// -1, 0 or 1
    pub fn sign(self) -> i32 {
        match self {
            PaddleDirection::Left => -1,
            PaddleDirection::Still => 0,
            PaddleDirection::Right => 1,
        }
    }
}

impl TryFrom<i32> for PaddleDirection {
    type Error = GameError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(PaddleDirection::Left),
            0 => Ok(PaddleDirection::Still),
            1 => Ok(PaddleDirection::Right),
            other => Err(GameError::InvalidPaddleDirection(other)),
        }
    }
}

/// Paddle variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleKind {
    #[default]
    Normal,
    /// Spawns replicas of each ball it hits for the next `lifetime` hits
    Replicator { lifetime: i32 },
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    center: Point,
    /// Half extents
    size: Vector,
    kind: PaddleKind,
}

/// Outcome of testing a ball against the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleHit {
    pub ball: Ball,
    pub paddle: Paddle,
    /// How many replicas of `ball` to spawn
    pub replications: usize,
}

impl Paddle {
    /// Create a normal paddle
    ///
    /// # Panics
    /// If either component of `size` is negative.
    pub fn new(center: Point, size: Vector) -> Self {
        assert!(
            size.x() >= 0 && size.y() >= 0,
            "paddle size must not be negative, got {size:?}"
        );
        Self {
            center,
            size,
            kind: PaddleKind::Normal,
        }
    }

    /// # Panics
    /// As [`Paddle::new`], and if `lifetime` is not positive.
    pub fn new_replicator(center: Point, size: Vector, lifetime: i32) -> Self {
        assert!(lifetime >= 1, "replicator lifetime must be positive, got {lifetime}");
        Self {
            kind: PaddleKind::Replicator { lifetime },
            ..Self::new(center, size)
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn size(&self) -> Vector {
        self.size
    }

    pub fn kind(&self) -> PaddleKind {
        self.kind
    }

    pub fn rect(&self) -> Rect {
        Rect::around(self.center, self.size)
    }

    pub fn with_center(self, center: Point) -> Self {
        Self { center, ..self }
    }

    /// Become a replicator paddle with a fresh lifetime
    pub fn powerup(&self, rules: &Rules) -> Self {
        Self {
            kind: PaddleKind::Replicator {
                lifetime: rules.replicator_lifetime,
            },
            ..*self
        }
    }

    /// Resolve a possible hit by `ball`
    ///
    /// The ball bounces when it overlaps the paddle and is still moving into
    /// it, then picks up horizontal speed in the direction the paddle is
    /// being steered. A boost that would stop the ball dead is dropped.
    pub fn resolve_hit(&self, ball: &Ball, direction: PaddleDirection, rules: &Rules) -> PaddleHit {
        let miss = PaddleHit {
            ball: *ball,
            paddle: *self,
            replications: 0,
        };

        let Some(normal) = ball.rect().overlap(&self.rect()) else {
            return miss;
        };
        if normal.dot(ball.velocity()) <= 0 {
            return miss;
        }

        let bounced = ball.bounce(normal);
        let boosted = bounced.velocity() + Vector::RIGHT.scaled(rules.paddle_boost * direction.sign());
        let ball = if boosted.is_zero() {
            bounced
        } else {
            bounced.with_velocity(boosted)
        };

        match self.kind {
            PaddleKind::Normal => PaddleHit { ball, ..miss },
            PaddleKind::Replicator { lifetime } => {
                let kind = if lifetime > 1 {
                    PaddleKind::Replicator {
                        lifetime: lifetime - 1,
                    }
                } else {
                    log::debug!("Replicator paddle exhausted");
                    PaddleKind::Normal
                };
                PaddleHit {
                    ball,
                    paddle: Self { kind, ..*self },
                    replications: lifetime as usize,
                }
            }
        }
    }

    /// Slide left by `paddle_speed * elapsed`, stopping at the field edge
    pub fn move_left(&self, elapsed: i32, rules: &Rules) -> Self {
        assert!(elapsed >= 0, "elapsed time must not be negative, got {elapsed}");
        let x = (self.center.x() - rules.paddle_speed * elapsed).max(self.size.x());
        self.with_center(self.center.with_x(x.min(self.center.x())))
    }

    /// Slide right by `paddle_speed * elapsed`, stopping at the field edge
    pub fn move_right(&self, elapsed: i32, field: Point, rules: &Rules) -> Self {
        assert!(elapsed >= 0, "elapsed time must not be negative, got {elapsed}");
        let x = (self.center.x() + rules.paddle_speed * elapsed).min(field.x() - self.size.x());
        self.with_center(self.center.with_x(x.max(self.center.x())))
    }
}
