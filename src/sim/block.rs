//! Block entity and hit resolution

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geometry::{Point, Rect};
use super::paddle::Paddle;
use crate::rules::Rules;

/// Block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockKind {
    /// Destroyed by a single hit
    #[default]
    Normal,
    /// Survives `lifetime - 1` hits
    Sturdy { lifetime: i32 },
    /// Turns the ball that destroys it into a super ball
    PowerupBall,
    /// Turns the paddle into a replicator paddle when destroyed
    Replicator,
}

/// A block entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    top_left: Point,
    bottom_right: Point,
    kind: BlockKind,
}

/// Outcome of testing a ball against a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHit {
    /// The block after the hit (a decayed copy for sturdy blocks)
    pub block: Block,
    pub ball: Ball,
    pub paddle: Paddle,
    /// The block must leave the roster
    pub destroyed: bool,
}

impl Block {
    /// # Panics
    /// If `top_left` is not strictly up and left from `bottom_right`, or a
    /// sturdy lifetime is not positive.
    pub fn new(top_left: Point, bottom_right: Point, kind: BlockKind) -> Self {
        assert!(
            top_left.is_strictly_up_and_left_from(bottom_right),
            "block corners out of order: {top_left:?} / {bottom_right:?}"
        );
        if let BlockKind::Sturdy { lifetime } = kind {
            assert!(lifetime >= 1, "sturdy block lifetime must be positive, got {lifetime}");
        }
        Self {
            top_left,
            bottom_right,
            kind,
        }
    }

    pub fn normal(top_left: Point, bottom_right: Point) -> Self {
        Self::new(top_left, bottom_right, BlockKind::Normal)
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.top_left, self.bottom_right)
    }

    /// Resolve a possible hit by `ball`
    ///
    /// A hit only registers when the ball overlaps one of our faces and is
    /// still moving into it; a ball already bounced last step is ignored.
    /// On a miss everything comes back unchanged and `destroyed` is false.
    pub fn resolve_hit(&self, ball: &Ball, paddle: &Paddle, rules: &Rules) -> BlockHit {
        let rect = self.rect();
        let miss = BlockHit {
            block: *self,
            ball: *ball,
            paddle: *paddle,
            destroyed: false,
        };

        let Some(normal) = ball.rect().overlap(&rect) else {
            return miss;
        };
        if normal.dot(ball.velocity()) <= 0 {
            return miss;
        }

        match self.kind {
            BlockKind::Normal => BlockHit {
                ball: ball.hit_block(&rect, true),
                destroyed: true,
                ..miss
            },
            BlockKind::Sturdy { lifetime } => {
                let destroyed = lifetime <= 1;
                if !destroyed {
                    log::debug!("Sturdy block at {:?} dented ({} left)", self.top_left, lifetime - 1);
                }
                BlockHit {
                    block: Self {
                        kind: BlockKind::Sturdy {
                            lifetime: if destroyed { lifetime } else { lifetime - 1 },
                        },
                        ..*self
                    },
                    ball: ball.hit_block(&rect, destroyed),
                    destroyed,
                    ..miss
                }
            }
            BlockKind::PowerupBall => {
                log::debug!("Power-up block at {:?} hit, ball goes super", self.top_left);
                BlockHit {
                    ball: ball.hit_block(&rect, true).powerup(rules),
                    destroyed: true,
                    ..miss
                }
            }
            BlockKind::Replicator => {
                log::debug!("Replicator block at {:?} hit, paddle powered up", self.top_left);
                BlockHit {
                    ball: ball.hit_block(&rect, true),
                    paddle: paddle.powerup(rules),
                    destroyed: true,
                    ..miss
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Vector;
    use crate::sim::paddle::PaddleKind;

    fn paddle() -> Paddle {
        Paddle::new(Point::new(500, 900), Vector::new(10, 4))
    }

    fn block(kind: BlockKind) -> Block {
        Block::new(Point::new(101, 101), Point::new(151, 151), kind)
    }

    /// Ball just below the block, moving up into it
    fn ball_below() -> Ball {
        Ball::new(Point::new(125, 155), 10, Vector::new(0, -10))
    }

    #[test]
    fn test_normal_block_destroyed() {
        let rules = Rules::default();
        let hit = block(BlockKind::Normal).resolve_hit(&ball_below(), &paddle(), &rules);
        assert!(hit.destroyed);
        assert_eq!(hit.ball.velocity(), Vector::new(0, 10));
        assert_eq!(hit.paddle, paddle());
    }

    #[test]
    fn test_moving_away_is_ignored() {
        let rules = Rules::default();
        let leaving = Ball::new(Point::new(125, 155), 10, Vector::new(0, 10));
        let hit = block(BlockKind::Normal).resolve_hit(&leaving, &paddle(), &rules);
        assert!(!hit.destroyed);
        assert_eq!(hit.ball, leaving);
        assert_eq!(hit.block, block(BlockKind::Normal));
    }

    #[test]
    fn test_no_overlap_is_miss() {
        let rules = Rules::default();
        let far = Ball::new(Point::new(400, 400), 10, Vector::new(0, -10));
        let hit = block(BlockKind::Replicator).resolve_hit(&far, &paddle(), &rules);
        assert!(!hit.destroyed);
        assert_eq!(hit.paddle.kind(), PaddleKind::Normal);
    }

    #[test]
    fn test_sturdy_block_decays() {
        let rules = Rules::default();
        let hit = block(BlockKind::Sturdy { lifetime: 3 }).resolve_hit(&ball_below(), &paddle(), &rules);
        assert!(!hit.destroyed);
        assert_eq!(hit.block.kind(), BlockKind::Sturdy { lifetime: 2 });
        assert_eq!(hit.block.top_left(), Point::new(101, 101));
        assert_eq!(hit.ball.velocity(), Vector::new(0, 10));

        let hit = block(BlockKind::Sturdy { lifetime: 1 }).resolve_hit(&ball_below(), &paddle(), &rules);
        assert!(hit.destroyed);
    }

    #[test]
    fn test_super_ball_passes_destroyed_but_bounces_off_dented() {
        let rules = Rules::default();
        let sup = ball_below().powerup(&rules);

        let hit = block(BlockKind::Normal).resolve_hit(&sup, &paddle(), &rules);
        assert!(hit.destroyed);
        assert_eq!(hit.ball.velocity(), Vector::new(0, -10));

        let hit = block(BlockKind::Sturdy { lifetime: 2 }).resolve_hit(&sup, &paddle(), &rules);
        assert!(!hit.destroyed);
        assert_eq!(hit.ball.velocity(), Vector::new(0, 10));
    }

    #[test]
    fn test_powerup_block() {
        let rules = Rules::default();
        let hit = block(BlockKind::PowerupBall).resolve_hit(&ball_below(), &paddle(), &rules);
        assert!(hit.destroyed);
        assert!(hit.ball.is_super());
        assert_eq!(hit.ball.velocity(), Vector::new(0, 10));
    }

    #[test]
    fn test_replicator_block() {
        let rules = Rules::default();
        let hit = block(BlockKind::Replicator).resolve_hit(&ball_below(), &paddle(), &rules);
        assert!(hit.destroyed);
        assert_eq!(
            hit.paddle.kind(),
            PaddleKind::Replicator {
                lifetime: rules.replicator_lifetime
            }
        );
        assert!(!hit.ball.is_super());
    }

    #[test]
    #[should_panic(expected = "block corners out of order")]
    fn test_degenerate_block_rejected() {
        Block::normal(Point::new(10, 10), Point::new(20, 10));
    }
}
