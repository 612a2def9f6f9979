//! Game state and construction checks
//!
//! Everything the renderer needs to draw a frame lives here. The state is
//! only mutated by [`tick`](super::tick::tick) and the paddle movement
//! methods.

use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallKind};
use super::block::{Block, BlockKind};
use super::geometry::Point;
use super::paddle::{Paddle, PaddleDirection, PaddleKind};
use super::tick::{TickInput, tick};
use crate::error::GameError;
use crate::rules::Rules;

/// Complete game state (deterministic, serializable)
///
/// Deserializing runs the same checks as [`GameState::with_rules`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameStateData")]
pub struct GameState {
    /// Live balls, in processing order
    pub(crate) balls: Vec<Ball>,
    /// Live blocks
    pub(crate) blocks: Vec<Block>,
    pub(crate) paddle: Paddle,
    /// Bottom-right corner of the field; the top-left corner is the origin
    pub(crate) bottom_right: Point,
    pub(crate) rules: Rules,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
}

/// Unchecked wire form of [`GameState`]
#[derive(Deserialize)]
struct GameStateData {
    balls: Vec<Ball>,
    blocks: Vec<Block>,
    paddle: Paddle,
    bottom_right: Point,
    rules: Rules,
    time_ticks: u64,
}

impl TryFrom<GameStateData> for GameState {
    type Error = GameError;

    fn try_from(data: GameStateData) -> Result<Self, Self::Error> {
        let mut state =
            Self::with_rules(data.balls, data.blocks, data.bottom_right, data.paddle, data.rules)?;
        state.time_ticks = data.time_ticks;
        Ok(state)
    }
}

impl GameState {
    /// Build a game with the default rules
    pub fn new(
        balls: Vec<Ball>,
        blocks: Vec<Block>,
        bottom_right: Point,
        paddle: Paddle,
    ) -> Result<Self, GameError> {
        Self::with_rules(balls, blocks, bottom_right, paddle, Rules::default())
    }

    /// Build a game, checking that every entity sits where the rules allow
    pub fn with_rules(
        balls: Vec<Ball>,
        blocks: Vec<Block>,
        bottom_right: Point,
        paddle: Paddle,
        rules: Rules,
    ) -> Result<Self, GameError> {
        rules.validate()?;
        if !Point::ORIGIN.is_strictly_up_and_left_from(bottom_right) {
            return Err(GameError::InvalidField { bottom_right });
        }

        for (index, ball) in balls.iter().enumerate() {
            let center = ball.center();
            let inside = Point::ORIGIN.is_strictly_up_and_left_from(center)
                && center.is_strictly_up_and_left_from(bottom_right);
            if !inside {
                return Err(GameError::BallOutsideField { index, center });
            }
            if let BallKind::Super { lifetime } = ball.kind() {
                if !(1..=rules.super_ball_lifetime).contains(&lifetime) {
                    return Err(GameError::InvalidBallLifetime {
                        index,
                        lifetime,
                        max: rules.super_ball_lifetime,
                    });
                }
            }
        }

        let paddle_rect = paddle.rect();
        if !(Point::ORIGIN.is_up_and_left_from(paddle_rect.top_left)
            && paddle_rect.bottom_right.is_up_and_left_from(bottom_right))
        {
            return Err(GameError::PaddleOutsideField {
                center: paddle.center(),
                size: paddle.size(),
            });
        }
        if let PaddleKind::Replicator { lifetime } = paddle.kind() {
            if !(1..=rules.replicator_lifetime).contains(&lifetime) {
                return Err(GameError::InvalidPaddleLifetime {
                    lifetime,
                    max: rules.replicator_lifetime,
                });
            }
        }

        for (index, block) in blocks.iter().enumerate() {
            if !(Point::ORIGIN.is_up_and_left_from(block.top_left())
                && block.bottom_right().is_up_and_left_from(bottom_right))
            {
                return Err(GameError::BlockOutsideField { index });
            }
            if block.bottom_right().y() >= paddle_rect.top() {
                return Err(GameError::BlockNotAbovePaddle { index });
            }
            if let BlockKind::Sturdy { lifetime } = block.kind() {
                if !(1..=rules.max_sturdy_lifetime).contains(&lifetime) {
                    return Err(GameError::InvalidBlockLifetime {
                        index,
                        lifetime,
                        max: rules.max_sturdy_lifetime,
                    });
                }
            }
        }

        Ok(Self {
            balls,
            blocks,
            paddle,
            bottom_right,
            rules,
            time_ticks: 0,
        })
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    /// Bottom-right corner of the field
    pub fn field_bottom_right(&self) -> Point {
        self.bottom_right
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of ticks simulated so far
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// All blocks cleared with at least one ball still in play
    pub fn is_won(&self) -> bool {
        self.blocks.is_empty() && !self.balls.is_empty()
    }

    /// No balls left
    pub fn is_dead(&self) -> bool {
        self.balls.is_empty()
    }

    /// Advance one step; see [`tick`]
    pub fn tick(&mut self, elapsed: i32, direction: PaddleDirection) {
        tick(self, &TickInput { elapsed, direction });
    }

    pub fn move_paddle_left(&mut self, elapsed: i32) {
        self.paddle = self.paddle.move_left(elapsed, &self.rules);
    }

    pub fn move_paddle_right(&mut self, elapsed: i32) {
        self.paddle = self.paddle.move_right(elapsed, self.bottom_right, &self.rules);
    }

    /// Move the paddle according to `direction`
    pub fn steer_paddle(&mut self, elapsed: i32, direction: PaddleDirection) {
        match direction {
            PaddleDirection::Left => self.move_paddle_left(elapsed),
            PaddleDirection::Still => {}
            PaddleDirection::Right => self.move_paddle_right(elapsed),
        }
    }
}
