//! Discrete simulation tick
//!
//! Moves every ball once and resolves its collisions against the field
//! walls, the blocks and the paddle, in that order.

use super::ball::Ball;
use super::geometry::{Point, Vector};
use super::paddle::PaddleDirection;
use super::state::GameState;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    /// Time units to advance; must be positive
    pub elapsed: i32,
    /// Where the player is steering the paddle this step
    pub direction: PaddleDirection,
}

/// Advance the game state by one step
///
/// Balls are processed in roster order. Replicas spawned by a replicator
/// paddle join the end of the roster and are first moved on the next tick.
///
/// # Panics
/// If `input.elapsed` is not positive.
pub fn tick(state: &mut GameState, input: &TickInput) {
    assert!(input.elapsed > 0, "elapsed time must be positive, got {}", input.elapsed);
    let was_over = state.is_won() || state.is_dead();
    state.time_ticks += 1;

    let field = state.bottom_right;
    let balls = std::mem::take(&mut state.balls);
    let mut survivors = Vec::with_capacity(balls.len());
    let mut spawned = Vec::new();

    for ball in balls {
        let ball = bounce_off_walls(ball.age(input.elapsed).roll(input.elapsed), field);

        if ball.rect().bottom() >= field.y() {
            log::debug!("Ball lost at {:?}", ball.center());
            continue;
        }

        let mut ball = ball;
        let mut paddle = state.paddle;
        let blocks = std::mem::take(&mut state.blocks);
        let mut remaining = Vec::with_capacity(blocks.len());
        for block in blocks {
            let hit = block.resolve_hit(&ball, &paddle, &state.rules);
            ball = hit.ball;
            paddle = hit.paddle;
            if hit.destroyed {
                log::debug!("Block {:?} destroyed", block.kind());
            } else {
                remaining.push(hit.block);
            }
        }
        state.blocks = remaining;

        let hit = paddle.resolve_hit(&ball, input.direction, &state.rules);
        state.paddle = hit.paddle;
        if hit.replications > 0 {
            log::debug!("Replicating ball {} times", hit.replications);
            spawned.extend(hit.ball.replicate(hit.replications, &state.rules));
        }
        survivors.push(hit.ball);
    }

    survivors.append(&mut spawned);
    state.balls = survivors;

    log::trace!(
        "Tick {}: {} balls, {} blocks",
        state.time_ticks,
        state.balls.len(),
        state.blocks.len()
    );
    if !was_over {
        if state.is_won() {
            log::info!("Level cleared after {} ticks", state.time_ticks);
        } else if state.is_dead() {
            log::info!("All balls lost after {} ticks", state.time_ticks);
        }
    }
}

/// Bounce off every left, right or top wall the ball's box crosses
fn bounce_off_walls(ball: Ball, field: Point) -> Ball {
    let rect = ball.rect();
    let walls = [
        (rect.left() <= 0, Vector::LEFT),
        (rect.right() >= field.x(), Vector::RIGHT),
        (rect.top() <= 0, Vector::UP),
    ];
    walls
        .into_iter()
        .filter(|&(crossed, _)| crossed)
        .fold(ball, |ball, (_, normal)| ball.bounce(normal))
}
