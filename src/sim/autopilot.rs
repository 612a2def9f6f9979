//! Demo-mode paddle steering
//!
//! Chases the most dangerous ball: the lowest one that is falling, or the
//! lowest one overall when nothing is falling.

use super::paddle::PaddleDirection;
use super::state::GameState;

/// Pick a paddle direction for the current state
pub fn steer(state: &GameState) -> PaddleDirection {
    let falling = state
        .balls()
        .iter()
        .filter(|b| b.velocity().y() > 0)
        .max_by_key(|b| b.center().y());
    let Some(target) = falling.or_else(|| state.balls().iter().max_by_key(|b| b.center().y())) else {
        return PaddleDirection::Still;
    };

    let paddle = state.paddle();
    let offset = target.center().x() - paddle.center().x();
    // Keep still while the ball is over the middle of the paddle
    let dead_zone = paddle.size().x() / 2;
    if offset < -dead_zone {
        PaddleDirection::Left
    } else if offset > dead_zone {
        PaddleDirection::Right
    } else {
        PaddleDirection::Still
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Ball, Paddle, Point, Vector};

    fn state_with(balls: Vec<Ball>) -> GameState {
        let paddle = Paddle::new(Point::new(500, 900), Vector::new(40, 4));
        GameState::new(balls, Vec::new(), Point::new(1000, 1000), paddle).expect("valid")
    }

    #[test]
    fn test_no_balls_stays_still() {
        assert_eq!(steer(&state_with(Vec::new())), PaddleDirection::Still);
    }

    #[test]
    fn test_tracks_falling_ball() {
        let balls = vec![
            // Lower but rising
            Ball::new(Point::new(900, 800), 5, Vector::new(1, -3)),
            Ball::new(Point::new(100, 400), 5, Vector::new(1, 3)),
        ];
        assert_eq!(steer(&state_with(balls)), PaddleDirection::Left);
    }

    #[test]
    fn test_falls_back_to_lowest_ball() {
        let balls = vec![
            Ball::new(Point::new(100, 300), 5, Vector::new(1, -3)),
            Ball::new(Point::new(800, 700), 5, Vector::new(1, -3)),
        ];
        assert_eq!(steer(&state_with(balls)), PaddleDirection::Right);
    }

    #[test]
    fn test_dead_zone() {
        let balls = vec![Ball::new(Point::new(515, 700), 5, Vector::new(1, 3))];
        assert_eq!(steer(&state_with(balls)), PaddleDirection::Still);
    }
}
