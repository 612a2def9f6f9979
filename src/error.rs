//! Errors surfaced when building a game

use std::error::Error;
use std::fmt;

use crate::sim::{Point, Vector};

/// Reasons a game state or rule set cannot be constructed
#[derive(Debug)]
pub enum GameError {
    /// The field's bottom-right corner is not strictly below and right of the origin
    InvalidField { bottom_right: Point },
    /// A ball center lies outside the field
    BallOutsideField { index: usize, center: Point },
    /// A ball carries a super lifetime outside `1..=max`
    InvalidBallLifetime { index: usize, lifetime: i32, max: i32 },
    /// A block extends beyond the field
    BlockOutsideField { index: usize },
    /// A block reaches down to or below the paddle's top edge
    BlockNotAbovePaddle { index: usize },
    /// A sturdy block's lifetime is outside `1..=max`
    InvalidBlockLifetime { index: usize, lifetime: i32, max: i32 },
    /// The paddle extends beyond the field
    PaddleOutsideField { center: Point, size: Vector },
    /// A replicator paddle's lifetime is outside `1..=max`
    InvalidPaddleLifetime { lifetime: i32, max: i32 },
    /// A paddle direction other than -1, 0 or 1
    InvalidPaddleDirection(i32),
    /// A rule value that would break entity invariants
    InvalidRule { name: &'static str, value: i32 },
    /// The rules document could not be parsed
    InvalidRules(serde_json::Error),
    /// A level layout parameter that cannot produce a playable level
    InvalidLevelConfig { name: &'static str, value: i32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidField { bottom_right } => {
                write!(f, "field corner {bottom_right:?} must lie below and right of the origin")
            }
            Self::BallOutsideField { index, center } => {
                write!(f, "ball {index} at {center:?} lies outside the field")
            }
            Self::InvalidBallLifetime {
                index,
                lifetime,
                max,
            } => write!(f, "ball {index} has lifetime {lifetime}, expected 1..={max}"),
            Self::BlockOutsideField { index } => write!(f, "block {index} lies outside the field"),
            Self::BlockNotAbovePaddle { index } => {
                write!(f, "block {index} is not above the paddle")
            }
            Self::InvalidBlockLifetime {
                index,
                lifetime,
                max,
            } => write!(f, "block {index} has lifetime {lifetime}, expected 1..={max}"),
            Self::PaddleOutsideField { center, size } => {
                write!(f, "paddle at {center:?} with size {size:?} lies outside the field")
            }
            Self::InvalidPaddleLifetime { lifetime, max } => {
                write!(f, "paddle has lifetime {lifetime}, expected 1..={max}")
            }
            Self::InvalidPaddleDirection(direction) => {
                write!(f, "paddle direction must be -1, 0 or 1 (received {direction})")
            }
            Self::InvalidRule { name, value } => write!(f, "rule {name} cannot be {value}"),
            Self::InvalidRules(error) => write!(f, "could not parse rules: {error}"),
            Self::InvalidLevelConfig { name, value } => {
                write!(f, "level setting {name} cannot be {value}")
            }
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRules(error) => Some(error),
            _ => None,
        }
    }
}
