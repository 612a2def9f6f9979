//! Gameplay rules
//!
//! Tunable constants owned by a game state. Loaded from JSON when a level
//! wants to override the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::Vector;

/// Rule set in force for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Lifetime a ball gets when powered up (elapsed-time units)
    pub super_ball_lifetime: i32,
    /// Highest hit count a sturdy block may start with
    pub max_sturdy_lifetime: i32,
    /// Number of paddle hits a replicator paddle lasts
    pub replicator_lifetime: i32,
    /// Paddle travel per elapsed-time unit
    pub paddle_speed: i32,
    /// Horizontal velocity added per unit of paddle direction on a paddle hit
    pub paddle_boost: i32,
    /// Velocity offsets of the replicas spawned by a replicator paddle
    pub replication_offsets: [Vector; 3],
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            super_ball_lifetime: SUPER_BALL_LIFETIME,
            max_sturdy_lifetime: MAX_STURDY_LIFETIME,
            replicator_lifetime: REPLICATOR_LIFETIME,
            paddle_speed: PADDLE_SPEED,
            paddle_boost: PADDLE_BOOST,
            replication_offsets: REPLICATION_OFFSETS,
        }
    }
}

impl Rules {
    /// Parse a rule set, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let rules: Rules = serde_json::from_str(json).map_err(GameError::InvalidRules)?;
        rules.validate()?;
        log::info!("Loaded rules: {:?}", rules);
        Ok(rules)
    }

    /// Reject rule sets that would break entity invariants
    pub fn validate(&self) -> Result<(), GameError> {
        let lifetimes = [
            ("super_ball_lifetime", self.super_ball_lifetime),
            ("max_sturdy_lifetime", self.max_sturdy_lifetime),
            ("replicator_lifetime", self.replicator_lifetime),
        ];
        for (name, value) in lifetimes {
            if value < 1 {
                return Err(GameError::InvalidRule { name, value });
            }
        }
        // Each replicator hit spawns at most one replica per offset
        if self.replicator_lifetime > self.replication_offsets.len() as i32 {
            return Err(GameError::InvalidRule {
                name: "replicator_lifetime",
                value: self.replicator_lifetime,
            });
        }
        if self.paddle_speed < 0 {
            return Err(GameError::InvalidRule {
                name: "paddle_speed",
                value: self.paddle_speed,
            });
        }
        Ok(())
    }
}
