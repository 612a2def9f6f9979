//! Seeded level generation
//!
//! Lays out a grid of blocks across the top of the field with a mix of
//! block types, one ball between the blocks and the paddle, and the paddle
//! near the bottom. The same seed always produces the same level.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::rules::Rules;
use crate::sim::{Ball, Block, BlockKind, GameState, Paddle, Point, Vector};

/// Layout parameters for generated levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub field_width: i32,
    pub field_height: i32,
    pub columns: i32,
    pub rows: i32,
    pub block_height: i32,
    /// Space between neighbouring blocks and between blocks and walls
    pub gap: i32,
    /// Distance from the top wall to the first row
    pub top_margin: i32,
    pub ball_diameter: i32,
    /// Vertical ball speed at launch (per elapsed-time unit)
    pub ball_speed: i32,
    pub paddle_half_width: i32,
    pub paddle_half_height: i32,
    /// Distance from the bottom wall to the paddle center
    pub paddle_lift: i32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            field_width: 1000,
            field_height: 1000,
            columns: 10,
            rows: 4,
            block_height: 30,
            gap: 10,
            top_margin: 60,
            ball_diameter: 8,
            ball_speed: 6,
            paddle_half_width: 50,
            paddle_half_height: 8,
            paddle_lift: 80,
        }
    }
}

impl LevelConfig {
    /// Check that the layout fits the field and every entity can be built
    pub fn validate(&self) -> Result<(), GameError> {
        let minimums = [
            ("field_width", self.field_width, 1),
            ("field_height", self.field_height, 1),
            ("columns", self.columns, 1),
            ("rows", self.rows, 0),
            ("block_height", self.block_height, 1),
            ("gap", self.gap, 0),
            ("top_margin", self.top_margin, 0),
            ("ball_diameter", self.ball_diameter, 1),
            ("ball_speed", self.ball_speed, 1),
            ("paddle_half_width", self.paddle_half_width, 0),
            ("paddle_half_height", self.paddle_half_height, 0),
            ("paddle_lift", self.paddle_lift, 0),
        ];
        if let Some(&(name, value, _)) = minimums.iter().find(|(_, value, min)| value < min) {
            return Err(GameError::InvalidLevelConfig { name, value });
        }

        // Widened so oversized layouts are rejected instead of overflowing
        let gap = i64::from(self.gap);
        let columns = i64::from(self.columns);
        if (i64::from(self.field_width) - gap * (columns + 1)) / columns < 1 {
            return Err(GameError::InvalidLevelConfig {
                name: "columns",
                value: self.columns,
            });
        }
        let rows_bottom = i64::from(self.top_margin)
            + i64::from(self.rows) * (i64::from(self.block_height) + gap);
        if rows_bottom > i64::from(self.field_height) {
            return Err(GameError::InvalidLevelConfig {
                name: "rows",
                value: self.rows,
            });
        }
        Ok(())
    }

    fn block_width(&self) -> i32 {
        (self.field_width - self.gap * (self.columns + 1)) / self.columns
    }
}

/// Pick a block type; roughly 5% replicators, 10% power-ups, 25% sturdy
fn determine_block_kind(rng: &mut Pcg32, rules: &Rules) -> BlockKind {
    let roll = rng.random_range(0..100);
    match roll {
        0..5 => BlockKind::Replicator,
        5..15 => BlockKind::PowerupBall,
        15..40 => BlockKind::Sturdy {
            lifetime: rng.random_range(1..=rules.max_sturdy_lifetime),
        },
        _ => BlockKind::Normal,
    }
}

/// Generate a level from `seed`
pub fn generate_level(seed: u64, config: &LevelConfig, rules: Rules) -> Result<GameState, GameError> {
    rules.validate()?;
    config.validate()?;
    let mut rng = Pcg32::seed_from_u64(seed);

    let block_width = config.block_width();
    let mut blocks = Vec::with_capacity((config.columns * config.rows) as usize);
    for row in 0..config.rows {
        let top = config.top_margin + row * (config.block_height + config.gap);
        for column in 0..config.columns {
            let left = config.gap + column * (block_width + config.gap);
            let kind = determine_block_kind(&mut rng, &rules);
            blocks.push(Block::new(
                Point::new(left, top),
                Point::new(left + block_width, top + config.block_height),
                kind,
            ));
        }
    }

    let paddle = Paddle::new(
        Point::new(
            config.field_width / 2,
            config.field_height - config.paddle_lift,
        ),
        Vector::new(config.paddle_half_width, config.paddle_half_height),
    );

    // Launch from halfway between the lowest row and the paddle, heading up
    let rows_bottom = config.top_margin + config.rows * (config.block_height + config.gap);
    let ball_y = rows_bottom + (paddle.rect().top() - rows_bottom) / 2;
    let speed = config.ball_speed;
    let mut dx = rng.random_range(1..=speed);
    if rng.random_bool(0.5) {
        dx = -dx;
    }
    let ball = Ball::new(
        Point::new(config.field_width / 2, ball_y),
        config.ball_diameter,
        Vector::new(dx, -speed),
    );

    log::info!(
        "Level {}: {} blocks ({} special), ball velocity {:?}",
        seed,
        blocks.len(),
        blocks.iter().filter(|b| b.kind() != BlockKind::Normal).count(),
        ball.velocity()
    );

    GameState::with_rules(
        vec![ball],
        blocks,
        Point::new(config.field_width, config.field_height),
        paddle,
        rules,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_level_layout() {
        let config = LevelConfig::default();
        let state = generate_level(7, &config, Rules::default()).expect("default layout is valid");
        assert_eq!(state.blocks().len(), 40);
        assert_eq!(state.balls().len(), 1);
        assert_eq!(state.field_bottom_right(), Point::new(1000, 1000));
        assert_eq!(state.paddle().center(), Point::new(500, 920));
        assert!(state.balls()[0].velocity().y() < 0);
        assert!(!state.is_won());
        assert!(!state.is_dead());
    }

    #[test]
    fn test_generate_level_deterministic() {
        let config = LevelConfig::default();
        let a = generate_level(12345, &config, Rules::default()).expect("valid");
        let b = generate_level(12345, &config, Rules::default()).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sturdy_lifetimes_within_rules() {
        let rules = Rules {
            max_sturdy_lifetime: 2,
            ..Rules::default()
        };
        for seed in 0..20 {
            let state = generate_level(seed, &LevelConfig::default(), rules.clone()).expect("valid");
            for block in state.blocks() {
                if let BlockKind::Sturdy { lifetime } = block.kind() {
                    assert!((1..=2).contains(&lifetime));
                }
            }
        }
    }

    #[test]
    fn test_rejects_too_many_columns() {
        let config = LevelConfig {
            columns: 200,
            ..LevelConfig::default()
        };
        assert!(matches!(
            generate_level(1, &config, Rules::default()),
            Err(GameError::InvalidLevelConfig { name: "columns", value: 200 })
        ));
    }

    #[test]
    fn test_rejects_bad_layout_fields() {
        let cases = [
            ("field_width", LevelConfig { field_width: 0, ..LevelConfig::default() }),
            ("field_height", LevelConfig { field_height: -5, ..LevelConfig::default() }),
            ("columns", LevelConfig { columns: 0, ..LevelConfig::default() }),
            ("rows", LevelConfig { rows: -1, ..LevelConfig::default() }),
            ("block_height", LevelConfig { block_height: 0, ..LevelConfig::default() }),
            ("gap", LevelConfig { gap: -3, ..LevelConfig::default() }),
            ("top_margin", LevelConfig { top_margin: -1, ..LevelConfig::default() }),
            ("ball_diameter", LevelConfig { ball_diameter: 0, ..LevelConfig::default() }),
            ("ball_speed", LevelConfig { ball_speed: 0, ..LevelConfig::default() }),
            ("paddle_half_width", LevelConfig { paddle_half_width: -1, ..LevelConfig::default() }),
            ("paddle_half_height", LevelConfig { paddle_half_height: -1, ..LevelConfig::default() }),
            ("paddle_lift", LevelConfig { paddle_lift: i32::MIN, ..LevelConfig::default() }),
        ];
        for (field, config) in cases {
            match generate_level(1, &config, Rules::default()) {
                Err(GameError::InvalidLevelConfig { name, .. }) => assert_eq!(name, field),
                other => panic!("{field}: expected a level config error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_rows_past_field() {
        for rows in [30, i32::MAX] {
            let config = LevelConfig { rows, ..LevelConfig::default() };
            assert!(matches!(
                generate_level(1, &config, Rules::default()),
                Err(GameError::InvalidLevelConfig { name: "rows", .. })
            ));
        }
    }
}
