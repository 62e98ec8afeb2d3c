/// Every tunable number of the game in one place.
///
/// Sizes, positions and speeds are logical pixels (per frame for speeds).
/// The defaults describe an 800x600 playfield.

use std::time::Duration;

use crate::error::ConfigError;

/// How enemies move sideways.  Chosen per enemy at spawn time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnPattern {
    /// Straight down, no horizontal motion.
    Uniform,
    /// Straight down plus a reflecting oscillation around the spawn column.
    Zigzag,
    /// Each spawn picks Uniform or Zigzag with equal odds.
    Mixed,
}

/// What happens when an enemy slips past the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissedEnemyPolicy {
    EndGame,
    Discard,
}

/// When a uniform enemy with a spent cooldown may fire.  Zigzag enemies
/// always behave as `OnScreen`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireGate {
    Anywhere,
    /// Only while the enemy's y lies inside `[0, height]`.
    OnScreen,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,

    pub hero_width: f32,
    pub hero_height: f32,
    pub hero_speed: f32,
    pub hero_health: u32,
    /// Distance from the bottom edge to the hero's top edge at reset.
    pub hero_bottom_offset: f32,

    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,

    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_speed: f32,
    pub enemy_spawn_y: f32,
    pub spawn_interval: Duration,

    pub enemy_bullet_width: f32,
    pub enemy_bullet_height: f32,
    pub enemy_bullet_speed: f32,
    /// Frames between two shots of the same enemy (≈2s at 60 FPS).
    pub enemy_reload: u32,

    pub zigzag_speed: f32,
    pub zigzag_half_width: f32,

    pub pattern: SpawnPattern,
    pub missed_enemy: MissedEnemyPolicy,
    pub fire_gate: FireGate,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 800.0,
            height: 600.0,
            hero_width: 50.0,
            hero_height: 50.0,
            hero_speed: 7.0,
            hero_health: 5,
            hero_bottom_offset: 100.0,
            bullet_width: 10.0,
            bullet_height: 20.0,
            bullet_speed: 10.0,
            enemy_width: 50.0,
            enemy_height: 50.0,
            enemy_speed: 3.0,
            enemy_spawn_y: -50.0,
            spawn_interval: Duration::from_millis(2000),
            enemy_bullet_width: 10.0,
            enemy_bullet_height: 20.0,
            enemy_bullet_speed: 6.0,
            enemy_reload: 120,
            zigzag_speed: 2.0,
            zigzag_half_width: 60.0,
            pattern: SpawnPattern::Uniform,
            missed_enemy: MissedEnemyPolicy::EndGame,
            fire_gate: FireGate::Anywhere,
        }
    }
}

impl GameConfig {
    /// Same defaults, different visible area.
    pub fn with_viewport(width: f32, height: f32) -> Self {
        GameConfig {
            width,
            height,
            ..GameConfig::default()
        }
    }

    /// Hero top-left corner after a reset: horizontally centred, a fixed
    /// offset above the bottom edge.
    pub fn hero_start(&self) -> (f32, f32) {
        let x = self.width / 2.0 - self.hero_width / 2.0;
        let y = (self.height - self.hero_bottom_offset)
            .min(self.height - self.hero_height)
            .max(0.0);
        (x, y)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("hero_width", self.hero_width),
            ("hero_height", self.hero_height),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("enemy_bullet_width", self.enemy_bullet_width),
            ("enemy_bullet_height", self.enemy_bullet_height),
        ];
        for (field, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }

        let speeds = [
            ("hero_speed", self.hero_speed),
            ("bullet_speed", self.bullet_speed),
            ("enemy_speed", self.enemy_speed),
            ("enemy_bullet_speed", self.enemy_bullet_speed),
            ("zigzag_speed", self.zigzag_speed),
            ("zigzag_half_width", self.zigzag_half_width),
            ("hero_bottom_offset", self.hero_bottom_offset),
        ];
        for (field, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpeed { field, value });
            }
        }

        let too_large = |entity: &'static str, w: f32, h: f32| {
            if w > self.width || h > self.height {
                Err(ConfigError::EntityTooLarge {
                    entity,
                    width: self.width,
                    height: self.height,
                })
            } else {
                Ok(())
            }
        };
        too_large("hero", self.hero_width, self.hero_height)?;
        too_large("enemy", self.enemy_width, self.enemy_height)?;

        if self.hero_health == 0 {
            return Err(ConfigError::ZeroHealth);
        }
        if self.spawn_interval.is_zero() {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.enemy_reload == 0 {
            return Err(ConfigError::ZeroReload);
        }
        Ok(())
    }
}
