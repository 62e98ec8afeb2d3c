/// Game entity types. Pure data, no logic.

use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Before the first start.
    Idle,
    Running,
    Paused,
    Over,
}

impl GameStatus {
    /// Movement, spawning, firing and collisions only happen in this state.
    pub fn is_active(&self) -> bool {
        *self == GameStatus::Running
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Hero {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub health: u32,
}

impl Hero {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Hero-fired projectile, travels upward.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Enemy-fired projectile, travels downward.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyBullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl EnemyBullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Horizontal behaviour, fixed at spawn.
#[derive(Clone, Debug, PartialEq)]
pub enum EnemyMotion {
    Uniform,
    /// Moves `direction * speed` per frame and reverses once x leaves
    /// `origin_x ± half_width`.  The reversal happens after the overshoot,
    /// so the path can exceed the bound by up to one step.
    Zigzag {
        origin_x: f32,
        direction: f32,
        speed: f32,
        half_width: f32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Frames until the next shot; fires on the frame it is found at zero.
    pub shoot_cooldown: u32,
    pub motion: EnemyMotion,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub hero: Hero,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub score: u32,
    pub status: GameStatus,
    /// Frames simulated since the last reset.
    pub frame: u64,
    pub config: GameConfig,
    /// Notifications raised by pure transitions, collected by `Game`.
    pub events: Vec<GameEvent>,
}
