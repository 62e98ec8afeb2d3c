/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG and to the
/// notifications appended to `GameState::events`.
///
/// Nothing here changes a state that is not `Running`.

use rand::Rng;
use tracing::{debug, info};

use crate::config::{FireGate, GameConfig, MissedEnemyPolicy, SpawnPattern};
use crate::entities::{Bullet, Enemy, EnemyBullet, EnemyMotion, GameState, GameStatus, Hero};
use crate::events::{GameEvent, GameOverReason};
use crate::input::MovementIntent;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh state for a new game: empty collections, zero score, full health,
/// hero at its start position, status `Running`.
pub fn init_state(config: GameConfig) -> GameState {
    let (x, y) = config.hero_start();
    GameState {
        hero: Hero {
            x,
            y,
            width: config.hero_width,
            height: config.hero_height,
            speed: config.hero_speed,
            health: config.hero_health,
        },
        bullets: Vec::new(),
        enemies: Vec::new(),
        enemy_bullets: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        frame: 0,
        config,
        events: Vec::new(),
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply one frame of movement intent.  Each axis is clamped so the hero
/// rectangle never leaves the visible area.
pub fn move_hero(state: &GameState, intent: &MovementIntent) -> GameState {
    if !state.status.is_active() || intent.is_idle() {
        return state.clone();
    }
    let max_x = state.config.width - state.hero.width;
    let max_y = state.config.height - state.hero.height;
    let mut hero = state.hero.clone();

    if intent.left {
        hero.x = (hero.x - hero.speed).max(0.0);
    }
    if intent.right {
        hero.x = (hero.x + hero.speed).min(max_x);
    }
    if intent.up {
        hero.y = (hero.y - hero.speed).max(0.0);
    }
    if intent.down {
        hero.y = (hero.y + hero.speed).min(max_y);
    }

    GameState {
        hero,
        ..state.clone()
    }
}

/// Fire one bullet from the hero's top edge, horizontally centred.
/// No cooldown: every call while running adds a bullet.
pub fn player_shoot(state: &GameState) -> GameState {
    if !state.status.is_active() {
        return state.clone();
    }
    let cfg = &state.config;
    let hero = &state.hero;
    let bullet = Bullet {
        x: hero.x + hero.width / 2.0 - cfg.bullet_width / 2.0,
        y: hero.y,
        width: cfg.bullet_width,
        height: cfg.bullet_height,
        speed: cfg.bullet_speed,
    };
    debug!(x = bullet.x, y = bullet.y, "hero fired");

    let mut next = state.clone();
    next.bullets.push(bullet);
    next.events.push(GameEvent::Fire);
    next
}

/// Append one enemy above the visible top edge at a random column.
pub fn spawn_enemy(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !state.status.is_active() {
        return state.clone();
    }
    let cfg = &state.config;
    let max_x = cfg.width - cfg.enemy_width;
    let x = if max_x > 0.0 {
        rng.gen_range(0.0..max_x)
    } else {
        0.0
    };

    let zigzag = match cfg.pattern {
        SpawnPattern::Uniform => false,
        SpawnPattern::Zigzag => true,
        SpawnPattern::Mixed => rng.gen_bool(0.5),
    };
    // Zigzag enemies shoot as soon as they can; uniform ones wait a full
    // reload first.
    let (motion, shoot_cooldown) = if zigzag {
        let motion = EnemyMotion::Zigzag {
            origin_x: x,
            direction: 1.0,
            speed: cfg.zigzag_speed,
            half_width: cfg.zigzag_half_width,
        };
        (motion, 0)
    } else {
        (EnemyMotion::Uniform, cfg.enemy_reload)
    };

    let enemy = Enemy {
        x,
        y: cfg.enemy_spawn_y,
        width: cfg.enemy_width,
        height: cfg.enemy_height,
        speed: cfg.enemy_speed,
        shoot_cooldown,
        motion,
    };
    debug!(x = enemy.x, zigzag, "enemy spawned");

    let mut next = state.clone();
    next.enemies.push(enemy);
    next
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Phases run in order: hero movement, hero bullets, enemies (movement and
/// shooting), enemy bullets, enemy bullets vs hero, hero bullets vs enemies.
/// When a phase ends the game the state is returned as it stands; later
/// phases do not run.
pub fn tick(state: &GameState, intent: &MovementIntent) -> GameState {
    if !state.status.is_active() {
        return state.clone();
    }

    // ── 1. Hero movement ─────────────────────────────────────────────────────
    let mut next = move_hero(state, intent);
    next.frame = state.frame + 1;

    // ── 2. Hero bullets ──────────────────────────────────────────────────────
    next.bullets = advance_bullets(&next.bullets);

    // ── 3. Enemies ───────────────────────────────────────────────────────────
    let phase = advance_enemies(&next.enemies, &next.config);
    next.enemies = phase.enemies;
    next.enemy_bullets.extend(phase.fired);
    if phase.breached {
        return end_game(next, GameOverReason::EnemyBreached);
    }

    // ── 4. Enemy bullets ─────────────────────────────────────────────────────
    next.enemy_bullets = advance_enemy_bullets(&next.enemy_bullets, next.config.height);

    // ── 5. Collision: enemy bullets ↔ hero ───────────────────────────────────
    let hero_rect = next.hero.rect();
    let mut remaining = Vec::with_capacity(next.enemy_bullets.len());
    let mut destroyed = false;
    for bullet in next.enemy_bullets.drain(..) {
        if destroyed || !bullet.rect().overlaps(&hero_rect) {
            remaining.push(bullet);
            continue;
        }
        next.hero.health = next.hero.health.saturating_sub(1);
        debug!(health = next.hero.health, "hero hit");
        next.events.push(GameEvent::HealthChanged(next.hero.health));
        destroyed = next.hero.health == 0;
    }
    next.enemy_bullets = remaining;
    if destroyed {
        return end_game(next, GameOverReason::HeroDestroyed);
    }

    // ── 6. Collision: hero bullets ↔ enemies ─────────────────────────────────
    let mut used = vec![false; next.bullets.len()];
    let mut survivors = Vec::with_capacity(next.enemies.len());
    for enemy in next.enemies.drain(..) {
        let enemy_rect = enemy.rect();
        // First unused overlapping bullet wins; at most one per enemy.
        let hit = next
            .bullets
            .iter()
            .zip(&used)
            .position(|(b, &spent)| !spent && b.rect().overlaps(&enemy_rect));
        match hit {
            Some(bi) => {
                used[bi] = true;
                next.score += 1;
                debug!(score = next.score, x = enemy.x, y = enemy.y, "enemy destroyed");
                next.events.push(GameEvent::Explosion);
                next.events.push(GameEvent::ScoreChanged(next.score));
            }
            None => survivors.push(enemy),
        }
    }
    next.enemies = survivors;
    next.bullets = std::mem::take(&mut next.bullets)
        .into_iter()
        .zip(used)
        .filter(|(_, spent)| !spent)
        .map(|(b, _)| b)
        .collect();

    next
}

fn end_game(mut state: GameState, reason: GameOverReason) -> GameState {
    info!(?reason, score = state.score, frame = state.frame, "game over");
    state.status = GameStatus::Over;
    state.events.push(GameEvent::GameOver(reason));
    state
}

/// Move hero bullets up; drop the ones entirely above the top edge.
fn advance_bullets(bullets: &[Bullet]) -> Vec<Bullet> {
    bullets
        .iter()
        .filter_map(|b| {
            let y = b.y - b.speed;
            if y + b.height < 0.0 {
                None
            } else {
                Some(Bullet { y, ..b.clone() })
            }
        })
        .collect()
}

/// Move enemy bullets down; drop the ones past the bottom edge.
fn advance_enemy_bullets(bullets: &[EnemyBullet], height: f32) -> Vec<EnemyBullet> {
    bullets
        .iter()
        .filter_map(|b| {
            let y = b.y + b.speed;
            if y > height {
                None
            } else {
                Some(EnemyBullet { y, ..b.clone() })
            }
        })
        .collect()
}

struct EnemyPhase {
    enemies: Vec<Enemy>,
    fired: Vec<EnemyBullet>,
    /// An enemy crossed the bottom edge under `MissedEnemyPolicy::EndGame`.
    breached: bool,
}

fn advance_enemies(enemies: &[Enemy], cfg: &GameConfig) -> EnemyPhase {
    let mut phase = EnemyPhase {
        enemies: Vec::with_capacity(enemies.len()),
        fired: Vec::new(),
        breached: false,
    };

    for (i, enemy) in enemies.iter().enumerate() {
        let mut enemy = enemy.clone();
        enemy.y += enemy.speed;

        if let EnemyMotion::Zigzag {
            origin_x,
            ref mut direction,
            speed,
            half_width,
        } = enemy.motion
        {
            enemy.x += *direction * speed;
            if enemy.x > origin_x + half_width || enemy.x < origin_x - half_width {
                *direction = -*direction;
            }
        }

        if enemy.shoot_cooldown > 0 {
            enemy.shoot_cooldown -= 1;
        } else if may_fire(&enemy, cfg) {
            phase.fired.push(EnemyBullet {
                x: enemy.x + enemy.width / 2.0 - cfg.enemy_bullet_width / 2.0,
                y: enemy.y + enemy.height,
                width: cfg.enemy_bullet_width,
                height: cfg.enemy_bullet_height,
                speed: cfg.enemy_bullet_speed,
            });
            enemy.shoot_cooldown = cfg.enemy_reload;
        }

        if enemy.y > cfg.height {
            match cfg.missed_enemy {
                MissedEnemyPolicy::EndGame => {
                    // Halt: the rest of the enemies keep last frame's state.
                    phase.enemies.push(enemy);
                    phase.enemies.extend_from_slice(&enemies[i + 1..]);
                    phase.breached = true;
                    return phase;
                }
                MissedEnemyPolicy::Discard => {
                    debug!(x = enemy.x, "enemy left the screen");
                    continue;
                }
            }
        }

        phase.enemies.push(enemy);
    }
    phase
}

/// Zigzag enemies always hold fire until they are on screen; the gate
/// setting decides for the rest.
fn may_fire(enemy: &Enemy, cfg: &GameConfig) -> bool {
    let on_screen = enemy.y >= 0.0 && enemy.y <= cfg.height;
    match (&enemy.motion, cfg.fire_gate) {
        (EnemyMotion::Zigzag { .. }, _) | (_, FireGate::OnScreen) => on_screen,
        (EnemyMotion::Uniform, FireGate::Anywhere) => true,
    }
}
