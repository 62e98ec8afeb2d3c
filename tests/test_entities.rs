use std::time::Duration;

use arcade_shooter::config::GameConfig;
use arcade_shooter::entities::*;
use arcade_shooter::error::ConfigError;
use arcade_shooter::geometry::Rect;

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.left(), 10.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.top(), 20.0);
    assert_eq!(r.bottom(), 60.0);
}

#[test]
fn overlapping_rects() {
    let hero = Rect::new(375.0, 500.0, 50.0, 50.0);
    let bullet = Rect::new(375.0, 501.0, 10.0, 20.0);
    assert!(hero.overlaps(&bullet));
    assert!(bullet.overlaps(&hero));

    let enemy = Rect::new(100.0, 100.0, 50.0, 50.0);
    let shot = Rect::new(110.0, 90.0, 10.0, 20.0);
    assert!(enemy.overlaps(&shot));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(-10.0, 0.0, 10.0, 10.0)));
}

#[test]
fn contained_rect_overlaps() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn disjoint_rects() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&Rect::new(50.0, 50.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(5.0, 30.0, 10.0, 10.0)));
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[test]
fn entity_rects_follow_fields() {
    let hero = Hero {
        x: 1.0,
        y: 2.0,
        width: 3.0,
        height: 4.0,
        speed: 7.0,
        health: 5,
    };
    assert_eq!(hero.rect(), Rect::new(1.0, 2.0, 3.0, 4.0));

    let enemy = Enemy {
        x: 5.0,
        y: 6.0,
        width: 50.0,
        height: 50.0,
        speed: 3.0,
        shoot_cooldown: 0,
        motion: EnemyMotion::Uniform,
    };
    assert_eq!(enemy.rect(), Rect::new(5.0, 6.0, 50.0, 50.0));
}

#[test]
fn only_running_is_active() {
    assert!(GameStatus::Running.is_active());
    assert!(!GameStatus::Idle.is_active());
    assert!(!GameStatus::Paused.is_active());
    assert!(!GameStatus::Over.is_active());
}

// ── GameConfig ────────────────────────────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    assert_eq!(GameConfig::default().validate(), Ok(()));
}

#[test]
fn hero_start_is_centred_above_bottom() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.hero_start(), (375.0, 500.0));
    let cfg = GameConfig::with_viewport(400.0, 800.0);
    assert_eq!(cfg.hero_start(), (175.0, 700.0));
}

#[test]
fn hero_start_stays_inside_short_viewport() {
    let cfg = GameConfig::with_viewport(200.0, 120.0);
    let (_, y) = cfg.hero_start();
    assert_eq!(y, 20.0); // 120 - 100
    let cfg = GameConfig::with_viewport(200.0, 60.0);
    let (_, y) = cfg.hero_start();
    assert_eq!(y, 0.0);
}

#[test]
fn config_rejects_bad_dimensions() {
    let cfg = GameConfig::with_viewport(0.0, 600.0);
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::InvalidDimension {
            field: "width",
            value: 0.0
        })
    );
    let cfg = GameConfig::with_viewport(800.0, f32::NAN);
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidDimension { field: "height", .. })
    ));
}

#[test]
fn config_rejects_negative_speed() {
    let cfg = GameConfig {
        enemy_speed: -1.0,
        ..GameConfig::default()
    };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::InvalidSpeed {
            field: "enemy_speed",
            value: -1.0
        })
    );
}

#[test]
fn config_rejects_oversized_entities() {
    let cfg = GameConfig::with_viewport(40.0, 600.0);
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::EntityTooLarge { entity: "hero", .. })
    ));
}

#[test]
fn config_rejects_zero_counters() {
    let cfg = GameConfig {
        hero_health: 0,
        ..GameConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::ZeroHealth));

    let cfg = GameConfig {
        spawn_interval: Duration::ZERO,
        ..GameConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::ZeroSpawnInterval));

    let cfg = GameConfig {
        enemy_reload: 0,
        ..GameConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::ZeroReload));
}

#[test]
fn config_error_messages() {
    let err = ConfigError::InvalidDimension {
        field: "width",
        value: -3.0,
    };
    assert_eq!(
        err.to_string(),
        "width must be a positive finite number, got -3"
    );
    assert_eq!(
        ConfigError::ZeroHealth.to_string(),
        "hero health must start above zero"
    );
}

#[test]
fn game_state_clone_is_independent() {
    let original = arcade_shooter::compute::init_state(GameConfig::default());
    let mut cloned = original.clone();

    cloned.hero.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy {
        x: 5.0,
        y: 5.0,
        width: 50.0,
        height: 50.0,
        speed: 3.0,
        shoot_cooldown: 0,
        motion: EnemyMotion::Uniform,
    });

    assert_eq!(original.hero.x, 375.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
