use arcade_shooter::input::*;

// ── KeyTracker ────────────────────────────────────────────────────────────────

#[test]
fn key_held_within_window() {
    let mut keys = KeyTracker::new();
    keys.press('a', 10);
    assert!(keys.is_held(&'a', 10));
    assert!(keys.is_held(&'a', 10 + HOLD_WINDOW));
    assert!(!keys.is_held(&'a', 11 + HOLD_WINDOW));
    assert!(!keys.is_held(&'b', 10));
}

#[test]
fn key_repeat_refreshes_window() {
    let mut keys = KeyTracker::new();
    keys.press('a', 10);
    keys.press('a', 13);
    assert!(keys.is_held(&'a', 13 + HOLD_WINDOW));
}

#[test]
fn key_release_is_immediate() {
    let mut keys = KeyTracker::new();
    keys.press('a', 10);
    keys.release(&'a');
    assert!(!keys.is_held(&'a', 10));
}

// ── TouchDirection ────────────────────────────────────────────────────────────

#[test]
fn touch_direction_relative_to_centre() {
    // Centre of 800x600 is (400, 300)
    assert_eq!(
        TouchDirection::from_point(100.0, 300.0, 800.0, 600.0),
        Some(TouchDirection::Left)
    );
    assert_eq!(
        TouchDirection::from_point(700.0, 300.0, 800.0, 600.0),
        Some(TouchDirection::Right)
    );
    assert_eq!(
        TouchDirection::from_point(400.0, 100.0, 800.0, 600.0),
        Some(TouchDirection::Up)
    );
    assert_eq!(
        TouchDirection::from_point(400.0, 500.0, 800.0, 600.0),
        Some(TouchDirection::Down)
    );
}

#[test]
fn touch_dead_zone_has_no_direction() {
    assert_eq!(TouchDirection::from_point(400.0, 300.0, 800.0, 600.0), None);
    assert_eq!(TouchDirection::from_point(350.0, 250.0, 800.0, 600.0), None);
    assert_eq!(TouchDirection::from_point(450.0, 350.0, 800.0, 600.0), None);
}

#[test]
fn touch_horizontal_wins_over_vertical() {
    assert_eq!(
        TouchDirection::from_point(100.0, 10.0, 800.0, 600.0),
        Some(TouchDirection::Left)
    );
}

// ── InputCollector ────────────────────────────────────────────────────────────

#[test]
fn collector_idle_by_default() {
    let input = InputCollector::new();
    assert!(input.intent(0).is_idle());
}

#[test]
fn collector_keys_map_to_intent() {
    let mut input = InputCollector::new();
    input.key_pressed(Control::Left, 5);
    input.key_pressed(Control::Up, 5);
    let intent = input.intent(6);
    assert!(intent.left && intent.up);
    assert!(!intent.right && !intent.down);

    input.key_released(Control::Left);
    assert_eq!(input.intent(6), MovementIntent::up());
}

#[test]
fn collector_keys_expire_without_release() {
    let mut input = InputCollector::new();
    input.key_pressed(Control::Right, 5);
    assert!(input.intent(5 + HOLD_WINDOW + 1).is_idle());
}

#[test]
fn collector_buttons_hold_until_released() {
    let mut input = InputCollector::new();
    input.set_button(Control::Right, true);
    assert_eq!(input.intent(1000), MovementIntent::right());
    input.set_button(Control::Right, false);
    assert!(input.intent(1000).is_idle());
}

#[test]
fn collector_merges_touch_with_keys() {
    let mut input = InputCollector::new();
    input.key_pressed(Control::Left, 0);
    input.set_touch(Some(TouchDirection::Down));
    let intent = input.intent(0);
    assert!(intent.left && intent.down);
}

#[test]
fn collector_clear_drops_everything() {
    let mut input = InputCollector::new();
    input.key_pressed(Control::Left, 0);
    input.set_button(Control::Right, true);
    input.set_touch(Some(TouchDirection::Up));
    input.clear();
    assert!(input.intent(0).is_idle());
    assert!(input.intent(1000).is_idle());
}

#[test]
fn collector_touch_released_stops_movement() {
    let mut input = InputCollector::new();
    input.set_touch(TouchDirection::from_point(700.0, 300.0, 800.0, 600.0));
    assert_eq!(input.intent(0), MovementIntent::right());
    input.set_touch(None);
    assert!(input.intent(0).is_idle());
}

#[test]
fn merge_is_a_union() {
    let merged = MovementIntent::left().merge(MovementIntent::down());
    assert_eq!(
        merged,
        MovementIntent {
            left: true,
            right: false,
            up: false,
            down: true,
        }
    );
}
