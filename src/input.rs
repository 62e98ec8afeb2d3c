/// Input collector.
///
/// Raw device signals (keys, on-screen buttons, pointer/touch position) are
/// folded into one `MovementIntent` per frame.  Firing is not tracked here:
/// every fire trigger is a discrete edge that goes straight to `Game::fire`.

use std::collections::HashMap;
use std::hash::Hash;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so the window is refreshed before it
/// expires while the key is down.
pub const HOLD_WINDOW: u64 = 4;

/// Half-size of the dead zone around the centre of the visible area used to
/// turn a touch point into a direction.
pub const TOUCH_DEAD_ZONE: f32 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementIntent {
    pub const NONE: MovementIntent = MovementIntent {
        left: false,
        right: false,
        up: false,
        down: false,
    };

    pub fn left() -> Self {
        MovementIntent {
            left: true,
            ..Self::NONE
        }
    }

    pub fn right() -> Self {
        MovementIntent {
            right: true,
            ..Self::NONE
        }
    }

    pub fn up() -> Self {
        MovementIntent {
            up: true,
            ..Self::NONE
        }
    }

    pub fn down() -> Self {
        MovementIntent {
            down: true,
            ..Self::NONE
        }
    }

    pub fn merge(self, other: MovementIntent) -> MovementIntent {
        MovementIntent {
            left: self.left || other.left,
            right: self.right || other.right,
            up: self.up || other.up,
            down: self.down || other.down,
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchDirection {
    Left,
    Right,
    Up,
    Down,
}

impl TouchDirection {
    /// Direction of a touch at `(x, y)` relative to the centre of a
    /// `width` x `height` area.  Horizontal offsets win over vertical ones;
    /// inside the dead zone there is no direction.
    pub fn from_point(x: f32, y: f32, width: f32, height: f32) -> Option<TouchDirection> {
        let cx = width / 2.0;
        let cy = height / 2.0;
        if x < cx - TOUCH_DEAD_ZONE {
            Some(TouchDirection::Left)
        } else if x > cx + TOUCH_DEAD_ZONE {
            Some(TouchDirection::Right)
        } else if y < cy - TOUCH_DEAD_ZONE {
            Some(TouchDirection::Up)
        } else if y > cy + TOUCH_DEAD_ZONE {
            Some(TouchDirection::Down)
        } else {
            None
        }
    }

    pub fn intent(&self) -> MovementIntent {
        match self {
            TouchDirection::Left => MovementIntent::left(),
            TouchDirection::Right => MovementIntent::right(),
            TouchDirection::Up => MovementIntent::up(),
            TouchDirection::Down => MovementIntent::down(),
        }
    }
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// Maps each held key to the frame it was last seen (press or repeat).
///
/// Works on two classes of terminal:
/// * with release events, keys are removed on release;
/// * without them, keys expire after `HOLD_WINDOW` frames of silence.
#[derive(Clone, Debug)]
pub struct KeyTracker<K> {
    last_seen: HashMap<K, u64>,
}

impl<K: Eq + Hash> Default for KeyTracker<K> {
    fn default() -> Self {
        KeyTracker {
            last_seen: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> KeyTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or a repeat.
    pub fn press(&mut self, key: K, frame: u64) {
        self.last_seen.insert(key, frame);
    }

    pub fn release(&mut self, key: &K) {
        self.last_seen.remove(key);
    }

    pub fn is_held(&self, key: &K, frame: u64) -> bool {
        self.last_seen
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

// ── Collector ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct InputCollector {
    keys: KeyTracker<Control>,
    button_left: bool,
    button_right: bool,
    touch: Option<TouchDirection>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_pressed(&mut self, control: Control, frame: u64) {
        self.keys.press(control, frame);
    }

    pub fn key_released(&mut self, control: Control) {
        self.keys.release(&control);
    }

    /// On-screen left/right buttons: held between press and release.
    pub fn set_button(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Left => self.button_left = pressed,
            Control::Right => self.button_right = pressed,
            Control::Up | Control::Down => {}
        }
    }

    pub fn set_touch(&mut self, direction: Option<TouchDirection>) {
        self.touch = direction;
    }

    /// Drop every held signal, e.g. when a new game starts.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.button_left = false;
        self.button_right = false;
        self.touch = None;
    }

    /// Combined intent for `frame`.
    pub fn intent(&self, frame: u64) -> MovementIntent {
        let keys = MovementIntent {
            left: self.keys.is_held(&Control::Left, frame) || self.button_left,
            right: self.keys.is_held(&Control::Right, frame) || self.button_right,
            up: self.keys.is_held(&Control::Up, frame),
            down: self.keys.is_held(&Control::Down, frame),
        };
        match self.touch {
            Some(direction) => keys.merge(direction.intent()),
            None => keys,
        }
    }
}
