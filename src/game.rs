/// Game-state controller.
///
/// `Game` owns everything that outlives a single frame: the state, the
/// spawn timer, the RNG and the outbox of notifications for the frontend.
/// The frontend drives it from one thread: input edges (`start`,
/// `toggle_pause`, `fire`) as they arrive, then one `frame` per refresh.

use std::time::Duration;

use rand::Rng;
use tracing::info;

use crate::compute::{init_state, player_shoot, spawn_enemy, tick};
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus};
use crate::events::GameEvent;
use crate::input::MovementIntent;
use crate::spawner::Spawner;

pub struct Game<R: Rng> {
    state: GameState,
    spawner: Spawner,
    rng: R,
    outbox: Vec<GameEvent>,
}

impl<R: Rng> Game<R> {
    /// A game waiting for its first start.
    pub fn new(config: GameConfig, rng: R) -> Self {
        Game {
            state: GameState {
                status: GameStatus::Idle,
                ..init_state(config)
            },
            spawner: Spawner::new(),
            rng,
            outbox: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Start (or restart after game over).  Returns `false` and does nothing
    /// while a game is running or paused.
    pub fn start(&mut self) -> bool {
        match self.state.status {
            GameStatus::Idle | GameStatus::Over => {}
            GameStatus::Running | GameStatus::Paused => return false,
        }
        self.state = init_state(self.state.config);
        self.spawner.start(self.state.config.spawn_interval);
        info!(health = self.state.hero.health, "new game");
        self.outbox.extend([
            GameEvent::ScoreChanged(self.state.score),
            GameEvent::HealthChanged(self.state.hero.health),
            GameEvent::MusicRestart,
        ]);
        true
    }

    /// Running ⇄ Paused.  No-op in any other state.
    pub fn toggle_pause(&mut self) {
        match self.state.status {
            GameStatus::Running => {
                self.state.status = GameStatus::Paused;
                info!(frame = self.state.frame, "paused");
                self.outbox.push(GameEvent::MusicPause);
            }
            GameStatus::Paused => {
                self.state.status = GameStatus::Running;
                info!(frame = self.state.frame, "resumed");
                self.outbox.push(GameEvent::MusicResume);
            }
            GameStatus::Idle | GameStatus::Over => {}
        }
    }

    pub fn fire(&mut self) {
        self.state = player_shoot(&self.state);
        self.collect_events();
    }

    /// One display refresh.  `elapsed` is the wall-clock time since the
    /// previous call and feeds the spawn timer; `intent` moves the hero.
    pub fn frame(&mut self, elapsed: Duration, intent: MovementIntent) {
        // The timer keeps its phase while paused, but a firing that lands
        // outside `Running` produces nothing.
        if self.spawner.poll(elapsed) {
            self.state = spawn_enemy(&self.state, &mut self.rng);
        }

        self.state = tick(&self.state, &intent);
        if self.state.status == GameStatus::Over {
            self.spawner.stop();
        }
        let ended = self.collect_events();
        if ended {
            self.outbox.push(GameEvent::MusicPause);
        }
    }

    /// Everything published since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Move notifications raised by pure transitions into the outbox.
    /// Returns whether one of them ended the game.
    fn collect_events(&mut self) -> bool {
        let mut ended = false;
        for event in self.state.events.drain(..) {
            ended |= matches!(event, GameEvent::GameOver(_));
            self.outbox.push(event);
        }
        ended
    }
}
