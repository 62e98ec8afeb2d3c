/// One-way notifications from the core to the frontend.  Nothing here is
/// acknowledged; the frontend drains them once per frame.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    /// An enemy went past the bottom of the visible area.
    EnemyBreached,
    /// Hero health reached zero.
    HeroDestroyed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Hero fired a bullet.
    Fire,
    /// An enemy was destroyed by a hero bullet.
    Explosion,
    /// Background music restarts from the beginning.
    MusicRestart,
    MusicPause,
    MusicResume,
    ScoreChanged(u32),
    HealthChanged(u32),
    GameOver(GameOverReason),
}

impl GameEvent {
    pub fn is_sound(&self) -> bool {
        matches!(
            self,
            GameEvent::Fire
                | GameEvent::Explosion
                | GameEvent::MusicRestart
                | GameEvent::MusicPause
                | GameEvent::MusicResume
        )
    }
}
