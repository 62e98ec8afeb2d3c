mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use arcade_shooter::config::{FireGate, GameConfig, MissedEnemyPolicy, SpawnPattern};
use arcade_shooter::events::GameEvent;
use arcade_shooter::game::Game;
use arcade_shooter::input::{Control, InputCollector, TouchDirection};

use display::{Button, Layout};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PatternArg {
    Uniform,
    Zigzag,
    Mixed,
}

impl From<PatternArg> for SpawnPattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Uniform => SpawnPattern::Uniform,
            PatternArg::Zigzag => SpawnPattern::Zigzag,
            PatternArg::Mixed => SpawnPattern::Mixed,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MissedEnemyArg {
    EndGame,
    Discard,
}

impl From<MissedEnemyArg> for MissedEnemyPolicy {
    fn from(arg: MissedEnemyArg) -> Self {
        match arg {
            MissedEnemyArg::EndGame => MissedEnemyPolicy::EndGame,
            MissedEnemyArg::Discard => MissedEnemyPolicy::Discard,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FireGateArg {
    Anywhere,
    OnScreen,
}

impl From<FireGateArg> for FireGate {
    fn from(arg: FireGateArg) -> Self {
        match arg {
            FireGateArg::Anywhere => FireGate::Anywhere,
            FireGateArg::OnScreen => FireGate::OnScreen,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arcade_shooter", about = "Terminal arcade shooter")]
struct Cli {
    /// Width of the visible area in logical pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Height of the visible area in logical pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Horizontal motion given to new enemies.
    #[arg(long, value_enum, default_value_t = PatternArg::Uniform)]
    pattern: PatternArg,

    /// What an enemy slipping past the bottom edge does.
    #[arg(long, value_enum, default_value_t = MissedEnemyArg::EndGame)]
    missed_enemy: MissedEnemyArg,

    /// Where enemies are allowed to shoot.
    #[arg(long, value_enum, default_value_t = FireGateArg::Anywhere)]
    fire_gate: FireGateArg,

    #[arg(long, default_value_t = 2000)]
    spawn_interval_ms: u64,

    /// Seed for enemy placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Write logs to this file (filter with RUST_LOG).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Ring the terminal bell on explosions.
    #[arg(long)]
    bell: bool,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            pattern: self.pattern.into(),
            missed_enemy: self.missed_enemy.into(),
            fire_gate: self.fire_gate.into(),
            spawn_interval: Duration::from_millis(self.spawn_interval_ms),
            ..GameConfig::with_viewport(self.width, self.height)
        }
    }

    fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

/// The renderer owns stdout, so logs only go to an explicit file.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Per-session frontend state that is not part of the simulation.
struct Frontend {
    input: InputCollector,
    layout: Layout,
    bell: bool,
    frame: u64,
}

/// What to do after handling one terminal event.
enum Flow {
    Continue,
    Quit,
}

fn control_for(code: &KeyCode) -> Option<Control> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Control::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Control::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Control::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Control::Down),
        _ => None,
    }
}

fn start_game(game: &mut Game<StdRng>, ui: &mut Frontend) {
    if game.start() {
        ui.input.clear();
    }
}

fn handle_key(game: &mut Game<StdRng>, ui: &mut Frontend, key: KeyEvent) -> Flow {
    let KeyEvent {
        code,
        kind,
        modifiers,
        ..
    } = key;

    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            if let Some(control) = control_for(&code) {
                ui.input.key_pressed(control, ui.frame);
                return Flow::Continue;
            }
            // One-shot actions fire on the initial press only, except Space,
            // which keeps firing on key repeat.
            match code {
                KeyCode::Char(' ') => game.fire(),
                _ if kind == KeyEventKind::Repeat => {}
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Flow::Quit;
                }
                KeyCode::Enter => start_game(game, ui),
                KeyCode::Char('p') | KeyCode::Char('P') => game.toggle_pause(),
                _ => {}
            }
        }
        KeyEventKind::Release => {
            if let Some(control) = control_for(&code) {
                ui.input.key_released(control);
            }
        }
    }
    Flow::Continue
}

/// Mouse stands in for the page's buttons and for touch on the canvas.
fn handle_mouse(game: &mut Game<StdRng>, ui: &mut Frontend, mouse: MouseEvent) {
    let MouseEvent {
        kind, column, row, ..
    } = mouse;
    let active = game.status().is_active();
    let world = game.config();
    let (width, height) = (world.width, world.height);

    match kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(button) = ui.layout.button_at(column, row) {
                match button {
                    Button::Left => ui.input.set_button(Control::Left, true),
                    Button::Right => ui.input.set_button(Control::Right, true),
                    Button::Fire => game.fire(),
                    Button::Start => start_game(game, ui),
                    Button::Pause => game.toggle_pause(),
                }
            } else if let Some((x, y)) = ui.layout.to_world(column, row) {
                if active {
                    game.fire();
                    ui.input
                        .set_touch(TouchDirection::from_point(x, y, width, height));
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some((x, y)) = ui.layout.to_world(column, row) {
                if active {
                    ui.input
                        .set_touch(TouchDirection::from_point(x, y, width, height));
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            ui.input.set_button(Control::Left, false);
            ui.input.set_button(Control::Right, false);
            ui.input.set_touch(None);
        }
        _ => {}
    }
}

fn play_cues<W: Write>(out: &mut W, ui: &Frontend, events: &[GameEvent]) -> std::io::Result<()> {
    for event in events {
        if event.is_sound() {
            debug!(?event, "sound cue");
        } else {
            debug!(?event, "published");
        }
        if ui.bell && *event == GameEvent::Explosion {
            display::bell(out)?;
        }
    }
    Ok(())
}

/// Runs until the player quits.  Pausing and game over keep this loop (and
/// rendering) alive; only the simulation stops advancing.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game<StdRng>,
    rx: &mpsc::Receiver<Event>,
    cli: &Cli,
) -> Result<()> {
    let (cols, rows) = terminal::size().context("failed to read terminal size")?;
    let mut ui = Frontend {
        input: InputCollector::new(),
        layout: Layout::new(cols, rows, game.config().width, game.config().height),
        bell: cli.bell,
        frame: 0,
    };
    let frame_duration = cli.frame_duration();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        ui.frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            match event {
                Event::Key(key) => {
                    if let Flow::Quit = handle_key(game, &mut ui, key) {
                        info!(score = game.state().score, "quit");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(game, &mut ui, mouse),
                Event::Resize(cols, rows) => {
                    ui.layout =
                        Layout::new(cols, rows, game.config().width, game.config().height);
                }
                _ => {}
            }
        }

        // ── Simulate ──────────────────────────────────────────────────────────
        let now = Instant::now();
        game.frame(now - last, ui.input.intent(ui.frame));
        last = now;

        let events = game.drain_events();
        play_cues(out, &ui, &events)?;

        display::render(out, &ui.layout, game.state())?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            thread::sleep(frame_duration - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();
    config.validate().context("invalid game configuration")?;
    init_logging(cli.log_file.as_deref())?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(?config, seed = ?cli.seed, "starting");
    let mut game = Game::new(config, rng);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut game, &rx, &cli);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
