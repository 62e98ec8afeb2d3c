/// Rendering layer. All terminal I/O lives here.
///
/// The simulation works in logical pixels; `Layout` scales that visible
/// area onto whatever terminal grid is available and maps pointer
/// positions back.  No game logic is performed; this module only
/// translates state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use arcade_shooter::entities::{GameState, GameStatus};
use arcade_shooter::geometry::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HEALTH: Color = Color::Red;
const C_HERO: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET_HERO: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Red;
const C_HEALTH_HIGH: Color = Color::Green;
const C_HEALTH_MID: Color = Color::Yellow;
const C_HEALTH_LOW: Color = Color::Red;
const C_HEALTH_EMPTY: Color = Color::DarkGrey;
const C_BUTTON: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Clickable controls on the bottom row, standing in for the page buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Left,
    Fire,
    Right,
    Start,
    Pause,
}

const BUTTONS: &[(Button, &str)] = &[
    (Button::Left, "[ ◀ ]"),
    (Button::Fire, "[ FIRE ]"),
    (Button::Right, "[ ▶ ]"),
    (Button::Start, "[ START ]"),
    (Button::Pause, "[ PAUSE ]"),
];

/// Terminal geometry for one frame.
///
///   row 0            HUD
///   row 1            top border
///   rows 2 .. h-3    play area (the visible area, scaled)
///   row h-2          bottom border
///   row h-1          button bar
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub cols: u16,
    pub rows: u16,
    play_col: u16,
    play_row: u16,
    play_cols: u16,
    play_rows: u16,
    world_width: f32,
    world_height: f32,
}

impl Layout {
    pub fn new(cols: u16, rows: u16, world_width: f32, world_height: f32) -> Self {
        Layout {
            cols,
            rows,
            play_col: 1,
            play_row: 2,
            play_cols: cols.saturating_sub(2).max(1),
            play_rows: rows.saturating_sub(4).max(1),
            world_width,
            world_height,
        }
    }

    fn scale_x(&self) -> f32 {
        self.play_cols as f32 / self.world_width
    }

    fn scale_y(&self) -> f32 {
        self.play_rows as f32 / self.world_height
    }

    /// Cells covered by `rect`, clipped to the play area.  Returns
    /// `(col_start, col_end, row_start, row_end)` with exclusive ends, or
    /// `None` when nothing is visible.  Anything visible covers at least one
    /// cell.
    fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = (rect.left() * self.scale_x()).floor();
        let c1 = (rect.right() * self.scale_x()).ceil().max(c0 + 1.0);
        let r0 = (rect.top() * self.scale_y()).floor();
        let r1 = (rect.bottom() * self.scale_y()).ceil().max(r0 + 1.0);

        let c0 = c0.max(0.0);
        let r0 = r0.max(0.0);
        let c1 = c1.min(self.play_cols as f32);
        let r1 = r1.min(self.play_rows as f32);
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((
            self.play_col + c0 as u16,
            self.play_col + c1 as u16,
            self.play_row + r0 as u16,
            self.play_row + r1 as u16,
        ))
    }

    /// Logical position under a terminal cell, if the cell is in the play area.
    pub fn to_world(&self, col: u16, row: u16) -> Option<(f32, f32)> {
        if col < self.play_col
            || row < self.play_row
            || col >= self.play_col + self.play_cols
            || row >= self.play_row + self.play_rows
        {
            return None;
        }
        let x = ((col - self.play_col) as f32 + 0.5) / self.scale_x();
        let y = ((row - self.play_row) as f32 + 0.5) / self.scale_y();
        Some((x, y))
    }

    fn button_row(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    /// Buttons with their starting column.
    fn buttons(&self) -> impl Iterator<Item = (Button, &'static str, u16)> {
        let mut col = 1u16;
        BUTTONS.iter().map(move |&(button, label)| {
            let start = col;
            col += label.chars().count() as u16 + 2;
            (button, label, start)
        })
    }

    pub fn button_at(&self, col: u16, row: u16) -> Option<Button> {
        if row != self.button_row() {
            return None;
        }
        self.buttons()
            .find(|(_, label, start)| {
                col >= *start && col < *start + label.chars().count() as u16
            })
            .map(|(button, _, _)| button)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, layout: &Layout, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, layout)?;
    draw_hud(out, layout, state)?;

    if state.status != GameStatus::Idle {
        for enemy in &state.enemies {
            fill(out, layout, &enemy.rect(), '▼', C_ENEMY)?;
        }
        for bullet in &state.bullets {
            fill(out, layout, &bullet.rect(), '║', C_BULLET_HERO)?;
        }
        for bullet in &state.enemy_bullets {
            fill(out, layout, &bullet.rect(), '↓', C_BULLET_ENEMY)?;
        }
        fill(out, layout, &state.hero.rect(), '█', C_HERO)?;
        draw_health_bar(out, layout, state)?;
    }

    draw_buttons(out, layout)?;

    match state.status {
        GameStatus::Idle => draw_overlay(
            out,
            layout,
            &[
                ("★  ARCADE  SHOOTER  ★", Color::Cyan),
                ("Enter / START : play", Color::White),
                ("← → ↑ ↓ / WASD : move   SPACE / click : fire", C_HINT),
                ("P : pause   Q : quit", C_HINT),
            ],
        )?,
        GameStatus::Paused => draw_overlay(
            out,
            layout,
            &[("PAUSED", Color::Yellow), ("P / PAUSE : resume", C_HINT)],
        )?,
        GameStatus::Over => {
            let score_line = format!("Final Score: {:>6}", state.score);
            draw_overlay(
                out,
                layout,
                &[
                    ("╔════════════════════╗", Color::Red),
                    ("║     GAME  OVER     ║", Color::Red),
                    ("╚════════════════════╝", Color::Red),
                    (score_line.as_str(), Color::Yellow),
                    ("Enter / START : New Game   Q : Quit", Color::White),
                ],
            )?
        }
        GameStatus::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, layout.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Ring the terminal bell.
pub fn bell<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(Print('\u{7}'))?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    let w = layout.cols as usize;
    let h = layout.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(layout.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, layout: &Layout, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", state.score)))?;

    let hearts = "♥".repeat(state.hero.health as usize);
    let health_str = format!("Health: {}", hearts);
    let x = layout
        .cols
        .saturating_sub(health_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(x, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(&health_str))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn fill<W: Write>(
    out: &mut W,
    layout: &Layout,
    rect: &Rect,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let Some((c0, c1, r0, r1)) = layout.cells(rect) else {
        return Ok(());
    };
    let line: String = std::iter::repeat(glyph).take((c1 - c0) as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

/// Bar as wide as the hero, one row above it, filled in proportion to
/// remaining health.
fn draw_health_bar<W: Write>(
    out: &mut W,
    layout: &Layout,
    state: &GameState,
) -> std::io::Result<()> {
    let Some((c0, c1, r0, _)) = layout.cells(&state.hero.rect()) else {
        return Ok(());
    };
    if r0 <= layout.play_row {
        return Ok(());
    }
    let width = (c1 - c0) as usize;
    let max = state.config.hero_health.max(1) as f32;
    let ratio = state.hero.health as f32 / max;
    let filled = ((ratio * width as f32).round() as usize).min(width);
    let color = if ratio > 0.6 {
        C_HEALTH_HIGH
    } else if ratio > 0.3 {
        C_HEALTH_MID
    } else {
        C_HEALTH_LOW
    };

    out.queue(cursor::MoveTo(c0, r0 - 1))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print("▀".repeat(filled)))?;
    out.queue(style::SetForegroundColor(C_HEALTH_EMPTY))?;
    out.queue(Print("▀".repeat(width - filled)))?;
    Ok(())
}

// ── Buttons (last row) ────────────────────────────────────────────────────────

fn draw_buttons<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BUTTON))?;
    for (_, label, col) in layout.buttons() {
        out.queue(cursor::MoveTo(col, layout.button_row()))?;
        out.queue(Print(label))?;
    }
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_overlay<W: Write>(
    out: &mut W,
    layout: &Layout,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = layout.cols / 2;
    let start_row = (layout.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
