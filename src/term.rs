//! Terminal view
//!
//! Rasterises a frame's draw list onto a character grid: one text line per
//! board row, `CELL_W` characters per column, plus a star line on top.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    QueueableCommand, cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};

use bug_crossing::consts::*;
use bug_crossing::render::DrawList;
use bug_crossing::sim::{GamePhase, SessionStats, Sprite};

/// Characters per board column
const CELL_W: usize = 8;
const BOARD_W: usize = NUM_COLS as usize * CELL_W;

fn glyph(sprite: Sprite) -> &'static str {
    match sprite {
        Sprite::EnemyBug => "<bug>",
        Sprite::Rock => "[##]",
        Sprite::Star => "*",
        Sprite::CharBoy => "(B)",
        Sprite::CharCatGirl => "(C)",
        Sprite::CharHornGirl => "(H)",
        Sprite::CharPinkGirl => "(P)",
        Sprite::CharPrincessGirl => "(Q)",
    }
}

fn row_style(row: usize) -> (char, Color) {
    match row {
        0 => ('~', Color::Blue),
        1..=3 => ('.', Color::Grey),
        _ => (',', Color::Green),
    }
}

/// Text lines for one frame
#[derive(Debug, Clone)]
pub struct TextFrame {
    pub stars: Vec<char>,
    pub rows: Vec<Vec<char>>,
}

impl TextFrame {
    pub fn rasterize(list: &DrawList) -> Self {
        let mut frame = Self {
            stars: vec![' '; BOARD_W],
            rows: (0..NUM_ROWS as usize)
                .map(|row| vec![row_style(row).0; BOARD_W])
                .collect(),
        };

        for cmd in list.iter() {
            let text = glyph(cmd.sprite);
            let cell_x = cmd.pos.x / COL_WIDTH as f32 * CELL_W as f32;
            let x = cell_x.round() as i64 + ((CELL_W - text.len()) / 2) as i64;

            if cmd.sprite == Sprite::Star {
                blit(&mut frame.stars, x, text);
                continue;
            }

            let row = ((cmd.pos.y + Y_OFFSET as f32) / ROW_HEIGHT as f32).round() as i64;
            if let Some(line) = usize::try_from(row).ok().and_then(|r| frame.rows.get_mut(r)) {
                blit(line, x, text);
            }
        }
        frame
    }
}

/// Copy `text` into `line` at `x`, clipping at both ends
fn blit(line: &mut [char], x: i64, text: &str) {
    for (i, ch) in text.chars().enumerate() {
        let at = x + i as i64;
        if let Some(slot) = usize::try_from(at).ok().and_then(|a| line.get_mut(a)) {
            *slot = ch;
        }
    }
}

pub struct TerminalView {
    stdout: io::Stdout,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(
        &mut self,
        frame: &TextFrame,
        stars: u32,
        stats: &SessionStats,
        phase: GamePhase,
    ) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(SetForegroundColor(Color::Yellow))?;
        self.stdout.queue(Print(frame.stars.iter().collect::<String>()))?;

        for (i, row) in frame.rows.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, i as u16 + 1))?;
            self.stdout.queue(SetForegroundColor(row_style(i).1))?;
            self.stdout.queue(Print(row.iter().collect::<String>()))?;
        }

        let status = match phase {
            GamePhase::Paused => "PAUSED - p to resume".to_string(),
            GamePhase::Playing => format!(
                "Stars: {:<3} Best: {:<3} Crossings: {:<4} Caught: {:<4}",
                stars, stats.best_stars, stats.goals, stats.collisions
            ),
        };
        self.stdout.queue(cursor::MoveTo(0, NUM_ROWS as u16 + 2))?;
        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        self.stdout.queue(Print(status))?;

        self.stdout.queue(cursor::MoveTo(0, NUM_ROWS as u16 + 3))?;
        self.stdout.queue(SetForegroundColor(Color::DarkGrey))?;
        self.stdout.queue(Print("arrows / WASD: move   p: pause   q: quit"))?;

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}
