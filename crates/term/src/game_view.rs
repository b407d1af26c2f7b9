//! GameView: draws the playfield, HUD and banners into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, Pos, ScoreTier};

pub const AVATAR_GLYPH: char = '◆';
pub const DANGER_GLYPH: char = '±';
pub const PERSON_GLYPH: char = '█';

/// Length of the rules above and below a banner
const BANNER_RULE_LEN: u16 = 38;

/// Styles for every element the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub border: CellStyle,
    pub avatar: CellStyle,
    pub danger: CellStyle,
    pub person: CellStyle,
    pub hud: CellStyle,
    pub title: CellStyle,
    pub prompt: CellStyle,
    pub alert_border: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        let text = CellStyle::default();
        Self {
            border: text,
            avatar: text.bold(),
            danger: CellStyle::fg(Rgb::new(220, 60, 60)),
            person: CellStyle::fg(Rgb::new(80, 220, 220)),
            hud: text,
            title: CellStyle::fg(Rgb::new(255, 255, 255)).bold(),
            prompt: CellStyle::fg(Rgb::new(255, 255, 255)).inverted(),
            alert_border: CellStyle {
                blink: true,
                ..CellStyle::fg(Rgb::new(0, 0, 0)).bold()
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameView {
    palette: Palette,
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Draw a complete playfield frame from a snapshot.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.resize(snap.dims.width, snap.dims.height);
        fb.clear();
        self.draw_border(fb);
        self.draw_avatar(fb, snap.avatar, snap.direction);
        self.draw_danger_zones(fb, &snap.danger_zones);
        self.draw_rescue_targets(fb, &snap.rescue_targets);
        self.draw_hud(fb, snap.lives, snap.score, snap.level);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(snap.dims.width, snap.dims.height);
        self.render_into(snap, &mut fb);
        fb
    }

    pub fn draw_border(&self, fb: &mut FrameBuffer) {
        self.draw_box(fb, self.palette.border);
    }

    /// Border drawn in the alert style (black, blinking)
    pub fn draw_alert_border(&self, fb: &mut FrameBuffer) {
        self.draw_box(fb, self.palette.alert_border);
    }

    fn draw_box(&self, fb: &mut FrameBuffer, style: CellStyle) {
        let (w, h) = (fb.width(), fb.height());
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(0, 0, '┌', style);
        fb.put_char(w - 1, 0, '┐', style);
        fb.put_char(0, h - 1, '└', style);
        fb.put_char(w - 1, h - 1, '┘', style);

        for x in 1..w - 1 {
            fb.put_char(x, 0, '─', style);
            fb.put_char(x, h - 1, '─', style);
        }
        for y in 1..h - 1 {
            fb.put_char(0, y, '│', style);
            fb.put_char(w - 1, y, '│', style);
        }
    }

    /// Diamond on the avatar cell, arrow on the cell it faces.
    pub fn draw_avatar(&self, fb: &mut FrameBuffer, pos: Pos, direction: Direction) {
        let style = self.palette.avatar;
        if let Some((x, y)) = screen_xy(pos) {
            fb.put_char(x, y, AVATAR_GLYPH, style);
        }
        if let Some((x, y)) = screen_xy(pos.step(direction)) {
            fb.put_char(x, y, arrow(direction), style);
        }
    }

    pub fn draw_danger_zones(&self, fb: &mut FrameBuffer, cells: &[Pos]) {
        self.draw_cells(fb, cells, DANGER_GLYPH, self.palette.danger);
    }

    pub fn draw_rescue_targets(&self, fb: &mut FrameBuffer, cells: &[Pos]) {
        self.draw_cells(fb, cells, PERSON_GLYPH, self.palette.person);
    }

    fn draw_cells(&self, fb: &mut FrameBuffer, cells: &[Pos], ch: char, style: CellStyle) {
        for &pos in cells {
            if let Some((x, y)) = screen_xy(pos) {
                fb.put_char(x, y, ch, style);
            }
        }
    }

    /// Status line two rows above the bottom edge.
    pub fn draw_hud(&self, fb: &mut FrameBuffer, lives: u32, score: u32, level: u32) {
        let style = self.palette.hud;
        let (w, h) = (fb.width(), fb.height());
        let y = h.saturating_sub(2);
        let mid = w / 2;

        let end = fb.put_str(2, y, "Score: ", style);
        let score_end = fb.put_u32(end, y, score, style);

        // Narrow terminals would put Level on top of Score.
        let level_x = mid.saturating_sub(35).max(score_end.saturating_add(2));
        let end = fb.put_str(level_x, y, "Level: ", style);
        fb.put_u32(end, y, level, style);

        let end = fb.put_str(mid, y, "Lives: ", style);
        fb.put_u32(end, y, lives, style);

        fb.put_str(w.saturating_sub(17), y, "Press q to quit", style);
    }

    pub fn draw_start_banner(&self, fb: &mut FrameBuffer) {
        let p = &self.palette;
        let text = CellStyle::default();
        let (left, cy) = self.banner_origin(fb);
        let x = left + 2;

        self.banner_rules(fb);
        fb.put_str(x, cy.saturating_sub(3), "ROBO-RESCUE", p.title);

        let end = fb.put_str(x, cy.saturating_sub(1), "Your mission is to rescue people", text);
        fb.put_char(end.saturating_add(2), cy.saturating_sub(1), PERSON_GLYPH, p.person);
        let end = fb.put_str(x, cy, "Beware of danger zones", text);
        fb.put_char(end.saturating_add(2), cy, DANGER_GLYPH, p.danger);
        fb.put_str(x, cy + 1, "Good luck soldier", text);

        fb.put_str(x, cy + 3, "Press any key to start", p.prompt);
    }

    pub fn draw_game_over_banner(
        &self,
        fb: &mut FrameBuffer,
        score: u32,
        tier: ScoreTier,
        seconds_left: u32,
    ) {
        let p = &self.palette;
        let text = CellStyle::default();
        let (left, cy) = self.banner_origin(fb);
        let x = left + 2;

        self.banner_rules(fb);
        fb.put_str(x, cy.saturating_sub(3), "GAME OVER!", p.title);

        let end = fb.put_str(x, cy.saturating_sub(1), "Score: ", text);
        fb.put_u32(end, cy.saturating_sub(1), score, text);
        fb.put_str(x, cy, tier.message(), text);

        let end = fb.put_str(x, cy + 3, "Automatically exiting in ", p.prompt);
        let end = fb.put_u32(end, cy + 3, seconds_left, p.prompt);
        fb.put_str(end, cy + 3, " second(s)", p.prompt);
    }

    /// Left edge of the banner rules and the centre row
    fn banner_origin(&self, fb: &FrameBuffer) -> (u16, u16) {
        ((fb.width() / 2).saturating_sub(17), fb.height() / 2)
    }

    fn banner_rules(&self, fb: &mut FrameBuffer) {
        let (left, cy) = self.banner_origin(fb);
        fb.hline(left, cy.saturating_sub(5), BANNER_RULE_LEN, self.palette.border);
        fb.hline(left, cy + 5, BANNER_RULE_LEN, self.palette.border);
    }
}

fn arrow(direction: Direction) -> char {
    match direction {
        Direction::Left => '←',
        Direction::Right => '→',
        Direction::Up => '↑',
        Direction::Down => '↓',
    }
}

/// Grid cell to framebuffer coordinates; negative cells are off screen.
fn screen_xy(pos: Pos) -> Option<(u16, u16)> {
    let x = u16::try_from(pos.x).ok()?;
    let y = u16::try_from(pos.y).ok()?;
    Some((x, y))
}
