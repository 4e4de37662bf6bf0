//! GameView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layers, bottom to top: picture or empty grid, locked cells, ghost piece,
//! active piece. The side panel and overlays are drawn last.

use crate::core::{Mask, SessionSnapshot};
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};

/// Covered picture cells
pub const COVER_RGB: Rgb = Rgb::new(64, 64, 64);
/// Landing preview of the active piece
pub const GHOST_RGB: Rgb = Rgb::new(100, 100, 100);

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_FG: Rgb = Rgb::new(90, 90, 100);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);

const CONTROLS: [(&str, &str); 6] = [
    ("←→", "move"),
    ("↓", "soft drop"),
    ("↑", "rotate"),
    ("SPC", "hard drop"),
    ("P", "picture"),
    ("R", "restart"),
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Color of the stand-in picture at board cell `(x, y)`.
///
/// Image decoding lives outside the engine; the host shows this diagonal
/// gradient wherever the picture has been uncovered.
pub fn placeholder_rgb(x: u16, y: u16, width: u16, height: u16) -> Rgb {
    let fx = (x as u32 * 255) / width.saturating_sub(1).max(1) as u32;
    let fy = (y as u32 * 255) / height.saturating_sub(1).max(1) as u32;
    Rgb::new(
        (40 + fx * 180 / 255) as u8,
        (200 - fy * 140 / 255) as u8,
        (120 + (fx + fy) * 100 / 510) as u8,
    )
}

/// Board-to-terminal layout for one frame
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Top-left corner of the border
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for a session.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_status(snap, None, viewport, fb);
    }

    /// Like [`GameView::render_into`] with a short status message in the
    /// side panel (e.g. a line-clear flash).
    pub fn render_into_with_status(
        &self,
        snap: &SessionSnapshot,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(GlyphStyle::default().glyph(' '));

        let frame = self.frame(snap, viewport);
        self.draw_border(fb, frame);
        self.draw_playfield(fb, frame, snap);

        if let (Some(piece), Some(ghost_y)) = (snap.current, snap.ghost_y) {
            let style = GlyphStyle::new(GHOST_RGB, PLAYFIELD_BG).dim();
            self.draw_mask(fb, frame, snap, &piece.mask, piece.x, ghost_y, '░', style);
        }
        if let Some(piece) = snap.current {
            let style = GlyphStyle::new(piece.color.rgb(), PLAYFIELD_BG).bold();
            self.draw_mask(fb, frame, snap, &piece.mask, piece.x, piece.y, '█', style);
        }

        self.draw_side_panel(fb, frame, snap, status, viewport);

        if snap.game_over() {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, snap: &SessionSnapshot, viewport: Viewport) -> Frame {
        let w = snap.width as u16 * self.cell_w + 2;
        let h = snap.height as u16 * self.cell_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        // Leave room for the panel on the right when the terminal is wide.
        let x = viewport.width.saturating_sub(w + 24) / 2;
        Frame { x, y, w, h }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = GlyphStyle::new(Rgb::new(200, 200, 200), PLAYFIELD_BG);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_playfield(&self, fb: &mut FrameBuffer, frame: Frame, snap: &SessionSnapshot) {
        let (w, h) = (snap.width as u16, snap.height as u16);
        for y in 0..h {
            for x in 0..w {
                let (ch, style) = match snap.cell(x as usize, y as usize) {
                    Some(color) => ('█', GlyphStyle::new(color.rgb(), PLAYFIELD_BG).bold()),
                    None if snap.image.is_none() => {
                        ('·', GlyphStyle::new(GRID_FG, PLAYFIELD_BG).dim())
                    }
                    None if snap.is_covered(x as usize, y as usize) => {
                        (' ', GlyphStyle::new(COVER_RGB, COVER_RGB))
                    }
                    None => {
                        let rgb = placeholder_rgb(x, y, w, h);
                        (' ', GlyphStyle::new(rgb, rgb))
                    }
                };
                self.fill_cell(fb, frame, x, y, ch, style);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_mask(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        snap: &SessionSnapshot,
        mask: &Mask,
        anchor_x: i8,
        anchor_y: i8,
        ch: char,
        style: GlyphStyle,
    ) {
        for (r, c) in mask.cells() {
            let x = anchor_x as i16 + c as i16;
            let y = anchor_y as i16 + r as i16;
            if x >= 0 && x < snap.width as i16 && y >= 0 && y < snap.height as i16 {
                self.fill_cell(fb, frame, x as u16, y as u16, ch, style);
            }
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: GlyphStyle) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        snap: &SessionSnapshot,
        status: Option<&str>,
        viewport: Viewport,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = GlyphStyle::new(TEXT_FG, PLAYFIELD_BG).bold();
        let value = GlyphStyle::new(Rgb::new(200, 200, 200), PLAYFIELD_BG);
        let hint = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if let Some(next) = snap.next {
            let style = GlyphStyle::new(next.color.rgb(), PLAYFIELD_BG).bold();
            for (r, c) in next.mask.cells() {
                let px = panel_x + c as u16 * self.cell_w;
                fb.fill_rect(px, y + r as u16, self.cell_w, 1, '█', style);
            }
        }
        y += 5;

        fb.put_str(panel_x, y, "PICTURE", label);
        y += 1;
        if snap.image.is_some() {
            let revealed = snap.covered.iter().filter(|&&c| !c).count() as u32;
            fb.put_u32(panel_x, y, revealed, value);
            let mut x = panel_x + digit_count(revealed);
            fb.put_char(x, y, '/', value);
            x += 1;
            fb.put_u32(x, y, snap.covered.len() as u32, value);
        } else {
            fb.put_str(panel_x, y, "none", hint);
        }
        y += 2;

        if let Some(text) = status {
            fb.put_str(panel_x, y, text, label);
        }
        y += 2;

        for (key, action) in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, key, value);
            fb.put_str(panel_x + 4, y, action, hint);
            y += 1;
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = GlyphStyle::new(Rgb::new(255, 255, 255), PLAYFIELD_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
