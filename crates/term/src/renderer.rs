//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are encoded into a byte buffer first and written with one syscall.
//! After the first frame only runs of changed glyphs are re-sent.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, GlyphStyle, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen; `None` forces a full redraw
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// On return `fb` holds stale contents the caller may overwrite; the
    /// renderer keeps the frame it just drew for the next diff.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if (prev.width(), prev.height()) == (fb.width(), fb.height()) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = FrameBuffer::new(fb.width(), fb.height());
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Tracks the active terminal style so unchanged styles are not re-sent.
struct StyledWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<GlyphStyle>,
}

impl<'a> StyledWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn glyphs(&mut self, glyphs: &[crate::fb::Glyph]) -> Result<()> {
        for g in glyphs {
            if self.style != Some(g.style) {
                apply_style_into(self.out, g.style)?;
                self.style = Some(g.style);
            }
            self.out.queue(Print(g.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut w = StyledWriter::new(out);
    for y in 0..fb.height() {
        w.out.queue(cursor::MoveTo(0, y))?;
        w.glyphs(fb.row(y))?;
    }
    w.finish()
}

/// Encode only the changed runs between `prev` and `next` into `out`.
///
/// A size mismatch falls back to a full redraw.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if (prev.width(), prev.height()) != (next.width(), next.height()) {
        return encode_full_into(next, out);
    }

    let mut w = StyledWriter::new(out);
    for y in 0..next.height() {
        let row = next.row(y);
        for (start, len) in changed_runs(prev.row(y), row) {
            w.out.queue(cursor::MoveTo(start as u16, y))?;
            w.glyphs(&row[start..start + len])?;
        }
    }
    w.finish()
}

/// `(start, len)` of every maximal run where the two rows differ.
fn changed_runs<'a, T: PartialEq>(
    prev: &'a [T],
    next: &'a [T],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < next.len() && prev.get(x) == next.get(x) {
            x += 1;
        }
        if x >= next.len() {
            return None;
        }
        let start = x;
        while x < next.len() && prev.get(x) != next.get(x) {
            x += 1;
        }
        Some((start, x - start))
    })
}

fn apply_style_into(out: &mut Vec<u8>, style: GlyphStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
