//! Renderer - Page canvas and cursor overlay
//!
//! The page is painted once into the terminal from a [`Canvas`]. The cursor
//! is an overlay on top of it: on every frame the cell it covered last time
//! is restored from the canvas, then the indicator glyph is drawn at the new
//! position. Only those two cells are written per frame.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::config::GlyphConfig;
use crate::indicator::Indicator;
use crate::types::{Point, Rgba, Viewport};

// =============================================================================
// Canvas
// =============================================================================

/// A single painted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasCell {
    pub char: char,
    pub fg: Rgba,
}

impl Default for CanvasCell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgba::WHITE,
        }
    }
}

/// Character grid the page is painted into.
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<CanvasCell>,
}

impl Canvas {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            cells: vec![CanvasCell::default(); viewport.width as usize * viewport.height as usize],
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Resize, clearing all contents.
    pub fn resize(&mut self, viewport: Viewport) {
        self.width = viewport.width;
        self.height = viewport.height;
        self.cells.clear();
        self.cells
            .resize(viewport.width as usize * viewport.height as usize, CanvasCell::default());
    }

    pub fn clear(&mut self) {
        self.cells.fill(CanvasCell::default());
    }

    pub fn get(&self, x: u16, y: u16) -> Option<CanvasCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Write text starting at (x, y), clipped at the right edge.
    /// Returns the number of cells written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgba) -> u16 {
        if y >= self.height {
            return 0;
        }
        let row = y as usize * self.width as usize;
        let mut written = 0;
        for (cx, ch) in (x..self.width).zip(text.chars()) {
            self.cells[row + cx as usize] = CanvasCell { char: ch, fg };
            written += 1;
        }
        written
    }
}

fn to_color(rgba: Rgba) -> Color {
    Color::Rgb {
        r: rgba.r,
        g: rgba.g,
        b: rgba.b,
    }
}

/// Paint the whole canvas.
pub fn paint_canvas<W: Write>(out: &mut W, canvas: &Canvas) -> io::Result<()> {
    let mut current: Option<Rgba> = None;

    for y in 0..canvas.height {
        queue!(out, MoveTo(0, y))?;
        for x in 0..canvas.width {
            let Some(cell) = canvas.get(x, y) else { continue };
            if current != Some(cell.fg) {
                queue!(out, SetForegroundColor(to_color(cell.fg)))?;
                current = Some(cell.fg);
            }
            queue!(out, Print(cell.char))?;
        }
    }

    queue!(out, ResetColor)?;
    out.flush()
}

// =============================================================================
// Overlay Renderer
// =============================================================================

/// Draws the cursor indicator over a painted canvas.
#[derive(Default)]
pub struct OverlayRenderer {
    /// Cell currently covered by the indicator.
    covered: Option<Point>,
}

impl OverlayRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell the indicator currently covers, if drawn.
    pub fn covered(&self) -> Option<Point> {
        self.covered
    }

    /// Forget the covered cell, after the canvas was repainted underneath.
    pub fn forget(&mut self) {
        self.covered = None;
    }

    /// Restore the previously covered cell, then draw `indicator` if any.
    pub fn render<W: Write>(
        &mut self,
        out: &mut W,
        canvas: &Canvas,
        indicator: Option<&Indicator>,
        glyphs: &GlyphConfig,
    ) -> io::Result<()> {
        if let Some(prev) = self.covered.take() {
            if let Some(cell) = canvas.get(prev.x, prev.y) {
                queue!(
                    out,
                    MoveTo(prev.x, prev.y),
                    SetForegroundColor(to_color(cell.fg)),
                    Print(cell.char)
                )?;
            }
        }

        if let Some(indicator) = indicator {
            let position = indicator.position;
            queue!(
                out,
                MoveTo(position.x, position.y),
                SetForegroundColor(to_color(indicator.color())),
                Print(indicator.glyph(glyphs))
            )?;
            self.covered = Some(position);
        }

        queue!(out, ResetColor)?;
        out.flush()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CursorConfig;
    use crate::types::InteractionState;

    fn output(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn test_canvas_put_str_clips() {
        let mut canvas = Canvas::new(Viewport::new(5, 2));

        assert_eq!(canvas.put_str(2, 0, "Hello", Rgba::WHITE), 3);
        assert_eq!(canvas.get(2, 0).map(|c| c.char), Some('H'));
        assert_eq!(canvas.get(4, 0).map(|c| c.char), Some('l'));
        assert_eq!(canvas.get(5, 0), None);

        assert_eq!(canvas.put_str(0, 5, "off", Rgba::WHITE), 0);
    }

    #[test]
    fn test_canvas_resize_clears() {
        let mut canvas = Canvas::new(Viewport::new(5, 2));
        canvas.put_str(0, 0, "abc", Rgba::GRAY);

        canvas.resize(Viewport::new(10, 3));
        assert_eq!(canvas.viewport(), Viewport::new(10, 3));
        assert_eq!(canvas.get(0, 0), Some(CanvasCell::default()));
        assert_eq!(canvas.get(9, 2), Some(CanvasCell::default()));
    }

    #[test]
    fn test_paint_canvas_writes_rows() {
        let mut canvas = Canvas::new(Viewport::new(4, 2));
        canvas.put_str(0, 1, "Hi", Rgba::INDIGO);

        let mut out = Vec::new();
        paint_canvas(&mut out, &canvas).unwrap();
        let text = output(&out);

        assert!(text.contains("\x1b[1;1H"));
        assert!(text.contains("\x1b[2;1H"));
        assert!(text.contains("\x1b[38;2;79;70;229mHi"));
    }

    #[test]
    fn test_overlay_draws_and_restores() {
        let mut canvas = Canvas::new(Viewport::new(20, 5));
        canvas.put_str(0, 2, "Contact", Rgba::GRAY);
        let config = CursorConfig::default();
        let mut overlay = OverlayRenderer::new();

        // Draw at (3, 2)
        let first = Indicator::derive(Point::new(3, 2), InteractionState::empty(), &config);
        let mut out = Vec::new();
        overlay.render(&mut out, &canvas, first.as_ref(), &config.glyphs).unwrap();
        let text = output(&out);
        assert!(text.contains("\x1b[3;4H"));
        assert!(text.contains('○'));
        assert_eq!(overlay.covered(), Some(Point::new(3, 2)));

        // Moving restores the 't' of "Contact" underneath
        let second = Indicator::derive(Point::new(10, 4), InteractionState::empty(), &config);
        let mut out = Vec::new();
        overlay.render(&mut out, &canvas, second.as_ref(), &config.glyphs).unwrap();
        let text = output(&out);
        assert!(text.contains("\x1b[3;4H"));
        assert!(text.contains('t'));
        assert!(text.contains("\x1b[5;11H"));
        assert_eq!(overlay.covered(), Some(Point::new(10, 4)));
    }

    #[test]
    fn test_overlay_hidden_only_restores() {
        let canvas = Canvas::new(Viewport::new(20, 5));
        let config = CursorConfig::default();
        let mut overlay = OverlayRenderer::new();

        let shown = Indicator::derive(Point::new(1, 1), InteractionState::empty(), &config);
        overlay.render(&mut Vec::new(), &canvas, shown.as_ref(), &config.glyphs).unwrap();

        let mut out = Vec::new();
        overlay.render(&mut out, &canvas, None, &config.glyphs).unwrap();
        let text = output(&out);
        assert!(text.contains("\x1b[2;2H"));
        assert!(!text.contains('○'));
        assert_eq!(overlay.covered(), None);
    }

    #[test]
    fn test_overlay_forget_skips_restore() {
        let canvas = Canvas::new(Viewport::new(20, 5));
        let config = CursorConfig::default();
        let mut overlay = OverlayRenderer::new();

        let shown = Indicator::derive(Point::new(1, 1), InteractionState::empty(), &config);
        overlay.render(&mut Vec::new(), &canvas, shown.as_ref(), &config.glyphs).unwrap();
        overlay.forget();

        let mut out = Vec::new();
        overlay.render(&mut out, &canvas, None, &config.glyphs).unwrap();
        assert!(!output(&out).contains("\x1b[2;2H"));
    }
}
