//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PreviewSnapshot, Shape};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{ColorToken, GamePhase};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Rows reserved for a next/hold preview
const PREVIEW_ROWS: u16 = 4;

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

/// Top-left corner of the well frame and its size, in terminal cells
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Lays out the well, the side panel and phase overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
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

    /// Size of the bordered well for a `cols x rows` board
    pub fn frame_size(&self, cols: u8, rows: u8) -> (u16, u16) {
        (
            (cols as u16).saturating_mul(self.cell_w).saturating_add(2),
            (rows as u16).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Reusing one framebuffer across frames keeps the hot path free of
    /// allocations.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let (w, h) = self.frame_size(snap.cols, snap.rows);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        self.draw_well(fb, snap, frame);
        self.draw_pieces(fb, snap, frame);
        self.draw_side_panel(fb, snap, viewport, frame);

        let overlay = match snap.phase {
            GamePhase::Idle => Some("PRESS ENTER"),
            GamePhase::Paused => Some("PAUSED"),
            GamePhase::GameOver => Some("GAME OVER"),
            GamePhase::Running => None,
        };
        if let Some(text) = overlay {
            draw_overlay_text(fb, frame, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let empty = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', empty);
        draw_border(fb, frame, Style::new(Rgb::new(200, 200, 200), PANEL_BG));

        for y in 0..snap.rows as usize {
            for x in 0..snap.cols as usize {
                match snap.cell(x, y) {
                    Some(block) => self.draw_block(fb, frame, x as i16, y as i16, block.color),
                    None => self.fill_cell(fb, frame, x as i16, y as i16, '·', empty),
                }
            }
        }
    }

    fn draw_pieces(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let Some(active) = snap.active else {
            return;
        };

        if let Some(ghost_y) = snap.ghost_y.filter(|&gy| gy > active.y) {
            let ghost = Style::new(Rgb::from(active.color).scaled(60), WELL_BG).dim();
            for (dx, dy) in active.shape.cells() {
                self.fill_cell(fb, frame, active.x + dx, ghost_y + dy, '░', ghost);
            }
        }

        for (dx, dy) in active.shape.cells() {
            self.draw_block(fb, frame, active.x + dx, active.y + dy, active.color);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: i16, y: i16, color: ColorToken) {
        let style = Style::new(Rgb::from(color), WELL_BG).bold();
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    /// Fill one board cell; cells outside the board (hidden rows) are skipped.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: i16,
        y: i16,
        ch: char,
        style: Style,
    ) {
        let cols = (frame.w - 2) / self.cell_w;
        let rows = (frame.h - 2) / self.cell_h;
        if x < 0 || y < 0 || x as u16 >= cols || y as u16 >= rows {
            return;
        }
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < 12 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, snap.next, false);
        y += PREVIEW_ROWS + 2;

        fb.put_str(panel_x, y, "HOLD", label);
        self.draw_preview(fb, panel_x, y + 1, snap.held, !snap.can_hold);
    }

    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        preview: Option<PreviewSnapshot>,
        dimmed: bool,
    ) {
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        let Some(preview) = preview else {
            fb.put_str(x, y, "-", value);
            return;
        };

        let mut style = Style::new(Rgb::from(preview.color), PANEL_BG).bold();
        if dimmed {
            style = Style::new(Rgb::from(preview.color).scaled(50), PANEL_BG).dim();
        }
        draw_shape(fb, x, y, &preview.shape, self.cell_w, style);
    }
}

fn draw_shape(fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, cell_w: u16, style: Style) {
    for (dx, dy) in shape.cells() {
        if dy as u16 >= PREVIEW_ROWS {
            continue;
        }
        let px = x.saturating_add(dx as u16 * cell_w);
        fb.fill_rect(px, y + dy as u16, cell_w, 1, '█', style);
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: Style) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(right, y + dy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let y = frame.y.saturating_add(frame.h / 2);
    let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, y, text, style);
}
