//! Scrollbar rendering
//!
//! 1-char wide, filled track with a solid thumb: ░ (track) and █ (thumb).

use ratatui::{buffer::Buffer, layout::Rect, style::Color, Frame};

use crate::tui::themes::Theme;

/// Render a scrollbar for content of `total` units of which `visible` show
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: f64,
    total: f64,
    visible: f64,
    thumb_color: Color,
    track_color: Color,
) {
    // Clear first so no stale glyphs remain when the scrollbar disappears
    for y in 0..area.height {
        if let Some(cell) = buf.cell_mut((area.x, area.y + y)) {
            cell.set_char(' ');
            cell.set_fg(Color::Reset);
        }
    }

    if total <= visible || area.height == 0 {
        return;
    }

    let height = area.height as usize;
    let (thumb_pos, thumb_size) = thumb_geometry(height, offset, total, visible);

    for y in 0..height {
        let is_thumb = y >= thumb_pos && y < thumb_pos + thumb_size;
        let (ch, color) = if is_thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + y as u16)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

/// Thumb start row and size (minimum 2 rows) within a track of `height` rows
fn thumb_geometry(height: usize, offset: f64, total: f64, visible: f64) -> (usize, usize) {
    let thumb_size = ((visible / total) * height as f64)
        .max(2.0)
        .min(height as f64)
        .round() as usize;

    let max_offset = total - visible;
    let thumb_pos = if max_offset > 0.0 {
        ((offset / max_offset).clamp(0.0, 1.0) * height.saturating_sub(thumb_size) as f64)
            .round() as usize
    } else {
        0
    };
    (thumb_pos, thumb_size)
}

/// Render the page scrollbar along the right edge
pub fn render_page_scrollbar(
    f: &mut Frame,
    area: Rect,
    scroll_y: f64,
    document_height: f64,
    viewport_height: f64,
    theme: &Theme,
) {
    render_scrollbar(
        f.buffer_mut(),
        area,
        scroll_y,
        document_height,
        viewport_height,
        theme.accent_color,
        theme.scrollbar_bg_color,
    );
}
