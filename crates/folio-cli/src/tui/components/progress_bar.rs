//! Scroll progress bar along the top edge

use ratatui::{buffer::Buffer, layout::Rect};

use folio_core::ScrollProgress;

use crate::tui::themes::Theme;

/// Render a one-row bar filled to the page's scroll progress
pub fn render_progress_bar(buf: &mut Buffer, area: Rect, progress: ScrollProgress, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let filled = progress.filled(area.width);
    for x in 0..area.width {
        if let Some(cell) = buf.cell_mut((area.x + x, area.y)) {
            let color = if x < filled {
                theme.progress_color
            } else {
                theme.progress_track_color
            };
            cell.set_char('▀').set_fg(color).set_bg(theme.bg_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::hero::EnvironmentSnapshot;

    #[test]
    fn test_fill_matches_progress() {
        let theme = Theme::light();
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        let snapshot = EnvironmentSnapshot {
            scroll_y: 500.0,
            viewport_height: 1000.0,
        };
        let progress = ScrollProgress::from_snapshot(&snapshot, 2000.0);

        render_progress_bar(&mut buf, area, progress, &theme);

        let filled = (0..10)
            .filter(|x| buf[(*x, 0)].fg == theme.progress_color)
            .count();
        assert_eq!(filled, 5);
    }
}
