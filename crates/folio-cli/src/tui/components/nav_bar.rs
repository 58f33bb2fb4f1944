//! Navigation bar component - brand on the left, section links on the right
//!
//! Narrow terminals get a menu toggle instead of inline links; the open menu
//! drops down below the bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use folio_core::NavState;

use crate::tui::themes::Theme;

/// Gap between inline links
const LINK_GAP: u16 = 3;

/// Label of the mobile menu toggle
const MENU_CLOSED: &str = "☰ Menu";
const MENU_OPEN: &str = "✕ Close";

/// Clickable regions produced by one render
#[derive(Debug, Default)]
pub struct NavBarHits {
    pub items: Vec<Rect>,
    pub menu_button: Option<Rect>,
}

/// Width needed to show every link inline
fn inline_width(nav: &NavState) -> u16 {
    let labels: u16 = nav.items().iter().map(|i| i.label.width() as u16).sum();
    let gaps = LINK_GAP * nav.items().len().saturating_sub(1) as u16;
    labels + gaps
}

/// Render the navigation bar into `area` (one row), with the dropdown
/// (if open) drawn over `overlay`
pub fn render_nav_bar(
    f: &mut Frame,
    area: Rect,
    overlay: Rect,
    nav: &NavState,
    brand: &str,
    theme: &Theme,
) -> NavBarHits {
    let bg = if nav.is_scrolled() {
        theme.nav_scrolled_bg_color
    } else {
        theme.nav_bg_color
    };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.scrollbar_bg_color))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let brand_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            brand,
            Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(brand_line), inner);

    let brand_width = brand.width() as u16 + 2;
    let available = inner.width.saturating_sub(brand_width + 1);
    let mut hits = NavBarHits::default();

    if inline_width(nav) <= available {
        let mut x = inner.x + inner.width - 1 - inline_width(nav);
        for item in nav.items() {
            let width = item.label.width() as u16;
            let rect = Rect::new(x, inner.y, width, 1);
            f.render_widget(
                Paragraph::new(item.label.as_str()).style(Style::default().fg(theme.dim_color)),
                rect,
            );
            hits.items.push(rect);
            x += width + LINK_GAP;
        }
        return hits;
    }

    let label = if nav.is_mobile_menu_open() {
        MENU_OPEN
    } else {
        MENU_CLOSED
    };
    let width = label.width() as u16;
    let button = Rect::new(
        inner.x + inner.width.saturating_sub(width + 1),
        inner.y,
        width.min(inner.width),
        1,
    );
    f.render_widget(
        Paragraph::new(label).style(Style::default().fg(theme.accent_color)),
        button,
    );
    hits.menu_button = Some(button);

    if nav.is_mobile_menu_open() {
        let rows = (nav.items().len() as u16).min(overlay.height);
        let dropdown = Rect::new(overlay.x, overlay.y, overlay.width, rows);
        f.render_widget(Clear, dropdown);
        for (i, item) in nav.items().iter().take(rows as usize).enumerate() {
            let rect = Rect::new(dropdown.x, dropdown.y + i as u16, dropdown.width, 1);
            f.render_widget(
                Paragraph::new(format!("  {}", item.label))
                    .style(Style::default().fg(theme.text_color).bg(bg)),
                rect,
            );
            hits.items.push(rect);
        }
    }

    hits
}
