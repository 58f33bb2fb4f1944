//! Frame composition
//!
//! Top to bottom: progress bar, navigation bar, page body with scrollbar,
//! status bar. The hero panel sticks to the top of the body while the page
//! scrolls through its container, then scrolls away with it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use folio_core::hero::emoji::{segment, Segment};
use folio_core::{HeroEnvironment, ScrollProgress, TrackerState};

use crate::tui::app::App;
use crate::tui::components::{
    render_nav_bar, render_page_scrollbar, render_progress_bar, render_status_bar, StatusInfo,
};

/// Columns kept free on each side of the hero text
const HERO_MARGIN: u16 = 4;

/// Vertical placement of the hero panel inside the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PanelPlacement {
    /// Visible part of the panel
    area: Rect,
    /// Panel rows hidden above the body
    skip: u16,
}

/// Place a panel of `body.height` rows whose top sits `offset_rows` below
/// the body top (negative once it scrolls away)
fn place_panel(body: Rect, offset_rows: i64) -> Option<PanelPlacement> {
    let start = body.y as i64 + offset_rows;
    let top = start.max(body.y as i64);
    let bottom = (start + body.height as i64).min(body.bottom() as i64);
    if bottom <= top {
        return None;
    }
    Some(PanelPlacement {
        area: Rect::new(body.x, top as u16, body.width, (bottom - top) as u16),
        skip: (top - start) as u16,
    })
}

/// Rows `text` needs when wrapped to `width` columns
fn wrapped_rows(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let rows = text.width().div_ceil(width as usize).max(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

impl App {
    /// Render the whole frame
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        f.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg_color)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(chunks[2]);
        let body = body_chunks[0];

        let snapshot = self.page.snapshot();
        let document_height = self.page.document_height();
        let progress = ScrollProgress::from_snapshot(&snapshot, document_height);

        render_progress_bar(f.buffer_mut(), chunks[0], progress, &self.theme);

        self.render_hero(f, body);
        self.render_sections(f, body);

        render_page_scrollbar(
            f,
            body_chunks[1],
            snapshot.scroll_y,
            document_height,
            snapshot.viewport_height,
            &self.theme,
        );
        self.layout.scrollbar_area = Some(body_chunks[1]);

        // Nav bar last so the mobile dropdown covers the body
        let hits = render_nav_bar(f, chunks[1], body, &self.nav, &self.brand, &self.theme);
        self.layout.nav_item_areas = hits.items;
        self.layout.menu_button_area = hits.menu_button;

        let info = StatusInfo {
            scroll_y: snapshot.scroll_y,
            progress,
            active: self.tracker.active_index(),
            line_count: self.tracker.line_count(),
            source: self.tracker.last_decision().map(|d| d.source),
            state: self.tracker.state(),
            message: self.status_message.as_deref(),
        };
        render_status_bar(f, chunks[3], &self.theme, &info);
    }

    /// Styled hero text, the emphasized line in full color
    fn hero_lines(&self) -> Vec<Line<'_>> {
        let active = self.emphasis.active();
        // Without motion the emphasis is shown in full straight away
        let instant = self.tracker.state() == TrackerState::Disabled;
        let theme = &self.theme;

        let mut out = Vec::with_capacity(self.lines.len() * 2);
        for line in &self.lines {
            if !out.is_empty() {
                out.push(Line::default());
            }
            let is_active = line.index == active;
            let base = if is_active {
                Style::default()
                    .fg(theme.text_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dim_color)
            };

            let spans: Vec<Span> = segment(&line.content)
                .into_iter()
                .map(|seg| {
                    let emphasized = matches!(seg, Segment::Emoji { .. })
                        && is_active
                        && (instant || self.emphasis.has_started(seg.emphasis_delay()));
                    if emphasized {
                        Span::styled(seg.as_str(), base.fg(theme.emoji_color))
                    } else {
                        Span::styled(seg.as_str(), base)
                    }
                })
                .collect();
            out.push(Line::from(spans));
        }
        out
    }

    /// Render the sticky hero panel
    fn render_hero(&self, f: &mut Frame, body: Rect) {
        let container = self.page.container_geometry();
        let scroll_y = self.page.scroll_y();
        let vh = self.page.viewport_height();

        // Sticky: pinned at the body top while the container spans the viewport
        let offset_px = (container.top - scroll_y)
            .max(0.0)
            .min(container.top + container.height - scroll_y - vh);
        let Some(placement) = place_panel(body, self.scale.px_to_rows(offset_px)) else {
            return;
        };

        let inner_width = body.width.saturating_sub(HERO_MARGIN * 2);
        let gaps = u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        let text_rows = self
            .lines
            .iter()
            .map(|l| wrapped_rows(&l.content, inner_width))
            .fold(gaps, u16::saturating_add);
        let pad = body.height.saturating_sub(text_rows) / 2;

        let mut lines = vec![Line::default(); pad as usize];
        lines.extend(self.hero_lines());

        let text_area = Rect::new(
            placement.area.x + HERO_MARGIN.min(placement.area.width / 2),
            placement.area.y,
            inner_width,
            placement.area.height,
        );
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center)
                .scroll((placement.skip, 0)),
            text_area,
        );
    }

    /// Section headings below the hero
    fn render_sections(&self, f: &mut Frame, body: Rect) {
        let scroll_y = self.page.scroll_y();
        let heading = Style::default()
            .fg(self.theme.accent_color)
            .add_modifier(Modifier::BOLD);

        for section in self.sections() {
            let row = self.scale.px_to_rows(section.top - scroll_y);
            if row < 0 || row >= body.height as i64 {
                continue;
            }
            let rect = Rect::new(body.x, body.y + row as u16, body.width, 1);
            f.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("  ■ ", heading),
                    Span::styled(section.label, heading),
                ])),
                rect,
            );
        }
    }
}
