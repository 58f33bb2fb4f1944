//! Status bar component - bottom bar with scroll position and tracker state

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use folio_core::hero::{SignalSource, TrackerState};
use folio_core::ScrollProgress;

use crate::tui::themes::Theme;

/// Everything the status bar shows
#[derive(Debug, Clone)]
pub struct StatusInfo<'a> {
    pub scroll_y: f64,
    pub progress: ScrollProgress,
    pub active: usize,
    pub line_count: usize,
    pub source: Option<SignalSource>,
    pub state: TrackerState,
    pub message: Option<&'a str>,
}

fn source_label(source: Option<SignalSource>) -> &'static str {
    match source {
        Some(SignalSource::Visibility) => "visible",
        Some(SignalSource::ScrollPosition) => "scroll",
        Some(SignalSource::TopGuard) => "top",
        None => "-",
    }
}

fn state_label(state: TrackerState) -> &'static str {
    match state {
        TrackerState::Unmounted => "unmounted",
        TrackerState::Detached => "detached",
        TrackerState::Disabled => "reduced motion",
        TrackerState::Observing => "tracking",
        TrackerState::Stopped => "stopped",
    }
}

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(f: &mut Frame, area: Rect, theme: &Theme, info: &StatusInfo) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let dim = Style::default().fg(theme.dim_color);
    let left_spans = vec![
        Span::raw(" "),
        Span::styled(
            format!("line {}/{}", info.active + 1, info.line_count),
            Style::default().fg(theme.accent_color),
        ),
        Span::styled(" │ ", dim),
        Span::styled(source_label(info.source), dim),
        Span::styled(" │ ", dim),
        Span::styled(state_label(info.state), dim),
    ];
    let left_width: u16 = left_spans.iter().map(|s| s.content.width() as u16).sum();

    // Fixed width so the bar doesn't jitter while scrolling
    let right_text = format!(
        "{:>7.0}px {:>3.0}% ",
        info.scroll_y,
        info.progress.percent()
    );
    let right_width = right_text.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(left_width),
            Constraint::Min(0),
            Constraint::Length(right_width),
        ])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

    if let Some(message) = info.message {
        f.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(theme.text_color))
                .alignment(Alignment::Center),
            chunks[1],
        );
    }

    f.render_widget(
        Paragraph::new(Span::styled(right_text, dim)).alignment(Alignment::Right),
        chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_status_bar_shows_line_and_state() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::light();
        let info = StatusInfo {
            scroll_y: 946.0,
            progress: ScrollProgress::from_percent(30.0),
            active: 2,
            line_count: 4,
            source: Some(SignalSource::Visibility),
            state: TrackerState::Observing,
            message: None,
        };
        terminal
            .draw(|f| render_status_bar(f, f.area(), &theme, &info))
            .unwrap();

        let row: String = (0..80u16)
            .map(|x| terminal.backend().buffer()[(x, 0u16)].symbol().to_string())
            .collect();
        assert!(row.contains("line 3/4"));
        assert!(row.contains("visible"));
        assert!(row.contains("tracking"));
        assert!(row.contains("946px"));
    }
}
