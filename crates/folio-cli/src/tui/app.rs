//! Application state and main event loop

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use folio_core::hero::emoji::emphasis_settle_time;
use folio_core::hero::PageEvents;
use folio_core::nav::NavTarget;
use folio_core::{ActiveLineTracker, HeroConfig, HeroLines, NavState, SimulatedPage};

use crate::tui::state::{
    anchor_offset, layout_sections, EmphasisState, LayoutState, PixelScale, Section,
};
use crate::tui::themes::{Theme, ThemeMode, COLORFGBG_ENV};
use crate::tui::restore_terminal;

/// Rows taken by the progress bar, navigation bar and status bar
pub const CHROME_ROWS: u16 = 4;

/// Redraw interval while emoji emphasis may still be starting
const TICK: Duration = Duration::from_millis(50);

/// Palette choice: the command line wins over the config file
fn theme_mode(cli: Option<ThemeMode>, config: Option<&str>) -> ThemeMode {
    cli.or_else(|| {
        config.and_then(|name| {
            let mode = ThemeMode::from_name(name);
            if mode.is_none() {
                tracing::warn!(theme = name, "Unknown theme; following the terminal");
            }
            mode
        })
    })
    .unwrap_or_default()
}

/// Main application state
pub struct App {
    pub lines: HeroLines,
    pub brand: String,
    pub page: SimulatedPage,
    pub tracker: ActiveLineTracker,
    pub nav: NavState,
    pub theme: Theme,
    pub emphasis: EmphasisState,
    pub layout: LayoutState,
    pub scale: PixelScale,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    /// Build the app from configuration. The page viewport is sized once the
    /// terminal is known.
    pub fn new(
        config: &HeroConfig,
        reduced_motion: bool,
        theme_override: Option<ThemeMode>,
    ) -> Result<Self> {
        let lines = config.hero_lines()?;
        let page = SimulatedPage::new(lines.len(), 0.0, config.page_layout())
            .with_reduced_motion(reduced_motion);
        let tracker = ActiveLineTracker::new(&lines);
        let emphasis = EmphasisState::new(tracker.subscribe());

        let colorfgbg = std::env::var(COLORFGBG_ENV).ok();
        let theme =
            theme_mode(theme_override, config.theme.as_deref()).resolve(colorfgbg.as_deref());

        Ok(Self {
            lines,
            brand: config.brand.clone(),
            page,
            tracker,
            nav: NavState::new(config.nav.clone()),
            theme,
            emphasis,
            layout: LayoutState::new(),
            scale: PixelScale::default(),
            status_message: None,
            should_quit: false,
            needs_redraw: true,
        })
    }

    /// Sections below the hero, in document coordinates
    pub fn sections(&self) -> Vec<Section> {
        let container = self.page.container_geometry();
        let bottom = container.top + container.height;
        layout_sections(
            self.nav.items(),
            bottom,
            self.page.document_height() - bottom,
        )
    }

    /// Deliver page events to the tracker and refresh dependent state
    pub fn apply(&mut self, events: PageEvents) {
        events.dispatch(&mut self.tracker, &self.page);
        self.nav.update_scroll(self.page.scroll_y());
        self.emphasis.sync();
        self.needs_redraw = true;
    }

    pub fn scroll_by(&mut self, delta: f64) {
        let events = self.page.scroll_by(delta);
        self.apply(events);
    }

    pub fn scroll_to(&mut self, y: f64) {
        let events = self.page.scroll_to(y);
        self.apply(events);
    }

    /// Size the page viewport to a terminal of `rows` rows
    pub fn resize(&mut self, rows: u16) {
        let viewport = self.scale.rows_to_px(rows.saturating_sub(CHROME_ROWS));
        let events = self.page.resize(viewport);
        self.apply(events);
    }

    /// Follow a navigation entry
    pub fn activate_nav(&mut self, index: usize) {
        match self.nav.activate(index) {
            Some(NavTarget::Anchor(id)) => match anchor_offset(&self.sections(), &id) {
                Some(offset) => {
                    tracing::debug!(anchor = %id, offset, "Jumping to section");
                    self.status_message = None;
                    self.scroll_to(offset);
                }
                None => {
                    self.status_message = Some(format!("No section #{}", id));
                }
            },
            Some(NavTarget::Page(href)) => {
                tracing::info!(href = %href, "External navigation requested");
                self.status_message = Some(format!("Opens {}", href));
            }
            None => {}
        }
        self.needs_redraw = true;
    }

    /// Whether a pending emoji emphasis still needs frames
    fn emphasis_pending(&self) -> bool {
        self.lines
            .get(self.emphasis.active())
            .map(|line| emphasis_settle_time(&line.content))
            .is_some_and(|settle| !self.emphasis.has_started(settle))
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        // Restores the terminal on every exit path, errors included
        let _restore = scopeguard::guard((), |_| restore_terminal());
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let size = terminal.size()?;
        self.resize(size.height);
        self.tracker.mount(&mut self.page);
        let initial = self.page.flush();
        self.apply(initial);
        tracing::info!(
            lines = self.lines.len(),
            state = ?self.tracker.state(),
            viewport = self.page.viewport_height(),
            "Hero mounted"
        );

        let result = self.main_loop(&mut terminal).await;

        self.tracker.unmount(&mut self.page);
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            if self.emphasis.sync() || self.emphasis_pending() {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) => self.handle_key(key),
                        Some(Ok(Event::Mouse(mouse))) => self.handle_mouse_event(mouse),
                        Some(Ok(Event::Resize(_, rows))) => self.resize(rows),
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            tracing::warn!("Terminal event error: {}", e);
                        }
                        // Input closed
                        None => self.should_quit = true,
                    }
                }
                _ = tokio::time::sleep(TICK) => {}
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}
