//! Main application state and TUI event loop for Race Insights.
//!
//! [`App`] owns the theme, the computed analysis, and the pager position.
//! All charts are built before the loop starts, so each iteration only
//! redraws the current screen and handles navigation keys.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame, Terminal,
};

use insights_core::formatting;
use insights_data::aggregations::Chart;
use insights_data::analysis::AnalysisResult;

use crate::components::header::Header;
use crate::themes::Theme;
use crate::{chart_view, table_view};

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which view the TUI is currently rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Pager over the computed charts.
    Charts,
    /// Driver standings summary statistics.
    Stats,
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the Race Insights TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Current view mode.
    pub view_mode: ViewMode,
    /// Analysis computed once at startup.
    pub result: AnalysisResult,
    /// Index of the chart currently on screen.
    pub selected: usize,
    /// Vertical scroll offset within the current chart.
    pub scroll: u16,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// Construct a new application with the given configuration.
    pub fn new(theme_name: &str, view_mode: ViewMode, result: AnalysisResult) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            view_mode,
            result,
            selected: 0,
            scroll: 0,
            should_quit: false,
        }
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    /// Number of charts available to page through.
    pub fn chart_count(&self) -> usize {
        self.result.charts.len()
    }

    /// Move to the next chart, wrapping at the end.
    pub fn next_chart(&mut self) {
        let count = self.chart_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
            self.scroll = 0;
        }
    }

    /// Move to the previous chart, wrapping at the start.
    pub fn previous_chart(&mut self) {
        let count = self.chart_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
            self.scroll = 0;
        }
    }

    /// Scroll the current chart down one line.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Scroll the current chart up one line.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    // ── Public event loop ─────────────────────────────────────────────────────

    /// Run the TUI until the user quits with `q`, `Q`, or `Ctrl+C`.
    ///
    /// Uses `crossterm::event::poll` (synchronous, with a 250 ms timeout) so
    /// the screen repaints promptly after terminal resizes.  `←`/`→` (also
    /// `h`/`l`, `p`/`n`, `Tab`) page through the charts; `↑`/`↓` (also
    /// `k`/`j`) scroll within one.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            self.should_quit = true;
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                        KeyCode::Right | KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('l') => {
                            self.next_chart();
                        }
                        KeyCode::Left
                        | KeyCode::BackTab
                        | KeyCode::Char('p')
                        | KeyCode::Char('h') => {
                            self.previous_chart();
                        }
                        KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
                        KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
                        _ => {}
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Position string for the header, e.g. `"chart 3/7"`.
    fn position(&self) -> String {
        match self.view_mode {
            ViewMode::Charts => {
                let count = self.chart_count();
                if count == 0 {
                    "charts".to_string()
                } else {
                    format!("chart {}/{}", self.selected + 1, count)
                }
            }
            ViewMode::Stats => "stats".to_string(),
        }
    }

    /// Title of the chart or view currently on screen.
    fn current_title(&self) -> &str {
        match self.view_mode {
            ViewMode::Charts => self
                .result
                .charts
                .get(self.selected)
                .map(Chart::title)
                .unwrap_or("No charts"),
            ViewMode::Stats => "Driver Standings Summary",
        }
    }

    /// Short dataset label for the header brand line: the final component of
    /// the dataset directory, or the full path when there is none.
    fn dataset_label(&self) -> String {
        let dir = &self.result.metadata.data_dir;
        dir.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string())
    }

    /// Status line showing when the analysis ran, its size, and key hints.
    fn footer_line(&self) -> Line<'_> {
        let meta = &self.result.metadata;
        Line::from(vec![
            Span::styled(
                format!("⏰ {}  ", meta.generated_at.format("%H:%M:%S")),
                self.theme.info,
            ),
            Span::styled(
                format!(
                    "{} rows in {:.2}s",
                    formatting::format_number(meta.rows_loaded as f64, 0),
                    meta.load_time_seconds
                ),
                self.theme.dim,
            ),
            Span::styled(" | ", self.theme.dim),
            Span::styled("←/→ charts  ↑/↓ scroll  q quit", self.theme.dim),
        ])
    }

    /// Render the current application state into `frame`.
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let position = self.position();
        let dataset = self.dataset_label();
        let header = Header::new(&position, self.current_title(), &dataset, &self.theme);
        frame.render_widget(Paragraph::new(Text::from(header.to_lines())), chunks[0]);

        let body = chunks[1];
        match self.view_mode {
            ViewMode::Charts => match self.result.charts.get(self.selected) {
                Some(Chart::Ranked(chart)) => {
                    chart_view::render_ranked(frame, body, chart, self.scroll, &self.theme);
                }
                Some(Chart::Histogram(histogram)) => {
                    chart_view::render_histogram(frame, body, histogram, self.scroll, &self.theme);
                }
                Some(Chart::Seasonal(chart)) => {
                    table_view::render_seasonal_table(frame, body, chart, self.scroll, &self.theme);
                }
                Some(Chart::Locations(chart)) => {
                    table_view::render_locations_table(frame, body, chart, self.scroll, &self.theme);
                }
                None => table_view::render_no_data(
                    frame,
                    body,
                    &self.result.metadata.data_dir,
                    &self.theme,
                ),
            },
            ViewMode::Stats => match self.result.standings_summary {
                Some(ref summaries) => table_view::render_stats_table(
                    frame,
                    body,
                    "Driver Standings Summary",
                    summaries,
                    &self.theme,
                ),
                None => table_view::render_no_data(
                    frame,
                    body,
                    &self.result.metadata.data_dir,
                    &self.theme,
                ),
            },
        }

        frame.render_widget(Paragraph::new(self.footer_line()), chunks[2]);
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
