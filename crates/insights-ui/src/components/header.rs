use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Checkered-flag motif placed either side of the brand line.
pub const CHECKERS: &str = "▚▞▚▞";

/// Pager header rendering four lines:
///
/// 1. Brand line: application title and dataset label between checkered
///    flags (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Position and view title in `[ position | title ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Position within the pager (e.g. "chart 1/7", "stats").
    pub position: &'a str,
    /// Title of the chart or view currently on screen.
    pub title: &'a str,
    /// Short label for the dataset being browsed, usually the directory name.
    pub dataset: &'a str,
    /// Theme providing colour styles for each part of the header.
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Construct a new header.
    pub fn new(position: &'a str, title: &'a str, dataset: &'a str, theme: &'a Theme) -> Self {
        Self {
            position,
            title,
            dataset,
            theme,
        }
    }

    /// Render the header as a `Vec<Line>` containing exactly four lines.
    ///
    /// The returned lines are:
    ///
    /// 1. `"▚▞▚▞ RACE INSIGHTS · F1-DATA ▚▞▚▞"`
    /// 2. `"============================================================"` (60 `=` chars)
    /// 3. `"[ chart 1/7 | top 10 drivers by total points ]"`
    /// 4. `""`
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            // Brand line: the application plus the dataset on screen.
            Line::from(vec![
                Span::styled(CHECKERS, self.theme.header_accent),
                Span::styled(" RACE INSIGHTS ", self.theme.header),
                Span::styled(
                    format!("· {} ", self.dataset.to_uppercase()),
                    self.theme.value,
                ),
                Span::styled(CHECKERS, self.theme.header_accent),
            ]),
            // Separator line.
            Line::from(Span::styled(separator, self.theme.separator)),
            // Position / title info line.
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.position.to_lowercase(), self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(self.title.to_lowercase(), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            // Empty line.
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
