//! Bar-chart screens for the Race Insights TUI.
//!
//! Renders ranked charts and the finishing-position histogram as a single
//! [`Paragraph`] of styled lines inside a bordered block.  Charts taller than
//! the viewport scroll a line at a time.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use insights_core::formatting;
use insights_data::aggregations::{PositionHistogram, RankedChart, RankedEntry};

use crate::components::bars::MetricBar;
use crate::themes::Theme;

/// Widest label column a ranked chart will reserve; longer labels truncate.
const MAX_LABEL_WIDTH: usize = 24;

// ── Label helpers ─────────────────────────────────────────────────────────────

/// Width of the label column: the widest label on the chart, capped at
/// [`MAX_LABEL_WIDTH`] display columns.
fn label_width(entries: &[RankedEntry]) -> usize {
    entries
        .iter()
        .map(|entry| entry.label.width())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH)
}

/// Pad `label` with trailing spaces to exactly `width` display columns,
/// truncating labels that are too wide.
fn fit_label(label: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(width);
    let mut used = 0;
    for ch in label.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}

// ── Ranked charts ─────────────────────────────────────────────────────────────

/// Build the `Vec<Line>` for a ranked chart (extracted for testability).
///
/// Layout per entry:
///
/// ```text
///  1. Hamilton    ████████████████████░░░░ 413
/// ```
///
/// The first three ranks take the podium fill colours from the theme.
pub fn build_ranked_lines<'a>(chart: &RankedChart, theme: &'a Theme) -> Vec<Line<'a>> {
    let max = chart
        .entries
        .iter()
        .map(|entry| entry.value)
        .fold(0.0_f64, f64::max);
    let width = label_width(&chart.entries);

    let mut lines: Vec<Line<'a>> = Vec::with_capacity(chart.entries.len() + 2);
    lines.push(Line::from(Span::styled(chart.value_label.clone(), theme.dim)));
    lines.push(Line::from(""));

    for (rank, entry) in chart.entries.iter().enumerate() {
        let bar = MetricBar::new(entry.value, max, theme.bar_style(rank), theme);
        let mut spans: Vec<Span<'a>> = vec![
            Span::styled(format!("{:>2}. ", rank + 1), theme.dim),
            Span::styled(fit_label(&entry.label, width), theme.label),
            Span::raw("  "),
        ];
        spans.extend(bar.to_spans());
        lines.push(Line::from(spans));
    }

    lines
}

/// Render a ranked chart into `area`, scrolled down by `scroll` lines.
pub fn render_ranked(frame: &mut Frame, area: Rect, chart: &RankedChart, scroll: u16, theme: &Theme) {
    let lines = build_ranked_lines(chart, theme);
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", chart.title)),
        )
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

// ── Position histogram ────────────────────────────────────────────────────────

/// Build the `Vec<Line>` for the finishing-position histogram.
///
/// Positions are listed in ascending order with one bar per position and the
/// share of all classified finishes after the count:
///
/// ```text
/// P1   ████████████████████░░░░ 1,204 (5.2%)
/// ```
pub fn build_histogram_lines<'a>(histogram: &PositionHistogram, theme: &'a Theme) -> Vec<Line<'a>> {
    let max = histogram.counts.values().copied().max().unwrap_or(0) as f64;
    let total: u64 = histogram.counts.values().sum();
    let width = histogram
        .counts
        .keys()
        .map(|position| format!("P{position}").width())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line<'a>> = Vec::with_capacity(histogram.counts.len() + 2);
    lines.push(Line::from(Span::styled("Frequency", theme.dim)));
    lines.push(Line::from(""));

    for (position, count) in &histogram.counts {
        let share = formatting::percentage(*count as f64, total as f64, 1);
        let bar = MetricBar::new(*count as f64, max, theme.bar_fill, theme);
        let mut spans: Vec<Span<'a>> = vec![
            Span::styled(fit_label(&format!("P{position}"), width), theme.label),
            Span::raw("  "),
        ];
        spans.extend(bar.to_spans());
        spans.push(Span::styled(format!(" ({share:.1}%)"), theme.dim));
        lines.push(Line::from(spans));
    }

    lines
}

/// Render the position histogram into `area`, scrolled down by `scroll` lines.
pub fn render_histogram(
    frame: &mut Frame,
    area: Rect,
    histogram: &PositionHistogram,
    scroll: u16,
    theme: &Theme,
) {
    let lines = build_histogram_lines(histogram, theme);
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", histogram.title)),
        )
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

// ── Tests ──────────────────────────────────────────────────────────────────────
