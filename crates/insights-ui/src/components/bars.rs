use crate::themes::Theme;
use ratatui::style::Style;
use ratatui::text::Span;

/// Configuration controlling visual appearance of a metric bar.
pub struct BarConfig {
    /// Total width in terminal columns of the bar portion (excluding label).
    pub width: u16,
    /// Character used to fill the occupied portion of the bar.
    pub filled_char: char,
    /// Character used to fill the empty portion of the bar.
    pub empty_char: char,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            width: 40,
            filled_char: '\u{2588}', // █  FULL BLOCK
            empty_char: '\u{2591}',  // ░  LIGHT SHADE
        }
    }
}

// ── MetricBar ────────────────────────────────────────────────────────────────

/// Horizontal bar that shows one chart entry's value relative to the largest
/// value on the chart.
///
/// Renders as a coloured fill + empty portion followed by the value formatted
/// with thousands separators.
pub struct MetricBar<'a> {
    /// Value for this entry.
    pub value: f64,
    /// Largest value on the chart; fills the full bar width.
    pub max: f64,
    /// Style for the filled portion, usually [`Theme::bar_style`] for the
    /// entry's rank.
    pub fill_style: Style,
    /// Theme from which the remaining styles are taken.
    pub theme: &'a Theme,
    /// Visual configuration.
    pub config: BarConfig,
}

impl<'a> MetricBar<'a> {
    /// Construct a new bar.
    pub fn new(value: f64, max: f64, fill_style: Style, theme: &'a Theme) -> Self {
        Self {
            value,
            max,
            fill_style,
            theme,
            config: BarConfig::default(),
        }
    }

    /// Render the bar as spans ready to be appended to a chart row.
    ///
    /// Returns exactly three spans: filled portion, empty portion, and the
    /// formatted value label.
    pub fn to_spans(&self) -> Vec<Span<'a>> {
        let ratio = if self.max > 0.0 {
            (self.value / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let filled = (ratio * self.config.width as f64).round() as u16;
        let empty = self.config.width.saturating_sub(filled);

        let filled_str: String =
            std::iter::repeat_n(self.config.filled_char, filled as usize).collect();
        let empty_str: String =
            std::iter::repeat_n(self.config.empty_char, empty as usize).collect();

        let label = format!(
            " {}",
            insights_core::formatting::format_points(self.value)
        );

        vec![
            Span::styled(filled_str, self.fill_style),
            Span::styled(empty_str, self.theme.bar_empty),
            Span::styled(label, self.theme.bar_label),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    #[test]
    fn test_metric_bar_to_spans() {
        let theme = Theme::dark();
        let bar = MetricBar::new(250.0, 1000.0, theme.bar_style(3), &theme);

        // 25 % of the maximum: should yield exactly 3 spans.
        let spans = bar.to_spans();
        assert_eq!(spans.len(), 3, "expected 3 spans: filled, empty, label");

        // Filled portion: 25 % of 40 columns = 10 chars of '█'.
        let filled_span = &spans[0];
        assert_eq!(filled_span.content.chars().count(), 10);
        assert!(filled_span.content.chars().all(|c| c == '█'));

        // Empty portion: 40 − 10 = 30 chars of '░'.
        let empty_span = &spans[1];
        assert_eq!(empty_span.content.chars().count(), 30);
        assert!(empty_span.content.chars().all(|c| c == '░'));

        // Label shows the value with thousands separators.
        let label = &spans[2].content;
        assert_eq!(label.as_ref(), " 250");
    }

    #[test]
    fn test_metric_bar_zero_value() {
        let theme = Theme::dark();
        let bar = MetricBar::new(0.0, 1000.0, theme.bar_style(0), &theme);
        let spans = bar.to_spans();

        // With a zero value the filled span should be empty.
        assert_eq!(spans[0].content.len(), 0);
        // Empty span should fill the full width.
        assert_eq!(spans[1].content.chars().count(), 40);
    }

    #[test]
    fn test_metric_bar_at_maximum() {
        let theme = Theme::dark();
        let bar = MetricBar::new(25_678.0, 25_678.0, theme.bar_style(0), &theme);
        let spans = bar.to_spans();

        // Value == max: filled span must be exactly 40 chars wide.
        assert_eq!(spans[0].content.chars().count(), 40);
        // Empty span should be empty.
        assert_eq!(spans[1].content.len(), 0);

        let label = &spans[2].content;
        assert_eq!(label.as_ref(), " 25,678");
    }

    #[test]
    fn test_metric_bar_zero_max() {
        // When max == 0 the ratio must default to 0.0 (no divide-by-zero).
        let theme = Theme::dark();
        let bar = MetricBar::new(5.0, 0.0, theme.bar_style(0), &theme);
        let spans = bar.to_spans();
        assert_eq!(spans[0].content.len(), 0);
        assert_eq!(spans[1].content.chars().count(), 40);
    }

    #[test]
    fn test_metric_bar_value_exceeds_max() {
        // A value above the maximum clamps to the full width rather than
        // overflowing the bar.
        let theme = Theme::dark();
        let bar = MetricBar::new(1500.0, 1000.0, theme.bar_style(0), &theme);
        let spans = bar.to_spans();
        assert_eq!(spans[0].content.chars().count(), 40);
        assert_eq!(spans[1].content.len(), 0);
    }

    #[test]
    fn test_metric_bar_fractional_label() {
        let theme = Theme::dark();
        let bar = MetricBar::new(6.5, 100.0, theme.bar_style(2), &theme);
        let spans = bar.to_spans();

        // Half points keep one decimal in the label.
        assert_eq!(spans[2].content.as_ref(), " 6.5");
    }
}
