use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by insights-ui
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    /// Checkered-flag accents either side of the brand line.
    pub header_accent: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,

    // ── Bars ─────────────────────────────────────────────────────────────────
    /// Filled portion of a ranked or histogram bar.
    pub bar_fill: Style,
    /// Unfilled remainder of a bar.
    pub bar_empty: Style,
    /// Numeric label following a bar.
    pub bar_label: Style,

    // ── Podium ───────────────────────────────────────────────────────────────
    /// Bar fill for the first-placed entry.
    pub podium_gold: Style,
    /// Bar fill for the second-placed entry.
    pub podium_silver: Style,
    /// Bar fill for the third-placed entry.
    pub podium_bronze: Style,

    // ── Table ────────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
    pub table_total: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            bar_fill: Style::default().fg(Color::Cyan),
            bar_empty: Style::default().fg(Color::DarkGray),
            bar_label: Style::default().fg(Color::Gray),

            podium_gold: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            podium_silver: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            podium_bronze: Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text and bright accent colours so that content
    /// remains legible against a white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            bar_fill: Style::default().fg(Color::Blue),
            bar_empty: Style::default().fg(Color::Gray),
            bar_label: Style::default().fg(Color::DarkGray),

            podium_gold: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            podium_silver: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            podium_bronze: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
            table_total: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// Avoids bold modifiers to maintain a retro aesthetic and maximise
    /// compatibility with minimal terminal emulators.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            header_accent: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            bar_fill: Style::default().fg(Color::Cyan),
            bar_empty: Style::default().fg(Color::DarkGray),
            bar_label: Style::default().fg(Color::White),

            podium_gold: Style::default().fg(Color::Yellow),
            podium_silver: Style::default().fg(Color::White),
            podium_bronze: Style::default().fg(Color::Red),

            table_header: Style::default().fg(Color::Cyan),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default().fg(Color::Yellow),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Return the bar fill style for a zero-based rank.
    ///
    /// The first three ranks get podium accents (gold, silver, bronze);
    /// everything below the podium uses the plain fill.
    pub fn bar_style(&self, rank: usize) -> Style {
        match rank {
            0 => self.podium_gold,
            1 => self.podium_silver,
            2 => self.podium_bronze,
            _ => self.bar_fill,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    // ── Theme construction ───────────────────────────────────────────────────

    #[test]
    fn test_dark_theme_creation() {
        let t = Theme::dark();
        // Verify key fields are meaningfully set (not the default unstyled value
        // for all of them).
        assert_eq!(t.header.fg, Some(Color::Cyan));
        assert_eq!(t.success.fg, Some(Color::Green));
        assert_eq!(t.warning.fg, Some(Color::Yellow));
        assert_eq!(t.error.fg, Some(Color::Red));
        assert_eq!(t.bar_fill.fg, Some(Color::Cyan));
        assert_eq!(t.podium_gold.fg, Some(Color::Yellow));
        assert_eq!(t.podium_bronze.fg, Some(Color::LightRed));
    }

    #[test]
    fn test_light_theme_creation() {
        let t = Theme::light();
        assert_eq!(t.header.fg, Some(Color::Blue));
        assert_eq!(t.text.fg, Some(Color::Black));
        assert_eq!(t.bar_fill.fg, Some(Color::Blue));
        assert_eq!(t.table_row.fg, Some(Color::Black));
    }

    #[test]
    fn test_classic_theme_creation() {
        let t = Theme::classic();
        // Classic has no bold modifiers on primary text fields.
        assert!(!t.bold.add_modifier.contains(Modifier::BOLD));
        assert!(!t.podium_gold.add_modifier.contains(Modifier::BOLD));
        assert_eq!(t.header.fg, Some(Color::Cyan));
        assert_eq!(t.table_total.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_from_name_dark() {
        let t = Theme::from_name("dark");
        assert_eq!(t.header.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_from_name_light() {
        let t = Theme::from_name("light");
        assert_eq!(t.header.fg, Some(Color::Blue));
    }

    #[test]
    fn test_from_name_classic() {
        let t = Theme::from_name("classic");
        // Classic header is Cyan without BOLD.
        assert_eq!(t.header.fg, Some(Color::Cyan));
        assert!(!t.header.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_from_name_unknown_falls_back() {
        // Unknown names must not panic and must return a valid theme.
        let t = Theme::from_name("does-not-exist");
        // Must have at least one meaningful style set.
        assert!(t.header.fg.is_some());
    }

    // ── bar_style ranks ──────────────────────────────────────────────────────

    #[test]
    fn test_bar_style_podium_ranks() {
        let t = Theme::dark();
        assert_eq!(t.bar_style(0).fg, Some(Color::Yellow));
        assert_eq!(t.bar_style(1).fg, Some(Color::White));
        assert_eq!(t.bar_style(2).fg, Some(Color::LightRed));
    }

    #[test]
    fn test_bar_style_below_podium() {
        let t = Theme::dark();
        assert_eq!(t.bar_style(3).fg, Some(Color::Cyan));
        assert_eq!(t.bar_style(49).fg, Some(Color::Cyan));
    }
}
