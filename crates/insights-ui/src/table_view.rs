//! Tabular views for the Race Insights TUI.
//!
//! Renders the seasonal constructor points and circuit location charts as
//! bordered [`ratatui::widgets::Table`]s, plus the driver standings summary
//! and the "no data" placeholder.  Long tables scroll a row at a time by
//! skipping leading data rows.

use std::path::Path;

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use insights_core::formatting;
use insights_core::stats::ColumnSummary;
use insights_data::aggregations::{RaceLocations, SeasonalPoints};

use crate::themes::Theme;

// ── Seasonal constructor points ───────────────────────────────────────────────

/// Render the season-by-season constructor points table into `area`.
///
/// One row per `(year, constructor)` pair in chronological order, followed by
/// a highlighted totals row that stays visible while the data rows scroll.
pub fn render_seasonal_table(
    frame: &mut Frame,
    area: Rect,
    chart: &SeasonalPoints,
    scroll: u16,
    theme: &Theme,
) {
    let header_cells = ["Year", "Constructor", "Points"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let total_points: f64 = chart.rows.iter().map(|row| row.points).sum();

    let data_rows: Vec<Row> = chart
        .rows
        .iter()
        .skip(scroll as usize)
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(row.year.to_string()),
                Cell::from(row.constructor.clone()),
                Cell::from(formatting::format_points(row.points)),
            ])
            .style(style)
        })
        .collect();

    // Totals row – styled separately to stand out.
    let total_row = Row::new(vec![
        Cell::from("TOTAL").style(theme.table_total),
        Cell::from(format!("{} rows", chart.rows.len())),
        Cell::from(formatting::format_points(total_points)),
    ])
    .style(theme.table_total);

    let mut all_rows = data_rows;
    all_rows.push(total_row);

    let widths = [
        Constraint::Length(6),
        Constraint::Length(26),
        Constraint::Length(10),
    ];

    let table = Table::new(all_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", chart.title)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

// ── Circuit locations ─────────────────────────────────────────────────────────

/// Render the circuit locations table into `area`.
///
/// One row per circuit with its country and coordinates, in circuit-id order.
pub fn render_locations_table(
    frame: &mut Frame,
    area: Rect,
    chart: &RaceLocations,
    scroll: u16,
    theme: &Theme,
) {
    let header_cells = ["Circuit", "Country", "Latitude", "Longitude"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = chart
        .circuits
        .iter()
        .skip(scroll as usize)
        .enumerate()
        .map(|(i, circuit)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(circuit.name.clone()),
                Cell::from(circuit.country.clone()),
                Cell::from(format!("{:.5}", circuit.lat)),
                Cell::from(format!("{:.5}", circuit.lng)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(34),
        Constraint::Length(16),
        Constraint::Length(11),
        Constraint::Length(11),
    ];

    let table = Table::new(data_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", chart.title)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

// ── Driver standings summary ──────────────────────────────────────────────────

/// Render the driver standings summary statistics into `area`.
///
/// One row per summarized column (points, position, wins) in the shape of a
/// `describe()` table.  Three rows never need scrolling.
pub fn render_stats_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    summaries: &[ColumnSummary],
    theme: &Theme,
) {
    let header_cells = [
        "Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = summaries
        .iter()
        .enumerate()
        .map(|(i, summary)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(summary.column.clone()),
                Cell::from(formatting::format_number(summary.count as f64, 0)),
                Cell::from(formatting::format_number(summary.mean, 2)),
                Cell::from(formatting::format_number(summary.std_dev, 2)),
                Cell::from(formatting::format_number(summary.min, 2)),
                Cell::from(formatting::format_number(summary.q25, 2)),
                Cell::from(formatting::format_number(summary.median, 2)),
                Cell::from(formatting::format_number(summary.q75, 2)),
                Cell::from(formatting::format_number(summary.max, 2)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let table = Table::new(data_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

// ── No data placeholder ───────────────────────────────────────────────────────

/// Render a "no data" placeholder when a chart or summary has nothing to show.
pub fn render_no_data(frame: &mut Frame, area: Rect, data_dir: &Path, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No data to display", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            format!("No usable rows were found under {}", data_dir.display()),
            theme.dim,
        )),
        Line::from(Span::styled(
            "Check that the directory contains the Formula 1 CSV files.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Race Insights "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
