//! Terminal UI layer for Race Insights.
//!
//! Provides themes, bar and header components, the chart and table views,
//! and the main application event loop built on top of [`ratatui`] for
//! paging through the computed charts in the terminal.

pub mod app;
pub mod chart_view;
pub mod components;
pub mod table_view;
pub mod themes;

pub use insights_core as core;
