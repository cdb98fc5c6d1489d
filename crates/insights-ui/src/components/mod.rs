//! Reusable widgets shared by the chart and table views.

pub mod bars;
pub mod header;
