//! compare-chart: a two-series comparison bar chart renderer.
//!
//! The crate keeps chart math, render primitives, and the public rendering
//! API in separate layers so hosts can swap drawing backends without touching
//! chart semantics.

pub mod api;
pub mod core;
pub mod error;
pub mod metrics;
pub mod render;
pub mod telemetry;

pub use api::{
    COMPARE_BAR_CHART_SURFACE_ID, CompareChartData, CompareChartStyle, DrawingSurface,
    RenderOutcome, SurfaceRegistry, render_compare_chart,
};
pub use error::{ChartError, ChartResult};
