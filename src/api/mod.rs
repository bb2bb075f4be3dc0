mod chart_data;
mod chart_style;
mod frame_builder;
mod renderer;
mod surface;

pub use chart_data::{CompareChartData, DEFAULT_SERIES1_NAME, DEFAULT_SERIES2_NAME};
pub use chart_style::{BAR_BORDER_WIDTH_PX, CompareChartStyle, VALUE_AXIS_TITLE};
pub use frame_builder::build_compare_frame;
pub use renderer::{RenderOutcome, render_compare_chart};
pub use surface::{COMPARE_BAR_CHART_SURFACE_ID, DrawingSurface, SurfaceRegistry};
