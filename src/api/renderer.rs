use tracing::debug;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{
    COMPARE_BAR_CHART_SURFACE_ID, CompareChartData, CompareChartStyle, SurfaceRegistry,
    build_compare_frame,
};

/// Which path a render request took.
///
/// The two skip variants are supported configurations, not failures: the
/// host page may legitimately carry no chart region or no data yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A frame was built and handed to the surface's backend.
    Rendered,
    /// No surface is registered under the fixed chart id.
    SurfaceMissing,
    /// At least one of labels/series1/series2 is empty.
    EmptyData,
}

impl RenderOutcome {
    #[must_use]
    pub fn is_rendered(self) -> bool {
        matches!(self, Self::Rendered)
    }
}

/// Renders the two-series comparison bar chart onto the registered
/// `compareBarChart` surface.
///
/// Single-shot and synchronous: the host calls this once, after its data and
/// surfaces are ready. Missing surface and empty data are quiet no-ops
/// reported through the outcome and a debug log line; `Err` is reserved for
/// malformed host input such as non-finite values or an unusably small
/// surface.
pub fn render_compare_chart<R: Renderer>(
    registry: &mut SurfaceRegistry<R>,
    data: &CompareChartData,
    style: &CompareChartStyle,
) -> ChartResult<RenderOutcome> {
    debug!(
        labels = ?data.labels,
        series1 = ?data.series1,
        series2 = ?data.series2,
        "compare bar chart input"
    );

    let Some(surface) = registry.get_mut(COMPARE_BAR_CHART_SURFACE_ID) else {
        debug!(
            surface_id = COMPARE_BAR_CHART_SURFACE_ID,
            "no drawing surface registered, skipping render"
        );
        return Ok(RenderOutcome::SurfaceMissing);
    };

    if !data.has_renderable_data() {
        debug!("not enough data to draw compare bar chart");
        return Ok(RenderOutcome::EmptyData);
    }

    let frame = build_compare_frame(data, style, surface.viewport())?;
    surface.render(&frame)?;
    debug!(
        lines = frame.lines.len(),
        rects = frame.rects.len(),
        texts = frame.texts.len(),
        "compare bar chart rendered"
    );
    Ok(RenderOutcome::Rendered)
}
