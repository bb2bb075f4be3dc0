use smallvec::SmallVec;

use crate::core::{
    CategoryScale, PlotArea, ValueScale, Viewport, project_grouped_bars, value_axis_ticks,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{BAR_BORDER_WIDTH_PX, CompareChartData, CompareChartStyle, VALUE_AXIS_TITLE};

const PLOT_MARGIN_TOP_PX: f64 = 40.0;
const PLOT_MARGIN_RIGHT_PX: f64 = 16.0;
const PLOT_MARGIN_BOTTOM_PX: f64 = 28.0;
const PLOT_MARGIN_LEFT_PX: f64 = 64.0;

const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
const GRID_STROKE_WIDTH_PX: f64 = 1.0;
const TICK_LABEL_GAP_PX: f64 = 8.0;
const CATEGORY_LABEL_GAP_PX: f64 = 8.0;
const AXIS_TITLE_GAP_PX: f64 = 6.0;

const LEGEND_ROW_CENTER_Y_PX: f64 = 14.0;
const LEGEND_SWATCH_SIZE_PX: f64 = 12.0;
const LEGEND_SWATCH_TEXT_GAP_PX: f64 = 6.0;
const LEGEND_ITEM_GAP_PX: f64 = 24.0;
// Crude width estimate for centering the legend; backends measure real text.
const LEGEND_CHAR_WIDTH_RATIO: f64 = 0.6;

struct SeriesSpec<'a> {
    name: &'a str,
    values: &'a [f64],
    color: Color,
}

/// Builds the full draw scene for one compare chart: background, value axis
/// with zero-anchored nice ticks and grid, category labels, grouped bars, and
/// the two-entry legend.
///
/// Pure construction; callers are responsible for the presence checks that
/// gate rendering.
pub fn build_compare_frame(
    data: &CompareChartData,
    style: &CompareChartStyle,
    viewport: Viewport,
) -> ChartResult<RenderFrame> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    style.validate()?;

    let series: SmallVec<[SeriesSpec<'_>; 2]> = SmallVec::from_buf([
        SeriesSpec {
            name: data.series1_display_name(),
            values: &data.series1,
            color: style.series1_color,
        },
        SeriesSpec {
            name: data.series2_display_name(),
            values: &data.series2,
            color: style.series2_color,
        },
    ]);

    let plot = PlotArea::new(
        PLOT_MARGIN_LEFT_PX,
        PLOT_MARGIN_TOP_PX,
        f64::from(viewport.width) - PLOT_MARGIN_LEFT_PX - PLOT_MARGIN_RIGHT_PX,
        f64::from(viewport.height) - PLOT_MARGIN_TOP_PX - PLOT_MARGIN_BOTTOM_PX,
    );
    plot.validate()?;

    let mut frame = RenderFrame::new(viewport);

    frame.rects.push(RectPrimitive::new(
        0.0,
        0.0,
        f64::from(viewport.width),
        f64::from(viewport.height),
        style.background_color,
        style.background_color,
        0.0,
    ));

    let category_scale = CategoryScale::new(data.labels.len())?;

    let raw_scale =
        ValueScale::including_zero(data.series1.iter().chain(&data.series2).copied())?;
    let ticks = value_axis_ticks(raw_scale.domain(), plot.height);
    let (domain_min, domain_max) = match (ticks.first(), ticks.last()) {
        (Some(&first), Some(&last)) if last > first => (first, last),
        _ => raw_scale.domain(),
    };
    let value_scale = ValueScale::new(domain_min, domain_max)?;
    let tick_step = if ticks.len() >= 2 {
        ticks[1] - ticks[0]
    } else {
        domain_max - domain_min
    };

    for &tick in &ticks {
        let y = value_scale.value_to_y(tick, plot)?;
        frame.lines.push(LinePrimitive::new(
            plot.left,
            y,
            plot.right(),
            y,
            GRID_STROKE_WIDTH_PX,
            style.grid_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick_label(tick, tick_step),
            plot.left - TICK_LABEL_GAP_PX,
            y - style.label_font_size_px * 0.5,
            style.label_font_size_px,
            style.text_color,
            TextHAlign::Right,
        ));
    }

    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.top,
        plot.left,
        plot.bottom(),
        AXIS_STROKE_WIDTH_PX,
        style.axis_color,
    ));
    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        AXIS_STROKE_WIDTH_PX,
        style.axis_color,
    ));

    frame.texts.push(TextPrimitive::new(
        VALUE_AXIS_TITLE,
        plot.left - TICK_LABEL_GAP_PX,
        plot.top - style.label_font_size_px - AXIS_TITLE_GAP_PX,
        style.label_font_size_px,
        style.text_color,
        TextHAlign::Right,
    ));

    for (category, label) in data.labels.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        let center = category_scale.band_center(category, plot)?;
        frame.texts.push(TextPrimitive::new(
            label.clone(),
            center,
            plot.bottom() + CATEGORY_LABEL_GAP_PX,
            style.label_font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }

    let series_values: SmallVec<[&[f64]; 2]> = series.iter().map(|s| s.values).collect();
    let bars = project_grouped_bars(&series_values, category_scale, value_scale, plot)?;
    for bar in bars {
        let color = series[bar.series].color;
        frame.rects.push(RectPrimitive::new(
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            color.with_alpha(style.bar_fill_alpha),
            color,
            BAR_BORDER_WIDTH_PX,
        ));
    }

    push_legend(&mut frame, &series, style, plot);

    Ok(frame)
}

fn push_legend(
    frame: &mut RenderFrame,
    series: &[SeriesSpec<'_>],
    style: &CompareChartStyle,
    plot: PlotArea,
) {
    let item_width = |spec: &SeriesSpec<'_>| {
        LEGEND_SWATCH_SIZE_PX
            + LEGEND_SWATCH_TEXT_GAP_PX
            + spec.name.chars().count() as f64 * style.legend_font_size_px * LEGEND_CHAR_WIDTH_RATIO
    };
    let total_width: f64 = series.iter().map(item_width).sum::<f64>()
        + LEGEND_ITEM_GAP_PX * (series.len().saturating_sub(1)) as f64;

    let mut x = plot.left + (plot.width - total_width) * 0.5;
    let swatch_y = LEGEND_ROW_CENTER_Y_PX - LEGEND_SWATCH_SIZE_PX * 0.5;
    let text_y = LEGEND_ROW_CENTER_Y_PX - style.legend_font_size_px * 0.5;

    for spec in series {
        frame.rects.push(RectPrimitive::new(
            x,
            swatch_y,
            LEGEND_SWATCH_SIZE_PX,
            LEGEND_SWATCH_SIZE_PX,
            spec.color.with_alpha(style.bar_fill_alpha),
            spec.color,
            BAR_BORDER_WIDTH_PX,
        ));
        frame.texts.push(TextPrimitive::new(
            spec.name,
            x + LEGEND_SWATCH_SIZE_PX + LEGEND_SWATCH_TEXT_GAP_PX,
            text_y,
            style.legend_font_size_px,
            style.text_color,
            TextHAlign::Left,
        ));
        x += item_width(spec) + LEGEND_ITEM_GAP_PX;
    }
}

fn format_tick_label(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        ((-step.log10().floor()) as usize).min(6)
    } else {
        0
    };
    format!("{value:.decimals$}")
}
