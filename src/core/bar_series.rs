use serde::{Deserialize, Serialize};

use crate::core::{CategoryScale, PlotArea, ValueScale};
use crate::error::ChartResult;

/// Deterministic bar geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub series: usize,
    pub category: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects grouped series values into deterministic bar geometry.
///
/// Bars grow from the zero line, so negative values hang below it. A series
/// shorter than the category count simply contributes no bar for the missing
/// categories; values beyond the category count are ignored.
pub fn project_grouped_bars(
    series: &[&[f64]],
    category_scale: CategoryScale,
    value_scale: ValueScale,
    plot: PlotArea,
) -> ChartResult<Vec<BarGeometry>> {
    let zero_y = value_scale.value_to_y(0.0, plot)?;

    let mut projected = Vec::with_capacity(category_scale.category_count() * series.len());
    for category in 0..category_scale.category_count() {
        let slots = category_scale.bar_slots(category, series.len(), plot)?;
        for (series_index, values) in series.iter().enumerate() {
            let Some(&value) = values.get(category) else {
                continue;
            };

            let value_y = value_scale.value_to_y(value, plot)?;
            let slot = slots[series_index];
            projected.push(BarGeometry {
                series: series_index,
                category,
                x: slot.x,
                y: value_y.min(zero_y),
                width: slot.width,
                height: (value_y - zero_y).abs(),
            });
        }
    }

    Ok(projected)
}
