use smallvec::SmallVec;

use crate::core::types::PlotArea;
use crate::error::{ChartError, ChartResult};

/// Share of each category band occupied by the group of bars.
const CATEGORY_SPAN_RATIO: f64 = 0.8;
/// Share of each per-series slot occupied by the bar itself.
const BAR_SPAN_RATIO: f64 = 0.9;

/// Horizontal layout of the category axis: equal-width bands, one per label,
/// with grouped per-series bar slots inside each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScale {
    category_count: usize,
}

/// Horizontal extent of one bar inside a category band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSlot {
    pub x: f64,
    pub width: f64,
}

impl CategoryScale {
    pub fn new(category_count: usize) -> ChartResult<Self> {
        if category_count == 0 {
            return Err(ChartError::InvalidData(
                "category scale requires at least one category".to_owned(),
            ));
        }
        Ok(Self { category_count })
    }

    #[must_use]
    pub fn category_count(self) -> usize {
        self.category_count
    }

    #[must_use]
    pub fn band_width(self, plot: PlotArea) -> f64 {
        plot.width / self.category_count as f64
    }

    /// Pixel x of the center of the band for `category`.
    pub fn band_center(self, category: usize, plot: PlotArea) -> ChartResult<f64> {
        plot.validate()?;
        if category >= self.category_count {
            return Err(ChartError::InvalidData(format!(
                "category index {category} out of range (count={})",
                self.category_count
            )));
        }

        let band = self.band_width(plot);
        Ok(plot.left + (category as f64 + 0.5) * band)
    }

    /// Bar slots for every series inside the band for `category`.
    ///
    /// Slots are ordered by series index, left to right, and leave the
    /// fixed padding ratios around the group and between bars.
    pub fn bar_slots(
        self,
        category: usize,
        series_count: usize,
        plot: PlotArea,
    ) -> ChartResult<SmallVec<[BarSlot; 2]>> {
        if series_count == 0 {
            return Err(ChartError::InvalidData(
                "bar layout requires at least one series".to_owned(),
            ));
        }

        let center = self.band_center(category, plot)?;
        let group_width = self.band_width(plot) * CATEGORY_SPAN_RATIO;
        let slot_width = group_width / series_count as f64;
        let bar_width = slot_width * BAR_SPAN_RATIO;
        let group_left = center - group_width * 0.5;

        let mut slots = SmallVec::new();
        for series in 0..series_count {
            let slot_left = group_left + series as f64 * slot_width;
            slots.push(BarSlot {
                x: slot_left + (slot_width - bar_width) * 0.5,
                width: bar_width,
            });
        }
        Ok(slots)
    }
}
