use ordered_float::OrderedFloat;

use crate::core::types::PlotArea;
use crate::error::{ChartError, ChartResult};

/// Linear value scale for the vertical axis.
///
/// The compare chart always anchors its value axis at zero, so the domain
/// produced by `including_zero` contains zero regardless of the data extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    domain_min: f64,
    domain_max: f64,
}

impl ValueScale {
    pub fn new(domain_min: f64, domain_max: f64) -> ChartResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
            return Err(ChartError::InvalidData(
                "value domain must be finite and non-empty".to_owned(),
            ));
        }

        Ok(Self {
            domain_min,
            domain_max,
        })
    }

    /// Builds a domain spanning zero and every sample in `values`.
    ///
    /// An all-zero input still yields a drawable domain of `(0, 1)`.
    pub fn including_zero<I>(values: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = 0.0_f64;
        let mut max = 0.0_f64;
        for value in values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "series values must be finite".to_owned(),
                ));
            }
            min = *OrderedFloat(min).min(OrderedFloat(value));
            max = *OrderedFloat(max).max(OrderedFloat(value));
        }

        if min == max {
            max = 1.0;
        }

        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Maps a domain value to a y pixel inside `plot` (larger values higher up).
    pub fn value_to_y(self, value: f64, plot: PlotArea) -> ChartResult<f64> {
        plot.validate()?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_max - self.domain_min;
        let normalized = (value - self.domain_min) / span;
        Ok(plot.bottom() - normalized * plot.height)
    }
}
