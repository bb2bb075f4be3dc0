use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Outline weight of every bar, in pixels.
///
/// The compare layout keeps both series at the same fixed weight, so this is
/// a crate constant rather than a `CompareChartStyle` field.
pub const BAR_BORDER_WIDTH_PX: f64 = 1.0;

/// Title drawn next to the value axis.
pub const VALUE_AXIS_TITLE: &str = "Value";

/// Presentation knobs for the compare chart.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareChartStyle {
    pub background_color: Color,
    pub series1_color: Color,
    pub series2_color: Color,
    /// Opacity of bar fills; outlines keep the series color at full opacity.
    pub bar_fill_alpha: f64,
    pub axis_color: Color,
    pub grid_color: Color,
    pub text_color: Color,
    pub label_font_size_px: f64,
    pub legend_font_size_px: f64,
}

impl Default for CompareChartStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(1.0, 1.0, 1.0),
            series1_color: Color::rgb(54.0 / 255.0, 162.0 / 255.0, 235.0 / 255.0),
            series2_color: Color::rgb(255.0 / 255.0, 99.0 / 255.0, 132.0 / 255.0),
            bar_fill_alpha: 0.5,
            axis_color: Color::rgb(0.25, 0.25, 0.25),
            grid_color: Color::rgb(0.85, 0.85, 0.85),
            text_color: Color::rgb(0.25, 0.25, 0.25),
            label_font_size_px: 11.0,
            legend_font_size_px: 12.0,
        }
    }
}

impl CompareChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        self.background_color.validate()?;
        self.series1_color.validate()?;
        self.series2_color.validate()?;
        self.axis_color.validate()?;
        self.grid_color.validate()?;
        self.text_color.validate()?;

        if !self.bar_fill_alpha.is_finite() || !(0.0..=1.0).contains(&self.bar_fill_alpha) {
            return Err(ChartError::InvalidData(
                "bar fill alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        for (name, size) in [
            ("label font size", self.label_font_size_px),
            ("legend font size", self.legend_font_size_px),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    /// Serializes style to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize style: {e}")))
    }

    /// Deserializes style from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse style: {e}")))
    }
}
