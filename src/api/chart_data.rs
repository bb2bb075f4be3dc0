use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Legend name substituted when the first series has no usable name.
pub const DEFAULT_SERIES1_NAME: &str = "Artist 1";
/// Legend name substituted when the second series has no usable name.
pub const DEFAULT_SERIES2_NAME: &str = "Artist 2";

/// Input record for one compare chart construction.
///
/// The type is serializable so a host page can inject it as JSON. Every field
/// carries a default, so partial payloads degrade to empty sequences and
/// placeholder series names instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareChartData {
    pub labels: Vec<String>,
    pub series1: Vec<f64>,
    pub series2: Vec<f64>,
    pub series1_name: Option<String>,
    pub series2_name: Option<String>,
}

impl CompareChartData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ordered category labels. Order determines bar grouping.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_series1(mut self, values: Vec<f64>) -> Self {
        self.series1 = values;
        self
    }

    #[must_use]
    pub fn with_series2(mut self, values: Vec<f64>) -> Self {
        self.series2 = values;
        self
    }

    #[must_use]
    pub fn with_series1_name(mut self, name: impl Into<String>) -> Self {
        self.series1_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_series2_name(mut self, name: impl Into<String>) -> Self {
        self.series2_name = Some(name.into());
        self
    }

    /// Legend name for the first series.
    ///
    /// Both a missing and an empty name resolve to the placeholder, matching
    /// the falsy-name substitution of the injected-globals contract.
    #[must_use]
    pub fn series1_display_name(&self) -> &str {
        resolve_name(self.series1_name.as_deref(), DEFAULT_SERIES1_NAME)
    }

    /// Legend name for the second series. Same substitution rule.
    #[must_use]
    pub fn series2_display_name(&self) -> &str {
        resolve_name(self.series2_name.as_deref(), DEFAULT_SERIES2_NAME)
    }

    /// True when all three data fields are non-empty, the precondition for
    /// drawing anything at all.
    #[must_use]
    pub fn has_renderable_data(&self) -> bool {
        !self.labels.is_empty() && !self.series1.is_empty() && !self.series2.is_empty()
    }

    /// Serializes the record to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart data: {e}")))
    }

    /// Deserializes a record from host-injected JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart data: {e}")))
    }
}

fn resolve_name<'a>(name: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => placeholder,
    }
}
