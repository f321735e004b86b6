use serde::{Deserialize, Serialize};

use crate::core::{Axis, ChartKind, ChartOptions, ConfigMap};

/// Widget width used when none is configured.
pub const DEFAULT_CHART_WIDTH: u32 = 800;

/// Time-series chart request.
///
/// Serializable so host applications can persist/load a chart request
/// alongside the data it points to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesSettings {
    #[serde(default = "default_chart_kind")]
    pub kind: ChartKind,
    /// Series names: ticker symbols for remote data, dataset names for
    /// caller-supplied tables.
    pub symbols: Vec<String>,
    /// Column holding the plotted values, e.g. `Close`.
    pub value_column: String,
    /// Date column; required for caller-supplied tables.
    #[serde(default)]
    pub date_column: Option<String>,
    /// Plot exactly two series against independent left/right y-axes.
    #[serde(default)]
    pub split_axes: bool,
    /// Y-axis label; defaults to the capitalized value column.
    #[serde(default)]
    pub axis_label: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub background_color: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub border_color: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub fill: bool,
    #[serde(default = "default_chart_width")]
    pub width: u32,
    /// Replaces the generated options entirely.
    #[serde(default)]
    pub options: Option<ChartOptions>,
    #[serde(default)]
    pub x_axes: Option<Vec<Axis>>,
    #[serde(default)]
    pub y_axes: Option<Vec<Axis>>,
    /// Extra top-level config entries passed through to the chart.
    #[serde(default)]
    pub extra: ConfigMap,
}

impl TimeSeriesSettings {
    /// Creates a minimal line-chart request.
    #[must_use]
    pub fn new<S: Into<String>>(
        symbols: impl IntoIterator<Item = S>,
        value_column: impl Into<String>,
    ) -> Self {
        Self {
            kind: default_chart_kind(),
            symbols: symbols.into_iter().map(Into::into).collect(),
            value_column: value_column.into(),
            date_column: None,
            split_axes: false,
            axis_label: None,
            colors: None,
            background_color: None,
            border_color: None,
            fill: false,
            width: default_chart_width(),
            options: None,
            x_axes: None,
            y_axes: None,
            extra: ConfigMap::new(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_date_column(mut self, date_column: impl Into<String>) -> Self {
        self.date_column = Some(date_column.into());
        self
    }

    #[must_use]
    pub fn with_split_axes(mut self, split_axes: bool) -> Self {
        self.split_axes = split_axes;
        self
    }

    #[must_use]
    pub fn with_axis_label(mut self, axis_label: impl Into<String>) -> Self {
        self.axis_label = Some(axis_label.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Option<String>>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, colors: Vec<Option<String>>) -> Self {
        self.background_color = Some(colors);
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, colors: Vec<Option<String>>) -> Self {
        self.border_color = Some(colors);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn with_x_axes(mut self, axes: Vec<Axis>) -> Self {
        self.x_axes = Some(axes);
        self
    }

    #[must_use]
    pub fn with_y_axes(mut self, axes: Vec<Axis>) -> Self {
        self.y_axes = Some(axes);
        self
    }
}

fn default_chart_kind() -> ChartKind {
    ChartKind::Line
}

fn default_chart_width() -> u32 {
    DEFAULT_CHART_WIDTH
}
