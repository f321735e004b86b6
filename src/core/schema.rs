//! Typed Chart.js configuration sections.
//!
//! Optional keys are `Option` fields skipped on serialization when `None`;
//! keys a section does not enumerate go into its flattened `extra` map.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

use super::clean::{ConfigMap, IntoConfigValue};

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Radar,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Line, Self::Bar, Self::Radar];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Radar => "radar",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Line => "Line Chart",
            Self::Bar => "Bar Chart",
            Self::Radar => "Radar Chart",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == input)
            .ok_or_else(|| {
                ChartError::InvalidArgument(format!(
                    "unsupported chart type `{input}`; expected one of line, bar, radar"
                ))
            })
    }
}

/// Placement of legends and axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Left,
    Bottom,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Linear,
    Logarithmic,
    Category,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipMode {
    Point,
    Nearest,
    Index,
    Dataset,
    X,
    Y,
}

/// Complete chart document handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

impl ChartConfig {
    #[must_use]
    pub fn new(kind: ChartKind, data: ChartData, options: ChartOptions) -> Self {
        Self {
            kind,
            data,
            options,
            extra: ConfigMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

/// One plotted series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    /// Binds the dataset to a y-axis `id` in split-axis layouts.
    #[serde(rename = "yAxisID", default, skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartKind>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

impl Dataset {
    #[must_use]
    pub fn new(data: Vec<Option<f64>>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_colors(
        mut self,
        background_color: Option<String>,
        border_color: Option<String>,
    ) -> Self {
        self.background_color = background_color;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub fn with_y_axis_id(mut self, id: impl Into<String>) -> Self {
        self.y_axis_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: &str, value: impl IntoConfigValue) -> Self {
        self.extra.insert(key.to_owned(), value.into_config_value());
        self
    }
}

/// Chart-level options.
///
/// `Default` is the empty object; [`ChartOptions::new`] starts from the
/// usual `responsive: true`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltips: Option<Tooltips>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self {
            responsive: Some(true),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    #[must_use]
    pub fn with_tooltips(mut self, tooltips: Tooltips) -> Self {
        self.tooltips = Some(tooltips);
        self
    }

    #[must_use]
    pub fn with_scales(mut self, scales: Scales) -> Self {
        self.scales = Some(scales);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Legend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

impl Legend {
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Title {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

impl Title {
    #[must_use]
    pub fn shown(text: impl Into<String>) -> Self {
        Self {
            display: Some(true),
            text: Some(text.into()),
            extra: ConfigMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Animation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

impl Animation {
    #[must_use]
    pub fn with_duration(duration: u32) -> Self {
        Self {
            duration: Some(duration),
            extra: ConfigMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tooltips {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TooltipMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intersect: Option<bool>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axes: Option<Vec<Axis>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axes: Option<Vec<Axis>>,
    /// Shared tick settings for radial scales.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

/// One cartesian axis.
///
/// `Default` is the empty object; [`Axis::new`] starts from the usual
/// `display: true, stacked: false`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_label: Option<ScaleLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AxisKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_lines: Option<GridLines>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

impl Axis {
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: Some(true),
            stacked: Some(false),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_scale_label(mut self, label: ScaleLabel) -> Self {
        self.scale_label = Some(label);
        self
    }

    #[must_use]
    pub fn with_grid_lines(mut self, grid_lines: GridLines) -> Self {
        self.grid_lines = Some(grid_lines);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = Some(ticks);
        self
    }

    /// Binds the axis to one side of the plot under `id`.
    #[must_use]
    pub fn bound(mut self, kind: AxisKind, position: Position, id: impl Into<String>) -> Self {
        self.kind = Some(kind);
        self.position = Some(position);
        self.id = Some(id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_string: Option<String>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

impl ScaleLabel {
    #[must_use]
    pub fn shown(text: impl Into<String>) -> Self {
        Self {
            display: Some(true),
            label_string: Some(text.into()),
            extra: ConfigMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLines {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_border: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<MajorTicks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_skip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_skip_padding: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorTicks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(flatten)]
    pub extra: ConfigMap,
}

macro_rules! impl_into_config_value_via_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoConfigValue for $ty {
                fn into_config_value(self) -> Value {
                    // String keys and `Option<f64>` leaves cannot fail to encode.
                    serde_json::to_value(self).unwrap_or(Value::Null)
                }
            }
        )*
    };
}

impl_into_config_value_via_serde!(
    ChartConfig,
    ChartData,
    Dataset,
    ChartOptions,
    Legend,
    Title,
    Animation,
    Tooltips,
    Scales,
    Axis,
    ScaleLabel,
    GridLines,
    Ticks,
    MajorTicks,
);
