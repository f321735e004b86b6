pub mod clean;
pub mod color;
pub mod primitives;
pub mod schema;
pub mod table;

pub use clean::{CleanDict, ConfigMap, IntoConfigValue, clean_dict};
pub use color::{NAMED_COLORS, Rgb, color_names, color_rgb, color_rgb_value};
pub use schema::{
    Animation, Axis, AxisKind, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset,
    GridLines, Legend, MajorTicks, Position, ScaleLabel, Scales, Ticks, Title, TooltipMode,
    Tooltips,
};
pub use table::{Cell, Column, Table};
