//! Time-series adapter: aligns value/date columns and lays out single or
//! split y-axes for line and bar charts.

use tracing::{debug, warn};

use crate::core::primitives::capitalize;
use crate::core::{
    Animation, Axis, AxisKind, ChartKind, ChartOptions, Dataset, GridLines, MajorTicks, Position,
    ScaleLabel, Scales, Table, Ticks,
};
use crate::error::{ChartError, ChartResult};

use super::chart::Chart;
use super::market_data::DataOrigin;
use super::time_series_config::TimeSeriesSettings;

/// Date column name used by market-data sources.
pub const DEFAULT_DATE_COLUMN: &str = "Date";

/// Axis ids bound by the left and right series in split-axis layouts.
pub const SPLIT_AXIS_IDS: [&str; 2] = ["y-axis-1", "y-axis-2"];

/// Row-aligned values and date labels, ascending by date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedSeries {
    pub values: Vec<Option<f64>>,
    pub labels: Vec<String>,
}

impl AlignedSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Extracts `value_column` and the date column from `table`, sorted
/// ascending by date, with dates rendered as strings.
///
/// Caller-supplied tables (`provided`) must name their date column; fetched
/// tables default to [`DEFAULT_DATE_COLUMN`]. A row index (such as a date
/// index) is treated as a regular column.
pub fn data_format(
    table: &Table,
    value_column: &str,
    provided: bool,
    date_column: Option<&str>,
) -> ChartResult<AlignedSeries> {
    let date_column = match (provided, date_column) {
        (_, Some(name)) => name,
        (false, None) => DEFAULT_DATE_COLUMN,
        (true, None) => {
            return Err(ChartError::InvalidArgument(
                "date column must be specified for caller-supplied data".to_owned(),
            ));
        }
    };

    let table = table.clone().reset_index()?;
    let values = table.column(value_column)?;
    let dates = table.column(date_column)?;
    let order = table.sorted_positions(date_column)?;

    let mut aligned = AlignedSeries {
        values: Vec::with_capacity(order.len()),
        labels: Vec::with_capacity(order.len()),
    };
    for position in order {
        aligned.values.push(values.cells[position].to_value()?);
        aligned.labels.push(dates.cells[position].to_label());
    }

    debug!(
        value_column,
        date_column,
        rows = aligned.len(),
        "aligned time series"
    );
    Ok(aligned)
}

/// Date axis: labelled, bold major ticks taken from the data.
#[must_use]
pub fn default_x_axis(label: Option<&str>) -> Axis {
    Axis::new()
        .with_scale_label(ScaleLabel::shown(label.unwrap_or("x")))
        .with_ticks(Ticks {
            major: Some(MajorTicks {
                enabled: Some(true),
                font_style: Some("bold".to_owned()),
                ..MajorTicks::default()
            }),
            source: Some("data".to_owned()),
            auto_skip: Some(true),
            auto_skip_padding: Some(10),
            max_rotation: Some(60),
            ..Ticks::default()
        })
}

/// Value axes: one shared axis, or with `split` one left and one right axis
/// labelled `"<label> : <series>"`. Split layouts need exactly two series.
pub fn default_y_axes(
    label: Option<&str>,
    split: bool,
    series_names: &[&str],
) -> ChartResult<Vec<Axis>> {
    let label = label.unwrap_or("y");
    if !split {
        return Ok(vec![
            Axis::new()
                .with_scale_label(ScaleLabel::shown(label))
                .with_grid_lines(GridLines {
                    draw_border: Some(false),
                    ..GridLines::default()
                }),
        ]);
    }

    let [left, right] = series_names else {
        return Err(ChartError::InvalidArgument(format!(
            "split axes require exactly two series, got {}",
            series_names.len()
        )));
    };
    Ok(vec![
        Axis::new()
            .with_scale_label(ScaleLabel::shown(format!("{label} : {left}")))
            .bound(AxisKind::Linear, Position::Left, SPLIT_AXIS_IDS[0])
            .with_grid_lines(GridLines {
                draw_border: Some(false),
                ..GridLines::default()
            }),
        Axis::new()
            .with_scale_label(ScaleLabel::shown(format!("{label} : {right}")))
            .bound(AxisKind::Linear, Position::Right, SPLIT_AXIS_IDS[1])
            .with_grid_lines(GridLines {
                draw_border: Some(false),
                draw_on_chart_area: Some(false),
                ..GridLines::default()
            }),
    ])
}

/// Responsive, unanimated options with a date x-axis and value y-axes.
/// Given axes are used as-is; missing ones are generated.
pub fn ts_default_options(
    x_axes: Option<Vec<Axis>>,
    y_axes: Option<Vec<Axis>>,
    x_label: Option<&str>,
    y_label: Option<&str>,
    split: bool,
    series_names: &[&str],
) -> ChartResult<ChartOptions> {
    let x_axes = match x_axes {
        Some(axes) => axes,
        None => vec![default_x_axis(Some(x_label.unwrap_or(DEFAULT_DATE_COLUMN)))],
    };
    let y_axes = match y_axes {
        Some(axes) => axes,
        None => default_y_axes(y_label, split, series_names)?,
    };
    Ok(ChartOptions::new()
        .with_animation(Animation::with_duration(0))
        .with_scales(Scales {
            x_axes: Some(x_axes),
            y_axes: Some(y_axes),
            ..Scales::default()
        }))
}

/// Per-series fill and stroke colors after fallbacks.
#[derive(Debug)]
struct SeriesColors {
    background: Vec<Option<String>>,
    border: Vec<Option<String>>,
}

impl SeriesColors {
    /// `colors` falls back to the background then the border list; each of
    /// those falls back to `colors`.
    fn resolve(settings: &TimeSeriesSettings, series_count: usize) -> ChartResult<Self> {
        let colors = settings
            .colors
            .clone()
            .or_else(|| settings.background_color.clone())
            .or_else(|| settings.border_color.clone())
            .unwrap_or_else(|| vec![None; series_count]);
        let background = settings
            .background_color
            .clone()
            .unwrap_or_else(|| colors.clone());
        let border = settings.border_color.clone().unwrap_or(colors);

        for (name, list) in [("background_color", &background), ("border_color", &border)] {
            if list.len() < series_count {
                return Err(ChartError::InvalidArgument(format!(
                    "{name} has {} entries for {series_count} series",
                    list.len()
                )));
            }
        }
        Ok(Self { background, border })
    }
}

/// Builds a line or bar chart with one dataset per series in `settings`.
///
/// Each table comes from `origin`, is aligned with [`data_format`] and is
/// appended with flat styling (no points, no curve tension, 1px border).
/// Split-axis layouts bind series `i` to `y-axis-{i+1}`. Chart labels are
/// the date strings of the last series.
pub fn time_series_chart(
    settings: &TimeSeriesSettings,
    origin: &DataOrigin<'_>,
) -> ChartResult<Chart> {
    let kind = settings.kind;
    if !matches!(kind, ChartKind::Line | ChartKind::Bar) {
        return Err(ChartError::InvalidArgument(format!(
            "time-series charts support line and bar, got `{kind}`"
        )));
    }
    let provided = origin.is_provided();
    if provided && settings.date_column.is_none() {
        return Err(ChartError::InvalidArgument(
            "date column must be specified for caller-supplied data".to_owned(),
        ));
    }
    let series_names: Vec<&str> = settings.symbols.iter().map(String::as_str).collect();
    if settings.split_axes && series_names.len() != 2 {
        return Err(ChartError::InvalidArgument(format!(
            "split axes only apply to two series, got {}",
            series_names.len()
        )));
    }
    let colors = SeriesColors::resolve(settings, series_names.len())?;

    let options = match &settings.options {
        Some(options) => options.clone(),
        None => {
            let axis_label = settings
                .axis_label
                .clone()
                .unwrap_or_else(|| capitalize(&settings.value_column));
            ts_default_options(
                settings.x_axes.clone(),
                settings.y_axes.clone(),
                None,
                Some(axis_label.as_str()),
                settings.split_axes,
                &series_names,
            )?
        }
    };

    debug!(
        kind = %kind,
        series = series_names.len(),
        split_axes = settings.split_axes,
        provided,
        "build time-series chart"
    );
    let mut chart = Chart::new(kind, Some(options));
    for (position, symbol) in series_names.iter().enumerate() {
        let table = origin.table_for(position, symbol)?;
        let aligned = data_format(
            &table,
            &settings.value_column,
            provided,
            settings.date_column.as_deref(),
        )?;

        if !chart.labels().is_empty() && chart.labels() != aligned.labels.as_slice() {
            warn!(
                symbol,
                previous = chart.labels().len(),
                current = aligned.labels.len(),
                "series dates differ; chart labels follow the latest series"
            );
        }

        let mut dataset = Dataset {
            data: aligned.values,
            label: Some((*symbol).to_owned()),
            background_color: colors.background[position].clone(),
            border_color: colors.border[position].clone(),
            fill: Some(settings.fill),
            line_tension: Some(0.0),
            point_radius: Some(0.0),
            border_width: Some(1.0),
            kind: Some(kind),
            ..Dataset::default()
        };
        if settings.split_axes {
            dataset.y_axis_id = Some(SPLIT_AXIS_IDS[position].to_owned());
        }

        chart.set_labels(aligned.labels);
        chart.add_dataset(dataset);
    }
    chart.setup(settings.width, settings.extra.clone());

    Ok(chart)
}
