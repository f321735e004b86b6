use std::cell::RefCell;

use chartjs_rs::api::{
    Credentials, DataOrigin, DateRange, MarketDataSource, SPLIT_AXIS_IDS, TimeSeriesSettings,
    time_series_chart,
};
use chartjs_rs::core::{ChartKind, ChartOptions, Column, Table};
use chartjs_rs::error::{ChartError, ChartResult};
use chrono::NaiveDate;
use serde_json::json;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, d).expect("valid date")
}

fn price_table(closes: [f64; 3]) -> Table {
    Table::new(vec![
        Column::new("date", ["2020-01-03", "2020-01-01", "2020-01-02"]),
        Column::new("close", closes),
    ])
    .expect("table")
}

fn provided(tables: Vec<Table>) -> DataOrigin<'static> {
    DataOrigin::Provided { tables }
}

/// Records fetch calls and serves a `Date`-indexed table.
#[derive(Default)]
struct RecordingSource {
    calls: RefCell<Vec<(String, DateRange, String)>>,
}

impl MarketDataSource for RecordingSource {
    fn fetch(
        &self,
        symbol: &str,
        range: DateRange,
        credentials: &Credentials,
    ) -> ChartResult<Table> {
        self.calls
            .borrow_mut()
            .push((symbol.to_owned(), range, credentials.api_key().to_owned()));
        Table::new(vec![Column::new("Close", [2.0, 1.0])])?
            .with_index(Column::new("Date", [day(2), day(1)]))
    }
}

#[test]
fn provided_data_without_date_column_is_rejected() {
    let settings = TimeSeriesSettings::new(["a"], "close");
    let err = time_series_chart(&settings, &provided(vec![price_table([1.0, 2.0, 3.0])]))
        .expect_err("missing date column");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn split_axes_with_three_series_is_rejected() {
    let settings = TimeSeriesSettings::new(["a", "b", "c"], "close")
        .with_date_column("date")
        .with_split_axes(true);
    let tables = vec![price_table([1.0, 2.0, 3.0]); 3];
    let err = time_series_chart(&settings, &provided(tables)).expect_err("three series");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn radar_is_not_a_time_series_kind() {
    let settings = TimeSeriesSettings::new(["a"], "close")
        .with_date_column("date")
        .with_kind(ChartKind::Radar);
    let err = time_series_chart(&settings, &provided(vec![price_table([1.0, 2.0, 3.0])]))
        .expect_err("radar");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn missing_supplied_table_is_rejected() {
    let settings = TimeSeriesSettings::new(["a", "b"], "close").with_date_column("date");
    let err = time_series_chart(&settings, &provided(vec![price_table([1.0, 2.0, 3.0])]))
        .expect_err("second table");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn short_color_list_is_rejected() {
    let settings = TimeSeriesSettings::new(["a", "b"], "close")
        .with_date_column("date")
        .with_colors(vec![Some("red".to_owned())]);
    let tables = vec![price_table([1.0, 2.0, 3.0]); 2];
    let err = time_series_chart(&settings, &provided(tables)).expect_err("colors");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn provided_series_become_flat_styled_datasets() {
    let settings = TimeSeriesSettings::new(["first", "second"], "close")
        .with_date_column("date")
        .with_kind(ChartKind::Bar)
        .with_colors(vec![Some("red".to_owned()), Some("blue".to_owned())])
        .with_fill(true)
        .with_width(640);
    let tables = vec![price_table([3.0, 1.0, 2.0]), price_table([30.0, 10.0, 20.0])];

    let chart = time_series_chart(&settings, &provided(tables)).expect("chart");
    assert_eq!(chart.kind(), ChartKind::Bar);
    assert_eq!(chart.width(), 640);
    assert_eq!(chart.labels(), ["2020-01-01", "2020-01-02", "2020-01-03"]);
    assert_eq!(chart.datasets().len(), 2);

    let second = &chart.datasets()[1];
    assert_eq!(second.label.as_deref(), Some("second"));
    assert_eq!(second.data, [Some(10.0), Some(20.0), Some(30.0)]);
    assert_eq!(second.background_color.as_deref(), Some("blue"));
    assert_eq!(second.border_color.as_deref(), Some("blue"));
    assert_eq!(second.fill, Some(true));
    assert_eq!(second.point_radius, Some(0.0));
    assert_eq!(second.line_tension, Some(0.0));
    assert_eq!(second.border_width, Some(1.0));
    assert_eq!(second.kind, Some(ChartKind::Bar));
    assert!(second.y_axis_id.is_none());
}

#[test]
fn split_axes_bind_each_dataset_to_its_axis() {
    let settings = TimeSeriesSettings::new(["left", "right"], "close")
        .with_date_column("date")
        .with_split_axes(true);
    let tables = vec![price_table([1.0, 2.0, 3.0]); 2];

    let chart = time_series_chart(&settings, &provided(tables)).expect("chart");
    let ids: Vec<_> = chart
        .datasets()
        .iter()
        .map(|dataset| dataset.y_axis_id.as_deref())
        .collect();
    assert_eq!(ids, [Some(SPLIT_AXIS_IDS[0]), Some(SPLIT_AXIS_IDS[1])]);

    let y_axes = chart
        .options()
        .scales
        .as_ref()
        .and_then(|scales| scales.y_axes.as_ref())
        .expect("y axes");
    assert_eq!(y_axes.len(), 2);
    let label = y_axes[0].scale_label.as_ref().expect("label");
    assert_eq!(label.label_string.as_deref(), Some("Close : left"));
}

#[test]
fn color_fallbacks_mirror_background_and_border() {
    let settings = TimeSeriesSettings::new(["a"], "close")
        .with_date_column("date")
        .with_border_color(vec![Some("green".to_owned())]);
    let chart = time_series_chart(&settings, &provided(vec![price_table([1.0, 2.0, 3.0])]))
        .expect("chart");
    let dataset = &chart.datasets()[0];
    assert_eq!(dataset.background_color.as_deref(), Some("green"));
    assert_eq!(dataset.border_color.as_deref(), Some("green"));

    let settings = TimeSeriesSettings::new(["a"], "close").with_date_column("date");
    let chart = time_series_chart(&settings, &provided(vec![price_table([1.0, 2.0, 3.0])]))
        .expect("chart");
    assert!(chart.datasets()[0].background_color.is_none());
}

#[test]
fn caller_options_replace_generated_ones() {
    let settings = TimeSeriesSettings::new(["a"], "close")
        .with_date_column("date")
        .with_options(ChartOptions::default());
    let chart = time_series_chart(&settings, &provided(vec![price_table([1.0, 2.0, 3.0])]))
        .expect("chart");
    assert_eq!(chart.options(), &ChartOptions::default());
}

#[test]
fn remote_series_are_fetched_with_range_and_credentials() {
    let source = RecordingSource::default();
    let range = DateRange::parse("2020-1-1", "2020-1-31").expect("range");
    let origin = DataOrigin::Remote {
        source: &source,
        range,
        credentials: Credentials::new("quandl", "demo-key").expect("credentials"),
    };
    let settings = TimeSeriesSettings::new(["AAPL", "MSFT"], "Close");

    let chart = time_series_chart(&settings, &origin).expect("chart");
    assert_eq!(chart.labels(), ["2020-01-01", "2020-01-02"]);
    assert_eq!(chart.datasets()[0].data, [Some(1.0), Some(2.0)]);

    let calls = source.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "AAPL");
    assert_eq!(calls[1].0, "MSFT");
    assert_eq!(calls[0].1, range);
    assert_eq!(calls[0].2, "demo-key");
}

#[test]
fn fetch_errors_propagate_unchanged() {
    let failing = |_: &str, _: DateRange, _: &Credentials| -> ChartResult<Table> {
        Err(ChartError::Fetch("provider unavailable".to_owned()))
    };
    let origin = DataOrigin::Remote {
        source: &failing,
        range: DateRange::parse("2020-01-01", "2020-01-02").expect("range"),
        credentials: Credentials::new("quandl", "demo-key").expect("credentials"),
    };
    let err = time_series_chart(&TimeSeriesSettings::new(["AAPL"], "Close"), &origin)
        .expect_err("fetch failure");
    assert!(matches!(err, ChartError::Fetch(message) if message == "provider unavailable"));
}

#[test]
fn chart_document_serializes_to_chartjs_shape() {
    let settings = TimeSeriesSettings::new(["a"], "close").with_date_column("date");
    let chart = time_series_chart(&settings, &provided(vec![price_table([1.0, 2.0, 3.0])]))
        .expect("chart");
    let value = chart.config().to_value().expect("json");

    assert_eq!(value["type"], json!("line"));
    assert_eq!(
        value["data"]["labels"],
        json!(["2020-01-01", "2020-01-02", "2020-01-03"])
    );
    assert_eq!(
        value["data"]["datasets"][0],
        json!({
            "data": [2.0, 3.0, 1.0],
            "label": "a",
            "fill": false,
            "lineTension": 0.0,
            "pointRadius": 0.0,
            "borderWidth": 1.0,
            "type": "line"
        })
    );
    assert_eq!(
        value["options"]["scales"]["yAxes"][0]["scaleLabel"]["labelString"],
        json!("Close")
    );
}
