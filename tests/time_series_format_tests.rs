use approx::assert_relative_eq;
use chartjs_rs::api::{DEFAULT_DATE_COLUMN, data_format};
use chartjs_rs::core::{Cell, Column, Table};
use chartjs_rs::error::ChartError;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn shuffled_close_table() -> Table {
    Table::new(vec![
        Column::new("Open", [10.0, 12.0, 11.0]),
        Column::new("Close", [10.5, 12.5, 11.5]),
    ])
    .expect("table")
    .with_index(Column::new(
        DEFAULT_DATE_COLUMN,
        [date(2020, 1, 3), date(2020, 1, 1), date(2020, 1, 2)],
    ))
    .expect("index")
}

#[test]
fn fetched_table_uses_date_index_and_sorts_ascending() {
    let aligned = data_format(&shuffled_close_table(), "Close", false, None).expect("format");

    assert_eq!(aligned.len(), 3);
    assert_eq!(aligned.labels, ["2020-01-01", "2020-01-02", "2020-01-03"]);
    assert_eq!(aligned.values, [Some(12.5), Some(11.5), Some(10.5)]);
}

#[test]
fn provided_table_requires_date_column() {
    let err = data_format(&shuffled_close_table(), "Close", true, None).expect_err("no date column");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn provided_table_with_text_dates_sorts_by_string() {
    let table = Table::new(vec![
        Column::new("when", ["2021-03-01", "2021-01-15", "2021-02-10"]),
        Column::new("Close", [3.0, 1.0, 2.0]),
    ])
    .expect("table");

    let aligned = data_format(&table, "Close", true, Some("when")).expect("format");
    assert_eq!(aligned.labels, ["2021-01-15", "2021-02-10", "2021-03-01"]);
    assert_eq!(aligned.values, [Some(1.0), Some(2.0), Some(3.0)]);
}

#[test]
fn missing_values_become_none_and_keep_alignment() {
    let table = Table::new(vec![
        Column::new("Date", [Cell::from(date(2020, 5, 2)), Cell::from(date(2020, 5, 1))]),
        Column::new("Close", [Cell::Null, Cell::from(Decimal::new(995, 1))]),
    ])
    .expect("table");

    let aligned = data_format(&table, "Close", false, None).expect("format");
    assert_eq!(aligned.labels, ["2020-05-01", "2020-05-02"]);
    assert_eq!(aligned.values.len(), 2);
    assert_relative_eq!(aligned.values[0].expect("value"), 99.5, epsilon = 1e-9);
    assert_eq!(aligned.values[1], None);
}

#[test]
fn datetime_cells_render_with_time_of_day() {
    let at = |hour| date(2020, 1, 1).and_hms_opt(hour, 30, 0).expect("time");
    let table = Table::new(vec![
        Column::new("Date", [Cell::from(at(15)), Cell::from(at(9))]),
        Column::new("Close", [2.0, 1.0]),
    ])
    .expect("table");

    let aligned = data_format(&table, "Close", false, None).expect("format");
    assert_eq!(aligned.labels, ["2020-01-01 09:30:00", "2020-01-01 15:30:00"]);
}

#[test]
fn unknown_columns_are_reported() {
    let err = data_format(&shuffled_close_table(), "Volume", false, None).expect_err("column");
    assert!(matches!(err, ChartError::UnknownKey(_)));

    let err = data_format(&shuffled_close_table(), "Close", true, Some("day")).expect_err("date");
    assert!(matches!(err, ChartError::UnknownKey(_)));
}

#[test]
fn non_numeric_values_are_invalid_data() {
    let table = Table::new(vec![
        Column::new("Date", ["2020-01-01"]),
        Column::new("Close", ["n/a"]),
    ])
    .expect("table");
    let err = data_format(&table, "Close", false, None).expect_err("text value");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn input_table_is_left_untouched() {
    let table = shuffled_close_table();
    let before = table.clone();
    let _ = data_format(&table, "Close", false, None).expect("format");
    assert_eq!(table, before);
    assert!(table.index().is_some());
}

#[test]
fn index_sharing_a_column_name_is_invalid_data() {
    let table = Table::new(vec![
        Column::new("Date", ["2020-01-02", "2020-01-01"]),
        Column::new("Close", [2.0, 1.0]),
    ])
    .expect("table")
    .with_index(Column::new("Date", ["b", "a"]))
    .expect("index");

    let err = data_format(&table, "Close", true, Some("Date")).expect_err("name clash");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn numeric_date_column_labels_keep_decimal_point() {
    let table = Table::new(vec![
        Column::new("step", [2.0, 1.0]),
        Column::new("Close", [20.0, 10.0]),
    ])
    .expect("table");

    let aligned = data_format(&table, "Close", true, Some("step")).expect("format");
    assert_eq!(aligned.labels, ["1.0", "2.0"]);
    assert_eq!(aligned.values, [Some(10.0), Some(20.0)]);
}
