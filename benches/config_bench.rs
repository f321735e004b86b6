use chartjs_rs::api::{DataOrigin, TimeSeriesSettings, data_format, time_series_chart};
use chartjs_rs::core::{Column, Table, color_names, color_rgb};
use chrono::{Duration, NaiveDate};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn price_table(rows: i64) -> Table {
    let base = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid base date");
    // Reverse chronological, the way many price feeds deliver history.
    let dates: Vec<NaiveDate> = (0..rows).rev().map(|i| base + Duration::days(i)).collect();
    let closes: Vec<f64> = (0..rows).map(|i| 100.0 + (i as f64) * 0.05).collect();
    Table::new(vec![Column::new("Date", dates), Column::new("Close", closes)])
        .expect("valid generated table")
}

fn bench_color_lookup_all_names(c: &mut Criterion) {
    let names: Vec<String> = color_names().map(str::to_uppercase).collect();

    c.bench_function("color_lookup_all_names", |b| {
        b.iter(|| {
            for name in &names {
                let _ = color_rgb(black_box(name), 0.5).expect("known color");
            }
        })
    });
}

fn bench_data_format_10k(c: &mut Criterion) {
    let table = price_table(10_000);

    c.bench_function("data_format_10k", |b| {
        b.iter(|| {
            let _ = data_format(black_box(&table), "Close", false, None).expect("aligned");
        })
    });
}

fn bench_split_axis_chart_json(c: &mut Criterion) {
    let settings = TimeSeriesSettings::new(["AAPL", "MSFT"], "Close")
        .with_date_column("Date")
        .with_split_axes(true);
    let tables = vec![price_table(2_000), price_table(2_000)];

    c.bench_function("split_axis_chart_json_2k", |b| {
        b.iter(|| {
            let origin = DataOrigin::Provided {
                tables: tables.clone(),
            };
            let chart = time_series_chart(black_box(&settings), &origin).expect("chart");
            let _ = chart.to_json_pretty().expect("json");
        })
    });
}

criterion_group!(
    benches,
    bench_color_lookup_all_names,
    bench_data_format_10k,
    bench_split_axis_chart_json
);
criterion_main!(benches);
