//! End-to-end: CSV on disk → prepared dataset → projected views.

use std::io::Write;

use chrono::NaiveDate;
use stockdash_core::projection::{PriceChart, NUMERIC_COLUMNS};
use stockdash_core::stats::NO_DATA_MESSAGE;
use stockdash_core::{load_dataset, project, ChartType, DataLoadError, ViewSelection};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn write_csv(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// 260 sessions of a gently trending series, one row per calendar day.
fn long_csv() -> String {
    let base = d(2019, 1, 1);
    let mut out = String::from("date,open,high,low,close,volume\n");
    for i in 0..260 {
        let close = 100.0 + i as f64 * 0.5 + ((i % 7) as f64 - 3.0);
        let open = close - 0.75;
        out.push_str(&format!(
            "{},{:.2},{:.2},{:.2},{:.2},{}\n",
            base + chrono::Duration::days(i),
            open,
            close + 2.0,
            open - 2.0,
            close,
            1_000_000 + i * 1_000
        ));
    }
    out
}

#[test]
fn three_day_scenario_from_disk() {
    let file = write_csv(
        "date,open,high,low,close,volume\n\
         2020-01-01,99,101,98,100,1000\n\
         2020-01-02,108,112,107,110,1500\n\
         2020-01-03,109,111,104,105,1200\n",
    );
    let data = load_dataset(file.path(), 0).unwrap();
    let sel = ViewSelection::new(ChartType::Line, d(2020, 1, 1), d(2020, 1, 3));
    let bundle = project(&data, &sel);

    let summary = bundle.summary.unwrap();
    assert!((summary.avg_close - 105.0).abs() < 1e-12);
    assert_eq!(summary.max_close, 110.0);
    assert_eq!(summary.total_volume, 3700);
    assert_eq!(
        bundle.summary_text,
        "Average Close Price: $105.00 | Max Close Price: $110.00 | Total Volume: 3,700"
    );
}

#[test]
fn single_row_range() {
    let data = load_dataset(write_csv(&long_csv()).path(), 0).unwrap();
    let target = &data.records()[123];
    let sel = ViewSelection::new(ChartType::Candlestick, target.date(), target.date());
    let bundle = project(&data, &sel);

    let summary = bundle.summary.unwrap();
    assert_eq!(summary.avg_close, target.close());
    assert_eq!(summary.max_close, target.close());
    assert_eq!(summary.total_volume, target.volume());
    assert_eq!(summary.row_count, 1);
}

#[test]
fn empty_range_has_blank_payloads() {
    let data = load_dataset(write_csv(&long_csv()).path(), 0).unwrap();
    let sel = ViewSelection::new(ChartType::Line, d(2030, 1, 1), d(2030, 12, 31));
    let bundle = project(&data, &sel);

    assert_eq!(bundle.summary_text, NO_DATA_MESSAGE);
    assert!(bundle.price_chart.is_empty());
    assert!(bundle.volume_chart.is_empty());
    assert!(bundle.scatter_chart.is_empty());
    assert!(bundle.heatmap.is_empty());
    assert!(bundle.sentiment_chart.is_empty());
}

#[test]
fn ma_overlays_skip_warmup_rows() {
    let data = load_dataset(write_csv(&long_csv()).path(), 0).unwrap();
    let (start, end) = data.date_bounds().unwrap();
    let bundle = project(&data, &ViewSelection::new(ChartType::Line, start, end));

    match bundle.price_chart {
        PriceChart::Line { close, ma50, ma200 } => {
            assert_eq!(close.points.len(), 260);
            assert_eq!(ma50.points.len(), 260 - 49);
            assert_eq!(ma200.points.len(), 260 - 199);
            assert_eq!(ma50.points[0].0, data.records()[49].date());
        }
        other => panic!("expected line chart, got {other:?}"),
    }
}

#[test]
fn heatmap_is_symmetric_with_unit_diagonal() {
    let data = load_dataset(write_csv(&long_csv()).path(), 0).unwrap();
    let (start, end) = data.date_bounds().unwrap();
    let heatmap = project(&data, &ViewSelection::new(ChartType::Line, start, end)).heatmap;

    assert_eq!(heatmap.len(), NUMERIC_COLUMNS.len());
    for i in 0..heatmap.len() {
        assert_eq!(heatmap.get(i, i), Some(1.0));
        for j in 0..heatmap.len() {
            assert_eq!(heatmap.get(i, j), heatmap.get(j, i));
            if let Some(r) = heatmap.get(i, j) {
                assert!((-1.0..=1.0).contains(&r));
            }
        }
    }
    // close and high move in lockstep (high = close + 2)
    assert!((heatmap.between("close", "high").unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn sentiment_labels_reproducible_across_loads() {
    let file = write_csv(&long_csv());
    let a = load_dataset(file.path(), 0).unwrap();
    let b = load_dataset(file.path(), 0).unwrap();
    let la: Vec<_> = a.records().iter().map(|r| r.sentiment).collect();
    let lb: Vec<_> = b.records().iter().map(|r| r.sentiment).collect();
    assert_eq!(la, lb);
}

#[test]
fn bundle_serializes_to_json() {
    let data = load_dataset(write_csv(&long_csv()).path(), 0).unwrap();
    let (start, end) = data.date_bounds().unwrap();
    let bundle = project(&data, &ViewSelection::new(ChartType::Candlestick, start, end));
    let json = serde_json::to_value(&bundle).unwrap();

    assert_eq!(json["price_chart"]["type"], "candlestick");
    assert_eq!(json["price_chart"]["candles"].as_array().unwrap().len(), 260);
    assert_eq!(json["heatmap"]["labels"][5], "ma50");
    assert!(json["summary_text"].as_str().unwrap().starts_with("Average Close Price: $"));
}

#[test]
fn malformed_file_fails_to_load() {
    let file = write_csv("date,open,high,low,close,volume\n2020-01-01,1,1,1,one,10\n");
    assert!(matches!(
        load_dataset(file.path(), 0),
        Err(DataLoadError::InvalidNumber { column: "close", line: 2, .. })
    ));
}
