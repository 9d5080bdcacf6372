//! Test helpers for building small prepared datasets and reading buffers

use std::sync::Arc;

use chrono::NaiveDate;
use ratatui::buffer::Buffer;

use stockdash_core::{
    prepare_seeded, project, ChartType, Dataset, PriceRecord, ViewBundle, ViewSelection,
};

use crate::app::AppState;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// `n` consecutive days from 2020-01-01 with alternating up/down candles.
pub fn sample_dataset(n: usize) -> Dataset {
    let rows = (0..n)
        .map(|i| {
            let close = 100.0 + i as f64 + if i % 2 == 0 { 1.5 } else { -1.5 };
            let open = 100.0 + i as f64;
            PriceRecord {
                date: d(2020, 1, 1) + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1_000 + (i as u64 * 137) % 900,
            }
        })
        .collect();
    prepare_seeded(rows, 0)
}

pub fn sample_bundle(n: usize, chart_type: ChartType) -> ViewBundle {
    let data = sample_dataset(n);
    let (start, end) = data.date_bounds().unwrap();
    project(&data, &ViewSelection::new(chart_type, start, end))
}

pub fn sample_app(n: usize) -> AppState {
    AppState::new(Arc::new(sample_dataset(n)), "Test Prices", ChartType::Line)
}

/// Flatten a rendered buffer into one string, row by row.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut content = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            content.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        content.push('\n');
    }
    content
}
