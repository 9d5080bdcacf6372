//! Drives the dashboard with key sequences and checks that the shown bundle
//! is always the projection of the current selection.

use std::sync::Arc;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use stockdash_core::projection::PriceChart;
use stockdash_core::{prepare_seeded, project, ChartType, PriceRecord};
use stockdash_tui::{handle_key, ui, AppState};

fn dataset(n: usize) -> stockdash_core::Dataset {
    let base = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
    let rows = (0..n)
        .map(|i| {
            let close = 50.0 + (i as f64 * 0.3).sin() * 5.0;
            PriceRecord {
                // two-day gap after every fifth row
                date: base + chrono::Duration::days((i + i / 5 * 2) as i64),
                open: close - 0.4,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 10_000 + i as u64 * 10,
            }
        })
        .collect();
    prepare_seeded(rows, 11)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn arb_key() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Char('c')),
        Just(KeyCode::Char('[')),
        Just(KeyCode::Char(']')),
        Just(KeyCode::Char('{')),
        Just(KeyCode::Char('}')),
        Just(KeyCode::Char('r')),
        Just(KeyCode::Char('z')),
        Just(KeyCode::Char('?')),
        Just(KeyCode::Char('s')),
        Just(KeyCode::Char('e')),
        Just(KeyCode::Esc),
        Just(KeyCode::Enter),
        Just(KeyCode::Tab),
        Just(KeyCode::Backspace),
        (0u32..10).prop_map(|d| KeyCode::Char(char::from_digit(d, 10).unwrap())),
    ]
}

#[test]
fn startup_shows_full_range_line_chart() {
    let app = AppState::new(Arc::new(dataset(260)), "Tesla Stock Prices", ChartType::Line);
    assert_eq!(app.selection.chart_type, ChartType::Line);
    assert_eq!(app.bundle.summary.as_ref().unwrap().row_count, 260);
    match &app.bundle.price_chart {
        PriceChart::Line { ma50, ma200, .. } => {
            assert_eq!(ma50.points.len(), 211);
            assert_eq!(ma200.points.len(), 61);
        }
        other => panic!("expected line chart, got {other:?}"),
    }
}

#[test]
fn typed_range_narrows_every_view() {
    let mut app = AppState::new(Arc::new(dataset(40)), "Prices", ChartType::Line);
    handle_key(&mut app, key(KeyCode::Char('e')));
    for _ in 0..10 {
        handle_key(&mut app, key(KeyCode::Backspace));
    }
    for c in "2021-03-05".chars() {
        handle_key(&mut app, key(KeyCode::Char(c)));
    }
    handle_key(&mut app, key(KeyCode::Enter));

    // 2021-03-01..05 holds rows 0..=4
    assert_eq!(app.bundle.volume_chart.bars.len(), 5);
    assert_eq!(app.bundle.scatter_chart.points.len(), 5);
    assert_eq!(app.bundle.sentiment_chart.total(), 5);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bundle_tracks_selection(keys in prop::collection::vec(arb_key(), 0..40)) {
        let data = Arc::new(dataset(30));
        let mut app = AppState::new(data.clone(), "Prices", ChartType::Line);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        for code in keys {
            handle_key(&mut app, key(code));
            prop_assert_eq!(&app.bundle, &project(&data, &app.selection));
            terminal.draw(|f| ui::draw(f, &app)).unwrap();
            if !app.running {
                break;
            }
        }
    }
}
