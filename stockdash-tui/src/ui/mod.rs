//! Top-level UI layout — control bar, 3×2 panel grid, status bar.

pub mod control_bar;
pub mod overlays;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{AppState, Overlay, Panel};
use crate::panels::{
    HeatmapPanel, PricePanel, ScatterPanel, SentimentPanel, SummaryPanel, VolumePanel,
};
use crate::theme::Theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(f.area());

    control_bar::render(f, chunks[0], app);

    if app.maximized {
        draw_panel(f, chunks[1], app, app.focus);
    } else {
        for (panel, area) in grid(chunks[1]) {
            draw_panel(f, area, app, panel);
        }
    }

    status_bar::render(f, chunks[2], app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, chunks[1]),
        Overlay::DateInput(field) => {
            overlays::render_date_input(f, chunks[1], field, &app.date_input)
        }
        Overlay::None => {}
    }
}

/// Three rows of two panels, in `Panel::ALL` order.
pub fn grid(area: Rect) -> Vec<(Panel, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mut cells = Vec::with_capacity(6);
    for (r, row) in rows.iter().enumerate() {
        let widths = if r == 0 {
            [Constraint::Percentage(65), Constraint::Percentage(35)]
        } else {
            [Constraint::Percentage(50), Constraint::Percentage(50)]
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(*row);
        for (c, col) in cols.iter().enumerate() {
            if let Some(panel) = Panel::from_index(r * 2 + c) {
                cells.push((panel, *col));
            }
        }
    }
    cells
}

/// Draw one panel with the current bundle.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState, panel: Panel) {
    let theme = Theme::default();
    let focused = app.focus == panel;
    let bundle = &app.bundle;

    match panel {
        Panel::Price => f.render_widget(
            PricePanel::new(&bundle.price_chart, &app.title, focused, &theme),
            area,
        ),
        Panel::Summary => f.render_widget(
            SummaryPanel::new(&bundle.summary_text, bundle.summary.as_ref(), focused, &theme),
            area,
        ),
        Panel::Volume => {
            f.render_widget(VolumePanel::new(&bundle.volume_chart, focused, &theme), area)
        }
        Panel::Scatter => {
            f.render_widget(ScatterPanel::new(&bundle.scatter_chart, focused, &theme), area)
        }
        Panel::Heatmap => {
            f.render_widget(HeatmapPanel::new(&bundle.heatmap, focused, &theme), area)
        }
        Panel::Sentiment => f.render_widget(
            SentimentPanel::new(&bundle.sentiment_chart, focused, &theme),
            area,
        ),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
