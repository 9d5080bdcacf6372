//! Top control bar — current selection, chart type, dataset bounds.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" StockDash ")
        .title_style(theme::accent_bold());

    let range_style = if app.selection.is_inverted() {
        theme::warning()
    } else {
        theme::accent()
    };

    let mut spans = vec![
        Span::styled("Start ", theme::muted()),
        Span::styled(app.selection.start.to_string(), range_style),
        Span::styled("  End ", theme::muted()),
        Span::styled(app.selection.end.to_string(), range_style),
        Span::styled("  Chart ", theme::muted()),
        Span::styled(app.selection.chart_type.label(), theme::accent()),
    ];

    if let Some((first, last)) = app.data.date_bounds() {
        spans.push(Span::styled(
            format!("  | data {first} .. {last} ({} rows)", app.data.len()),
            theme::neutral(),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(para, area);
}
