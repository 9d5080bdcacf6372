//! Overlay widgets — keyboard help and date input.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::DateField;
use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard Shortcuts [?/Esc] close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Panels");
    key(&mut lines, "1-6", "Focus panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle focus forward / back");
    key(&mut lines, "z / Enter", "Maximize / restore focused panel");
    lines.push(Line::from(""));

    section(&mut lines, "Date range");
    key(&mut lines, "s / e", "Type a start / end date (YYYY-MM-DD)");
    key(&mut lines, "[ / ]", "Move start to previous / next trading day");
    key(&mut lines, "{ / }", "Move end to previous / next trading day");
    key(&mut lines, "r", "Reset to the full dataset");
    lines.push(Line::from(""));

    section(&mut lines, "View");
    key(&mut lines, "c", "Toggle Line / Candlestick chart");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q", "Quit");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

pub fn render_date_input(f: &mut Frame, area: Rect, field: DateField, input: &str) {
    let popup = centered_rect(40, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::warning())
        .title(format!(" {} ", field.label()))
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(vec![
            Span::styled("> ", theme::muted()),
            Span::styled(input, theme::accent_bold()),
            Span::styled("_", theme::accent()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "YYYY-MM-DD  [Enter] apply  [Esc] cancel",
            theme::muted(),
        )),
    ];

    f.render_widget(Paragraph::new(text).block(block), popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
