//! Application state — single-owner, main-thread only.
//!
//! The prepared dataset is shared read-only behind an `Arc`. Every change to
//! the selection goes through `reproject`, which calls `project` exactly once
//! and swaps in the new bundle.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use stockdash_core::data::csv_loader::parse_date;
use stockdash_core::{project, ChartType, Dataset, ViewBundle, ViewSelection};

/// Which panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Price,
    Summary,
    Volume,
    Scatter,
    Heatmap,
    Sentiment,
}

impl Panel {
    pub const ALL: [Panel; 6] = [
        Panel::Price,
        Panel::Summary,
        Panel::Volume,
        Panel::Scatter,
        Panel::Heatmap,
        Panel::Sentiment,
    ];

    pub fn index(self) -> usize {
        match self {
            Panel::Price => 0,
            Panel::Summary => 1,
            Panel::Volume => 2,
            Panel::Scatter => 3,
            Panel::Heatmap => 4,
            Panel::Sentiment => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Price => "Price",
            Panel::Summary => "Summary",
            Panel::Volume => "Volume",
            Panel::Scatter => "Scatter",
            Panel::Heatmap => "Heatmap",
            Panel::Sentiment => "Sentiment",
        }
    }

    pub fn next(self) -> Panel {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Panel {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which end of the date range a date input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn label(self) -> &'static str {
        match self {
            DateField::Start => "Start date",
            DateField::End => "End date",
        }
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    DateInput(DateField),
}

/// Top-level application state.
pub struct AppState {
    pub data: Arc<Dataset>,
    pub title: String,
    pub selection: ViewSelection,
    pub bundle: ViewBundle,

    // Navigation
    pub focus: Panel,
    pub maximized: bool,
    pub running: bool,

    // Cross-cutting
    pub overlay: Overlay,
    pub date_input: String,
    /// The prefill has not been edited yet; the next typed character replaces it.
    pub date_input_pristine: bool,
    pub status_message: Option<(String, StatusLevel)>,
    /// Number of `project` calls since startup.
    pub projections: u64,
}

impl AppState {
    /// Start over the full date range of `data`.
    pub fn new(data: Arc<Dataset>, title: impl Into<String>, chart_type: ChartType) -> Self {
        let (start, end) = full_range(&data);
        let mut app = Self {
            data,
            title: title.into(),
            selection: ViewSelection::new(chart_type, start, end),
            bundle: ViewBundle::empty(),
            focus: Panel::Price,
            maximized: false,
            running: true,
            overlay: Overlay::None,
            date_input: String::new(),
            date_input_pristine: false,
            status_message: None,
            projections: 0,
        };
        app.reproject();
        app
    }

    /// Recompute every view for the current selection.
    pub fn reproject(&mut self) {
        self.bundle = project(&self.data, &self.selection);
        self.projections += 1;
        debug!(projections = self.projections, empty = self.bundle.is_empty(), "bundle replaced");
    }

    pub fn toggle_chart_type(&mut self) {
        self.selection.chart_type = self.selection.chart_type.toggle();
        self.reproject();
        self.set_status(format!("Chart type: {}", self.selection.chart_type.label()));
    }

    /// Move one end of the range to the neighbouring trading date.
    pub fn shift(&mut self, field: DateField, forward: bool) {
        let current = self.date_of(field);
        let target = if forward {
            self.data.next_date(current)
        } else {
            self.data.previous_date(current)
        };
        match target {
            Some(date) => self.set_date(field, date),
            None => self.set_warning(format!(
                "{} is already at the {} of the data",
                field.label(),
                if forward { "end" } else { "start" }
            )),
        }
    }

    pub fn reset_range(&mut self) {
        let (start, end) = full_range(&self.data);
        self.selection.start = start;
        self.selection.end = end;
        self.reproject();
        self.set_status("Range reset to full dataset");
    }

    pub fn set_date(&mut self, field: DateField, date: NaiveDate) {
        match field {
            DateField::Start => self.selection.start = date,
            DateField::End => self.selection.end = date,
        }
        self.reproject();
        if self.selection.is_inverted() {
            self.set_warning("Start date is after end date");
        } else {
            self.set_status(format!("{} set to {date}", field.label()));
        }
    }

    pub fn date_of(&self, field: DateField) -> NaiveDate {
        match field {
            DateField::Start => self.selection.start,
            DateField::End => self.selection.end,
        }
    }

    /// Open the date overlay prefilled with the current value.
    pub fn begin_date_input(&mut self, field: DateField) {
        self.date_input = self.date_of(field).format("%Y-%m-%d").to_string();
        self.date_input_pristine = true;
        self.overlay = Overlay::DateInput(field);
    }

    pub fn push_date_char(&mut self, c: char) {
        if self.date_input_pristine {
            self.date_input.clear();
            self.date_input_pristine = false;
        }
        if self.date_input.len() < DATE_INPUT_MAX {
            self.date_input.push(c);
        }
    }

    pub fn pop_date_char(&mut self) {
        self.date_input_pristine = false;
        self.date_input.pop();
    }

    /// Parse the overlay buffer and apply it. Invalid input leaves the
    /// selection unchanged and reports an error.
    pub fn commit_date_input(&mut self, field: DateField) {
        let input = std::mem::take(&mut self.date_input);
        self.date_input_pristine = false;
        self.overlay = Overlay::None;
        match parse_date(&input) {
            Some(date) => self.set_date(field, date),
            None => {
                self.set_error(format!("Invalid date '{}' (expected YYYY-MM-DD)", input.trim()))
            }
        }
    }

    pub fn cancel_overlay(&mut self) {
        self.overlay = Overlay::None;
        self.date_input.clear();
        self.date_input_pristine = false;
    }

    pub fn focus_panel(&mut self, panel: Panel) {
        self.focus = panel;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

/// Longest accepted typed date (`YYYY-MM-DD`, `MM/DD/YYYY`).
const DATE_INPUT_MAX: usize = 10;

fn full_range(data: &Dataset) -> (NaiveDate, NaiveDate) {
    data.date_bounds().unwrap_or((NaiveDate::MIN, NaiveDate::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{d, sample_app};

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Price.next(), Panel::Summary);
        assert_eq!(Panel::Sentiment.next(), Panel::Price);
        assert_eq!(Panel::Price.prev(), Panel::Sentiment);
        assert_eq!(Panel::Summary.prev(), Panel::Price);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..6 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(6).is_none());
    }

    #[test]
    fn starts_on_full_range_with_one_projection() {
        let app = sample_app(10);
        assert_eq!(app.selection.start, d(2020, 1, 1));
        assert_eq!(app.selection.end, d(2020, 1, 10));
        assert_eq!(app.projections, 1);
        assert_eq!(app.bundle.summary.as_ref().unwrap().row_count, 10);
    }

    #[test]
    fn every_change_projects_once() {
        let mut app = sample_app(10);
        app.toggle_chart_type();
        assert_eq!(app.projections, 2);
        assert_eq!(app.selection.chart_type, ChartType::Candlestick);
        app.shift(DateField::Start, true);
        assert_eq!(app.projections, 3);
        app.reset_range();
        assert_eq!(app.projections, 4);
    }

    #[test]
    fn shift_moves_to_neighbouring_dates() {
        let mut app = sample_app(10);
        app.shift(DateField::Start, true);
        assert_eq!(app.selection.start, d(2020, 1, 2));
        app.shift(DateField::End, false);
        assert_eq!(app.selection.end, d(2020, 1, 9));
        assert_eq!(app.bundle.summary.as_ref().unwrap().row_count, 8);
    }

    #[test]
    fn shift_past_edge_warns_without_reprojecting() {
        let mut app = sample_app(5);
        app.shift(DateField::Start, false);
        assert_eq!(app.projections, 1);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }

    #[test]
    fn valid_date_input_applies() {
        let mut app = sample_app(10);
        app.begin_date_input(DateField::End);
        assert_eq!(app.date_input, "2020-01-10");
        app.date_input = "2020-01-03".into();
        app.commit_date_input(DateField::End);
        assert_eq!(app.selection.end, d(2020, 1, 3));
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.bundle.summary.as_ref().unwrap().row_count, 3);
    }

    #[test]
    fn invalid_date_input_keeps_selection() {
        let mut app = sample_app(10);
        let before = app.selection;
        app.begin_date_input(DateField::Start);
        app.date_input = "yesterday".into();
        app.commit_date_input(DateField::Start);
        assert_eq!(app.selection, before);
        assert_eq!(app.projections, 1);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Error))));
    }

    #[test]
    fn inverted_range_shows_placeholder() {
        let mut app = sample_app(10);
        app.set_date(DateField::Start, d(2020, 1, 8));
        app.set_date(DateField::End, d(2020, 1, 2));
        assert!(app.bundle.is_empty());
        assert_eq!(
            app.bundle.summary_text,
            "No data available for the selected date range."
        );
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }
}
