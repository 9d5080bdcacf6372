//! The prepared dataset — built once at startup, read-only afterwards.
//!
//! Rows are kept in ascending date order, so every date-range filter is a
//! contiguous slice found by binary search.

use chrono::NaiveDate;

use crate::domain::{DerivedRecord, Sentiment};

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<DerivedRecord>,
}

impl Dataset {
    /// Wrap already-derived rows. Rows are stably sorted by date, so callers
    /// may pass them in any order; ties keep their given order.
    pub fn from_records(mut records: Vec<DerivedRecord>) -> Self {
        records.sort_by_key(|r| r.date());
        Self { records }
    }

    pub(crate) fn from_sorted(records: Vec<DerivedRecord>) -> Self {
        debug_assert!(records.windows(2).all(|w| w[0].date() <= w[1].date()));
        Self { records }
    }

    pub fn records(&self) -> &[DerivedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last date, or `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.date(), last.date())),
            _ => None,
        }
    }

    /// Rows with `start <= date <= end`. An inverted range yields an empty slice.
    pub fn filter(&self, start: NaiveDate, end: NaiveDate) -> &[DerivedRecord] {
        if start > end {
            return &[];
        }
        let lo = self.records.partition_point(|r| r.date() < start);
        let hi = self.records.partition_point(|r| r.date() <= end);
        &self.records[lo..hi.max(lo)]
    }

    /// The closest distinct date strictly before `date`.
    pub fn previous_date(&self, date: NaiveDate) -> Option<NaiveDate> {
        let idx = self.records.partition_point(|r| r.date() < date);
        idx.checked_sub(1).map(|i| self.records[i].date())
    }

    /// The closest distinct date strictly after `date`.
    pub fn next_date(&self, date: NaiveDate) -> Option<NaiveDate> {
        let idx = self.records.partition_point(|r| r.date() <= date);
        self.records.get(idx).map(|r| r.date())
    }

    /// Label counts over the whole dataset, in `Sentiment::ALL` order.
    pub fn sentiment_totals(&self) -> [(Sentiment, usize); 3] {
        let mut totals = Sentiment::ALL.map(|s| (s, 0));
        for r in &self.records {
            totals[r.sentiment.index()].1 += 1;
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceRecord;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rec(date: NaiveDate, close: f64, sentiment: Sentiment) -> DerivedRecord {
        DerivedRecord {
            record: PriceRecord {
                date,
                open: close,
                high: close,
                low: close,
                close,
                volume: 100,
            },
            ma50: None,
            ma200: None,
            sentiment,
        }
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            rec(d(2020, 1, 6), 4.0, Sentiment::Negative),
            rec(d(2020, 1, 2), 1.0, Sentiment::Positive),
            rec(d(2020, 1, 3), 2.0, Sentiment::Neutral),
            rec(d(2020, 1, 3), 3.0, Sentiment::Neutral),
        ])
    }

    #[test]
    fn from_records_sorts_stably() {
        let data = sample();
        let closes: Vec<f64> = data.records().iter().map(|r| r.close()).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn date_bounds() {
        assert_eq!(sample().date_bounds(), Some((d(2020, 1, 2), d(2020, 1, 6))));
        assert_eq!(Dataset::default().date_bounds(), None);
    }

    #[test]
    fn filter_is_inclusive() {
        let data = sample();
        assert_eq!(data.filter(d(2020, 1, 3), d(2020, 1, 6)).len(), 3);
        assert_eq!(data.filter(d(2020, 1, 3), d(2020, 1, 3)).len(), 2);
        assert_eq!(data.filter(d(2020, 1, 4), d(2020, 1, 5)).len(), 0);
        assert_eq!(data.filter(d(2019, 1, 1), d(2030, 1, 1)).len(), 4);
    }

    #[test]
    fn inverted_filter_is_empty() {
        assert!(sample().filter(d(2020, 1, 6), d(2020, 1, 2)).is_empty());
    }

    #[test]
    fn neighbouring_dates_skip_duplicates() {
        let data = sample();
        assert_eq!(data.next_date(d(2020, 1, 2)), Some(d(2020, 1, 3)));
        assert_eq!(data.next_date(d(2020, 1, 3)), Some(d(2020, 1, 6)));
        assert_eq!(data.next_date(d(2020, 1, 6)), None);
        assert_eq!(data.previous_date(d(2020, 1, 6)), Some(d(2020, 1, 3)));
        assert_eq!(data.previous_date(d(2020, 1, 3)), Some(d(2020, 1, 2)));
        assert_eq!(data.previous_date(d(2020, 1, 2)), None);
        // dates between rows
        assert_eq!(data.next_date(d(2020, 1, 4)), Some(d(2020, 1, 6)));
        assert_eq!(data.previous_date(d(2020, 1, 5)), Some(d(2020, 1, 3)));
    }

    #[test]
    fn sentiment_totals_cover_all_labels() {
        let totals = sample().sentiment_totals();
        assert_eq!(
            totals,
            [
                (Sentiment::Positive, 1),
                (Sentiment::Neutral, 2),
                (Sentiment::Negative, 1)
            ]
        );
    }
}
