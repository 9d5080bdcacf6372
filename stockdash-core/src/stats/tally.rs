//! Sentiment value counts.

use serde::Serialize;

use crate::domain::Sentiment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

/// Count each label that occurs, most frequent first.
///
/// Ties keep the order in which the labels first appeared in `labels`.
/// Labels that never occur are left out.
pub fn tally<I>(labels: I) -> Vec<SentimentCount>
where
    I: IntoIterator<Item = Sentiment>,
{
    let mut counts: Vec<SentimentCount> = Vec::with_capacity(Sentiment::ALL.len());
    for sentiment in labels {
        match counts.iter_mut().find(|c| c.sentiment == sentiment) {
            Some(c) => c.count += 1,
            None => counts.push(SentimentCount { sentiment, count: 1 }),
        }
    }
    // stable: equal counts stay in first-appearance order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
