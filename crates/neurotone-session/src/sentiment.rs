//! Keyword-based sentiment classification.
//!
//! Deliberately simple: lowercase the input and scan fixed marker lists in
//! priority order. The first list containing a substring match wins, so
//! "no thanks" classifies positive ("thanks" is checked before "no").

use serde::{Deserialize, Serialize};

/// Sentiment class derived from one turn of user text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentClass {
    Positive,
    Negative,
    Uncertain,
    Neutral,
}

const POSITIVE_MARKERS: &[&str] = &["good", "great", "yes", "agree", "like", "thanks", "hello", "hi"];
const NEGATIVE_MARKERS: &[&str] = &["bad", "no", "disagree", "don't", "cannot", "bye"];
const UNCERTAIN_MARKERS: &[&str] = &["maybe", "perhaps", "possibly", "not sure"];

/// Classifies text against the marker lists.
///
/// Scan order is positive, negative, uncertain; no match yields
/// [`SentimentClass::Neutral`]. Pure and stateless.
pub fn classify(text: &str) -> SentimentClass {
    let lower = text.to_lowercase();
    let lists = [
        (POSITIVE_MARKERS, SentimentClass::Positive),
        (NEGATIVE_MARKERS, SentimentClass::Negative),
        (UNCERTAIN_MARKERS, SentimentClass::Uncertain),
    ];

    for (markers, class) in lists {
        if markers.iter().any(|marker| lower.contains(marker)) {
            return class;
        }
    }

    SentimentClass::Neutral
}
