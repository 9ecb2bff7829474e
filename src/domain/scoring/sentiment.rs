//! Keyword-based sentiment fallback, used when the AI providers are down.

use crate::domain::feedback::Sentiment;

const POSITIVE_WORDS: &[&str] = &[
    "great",
    "excellent",
    "outstanding",
    "helpful",
    "impressive",
    "strong",
    "fantastic",
    "amazing",
    "reliable",
    "proactive",
    "thorough",
    "supportive",
];

const NEGATIVE_WORDS: &[&str] = &[
    "poor",
    "bad",
    "late",
    "missed",
    "weak",
    "unresponsive",
    "sloppy",
    "careless",
    "disappointing",
    "unreliable",
    "rude",
    "negligent",
];

/// Counts positive and negative keyword hits; the larger count wins,
/// ties and no-hits are neutral.
pub fn classify_sentiment_keywords(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let hits = |words: &[&str]| {
        lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| words.contains(w))
            .count()
    };
    let positive = hits(POSITIVE_WORDS);
    let negative = hits(NEGATIVE_WORDS);
    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_text_classifies_positive() {
        let s = classify_sentiment_keywords("Great work, very thorough and reliable");
        assert_eq!(s, Sentiment::Positive);
    }

    #[test]
    fn negative_text_classifies_negative() {
        let s = classify_sentiment_keywords("Deadlines missed and communication was poor");
        assert_eq!(s, Sentiment::Negative);
    }

    #[test]
    fn mixed_or_plain_text_is_neutral() {
        assert_eq!(
            classify_sentiment_keywords("Strong start but a weak finish"),
            Sentiment::Neutral
        );
        assert_eq!(
            classify_sentiment_keywords("Attended the quarterly planning meeting"),
            Sentiment::Neutral
        );
    }

    #[test]
    fn matches_whole_words_only() {
        // "greater" must not count as "great"
        assert_eq!(
            classify_sentiment_keywords("The greater context matters"),
            Sentiment::Neutral
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            classify_sentiment_keywords("EXCELLENT delivery"),
            Sentiment::Positive
        );
    }
}
