use crate::{entities::Sentiment, text::split_text_into_words};

const POSITIVE_WORDS: &[&str] = &[
    "excellent",
    "amazing",
    "great",
    "good",
    "outstanding",
    "fantastic",
    "wonderful",
    "perfect",
    "love",
    "awesome",
    "fast",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "worst",
    "hate",
    "disappointing",
    "poor",
    "unresponsive",
    "cold",
];

/// Tags a comment by counting positive and negative keywords.
///
/// Every whitespace separated token is case-folded and scored on its own,
/// i.e. there is no stemming, no negation handling and no punctuation
/// stripping. Ties (including no keywords at all) are neutral.
pub fn classify(text: &str) -> Sentiment {
    let (positive, negative) =
        split_text_into_words(text).fold((0usize, 0usize), |(pos, neg), word| {
            let word = word.to_lowercase();
            if POSITIVE_WORDS.contains(&word.as_str()) {
                (pos + 1, neg)
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                (pos, neg + 1)
            } else {
                (pos, neg)
            }
        });
    log::trace!("Counted {positive} positive and {negative} negative keywords");
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
    fn positive_keywords() {
        assert_eq!(
            Sentiment::Positive,
            classify("Excellent service and fast delivery")
        );
        assert_eq!(Sentiment::Positive, classify("GREAT"));
    }

    #[test]
    fn negative_keywords() {
        assert_eq!(Sentiment::Negative, classify("terrible and awful"));
        assert_eq!(
            Sentiment::Negative,
            classify("Food was cold when delivered and customer service was unresponsive.")
        );
    }

    #[test]
    fn no_keywords_is_neutral() {
        assert_eq!(Sentiment::Neutral, classify("The weather today"));
        assert_eq!(Sentiment::Neutral, classify(""));
    }

    #[test]
    fn tie_is_neutral() {
        assert_eq!(Sentiment::Neutral, classify("good food but bad app"));
    }

    #[test]
    fn tokens_are_scored_without_context() {
        // "not" is not a keyword and punctuation is part of the token
        assert_eq!(Sentiment::Positive, classify("not good"));
        assert_eq!(Sentiment::Neutral, classify("good! bad."));
        assert_eq!(Sentiment::Neutral, classify("goodness"));
    }

    #[test]
    fn is_deterministic() {
        let text = "Amazing food quality and super fast delivery! Highly recommended.";
        assert_eq!(classify(text), classify(text));
        assert_eq!(Sentiment::Positive, classify(text));
    }
}
