use std::collections::HashMap;

use crate::entities::*;

pub use fdb_entities::summary::{SentimentDistribution, Summary};

#[derive(Debug, Default, Clone)]
pub struct SummaryBuilder {
    total_count: usize,
    average_rating: AvgRatingValueBuilder,
    sentiment_distribution: SentimentDistribution,
    subject_distribution: HashMap<Subject, usize>,
    rating_distribution: HashMap<RatingValue, usize>,
}

impl SummaryBuilder {
    pub fn add(&mut self, feedback: &Feedback) {
        self.total_count += 1;
        self.average_rating.add(feedback.rating);
        self.sentiment_distribution.add(feedback.sentiment);
        *self.subject_distribution.entry(feedback.subject).or_default() += 1;
        *self.rating_distribution.entry(feedback.rating).or_default() += 1;
    }

    pub fn build(self) -> Summary {
        let Self {
            total_count,
            average_rating,
            sentiment_distribution,
            subject_distribution,
            rating_distribution,
        } = self;
        debug_assert_eq!(total_count, sentiment_distribution.total());
        Summary {
            total_count,
            average_rating: average_rating.build(),
            sentiment_distribution,
            subject_distribution,
            rating_distribution,
        }
    }
}

impl<'a> std::ops::AddAssign<&'a Feedback> for SummaryBuilder {
    fn add_assign(&mut self, rhs: &'a Feedback) {
        self.add(rhs);
    }
}

/// Scans all given feedback in a single pass.
pub fn summarize<'a, I>(feedback: I) -> Summary
where
    I: IntoIterator<Item = &'a Feedback>,
{
    feedback
        .into_iter()
        .fold(SummaryBuilder::default(), |mut acc, f| {
            acc += f;
            acc
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdb_entities::builders::*;

    fn new_feedback(rating: u8, subject: Subject, sentiment: Sentiment) -> Feedback {
        Feedback::build()
            .rating(rating)
            .subject(subject)
            .sentiment(sentiment)
            .finish()
    }

    #[test]
    fn summarize_nothing() {
        let summary = summarize(&[] as &[Feedback]);
        assert_eq!(0, summary.total_count);
        assert_eq!(0.0, f64::from(summary.average_rating));
        assert_eq!(SentimentDistribution::default(), summary.sentiment_distribution);
        assert!(summary.subject_distribution.is_empty());
        assert!(summary.rating_distribution.is_empty());
    }

    #[test]
    fn average_rating() {
        let single = [new_feedback(5, Subject::Uber, Sentiment::Neutral)];
        assert_eq!(5.0, f64::from(summarize(&single).average_rating));

        let two = [
            new_feedback(2, Subject::Uber, Sentiment::Neutral),
            new_feedback(4, Subject::Ola, Sentiment::Neutral),
        ];
        assert_eq!(3.0, f64::from(summarize(&two).average_rating));
    }

    #[test]
    fn distributions() {
        let feedback = [
            new_feedback(5, Subject::Swiggy, Sentiment::Positive),
            new_feedback(4, Subject::Sbi, Sentiment::Positive),
            new_feedback(2, Subject::Zomato, Sentiment::Negative),
            new_feedback(3, Subject::Icici, Sentiment::Neutral),
            new_feedback(5, Subject::Swiggy, Sentiment::Positive),
        ];
        let summary = summarize(&feedback);
        assert_eq!(5, summary.total_count);
        assert_eq!(3.8, f64::from(summary.average_rating));

        let sentiments = summary.sentiment_distribution;
        assert_eq!(3, sentiments.get(Sentiment::Positive));
        assert_eq!(1, sentiments.get(Sentiment::Neutral));
        assert_eq!(1, sentiments.get(Sentiment::Negative));
        assert_eq!(summary.total_count, sentiments.total());

        assert_eq!(4, summary.subject_distribution.len());
        assert_eq!(Some(&2), summary.subject_distribution.get(&Subject::Swiggy));
        assert_eq!(None, summary.subject_distribution.get(&Subject::Amazon));

        assert_eq!(4, summary.rating_distribution.len());
        assert_eq!(Some(&2), summary.rating_distribution.get(&RatingValue::new(5)));
        assert_eq!(None, summary.rating_distribution.get(&RatingValue::new(1)));
    }

    #[test]
    fn all_sentiments_are_always_present() {
        let feedback = [new_feedback(1, Subject::Netflix, Sentiment::Negative)];
        let sentiments = summarize(&feedback).sentiment_distribution;
        assert_eq!(0, sentiments.positive);
        assert_eq!(0, sentiments.neutral);
        assert_eq!(1, sentiments.negative);
    }
}
