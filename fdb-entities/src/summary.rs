use std::collections::HashMap;

use crate::{rating::*, sentiment::*, subject::*};

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SentimentDistribution {
    pub positive : usize,
    pub neutral  : usize,
    pub negative : usize,
}

impl SentimentDistribution {
    pub fn add(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub const fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub const fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Summary statistics over a set of feedback records.
///
/// The distributions only contain keys that actually occur,
/// except for the sentiments which are always complete.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub total_count: usize,
    pub average_rating: AvgRatingValue,
    pub sentiment_distribution: SentimentDistribution,
    pub subject_distribution: HashMap<Subject, usize>,
    pub rating_distribution: HashMap<RatingValue, usize>,
}
