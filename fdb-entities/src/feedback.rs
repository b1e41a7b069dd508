use crate::{id::*, rating::*, sentiment::*, subject::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id          : Id,
    pub author_id   : Id,
    // Snapshot of the author's display name at submission time
    pub author_name : String,
    pub rating      : RatingValue,
    pub comment     : String,
    pub subject     : Subject,
    pub created_at  : Timestamp,
    // Derived from `comment`
    pub sentiment   : Sentiment,
}

/// Fields of a [`Feedback`] that can be changed after creation.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackUpdate {
    pub rating  : Option<RatingValue>,
    pub comment : Option<String>,
    pub subject : Option<Subject>,
}
