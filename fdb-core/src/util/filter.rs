use crate::{entities::*, text::contains_ignore_case};

/// Moderation filter over all feedback.
///
/// Unset criteria match everything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeedbackQuery {
    pub rating: Option<RatingValue>,
    pub subject: Option<Subject>,
    /// Matched against the comment and the author's name
    pub text: Option<String>,
}

impl FeedbackQuery {
    pub fn is_empty(&self) -> bool {
        let Self {
            rating,
            subject,
            text,
        } = self;
        rating.is_none() && subject.is_none() && text.as_deref().map_or(true, str::is_empty)
    }
}

pub trait MatchesQuery {
    fn matches_query(&self, query: &FeedbackQuery) -> bool;
}

impl MatchesQuery for Feedback {
    fn matches_query(&self, query: &FeedbackQuery) -> bool {
        if query.rating.is_some_and(|r| r != self.rating) {
            return false;
        }
        if query.subject.is_some_and(|s| s != self.subject) {
            return false;
        }
        match query.text.as_deref() {
            None | Some("") => true,
            Some(text) => {
                contains_ignore_case(&self.comment, text)
                    || contains_ignore_case(&self.author_name, text)
            }
        }
    }
}

pub fn feedback_by_query<'a>(query: &'a FeedbackQuery) -> impl Fn(&Feedback) -> bool + 'a {
    move |f| f.matches_query(query)
}
