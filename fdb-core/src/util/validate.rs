use thiserror::Error;

use crate::entities::*;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackInvalidation {
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Missing author")]
    Author,
}

impl AutoCorrect for Feedback {
    fn auto_correct(mut self) -> Self {
        self.comment = self.comment.trim().to_owned();
        self.author_name = self.author_name.trim().to_owned();
        self
    }
}

impl Validate for Feedback {
    type Error = FeedbackInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.rating.is_valid() {
            return Err(Self::Error::RatingValue);
        }
        if self.comment.trim().is_empty() {
            return Err(Self::Error::EmptyComment);
        }
        if !self.author_id.is_valid() {
            return Err(Self::Error::Author);
        }
        Ok(())
    }
}

impl AutoCorrect for FeedbackUpdate {
    fn auto_correct(mut self) -> Self {
        self.comment = self.comment.map(|c| c.trim().to_owned());
        self
    }
}

impl Validate for FeedbackUpdate {
    type Error = FeedbackInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if let Some(rating) = self.rating {
            if !rating.is_valid() {
                return Err(Self::Error::RatingValue);
            }
        }
        if let Some(comment) = &self.comment {
            if comment.trim().is_empty() {
                return Err(Self::Error::EmptyComment);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdb_entities::builders::*;

    #[test]
    fn valid_feedback() {
        let f = Feedback::build().comment("ok").finish();
        assert_eq!(Ok(()), f.validate());
    }

    #[test]
    fn feedback_with_blank_comment() {
        let f = Feedback::build().comment(" \t ").finish();
        assert_eq!(Err(FeedbackInvalidation::EmptyComment), f.validate());
    }

    #[test]
    fn feedback_without_author() {
        let f = Feedback::build().author("", "Nobody").comment("ok").finish();
        assert_eq!(Err(FeedbackInvalidation::Author), f.validate());
    }

    #[test]
    fn trim_comment() {
        let f = Feedback::build().comment("  fine \n").finish().auto_correct();
        assert_eq!("fine", f.comment);
    }

    #[test]
    fn validate_update() {
        assert_eq!(Ok(()), FeedbackUpdate::default().validate());
        let update = FeedbackUpdate {
            comment: Some("".into()),
            ..Default::default()
        };
        assert_eq!(Err(FeedbackInvalidation::EmptyComment), update.validate());
    }

    #[test]
    fn email_addresses() {
        assert!(is_valid_email("customer@email.com"));
        assert!(!is_valid_email("customer"));
    }
}
