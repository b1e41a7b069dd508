use super::{parse_rating, parse_subject, prelude::*};
use crate::{
    sentiment::classify,
    util::validate::{AutoCorrect, Validate},
};

/// Unvalidated input for a new feedback.
#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub author_id   : Id,
    pub author_name : String,
    pub rating      : i64,
    pub comment     : String,
    pub subject     : String,
}

impl NewFeedback {
    pub fn by_author(author: &User) -> Self {
        Self {
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            rating: 0,
            comment: String::new(),
            subject: String::new(),
        }
    }
}

pub fn create_feedback<R: FeedbackRepo>(repo: &R, new_feedback: NewFeedback) -> Result<Feedback> {
    let NewFeedback {
        author_id,
        author_name,
        rating,
        comment,
        subject,
    } = new_feedback;
    let rating = parse_rating(rating)?;
    let subject = parse_subject(&subject)?;
    let mut feedback = Feedback {
        id: Id::new(),
        author_id,
        author_name,
        rating,
        comment,
        subject,
        created_at: Timestamp::now(),
        sentiment: Sentiment::Neutral,
    }
    .auto_correct();
    feedback.validate()?;
    feedback.sentiment = classify(&feedback.comment);
    log::debug!(
        "Creating new feedback {} about {} (rating = {}, sentiment = {})",
        feedback.id,
        feedback.subject,
        feedback.rating,
        feedback.sentiment
    );
    repo.create_feedback(feedback.clone())?;
    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;

    fn new_feedback(rating: i64, comment: &str, subject: &str) -> NewFeedback {
        NewFeedback {
            author_id: "2".into(),
            author_name: "John Customer".into(),
            rating,
            comment: comment.into(),
            subject: subject.into(),
        }
    }

    #[test]
    fn create_valid_feedback() {
        let db = MockDb::default();
        let created = create_feedback(
            &db,
            new_feedback(5, "Excellent service and fast delivery", "Swiggy"),
        )
        .unwrap();
        let all = db.all_feedback().unwrap();
        assert_eq!(1, all.len());
        assert_eq!(created, all[0]);
        assert!(created.id.is_valid());
        assert_eq!("2", created.author_id.as_str());
        assert_eq!("John Customer", created.author_name);
        assert_eq!(RatingValue::new(5), created.rating);
        assert_eq!(Subject::Swiggy, created.subject);
        assert_eq!(classify(&created.comment), created.sentiment);
        assert_eq!(Sentiment::Positive, created.sentiment);
    }

    #[test]
    fn new_feedback_is_prepended() {
        let db = MockDb::default();
        let first = create_feedback(&db, new_feedback(3, "first", "Uber")).unwrap();
        let second = create_feedback(&db, new_feedback(3, "second", "Ola")).unwrap();
        let ids: Vec<_> = db.all_feedback().unwrap().into_iter().map(|f| f.id).collect();
        assert_eq!(vec![second.id, first.id], ids);
    }

    #[test]
    fn comment_is_trimmed() {
        let db = MockDb::default();
        let created = create_feedback(&db, new_feedback(4, "  terrible  ", "SBI")).unwrap();
        assert_eq!("terrible", created.comment);
        assert_eq!(Sentiment::Negative, created.sentiment);
    }

    #[test]
    fn rating_out_of_range() {
        let db = MockDb::default();
        for rating in [0, 6, -1] {
            let err = create_feedback(&db, new_feedback(rating, "ok", "Uber")).unwrap_err();
            assert!(matches!(err, Error::RatingValue));
            assert!(err.is_validation());
        }
        assert!(db.all_feedback().unwrap().is_empty());
    }

    #[test]
    fn empty_comment() {
        let db = MockDb::default();
        for comment in ["", "   \n"] {
            let err = create_feedback(&db, new_feedback(3, comment, "Uber")).unwrap_err();
            assert!(matches!(err, Error::EmptyComment));
        }
        assert!(db.all_feedback().unwrap().is_empty());
    }

    #[test]
    fn missing_or_unknown_subject() {
        let db = MockDb::default();
        for subject in ["", " ", "Corner Shop"] {
            let err = create_feedback(&db, new_feedback(3, "ok", subject)).unwrap_err();
            assert!(matches!(err, Error::Subject));
        }
        assert!(db.all_feedback().unwrap().is_empty());
    }

    #[test]
    fn subject_is_parsed_case_insensitive() {
        let db = MockDb::default();
        let created = create_feedback(&db, new_feedback(3, "ok", "hdfc bank")).unwrap();
        assert_eq!(Subject::HdfcBank, created.subject);
    }
}
