use super::{parse_rating, parse_subject, prelude::*};
use crate::{
    authorization::authorize_feedback_owner,
    sentiment::classify,
    util::validate::{AutoCorrect, Validate},
};

/// Unvalidated input for changing an existing feedback.
///
/// Only the supplied fields are changed.
#[derive(Debug, Clone, Default)]
pub struct UpdateFeedback {
    pub rating: Option<i64>,
    pub comment: Option<String>,
    pub subject: Option<String>,
}

impl TryFrom<UpdateFeedback> for FeedbackUpdate {
    type Error = Error;
    fn try_from(from: UpdateFeedback) -> Result<Self> {
        let UpdateFeedback {
            rating,
            comment,
            subject,
        } = from;
        let rating = rating.map(parse_rating).transpose()?;
        let subject = subject.as_deref().map(parse_subject).transpose()?;
        let update = FeedbackUpdate {
            rating,
            comment,
            subject,
        }
        .auto_correct();
        update.validate()?;
        Ok(update)
    }
}

fn apply_update(mut feedback: Feedback, update: FeedbackUpdate) -> Feedback {
    let FeedbackUpdate {
        rating,
        comment,
        subject,
    } = update;
    if let Some(rating) = rating {
        feedback.rating = rating;
    }
    if let Some(subject) = subject {
        feedback.subject = subject;
    }
    if let Some(comment) = comment {
        feedback.sentiment = classify(&comment);
        feedback.comment = comment;
    }
    feedback
}

pub fn update_feedback<R: FeedbackRepo>(
    repo: &R,
    id: &str,
    update: UpdateFeedback,
) -> Result<Feedback> {
    let update = FeedbackUpdate::try_from(update)?;
    let feedback = repo.get_feedback(id)?;
    log::debug!("Updating feedback {id}: {update:?}");
    let feedback = apply_update(feedback, update);
    repo.update_feedback(&feedback)?;
    Ok(feedback)
}

/// Updates a feedback on behalf of its author or an admin.
pub fn update_own_feedback<R: FeedbackRepo>(
    repo: &R,
    user: &User,
    id: &str,
    update: UpdateFeedback,
) -> Result<Feedback> {
    let feedback = repo.get_feedback(id)?;
    authorize_feedback_owner(user, &feedback)?;
    update_feedback(repo, id, update)
}
