use super::prelude::*;
use crate::util::filter::{feedback_by_query, FeedbackQuery};

pub fn get_feedback<R: FeedbackRepo>(repo: &R, id: &str) -> Result<Feedback> {
    Ok(repo.get_feedback(id)?)
}

pub fn list_all_feedback<R: FeedbackRepo>(repo: &R) -> Result<Vec<Feedback>> {
    Ok(repo.all_feedback()?)
}

pub fn list_feedback_by_author<R: FeedbackRepo>(repo: &R, author_id: &str) -> Result<Vec<Feedback>> {
    Ok(repo.feedback_of_author(author_id)?)
}

pub fn query_feedback<R: FeedbackRepo>(repo: &R, query: &FeedbackQuery) -> Result<Vec<Feedback>> {
    let all = repo.all_feedback()?;
    if query.is_empty() {
        return Ok(all);
    }
    Ok(all.into_iter().filter(feedback_by_query(query)).collect())
}
