use super::prelude::*;
use crate::analytics::{summarize, Summary};

pub fn summarize_feedback<R: FeedbackRepo>(repo: &R) -> Result<Summary> {
    let all = repo.all_feedback()?;
    Ok(summarize(&all))
}
