use fdb_core::repositories::{Error as RepoError, FeedbackRepo};

use super::*;

type Result<T> = std::result::Result<T, RepoError>;

impl<S: Slots> FeedbackRepo for JsonDb<S> {
    fn create_feedback(&self, feedback: Feedback) -> Result<()> {
        self.modify_feedback(|all| {
            if all.iter().any(|f| f.id == feedback.id) {
                return Err(RepoError::AlreadyExists);
            }
            all.insert(0, feedback);
            Ok(())
        })
    }

    fn get_feedback(&self, id: &str) -> Result<Feedback> {
        self.feedback
            .read()
            .iter()
            .find(|f| f.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn update_feedback(&self, feedback: &Feedback) -> Result<()> {
        self.modify_feedback(|all| {
            let stored = all
                .iter_mut()
                .find(|f| f.id == feedback.id)
                .ok_or(RepoError::NotFound)?;
            *stored = feedback.clone();
            Ok(())
        })
    }

    fn delete_feedback(&self, id: &str) -> Result<bool> {
        self.modify_feedback(|all| {
            let len = all.len();
            all.retain(|f| f.id.as_str() != id);
            Ok(all.len() < len)
        })
    }

    fn all_feedback(&self) -> Result<Vec<Feedback>> {
        Ok(self.feedback.read().clone())
    }

    fn count_feedback(&self) -> Result<usize> {
        Ok(self.feedback.read().len())
    }
}
