// Low-level storage access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The stored state is corrupt: {0}")]
    CorruptState(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait FeedbackRepo {
    /// Inserts a new feedback at the head of the collection.
    fn create_feedback(&self, feedback: Feedback) -> Result<()>;

    fn get_feedback(&self, id: &str) -> Result<Feedback>;

    /// Replaces the stored feedback with the same id.
    fn update_feedback(&self, feedback: &Feedback) -> Result<()>;

    /// Returns `false` if there was nothing to delete.
    fn delete_feedback(&self, id: &str) -> Result<bool>;

    /// All feedback in collection order.
    fn all_feedback(&self) -> Result<Vec<Feedback>>;

    fn feedback_of_author(&self, author_id: &str) -> Result<Vec<Feedback>> {
        Ok(self
            .all_feedback()?
            .into_iter()
            .filter(|f| f.author_id.as_str() == author_id)
            .collect())
    }

    fn count_feedback(&self) -> Result<usize> {
        Ok(self.all_feedback()?.len())
    }
}

pub trait AccountRepo {
    fn create_account(&self, account: Account) -> Result<()>;
    fn try_get_account_by_email(&self, email: &str) -> Result<Option<Account>>;
    fn all_users(&self) -> Result<Vec<User>>;
}

pub trait SessionRepo {
    fn current_user(&self) -> Result<Option<User>>;
    fn set_current_user(&self, user: &User) -> Result<()>;
    fn clear_current_user(&self) -> Result<()>;
}
