use crate::entities::{Feedback, Role, User};

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
    #[error("not the author")]
    NotTheAuthor,
}

pub type Result<T> = StdResult<T, Error>;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

/// Authors may manage their own feedback, admins may manage all.
pub fn authorize_feedback_owner(user: &User, feedback: &Feedback) -> Result<()> {
    if user.is_admin() || user.id == feedback.author_id {
        return Ok(());
    }
    Err(Error::NotTheAuthor)
}
