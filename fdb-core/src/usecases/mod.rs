mod authorize;
mod create_feedback;
mod delete_feedback;
mod error;
mod list_feedback;
mod login;
mod register;
mod summarize_feedback;
mod update_feedback;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, create_feedback::*, delete_feedback::*, error::Error, list_feedback::*,
    login::*, register::*, summarize_feedback::*, update_feedback::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
    pub use crate::repositories::Error as RepoError;
}
use self::prelude::*;

/// Parses a subject from user input.
pub fn parse_subject(s: &str) -> Result<Subject> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::Subject);
    }
    Ok(s.parse()?)
}

pub fn parse_rating(value: i64) -> Result<RatingValue> {
    Ok(RatingValue::try_from(value)?)
}
