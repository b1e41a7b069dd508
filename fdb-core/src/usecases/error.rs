use crate::{authorization, repositories, util::validate::FeedbackInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Missing or unknown subject")]
    Subject,
    #[error("Missing author")]
    Author,
    #[error("Invalid name")]
    Name,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// Errors caused by invalid user input, i.e. not by the storage.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::RatingValue
                | Self::EmptyComment
                | Self::Subject
                | Self::Author
                | Self::Name
                | Self::Email
                | Self::Password
        )
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(repositories::Error::NotFound))
    }
}

impl From<FeedbackInvalidation> for Error {
    fn from(err: FeedbackInvalidation) -> Self {
        match err {
            FeedbackInvalidation::RatingValue => Self::RatingValue,
            FeedbackInvalidation::EmptyComment => Self::EmptyComment,
            FeedbackInvalidation::Author => Self::Author,
        }
    }
}

impl From<authorization::Error> for Error {
    fn from(_: authorization::Error) -> Self {
        Self::Forbidden
    }
}

impl From<fdb_entities::rating::RatingValueOutOfRange> for Error {
    fn from(_: fdb_entities::rating::RatingValueOutOfRange) -> Self {
        Self::RatingValue
    }
}

impl From<strum::ParseError> for Error {
    fn from(_: strum::ParseError) -> Self {
        Self::Subject
    }
}
