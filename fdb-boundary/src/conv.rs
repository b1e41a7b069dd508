use super::*;
use fdb_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Empty id")]
    Id,
    #[error(transparent)]
    RatingValue(#[from] e::rating::RatingValueOutOfRange),
    #[error("Unknown subject: {0}")]
    Subject(String),
}

impl From<e::sentiment::Sentiment> for Sentiment {
    fn from(from: e::sentiment::Sentiment) -> Self {
        use e::sentiment::Sentiment as E;
        match from {
            E::Positive => Self::Positive,
            E::Neutral => Self::Neutral,
            E::Negative => Self::Negative,
        }
    }
}

impl From<Sentiment> for e::sentiment::Sentiment {
    fn from(from: Sentiment) -> Self {
        use Sentiment as S;
        match from {
            S::Positive => Self::Positive,
            S::Neutral => Self::Neutral,
            S::Negative => Self::Negative,
        }
    }
}

impl From<e::feedback::Feedback> for Feedback {
    fn from(from: e::feedback::Feedback) -> Self {
        let e::feedback::Feedback {
            id,
            author_id,
            author_name,
            rating,
            comment,
            subject,
            created_at,
            sentiment,
        } = from;
        Self {
            id: id.into(),
            author_id: author_id.into(),
            author_name,
            rating: rating.into(),
            comment,
            subject: subject.to_string(),
            created_at: created_at.into(),
            sentiment: sentiment.into(),
        }
    }
}

impl TryFrom<Feedback> for e::feedback::Feedback {
    type Error = ConversionError;
    fn try_from(from: Feedback) -> Result<Self, Self::Error> {
        let Feedback {
            id,
            author_id,
            author_name,
            rating,
            comment,
            subject,
            created_at,
            sentiment,
        } = from;
        let id = e::id::Id::from(id);
        if !id.is_valid() {
            return Err(ConversionError::Id);
        }
        let rating = e::rating::RatingValue::try_from(i64::from(rating))?;
        let subject = subject
            .parse()
            .map_err(|_| ConversionError::Subject(subject))?;
        Ok(Self {
            id,
            author_id: author_id.into(),
            author_name,
            rating,
            comment,
            subject,
            created_at: created_at.into(),
            sentiment: sentiment.into(),
        })
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role as E;
        match from {
            E::Customer => Self::Customer,
            E::Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        match from {
            UserRole::Customer => Self::Customer,
            UserRole::Admin => Self::Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            role,
        } = from;
        Self {
            id: id.into(),
            name,
            email,
            role: role.into(),
        }
    }
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
        } = from;
        Self {
            id: id.into(),
            name,
            email,
            role: role.into(),
        }
    }
}

impl From<e::user::Account> for Account {
    fn from(from: e::user::Account) -> Self {
        let e::user::Account { user, password } = from;
        Self {
            user: user.into(),
            password,
        }
    }
}

impl From<Account> for e::user::Account {
    fn from(from: Account) -> Self {
        let Account { user, password } = from;
        Self {
            user: user.into(),
            password,
        }
    }
}

impl From<e::summary::SentimentDistribution> for SentimentDistribution {
    fn from(from: e::summary::SentimentDistribution) -> Self {
        let e::summary::SentimentDistribution {
            positive,
            neutral,
            negative,
        } = from;
        Self {
            positive,
            neutral,
            negative,
        }
    }
}

impl From<e::summary::Summary> for Summary {
    fn from(from: e::summary::Summary) -> Self {
        let e::summary::Summary {
            total_count,
            average_rating,
            sentiment_distribution,
            subject_distribution,
            rating_distribution,
        } = from;
        Self {
            total_count,
            average_rating: average_rating.into(),
            sentiment_distribution: sentiment_distribution.into(),
            subject_distribution: subject_distribution
                .into_iter()
                .map(|(subject, count)| (subject.to_string(), count))
                .collect(),
            rating_distribution: rating_distribution
                .into_iter()
                .map(|(rating, count)| (rating.into(), count))
                .collect(),
        }
    }
}
