pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{feedback_builder::*, user_builder::*};

pub mod feedback_builder {

    use super::*;
    use crate::{feedback::*, id::*, rating::*, sentiment::*, subject::*, time::*};

    #[derive(Debug)]
    pub struct FeedbackBuild {
        feedback: Feedback,
    }

    impl FeedbackBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.feedback.id = id.into();
            self
        }
        pub fn author(mut self, id: &str, name: &str) -> Self {
            self.feedback.author_id = id.into();
            self.feedback.author_name = name.into();
            self
        }
        pub fn rating(mut self, v: u8) -> Self {
            self.feedback.rating = RatingValue::new(v);
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.feedback.comment = comment.into();
            self
        }
        pub fn subject(mut self, subject: Subject) -> Self {
            self.feedback.subject = subject;
            self
        }
        pub fn created_at(mut self, ts: Timestamp) -> Self {
            self.feedback.created_at = ts;
            self
        }
        pub fn sentiment(mut self, sentiment: Sentiment) -> Self {
            self.feedback.sentiment = sentiment;
            self
        }
        pub fn finish(self) -> Feedback {
            self.feedback
        }
    }

    impl Builder for Feedback {
        type Build = FeedbackBuild;
        fn build() -> FeedbackBuild {
            FeedbackBuild {
                feedback: Feedback {
                    id: Id::new(),
                    author_id: Id::new(),
                    author_name: "".into(),
                    rating: RatingValue::max(),
                    comment: "".into(),
                    subject: Subject::Swiggy,
                    created_at: Timestamp::now(),
                    sentiment: Sentiment::Neutral,
                },
            }
        }
    }

    #[test]
    fn default_feedback() {
        let f = Feedback::build().finish();
        assert!(f.id.is_valid());
        assert!(f.rating.is_valid());
        let f = Feedback::build().id("x").rating(1).finish();
        assert_eq!("x", f.id.as_str());
        assert_eq!(RatingValue::min(), f.rating);
    }
}

pub mod user_builder {

    use super::*;
    use crate::user::*;

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: crate::id::Id::new(),
                    name: "".into(),
                    email: "".into(),
                    role: Role::default(),
                },
            }
        }
    }
}
