//! Fixed example data for the first start.

use time::macros::datetime;

use crate::{entities::*, sentiment::classify};

fn seed_record(
    id: &str,
    (author_id, author_name): (&str, &str),
    rating: u8,
    comment: &str,
    subject: Subject,
    created_at: Timestamp,
) -> Feedback {
    Feedback {
        id: id.into(),
        author_id: author_id.into(),
        author_name: author_name.into(),
        rating: RatingValue::new(rating),
        comment: comment.into(),
        subject,
        created_at,
        sentiment: classify(comment),
    }
}

/// Used when no feedback has been stored yet.
pub fn seed_feedback() -> Vec<Feedback> {
    const JOHN: (&str, &str) = ("2", "John Customer");
    vec![
        seed_record(
            "1",
            JOHN,
            5,
            "Excellent service! The food delivery was quick and the quality was outstanding.",
            Subject::Swiggy,
            datetime!(2024-01-15 00:00 UTC).into(),
        ),
        seed_record(
            "2",
            JOHN,
            4,
            "Good banking experience, but the wait time could be improved.",
            Subject::Sbi,
            datetime!(2024-01-10 00:00 UTC).into(),
        ),
        seed_record(
            "3",
            ("3", "Sarah Johnson"),
            2,
            "Food was cold when delivered and customer service was unresponsive.",
            Subject::Zomato,
            datetime!(2024-01-08 00:00 UTC).into(),
        ),
        seed_record(
            "4",
            ("4", "Mike Wilson"),
            3,
            "Average experience. The app interface needs improvement.",
            Subject::Icici,
            datetime!(2024-01-05 00:00 UTC).into(),
        ),
        seed_record(
            "5",
            ("5", "Emma Davis"),
            5,
            "Amazing food quality and super fast delivery! Highly recommended.",
            Subject::Swiggy,
            datetime!(2024-01-03 00:00 UTC).into(),
        ),
    ]
}

/// The built-in accounts of the mock user directory.
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account {
            user: User {
                id: "1".into(),
                name: "Admin User".into(),
                email: "admin@feedback.com".into(),
                role: Role::Admin,
            },
            password: "admin123".into(),
        },
        Account {
            user: User {
                id: "2".into(),
                name: "John Customer".into(),
                email: "customer@email.com".into(),
                role: Role::Customer,
            },
            password: "customer123".into(),
        },
    ]
}
