use anyhow::Result;
use fdb_boundary as json;
use fdb_core::entities::*;
use serde::Serialize;
use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Prints results either as human readable text or as JSON.
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    fn print_json<T: Serialize>(value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn message(&self, message: &str) {
        if self.json {
            println!("{}", serde_json::json!({ "message": message }));
        } else {
            println!("{message}");
        }
    }

    pub fn user(&self, user: User) -> Result<()> {
        let user = json::User::from(user);
        if self.json {
            return Self::print_json(&user);
        }
        let json::User {
            id,
            name,
            email,
            role,
        } = user;
        let role = match role {
            json::UserRole::Customer => "customer",
            json::UserRole::Admin => "admin",
        };
        println!("{name} <{email}> ({role}, id {id})");
        Ok(())
    }

    pub fn feedback(&self, feedback: Vec<Feedback>) -> Result<()> {
        if self.json {
            let records: Vec<_> = feedback.into_iter().map(json::Feedback::from).collect();
            return Self::print_json(&records);
        }
        if feedback.is_empty() {
            println!("No feedback found");
        }
        for f in feedback {
            let date = OffsetDateTime::from(f.created_at).format(DATE_FORMAT)?;
            println!(
                "[{}] {} {}/5 {} by {} on {}",
                f.id, f.subject, f.rating, f.sentiment, f.author_name, date
            );
            println!("    {}", f.comment);
        }
        Ok(())
    }

    pub fn summary(&self, summary: Summary) -> Result<()> {
        let summary = json::Summary::from(summary);
        if self.json {
            return Self::print_json(&summary);
        }
        let json::Summary {
            total_count,
            average_rating,
            sentiment_distribution,
            subject_distribution,
            rating_distribution,
        } = summary;
        let json::SentimentDistribution {
            positive,
            neutral,
            negative,
        } = sentiment_distribution;
        println!("Total feedback: {total_count}");
        println!("Average rating: {average_rating:.2}");
        println!("Sentiment: positive {positive}, neutral {neutral}, negative {negative}");
        if !subject_distribution.is_empty() {
            println!("Subjects:");
            let mut subjects: Vec<_> = subject_distribution.into_iter().collect();
            // Stable sort keeps the alphabetical order of ties
            subjects.sort_by(|(_, a), (_, b)| b.cmp(a));
            for (subject, count) in subjects {
                println!("  {subject}: {count}");
            }
        }
        if !rating_distribution.is_empty() {
            println!("Ratings:");
            for (rating, count) in rating_distribution.into_iter().rev() {
                println!("  {rating}: {count}");
            }
        }
        Ok(())
    }

    pub fn subjects(&self, subjects: impl Iterator<Item = Subject>) -> Result<()> {
        let names: Vec<_> = subjects.map(|s| s.to_string()).collect();
        if self.json {
            return Self::print_json(&names);
        }
        for name in names {
            println!("{name}");
        }
        Ok(())
    }

    pub fn sentiment(&self, sentiment: Sentiment) -> Result<()> {
        if self.json {
            return Self::print_json(&json::Sentiment::from(sentiment));
        }
        println!("{sentiment}");
        Ok(())
    }
}
