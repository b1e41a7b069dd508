use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use fdb_core::{
    entities::*,
    sentiment::classify,
    usecases as uc,
    util::{filter::FeedbackQuery, sort::SortByCreation as _},
};
use fdb_db_json::{InMemorySlots, JsonDb, JsonFileSlots, Slots};
use std::path::PathBuf;
use strum::IntoEnumIterator as _;

use crate::{
    config::{Config, StorageBackend},
    output::Output,
};

/// Collect customer feedback and analyze its sentiment
#[derive(Debug, Parser)]
#[command(name = "feedbackdb", version)]
pub struct Cli {
    /// Configuration file [default: feedbackdb.toml]
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Directory of the stored data
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start a new session
    Login { email: String, password: String },
    /// Register a new account and start a session
    Signup {
        name: String,
        email: String,
        password: String,
        /// Register as administrator
        #[arg(long)]
        admin: bool,
    },
    /// End the current session
    Logout,
    /// Show the logged in user
    Whoami,
    /// Submit a new feedback
    Submit {
        /// Star rating from 1 to 5
        #[arg(long, allow_negative_numbers = true)]
        rating: i64,
        #[arg(long)]
        subject: String,
        #[arg(required = true)]
        comment: Vec<String>,
    },
    /// Change your own feedback
    Edit {
        id: String,
        #[arg(long, allow_negative_numbers = true)]
        rating: Option<i64>,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Delete your own feedback (admins: any feedback)
    Delete { id: String },
    /// List your own feedback, newest first
    Mine,
    /// List and filter all feedback (admins only)
    List {
        #[arg(long, allow_negative_numbers = true)]
        rating: Option<i64>,
        #[arg(long)]
        subject: Option<String>,
        /// Search in comments and author names
        #[arg(long)]
        search: Option<String>,
    },
    /// Show summary statistics (admins only)
    Stats,
    /// List all subjects that can be rated
    Subjects,
    /// Show the sentiment of a text
    Classify {
        #[arg(required = true)]
        text: Vec<String>,
    },
}

pub fn run() -> Result<()> {
    let Cli {
        config,
        data_dir,
        json,
        command,
    } = Cli::parse();
    let mut cfg = Config::try_load_from_file_or_default(config.as_deref())
        .context("Unable to load configuration")?;
    if let Some(dir) = data_dir {
        cfg.override_data_dir(dir);
    }
    let output = Output::new(json);
    match cfg.storage.backend {
        StorageBackend::JsonFile { dir } => {
            log::info!("Opening data directory {}", dir.display());
            let slots = JsonFileSlots::try_new(&dir)
                .with_context(|| format!("Unable to open data directory {}", dir.display()))?;
            execute(&JsonDb::open(slots, cfg.seed.enabled), command, &output)
        }
        StorageBackend::InMemory => {
            let slots = InMemorySlots::new();
            execute(&JsonDb::open(slots, cfg.seed.enabled), command, &output)
        }
    }
}

fn execute<S: Slots>(db: &JsonDb<S>, command: Command, output: &Output) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            let credentials = uc::Credentials {
                email: &email,
                password: &password,
            };
            let user = uc::login(db, &credentials)?;
            output.user(user)?;
        }
        Command::Signup {
            name,
            email,
            password,
            admin,
        } => {
            let role = if admin { Role::Admin } else { Role::Customer };
            let new_user = uc::NewUser {
                name,
                email,
                password,
                role,
            };
            let user = uc::signup(db, new_user)?;
            output.user(user)?;
        }
        Command::Logout => {
            uc::logout(db)?;
            output.message("Logged out");
        }
        Command::Whoami => match uc::current_user(db)? {
            Some(user) => output.user(user)?,
            None => output.message("Not logged in"),
        },
        Command::Submit {
            rating,
            subject,
            comment,
        } => {
            let user = uc::authorize_user(db, Role::Customer)?;
            let new_feedback = uc::NewFeedback {
                rating,
                subject,
                comment: comment.join(" "),
                ..uc::NewFeedback::by_author(&user)
            };
            let feedback = uc::create_feedback(db, new_feedback)?;
            output.feedback(vec![feedback])?;
        }
        Command::Edit {
            id,
            rating,
            subject,
            comment,
        } => {
            let user = uc::authorize_user(db, Role::Customer)?;
            let update = uc::UpdateFeedback {
                rating,
                comment,
                subject,
            };
            let feedback = uc::update_own_feedback(db, &user, &id, update)?;
            output.feedback(vec![feedback])?;
        }
        Command::Delete { id } => {
            let user = uc::authorize_user(db, Role::Customer)?;
            uc::delete_own_feedback(db, &user, &id)?;
            output.message(&format!("Deleted feedback {id}"));
        }
        Command::Mine => {
            let user = uc::authorize_user(db, Role::Customer)?;
            let mut feedback = uc::list_feedback_by_author(db, user.id.as_str())?;
            feedback.sort_by_newest_first();
            output.feedback(feedback)?;
        }
        Command::List {
            rating,
            subject,
            search,
        } => {
            uc::authorize_user(db, Role::Admin)?;
            let query = FeedbackQuery {
                rating: rating.map(uc::parse_rating).transpose()?,
                subject: subject.as_deref().map(uc::parse_subject).transpose()?,
                text: search,
            };
            let feedback = uc::query_feedback(db, &query)?;
            output.feedback(feedback)?;
        }
        Command::Stats => {
            uc::authorize_user(db, Role::Admin)?;
            let summary = uc::summarize_feedback(db)?;
            output.summary(summary)?;
        }
        Command::Subjects => {
            output.subjects(Subject::iter())?;
        }
        Command::Classify { text } => {
            let sentiment = classify(&text.join(" "));
            output.sentiment(sentiment)?;
        }
    }
    Ok(())
}
