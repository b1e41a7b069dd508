//! # fdb-db-json
//!
//! Persistence adapter of feedbackdb. The whole feedback collection
//! is kept in memory and written back into a JSON persistence slot
//! after every mutation.

use fdb_boundary as json;
use fdb_core::{entities::*, repositories as repo, seed, sentiment::classify};
use parking_lot::RwLock;

type RepoResult<T> = std::result::Result<T, repo::Error>;

mod repo_impl;
pub mod slots;

pub use self::slots::{InMemorySlots, JsonFileSlots, Slots};

pub const FEEDBACK_DATA_KEY: &str = "feedback_data";
pub const CURRENT_USER_KEY: &str = "feedback_user";
pub const ACCOUNTS_KEY: &str = "feedback_accounts";

pub struct JsonDb<S> {
    slots: S,
    feedback: RwLock<Vec<Feedback>>,
    builtin_accounts: Vec<Account>,
    registered_accounts: RwLock<Vec<Account>>,
}

impl<S: Slots> JsonDb<S> {
    /// Restores the persisted state.
    ///
    /// If no feedback has been stored yet or the stored data is
    /// unreadable the collection starts with the seed dataset,
    /// or empty if `seed_enabled` is `false`.
    pub fn open(slots: S, seed_enabled: bool) -> Self {
        let feedback = load_feedback(&slots).unwrap_or_else(|| {
            if seed_enabled {
                log::info!("Starting with the seed dataset");
                seed::seed_feedback()
            } else {
                Vec::new()
            }
        });
        let registered_accounts = load_accounts(&slots);
        Self {
            slots,
            feedback: RwLock::new(feedback),
            builtin_accounts: seed::demo_accounts(),
            registered_accounts: RwLock::new(registered_accounts),
        }
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    fn flush_feedback(&self, feedback: &[Feedback]) -> RepoResult<()> {
        let records: Vec<_> = feedback.iter().cloned().map(json::Feedback::from).collect();
        self.slots
            .save(FEEDBACK_DATA_KEY, &records)
            .inspect_err(|err| log::error!("Failed to store feedback: {err}"))
    }

    /// Applies `modify` to a copy of the collection that replaces
    /// the current one only after it has been stored successfully.
    fn modify_feedback<T>(
        &self,
        modify: impl FnOnce(&mut Vec<Feedback>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let mut feedback = self.feedback.write();
        let mut modified = feedback.clone();
        let result = modify(&mut modified)?;
        self.flush_feedback(&modified)?;
        *feedback = modified;
        Ok(result)
    }
}

fn load_feedback<S: Slots>(slots: &S) -> Option<Vec<Feedback>> {
    let records = match slots.load::<Vec<json::Feedback>>(FEEDBACK_DATA_KEY) {
        Ok(Some(records)) => records,
        Ok(None) => {
            log::info!("No stored feedback found");
            return None;
        }
        Err(err) => {
            log::warn!("Unable to read stored feedback: {err}");
            return None;
        }
    };
    let feedback = records
        .into_iter()
        .map(Feedback::try_from)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| log::warn!("Invalid stored feedback: {err}"))
        .ok()?;
    log::debug!("Loaded {} stored feedback records", feedback.len());
    Some(feedback.into_iter().map(retag_sentiment).collect())
}

fn retag_sentiment(mut feedback: Feedback) -> Feedback {
    let sentiment = classify(&feedback.comment);
    if sentiment != feedback.sentiment {
        log::warn!(
            "Stale sentiment of feedback {}: {} instead of {}",
            feedback.id,
            feedback.sentiment,
            sentiment
        );
        feedback.sentiment = sentiment;
    }
    feedback
}

fn load_accounts<S: Slots>(slots: &S) -> Vec<Account> {
    match slots.load::<Vec<json::Account>>(ACCOUNTS_KEY) {
        Ok(accounts) => accounts
            .unwrap_or_default()
            .into_iter()
            .map(Account::from)
            .collect(),
        Err(err) => {
            log::warn!("Unable to read registered accounts: {err}");
            Vec::new()
        }
    }
}
