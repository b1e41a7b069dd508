use super::prelude::*;
use crate::seed::demo_accounts;

use std::cell::RefCell;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub feedback: RefCell<Vec<Feedback>>,
    pub accounts: RefCell<Vec<Account>>,
    pub session: RefCell<Option<User>>,
}

impl MockDb {
    pub fn with_demo_accounts() -> Self {
        Self {
            accounts: RefCell::new(demo_accounts()),
            ..Default::default()
        }
    }
}

impl FeedbackRepo for MockDb {
    fn create_feedback(&self, feedback: Feedback) -> RepoResult<()> {
        if self.feedback.borrow().iter().any(|f| f.id == feedback.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.feedback.borrow_mut().insert(0, feedback);
        Ok(())
    }

    fn get_feedback(&self, id: &str) -> RepoResult<Feedback> {
        self.feedback
            .borrow()
            .iter()
            .find(|f| f.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn update_feedback(&self, feedback: &Feedback) -> RepoResult<()> {
        let mut all = self.feedback.borrow_mut();
        let stored = all
            .iter_mut()
            .find(|f| f.id == feedback.id)
            .ok_or(RepoError::NotFound)?;
        *stored = feedback.clone();
        Ok(())
    }

    fn delete_feedback(&self, id: &str) -> RepoResult<bool> {
        let mut all = self.feedback.borrow_mut();
        let len = all.len();
        all.retain(|f| f.id.as_str() != id);
        Ok(all.len() < len)
    }

    fn all_feedback(&self) -> RepoResult<Vec<Feedback>> {
        Ok(self.feedback.borrow().clone())
    }
}

impl AccountRepo for MockDb {
    fn create_account(&self, account: Account) -> RepoResult<()> {
        if self.try_get_account_by_email(&account.user.email)?.is_some() {
            return Err(RepoError::AlreadyExists);
        }
        self.accounts.borrow_mut().push(account);
        Ok(())
    }

    fn try_get_account_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        Ok(self
            .accounts
            .borrow()
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.accounts.borrow().iter().map(|a| a.user.clone()).collect())
    }
}

impl SessionRepo for MockDb {
    fn current_user(&self) -> RepoResult<Option<User>> {
        Ok(self.session.borrow().clone())
    }

    fn set_current_user(&self, user: &User) -> RepoResult<()> {
        *self.session.borrow_mut() = Some(user.clone());
        Ok(())
    }

    fn clear_current_user(&self) -> RepoResult<()> {
        *self.session.borrow_mut() = None;
        Ok(())
    }
}
