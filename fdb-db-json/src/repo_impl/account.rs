use fdb_core::repositories::{AccountRepo, Error as RepoError};

use super::*;

type Result<T> = std::result::Result<T, RepoError>;

impl<S: Slots> AccountRepo for JsonDb<S> {
    fn create_account(&self, account: Account) -> Result<()> {
        let mut registered = self.registered_accounts.write();
        let email = &account.user.email;
        if self
            .builtin_accounts
            .iter()
            .chain(registered.iter())
            .any(|a| a.user.email.eq_ignore_ascii_case(email))
        {
            return Err(RepoError::AlreadyExists);
        }
        let mut modified = registered.clone();
        modified.push(account);
        let records: Vec<_> = modified.iter().cloned().map(json::Account::from).collect();
        self.slots.save(ACCOUNTS_KEY, &records)?;
        *registered = modified;
        Ok(())
    }

    fn try_get_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        let registered = self.registered_accounts.read();
        Ok(self
            .builtin_accounts
            .iter()
            .chain(registered.iter())
            .find(|a| a.user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        let registered = self.registered_accounts.read();
        Ok(self
            .builtin_accounts
            .iter()
            .chain(registered.iter())
            .map(|a| a.user.clone())
            .collect())
    }
}
