use fdb_core::repositories::{Error as RepoError, SessionRepo};

use super::*;

type Result<T> = std::result::Result<T, RepoError>;

impl<S: Slots> SessionRepo for JsonDb<S> {
    fn current_user(&self) -> Result<Option<User>> {
        match self.slots.load::<json::User>(CURRENT_USER_KEY) {
            Ok(user) => Ok(user.map(User::from)),
            Err(RepoError::CorruptState(err)) => {
                log::warn!("Ignoring malformed session: {err}");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn set_current_user(&self, user: &User) -> Result<()> {
        self.slots
            .save(CURRENT_USER_KEY, &json::User::from(user.clone()))
    }

    fn clear_current_user(&self) -> Result<()> {
        self.slots.remove(CURRENT_USER_KEY)
    }
}
