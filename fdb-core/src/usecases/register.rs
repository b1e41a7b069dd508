use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Adds a new account to the user directory and starts a session for it.
pub fn signup<R>(repo: &R, new_user: NewUser) -> Result<User>
where
    R: AccountRepo + SessionRepo,
{
    let NewUser {
        name,
        email,
        password,
        role,
    } = new_user;
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let email = email.trim().to_owned();
    if !validate::is_valid_email(&email) {
        return Err(Error::Email);
    }
    if password.is_empty() {
        return Err(Error::Password);
    }
    if repo.try_get_account_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let user = User {
        id: Id::new(),
        name,
        email,
        role,
    };
    log::debug!("Creating new user: email = {}", user.email);
    match repo.create_account(Account {
        user: user.clone(),
        password,
    }) {
        Ok(()) => (),
        Err(RepoError::AlreadyExists) => return Err(Error::UserExists),
        Err(err) => return Err(err.into()),
    }
    repo.set_current_user(&user)?;
    Ok(user)
}
