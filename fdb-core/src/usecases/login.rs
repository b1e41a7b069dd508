use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Checks the credentials against the user directory
/// and starts a new session.
pub fn login<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: AccountRepo + SessionRepo,
{
    let user = repo
        .try_get_account_by_email(login.email.trim())?
        .filter(|account| account.matches(login.email.trim(), login.password))
        .map(|account| account.user)
        .ok_or(Error::Credentials)?;
    log::debug!("User {} logged in", user.id);
    repo.set_current_user(&user)?;
    Ok(user)
}

pub fn logout<R: SessionRepo>(repo: &R) -> Result<()> {
    Ok(repo.clear_current_user()?)
}

pub fn current_user<R: SessionRepo>(repo: &R) -> Result<Option<User>> {
    Ok(repo.current_user()?)
}
