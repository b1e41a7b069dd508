use super::prelude::*;
use crate::authorization::authorize_role;

/// Returns the logged in user if it has at least the required role.
pub fn authorize_user<R: SessionRepo>(repo: &R, min_required_role: Role) -> Result<User> {
    let user = repo.current_user()?.ok_or(Error::Unauthorized)?;
    authorize_role(&user, min_required_role)?;
    Ok(user)
}
