use super::prelude::*;
use crate::authorization::authorize_feedback_owner;

/// Deleting a feedback that does not exist is not an error.
pub fn delete_feedback<R: FeedbackRepo>(repo: &R, id: &str) -> Result<()> {
    if repo.delete_feedback(id)? {
        log::debug!("Deleted feedback {id}");
    } else {
        log::debug!("Feedback {id} does not exist: nothing to delete");
    }
    Ok(())
}

/// Deletes a feedback on behalf of its author or an admin.
pub fn delete_own_feedback<R: FeedbackRepo>(repo: &R, user: &User, id: &str) -> Result<()> {
    match repo.get_feedback(id) {
        Ok(feedback) => authorize_feedback_owner(user, &feedback)?,
        Err(RepoError::NotFound) => (),
        Err(err) => return Err(err.into()),
    }
    delete_feedback(repo, id)
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use fdb_entities::builders::*;

    fn db_with_feedback() -> MockDb {
        let db = MockDb::default();
        *db.feedback.borrow_mut() = vec![
            Feedback::build().id("a").author("2", "John").finish(),
            Feedback::build().id("b").author("3", "Sarah").finish(),
        ];
        db
    }

    #[test]
    fn delete_is_idempotent() {
        let db = db_with_feedback();
        delete_feedback(&db, "a").unwrap();
        let once = db.all_feedback().unwrap();
        delete_feedback(&db, "a").unwrap();
        let twice = db.all_feedback().unwrap();
        assert_eq!(once, twice);
        assert_eq!(1, twice.len());
        assert_eq!("b", twice[0].id.as_str());
    }

    #[test]
    fn delete_missing_feedback() {
        let db = db_with_feedback();
        assert!(delete_feedback(&db, "does_not_exist").is_ok());
        assert_eq!(2, db.all_feedback().unwrap().len());
    }

    #[test]
    fn only_author_or_admin_may_delete() {
        let db = db_with_feedback();
        let john = User::build().id("2").finish();
        assert!(matches!(
            delete_own_feedback(&db, &john, "b"),
            Err(Error::Forbidden)
        ));
        assert!(delete_own_feedback(&db, &john, "a").is_ok());
        assert!(delete_own_feedback(&db, &john, "a").is_ok());
        let admin = User::build().role(Role::Admin).finish();
        assert!(delete_own_feedback(&db, &admin, "b").is_ok());
        assert!(db.all_feedback().unwrap().is_empty());
    }
}
