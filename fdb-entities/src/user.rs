use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id    : Id,
    pub name  : String,
    pub email : String,
    pub role  : Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role >= Role::Admin
    }
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumIter, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Role {
    #[default]
    Customer = 1,
    Admin    = 2,
}

/// A registered account of the mock user directory.
///
/// The password is kept as plain text: the directory only
/// simulates authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub user: User,
    pub password: String,
}

impl Account {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.user.email.eq_ignore_ascii_case(email) && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_order() {
        assert!(Role::Admin > Role::Customer);
        assert_eq!(Role::Customer, Role::default());
        assert_eq!("ADMIN", Role::Admin.to_string());
        assert_eq!(Role::Customer, "customer".parse().unwrap());
    }

    #[test]
    fn match_account_credentials() {
        let account = Account {
            user: User {
                id: "2".into(),
                name: "John Customer".into(),
                email: "customer@email.com".into(),
                role: Role::Customer,
            },
            password: "customer123".into(),
        };
        assert!(account.matches("Customer@Email.com", "customer123"));
        assert!(!account.matches("customer@email.com", "Customer123"));
        assert!(!account.matches("admin@feedback.com", "customer123"));
    }
}
