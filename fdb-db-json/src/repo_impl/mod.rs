use super::*;

mod account;
mod feedback;
mod session;
