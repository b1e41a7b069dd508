#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # fdb-entities
//!
//! Reusable, agnostic domain entities for feedbackdb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod feedback;
pub mod id;
pub mod rating;
pub mod sentiment;
pub mod subject;
pub mod summary;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
