//! # fdb-core
//!
//! Business logic of feedbackdb: the feedback store use cases,
//! the keyword based sentiment classifier and the analytics aggregator.

pub mod analytics;
pub mod authorization;
pub mod repositories;
pub mod seed;
pub mod sentiment;
pub mod text;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use fdb_entities::{
        feedback::*, id::*, rating::*, sentiment::*, subject::*, summary::*, time::*, user::*,
    };
}
