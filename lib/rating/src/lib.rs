//! # shoprank rating
//!
//! Personalised scoring: a collaborative-filtering [`RatingOracle`] (the
//! bundled implementation is [`SvdModel`]) is asked for a predicted rating of
//! every candidate item for one user. Ordering is left to the ranking engine.

pub mod adapter;
pub mod oracle;
pub mod svd;
pub mod user;

pub use adapter::{predict_all, score_for_user};
pub use oracle::RatingOracle;
pub use svd::SvdModel;
pub use user::UserId;
