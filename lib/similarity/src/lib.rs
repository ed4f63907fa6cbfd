//! # shoprank similarity
//!
//! Topic-similarity scoring for item-based and free-text queries.
//!
//! ## Architecture
//!
//! ```text
//! tokens ──> Dictionary ──> TfidfModel ──> LsiModel ──> SimilarityIndex
//!            (doc2bow)      (weights)      (topics)     (cosine per item)
//! ```
//!
//! The four artifacts are composed into a [`TopicSimilarity`], which
//! implements [`SimilarityOracle`]. The adapter functions in [`adapter`]
//! turn a query into per-item scores ready for ranking.

pub mod adapter;
pub mod dictionary;
pub mod index;
pub mod lsi;
pub mod oracle;
pub mod tfidf;

pub use adapter::{score_by_item, score_by_text, ItemScores};
pub use dictionary::Dictionary;
pub use index::SimilarityIndex;
pub use lsi::LsiModel;
pub use oracle::{SimilarityOracle, TopicSimilarity};
pub use tfidf::TfidfModel;
