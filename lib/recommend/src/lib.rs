//! # shoprank recommend
//!
//! The [`Recommender`] ties the pieces together. A query enters one of the
//! scoring adapters, the raw scores go through the ranking engine, and the
//! ranked ids are joined with catalog fields:
//!
//! ```text
//! item id ─┐
//!          ├─> similarity oracle ─┐
//! text ────┘                      ├─> rank ─> enrich ─> Vec<Record>
//! user id ──> rating oracle ──────┘
//! ```
//!
//! Artifacts are loaded once at startup (see `shoprank-storage`) and shared
//! read-only through `Arc` for the life of the process.

pub mod config;
pub mod recommender;
pub mod request;

pub use config::RecommenderConfig;
pub use recommender::{Recommender, RecommenderStats};
pub use request::{Query, RecommendRequest};
