//! # shoprank core
//!
//! Core library for the shoprank recommendation service.
//!
//! - [`Catalog`] - read-only item table keyed by [`ProductId`]
//! - [`normalize`](normalize::normalize) - raw text to scoring tokens
//! - [`rank`](rank::rank) - score sorting, exclusion, tie-breaks and truncation
//! - [`enrich`](join::enrich) - joins ranked ids with display fields
//!
//! ## Example
//!
//! ```rust
//! use shoprank_core::{Catalog, Item, ProductId, RankQuery, ScoredItem, rank, enrich};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new(1u64, "Query item").with_sub_category("X"),
//!     Item::new(2u64, "Same shelf").with_sub_category("X").with_rating(4.0),
//!     Item::new(3u64, "Other shelf").with_sub_category("Y").with_rating(5.0),
//! ]).unwrap();
//!
//! let scores = vec![
//!     ScoredItem::new(1u64, 1.0),
//!     ScoredItem::new(2u64, 0.8),
//!     ScoredItem::new(3u64, 0.8),
//! ];
//! let ranked = rank(scores, &RankQuery::item(ProductId(1), Some("X"), 2), &catalog);
//! let records = enrich(&ranked, &catalog).unwrap();
//! assert_eq!(records[0].product_name, "Same shelf");
//! ```

pub mod catalog;
pub mod error;
pub mod item;
pub mod join;
pub mod normalize;
pub mod rank;
pub mod vector;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use item::{Item, ProductId, Record};
pub use join::enrich;
pub use normalize::{normalize, StopWords};
pub use rank::{rank, QueryMode, RankQuery, ScoredItem, OVERFETCH_FACTOR};
pub use vector::{SparseVector, Vector};
