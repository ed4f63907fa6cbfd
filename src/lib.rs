//! # shoprank
//!
//! Ranks catalog items for a shopper under three query modes:
//!
//! - **item**: more like this catalog item (topic similarity, same
//!   sub-category and higher catalog rating win ties)
//! - **text**: more like this free-text description
//! - **user**: highest predicted rating for this user (collaborative filtering)
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! shoprank serve --data-dir ./data --http-port 8080
//! curl 'localhost:8080/recommend/text?q=ao%20thun&nums=10'
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use shoprank::prelude::*;
//!
//! let artifacts = ArtifactLoader::new("./data")?.load()?;
//! let recommender = Recommender::from_artifacts(artifacts, RecommenderConfig::default())?;
//!
//! for record in recommender.recommend_by_item(ProductId(190), 4)? {
//!     println!("{} {:.3}", record.product_name, record.score);
//! }
//! # Ok::<(), shoprank::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! - `shoprank-core` - catalog, text normalisation, ranking engine, catalog join
//! - `shoprank-similarity` - dictionary / TF-IDF / LSI / cosine index oracle
//! - `shoprank-rating` - biased SVD rating oracle and user validation
//! - `shoprank-storage` - artifact loading (JSON, gzip, bincode, checksums)
//! - `shoprank-recommend` - the [`Recommender`] facade
//! - `shoprank-api` - HTTP endpoints

pub use shoprank_core::{
    enrich, normalize, rank, Catalog, Error, Item, ProductId, QueryMode, RankQuery, Record,
    Result, ScoredItem, StopWords,
};
pub use shoprank_rating::{RatingOracle, SvdModel, UserId};
pub use shoprank_similarity::{SimilarityOracle, TopicSimilarity};
pub use shoprank_storage::{ArtifactLoader, Artifacts};
pub use shoprank_recommend::{Query, RecommendRequest, Recommender, RecommenderConfig};
pub use shoprank_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ArtifactLoader, Catalog, Error, Item, ProductId, RatingOracle, Record, Recommender,
        RecommenderConfig, RecommendRequest, Result, SimilarityOracle, StopWords,
    };
}
