use crate::config::RecommenderConfig;
use crate::request::{Query, RecommendRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shoprank_core::{
    enrich, normalize, rank, Catalog, ProductId, RankQuery, Record, Result, StopWords,
};
use shoprank_rating::{score_for_user, RatingOracle};
use shoprank_similarity::{score_by_item, score_by_text, SimilarityOracle};
use shoprank_storage::Artifacts;
use std::sync::Arc;
use tracing::debug;

/// Summary of the loaded state, for health reporting
#[derive(Debug, Clone, Serialize)]
pub struct RecommenderStats {
    pub catalog_items: usize,
    pub indexed_items: usize,
    pub trained_users: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
    pub default_nums: usize,
    pub max_nums: usize,
}

/// Entry point for all three query modes
///
/// Holds the catalog and both oracles behind `Arc`s; they are never mutated,
/// so one instance serves concurrent requests without locking.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    similarity: Arc<dyn SimilarityOracle>,
    rating: Arc<dyn RatingOracle>,
    config: RecommenderConfig,
    /// Catalog ids in snapshot order, the candidate set for user queries
    product_ids: Arc<[ProductId]>,
    loaded_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("catalog_items", &self.catalog.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Recommender {
    pub fn new(
        catalog: Arc<Catalog>,
        similarity: Arc<dyn SimilarityOracle>,
        rating: Arc<dyn RatingOracle>,
        config: RecommenderConfig,
    ) -> Result<Self> {
        config.validate()?;
        let product_ids = catalog.product_ids().into();
        Ok(Self {
            catalog,
            similarity,
            rating,
            config,
            product_ids,
            loaded_at: None,
        })
    }

    /// Take ownership of artifacts loaded at startup
    pub fn from_artifacts(artifacts: Artifacts, config: RecommenderConfig) -> Result<Self> {
        let mut recommender = Self::new(
            Arc::new(artifacts.catalog),
            Arc::new(artifacts.similarity),
            Arc::new(artifacts.rating),
            config,
        )?;
        recommender.loaded_at = Some(artifacts.loaded_at);
        Ok(recommender)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Catalog record for a single product, scored 0
    pub fn item(&self, product_id: ProductId) -> Result<Record> {
        let item = self.catalog.require(product_id)?;
        Ok(Record::from_item(item, 0.0))
    }

    /// Items most similar to an existing catalog item, never including it
    pub fn recommend_by_item(&self, product_id: ProductId, nums: usize) -> Result<Vec<Record>> {
        let nums = self.config.resolve_nums(Some(nums));
        let scored = score_by_item(self.similarity.as_ref(), &self.catalog, product_id)?;
        let query = RankQuery::item(scored.exclude, scored.sub_category.as_deref(), nums);
        let ranked = rank(scored.scores, &query, &self.catalog);
        debug!(mode = "item", %product_id, nums, returned = ranked.len(), "recommendation");
        enrich(&ranked, &self.catalog)
    }

    /// Items most similar to a free-text description
    ///
    /// `stop_words` replaces the configured list for this call; `None` falls
    /// back to it.
    pub fn recommend_by_text(
        &self,
        query_text: &str,
        nums: usize,
        stop_words: Option<&StopWords>,
    ) -> Result<Vec<Record>> {
        let nums = self.config.resolve_nums(Some(nums));
        let stop_words = stop_words.or(self.config.stop_words.as_ref());
        let tokens = normalize(query_text, stop_words);
        let scores = score_by_text(self.similarity.as_ref(), &self.catalog, &tokens);
        let ranked = rank(scores, &RankQuery::text(nums), &self.catalog);
        debug!(mode = "text", tokens = tokens.len(), nums, returned = ranked.len(), "recommendation");
        enrich(&ranked, &self.catalog)
    }

    /// Items with the highest predicted rating for a user
    pub fn recommend_by_user(&self, user_id: &str, nums: usize) -> Result<Vec<Record>> {
        let nums = self.config.resolve_nums(Some(nums));
        let scores = score_for_user(self.rating.as_ref(), &self.product_ids, user_id)?;
        let ranked = rank(scores, &RankQuery::user(nums), &self.catalog);
        debug!(mode = "user", user_id, nums, returned = ranked.len(), "recommendation");
        enrich(&ranked, &self.catalog)
    }

    /// Dispatch a request that must name exactly one query mode
    pub fn recommend(&self, request: &RecommendRequest) -> Result<Vec<Record>> {
        let nums = self.config.resolve_nums(request.nums);
        match request.query()? {
            Query::Item(product_id) => self.recommend_by_item(product_id, nums),
            Query::Text(text) => self.recommend_by_text(&text, nums, None),
            Query::User(user_id) => self.recommend_by_user(&user_id, nums),
        }
    }

    pub fn stats(&self) -> RecommenderStats {
        RecommenderStats {
            catalog_items: self.catalog.len(),
            indexed_items: self.similarity.indexed_items(),
            trained_users: self.rating.user_count(),
            loaded_at: self.loaded_at,
            default_nums: self.config.default_nums,
            max_nums: self.config.max_nums,
        }
    }
}
