//! Item- and text-based scoring against a [`SimilarityOracle`]

use crate::SimilarityOracle;
use shoprank_core::{Catalog, ProductId, Result, ScoredItem};

/// Scores for an item-based query plus the context the ranking step needs
#[derive(Debug, Clone)]
pub struct ItemScores {
    pub scores: Vec<ScoredItem>,
    /// The query item; excluded from its own results
    pub exclude: ProductId,
    /// The query item's sub-category, used as a tie-break bias
    pub sub_category: Option<String>,
}

/// Score the catalog against an existing item's precomputed tokens
pub fn score_by_item<O>(oracle: &O, catalog: &Catalog, product_id: ProductId) -> Result<ItemScores>
where
    O: SimilarityOracle + ?Sized,
{
    let item = catalog.require(product_id)?;
    let scores = oracle.similarities(&item.content_processed);
    log_coverage(catalog, &scores);

    Ok(ItemScores {
        scores,
        exclude: product_id,
        sub_category: item.sub_category.clone(),
    })
}

/// Score the catalog against already normalised query tokens
///
/// No exclusion and no sub-category bias apply. An empty token sequence is a
/// valid query.
pub fn score_by_text<O>(oracle: &O, catalog: &Catalog, tokens: &[String]) -> Vec<ScoredItem>
where
    O: SimilarityOracle + ?Sized,
{
    let scores = oracle.similarities(tokens);
    log_coverage(catalog, &scores);
    scores
}

// Items the oracle did not score are simply absent from ranking
fn log_coverage(catalog: &Catalog, scores: &[ScoredItem]) {
    if tracing::enabled!(tracing::Level::DEBUG) && scores.len() != catalog.len() {
        let scored = scores.iter().filter(|s| catalog.contains(s.product_id)).count();
        tracing::debug!(
            catalog = catalog.len(),
            scored,
            unscored = catalog.len().saturating_sub(scored),
            "similarity oracle does not cover the whole catalog"
        );
    }
}
