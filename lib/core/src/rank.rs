//! Ranking engine
//!
//! Turns raw per-item scores from a scoring oracle into an ordered,
//! deduplicated top-N list. The same pipeline serves all three query modes:
//!
//! 1. Drop undefined (NaN) scores, then stable-sort descending by score.
//! 2. Remove the excluded id (the query item in item mode) and duplicates.
//! 3. Keep `OVERFETCH_FACTOR × nums` candidates.
//! 4. Remove the excluded id again.
//! 5. Re-sort by the composite key (score, same sub-category, catalog rating),
//!    each component descending. Which components apply depends on the mode.
//! 6. Truncate to `nums`.
//!
//! The engine holds no state; the catalog is only read for tie-break keys.

use crate::{Catalog, ProductId};
use ahash::AHashSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Candidates kept before tie-break re-sorting, as a multiple of `nums`
pub const OVERFETCH_FACTOR: usize = 2;

/// Which pipeline produced the scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// More like an existing catalog item
    Item,
    /// More like a free-text description
    Text,
    /// Highest predicted rating for a user
    User,
}

/// An item and its raw oracle score; higher is better
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub product_id: ProductId,
    pub score: f32,
}

impl ScoredItem {
    #[inline]
    pub fn new(product_id: impl Into<ProductId>, score: f32) -> Self {
        Self {
            product_id: product_id.into(),
            score,
        }
    }
}

/// Per-invocation ranking parameters
#[derive(Debug, Clone, Copy)]
pub struct RankQuery<'a> {
    pub mode: QueryMode,
    /// Never returned, even if the oracle scores it
    pub exclude: Option<ProductId>,
    /// Sub-category of the query item; candidates sharing it win score ties
    pub bias_sub_category: Option<&'a str>,
    pub nums: usize,
}

impl<'a> RankQuery<'a> {
    pub fn item(exclude: ProductId, bias_sub_category: Option<&'a str>, nums: usize) -> Self {
        Self {
            mode: QueryMode::Item,
            exclude: Some(exclude),
            bias_sub_category,
            nums,
        }
    }

    pub fn text(nums: usize) -> Self {
        Self {
            mode: QueryMode::Text,
            exclude: None,
            bias_sub_category: None,
            nums,
        }
    }

    pub fn user(nums: usize) -> Self {
        Self {
            mode: QueryMode::User,
            exclude: None,
            bias_sub_category: None,
            nums,
        }
    }
}

// Ord on the tuple gives lexicographic order; `None` rating sorts below any rating
type TieBreakKey = (OrderedFloat<f32>, u8, Option<OrderedFloat<f32>>);

fn tie_break_key(candidate: &ScoredItem, query: &RankQuery<'_>, catalog: &Catalog) -> TieBreakKey {
    let item = catalog.get(candidate.product_id);

    let same_category = match (query.mode, query.bias_sub_category) {
        (QueryMode::Item, Some(bias)) => {
            u8::from(item.and_then(|i| i.sub_category.as_deref()) == Some(bias))
        }
        _ => 0,
    };

    // user mode ranks on predicted ratings alone
    let rating = match query.mode {
        QueryMode::Item | QueryMode::Text => item.and_then(|i| i.rating).map(OrderedFloat),
        QueryMode::User => None,
    };

    (OrderedFloat(candidate.score), same_category, rating)
}

/// Rank scored items into at most `query.nums` results
pub fn rank(scored: Vec<ScoredItem>, query: &RankQuery<'_>, catalog: &Catalog) -> Vec<ScoredItem> {
    if query.nums == 0 {
        return Vec::new();
    }

    let mut pool: Vec<ScoredItem> = scored.into_iter().filter(|s| !s.score.is_nan()).collect();
    pool.sort_by_key(|s| Reverse(OrderedFloat(s.score)));

    if let Some(excluded) = query.exclude {
        pool.retain(|s| s.product_id != excluded);
    }
    let mut seen = AHashSet::with_capacity(pool.len());
    pool.retain(|s| seen.insert(s.product_id));

    pool.truncate(query.nums.saturating_mul(OVERFETCH_FACTOR));

    // The query item must not survive into output under any input
    if let Some(excluded) = query.exclude {
        pool.retain(|s| s.product_id != excluded);
    }

    let mut keyed: Vec<(TieBreakKey, ScoredItem)> = pool
        .into_iter()
        .map(|s| (tie_break_key(&s, query, catalog), s))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.truncate(query.nums);

    tracing::trace!(mode = ?query.mode, returned = keyed.len(), "ranked candidates");

    keyed.into_iter().map(|(_, s)| s).collect()
}
