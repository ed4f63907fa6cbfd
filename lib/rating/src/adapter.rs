//! Per-user rating prediction over candidate items

use crate::{RatingOracle, UserId};
use rayon::prelude::*;
use shoprank_core::{ProductId, Result, ScoredItem};

/// Predict a rating for every candidate product
///
/// `user_id` is raw user input and is validated against the oracle's
/// trained range first. No candidates are excluded; the user's own history
/// stays eligible.
pub fn score_for_user<O>(oracle: &O, product_ids: &[ProductId], user_id: &str) -> Result<Vec<ScoredItem>>
where
    O: RatingOracle + ?Sized,
{
    let user = match UserId::parse(user_id, oracle.user_count()) {
        Ok(user) => user,
        Err(e) => {
            tracing::debug!(user_id, trained_users = oracle.user_count(), "rejected user id");
            return Err(e);
        }
    };
    tracing::debug!(%user, candidates = product_ids.len(), "predicting ratings");
    Ok(predict_all(oracle, product_ids, user))
}

/// Predictions for an already validated user, one per product in input order
pub fn predict_all<O>(oracle: &O, product_ids: &[ProductId], user: UserId) -> Vec<ScoredItem>
where
    O: RatingOracle + ?Sized,
{
    product_ids
        .par_iter()
        .map(|&id| ScoredItem::new(id, oracle.predict(user, id)))
        .collect()
}
