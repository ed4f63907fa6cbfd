use crate::UserId;
use shoprank_core::ProductId;

/// A read-only collaborative-filtering model
///
/// Predictions for different items are independent, so callers may query
/// them in any order or in parallel.
pub trait RatingOracle: Send + Sync {
    /// Estimated rating of `item` by `user`
    fn predict(&self, user: UserId, item: ProductId) -> f32;

    /// Users are trained on ids `0..user_count()`
    fn user_count(&self) -> u32;
}
