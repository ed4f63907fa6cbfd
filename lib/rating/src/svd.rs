//! Biased matrix-factorisation rating model
//!
//! `est = μ + b_u + b_i + q_i · p_u`, clipped to the rating scale. An
//! unknown item contributes neither its bias nor its factors.

use crate::{RatingOracle, UserId};
use serde::{Deserialize, Serialize};
use shoprank_core::{Error, ProductId, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SvdData", into = "SvdData")]
pub struct SvdModel {
    global_mean: f32,
    rating_scale: (f32, f32),
    n_factors: usize,
    user_biases: Vec<f32>,
    item_biases: Vec<f32>,
    /// Row-major, `n_factors` per user
    user_factors: Vec<f32>,
    /// Row-major, `n_factors` per item
    item_factors: Vec<f32>,
    /// product id -> inner item row
    item_ids: HashMap<ProductId, usize>,
}

#[derive(Clone, Serialize, Deserialize)]
struct SvdData {
    global_mean: f32,
    rating_scale: (f32, f32),
    user_biases: Vec<f32>,
    item_biases: Vec<f32>,
    user_factors: Vec<Vec<f32>>,
    item_factors: Vec<Vec<f32>>,
    item_ids: HashMap<ProductId, usize>,
}

impl TryFrom<SvdData> for SvdModel {
    type Error = Error;

    fn try_from(data: SvdData) -> Result<Self> {
        SvdModel::new(
            data.global_mean,
            data.rating_scale,
            data.user_biases,
            data.item_biases,
            data.user_factors,
            data.item_factors,
            data.item_ids,
        )
    }
}

impl From<SvdModel> for SvdData {
    fn from(model: SvdModel) -> Self {
        let n = model.n_factors;
        // zero-factor models still carry one empty row per user and item
        let rows = |flat: &[f32], count: usize| -> Vec<Vec<f32>> {
            if n == 0 {
                vec![Vec::new(); count]
            } else {
                flat.chunks(n).map(<[f32]>::to_vec).collect()
            }
        };
        SvdData {
            global_mean: model.global_mean,
            rating_scale: model.rating_scale,
            user_factors: rows(&model.user_factors, model.user_biases.len()),
            item_factors: rows(&model.item_factors, model.item_biases.len()),
            user_biases: model.user_biases,
            item_biases: model.item_biases,
            item_ids: model.item_ids,
        }
    }
}

fn flatten(rows: Vec<Vec<f32>>, n_factors: usize, what: &str) -> Result<Vec<f32>> {
    let mut flat = Vec::with_capacity(rows.len() * n_factors);
    for (position, row) in rows.into_iter().enumerate() {
        if row.len() != n_factors {
            return Err(Error::Artifact(format!(
                "{} factor row {} has length {}, expected {}",
                what,
                position,
                row.len(),
                n_factors
            )));
        }
        flat.extend(row);
    }
    Ok(flat)
}

impl SvdModel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        global_mean: f32,
        rating_scale: (f32, f32),
        user_biases: Vec<f32>,
        item_biases: Vec<f32>,
        user_factors: Vec<Vec<f32>>,
        item_factors: Vec<Vec<f32>>,
        item_ids: HashMap<ProductId, usize>,
    ) -> Result<Self> {
        if !global_mean.is_finite() {
            return Err(Error::Artifact(format!(
                "SVD global mean {} is not finite",
                global_mean
            )));
        }
        if !rating_scale.0.is_finite() || !rating_scale.1.is_finite() {
            return Err(Error::Artifact(format!(
                "rating scale {:?} is not finite",
                rating_scale
            )));
        }
        if rating_scale.0 > rating_scale.1 {
            return Err(Error::Artifact(format!(
                "rating scale {:?} is inverted",
                rating_scale
            )));
        }
        if user_factors.len() != user_biases.len() || item_factors.len() != item_biases.len() {
            return Err(Error::Artifact(
                "SVD factor and bias counts disagree".to_string(),
            ));
        }
        if let Some((id, row)) = item_ids.iter().find(|(_, row)| **row >= item_biases.len()) {
            return Err(Error::Artifact(format!(
                "SVD item {} maps to row {} of {}",
                id,
                row,
                item_biases.len()
            )));
        }
        if u32::try_from(user_biases.len()).is_err() {
            return Err(Error::Artifact("SVD user count exceeds u32".to_string()));
        }

        let n_factors = user_factors
            .first()
            .or_else(|| item_factors.first())
            .map_or(0, Vec::len);
        let user_factors = flatten(user_factors, n_factors, "user")?;
        let item_factors = flatten(item_factors, n_factors, "item")?;

        Ok(Self {
            global_mean,
            rating_scale,
            n_factors,
            user_biases,
            item_biases,
            user_factors,
            item_factors,
            item_ids,
        })
    }

    #[inline]
    pub fn n_factors(&self) -> usize {
        self.n_factors
    }

    #[inline]
    pub fn rating_scale(&self) -> (f32, f32) {
        self.rating_scale
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_biases.len()
    }

    fn user_row(&self, user: usize) -> &[f32] {
        &self.user_factors[user * self.n_factors..(user + 1) * self.n_factors]
    }

    fn item_row(&self, item: usize) -> &[f32] {
        &self.item_factors[item * self.n_factors..(item + 1) * self.n_factors]
    }

    /// Unclipped estimate
    pub fn estimate(&self, user: UserId, item: ProductId) -> f32 {
        let u = user.get() as usize;
        let known_user = u < self.user_biases.len();
        let inner_item = self.item_ids.get(&item).copied();

        let mut est = self.global_mean;
        if known_user {
            est += self.user_biases[u];
        }
        if let Some(i) = inner_item {
            est += self.item_biases[i];
            if known_user {
                est += self
                    .user_row(u)
                    .iter()
                    .zip(self.item_row(i))
                    .map(|(p, q)| p * q)
                    .sum::<f32>();
            }
        }
        est
    }
}

impl RatingOracle for SvdModel {
    fn predict(&self, user: UserId, item: ProductId) -> f32 {
        let (low, high) = self.rating_scale;
        self.estimate(user, item).clamp(low, high)
    }

    fn user_count(&self) -> u32 {
        self.user_biases.len() as u32
    }
}
