//! Latent semantic projection from term space into topic space

use serde::{Deserialize, Serialize};
use shoprank_core::{Error, Result, SparseVector, Vector};

/// Term-topic projection matrix, one row per term id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "LsiData")]
pub struct LsiModel {
    num_topics: usize,
    projection: Vec<Vec<f32>>,
}

#[derive(Deserialize)]
struct LsiData {
    num_topics: usize,
    projection: Vec<Vec<f32>>,
}

impl TryFrom<LsiData> for LsiModel {
    type Error = Error;

    fn try_from(data: LsiData) -> Result<Self> {
        LsiModel::new(data.num_topics, data.projection)
    }
}

impl LsiModel {
    pub fn new(num_topics: usize, projection: Vec<Vec<f32>>) -> Result<Self> {
        if num_topics == 0 {
            return Err(Error::Artifact("LSI model has zero topics".to_string()));
        }
        if let Some((term, row)) = projection
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != num_topics)
        {
            return Err(Error::Artifact(format!(
                "LSI projection row {} has {} topics, expected {}",
                term,
                row.len(),
                num_topics
            )));
        }
        Ok(Self {
            num_topics,
            projection,
        })
    }

    #[inline]
    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    #[inline]
    pub fn num_terms(&self) -> usize {
        self.projection.len()
    }

    /// Σ weight(term) × projection[term]; terms outside the projection are ignored
    pub fn project(&self, weighted: &SparseVector) -> Vector {
        let mut topics = vec![0.0f32; self.num_topics];
        for (term, weight) in weighted.iter() {
            if let Some(row) = self.projection.get(term as usize) {
                for (topic, &loading) in topics.iter_mut().zip(row) {
                    *topic += weight * loading;
                }
            }
        }
        Vector::new(topics)
    }
}
