//! Dense cosine-similarity index over catalog items in topic space

use serde::{Deserialize, Serialize};
use shoprank_core::{Error, ProductId, Result, ScoredItem, Vector};

/// Precomputed, L2-normalised topic vectors keyed by product id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "IndexData", into = "IndexData")]
pub struct SimilarityIndex {
    product_ids: Vec<ProductId>,
    vectors: Vec<Vector>,
    dim: usize,
}

#[derive(Clone, Serialize, Deserialize)]
struct IndexData {
    product_ids: Vec<ProductId>,
    vectors: Vec<Vector>,
}

impl From<SimilarityIndex> for IndexData {
    fn from(index: SimilarityIndex) -> Self {
        IndexData {
            product_ids: index.product_ids,
            vectors: index.vectors,
        }
    }
}

impl TryFrom<IndexData> for SimilarityIndex {
    type Error = Error;

    fn try_from(data: IndexData) -> Result<Self> {
        SimilarityIndex::new(data.product_ids, data.vectors)
    }
}

impl SimilarityIndex {
    /// Build an index; rows are normalised so a query is one dot product per item
    pub fn new(product_ids: Vec<ProductId>, vectors: Vec<Vector>) -> Result<Self> {
        if product_ids.len() != vectors.len() {
            return Err(Error::Artifact(format!(
                "similarity index has {} ids but {} vectors",
                product_ids.len(),
                vectors.len()
            )));
        }
        let dim = vectors.first().map_or(0, Vector::dim);
        if let Some(position) = vectors.iter().position(|v| v.dim() != dim) {
            return Err(Error::Artifact(format!(
                "similarity index row {} has dimension {}, expected {}",
                position,
                vectors[position].dim(),
                dim
            )));
        }
        let vectors = vectors.iter().map(Vector::normalized).collect();
        Ok(Self {
            product_ids,
            vectors,
            dim,
        })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    pub fn product_ids(&self) -> &[ProductId] {
        &self.product_ids
    }

    /// Cosine similarity of `query` against every indexed item, in index order
    ///
    /// A zero query scores 0 everywhere.
    pub fn query(&self, query: &Vector) -> Vec<ScoredItem> {
        let query = query.normalized();
        self.product_ids
            .iter()
            .zip(&self.vectors)
            .map(|(&id, row)| ScoredItem::new(id, row.dot(&query)))
            .collect()
    }
}
