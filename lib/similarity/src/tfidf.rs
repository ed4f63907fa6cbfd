//! TF-IDF term weighting

use crate::Dictionary;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use shoprank_core::SparseVector;

fn default_normalize() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TfidfModel {
    idfs: AHashMap<u32, f32>,
    #[serde(default = "default_normalize")]
    normalize: bool,
}

impl TfidfModel {
    pub fn new(idfs: AHashMap<u32, f32>, normalize: bool) -> Self {
        Self { idfs, normalize }
    }

    /// idf = log2(num_docs / df), computed from dictionary statistics
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        let num_docs = dictionary.num_docs() as f32;
        let idfs = (0..dictionary.len() as u32)
            .filter_map(|id| {
                dictionary
                    .doc_freq(id)
                    .filter(|&df| df > 0)
                    .map(|df| (id, (num_docs / df as f32).log2()))
            })
            .collect();
        Self {
            idfs,
            normalize: true,
        }
    }

    #[inline]
    pub fn idf(&self, id: u32) -> Option<f32> {
        self.idfs.get(&id).copied()
    }

    /// Weight a bag of words; terms without an idf or with zero weight are dropped
    pub fn transform(&self, bow: &SparseVector) -> SparseVector {
        let weighted: Vec<(u32, f32)> = bow
            .iter()
            .filter_map(|(id, tf)| self.idf(id).map(|idf| (id, tf * idf)))
            .filter(|&(_, w)| w != 0.0)
            .collect();
        let mut vector = SparseVector::new(weighted);
        if self.normalize {
            vector.normalize();
        }
        vector
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.idfs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.idfs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ubiquitous_terms_vanish() {
        let docs: Vec<Vec<String>> = vec![
            vec!["shop".into(), "áo".into()],
            vec!["shop".into(), "quần".into()],
        ];
        let dictionary = Dictionary::from_documents(&docs);
        let tfidf = TfidfModel::from_dictionary(&dictionary);

        // "shop" appears everywhere: idf = log2(2/2) = 0
        let bow = dictionary.doc2bow(&docs[0]);
        let weighted = tfidf.transform(&bow);
        assert_eq!(weighted.len(), 1);
        assert_eq!(weighted.entries()[0].0, dictionary.token_id("áo").unwrap());
        assert!((weighted.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_unnormalized_weights() {
        let tfidf = TfidfModel::new([(0, 2.0), (1, 0.5)].into_iter().collect(), false);
        let weighted = tfidf.transform(&SparseVector::new(vec![(0, 3.0), (1, 1.0), (7, 4.0)]));
        assert_eq!(weighted.entries(), &[(0, 6.0), (1, 0.5)]);
    }
}
