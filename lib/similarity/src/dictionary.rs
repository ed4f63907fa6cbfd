//! Token dictionary (token <-> integer id)

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use shoprank_core::SparseVector;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionary {
    token2id: AHashMap<String, u32>,
    /// token id -> number of training documents containing it
    #[serde(default)]
    dfs: AHashMap<u32, u32>,
    #[serde(default)]
    num_docs: u64,
}

impl Dictionary {
    /// Build a dictionary from a corpus, assigning ids in first-seen order
    pub fn from_documents<D, T>(documents: D) -> Self
    where
        D: IntoIterator<Item = T>,
        T: AsRef<[String]>,
    {
        let mut dictionary = Self::default();
        for document in documents {
            let mut seen = ahash::AHashSet::new();
            for token in document.as_ref() {
                let next_id = dictionary.token2id.len() as u32;
                let id = *dictionary.token2id.entry(token.clone()).or_insert(next_id);
                if seen.insert(id) {
                    *dictionary.dfs.entry(id).or_insert(0) += 1;
                }
            }
            dictionary.num_docs += 1;
        }
        dictionary
    }

    #[inline]
    pub fn token_id(&self, token: &str) -> Option<u32> {
        self.token2id.get(token).copied()
    }

    #[inline]
    pub fn doc_freq(&self, id: u32) -> Option<u32> {
        self.dfs.get(&id).copied()
    }

    #[inline]
    pub fn num_docs(&self) -> u64 {
        self.num_docs
    }

    /// Bag of words: occurrence counts of known tokens; unknown tokens are ignored
    pub fn doc2bow(&self, tokens: &[String]) -> SparseVector {
        let mut counts: AHashMap<u32, f32> = AHashMap::new();
        for token in tokens {
            if let Some(id) = self.token_id(token) {
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
        }
        SparseVector::new(counts.into_iter().collect())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.token2id.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token2id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TfidfModel;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_from_documents() {
        let dictionary = Dictionary::from_documents([
            tokens(&["áo", "thun", "áo"]),
            tokens(&["quần", "thun"]),
        ]);
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.num_docs(), 2);
        assert_eq!(dictionary.token_id("áo"), Some(0));
        assert_eq!(dictionary.doc_freq(dictionary.token_id("thun").unwrap()), Some(2));
        assert_eq!(dictionary.doc_freq(0), Some(1));
    }

    #[test]
    fn test_doc2bow_counts_known_tokens() {
        let dictionary = Dictionary::from_documents([tokens(&["a", "b", "c"])]);
        let bow = dictionary.doc2bow(&tokens(&["c", "a", "zzz", "c"]));
        assert_eq!(bow.entries(), &[(0, 1.0), (2, 2.0)]);
        assert!(dictionary.doc2bow(&[]).is_empty());
    }

    #[test]
    fn test_deserialize_integer_keyed_stats() {
        let dictionary: Dictionary = serde_json::from_str(
            r#"{"token2id": {"áo": 0, "thun": 1}, "dfs": {"0": 3, "1": 1}, "num_docs": 4}"#,
        )
        .unwrap();
        assert_eq!(dictionary.token_id("thun"), Some(1));
        assert_eq!(dictionary.doc_freq(0), Some(3));
        assert_eq!(dictionary.num_docs(), 4);

        let tfidf = TfidfModel::from_dictionary(&dictionary);
        assert!((tfidf.idf(1).unwrap() - 2.0).abs() < 1e-6);
    }
}
