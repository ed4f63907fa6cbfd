use crate::{Dictionary, LsiModel, SimilarityIndex, TfidfModel};
use shoprank_core::{Error, Result, ScoredItem, Vector};

/// A read-only model that scores every indexed item against a token sequence
///
/// Scores are opaque reals, higher is more similar. Implementations must be
/// safe to query from many requests at once.
pub trait SimilarityOracle: Send + Sync {
    fn similarities(&self, tokens: &[String]) -> Vec<ScoredItem>;

    /// Number of items the oracle can score
    fn indexed_items(&self) -> usize;
}

/// Dictionary -> TF-IDF -> LSI -> cosine index, composed into one oracle
#[derive(Debug, Clone)]
pub struct TopicSimilarity {
    dictionary: Dictionary,
    tfidf: TfidfModel,
    lsi: LsiModel,
    index: SimilarityIndex,
}

impl TopicSimilarity {
    pub fn new(
        dictionary: Dictionary,
        tfidf: TfidfModel,
        lsi: LsiModel,
        index: SimilarityIndex,
    ) -> Result<Self> {
        if !index.is_empty() && lsi.num_topics() != index.dim() {
            return Err(Error::Artifact(format!(
                "LSI model has {} topics but the similarity index has dimension {}",
                lsi.num_topics(),
                index.dim()
            )));
        }
        if lsi.num_terms() < dictionary.len() {
            tracing::warn!(
                terms = lsi.num_terms(),
                dictionary = dictionary.len(),
                "LSI projection covers fewer terms than the dictionary"
            );
        }
        Ok(Self {
            dictionary,
            tfidf,
            lsi,
            index,
        })
    }

    /// Map tokens into topic space
    pub fn embed(&self, tokens: &[String]) -> Vector {
        let bow = self.dictionary.doc2bow(tokens);
        let weighted = self.tfidf.transform(&bow);
        self.lsi.project(&weighted)
    }

    pub fn num_topics(&self) -> usize {
        self.lsi.num_topics()
    }
}

impl SimilarityOracle for TopicSimilarity {
    fn similarities(&self, tokens: &[String]) -> Vec<ScoredItem> {
        self.index.query(&self.embed(tokens))
    }

    fn indexed_items(&self) -> usize {
        self.index.len()
    }
}
